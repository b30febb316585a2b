use serde::{Deserialize, Serialize};

use crate::types::MessageRole;

/// An assistant reply as it appears on the wire.
///
/// Both fields are optional: a payload that omits either parses cleanly but
/// fails validation downstream, rather than being partially trusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResponseMessage {
    /// The role of the message, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MessageRole>,

    /// The content of the message, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ResponseMessage {
    /// Create a well-formed assistant `ResponseMessage` with the given content.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Some(MessageRole::Assistant),
            content: Some(content.into()),
        }
    }
}

/// One candidate completion within a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatChoice {
    /// The message for this choice.
    pub message: ResponseMessage,

    /// Why generation stopped, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// A complete (non-streaming) chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletion {
    /// The candidate completions; the service returns at least one.
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletion {
    /// Returns the text of the first choice, if the response carried any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
