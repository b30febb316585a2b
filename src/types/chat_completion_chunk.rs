use serde::{Deserialize, Serialize};

use crate::types::MessageRole;

/// The incremental payload of one streamed event.
///
/// The first chunk of a stream usually carries only the role, and the final
/// chunk carries neither field; both map to an empty text fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageDelta {
    /// The role of the message being produced, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MessageRole>,

    /// The text fragment, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// One candidate completion within a streamed event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkChoice {
    /// The delta for this choice.
    pub delta: MessageDelta,

    /// Why generation stopped, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// One event in a streaming chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionChunk {
    /// The candidate completions for this event.
    pub choices: Vec<ChunkChoice>,
}

impl ChatCompletionChunk {
    /// Returns the text fragment carried by this chunk.
    ///
    /// Chunks without content (role-only or finish chunks) yield an empty
    /// fragment, which keeps the fragment accounting uniform downstream.
    pub fn delta_text(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_chunk() {
        let chunk: ChatCompletionChunk = serde_json::from_value(json!({
            "choices": [{"delta": {"content": "Hel"}}]
        }))
        .unwrap();
        assert_eq!(chunk.delta_text(), "Hel");
    }

    #[test]
    fn role_only_chunk_is_empty_fragment() {
        let chunk: ChatCompletionChunk = serde_json::from_value(json!({
            "choices": [{"delta": {"role": "assistant"}}]
        }))
        .unwrap();
        assert_eq!(chunk.delta_text(), "");
        assert_eq!(chunk.choices[0].delta.role, Some(MessageRole::Assistant));
    }

    #[test]
    fn finish_chunk_is_empty_fragment() {
        let chunk: ChatCompletionChunk = serde_json::from_value(json!({
            "choices": [{"delta": {}, "finish_reason": "stop"}]
        }))
        .unwrap();
        assert_eq!(chunk.delta_text(), "");
        assert_eq!(chunk.choices[0].finish_reason.as_deref(), Some("stop"));
    }
}
