use serde::{Deserialize, Serialize};

use crate::types::ChatMessage;

/// Parameters for a chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionParams {
    /// The model that will complete the prompt.
    pub model: String,

    /// The ordered conversation context.
    pub messages: Vec<ChatMessage>,

    /// Whether to stream the response incrementally.
    pub stream: bool,

    /// The maximum number of tokens to generate, if limited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// The sampling temperature, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatCompletionParams {
    /// Create new non-streaming parameters for the given model and context.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Create new streaming parameters for the given model and context.
    pub fn new_streaming(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            stream: true,
            ..Self::new(model, messages)
        }
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
