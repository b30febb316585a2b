//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use arrrg_derive::CommandLine;

use crate::chat::prompts::{DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_SYSTEM_PROMPT_NAME};
use crate::error::{Error, Result};

/// Command-line arguments for the tgpt tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gpt-4)", "MODEL")]
    pub model: Option<String>,

    /// System prompt to set context for the conversation.
    #[arrrg(optional, "Override the system prompt text", "PROMPT")]
    pub system: Option<String>,

    /// Maximum tokens per response.
    #[arrrg(optional, "Max tokens per response (default: service-defined)", "TOKENS")]
    pub max_tokens: Option<u32>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// A named system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    /// Short name shown in the assistant prefix.
    pub name: String,

    /// The prompt text itself.
    pub prompt: String,
}

impl SystemPrompt {
    /// Creates a named system prompt.
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
        }
    }

    /// The built-in default prompt.
    pub fn helpful_assistant() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT_NAME, DEFAULT_SYSTEM_PROMPT)
    }
}

impl Default for SystemPrompt {
    fn default() -> Self {
        Self::helpful_assistant()
    }
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults. It is immutable for
/// the session's lifetime.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: String,

    /// The system prompt applied to the session.
    pub system_prompt: SystemPrompt,

    /// Maximum tokens per response, if limited.
    pub max_tokens: Option<u32>,

    /// Sampling temperature, if overridden.
    pub temperature: Option<f32>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gpt-4
    /// - System prompt: the built-in helpful_assistant prompt
    /// - Max tokens: service-defined
    /// - Temperature: service-defined
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: SystemPrompt::helpful_assistant(),
            max_tokens: None,
            temperature: None,
            use_color: true,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: SystemPrompt) -> Self {
        self.system_prompt = prompt;
        self
    }

    /// Sets the maximum tokens per response.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Checks that the configuration can start a session.
    ///
    /// A session must always carry a defined, non-empty system prompt;
    /// startup is rejected otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.system_prompt.prompt.trim().is_empty() {
            return Err(Error::validation(
                "system prompt must not be empty",
                Some("system".to_string()),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(Error::validation(
                "model must not be empty",
                Some("model".to_string()),
            ));
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let system_prompt = match args.system {
            Some(prompt) => SystemPrompt::new("custom", prompt),
            None => SystemPrompt::helpful_assistant(),
        };

        ChatConfig {
            model: args.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            system_prompt,
            max_tokens: args.max_tokens,
            temperature: None,
            use_color: !args.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.system_prompt.name, "helpful_assistant");
        assert!(config.max_tokens.is_none());
        assert!(config.temperature.is_none());
        assert!(config.use_color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(args);
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.system_prompt, SystemPrompt::helpful_assistant());
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            model: Some("gpt-3.5-turbo".to_string()),
            system: Some("You are a pirate.".to_string()),
            max_tokens: Some(512),
            no_color: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.system_prompt.name, "custom");
        assert_eq!(config.system_prompt.prompt, "You are a pirate.");
        assert_eq!(config.max_tokens, Some(512));
        assert!(!config.use_color);
    }

    #[test]
    fn empty_system_prompt_is_rejected() {
        let config =
            ChatConfig::new().with_system_prompt(SystemPrompt::new("custom", "   "));
        let err = config.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn empty_model_is_rejected() {
        let config = ChatConfig::new().with_model("");
        assert!(config.validate().unwrap_err().is_validation());
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_model("gpt-4-turbo")
            .with_system_prompt(SystemPrompt::new("terse", "Be terse."))
            .with_max_tokens(2048)
            .with_temperature(0.6)
            .without_color();

        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.system_prompt.prompt, "Be terse.");
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.temperature, Some(0.6));
        assert!(!config.use_color);
    }
}
