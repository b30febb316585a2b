//! Chat application module for interactive conversations with the service.
//!
//! This module provides a streaming REPL chat interface built on top of the
//! tgpt client library. It supports:
//!
//! - Streaming responses with real-time token display
//! - ANSI-styled output with a role-tagged assistant prefix
//! - `exit`, `.verify <path>` and `.rewrite <path>` commands
//! - Configurable model and system prompt
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`transcript`]: the append-only conversation transcript
//! - [`commands`]: input classification for the session loop
//! - [`stream`]: folds a fragment stream into one assistant turn
//! - [`session`]: core chat session management and API interaction
//! - [`render`]: terminal output

mod commands;
mod config;
mod prompts;
mod render;
mod session;
mod stream;
mod transcript;

pub use commands::{ReplCommand, parse_command};
pub use config::{ChatArgs, ChatConfig, SystemPrompt};
pub use prompts::{DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, REWRITE_CODE_PROMPT, VERIFY_CODE_PROMPT};
pub use render::{PlainTextRenderer, Renderer};
pub use session::ChatSession;
pub use stream::fold_stream;
pub use transcript::Transcript;
