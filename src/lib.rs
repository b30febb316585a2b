// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod types;

// Re-exports
pub use client::OpenAi;
pub use error::{Error, Result};
pub use types::*;
