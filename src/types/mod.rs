// Public modules
pub mod chat_completion;
pub mod chat_completion_chunk;
pub mod chat_completion_params;
pub mod chat_message;

// Re-exports
pub use chat_completion::{ChatChoice, ChatCompletion, ResponseMessage};
pub use chat_completion_chunk::{ChatCompletionChunk, ChunkChoice, MessageDelta};
pub use chat_completion_params::ChatCompletionParams;
pub use chat_message::{ChatMessage, MessageRole};
