//! The append-only conversation transcript.
//!
//! The transcript is the literal context sent to the service on every
//! request, so its shape is guarded here: the system message is always
//! first, messages are never edited or removed, and malformed assistant
//! payloads are dropped before they can corrupt the ordering.

use crate::chat::config::SystemPrompt;
use crate::types::{ChatMessage, ResponseMessage};

/// Ordered, append-only conversational memory for one session.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates a transcript holding only the system message.
    pub fn new(system_prompt: &SystemPrompt) -> Self {
        Self::with_initial_messages(system_prompt, Vec::new())
    }

    /// Creates a transcript seeded with extra messages after the system
    /// message. The seed is passed explicitly per call; there is no shared
    /// default.
    pub fn with_initial_messages(system_prompt: &SystemPrompt, initial: Vec<ChatMessage>) -> Self {
        let mut messages = Vec::with_capacity(initial.len() + 1);
        messages.push(ChatMessage::system(system_prompt.prompt.clone()));
        messages.extend(initial);
        Self { messages }
    }

    /// Appends a user turn. Any text is accepted, including empty.
    pub fn append_user(&mut self, text: &str) {
        self.messages.push(ChatMessage::user(text));
    }

    /// Appends an assistant turn if the candidate is well formed.
    ///
    /// A candidate missing its role or content is dropped silently; a
    /// half-trusted message must never enter the context.
    pub fn append_assistant(&mut self, candidate: ResponseMessage) {
        let (Some(role), Some(content)) = (candidate.role, candidate.content) else {
            return;
        };
        self.messages.push(ChatMessage::new(role, content));
    }

    /// Returns the full ordered message sequence, used verbatim as the
    /// context for the next request. No truncation or windowing.
    pub fn as_request_context(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages in the transcript.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    fn prompt() -> SystemPrompt {
        SystemPrompt::new("test", "Be terse.")
    }

    #[test]
    fn system_message_is_first() {
        let transcript = Transcript::new(&prompt());
        let context = transcript.as_request_context();
        assert_eq!(context.len(), 1);
        assert_eq!(context[0].role, MessageRole::System);
        assert_eq!(context[0].content, "Be terse.");
    }

    #[test]
    fn system_message_survives_appends() {
        let mut transcript = Transcript::new(&prompt());
        transcript.append_user("hello");
        transcript.append_assistant(ResponseMessage::assistant("hi"));
        transcript.append_user("more");

        let context = transcript.as_request_context();
        assert_eq!(context[0].role, MessageRole::System);
        assert_eq!(context[0].content, "Be terse.");
    }

    #[test]
    fn appends_grow_in_order() {
        let mut transcript = Transcript::new(&prompt());
        transcript.append_user("question");
        transcript.append_assistant(ResponseMessage::assistant("answer"));

        let context = transcript.as_request_context();
        assert_eq!(context.len(), 3);
        assert_eq!(context[1].role, MessageRole::User);
        assert_eq!(context[1].content, "question");
        assert_eq!(context[2].role, MessageRole::Assistant);
        assert_eq!(context[2].content, "answer");
    }

    #[test]
    fn earlier_messages_never_change() {
        let mut transcript = Transcript::new(&prompt());
        transcript.append_user("first");
        let before = transcript.as_request_context().to_vec();

        transcript.append_assistant(ResponseMessage::assistant("reply"));
        transcript.append_user("second");

        let after = transcript.as_request_context();
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn empty_user_text_is_accepted() {
        let mut transcript = Transcript::new(&prompt());
        transcript.append_user("");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.as_request_context()[1].content, "");
    }

    #[test]
    fn malformed_assistant_messages_are_dropped() {
        let mut transcript = Transcript::new(&prompt());

        transcript.append_assistant(ResponseMessage::default());
        assert_eq!(transcript.len(), 1);

        transcript.append_assistant(ResponseMessage {
            role: Some(MessageRole::Assistant),
            content: None,
        });
        assert_eq!(transcript.len(), 1);

        transcript.append_assistant(ResponseMessage {
            role: None,
            content: Some("x".to_string()),
        });
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn with_initial_messages_seeds_after_system() {
        let seed = vec![ChatMessage::user("prior"), ChatMessage::assistant("turn")];
        let transcript = Transcript::with_initial_messages(&prompt(), seed);

        let context = transcript.as_request_context();
        assert_eq!(context.len(), 3);
        assert_eq!(context[0].role, MessageRole::System);
        assert_eq!(context[1].content, "prior");
        assert_eq!(context[2].content, "turn");
    }
}
