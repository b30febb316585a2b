//! Folds a streamed response into a single assistant turn.
//!
//! Fragments are re-emitted to the renderer the moment they arrive and
//! simultaneously accumulated; when the stream ends the accumulated text is
//! appended to the transcript as one assistant message.

use futures::{Stream, StreamExt, pin_mut};

use crate::chat::render::Renderer;
use crate::chat::transcript::Transcript;
use crate::error::Result;
use crate::types::ResponseMessage;

/// Drives a fragment stream to completion.
///
/// Each fragment is forwarded to the renderer without buffering, including
/// empty ones. On exhaustion a single assistant message holding the
/// concatenated fragments is appended to the transcript; a stream that
/// yields no fragments still appends an empty assistant message so the turn
/// is recorded. A fragment-level error aborts the fold and appends nothing.
///
/// # Example
///
/// ```
/// use futures::stream;
/// use tgpt::chat::{PlainTextRenderer, SystemPrompt, Transcript, fold_stream};
///
/// # tokio_test::block_on(async {
/// let mut transcript = Transcript::new(&SystemPrompt::helpful_assistant());
/// let mut renderer = PlainTextRenderer::with_color(false);
/// let fragments: Vec<tgpt::Result<String>> =
///     vec![Ok("Hello, ".to_string()), Ok("world".to_string())];
///
/// fold_stream(stream::iter(fragments), &mut transcript, &mut renderer)
///     .await
///     .unwrap();
///
/// let context = transcript.as_request_context();
/// assert_eq!(context[1].content, "Hello, world");
/// # })
/// ```
pub async fn fold_stream<S>(
    fragments: S,
    transcript: &mut Transcript,
    renderer: &mut dyn Renderer,
) -> Result<()>
where
    S: Stream<Item = Result<String>>,
{
    pin_mut!(fragments);

    let mut accumulated = String::new();
    while let Some(fragment) = fragments.next().await {
        let fragment = fragment?;
        renderer.print_text(&fragment);
        accumulated.push_str(&fragment);
    }

    transcript.append_assistant(ResponseMessage::assistant(accumulated));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::config::SystemPrompt;
    use crate::error::Error;
    use crate::types::MessageRole;
    use futures::stream::iter;

    /// Renderer that records every emission for inspection.
    #[derive(Default)]
    struct RecordingRenderer {
        emitted: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn begin_turn(&mut self, _model: &str, _prompt_name: &str) {}
        fn print_text(&mut self, text: &str) {
            self.emitted.push(text.to_string());
        }
        fn print_error(&mut self, _error: &str) {}
        fn print_info(&mut self, _info: &str) {}
        fn begin_waiting(&mut self, _text: &str) {}
        fn end_waiting(&mut self) {}
        fn finish_response(&mut self) {}
    }

    fn transcript() -> Transcript {
        Transcript::new(&SystemPrompt::new("test", "Be terse."))
    }

    #[tokio::test]
    async fn fold_emits_fragments_in_order_and_appends_once() {
        let fragments = iter(vec![
            Ok("Hel".to_string()),
            Ok("lo, ".to_string()),
            Ok("world".to_string()),
        ]);
        let mut transcript = transcript();
        let mut renderer = RecordingRenderer::default();

        fold_stream(fragments, &mut transcript, &mut renderer)
            .await
            .unwrap();

        assert_eq!(renderer.emitted, vec!["Hel", "lo, ", "world"]);
        let context = transcript.as_request_context();
        assert_eq!(context.len(), 2);
        assert_eq!(context[1].role, MessageRole::Assistant);
        assert_eq!(context[1].content, "Hello, world");
    }

    #[tokio::test]
    async fn empty_fragments_are_still_forwarded() {
        let fragments = iter(vec![
            Ok("".to_string()),
            Ok("a".to_string()),
            Ok("".to_string()),
        ]);
        let mut transcript = transcript();
        let mut renderer = RecordingRenderer::default();

        fold_stream(fragments, &mut transcript, &mut renderer)
            .await
            .unwrap();

        assert_eq!(renderer.emitted, vec!["", "a", ""]);
        assert_eq!(transcript.as_request_context()[1].content, "a");
    }

    #[tokio::test]
    async fn empty_stream_appends_empty_assistant_message() {
        let fragments = iter(Vec::<Result<String>>::new());
        let mut transcript = transcript();
        let mut renderer = RecordingRenderer::default();

        fold_stream(fragments, &mut transcript, &mut renderer)
            .await
            .unwrap();

        assert!(renderer.emitted.is_empty());
        let context = transcript.as_request_context();
        assert_eq!(context.len(), 2);
        assert_eq!(context[1].role, MessageRole::Assistant);
        assert_eq!(context[1].content, "");
    }

    #[tokio::test]
    async fn mid_stream_error_appends_nothing() {
        let fragments = iter(vec![
            Ok("partial".to_string()),
            Err(Error::rate_limit("quota exhausted", None)),
        ]);
        let mut transcript = transcript();
        transcript.append_user("question");
        let mut renderer = RecordingRenderer::default();

        let result = fold_stream(fragments, &mut transcript, &mut renderer).await;

        assert!(result.unwrap_err().is_rate_limit());
        // The user turn stays recorded; no assistant message was appended.
        let context = transcript.as_request_context();
        assert_eq!(context.len(), 2);
        assert_eq!(context[1].role, MessageRole::User);
    }
}
