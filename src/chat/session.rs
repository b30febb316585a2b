//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the
//! conversation transcript and the completion client, and drives both the
//! streaming chat turns and the one-shot `.verify`/`.rewrite` calls.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use futures::StreamExt;

use crate::chat::config::ChatConfig;
use crate::chat::prompts::{REWRITE_CODE_PROMPT, VERIFY_CODE_PROMPT};
use crate::chat::render::Renderer;
use crate::chat::stream::fold_stream;
use crate::chat::transcript::Transcript;
use crate::client::OpenAi;
use crate::error::{Error, Result};
use crate::types::{ChatCompletionParams, ChatMessage};

/// Waiting text for streaming requests.
const STREAM_WAIT: &str = "Getting ready to stream...";

/// Waiting text for batch requests.
const BATCH_WAIT: &str = "Responding in batch. More of a waterfall and less of a stream.";

/// A chat session that manages conversation state and API interactions.
///
/// The session maintains the transcript for chat turns; the one-shot
/// verify and rewrite calls go straight to the batch endpoint and never
/// read or write the transcript.
#[derive(Debug)]
pub struct ChatSession {
    client: OpenAi,
    config: ChatConfig,
    transcript: Transcript,
}

impl ChatSession {
    /// Creates a new chat session with the given client and configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration carries an empty
    /// system prompt or model; a session never starts without both.
    pub fn new(client: OpenAi, config: ChatConfig) -> Result<Self> {
        config.validate()?;
        let transcript = Transcript::new(&config.system_prompt);
        Ok(Self {
            client,
            config,
            transcript,
        })
    }

    /// Returns the current model.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Returns the session transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Sends a user message and streams the response.
    ///
    /// This method:
    /// 1. Adds the user message to the transcript
    /// 2. Sends a streaming request with the full transcript as context
    /// 3. Renders fragments as they arrive
    /// 4. Folds the fragments into one assistant message on the transcript
    ///
    /// On failure the user message stays recorded and no assistant message
    /// is appended; the next turn proceeds from there.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn send_streaming(
        &mut self,
        user_input: &str,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        self.transcript.append_user(user_input);

        let params = self.params(self.transcript.as_request_context().to_vec());

        renderer.begin_waiting(STREAM_WAIT);
        let chunks = self.client.stream(params).await;
        renderer.end_waiting();
        let chunks = chunks?;

        let fragments = chunks.map(|chunk| chunk.map(|chunk| chunk.delta_text().to_string()));

        renderer.begin_turn(&self.config.model, &self.config.system_prompt.name);
        let outcome = fold_stream(fragments, &mut self.transcript, renderer).await;
        renderer.finish_response();
        outcome
    }

    /// Verifies the source file at `path` against the fixed verification
    /// instruction and returns the service's report.
    ///
    /// The request carries a single user message; the session transcript is
    /// untouched.
    pub async fn verify(&self, path: &Path, renderer: &mut dyn Renderer) -> Result<String> {
        let code = read_source(path)?;
        self.one_shot(verify_prompt(&code), renderer).await
    }

    /// Rewrites the source file at `path` and writes the cleaned result to
    /// a sibling draft file, returning its path.
    ///
    /// The original file is never modified; a faulty rewrite cannot destroy
    /// the source.
    pub async fn rewrite(&self, path: &Path, renderer: &mut dyn Renderer) -> Result<PathBuf> {
        let code = read_source(path)?;
        let reply = self.one_shot(rewrite_prompt(&code), renderer).await?;
        write_draft(path, &reply)
    }

    /// Sends one user message to the batch endpoint and returns the reply
    /// text.
    async fn one_shot(&self, prompt: String, renderer: &mut dyn Renderer) -> Result<String> {
        let params = self.params(vec![ChatMessage::user(prompt)]);

        renderer.begin_waiting(BATCH_WAIT);
        let completion = self.client.complete(params).await;
        renderer.end_waiting();

        completion?
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::serialization("response carried no message content", None)
            })
    }

    fn params(&self, messages: Vec<ChatMessage>) -> ChatCompletionParams {
        let mut params = ChatCompletionParams::new(&self.config.model, messages);
        params.max_tokens = self.config.max_tokens;
        params.temperature = self.config.temperature;
        params
    }
}

/// Builds the one-shot prompt for a `.verify` command.
fn verify_prompt(code: &str) -> String {
    format!("{VERIFY_CODE_PROMPT}{code}")
}

/// Builds the one-shot prompt for a `.rewrite` command.
fn rewrite_prompt(code: &str) -> String {
    format!("{REWRITE_CODE_PROMPT}{code}")
}

/// Reads the source file named in a `.verify`/`.rewrite` command.
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|err| Error::io(format!("failed to read {}", path.display()), err))
}

/// Derives the sibling draft path for a rewrite: `<path>.draft`.
fn draft_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".draft");
    PathBuf::from(name)
}

/// Strips the code-fence markup the service may wrap a rewrite in and
/// writes the cleaned text to the sibling draft file.
fn write_draft(path: &Path, reply: &str) -> Result<PathBuf> {
    let cleaned = strip_code_fences(reply);
    let draft = draft_path(path);
    fs::write(&draft, cleaned)
        .map_err(|err| Error::io(format!("failed to write {}", draft.display()), err))?;
    Ok(draft)
}

/// Removes code-fence lines from the service's reply.
///
/// Fence lines (``` with or without a language tag) are dropped wholesale;
/// inline backticks inside the code are left alone.
fn strip_code_fences(text: &str) -> String {
    let mut cleaned: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') && !cleaned.is_empty() {
        cleaned.push('\n');
    }
    cleaned
}
