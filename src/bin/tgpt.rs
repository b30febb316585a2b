//! Interactive terminal client for a chat completion service.
//!
//! This binary provides a streaming REPL interface for conversing with a
//! model, plus two one-shot commands that repurpose the same backend for
//! source-file tasks.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! tgpt
//!
//! # Specify a model
//! tgpt --model gpt-3.5-turbo
//!
//! # Override the system prompt
//! tgpt --system "You are a helpful coding assistant"
//!
//! # Disable colors (useful for piping output)
//! tgpt --no-color
//! ```
//!
//! # Commands
//!
//! While chatting:
//! - `exit` - Exit the application
//! - `.verify <path>` - Review the source file at `<path>`
//! - `.rewrite <path>` - Rewrite the file, saving to `<path>.draft`
//! - anything else is sent as a chat turn
//!
//! The service credential is read from the `OPENAI_API_KEY` environment
//! variable; a missing credential surfaces on the first request.

use std::path::Path;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use tgpt::OpenAi;
use tgpt::chat::{
    ChatArgs, ChatConfig, ChatSession, PlainTextRenderer, Renderer, ReplCommand, parse_command,
};

/// Main entry point for the tgpt application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("tgpt [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let client = OpenAi::new(None)?;
    let mut session = ChatSession::new(client, config)?;
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("tgpt (model: {})", session.model());
    println!("Type 'exit' to quit, '.verify <file>' or '.rewrite <file>' for one-shot tasks\n");

    loop {
        let readline = rl.readline("User: ");

        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                match parse_command(&line) {
                    ReplCommand::Exit => {
                        println!("Goodbye!");
                        break;
                    }
                    ReplCommand::Verify(path) => {
                        match session.verify(Path::new(&path), &mut renderer).await {
                            Ok(report) => {
                                renderer.begin_turn(session.model(), "verify");
                                renderer.print_text(&report);
                                renderer.finish_response();
                            }
                            Err(e) => renderer.print_error(&e.to_string()),
                        }
                    }
                    ReplCommand::Rewrite(path) => {
                        match session.rewrite(Path::new(&path), &mut renderer).await {
                            Ok(draft) => {
                                renderer.begin_turn(session.model(), "rewrite");
                                renderer.print_text(&format!(
                                    "I've rewritten the code for you to the file {}",
                                    draft.display()
                                ));
                                renderer.finish_response();
                            }
                            Err(e) => renderer.print_error(&e.to_string()),
                        }
                    }
                    ReplCommand::Invalid(message) => {
                        renderer.print_error(&message);
                    }
                    ReplCommand::Chat(text) => {
                        if let Err(e) = session.send_streaming(&text, &mut renderer).await {
                            renderer.print_error(&e.to_string());
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}
