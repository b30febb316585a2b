//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction that allows
//! for different output styles. The default implementation uses ANSI
//! escape codes to distinguish the assistant's turns from the prompt.

use std::io::{self, Stdout, Write};

/// ANSI escape code for bold text (used for the assistant prefix).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for cyan text (used for assistant output).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for dim text (used for the waiting indicator).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Clears the current terminal line.
const ANSI_CLEAR_LINE: &str = "\r\x1b[2K";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Recording sinks for tests
pub trait Renderer {
    /// Called once before an assistant turn is rendered.
    ///
    /// Prints the role-tagged prefix naming the model and system prompt,
    /// plus the indent that visually separates the first fragment from the
    /// user's input.
    fn begin_turn(&mut self, model: &str, prompt_name: &str);

    /// Print a chunk of response text.
    ///
    /// This is called incrementally as fragments are streamed from the API.
    fn print_text(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Show a transient indication that a response is awaited.
    fn begin_waiting(&mut self, text: &str);

    /// Clear the waiting indication.
    fn end_waiting(&mut self);

    /// Called when a response is complete.
    ///
    /// Used to ensure proper newlines after streaming.
    fn finish_response(&mut self);
}

/// Plain text renderer with optional ANSI styling.
///
/// Outputs directly to stdout, flushing after every fragment so streamed
/// text appears the moment it arrives.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    waiting: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with the specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            waiting: false,
        }
    }

    /// Flushes stdout to ensure immediate display of streamed content.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn begin_turn(&mut self, model: &str, prompt_name: &str) {
        if self.use_color {
            print!(
                "\n{ANSI_BOLD}{ANSI_CYAN}Assistant({model}, system_prompt={prompt_name}):{ANSI_RESET}\n{ANSI_CYAN}    "
            );
        } else {
            print!("\nAssistant({model}, system_prompt={prompt_name}):\n    ");
        }
        self.flush();
    }

    fn print_text(&mut self, text: &str) {
        print!("{text}");
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("\n{ANSI_RED}Error: {error}{ANSI_RESET}");
        } else {
            eprintln!("\nError: {error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
    }

    fn begin_waiting(&mut self, text: &str) {
        // Control sequences are unwelcome in piped output.
        if !self.use_color {
            return;
        }
        print!("{ANSI_DIM}{text}{ANSI_RESET}");
        self.waiting = true;
        self.flush();
    }

    fn end_waiting(&mut self) {
        if self.waiting {
            print!("{ANSI_CLEAR_LINE}");
            self.waiting = false;
            self.flush();
        }
    }

    fn finish_response(&mut self) {
        if self.use_color {
            print!("{ANSI_RESET}");
        }
        println!();
        self.flush();
    }
}
