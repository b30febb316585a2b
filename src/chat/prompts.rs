//! Fixed prompt text for the chat application.

/// Model used when none is supplied on the command line.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Name of the built-in system prompt.
pub const DEFAULT_SYSTEM_PROMPT_NAME: &str = "helpful_assistant";

/// The built-in system prompt applied to every session.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You're a helpful assistant. You answer questions helpfully and succinctly.";

/// Instruction prepended to a source file for the `.verify` command.
pub const VERIFY_CODE_PROMPT: &str = "\
Review the following source code for correctness. Point out bugs, unhandled \
edge cases, and logic errors. If the code is correct, say so explicitly. \
Respond with a short, plainly worded report. The code follows:\n\n";

/// Instruction prepended to a source file for the `.rewrite` command.
pub const REWRITE_CODE_PROMPT: &str = "\
Rewrite the following source code to be clearer and more idiomatic while \
preserving its behavior exactly. Respond with only the rewritten code and no \
commentary. The code follows:\n\n";
