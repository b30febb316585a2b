//! Input classification for the session loop.
//!
//! Every line the user types is classified into exactly one command. The
//! dot commands control one-shot batch calls and are not sent through the
//! conversation transcript.

/// A classified line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Terminate the session.
    Exit,

    /// Verify the source file at the given path against the fixed
    /// verification instruction.
    Verify(String),

    /// Rewrite the source file at the given path and save the result next
    /// to it as a draft.
    Rewrite(String),

    /// Send the raw line as a chat turn.
    Chat(String),

    /// Report a usage error back to the caller; no backend call is made.
    Invalid(String),
}

/// Classifies one line of input.
///
/// The first whitespace-delimited token decides, case-insensitively:
/// `exit` terminates, `.verify`/`.rewrite` take exactly one file path, and
/// anything else, including an empty line, is a chat turn carrying the raw
/// input.
///
/// # Examples
///
/// ```
/// # use tgpt::chat::{ReplCommand, parse_command};
/// assert_eq!(parse_command("exit"), ReplCommand::Exit);
/// assert_eq!(
///     parse_command(".verify foo.py"),
///     ReplCommand::Verify("foo.py".to_string())
/// );
/// assert_eq!(
///     parse_command("Hello!"),
///     ReplCommand::Chat("Hello!".to_string())
/// );
/// ```
pub fn parse_command(input: &str) -> ReplCommand {
    let mut tokens = input.split_whitespace();
    let Some(first) = tokens.next() else {
        return ReplCommand::Chat(input.to_string());
    };

    match first.to_lowercase().as_str() {
        "exit" => ReplCommand::Exit,
        ".verify" => parse_path_command(tokens, ReplCommand::Verify, ".verify"),
        ".rewrite" => parse_path_command(tokens, ReplCommand::Rewrite, ".rewrite"),
        _ => ReplCommand::Chat(input.to_string()),
    }
}

fn parse_path_command<'a, F>(
    mut arguments: impl Iterator<Item = &'a str>,
    constructor: F,
    name: &str,
) -> ReplCommand
where
    F: Fn(String) -> ReplCommand,
{
    let Some(path) = arguments.next() else {
        return ReplCommand::Invalid(format!("{name} requires a file path"));
    };
    if arguments.next().is_some() {
        return ReplCommand::Invalid(format!("{name} takes exactly one file path"));
    }
    constructor(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exit() {
        assert_eq!(parse_command("exit"), ReplCommand::Exit);
        assert_eq!(parse_command("EXIT"), ReplCommand::Exit);
        assert_eq!(parse_command("  exit  "), ReplCommand::Exit);
    }

    #[test]
    fn parse_verify() {
        assert_eq!(
            parse_command(".verify foo.py"),
            ReplCommand::Verify("foo.py".to_string())
        );
        assert_eq!(
            parse_command(".VERIFY foo.py"),
            ReplCommand::Verify("foo.py".to_string())
        );
    }

    #[test]
    fn parse_rewrite() {
        assert_eq!(
            parse_command(".rewrite src/main.rs"),
            ReplCommand::Rewrite("src/main.rs".to_string())
        );
    }

    #[test]
    fn verify_requires_exactly_one_argument() {
        assert_eq!(
            parse_command(".verify"),
            ReplCommand::Invalid(".verify requires a file path".to_string())
        );
        assert_eq!(
            parse_command(".verify a b"),
            ReplCommand::Invalid(".verify takes exactly one file path".to_string())
        );
    }

    #[test]
    fn rewrite_requires_exactly_one_argument() {
        assert_eq!(
            parse_command(".rewrite"),
            ReplCommand::Invalid(".rewrite requires a file path".to_string())
        );
        assert_eq!(
            parse_command(".rewrite a b"),
            ReplCommand::Invalid(".rewrite takes exactly one file path".to_string())
        );
    }

    #[test]
    fn free_text_is_chat() {
        assert_eq!(
            parse_command("Hello, world"),
            ReplCommand::Chat("Hello, world".to_string())
        );
        // A leading dot alone does not make a command.
        assert_eq!(
            parse_command(".verb foo"),
            ReplCommand::Chat(".verb foo".to_string())
        );
    }

    #[test]
    fn empty_input_is_a_chat_turn() {
        assert_eq!(parse_command(""), ReplCommand::Chat("".to_string()));
        assert_eq!(parse_command("   "), ReplCommand::Chat("   ".to_string()));
    }

    #[test]
    fn chat_keeps_raw_input() {
        assert_eq!(
            parse_command("  spaced   out  "),
            ReplCommand::Chat("  spaced   out  ".to_string())
        );
    }
}
