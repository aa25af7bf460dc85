//! User slash-command parser.
//!
//! Parses `/command args...` lines typed into the question box into typed
//! [`ParsedCommand`] values. Anything not starting with `/` is a question.

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCommand {
    Index,
    Upload { path: String },
    Ask { question: String },
    Clear,
    Help,
    Quit,
}

pub const HELP_TEXT: &str =
    "F5 /index: index default PDF | /upload <path> | Enter: ask | Tab: switch box | Ctrl+C: quit";

/// Parse a slash-command string into a [`ParsedCommand`].
///
/// Returns `None` if the input does not start with `/` or is not a recognized
/// command. Commands are case-insensitive. Missing arguments are passed on
/// empty so the dispatcher can answer with its usual prompt.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let input = input.trim();
    let rest = input.strip_prefix('/')?;

    let mut parts = rest.splitn(2, char::is_whitespace);
    let cmd = parts.next()?.to_lowercase();
    let arg = parts.next().unwrap_or("").trim().to_string();

    match cmd.as_str() {
        "index" | "reindex" => Some(ParsedCommand::Index),
        "upload" | "up" => Some(ParsedCommand::Upload { path: arg }),
        "ask" | "q" => Some(ParsedCommand::Ask { question: arg }),
        "clear" | "cls" => Some(ParsedCommand::Clear),
        "help" | "h" | "?" => Some(ParsedCommand::Help),
        "quit" | "exit" => Some(ParsedCommand::Quit),
        _ => None,
    }
}
