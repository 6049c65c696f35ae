//! Command parsing and dispatch
//!
//! Turns a raw input line into a closed [`Effect`] that the session
//! matches exhaustively. The command set is fixed and small; there is
//! no aliasing, abbreviation, piping, or globbing.

/// The parsed, dispatch-ready representation of a typed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Print the command summary
    Help,
    /// Reset the output log
    Clear,
    /// List entries under the current working directory
    List,
    /// Change the working directory; `None` means no argument was given
    ChangeDirectory(Option<String>),
    /// Read and render a post; `None` means no argument was given
    ReadFile(Option<String>),
    /// Anything that is not a recognized command name
    Unknown(String),
    /// Empty input; the caller re-prompts without producing output
    Noop,
}

/// Parse a raw input line into an [`Effect`]
///
/// The line is trimmed first; an empty result is a `Noop`. Otherwise the
/// line is split on runs of whitespace, the first token is matched
/// case-sensitively against the command set, and at most the first
/// argument is consulted — extra arguments are ignored, not an error.
pub fn interpret(line: &str) -> Effect {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Effect::Noop;
    }

    let mut tokens = trimmed.split_whitespace();
    let name = tokens.next().unwrap_or_default();
    let first_arg = tokens.next().map(str::to_string);

    match name {
        "help" => Effect::Help,
        "clear" => Effect::Clear,
        "ls" => Effect::List,
        "cd" => Effect::ChangeDirectory(first_arg),
        "cat" => Effect::ReadFile(first_arg),
        other => Effect::Unknown(other.to_string()),
    }
}
