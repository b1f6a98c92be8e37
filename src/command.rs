//! Parsing of the interactive command lines.

use thiserror::Error;

use crate::error::WordleError;
use crate::feedback::Pattern;
use crate::word::Word;

/// One line of input from the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Show the best guesses, `None` meaning the configured default.
    Top(Option<usize>),
    Remaining,
    State,
    Reset,
    Solve(Word),
    Feedback(Word, Pattern),
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error(transparent)]
    Invalid(#[from] WordleError),
}

/// Parse one input line. Blank lines give `Ok(None)`.
///
/// A word followed by a valid pattern is always feedback, even when the word
/// is also a command name: `state !!!!!` reports the guess STATE.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (name, args) = match parts.split_first() {
        Some((name, args)) => (*name, args),
        None => return Ok(None),
    };

    if let [pattern] = args {
        if let (Ok(guess), Ok(pattern)) = (name.parse::<Word>(), pattern.parse::<Pattern>()) {
            return Ok(Some(Command::Feedback(guess, pattern)));
        }
    }

    let command = match (name.to_lowercase().as_str(), args) {
        ("help" | "h", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        ("top" | "t", []) => Command::Top(None),
        ("top" | "t", [n]) => match n.parse() {
            Ok(n) => Command::Top(Some(n)),
            Err(_) => return Err(CommandError::Usage("top [n]")),
        },
        ("remaining" | "r", []) => Command::Remaining,
        ("state", []) => Command::State,
        ("reset", []) => Command::Reset,
        ("solve", [target]) => Command::Solve(target.parse()?),
        ("solve", _) => return Err(CommandError::Usage("solve <word>")),
        ("feedback" | "f", [guess, pattern]) => Command::Feedback(guess.parse()?, pattern.parse()?),
        ("feedback" | "f", _) => return Err(CommandError::Usage("feedback <word> <pattern>")),
        (_, [pattern]) => Command::Feedback(name.parse()?, pattern.parse()?),
        _ => return Err(CommandError::Unknown(name.to_string())),
    };
    Ok(Some(command))
}
