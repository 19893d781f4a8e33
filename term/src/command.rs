//! Parsing of the lines typed at the prompt.

use thiserror::Error;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search text; `type` alone clears it.
    Type(String),
    Search,
    /// Card number (1-based, as printed) or drink id.
    Toggle(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  type <text>      set the search text
  search           search for the current text
  toggle <n|id>    show more / less of a card
  help             show this help
  quit             exit";

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line.trim_end(), ""),
        };
        match word {
            "type" | "t" => Ok(Command::Type(rest.to_string())),
            "search" | "s" if rest.is_empty() => Ok(Command::Search),
            "search" | "s" => Err(CommandError::UnexpectedArgument("search")),
            "toggle" | "o" if !rest.is_empty() => Ok(Command::Toggle(rest.to_string())),
            "toggle" | "o" => Err(CommandError::MissingArgument("toggle")),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "" => Err(CommandError::Empty),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("type a command, or `help`")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` takes no argument")]
    UnexpectedArgument(&'static str),
}
