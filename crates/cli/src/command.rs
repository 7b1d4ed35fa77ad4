//! Session commands, one per input line.

use thiserror::Error;

use prodcat_filter::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectUser(Selection),
    Search(String),
    SelectCategory(Selection),
    ClearSearch,
    ResetAll,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument, e.g. `{0} all`")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  user <name>|all          filter by owning user
  search <text>            filter by product name (empty text clears)
  category <title>|all     filter by category
  clear                    clear the name filter
  reset                    reset the name and user filters
  show                     redraw the current view
  help                     show this help
  quit                     leave the session";

impl Command {
    /// Parse one input line. Blank lines mean [`Command::Show`].
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        match word {
            "" | "show" => Ok(Command::Show),
            "user" => selection("user", rest).map(Command::SelectUser),
            "category" => selection("category", rest).map(Command::SelectCategory),
            "search" => Ok(Command::Search(rest.to_string())),
            "clear" => Ok(Command::ClearSearch),
            "reset" => Ok(Command::ResetAll),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn selection(command: &'static str, rest: &str) -> Result<Selection, CommandError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    Ok(Selection::parse(value))
}
