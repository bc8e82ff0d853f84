//! Line commands for the terminal front end.
//!
//! Each item command maps onto exactly one [`TodoAction`].

use crate::types::{ItemId, TodoAction, VisibilityFilter};
use std::str::FromStr;
use thiserror::Error;

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  add <text>          add an item
  toggle <id>         mark an item done / not done
  edit <id>           enter or leave edit mode
  update <id> <text>  replace an item's text
  remove <id>         delete an item (alias: rm)
  filter <name>       all | active | completed
  show                render the list again
  dump                print the current snapshot as JSON
  help                this text
  quit                exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send an action to the store
    Dispatch(TodoAction),
    /// Render the list
    Show,
    /// Print the snapshot as JSON
    Dump,
    /// Print usage
    Help,
    /// Exit
    Quit,
}

/// Errors from parsing an input line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was typed
    #[error("empty command")]
    Empty,

    /// The first word is not a command
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    /// A required argument is missing
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was missing
        argument: &'static str,
    },

    /// The id argument is not a number
    #[error("`{0}` is not an item id")]
    InvalidId(String),
}

fn parse_id(command: &'static str, arg: Option<&str>) -> Result<ItemId, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        argument: "an item id",
    })?;
    arg.parse().map_err(|_| CommandError::InvalidId(arg.to_string()))
}

fn split_word(input: &str) -> (&str, Option<&str>) {
    match input.trim().split_once(char::is_whitespace) {
        Some((word, rest)) => {
            let rest = rest.trim();
            (word, (!rest.is_empty()).then_some(rest))
        },
        None => (input.trim(), None),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line);

        let action = match word.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "show" | "ls" => return Ok(Self::Show),
            "dump" => return Ok(Self::Dump),
            "help" | "?" => return Ok(Self::Help),
            "quit" | "exit" | "q" => return Ok(Self::Quit),
            "add" => TodoAction::AddItem {
                text: rest
                    .ok_or(CommandError::MissingArgument {
                        command: "add",
                        argument: "some text",
                    })?
                    .to_string(),
            },
            "toggle" => TodoAction::ToggleItem {
                id: parse_id("toggle", rest)?,
            },
            "edit" => TodoAction::ToggleEditItem {
                id: parse_id("edit", rest)?,
            },
            "update" => {
                let (id, text) = rest.map_or(("", None), split_word);
                TodoAction::UpdateItem {
                    id: parse_id("update", (!id.is_empty()).then_some(id))?,
                    text: text.unwrap_or_default().to_string(),
                }
            },
            "remove" | "rm" => TodoAction::RemoveItem {
                id: parse_id("remove", rest)?,
            },
            "filter" => TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::from(rest.ok_or(CommandError::MissingArgument {
                    command: "filter",
                    argument: "all, active or completed",
                })?),
            },
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Self::Dispatch(action))
    }
}
