//! Line commands typed into the terminal host.

use std::time::Instant;

use curator_core::{FilterEdit, Msg, ProfileAction, ResourceKind, TagSet};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  q <text>            search (empty clears)
  tag +<name>         select a tag
  tag -<name>         deselect a tag
  tags clear          clear all tags
  category <name>     select a category (`category clear` removes it)
  type all|video|article
  open <id>           show a single resource
  back                go back in history
  profile | settings | signout
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Back,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("unknown resource type {0:?}; use all, video or article")]
    UnknownType(String),
    #[error("tag names cannot contain ',': {0:?}")]
    InvalidTag(String),
}

pub fn parse_command(line: &str, now: Instant) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let filter = |edit: FilterEdit| -> Result<Command, CommandError> {
        Ok(Command::Dispatch(Msg::Filter { edit, at: now }))
    };

    match word {
        "q" | "search" => filter(FilterEdit::SearchTextChanged(rest.to_string())),
        "tag" => {
            if let Some(name) = rest.strip_prefix('+') {
                let tag = required(name, "tag", "a tag name")?;
                if !TagSet::is_valid_name(&tag) {
                    return Err(CommandError::InvalidTag(tag));
                }
                filter(FilterEdit::TagToggled {
                    tag,
                    selected: true,
                })
            } else if let Some(name) = rest.strip_prefix('-') {
                filter(FilterEdit::TagToggled {
                    tag: required(name, "tag", "a tag name")?,
                    selected: false,
                })
            } else {
                Err(CommandError::MissingArgument {
                    command: "tag",
                    expected: "+<name> or -<name>",
                })
            }
        }
        "tags" if rest == "clear" => filter(FilterEdit::TagsCleared),
        "category" => match rest {
            "" => Err(CommandError::MissingArgument {
                command: "category",
                expected: "a category name or `clear`",
            }),
            "clear" => filter(FilterEdit::CategoryCleared),
            name => filter(FilterEdit::CategorySelected(name.to_string())),
        },
        "type" => match rest {
            "all" => filter(FilterEdit::ResourceTypeSelected(None)),
            other => match ResourceKind::from_param(other) {
                Some(kind) => filter(FilterEdit::ResourceTypeSelected(Some(kind))),
                None => Err(CommandError::UnknownType(other.to_string())),
            },
        },
        "open" => Ok(Command::Dispatch(Msg::ResourceOpened {
            id: required(rest, "open", "a resource id")?,
        })),
        "back" => Ok(Command::Back),
        "profile" => Ok(Command::Dispatch(Msg::ProfileMenu(ProfileAction::Profile))),
        "settings" => Ok(Command::Dispatch(Msg::ProfileMenu(ProfileAction::Settings))),
        "signout" => Ok(Command::Dispatch(Msg::ProfileMenu(ProfileAction::SignOut))),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(line.to_string())),
    }
}

fn required(
    value: &str,
    command: &'static str,
    expected: &'static str,
) -> Result<String, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(value.to_string())
    }
}
