#![cfg(feature = "std")]

//! Text commands typed at the sheet prompt.

use std::fmt;
use std::str::FromStr;
use std::string::String;

use crate::{
    common::{BoardVariant, Category, CategoryItem, SheetError},
    config::item_name_static,
    sheet::Sheet,
    view::Screen,
};

/// A row addressed either by its number on screen or by category and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Row(usize),
    Item { category: Category, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(BoardVariant),
    Change,
    Mark(Target),
    Name(Target),
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    Sheet(SheetError),
    NoBoard,
    UnknownItem { category: Category, name: String },
    RowOutOfRange { row: usize, rows: usize },
    Json(String),
}

impl From<SheetError> for CommandError {
    fn from(err: SheetError) -> Self {
        CommandError::Sheet(err)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Type a command, or 'help'"),
            CommandError::Unknown(word) => write!(f, "Unknown command '{}', try 'help'", word),
            CommandError::MissingArgument(what) => write!(f, "Missing {}", what),
            CommandError::Sheet(e) => write!(f, "{}", e),
            CommandError::NoBoard => write!(f, "Choose 'mansion' or 'boardwalk' first"),
            CommandError::UnknownItem { category, name } => {
                write!(f, "'{}' is not on the {} list", name, category)
            }
            CommandError::RowOutOfRange { row, rows } => {
                write!(f, "Row {} is out of range (1-{})", row, rows)
            }
            CommandError::Json(e) => write!(f, "Could not encode sheet: {}", e),
        }
    }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
Commands:
  mansion | boardwalk       choose a board (clears the sheet)
  change                    go back to the board picker
  <n> | mark <n>            cycle the mark on row n
  mark <who|what|where> <name>
  name <n>                  toggle the name highlight on row n
  name <who|what|where> <name>
  show                      redraw the sheet
  json                      dump the sheet as JSON
  help                      this text
  quit                      leave";

fn parse_target(words: &[&str]) -> Result<Target, CommandError> {
    match words {
        [] => Err(CommandError::MissingArgument("row number or item")),
        [word] => word
            .parse()
            .map(Target::Row)
            .map_err(|_| CommandError::MissingArgument("item name")),
        [category, name @ ..] => Ok(Target::Item {
            category: category.parse()?,
            name: name.join(" "),
        }),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((head, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };
        if let Ok(row) = head.parse::<usize>() {
            return Ok(Command::Mark(Target::Row(row)));
        }
        let head = head.to_ascii_lowercase();
        match head.as_str() {
            "mansion" | "boardwalk" => Ok(Command::Select(head.parse()?)),
            "select" => {
                let variant = rest
                    .first()
                    .ok_or(CommandError::MissingArgument("board name"))?;
                Ok(Command::Select(variant.parse()?))
            }
            "change" | "back" => Ok(Command::Change),
            "mark" | "m" => Ok(Command::Mark(parse_target(rest)?)),
            "name" | "n" => Ok(Command::Name(parse_target(rest)?)),
            "show" | "s" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(head)),
        }
    }
}

impl Target {
    /// Resolve against the board currently shown by `sheet`. Only rows on
    /// screen can be addressed.
    pub fn resolve(&self, sheet: &Sheet) -> Result<CategoryItem, CommandError> {
        let Screen::Board(board) = sheet.render() else {
            return Err(CommandError::NoBoard);
        };
        match self {
            Target::Row(n) => board
                .row(*n)
                .map(|r| r.item)
                .ok_or(CommandError::RowOutOfRange {
                    row: *n,
                    rows: board.row_count(),
                }),
            Target::Item { category, name } => {
                item_name_static(*category, sheet.variant(), name)
                    .map(|n| CategoryItem::new(n, *category))
                    .ok_or_else(|| CommandError::UnknownItem {
                        category: *category,
                        name: name.clone(),
                    })
            }
        }
    }
}
