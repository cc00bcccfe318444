//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardVariant, Category, CategoryItem, Edition, MarkValue, Screen, Sheet, SheetError,
    SheetState,
};

pub use crate::{
    format_screen, Command, CommandError, InputSource, RenderOptions, ScriptedInput, Session,
    StdinInput,
};
