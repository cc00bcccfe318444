#![cfg(feature = "std")]

//! Terminal rendering of the display tree.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::view::{BoardView, Row, Screen};

const NAME_WIDTH: usize = 16;

/// Options for turning a [`Screen`] into text.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Style highlighted names in dark red. Without colour a trailing `*`
    /// marks them instead.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

fn format_row(out: &mut String, row: &Row, opts: RenderOptions) {
    let name = format!("{:<width$}", row.item.name, width = NAME_WIDTH);
    let name = match (row.highlighted, opts.color) {
        (true, true) => name.dark_red().bold().to_string(),
        (true, false) => format!("{:<width$}", format!("{}*", row.item.name), width = NAME_WIDTH),
        (false, _) => name,
    };
    let _ = writeln!(out, "{:>3}  {} [{:^3}]", row.number, name, row.glyph.unwrap_or(""));
}

fn format_board(out: &mut String, board: &BoardView, opts: RenderOptions) {
    let location = if opts.color {
        board.variant.name().yellow().to_string()
    } else {
        board.variant.name().to_string()
    };
    let _ = writeln!(out, "Location: {}   ('change' to pick another)", location);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>3}  {:<width$} {}",
        "#",
        "Category/Item",
        "Mark",
        width = NAME_WIDTH
    );
    for section in &board.sections {
        let title = section.title.to_uppercase();
        if opts.color {
            let _ = writeln!(out, "{}", title.yellow().bold());
        } else {
            let _ = writeln!(out, "{}", title);
        }
        for row in &section.rows {
            format_row(out, row, opts);
        }
    }
}

/// Render a screen as printable text.
pub fn format_screen(screen: &Screen, opts: RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "CLUE");
    let _ = writeln!(out);
    match screen {
        Screen::Picker { options } => {
            let _ = writeln!(out, "Choose a location:");
            for variant in options {
                let _ = write!(out, "  [{}]", variant.name().to_lowercase());
            }
            let _ = writeln!(out);
        }
        Screen::Board(board) => format_board(&mut out, board, opts),
    }
    out
}
