//! Pure projection from sheet state to a display tree.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use crate::{
    common::{BoardVariant, Category, CategoryItem},
    config,
    mark::MarkValue,
    sheet::Sheet,
};

/// Boards offered on the picker screen, in button order.
pub const PICKER_OPTIONS: [BoardVariant; 2] = [BoardVariant::Mansion, BoardVariant::Boardwalk];

/// What the front end should show.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "screen", rename_all = "lowercase"))]
pub enum Screen {
    /// No board chosen yet.
    Picker { options: [BoardVariant; 2] },
    /// A board is chosen and the sheet is visible.
    Board(BoardView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardView {
    pub variant: BoardVariant,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Section {
    pub category: Category,
    pub title: String,
    pub rows: Vec<Row>,
}

/// One line of the sheet. `number` runs from 1 across all sections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Row {
    pub number: usize,
    pub item: CategoryItem,
    pub highlighted: bool,
    pub mark: MarkValue,
    pub glyph: Option<&'static str>,
}

impl BoardView {
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    /// Row with the given 1-based number.
    pub fn row(&self, number: usize) -> Option<&Row> {
        self.rows().find(|r| r.number == number)
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }
}

fn section_title(category: Category, variant: BoardVariant) -> String {
    match category {
        Category::Who => String::from("Who"),
        Category::What => String::from("What"),
        Category::Where => format!("Where ({})", variant),
    }
}

/// Render `sheet` for display. The board is only produced for a chosen
/// variant; `Unselected` always yields the picker.
pub fn render(sheet: &Sheet) -> Screen {
    let variant = sheet.variant();
    if !variant.is_selected() {
        return Screen::Picker {
            options: PICKER_OPTIONS,
        };
    }

    let mut number = 0;
    let mut sections = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let names = config::items(category, variant).unwrap_or(&[]);
        let rows = names
            .iter()
            .map(|&name| {
                number += 1;
                let item = CategoryItem::new(name, category);
                let mark = sheet.mark(item);
                Row {
                    number,
                    item,
                    highlighted: sheet.is_highlighted(item),
                    mark,
                    glyph: mark.glyph(),
                }
            })
            .collect();
        sections.push(Section {
            category,
            title: section_title(category, variant),
            rows,
        });
    }

    Screen::Board(BoardView { variant, sections })
}
