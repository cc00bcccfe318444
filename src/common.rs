//! Common types for the deduction sheet: categories, board variants and
//! sheet errors.

use core::fmt;
use core::str::FromStr;

/// The game board being played, which decides the Where list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum BoardVariant {
    Mansion,
    Boardwalk,
    #[default]
    Unselected,
}

impl BoardVariant {
    pub fn is_selected(self) -> bool {
        self != BoardVariant::Unselected
    }

    pub fn name(self) -> &'static str {
        match self {
            BoardVariant::Mansion => "Mansion",
            BoardVariant::Boardwalk => "Boardwalk",
            BoardVariant::Unselected => "Unselected",
        }
    }
}

impl fmt::Display for BoardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardVariant {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mansion") {
            Ok(BoardVariant::Mansion)
        } else if s.eq_ignore_ascii_case("boardwalk") {
            Ok(BoardVariant::Boardwalk)
        } else {
            Err(SheetError::UnknownVariant)
        }
    }
}

/// Section of the sheet an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Category {
    Who,
    What,
    Where,
}

impl Category {
    /// Sections in display order.
    pub const ALL: [Category; 3] = [Category::Who, Category::What, Category::Where];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Who => "who",
            Category::What => "what",
            Category::Where => "where",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(s))
            .ok_or(SheetError::UnknownCategory)
    }
}

/// One trackable row: an item name paired with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct CategoryItem {
    pub category: Category,
    pub name: &'static str,
}

impl CategoryItem {
    pub const fn new(name: &'static str, category: Category) -> Self {
        Self { category, name }
    }
}

impl fmt::Display for CategoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.category)
    }
}

/// Errors returned by sheet operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetError {
    /// Name highlighting is not part of the classic edition.
    HighlightUnavailable,
    /// Text did not name a board variant.
    UnknownVariant,
    /// Text did not name a category.
    UnknownCategory,
    /// Text did not name an edition.
    UnknownEdition,
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::HighlightUnavailable => {
                write!(f, "Name highlighting is not available in the classic edition")
            }
            SheetError::UnknownVariant => write!(f, "Board must be 'mansion' or 'boardwalk'"),
            SheetError::UnknownCategory => write!(f, "Category must be 'who', 'what' or 'where'"),
            SheetError::UnknownEdition => write!(f, "Edition must be 'classic' or 'extended'"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SheetError {}
