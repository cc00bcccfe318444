//! The deduction sheet: board selection, per-cell marks and name highlights.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

use crate::{
    common::{BoardVariant, Category, CategoryItem, SheetError},
    mark::{Edition, MarkValue},
    view::{self, Screen},
};

/// Immutable snapshot of a sheet, used for display dumps and restores.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SheetState {
    pub edition: Edition,
    pub variant: BoardVariant,
    pub marks: Vec<(CategoryItem, MarkValue)>,
    pub highlights: Vec<(CategoryItem, bool)>,
}

/// View-state controller for one in-memory session.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    edition: Edition,
    variant: BoardVariant,
    marks: BTreeMap<CategoryItem, MarkValue>,
    highlights: BTreeMap<CategoryItem, bool>,
}

impl Sheet {
    /// Create an unselected sheet with no marks.
    pub fn new(edition: Edition) -> Self {
        Self {
            edition,
            ..Self::default()
        }
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn variant(&self) -> BoardVariant {
        self.variant
    }

    /// Choose a board. Every mark and highlight is cleared, even when the
    /// same board is chosen again.
    pub fn select_variant(&mut self, variant: BoardVariant) {
        log::debug!(
            "selecting {} (clearing {} marks, {} highlights)",
            variant,
            self.marks.len(),
            self.highlights.len()
        );
        self.variant = variant;
        self.marks = BTreeMap::new();
        self.highlights = BTreeMap::new();
    }

    /// Return to the board picker. Marks are kept until the next selection.
    pub fn clear_variant(&mut self) {
        log::debug!("returning to board picker");
        self.variant = BoardVariant::Unselected;
    }

    /// Current mark for an item; unmarked cells read as `Empty`.
    pub fn mark(&self, item: CategoryItem) -> MarkValue {
        self.marks.get(&item).copied().unwrap_or_default()
    }

    /// Whether an item's name is highlighted; defaults to `false`.
    pub fn is_highlighted(&self, item: CategoryItem) -> bool {
        self.highlights.get(&item).copied().unwrap_or(false)
    }

    /// Advance the mark of `item` one step around the edition's cycle and
    /// return the new mark. Any key is accepted, displayed or not.
    pub fn cycle_mark(&mut self, item: CategoryItem) -> MarkValue {
        let next = self.edition.successor(self.mark(item));
        self.marks.insert(item, next);
        log::debug!("mark {} -> {:?}", item, next);
        next
    }

    /// Flip the highlight of `item` and return the new flag.
    pub fn toggle_highlight(&mut self, item: CategoryItem) -> Result<bool, SheetError> {
        if !self.edition.has_highlight() {
            return Err(SheetError::HighlightUnavailable);
        }
        let next = !self.is_highlighted(item);
        self.highlights.insert(item, next);
        log::debug!("highlight {} -> {}", item, next);
        Ok(next)
    }

    /// Convenience wrapper taking the name and category separately.
    pub fn toggle_highlight_of(
        &mut self,
        name: &'static str,
        category: Category,
    ) -> Result<bool, SheetError> {
        self.toggle_highlight(CategoryItem::new(name, category))
    }

    /// Number of cells holding a non-empty mark.
    pub fn marked_count(&self) -> usize {
        self.marks.values().filter(|m| **m != MarkValue::Empty).count()
    }

    /// Render the current screen.
    pub fn render(&self) -> Screen {
        view::render(self)
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> SheetState {
        SheetState {
            edition: self.edition,
            variant: self.variant,
            marks: self.marks.iter().map(|(k, v)| (*k, *v)).collect(),
            highlights: self.highlights.iter().map(|(k, v)| (*k, *v)).collect(),
        }
    }

    /// Restore a sheet from a previously taken snapshot.
    pub fn from_state(state: SheetState) -> Self {
        Self {
            edition: state.edition,
            variant: state.variant,
            marks: state.marks.into_iter().collect(),
            highlights: state.highlights.into_iter().collect(),
        }
    }
}
