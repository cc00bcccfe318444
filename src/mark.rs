//! Mark values and the two cycle editions.

use core::fmt;
use core::str::FromStr;

use crate::common::SheetError;
use crate::config::{CLASSIC_CYCLE_LEN, EXTENDED_CYCLE_LEN};

/// Per-cell mark. Discriminants give the position in the extended cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[repr(u8)]
pub enum MarkValue {
    #[default]
    Empty = 0,
    Cross = 1,
    Maybe = 2,
    Confirmed = 3,
}

impl MarkValue {
    /// Glyph shown in the mark cell. `Empty` has none.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            MarkValue::Empty => None,
            MarkValue::Cross => Some("X"),
            MarkValue::Maybe => Some("?"),
            MarkValue::Confirmed => Some("\u{25CF}"),
        }
    }
}

/// Which feature set of the sheet is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Edition {
    /// Empty -> Cross -> Confirmed, no name highlighting.
    Classic,
    /// Empty -> Cross -> Maybe -> Confirmed, with name highlighting.
    #[default]
    Extended,
}

impl Edition {
    /// Marks reachable in this edition, in cycle order.
    pub fn cycle(self) -> &'static [MarkValue] {
        match self {
            Edition::Classic => &[MarkValue::Empty, MarkValue::Cross, MarkValue::Confirmed],
            Edition::Extended => &[
                MarkValue::Empty,
                MarkValue::Cross,
                MarkValue::Maybe,
                MarkValue::Confirmed,
            ],
        }
    }

    /// Number of clicks that bring a cell back to `Empty`.
    pub fn cycle_len(self) -> u8 {
        match self {
            Edition::Classic => CLASSIC_CYCLE_LEN,
            Edition::Extended => EXTENDED_CYCLE_LEN,
        }
    }

    pub fn has_highlight(self) -> bool {
        matches!(self, Edition::Extended)
    }

    /// Next mark after `current`. A mark outside this edition's cycle
    /// (`Maybe` under classic rules) restarts at `Empty`.
    pub fn successor(self, current: MarkValue) -> MarkValue {
        let cycle = self.cycle();
        debug_assert_eq!(cycle.len(), self.cycle_len() as usize);
        match cycle.iter().position(|m| *m == current) {
            Some(pos) => cycle[(pos + 1) % cycle.len()],
            None => MarkValue::Empty,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edition::Classic => f.write_str("classic"),
            Edition::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for Edition {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("classic") {
            Ok(Edition::Classic)
        } else if s.eq_ignore_ascii_case("extended") {
            Ok(Edition::Extended)
        } else {
            Err(SheetError::UnknownEdition)
        }
    }
}
