use crate::common::{BoardVariant, Category};

pub const NUM_WHO: usize = 6;
pub const NUM_WHAT: usize = 6;
pub const NUM_MANSION_ROOMS: usize = 9;
pub const NUM_BOARDWALK_AREAS: usize = 5;

pub const WHO: [&str; NUM_WHO] = ["Green", "Mustard", "Peacock", "Plum", "Scarlet", "White"];

pub const WHAT: [&str; NUM_WHAT] = [
    "Wrench",
    "Candlestick",
    "Dagger",
    "Pistol",
    "Lead Pipe",
    "Rope",
];

pub const MANSION_WHERE: [&str; NUM_MANSION_ROOMS] = [
    "Bathroom",
    "Office",
    "Dining Room",
    "Game Room",
    "Garage",
    "Bedroom",
    "Living Room",
    "Kitchen",
    "Courtyard",
];

pub const BOARDWALK_WHERE: [&str; NUM_BOARDWALK_AREAS] = [
    "Beach",
    "Arcade",
    "Jet Ski Rental",
    "Ferris Wheel",
    "Surf Shop",
];

/// Number of marks in the classic cycle: empty, cross, confirmed.
pub const CLASSIC_CYCLE_LEN: u8 = 3;

/// Number of marks in the extended cycle: empty, cross, maybe, confirmed.
pub const EXTENDED_CYCLE_LEN: u8 = 4;

/// Where-list for a chosen board. `Unselected` has no board and therefore
/// no rooms.
pub fn where_list(variant: BoardVariant) -> Option<&'static [&'static str]> {
    match variant {
        BoardVariant::Mansion => Some(&MANSION_WHERE),
        BoardVariant::Boardwalk => Some(&BOARDWALK_WHERE),
        BoardVariant::Unselected => None,
    }
}

/// Static item list for `category` on the given board.
pub fn items(category: Category, variant: BoardVariant) -> Option<&'static [&'static str]> {
    match category {
        Category::Who => Some(&WHO),
        Category::What => Some(&WHAT),
        Category::Where => where_list(variant),
    }
}

/// Resolve a case-insensitive item name to its canonical static name.
/// Returns `None` if the name is not on the list for `category`.
pub fn item_name_static(
    category: Category,
    variant: BoardVariant,
    name: &str,
) -> Option<&'static str> {
    items(category, variant)?
        .iter()
        .copied()
        .find(|item| item.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn where_list_matches_board() {
        assert_eq!(where_list(BoardVariant::Mansion).map(<[_]>::len), Some(9));
        assert_eq!(where_list(BoardVariant::Boardwalk).map(<[_]>::len), Some(5));
        assert!(where_list(BoardVariant::Unselected).is_none());
    }

    #[test]
    fn item_lookup_is_case_insensitive() {
        assert_eq!(
            item_name_static(Category::What, BoardVariant::Mansion, "lead pipe"),
            Some("Lead Pipe")
        );
        assert_eq!(
            item_name_static(Category::Where, BoardVariant::Boardwalk, "Kitchen"),
            None
        );
    }
}
