//! Fixed character-group table for the 3×3 main grid.
//!
//! The nine groups are index-aligned to the main grid cells. Each group holds
//! 2–4 lowercase letters; the full table covers the latin alphabet once.
//! `display_layout` produces the render sequence for the sub-grid, including
//! the spacing placeholder rule for 3-character groups.

/// The nine character groups, index-aligned to the 3×3 main grid.
pub const CHAR_GROUPS: [&str; 9] = [
    "qwe", "rtyu", "iop", "asd", "fgh", "jkl", "zxc", "vb", "nm",
];

/// Number of groups on the main grid.
pub const GROUP_COUNT: usize = CHAR_GROUPS.len();

/// Largest group size; the sub-grid always has this many slots.
pub const MAX_GROUP_LEN: usize = 4;

/// One cell of the rendered sub-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCell {
    /// A selectable character key.
    Key(char),
    /// Non-interactive spacing placeholder.
    Spacer,
}

/// Characters of the group at `index`, or `None` for an out-of-range index.
pub fn chars_for_group(index: usize) -> Option<&'static str> {
    CHAR_GROUPS.get(index).copied()
}

/// The group padded to a fixed 4-slot layout; slots beyond the group's
/// length hold the empty sentinel.
pub fn padded_slots(index: usize) -> Option<[Option<char>; MAX_GROUP_LEN]> {
    let group = chars_for_group(index)?;
    let mut slots = [None; MAX_GROUP_LEN];
    for (slot, ch) in slots.iter_mut().zip(group.chars()) {
        *slot = Some(ch);
    }
    Some(slots)
}

/// Render sequence for the sub-grid of the group at `index`.
///
/// A group with 2 characters renders 2 key cells, one with 4 renders all 4,
/// and one with exactly 3 renders its keys plus a spacer in slot 3. The
/// spacer carries no meaning beyond cell spacing and appears nowhere else.
pub fn display_layout(index: usize) -> Vec<LayoutCell> {
    let Some(group) = chars_for_group(index) else {
        return Vec::new();
    };
    let mut cells: Vec<LayoutCell> = group.chars().map(LayoutCell::Key).collect();
    if cells.len() == 3 {
        cells.push(LayoutCell::Spacer);
    }
    cells
}
