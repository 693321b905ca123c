//! Grid positions and their claim state.

use serde::{Deserialize, Serialize};

use super::owner::Owner;

/// A (row, column) position on the square grid.
///
/// Bounds are a property of the board, not of the cell: a `Cell` can name a
/// position that lies outside a given grid, and the board reports that as
/// `ConquestError::OutOfBounds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    /// Orthogonal neighbor offsets as (row, col) deltas: up, down, left, right.
    ///
    /// This order is what makes neighbor enumeration, and therefore seeded
    /// bot play, reproducible.
    pub const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Apply a (row, col) delta, returning `None` if either coordinate goes negative.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Cell> {
        let row = u16::try_from(i32::from(self.row) + d_row).ok()?;
        let col = u16::try_from(i32::from(self.col) + d_col).ok()?;
        Some(Cell { row, col })
    }
}

impl From<(u16, u16)> for Cell {
    fn from((row, col): (u16, u16)) -> Self {
        Cell::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Claim state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Unclaimed,
    ClaimedBy(Owner),
}

impl CellState {
    #[must_use]
    pub const fn owner(self) -> Option<Owner> {
        match self {
            CellState::Unclaimed => None,
            CellState::ClaimedBy(owner) => Some(owner),
        }
    }

    #[must_use]
    pub const fn is_claimed(self) -> bool {
        matches!(self, CellState::ClaimedBy(_))
    }

    /// Compact code for hosts: 0 for unclaimed, owner index + 1 otherwise.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            CellState::Unclaimed => 0,
            CellState::ClaimedBy(owner) => owner.index() as u8 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let cell = Cell::new(0, 3);
        assert_eq!(cell.offset(-1, 0), None);
        assert_eq!(cell.offset(1, 0), Some(Cell::new(1, 3)));
        assert_eq!(cell.offset(0, -1), Some(Cell::new(0, 2)));
        assert_eq!(Cell::new(2, 0).offset(0, -1), None);
    }

    #[test]
    fn test_cell_state_accessors() {
        assert_eq!(CellState::default(), CellState::Unclaimed);
        assert_eq!(CellState::Unclaimed.owner(), None);
        assert!(!CellState::Unclaimed.is_claimed());

        let claimed = CellState::ClaimedBy(Owner::Bot2);
        assert_eq!(claimed.owner(), Some(Owner::Bot2));
        assert!(claimed.is_claimed());
    }

    #[test]
    fn test_codes() {
        assert_eq!(CellState::Unclaimed.code(), 0);
        assert_eq!(CellState::ClaimedBy(Owner::Human).code(), 1);
        assert_eq!(CellState::ClaimedBy(Owner::Bot3).code(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::from((3, 7)).to_string(), "(3, 7)");
    }
}
