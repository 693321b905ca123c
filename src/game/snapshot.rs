//! Read-only view of a game for presentation layers.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, CellState, Owner, OwnerMap};

use super::state::Phase;

/// Everything a renderer needs, detached from the live game.
///
/// Taking a snapshot is O(1); the cell vector shares structure with the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: usize,
    /// Row-major cell states.
    pub cells: Vector<CellState>,
    pub territory: OwnerMap<u32>,
    pub phase: Phase,
    pub round: u32,
    /// Set once the game is finished.
    pub winner: Option<Owner>,
}

impl Snapshot {
    /// State of one cell, `None` if outside the grid.
    #[must_use]
    pub fn cell(&self, cell: Cell) -> Option<CellState> {
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col).copied()
        } else {
            None
        }
    }

    /// Cell states grouped by row. Empty for a zero-sized snapshot.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<CellState>> {
        if self.size == 0 {
            return Vec::new();
        }
        let flat: Vec<CellState> = self.cells.iter().copied().collect();
        flat.chunks(self.size).map(<[CellState]>::to_vec).collect()
    }

    /// Rows of compact codes (0 unclaimed, owner index + 1 otherwise).
    #[must_use]
    pub fn grid_codes(&self) -> Vec<Vec<u8>> {
        self.rows()
            .into_iter()
            .map(|row| row.into_iter().map(CellState::code).collect())
            .collect()
    }

    /// Total claimed cells, derived from the territory counts.
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.territory.iter().map(|(_, &n)| n as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(size: usize) -> Snapshot {
        Snapshot {
            size,
            cells: std::iter::repeat(CellState::Unclaimed).take(size * size).collect(),
            territory: OwnerMap::with_default(),
            phase: Phase::AwaitingHumanMove,
            round: 1,
            winner: None,
        }
    }

    #[test]
    fn test_rows() {
        let mut snapshot = empty(2);
        snapshot.cells.set(3, CellState::ClaimedBy(Owner::Bot1));

        assert_eq!(snapshot.grid_codes(), vec![vec![0, 0], vec![0, 2]]);
        assert_eq!(snapshot.cell(Cell::new(1, 1)), Some(CellState::ClaimedBy(Owner::Bot1)));
        assert_eq!(snapshot.cell(Cell::new(2, 0)), None);
    }

    #[test]
    fn test_zero_size_has_no_rows() {
        let json = r#"{"size":0,"cells":[],"territory":{"data":[0,0,0,0]},
            "phase":"Finished","round":1,"winner":null}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert!(snapshot.rows().is_empty());
        assert!(snapshot.grid_codes().is_empty());
        assert_eq!(snapshot.cell(Cell::new(0, 0)), None);
    }
}
