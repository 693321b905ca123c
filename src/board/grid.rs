//! The N×N claim grid.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::config::validate_grid_size;
use crate::core::{Cell, CellState, ConquestError, Owner, OwnerMap, Result};

/// Up to four orthogonal neighbors, stored inline.
pub type Neighbors = SmallVec<[Cell; 4]>;

/// Square grid of cell states with cached per-owner territory counts.
///
/// Cells are stored row-major in an `im::Vector`, so cloning a board (for a
/// snapshot or a forked game) is O(1).
///
/// ## Invariants
///
/// - A claimed cell never becomes unclaimed or changes owner.
/// - `territory_count(o)` always equals the number of cells claimed by `o`.
///
/// Deserializing checks the grid shape and rebuilds the territory cache from
/// the cells; any serialized counts are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vector<CellState>,
    territory: OwnerMap<u32>,
}

/// Wire form of a `Board`, before validation.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vector<CellState>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConquestError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        validate_grid_size(raw.size)?;
        let expected = raw.size * raw.size;
        if raw.cells.len() != expected {
            return Err(ConquestError::CellCountMismatch {
                size: raw.size,
                expected,
                actual: raw.cells.len(),
            });
        }

        let mut board = Self {
            size: raw.size,
            cells: raw.cells,
            territory: OwnerMap::with_default(),
        };
        board.territory = board.recount();
        Ok(board)
    }
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self> {
        validate_grid_size(size)?;
        Ok(Self {
            size,
            cells: std::iter::repeat(CellState::Unclaimed).take(size * size).collect(),
            territory: OwnerMap::with_default(),
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (cell.row as usize) < self.size && (cell.col as usize) < self.size
    }

    fn index_of(&self, cell: Cell) -> Result<usize> {
        if self.contains(cell) {
            Ok(cell.row as usize * self.size + cell.col as usize)
        } else {
            Err(ConquestError::OutOfBounds {
                row: i64::from(cell.row),
                col: i64::from(cell.col),
                size: self.size,
            })
        }
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index / self.size) as u16, (index % self.size) as u16)
    }

    /// Resolve signed coordinates (as hosts supply them) to a cell on this board.
    pub fn cell(&self, row: i64, col: i64) -> Result<Cell> {
        let out_of_bounds = ConquestError::OutOfBounds { row, col, size: self.size };
        let row = u16::try_from(row).map_err(|_| out_of_bounds)?;
        let col = u16::try_from(col).map_err(|_| out_of_bounds)?;
        let cell = Cell::new(row, col);
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(out_of_bounds)
        }
    }

    /// Current state of a cell.
    pub fn cell_state(&self, cell: Cell) -> Result<CellState> {
        let index = self.index_of(cell)?;
        Ok(self.cells[index])
    }

    /// In-bounds orthogonal neighbors in the fixed order up, down, left, right.
    ///
    /// ```
    /// use territory_conquest::board::Board;
    /// use territory_conquest::core::Cell;
    ///
    /// let board = Board::new(4).unwrap();
    /// let corner = board.adjacent_cells(Cell::new(0, 0)).unwrap();
    /// assert_eq!(corner.as_slice(), &[Cell::new(1, 0), Cell::new(0, 1)]);
    /// ```
    pub fn adjacent_cells(&self, cell: Cell) -> Result<Neighbors> {
        self.index_of(cell)?;
        Ok(Cell::OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(|&neighbor| self.contains(neighbor))
            .collect())
    }

    /// Claim an unclaimed cell for `owner`.
    ///
    /// Returns `Ok(false)` without touching the board if the cell is already
    /// claimed. Adjacency is not checked here; that is the conquest rule's job.
    pub fn claim(&mut self, cell: Cell, owner: Owner) -> Result<bool> {
        let index = self.index_of(cell)?;
        if self.cells[index].is_claimed() {
            return Ok(false);
        }

        self.cells.set(index, CellState::ClaimedBy(owner));
        self.territory[owner] += 1;
        debug!(%owner, %cell, territory = self.territory[owner], "cell claimed");
        Ok(true)
    }

    /// Seed positions: Human top-left, Bot1 bottom-right, Bot2 top-right,
    /// Bot3 bottom-left.
    #[must_use]
    pub fn corner_seeds(&self) -> [(Owner, Cell); 4] {
        let last = (self.size - 1) as u16;
        [
            (Owner::Human, Cell::new(0, 0)),
            (Owner::Bot1, Cell::new(last, last)),
            (Owner::Bot2, Cell::new(0, last)),
            (Owner::Bot3, Cell::new(last, 0)),
        ]
    }

    /// Place the four seed claims directly, bypassing adjacency.
    pub(crate) fn seed_corners(&mut self) -> Result<()> {
        for (owner, cell) in self.corner_seeds() {
            self.claim(cell, owner)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn territory_count(&self, owner: Owner) -> u32 {
        self.territory[owner]
    }

    #[must_use]
    pub fn territory_counts(&self) -> &OwnerMap<u32> {
        &self.territory
    }

    /// Recompute territory counts from the grid, ignoring the cache.
    #[must_use]
    pub fn recount(&self) -> OwnerMap<u32> {
        let mut counts = OwnerMap::with_default();
        for owner in self.cells.iter().filter_map(|state| state.owner()) {
            counts[owner] += 1;
        }
        counts
    }

    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.territory.iter().map(|(_, &n)| n as usize).sum()
    }

    #[must_use]
    pub fn unclaimed_count(&self) -> usize {
        self.cell_count() - self.claimed_count()
    }

    /// True once every cell is claimed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.unclaimed_count() == 0
    }

    /// All cells with their states, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &state)| (self.cell_at(index), state))
    }

    /// Cells owned by `owner`, row-major.
    pub fn cells_owned_by(&self, owner: Owner) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(move |&(_, state)| state == CellState::ClaimedBy(owner))
            .map(|(cell, _)| cell)
    }

    /// Raw row-major states, cheap to clone.
    #[must_use]
    pub fn states(&self) -> &Vector<CellState> {
        &self.cells
    }
}
