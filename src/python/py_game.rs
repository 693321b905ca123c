//! Game bindings for Python.

use std::collections::HashMap;

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CandidateWeighting, GameConfig};
use crate::game::{Phase, TurnController};

/// Python wrapper for `TurnController`.
#[pyclass(name = "ConquestGame")]
pub struct PyConquestGame {
    game: TurnController,
}

#[pymethods]
impl PyConquestGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - grid_size: Side length of the square grid (2-1024)
    /// - seed: RNG seed for the automated players
    /// - legacy_weighting: Weight bot candidates per owned neighbor
    #[new]
    #[pyo3(signature = (grid_size = 10, seed = 42, legacy_weighting = false))]
    fn new(grid_size: usize, seed: u64, legacy_weighting: bool) -> PyResult<Self> {
        let weighting = if legacy_weighting {
            CandidateWeighting::PerOwnedNeighbor
        } else {
            CandidateWeighting::Distinct
        };
        let config = GameConfig::default()
            .with_grid_size(grid_size)
            .with_seed(seed)
            .with_weighting(weighting);
        Ok(Self {
            game: TurnController::new(config)?,
        })
    }

    /// Claim (row, col) for the human. Returns False if the move is rejected.
    ///
    /// Raises IndexError for coordinates outside the grid.
    fn submit_human_move(&mut self, row: i64, col: i64) -> PyResult<bool> {
        let cell = self.game.board().cell(row, col)?;
        Ok(self.game.submit_human_move(cell)?.is_accepted())
    }

    /// Pass the human turn. Only succeeds when the human has no legal claim.
    fn pass_human_turn(&mut self) -> PyResult<bool> {
        Ok(self.game.pass_human_turn()?.is_accepted())
    }

    /// Run the three bots. Returns each bot's claimed (row, col), or None for a pass.
    fn advance_automated_turn(&mut self) -> PyResult<Vec<Option<(u16, u16)>>> {
        let report = self.game.advance_automated_turn()?;
        Ok(report
            .moves
            .iter()
            .map(|(_, played)| played.cell().map(|c| (c.row, c.col)))
            .collect())
    }

    /// Cells the human may claim right now.
    fn human_moves(&self) -> PyResult<Vec<(u16, u16)>> {
        Ok(self
            .game
            .human_candidates()?
            .into_iter()
            .map(|c| (c.row, c.col))
            .collect())
    }

    #[getter]
    fn is_finished(&self) -> bool {
        self.game.is_finished()
    }

    /// Winner's name once the game is finished, else None.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.game.winner().map(|owner| owner.name())
    }

    /// Territory count per owner name.
    fn territory(&self) -> HashMap<&'static str, u32> {
        self.game
            .board()
            .territory_counts()
            .iter()
            .map(|(owner, &count)| (owner.name(), count))
            .collect()
    }

    /// Grid as a 2-D numpy array of owner codes.
    fn grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        PyArray2::from_vec2_bound(py, &self.game.snapshot().grid_codes())
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn phase(&self) -> &'static str {
        match self.game.phase() {
            Phase::AwaitingHumanMove => "awaiting_human_move",
            Phase::RunningAutomatedMoves => "running_automated_moves",
            Phase::Finished => "finished",
        }
    }

    #[getter]
    fn round(&self) -> u32 {
        self.game.round()
    }

    #[getter]
    fn grid_size(&self) -> usize {
        self.game.board().size()
    }

    /// Start over with the same settings.
    fn restart(&mut self) -> PyResult<()> {
        Ok(self.game.restart()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "ConquestGame(size={}, round={}, phase={})",
            self.grid_size(),
            self.round(),
            self.phase()
        )
    }
}
