//! Game state: board, turn phase, round counter, RNG and claim history.
//!
//! A `GameState` is a plain value owned by exactly one `TurnController`.
//! Nothing outside the `game` module can mutate it; readers get `&Board`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Cell, GameConfig, GameRng, GameRngState, Owner, Result};

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to claim a cell (or pass when boxed in).
    AwaitingHumanMove,
    /// The human has moved; the bots are due.
    RunningAutomatedMoves,
    /// Every cell is claimed. Terminal.
    Finished,
}

/// One applied claim. Seed claims are recorded with round 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub owner: Owner,
    pub cell: Cell,
    pub round: u32,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) phase: Phase,
    /// Current round, starting at 1. Advances after each bot pass.
    pub(super) round: u32,
    pub(super) rng: GameRng,
    pub(super) history: Vector<ClaimRecord>,
}

impl GameState {
    /// Fresh game: validated config, four seed claims, awaiting the human.
    ///
    /// A 2×2 grid is full after seeding and starts out `Finished`.
    pub(super) fn new(config: GameConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        let mut board = Board::new(config.grid_size)?;
        board.seed_corners()?;

        let history = board
            .corner_seeds()
            .into_iter()
            .map(|(owner, cell)| ClaimRecord { owner, cell, round: 0 })
            .collect();

        let phase = if board.is_full() {
            Phase::Finished
        } else {
            Phase::AwaitingHumanMove
        };

        Ok(Self {
            config,
            board,
            phase,
            round: 1,
            rng,
            history,
        })
    }

    pub(super) fn record(&mut self, owner: Owner, cell: Cell) {
        self.history.push_back(ClaimRecord {
            owner,
            cell,
            round: self.round,
        });
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every claim in the order it was applied, seeds first.
    #[must_use]
    pub fn history(&self) -> &Vector<ClaimRecord> {
        &self.history
    }

    /// Checkpoint of the bots' random stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
