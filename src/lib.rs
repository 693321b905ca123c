//! # territory-conquest
//!
//! A four-player territory conquest game on a square grid.
//!
//! One human and three automated players start in the four corners and take
//! turns claiming empty cells orthogonally adjacent to cells they already
//! own. When no empty cell remains the player with the most territory wins.
//!
//! ## Design Principles
//!
//! 1. **Headless**: the core never renders. Hosts drive it through
//!    `TurnController` and read `Snapshot`s.
//!
//! 2. **Deterministic**: bot moves draw from a seeded ChaCha8 stream, so the
//!    same seed and the same human moves replay the same game.
//!
//! 3. **Rejections are not errors**: illegal claims come back as
//!    `MoveResult::Rejected`; `ConquestError` is reserved for structural
//!    faults such as out-of-bounds coordinates.
//!
//! ## Modules
//!
//! - `core`: Owners, cells, errors, RNG, configuration
//! - `board`: The claim grid with adjacency queries and territory counts
//! - `rules`: The adjacency conquest rule
//! - `bots`: Automated players and move policies
//! - `game`: Turn controller, game state, snapshots
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod bots;
pub mod core;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CandidateWeighting, Cell, CellState, ConquestError, GameConfig, GameRng, GameRngState, Owner,
    OwnerMap, Result,
};

pub use crate::board::Board;

pub use crate::rules::{ClaimOutcome, ConquestRule, Rejection};

pub use crate::bots::{AutomatedPlayer, BotMove, MovePolicy, UniformRandom};

pub use crate::game::{
    ClaimRecord, GameState, MoveResult, Phase, RoundReport, Snapshot, TurnController,
};
