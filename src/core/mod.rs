//! Core value types: owners, cells, errors, RNG, configuration.
//!
//! Everything here is plain data with no game flow; the board, the rules,
//! the bots and the turn controller are built on top.

pub mod cell;
pub mod config;
pub mod error;
pub mod owner;
pub mod rng;

pub use cell::{Cell, CellState};
pub use config::{CandidateWeighting, GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use error::{ConquestError, Result};
pub use owner::{Owner, OwnerMap, OWNER_COUNT};
pub use rng::{GameRng, GameRngState};
