//! Structural faults.
//!
//! Only programmer errors live here: bad coordinates, bad owner indices,
//! bad configuration, malformed serialized boards, and controller calls
//! made in the wrong phase.
//! Rejected moves are ordinary outcomes and are reported through
//! `ClaimOutcome`/`MoveResult` instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Phase;

/// Errors surfaced by the conquest core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConquestError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: i64, col: i64, size: usize },

    #[error("no owner with index {0}")]
    UnknownOwner(u8),

    #[error("grid size {size} is not supported (expected {min}..={max})")]
    InvalidGridSize { size: usize, min: usize, max: usize },

    #[error("a {size}x{size} grid needs {expected} cells, got {actual}")]
    CellCountMismatch { size: usize, expected: usize, actual: usize },

    #[error("operation requires phase {expected:?}, game is in {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConquestError>;
