//! Move legality.
//!
//! `ConquestRule` is the only path by which game flow mutates the board:
//! the human's claims and every bot claim go through `ConquestRule::apply`.

pub mod conquest;

pub use conquest::{ClaimOutcome, ConquestRule, Rejection};
