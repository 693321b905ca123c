//! The board: owns every cell's claim state.
//!
//! Answers occupancy and adjacency queries and performs raw claims.
//! Whether a claim is *legal* is decided by `rules::ConquestRule`.

pub mod grid;

pub use grid::{Board, Neighbors};
