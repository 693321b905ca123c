//! Move selection policies for automated players.

use crate::core::{Cell, GameRng};

/// Picks one cell from a candidate pool.
///
/// Returning `None` means pass. Policies must draw only from `rng` so that
/// seeded games replay exactly.
pub trait MovePolicy: Send + Sync {
    fn choose(&self, candidates: &[Cell], rng: &mut GameRng) -> Option<Cell>;
}

/// Uniform choice over the pool.
///
/// Whether that is uniform over *cells* depends on the pool: with
/// `CandidateWeighting::Distinct` each cell appears once.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn choose(&self, candidates: &[Cell], rng: &mut GameRng) -> Option<Cell> {
        rng.choose(candidates).copied()
    }
}
