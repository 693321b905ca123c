//! Automated players.
//!
//! Bots have no strategy: each turn they collect the unclaimed cells
//! bordering their territory and let a `MovePolicy` pick one at random.

pub mod player;
pub mod policy;

pub use player::{candidates, AutomatedPlayer, BotMove};
pub use policy::{MovePolicy, UniformRandom};
