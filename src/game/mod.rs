//! Game flow: turn sequencing, end detection, and the host-facing interface.
//!
//! A presentation layer drives a game entirely through `TurnController`:
//!
//! ```
//! use territory_conquest::core::{Cell, Owner};
//! use territory_conquest::game::TurnController;
//!
//! let mut game = TurnController::new_game(4).unwrap();
//!
//! assert!(game.submit_human_move(Cell::new(0, 1)).unwrap().is_accepted());
//! let report = game.advance_automated_turn().unwrap();
//! assert_eq!(report.moves[0].0, Owner::Bot1);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.territory[Owner::Human], 2);
//! ```

pub mod controller;
pub mod snapshot;
pub mod state;

pub use controller::{MoveResult, RoundReport, TurnController};
pub use snapshot::Snapshot;
pub use state::{ClaimRecord, GameState, Phase};
