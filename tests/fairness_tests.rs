//! Bot candidate selection fairness.
//!
//! Board used throughout (B = Bot1, H = filler, . = empty):
//!
//! ```text
//!   H H H
//!   B . B      (1,1) borders both of Bot1's cells
//!   . H H      (2,0) borders only (1,0)
//! ```

use territory_conquest::board::Board;
use territory_conquest::bots::{candidates, AutomatedPlayer, BotMove};
use territory_conquest::core::{CandidateWeighting, Cell, GameRng, Owner};

const TRIALS: usize = 20_000;

const SHARED: Cell = Cell::new(1, 1);
const SINGLE: Cell = Cell::new(2, 0);

fn two_candidate_board() -> Board {
    let mut board = Board::new(3).unwrap();
    for cell in [Cell::new(1, 0), Cell::new(1, 2)] {
        board.claim(cell, Owner::Bot1).unwrap();
    }
    for cell in [
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(0, 2),
        Cell::new(2, 1),
        Cell::new(2, 2),
    ] {
        board.claim(cell, Owner::Human).unwrap();
    }
    board
}

/// Fraction of trials in which the bot took the shared cell.
fn shared_fraction(weighting: CandidateWeighting, seed: u64) -> f64 {
    let board = two_candidate_board();
    let bot = AutomatedPlayer::new(weighting);
    let mut rng = GameRng::new(seed);

    let mut shared = 0;
    for _ in 0..TRIALS {
        let mut trial = board.clone();
        match bot.take_turn(&mut trial, Owner::Bot1, &mut rng).unwrap() {
            BotMove::Claimed(cell) if cell == SHARED => shared += 1,
            BotMove::Claimed(cell) => assert_eq!(cell, SINGLE),
            BotMove::Passed => panic!("two legal cells are available"),
        }
    }
    shared as f64 / TRIALS as f64
}

#[test]
fn test_candidates_collapse_duplicates() {
    let board = two_candidate_board();
    assert_eq!(candidates(&board, Owner::Bot1).unwrap(), vec![SINGLE, SHARED]);
}

#[test]
fn test_distinct_weighting_is_uniform() {
    for seed in [1, 42, 777] {
        let fraction = shared_fraction(CandidateWeighting::Distinct, seed);
        assert!(
            (0.47..=0.53).contains(&fraction),
            "seed {seed}: shared cell chosen {fraction:.3} of the time"
        );
    }
}

#[test]
fn test_per_neighbor_weighting_favors_shared_cell() {
    let fraction = shared_fraction(CandidateWeighting::PerOwnedNeighbor, 42);
    assert!(
        (0.63..=0.70).contains(&fraction),
        "shared cell chosen {fraction:.3} of the time, expected about 2/3"
    );
}

#[test]
fn test_selection_is_reproducible() {
    assert_eq!(
        shared_fraction(CandidateWeighting::Distinct, 5),
        shared_fraction(CandidateWeighting::Distinct, 5)
    );
}
