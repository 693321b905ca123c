//! The adjacency conquest rule.
//!
//! A claim is legal iff the target is unclaimed and at least one of its
//! orthogonal neighbors already belongs to the claimant. Seed claims are
//! placed by the board directly and never pass through here.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Cell, CellState, Owner, Result};

/// Why a move was not applied.
///
/// Rejections are normal game flow, never errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// Target cell already belongs to someone.
    AlreadyClaimed,
    /// Target cell does not border any cell of the claimant.
    NotAdjacent,
    /// The human moved while the bots were due.
    NotYourTurn,
    /// The game is over.
    GameFinished,
    /// The human tried to pass while a legal claim exists.
    MustClaim,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::AlreadyClaimed => "cell is already claimed",
            Rejection::NotAdjacent => "cell does not border your territory",
            Rejection::NotYourTurn => "automated players have not moved yet",
            Rejection::GameFinished => "game is finished",
            Rejection::MustClaim => "a legal claim is available",
        };
        f.write_str(reason)
    }
}

/// Outcome of evaluating a claim against the rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimOutcome {
    Claimed,
    Rejected(Rejection),
}

impl ClaimOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, ClaimOutcome::Claimed)
    }

    #[must_use]
    pub fn rejection(self) -> Option<Rejection> {
        match self {
            ClaimOutcome::Claimed => None,
            ClaimOutcome::Rejected(reason) => Some(reason),
        }
    }
}

/// Stateless legality check and application of a single claim.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConquestRule;

impl ConquestRule {
    /// Evaluate a claim without touching the board.
    ///
    /// `Err` only for out-of-bounds targets.
    pub fn check(board: &Board, owner: Owner, cell: Cell) -> Result<ClaimOutcome> {
        if board.cell_state(cell)?.is_claimed() {
            return Ok(ClaimOutcome::Rejected(Rejection::AlreadyClaimed));
        }

        for neighbor in board.adjacent_cells(cell)? {
            if board.cell_state(neighbor)? == CellState::ClaimedBy(owner) {
                return Ok(ClaimOutcome::Claimed);
            }
        }

        Ok(ClaimOutcome::Rejected(Rejection::NotAdjacent))
    }

    pub fn is_legal(board: &Board, owner: Owner, cell: Cell) -> Result<bool> {
        Ok(Self::check(board, owner, cell)?.is_accepted())
    }

    /// Evaluate a claim and apply it if legal.
    pub fn apply(board: &mut Board, owner: Owner, cell: Cell) -> Result<ClaimOutcome> {
        let outcome = Self::check(board, owner, cell)?;
        if outcome.is_accepted() {
            board.claim(cell, owner)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConquestError;

    fn seeded(size: usize) -> Board {
        let mut board = Board::new(size).unwrap();
        board.seed_corners().unwrap();
        board
    }

    #[test]
    fn test_adjacent_claim_is_legal() {
        let mut board = seeded(4);

        assert_eq!(
            ConquestRule::apply(&mut board, Owner::Human, Cell::new(0, 1)),
            Ok(ClaimOutcome::Claimed)
        );
        assert_eq!(board.cell_state(Cell::new(0, 1)), Ok(CellState::ClaimedBy(Owner::Human)));
        assert_eq!(board.territory_count(Owner::Human), 2);
    }

    #[test]
    fn test_non_adjacent_claim_rejected() {
        let mut board = seeded(4);

        let outcome = ConquestRule::apply(&mut board, Owner::Human, Cell::new(2, 2)).unwrap();
        assert_eq!(outcome, ClaimOutcome::Rejected(Rejection::NotAdjacent));
        assert_eq!(board.cell_state(Cell::new(2, 2)), Ok(CellState::Unclaimed));
    }

    #[test]
    fn test_diagonal_does_not_count() {
        let mut board = seeded(4);

        // (1,1) touches the human seed only diagonally.
        assert_eq!(ConquestRule::is_legal(&board, Owner::Human, Cell::new(1, 1)), Ok(false));
        ConquestRule::apply(&mut board, Owner::Human, Cell::new(1, 0)).unwrap();
        assert_eq!(ConquestRule::is_legal(&board, Owner::Human, Cell::new(1, 1)), Ok(true));
    }

    #[test]
    fn test_claimed_cell_rejected() {
        let mut board = seeded(4);
        ConquestRule::apply(&mut board, Owner::Human, Cell::new(0, 1)).unwrap();

        // Bot2's seed at (0,3) is not adjacent to (0,1), but an owned cell is
        // rejected as claimed before adjacency is considered.
        let outcome = ConquestRule::apply(&mut board, Owner::Bot2, Cell::new(0, 1)).unwrap();
        assert_eq!(outcome.rejection(), Some(Rejection::AlreadyClaimed));

        let own = ConquestRule::apply(&mut board, Owner::Human, Cell::new(0, 0)).unwrap();
        assert_eq!(own.rejection(), Some(Rejection::AlreadyClaimed));
        assert_eq!(board.territory_count(Owner::Human), 2);
    }

    #[test]
    fn test_rule_uses_claimants_own_territory() {
        let board = seeded(4);

        // (0,2) borders Bot2's seed, not the human's.
        assert_eq!(ConquestRule::is_legal(&board, Owner::Bot2, Cell::new(0, 2)), Ok(true));
        assert_eq!(ConquestRule::is_legal(&board, Owner::Human, Cell::new(0, 2)), Ok(false));
    }

    #[test]
    fn test_out_of_bounds_is_error() {
        let mut board = seeded(4);
        assert!(matches!(
            ConquestRule::apply(&mut board, Owner::Human, Cell::new(0, 4)),
            Err(ConquestError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(Rejection::NotAdjacent.to_string(), "cell does not border your territory");
    }
}
