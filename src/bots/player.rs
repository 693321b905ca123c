//! Automated player: enumerate reachable cells, pick one, claim it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::board::Board;
use crate::core::{CandidateWeighting, Cell, GameRng, Owner, Result};
use crate::rules::{ClaimOutcome, ConquestRule};

use super::policy::{MovePolicy, UniformRandom};

/// What a bot did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotMove {
    Claimed(Cell),
    /// No reachable unclaimed cell. Not an error.
    Passed,
}

impl BotMove {
    #[must_use]
    pub fn cell(self) -> Option<Cell> {
        match self {
            BotMove::Claimed(cell) => Some(cell),
            BotMove::Passed => None,
        }
    }
}

/// Distinct unclaimed cells bordering `owner`'s territory.
///
/// Order is first discovery: owned cells row-major, each one's neighbors
/// up, down, left, right. A cell bordering several owned cells appears once.
pub fn candidates(board: &Board, owner: Owner) -> Result<Vec<Cell>> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    scan(board, owner, |cell| {
        if seen.insert(cell) {
            out.push(cell);
        }
    })?;
    Ok(out)
}

fn scan(board: &Board, owner: Owner, mut visit: impl FnMut(Cell)) -> Result<()> {
    for owned in board.cells_owned_by(owner) {
        for neighbor in board.adjacent_cells(owned)? {
            if !board.cell_state(neighbor)?.is_claimed() {
                visit(neighbor);
            }
        }
    }
    Ok(())
}

/// Automated player driven by a `MovePolicy`.
#[derive(Clone, Debug, Default)]
pub struct AutomatedPlayer<P: MovePolicy = UniformRandom> {
    policy: P,
    weighting: CandidateWeighting,
}

impl AutomatedPlayer<UniformRandom> {
    #[must_use]
    pub fn new(weighting: CandidateWeighting) -> Self {
        Self::with_policy(UniformRandom, weighting)
    }
}

impl<P: MovePolicy> AutomatedPlayer<P> {
    #[must_use]
    pub fn with_policy(policy: P, weighting: CandidateWeighting) -> Self {
        Self { policy, weighting }
    }

    #[must_use]
    pub fn weighting(&self) -> CandidateWeighting {
        self.weighting
    }

    /// The pool the policy draws from, shaped by the configured weighting.
    pub fn candidate_pool(&self, board: &Board, owner: Owner) -> Result<Vec<Cell>> {
        match self.weighting {
            CandidateWeighting::Distinct => candidates(board, owner),
            CandidateWeighting::PerOwnedNeighbor => {
                let mut out = Vec::new();
                scan(board, owner, |cell| out.push(cell))?;
                Ok(out)
            }
        }
    }

    /// Play one turn for `owner`: claim a chosen candidate or pass.
    pub fn take_turn(&self, board: &mut Board, owner: Owner, rng: &mut GameRng) -> Result<BotMove> {
        let pool = self.candidate_pool(board, owner)?;
        let Some(cell) = self.policy.choose(&pool, rng) else {
            trace!(%owner, "no reachable cell, passing");
            return Ok(BotMove::Passed);
        };

        match ConquestRule::apply(board, owner, cell)? {
            ClaimOutcome::Claimed => Ok(BotMove::Claimed(cell)),
            ClaimOutcome::Rejected(reason) => {
                warn!(%owner, %cell, %reason, "policy chose an illegal cell, passing");
                Ok(BotMove::Passed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    /// Always takes the first candidate, exposing enumeration order.
    struct FirstCandidate;

    impl MovePolicy for FirstCandidate {
        fn choose(&self, candidates: &[Cell], _rng: &mut GameRng) -> Option<Cell> {
            candidates.first().copied()
        }
    }

    fn seeded(size: usize) -> Board {
        let mut board = Board::new(size).unwrap();
        board.seed_corners().unwrap();
        board
    }

    #[test]
    fn test_candidates_from_seed() {
        let board = seeded(4);

        let human = candidates(&board, Owner::Human).unwrap();
        assert_eq!(human, vec![Cell::new(1, 0), Cell::new(0, 1)]);

        let bot1 = candidates(&board, Owner::Bot1).unwrap();
        assert_eq!(bot1, vec![Cell::new(2, 3), Cell::new(3, 2)]);
    }

    #[test]
    fn test_candidates_are_distinct() {
        let mut board = Board::new(3).unwrap();
        board.claim(Cell::new(0, 0), Owner::Bot1).unwrap();
        board.claim(Cell::new(1, 1), Owner::Bot1).unwrap();

        // (0,1) and (1,0) each border both owned cells.
        let distinct = candidates(&board, Owner::Bot1).unwrap();
        assert_eq!(
            distinct,
            vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(2, 1), Cell::new(1, 2)]
        );

        let legacy = AutomatedPlayer::new(CandidateWeighting::PerOwnedNeighbor);
        let pool = legacy.candidate_pool(&board, Owner::Bot1).unwrap();
        assert_eq!(pool.len(), 6);
        assert_eq!(pool.iter().filter(|&&c| c == Cell::new(0, 1)).count(), 2);
    }

    #[test]
    fn test_take_turn_claims_first_candidate() {
        let mut board = seeded(4);
        let mut rng = GameRng::new(0);
        let bot = AutomatedPlayer::with_policy(FirstCandidate, CandidateWeighting::Distinct);

        let played = bot.take_turn(&mut board, Owner::Bot2, &mut rng).unwrap();
        assert_eq!(played, BotMove::Claimed(Cell::new(1, 3)));
        assert_eq!(board.cell_state(Cell::new(1, 3)), Ok(CellState::ClaimedBy(Owner::Bot2)));
        assert_eq!(board.territory_count(Owner::Bot2), 2);
    }

    #[test]
    fn test_take_turn_passes_when_boxed_in() {
        let mut board = Board::new(2).unwrap();
        board.seed_corners().unwrap();
        let mut rng = GameRng::new(0);
        let bot = AutomatedPlayer::new(CandidateWeighting::Distinct);

        for owner in Owner::BOTS {
            assert_eq!(bot.take_turn(&mut board, owner, &mut rng), Ok(BotMove::Passed));
        }
        assert_eq!(board.claimed_count(), 4);
    }

    #[test]
    fn test_owner_with_no_territory_passes() {
        let mut board = Board::new(3).unwrap();
        let mut rng = GameRng::new(0);
        let bot = AutomatedPlayer::new(CandidateWeighting::Distinct);

        assert_eq!(bot.take_turn(&mut board, Owner::Bot3, &mut rng), Ok(BotMove::Passed));
    }

    #[test]
    fn test_bot_move_cell() {
        assert_eq!(BotMove::Claimed(Cell::new(1, 2)).cell(), Some(Cell::new(1, 2)));
        assert_eq!(BotMove::Passed.cell(), None);
    }
}
