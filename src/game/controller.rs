//! Turn controller: the state machine that drives a game.
//!
//! ```text
//!   AwaitingHumanMove --accepted claim/pass--> RunningAutomatedMoves
//!          ^                                          |
//!          +------- bots moved, board not full -------+
//!                                                     |
//!   Finished <-------- bots moved, board full --------+
//! ```
//!
//! A rejected human claim leaves the phase unchanged; the human retries.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::bots::{candidates, AutomatedPlayer, BotMove};
use crate::core::{Cell, ConquestError, GameConfig, GameRng, GameRngState, Owner, Result};
use crate::rules::{ClaimOutcome, ConquestRule, Rejection};

use super::snapshot::Snapshot;
use super::state::{ClaimRecord, GameState, Phase};

/// Result of a human move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    Accepted,
    Rejected(Rejection),
}

impl MoveResult {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveResult::Accepted)
    }
}

/// What the bots did in one automated turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round the moves belong to.
    pub round: u32,
    /// One entry per bot, in acting order.
    pub moves: [(Owner, BotMove); 3],
    /// True if the board filled up during this round.
    pub finished: bool,
}

impl RoundReport {
    /// Number of bots that claimed a cell (the rest passed).
    #[must_use]
    pub fn claims(&self) -> usize {
        self.moves.iter().filter(|(_, m)| m.cell().is_some()).count()
    }
}

/// Owns one game and sequences its turns.
///
/// All mutation goes through `&mut self`, so a controller is a single writer
/// by construction. Independent controllers share nothing.
#[derive(Clone, Debug)]
pub struct TurnController {
    state: GameState,
    bots: AutomatedPlayer,
}

impl TurnController {
    /// Start a game: validate the config and seed the four corners.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::start(config, rng)
    }

    /// Start a game on an N×N grid with the default seed.
    pub fn new_game(grid_size: usize) -> Result<Self> {
        Self::new(GameConfig::default().with_grid_size(grid_size))
    }

    fn start(config: GameConfig, rng: GameRng) -> Result<Self> {
        let bots = AutomatedPlayer::new(config.weighting);
        let state = GameState::new(config, rng)?;
        info!(grid_size = state.config.grid_size, seed = state.rng.seed(), "new game");
        Ok(Self { state, bots })
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn history(&self) -> &im::Vector<ClaimRecord> {
        &self.state.history
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    /// Cells the human may claim right now.
    pub fn human_candidates(&self) -> Result<Vec<Cell>> {
        candidates(&self.state.board, Owner::Human)
    }

    pub fn has_legal_move(&self, owner: Owner) -> Result<bool> {
        Ok(!candidates(&self.state.board, owner)?.is_empty())
    }

    /// Owner with the most territory; ties go to the earliest in turn order.
    #[must_use]
    pub fn leader(&self) -> Owner {
        let board = &self.state.board;
        Owner::ALL
            .into_iter()
            .fold(Owner::Human, |best, owner| {
                if board.territory_count(owner) > board.territory_count(best) {
                    owner
                } else {
                    best
                }
            })
    }

    /// Winner of a finished game. `None` while the game is running.
    #[must_use]
    pub fn winner(&self) -> Option<Owner> {
        self.is_finished().then(|| self.leader())
    }

    /// Owners with their territory, most first; ties keep turn order.
    #[must_use]
    pub fn standings(&self) -> Vec<(Owner, u32)> {
        let mut standings: Vec<_> = self
            .state
            .board
            .territory_counts()
            .iter()
            .map(|(owner, &count)| (owner, count))
            .collect();
        standings.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        standings
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let board = &self.state.board;
        Snapshot {
            size: board.size(),
            cells: board.states().clone(),
            territory: board.territory_counts().clone(),
            phase: self.state.phase,
            round: self.state.round,
            winner: self.winner(),
        }
    }

    // === Turn flow ===

    /// Rejection for a human action in the current phase, if any.
    fn human_blocked(&self) -> Option<Rejection> {
        match self.state.phase {
            Phase::AwaitingHumanMove => None,
            Phase::RunningAutomatedMoves => Some(Rejection::NotYourTurn),
            Phase::Finished => Some(Rejection::GameFinished),
        }
    }

    /// Attempt a human claim.
    ///
    /// Out-of-bounds cells are an error in every phase. Everything else that
    /// prevents the claim is a `MoveResult::Rejected`.
    #[instrument(level = "debug", skip(self), fields(round = self.state.round))]
    pub fn submit_human_move(&mut self, cell: Cell) -> Result<MoveResult> {
        self.state.board.cell_state(cell)?;
        if let Some(reason) = self.human_blocked() {
            debug!(%reason, "human move rejected");
            return Ok(MoveResult::Rejected(reason));
        }

        match ConquestRule::apply(&mut self.state.board, Owner::Human, cell)? {
            ClaimOutcome::Claimed => {
                self.state.record(Owner::Human, cell);
                self.state.phase = Phase::RunningAutomatedMoves;
                Ok(MoveResult::Accepted)
            }
            ClaimOutcome::Rejected(reason) => {
                debug!(%reason, "human move rejected");
                Ok(MoveResult::Rejected(reason))
            }
        }
    }

    /// Skip the human's claim. Only allowed when the human has no legal claim.
    pub fn pass_human_turn(&mut self) -> Result<MoveResult> {
        if let Some(reason) = self.human_blocked() {
            return Ok(MoveResult::Rejected(reason));
        }
        if self.has_legal_move(Owner::Human)? {
            return Ok(MoveResult::Rejected(Rejection::MustClaim));
        }

        debug!(round = self.state.round, "human passes");
        self.state.phase = Phase::RunningAutomatedMoves;
        Ok(MoveResult::Accepted)
    }

    /// Let Bot1, Bot2 and Bot3 act once each, in that order, then close the round.
    ///
    /// Each bot sees the board as left by the previous one.
    #[instrument(level = "debug", skip(self), fields(round = self.state.round))]
    pub fn advance_automated_turn(&mut self) -> Result<RoundReport> {
        if self.state.phase != Phase::RunningAutomatedMoves {
            return Err(ConquestError::InvalidPhase {
                expected: Phase::RunningAutomatedMoves,
                actual: self.state.phase,
            });
        }

        let round = self.state.round;
        let mut moves = Owner::BOTS.map(|owner| (owner, BotMove::Passed));
        for (owner, played) in &mut moves {
            *played = self
                .bots
                .take_turn(&mut self.state.board, *owner, &mut self.state.rng)?;
            if let BotMove::Claimed(cell) = *played {
                self.state.record(*owner, cell);
            }
        }

        let finished = self.state.board.is_full();
        if finished {
            self.state.phase = Phase::Finished;
            info!(
                round,
                winner = %self.leader(),
                territory = ?self.standings(),
                "game finished"
            );
        } else {
            self.state.phase = Phase::AwaitingHumanMove;
            self.state.round += 1;
            debug!(unclaimed = self.state.board.unclaimed_count(), "round complete");
        }

        Ok(RoundReport { round, moves, finished })
    }

    /// Submit a human claim and, if accepted, run the bots.
    pub fn play_round(&mut self, cell: Cell) -> Result<(MoveResult, Option<RoundReport>)> {
        let result = self.submit_human_move(cell)?;
        if !result.is_accepted() {
            return Ok((result, None));
        }
        let report = self.advance_automated_turn()?;
        Ok((result, Some(report)))
    }

    // === Lifecycle ===

    /// Replace this game with a fresh one using the same config.
    ///
    /// The new game draws from a fork of the current random stream, so
    /// consecutive restarts do not replay the same bot moves.
    pub fn restart(&mut self) -> Result<()> {
        let rng = self.state.rng.fork();
        *self = Self::start(self.state.config.clone(), rng)?;
        Ok(())
    }

    /// Independent copy of this game with a forked random stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let mut state = self.state.clone();
        state.rng = self.state.rng.fork();
        Self {
            state,
            bots: self.bots.clone(),
        }
    }

    /// Resume the bots' random stream from a checkpoint taken with
    /// `GameState::rng_state`.
    pub fn restore_rng(&mut self, checkpoint: &GameRngState) {
        self.state.rng = GameRng::from_state(checkpoint);
    }
}
