//! Match state machine
//!
//! ```text
//!   Selecting --select_move--> Revealed --advance (draw / rounds left)--> Selecting
//!                              Revealed --advance (decided) / finish_match--> MatchOver
//!   any stage --reset_match--> Selecting
//! ```

use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::judge;
use crate::moves::{MatchOutcome, Move, RoundOutcome};
use crate::random::RandomSource;
use crate::state::{LifetimeScore, MatchState, RoundRecord, Stage};
use crate::store::ScoreStore;

/// Plays matches against a computer opponent drawing moves from `R`,
/// keeping lifetime counters in `S`.
pub struct MatchEngine<R, S> {
    config: MatchConfig,
    state: MatchState,
    rng: R,
    store: S,
}

impl<R: RandomSource, S: ScoreStore> MatchEngine<R, S> {
    /// Build an engine and load lifetime counters from `store`.
    pub fn new(config: MatchConfig, rng: R, mut store: S) -> Result<Self, MatchError> {
        config.validate()?;
        let lifetime = store.load()?;
        debug!(
            won = lifetime.matches_won,
            lost = lifetime.matches_lost,
            "loaded lifetime score"
        );
        Ok(Self {
            config,
            state: MatchState::new(lifetime),
            rng,
            store,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn round(&self) -> u8 {
        self.state.round
    }

    pub fn lifetime(&self) -> LifetimeScore {
        self.state.lifetime
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.state.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Throw `mv` against a freshly drawn opponent move.
    pub fn select_move(&mut self, mv: Move) -> Result<RoundOutcome, MatchError> {
        self.expect_stage("select_move", Stage::Selecting)?;

        let opponent = Move::ALL[self.rng.next_range(Move::ALL.len() as u32) as usize];
        let outcome = judge(mv, opponent);

        let state = &mut self.state;
        match outcome {
            RoundOutcome::Win => state.player_round_wins += 1,
            RoundOutcome::Lose => state.opponent_round_wins += 1,
            RoundOutcome::Draw => {}
        }
        state.player_move = Some(mv);
        state.opponent_move = Some(opponent);
        state.last_outcome = Some(outcome);
        state.history.push(RoundRecord {
            round: state.round,
            player_move: mv,
            opponent_move: opponent,
            outcome,
            player_round_wins: state.player_round_wins,
            opponent_round_wins: state.opponent_round_wins,
        });
        state.stage = Stage::Revealed;

        debug!(
            round = state.round,
            player = %mv,
            opponent = %opponent,
            ?outcome,
            player_wins = state.player_round_wins,
            opponent_wins = state.opponent_round_wins,
            "round revealed"
        );
        Ok(outcome)
    }

    /// True once a side has the winning round count, or the final round
    /// ended without a draw. Always false outside `Revealed`.
    pub fn is_match_decided(&self) -> bool {
        let s = &self.state;
        s.stage == Stage::Revealed
            && (s.player_round_wins >= self.config.wins_needed
                || s.opponent_round_wins >= self.config.wins_needed
                || (s.round == self.config.rounds
                    && matches!(s.last_outcome, Some(outcome) if !outcome.is_draw())))
    }

    /// Move on from a revealed round. Returns the stage entered.
    pub fn advance(&mut self) -> Result<Stage, MatchError> {
        self.expect_stage("advance", Stage::Revealed)?;

        if self.state.last_outcome == Some(RoundOutcome::Draw) {
            debug!(round = self.state.round, "draw, replaying round");
            self.state.stage = Stage::Selecting;
        } else if self.is_match_decided() || self.state.round >= self.config.rounds {
            self.finish_match()?;
        } else {
            self.state.round += 1;
            self.state.stage = Stage::Selecting;
        }
        Ok(self.state.stage)
    }

    /// Settle a decided match and record it in the lifetime counters.
    ///
    /// The counters change in memory before they are saved; if the save
    /// fails the match is still over and `persist` can retry.
    pub fn finish_match(&mut self) -> Result<MatchOutcome, MatchError> {
        self.expect_stage("finish_match", Stage::Revealed)?;

        let s = &self.state;
        let outcome = if !self.is_match_decided() || s.player_round_wins == s.opponent_round_wins {
            warn!(round = s.round, "finish_match called on an undecided match");
            return Err(MatchError::Undecided {
                round: s.round,
                player: s.player_round_wins,
                opponent: s.opponent_round_wins,
            });
        } else if s.player_round_wins > s.opponent_round_wins {
            MatchOutcome::PlayerWins
        } else {
            MatchOutcome::OpponentWins
        };

        let lifetime = &mut self.state.lifetime;
        match outcome {
            MatchOutcome::PlayerWins => lifetime.matches_won = lifetime.matches_won.saturating_add(1),
            MatchOutcome::OpponentWins => lifetime.matches_lost = lifetime.matches_lost.saturating_add(1),
        }
        self.state.stage = Stage::MatchOver(outcome);

        info!(
            ?outcome,
            player_wins = self.state.player_round_wins,
            opponent_wins = self.state.opponent_round_wins,
            won = self.state.lifetime.matches_won,
            lost = self.state.lifetime.matches_lost,
            "match over"
        );
        self.persist()?;
        Ok(outcome)
    }

    /// Start a new match. `hard` also wipes the lifetime counters.
    pub fn reset_match(&mut self, hard: bool) -> Result<(), MatchError> {
        self.state.clear_match();
        if hard {
            self.state.lifetime = LifetimeScore::default();
            info!("lifetime score cleared");
            self.persist()?;
        } else {
            debug!("match reset");
        }
        Ok(())
    }

    /// Write the current lifetime counters to the store.
    pub fn persist(&mut self) -> Result<(), MatchError> {
        self.store.save(&self.state.lifetime).map_err(|e| {
            warn!(error = %e, "failed to save lifetime score");
            MatchError::from(e)
        })
    }

    fn expect_stage(&self, op: &'static str, expected: Stage) -> Result<(), MatchError> {
        if self.state.stage == expected {
            Ok(())
        } else {
            warn!(op, stage = %self.state.stage, "operation rejected in current stage");
            Err(MatchError::InvalidStage { op, stage: self.state.stage })
        }
    }
}
