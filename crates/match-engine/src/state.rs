//! Match state read by the presentation layer

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::moves::{MatchOutcome, Move, RoundOutcome};

/// Phase of the current match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "winner", rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for the player to pick a move.
    Selecting,
    /// Both moves are shown; waiting for the player to continue.
    Revealed,
    /// Match settled. Terminal until reset.
    MatchOver(MatchOutcome),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Selecting => f.write_str("selecting"),
            Stage::Revealed => f.write_str("revealed"),
            Stage::MatchOver(_) => f.write_str("match over"),
        }
    }
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u8,
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: RoundOutcome,
    pub player_round_wins: u8,
    pub opponent_round_wins: u8,
}

/// Matches won and lost across the lifetime of the install
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeScore {
    #[serde(default)]
    pub matches_won: u32,
    #[serde(default)]
    pub matches_lost: u32,
}

impl LifetimeScore {
    pub fn total(&self) -> u32 {
        self.matches_won.saturating_add(self.matches_lost)
    }
}

/// Everything a UI needs to render the screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub stage: Stage,
    /// 1-based; a drawn round is replayed under the same number.
    pub round: u8,
    pub player_round_wins: u8,
    pub opponent_round_wins: u8,
    pub last_outcome: Option<RoundOutcome>,
    pub player_move: Option<Move>,
    pub opponent_move: Option<Move>,
    pub lifetime: LifetimeScore,
    /// Rounds of the current match, draws included.
    pub history: Vec<RoundRecord>,
}

impl MatchState {
    pub fn new(lifetime: LifetimeScore) -> Self {
        Self {
            stage: Stage::Selecting,
            round: 1,
            player_round_wins: 0,
            opponent_round_wins: 0,
            last_outcome: None,
            player_move: None,
            opponent_move: None,
            lifetime,
            history: Vec::new(),
        }
    }

    /// Clear the in-progress match, keeping lifetime counters.
    pub(crate) fn clear_match(&mut self) {
        *self = Self::new(self.lifetime);
    }

    pub fn is_over(&self) -> bool {
        matches!(self.stage, Stage::MatchOver(_))
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.stage {
            Stage::MatchOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(LifetimeScore::default())
    }
}
