//! Moves and outcomes

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A hand shape thrown in one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Every move, in the order the opponent samples from.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Whether `self` beats `other`.
    ///
    /// Rock crushes scissors, scissors cut paper, paper covers rock.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Move::Rock => "✊",
            Move::Paper => "✋",
            Move::Scissors => "✌️",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown move: {0:?}")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "rock" | "r" | "✊" => Ok(Move::Rock),
            "paper" | "p" | "✋" => Ok(Move::Paper),
            // The scissors glyph is usually sent with a variation selector
            "scissors" | "s" | "✌️" | "✌" => Ok(Move::Scissors),
            _ => Err(ParseMoveError(trimmed.to_string())),
        }
    }
}

/// Result of a round from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    pub fn label(self) -> &'static str {
        match self {
            RoundOutcome::Win => "Victory!",
            RoundOutcome::Lose => "Defeat!",
            RoundOutcome::Draw => "Tie!",
        }
    }

    pub fn is_draw(self) -> bool {
        self == RoundOutcome::Draw
    }
}

/// Winner of a finished match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    PlayerWins,
    OpponentWins,
}

impl MatchOutcome {
    pub fn label(self) -> &'static str {
        match self {
            MatchOutcome::PlayerWins => "Champion!",
            MatchOutcome::OpponentWins => "CPU Wins!",
        }
    }
}
