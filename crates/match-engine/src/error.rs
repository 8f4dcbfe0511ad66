//! Error types

use crate::state::Stage;

/// Errors raised by `MatchEngine` operations
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Operation called in a stage that does not accept it.
    #[error("{op} is not allowed while {stage}")]
    InvalidStage { op: &'static str, stage: Stage },

    /// `finish_match` reached before either side has won.
    #[error("match is not decided yet ({player}-{opponent} in round {round})")]
    Undecided { round: u8, player: u8, opponent: u8 },

    #[error("score storage failed: {0}")]
    Store(#[from] StoreError),

    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by a `ScoreStore`
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed score document: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors raised while building a `MatchConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a match needs at least one round")]
    ZeroRounds,

    #[error("round count must be odd, got {0}")]
    EvenRounds(u8),

    #[error("wins_needed must be {expected} for {rounds} rounds, got {got}")]
    WinsNeeded { rounds: u8, expected: u8, got: u8 },

    #[error("could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
