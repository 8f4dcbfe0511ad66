//! Match Engine for Rock-Paper-Scissors
//!
//! Best-of-three match state machine played against a computer opponent.
//! This crate is compiled to:
//! - Native (for hosts driving the engine directly)
//! - WASM (for browser and watch front ends)

mod config;
mod engine;
mod error;
mod moves;
mod random;
mod state;
mod store;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::MatchConfig;
pub use engine::MatchEngine;
pub use error::{ConfigError, MatchError, StoreError};
pub use moves::{MatchOutcome, Move, ParseMoveError, RoundOutcome};
pub use random::{RandomSource, ScriptedRng, SeededRng};
pub use state::{LifetimeScore, MatchState, RoundRecord, Stage};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};

/// Outcome of one round from the player's side
pub fn judge(player: Move, opponent: Move) -> RoundOutcome {
    if player == opponent {
        RoundOutcome::Draw
    } else if player.beats(opponent) {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}
