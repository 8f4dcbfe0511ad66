//! Match length configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How many rounds a match lasts and how many round wins settle it
///
/// Only odd lengths with a strict-majority win target are accepted: once
/// the last round is reached both sides are level, so its non-draw result
/// always breaks the tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub rounds: u8,
    pub wins_needed: u8,
}

impl MatchConfig {
    /// Standard watch game: first to two, at most three rounds
    pub fn best_of_three() -> Self {
        Self { rounds: 3, wins_needed: 2 }
    }

    pub fn best_of(rounds: u8) -> Result<Self, ConfigError> {
        let config = Self { rounds, wins_needed: rounds / 2 + 1 };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.rounds % 2 == 0 {
            return Err(ConfigError::EvenRounds(self.rounds));
        }
        let expected = self.rounds / 2 + 1;
        if self.wins_needed != expected {
            return Err(ConfigError::WinsNeeded {
                rounds: self.rounds,
                expected,
                got: self.wins_needed,
            });
        }
        Ok(())
    }

    /// Parse `{"rounds": N, "wins_needed": M}`; a missing field falls back
    /// to the best-of-three value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct Raw {
            rounds: Option<u8>,
            wins_needed: Option<u8>,
        }

        let raw: Raw = serde_json::from_str(json)?;
        let config = match (raw.rounds, raw.wins_needed) {
            (None, None) => Self::best_of_three(),
            (Some(rounds), None) => Self { rounds, wins_needed: rounds / 2 + 1 },
            (rounds, Some(wins_needed)) => Self {
                rounds: rounds.unwrap_or(Self::best_of_three().rounds),
                wins_needed,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::best_of_three()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_best_of_three() {
        let config = MatchConfig::default();
        assert_eq!(config.rounds, 3);
        assert_eq!(config.wins_needed, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_best_of_odd_lengths() {
        assert_eq!(MatchConfig::best_of(1).unwrap().wins_needed, 1);
        assert_eq!(MatchConfig::best_of(5).unwrap().wins_needed, 3);
        assert_eq!(MatchConfig::best_of(7).unwrap().wins_needed, 4);
    }

    #[test]
    fn test_rejects_even_and_zero() {
        assert!(matches!(MatchConfig::best_of(0), Err(ConfigError::ZeroRounds)));
        assert!(matches!(MatchConfig::best_of(4), Err(ConfigError::EvenRounds(4))));
    }

    #[test]
    fn test_rejects_non_majority_target() {
        let config = MatchConfig { rounds: 3, wins_needed: 3 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WinsNeeded { rounds: 3, expected: 2, got: 3 })
        ));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(MatchConfig::from_json("{}").unwrap(), MatchConfig::best_of_three());
        assert_eq!(
            MatchConfig::from_json(r#"{"rounds": 5}"#).unwrap(),
            MatchConfig { rounds: 5, wins_needed: 3 }
        );
        assert_eq!(
            MatchConfig::from_json(r#"{"rounds": 5, "wins_needed": 3}"#).unwrap(),
            MatchConfig { rounds: 5, wins_needed: 3 }
        );
        assert!(matches!(
            MatchConfig::from_json(r#"{"rounds": 2}"#),
            Err(ConfigError::EvenRounds(2))
        ));
        assert!(matches!(MatchConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }
}
