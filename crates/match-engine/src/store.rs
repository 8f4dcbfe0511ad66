//! Persistence of lifetime win/loss counters
//!
//! The engine loads the counters once at construction and saves them on
//! every change (match finished, hard reset).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::state::LifetimeScore;

/// Key-value home for the two lifetime counters
pub trait ScoreStore {
    fn load(&mut self) -> Result<LifetimeScore, StoreError>;
    fn save(&mut self, score: &LifetimeScore) -> Result<(), StoreError>;
}

/// In-process store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    score: LifetimeScore,
    saves: u32,
}

impl MemoryStore {
    pub fn new(score: LifetimeScore) -> Self {
        Self { score, saves: 0 }
    }

    pub fn score(&self) -> LifetimeScore {
        self.score
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<LifetimeScore, StoreError> {
        Ok(self.score)
    }

    fn save(&mut self, score: &LifetimeScore) -> Result<(), StoreError> {
        self.score = *score;
        self.saves += 1;
        Ok(())
    }
}

/// JSON document on disk: `{"matches_won":N,"matches_lost":M}`
///
/// A missing file reads as zero counters.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<LifetimeScore, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(LifetimeScore::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, score: &LifetimeScore) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.temp_path();
        fs::write(&tmp, serde_json::to_vec(score)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), LifetimeScore::default());

        let score = LifetimeScore { matches_won: 3, matches_lost: 2 };
        store.save(&score).unwrap();
        assert_eq!(store.load().unwrap(), score);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_file_store_missing_file_is_zero() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(tmp.path().join("scores.json"));
        assert_eq!(store.load().unwrap(), LifetimeScore::default());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("scores.json");
        let score = LifetimeScore { matches_won: 9, matches_lost: 4 };

        JsonFileStore::new(&path).save(&score).unwrap();
        let loaded = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(loaded, score);
        assert!(!path.with_file_name("scores.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scores.json");
        fs::write(&path, "won=3").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));
    }

    #[test]
    fn test_file_store_loads_max_counter() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scores.json");
        fs::write(&path, r#"{"matches_won":4294967295,"matches_lost":0}"#).unwrap();

        let score = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(score.matches_won, u32::MAX);
    }
}
