//! Persistent top-ten score list
//!
//! This module keeps the best final scores across play-throughs. The
//! [`Leaderboard`] itself is a plain value; persistence goes through the
//! [`Store`] trait so hosts can back it with browser local storage, a
//! file, or nothing at all. Player names are checked for emptiness,
//! length and profanity before they are recorded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rustrict::CensorStr;

use crate::constants::leaderboard::{MAX_ENTRIES, MAX_NAME_LENGTH};

/// A recorded result of one finished play-through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Display name the player entered
    pub name: String,
    /// Final score of the play-through
    pub score: u64,
}

/// Errors returned when validating a player name
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty or only whitespace
    #[error("name is empty")]
    Empty,
    /// Name contains inappropriate content
    #[error("name is inappropriate")]
    Sinful,
    /// Name exceeds the length limit
    #[error("name is too long")]
    TooLong,
}

/// Validates and normalizes a player name
///
/// Surrounding whitespace is trimmed before the checks.
///
/// # Errors
///
/// * [`NameError::Empty`] - nothing left after trimming
/// * [`NameError::TooLong`] - trimmed name exceeds the length limit
/// * [`NameError::Sinful`] - the profanity filter rejected it
pub fn validate_name(name: &str) -> Result<String, NameError> {
    let trimmed = rustrict::trim_whitespace(name);
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    if trimmed.is_inappropriate() {
        return Err(NameError::Sinful);
    }
    Ok(trimmed.to_string())
}

/// Abstraction over where leaderboard entries are persisted
///
/// The library never performs IO itself; a host implements this trait
/// over whatever storage it has.
pub trait Store {
    /// Loads the previously saved entries, empty if none were saved
    fn load(&self) -> Vec<ScoreEntry>;
    /// Saves the given entries, replacing any previous ones
    fn save(&self, entries: &[ScoreEntry]);
}

/// Top scores kept in descending order, at most ten entries
///
/// The ordering and size invariants are re-established on construction
/// and after every [`Leaderboard::record`], including when deserializing
/// data an older version or an outside edit left unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LeaderboardSerde")]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

#[derive(Deserialize)]
struct LeaderboardSerde {
    entries: Vec<ScoreEntry>,
}

impl From<LeaderboardSerde> for Leaderboard {
    fn from(serde: LeaderboardSerde) -> Self {
        let mut leaderboard = Self {
            entries: serde.entries,
        };
        leaderboard.normalize();
        leaderboard
    }
}

impl Leaderboard {
    /// Loads the leaderboard from a store
    pub fn load_from(store: &impl Store) -> Self {
        let mut leaderboard = Self {
            entries: store.load(),
        };
        leaderboard.normalize();
        leaderboard
    }

    /// Saves the leaderboard to a store
    pub fn save_to(&self, store: &impl Store) {
        store.save(&self.entries);
    }

    /// Records a finished play-through under a validated name
    ///
    /// The new entry is ranked by score; on ties, earlier entries stay
    /// ahead of later ones. Entries past the tenth place are dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`NameError`] when the name fails validation; the
    /// leaderboard is left unchanged in that case.
    pub fn record(&mut self, name: &str, score: u64) -> Result<(), NameError> {
        let name = validate_name(name)?;
        self.entries.push(ScoreEntry { name, score });
        self.normalize();
        Ok(())
    }

    /// Entries in rank order, best first
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory store standing in for a host's persistence
    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Vec<ScoreEntry>>,
    }

    impl Store for MemoryStore {
        fn load(&self) -> Vec<ScoreEntry> {
            self.saved.borrow().clone()
        }

        fn save(&self, entries: &[ScoreEntry]) {
            *self.saved.borrow_mut() = entries.to_vec();
        }
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut leaderboard = Leaderboard::default();
        leaderboard.record("amira", 1_000).unwrap();
        leaderboard.record("basim", 32_000).unwrap();
        leaderboard.record("celine", 500).unwrap();

        let scores: Vec<u64> = leaderboard.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![32_000, 1_000, 500]);
    }

    #[test]
    fn test_only_top_ten_kept() {
        let mut leaderboard = Leaderboard::default();
        for score in 1..=11 {
            leaderboard.record("player", score * 100).unwrap();
        }
        assert_eq!(leaderboard.entries().len(), 10);
        assert_eq!(leaderboard.entries()[0].score, 1_100);
        assert_eq!(leaderboard.entries()[9].score, 200);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut leaderboard = Leaderboard::default();
        leaderboard.record("first", 1_000).unwrap();
        leaderboard.record("second", 1_000).unwrap();

        let names: Vec<&str> = leaderboard
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_name_trimmed_before_recording() {
        let mut leaderboard = Leaderboard::default();
        leaderboard.record("  nadia  ", 100).unwrap();
        assert_eq!(leaderboard.entries()[0].name, "nadia");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut leaderboard = Leaderboard::default();
        assert_eq!(leaderboard.record("   ", 100), Err(NameError::Empty));
        assert!(leaderboard.entries().is_empty());
    }

    #[test]
    fn test_long_name_rejected() {
        let mut leaderboard = Leaderboard::default();
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(leaderboard.record(&name, 100), Err(NameError::TooLong));
    }

    #[test]
    fn test_inappropriate_name_rejected() {
        let mut leaderboard = Leaderboard::default();
        assert_eq!(leaderboard.record("fuck", 100), Err(NameError::Sinful));
    }

    #[test]
    fn test_store_round_trip() {
        let store = MemoryStore::default();
        let mut leaderboard = Leaderboard::default();
        leaderboard.record("amira", 64_000).unwrap();
        leaderboard.save_to(&store);

        let restored = Leaderboard::load_from(&store);
        assert_eq!(restored, leaderboard);
    }

    #[test]
    fn test_deserialization_restores_invariants() {
        let json = r#"{"entries":[
            {"name":"low","score":100},
            {"name":"high","score":1000000}
        ]}"#;
        let leaderboard: Leaderboard = serde_json::from_str(json).unwrap();
        assert_eq!(leaderboard.entries()[0].name, "high");
    }
}
