//! Question bank selection
//!
//! This module derives the fifteen-question playlist for one play-through
//! from the full question pool and the user's settings. Selection is a
//! pure function over its inputs apart from the injected random source,
//! which keeps it reproducible under a seeded [`fastrand::Rng`]. Shuffles
//! are uniform Fisher-Yates permutations via [`fastrand::Rng::shuffle`].

use enum_map::EnumMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::selection::{GAME_LENGTH, TIER_LENGTH};
use crate::question::{Difficulty, Question};
use crate::settings::Settings;

/// The chosen filters do not leave enough qualifying questions
///
/// Raised when a difficulty tier has fewer than five questions in mixed
/// mode, when a specific tier has fewer than fifteen, or when an
/// AI-generated batch is shorter than a full game. The caller reports it
/// and stays on the home screen; no partial game ever starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not enough questions match the selected difficulty and categories")]
pub struct InsufficientQuestions;

/// An ordered sequence of exactly fifteen questions for one play-through
///
/// A `Playlist` can only be obtained from [`select`] or from
/// [`Playlist::new`], so holding one proves the length invariant. It is
/// immutable once the game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>")]
pub struct Playlist(Vec<Question>);

impl Playlist {
    /// Accepts a question batch as a playlist
    ///
    /// This is the acceptance rule for externally generated batches: a
    /// batch longer than a game is truncated to the first fifteen
    /// questions, a shorter one is rejected. Difficulty distribution of
    /// such batches is trusted, not re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientQuestions`] if fewer than fifteen questions
    /// were supplied.
    pub fn new(mut questions: Vec<Question>) -> Result<Self, InsufficientQuestions> {
        if questions.len() < GAME_LENGTH {
            return Err(InsufficientQuestions);
        }
        questions.truncate(GAME_LENGTH);
        Ok(Self(questions))
    }

    /// Returns the questions in play order
    pub fn questions(&self) -> &[Question] {
        &self.0
    }
}

impl TryFrom<Vec<Question>> for Playlist {
    type Error = InsufficientQuestions;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

/// Selects the fifteen questions for one play-through
///
/// Questions are first filtered by the settings' category set (a set
/// containing the general tag, or an empty set, keeps the whole pool).
/// In mixed mode the filtered pool is partitioned by difficulty, five
/// questions are drawn from each tier, and the combined fifteen are
/// shuffled once more so tiers do not appear in blocks. With a specific
/// tier selected, fifteen questions are drawn from that tier alone.
///
/// # Arguments
///
/// * `pool` - The full question pool to draw from
/// * `settings` - Category and difficulty filters
/// * `rng` - Random source for shuffling; seed it for reproducibility
///
/// # Errors
///
/// Returns [`InsufficientQuestions`] if the filtered pool cannot supply
/// the required distribution.
pub fn select(
    pool: &[Question],
    settings: &Settings,
    rng: &mut fastrand::Rng,
) -> Result<Playlist, InsufficientQuestions> {
    let filtered = if settings.matches_all_categories() {
        pool.iter().collect_vec()
    } else {
        pool.iter()
            .filter(|q| settings.categories.contains(&q.category))
            .collect_vec()
    };

    let picked = match settings.difficulty.tier() {
        None => {
            let mut buckets: EnumMap<Difficulty, Vec<&Question>> = EnumMap::default();
            for question in filtered {
                buckets[question.difficulty].push(question);
            }
            if buckets.values().any(|bucket| bucket.len() < TIER_LENGTH) {
                return Err(InsufficientQuestions);
            }
            let mut picked = Vec::with_capacity(GAME_LENGTH);
            for (_, bucket) in &mut buckets {
                rng.shuffle(bucket);
                picked.extend(bucket.iter().take(TIER_LENGTH).copied().cloned());
            }
            rng.shuffle(&mut picked);
            picked
        }
        Some(tier) => {
            let mut matching = filtered
                .into_iter()
                .filter(|q| q.difficulty == tier)
                .collect_vec();
            if matching.len() < GAME_LENGTH {
                return Err(InsufficientQuestions);
            }
            rng.shuffle(&mut matching);
            matching
                .into_iter()
                .take(GAME_LENGTH)
                .cloned()
                .collect_vec()
        }
    };

    Ok(Playlist(picked))
}
