//! User-configurable game settings
//!
//! This module defines the [`Settings`] value read by the question
//! selector, together with the category toggle rule used by the settings
//! panel. Settings are created with defaults at application start and
//! replaced wholesale when the panel is saved; gameplay never mutates
//! them. The audio and narration toggles are carried as data only; their
//! effects live in the presentation layer.

use std::collections::HashSet;
use std::time::Duration;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::question::{Category, Difficulty};

/// Difficulty selection mode for a play-through
///
/// A specific tier restricts the whole game to that tier; `Mixed` builds
/// the game from five questions of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyMode {
    /// Only easy questions
    Easy,
    /// Only medium questions
    Medium,
    /// Only hard questions
    Hard,
    /// Five questions of each tier, shuffled together
    Mixed,
}

impl DifficultyMode {
    /// Returns the single tier this mode restricts to, if any
    pub fn tier(self) -> Option<Difficulty> {
        match self {
            Self::Easy => Some(Difficulty::Easy),
            Self::Medium => Some(Difficulty::Medium),
            Self::Hard => Some(Difficulty::Hard),
            Self::Mixed => None,
        }
    }
}

/// Narration mode for reading questions aloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsMode {
    /// Narration disabled
    Off,
    /// Narration on demand only
    Manual,
    /// Every question narrated automatically
    Auto,
}

/// Validates that the countdown duration is one of the recognized choices
fn validate_timer_duration(value: &Duration) -> garde::Result {
    if value.subsec_nanos() == 0
        && crate::constants::settings::TIMER_CHOICES.contains(&value.as_secs())
    {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "timer duration must be one of {:?} seconds",
            crate::constants::settings::TIMER_CHOICES
        )))
    }
}

/// Validates that the category set is non-empty and uses the built-in tags
fn validate_categories(value: &HashSet<Category>) -> garde::Result {
    if value.is_empty() {
        return Err(garde::Error::new("at least one category must be selected"));
    }
    if value.iter().any(|c| matches!(c, Category::Topic(_))) {
        return Err(garde::Error::new(
            "category filters must use the built-in tags",
        ));
    }
    Ok(())
}

/// User-configurable settings for the game
///
/// The selector reads `timer_duration`, `difficulty` and `categories`;
/// the remaining toggles belong to the audio and narration collaborators.
#[serde_with::serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Countdown per question; zero disables the timer
    #[garde(custom(|v, _| validate_timer_duration(v)))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub timer_duration: Duration,
    /// Difficulty selection mode
    #[garde(skip)]
    pub difficulty: DifficultyMode,
    /// Category filter; containing [`Category::General`] disables filtering
    #[garde(custom(|v, _| validate_categories(v)))]
    pub categories: HashSet<Category>,
    /// Whether background music plays during the game
    #[garde(skip)]
    pub background_music_enabled: bool,
    /// Whether sound effects play on game events
    #[garde(skip)]
    pub sound_effects_enabled: bool,
    /// Narration mode for reading questions aloud
    #[garde(skip)]
    pub tts_mode: TtsMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timer_duration: Duration::from_secs(30),
            difficulty: DifficultyMode::Mixed,
            categories: HashSet::from([Category::General]),
            background_music_enabled: true,
            sound_effects_enabled: true,
            tts_mode: TtsMode::Manual,
        }
    }
}

impl Settings {
    /// Toggles a category in the filter set
    ///
    /// Selecting [`Category::General`] replaces the whole set with it,
    /// since "general" means "no filtering". Toggling a specific tag adds
    /// or removes it and drops the sentinel; emptying the set falls back
    /// to `{general}` so the filter is never empty.
    pub fn toggle_category(&mut self, category: Category) {
        if category == Category::General {
            self.categories = HashSet::from([Category::General]);
            return;
        }
        self.categories.remove(&Category::General);
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
        if self.categories.is_empty() {
            self.categories.insert(Category::General);
        }
    }

    /// Returns whether the category filter is a no-op
    pub fn matches_all_categories(&self) -> bool {
        self.categories.is_empty() || self.categories.contains(&Category::General)
    }
}
