//! Configuration constants for the millionaire game system
//!
//! This module contains the prize ladder, selection limits and other
//! fixed boundaries used throughout the game. The ladder and checkpoint
//! values are configuration data shared by the selector and the state
//! machine; neither ever mutates them.

/// Prize ladder configuration constants
pub mod ladder {
    /// The fifteen ascending prize values, one per question position
    pub const PRIZES: [u64; 15] = [
        100, 200, 300, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000,
        500_000, 1_000_000,
    ];

    /// Ladder positions that permanently raise the fallback score when
    /// answered correctly (the 5th, 10th and 15th question)
    pub const GUARANTEED: [usize; 3] = [4, 9, 14];
}

/// Question selection configuration constants
pub mod selection {
    /// Number of questions in a complete play-through
    pub const GAME_LENGTH: usize = 15;
    /// Questions taken from each difficulty tier in mixed mode
    pub const TIER_LENGTH: usize = 5;
}

/// Question content configuration constants
pub mod question {
    /// Maximum length of a question text in characters
    pub const MAX_TEXT_LENGTH: usize = 300;
    /// Maximum length of a single answer option in characters
    pub const MAX_OPTION_LENGTH: usize = 200;
}

/// Settings configuration constants
pub mod settings {
    /// Recognized countdown durations in seconds (0 means untimed)
    pub const TIMER_CHOICES: [u64; 4] = [0, 30, 60, 90];
}

/// Leaderboard configuration constants
pub mod leaderboard {
    /// Maximum number of entries kept on the leaderboard
    pub const MAX_ENTRIES: usize = 10;
    /// Maximum length of a leaderboard name in bytes
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Lifeline randomness configuration constants
pub mod lifeline {
    /// Lowest percentage the audience poll awards the correct option
    pub const MIN_CORRECT_SHARE: u8 = 40;
    /// Highest percentage the audience poll awards the correct option
    pub const MAX_CORRECT_SHARE: u8 = 79;
    /// Probability that the phoned friend suggests the correct option
    pub const FRIEND_CORRECT_PROBABILITY: f64 = 0.8;
    /// Number of incorrect options removed by fifty-fifty
    pub const FIFTY_FIFTY_REMOVALS: usize = 2;
}
