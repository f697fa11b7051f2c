//! Question records and question bank loading
//!
//! This module defines the immutable [`Question`] record together with its
//! option keys, difficulty tiers and categories, and provides loading of
//! the bundled question bank from JSON. Records are validated on load and
//! never mutated afterwards; gameplay only ever borrows them.

use enum_map::{Enum, EnumMap};
use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key identifying one of the four answer options of a question
///
/// Keys are ordered `A` through `D`; that order is also the presentation
/// order used by the audience poll output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Enum,
    derive_more::Display,
)]
pub enum OptionKey {
    /// First option
    A,
    /// Second option
    B,
    /// Third option
    C,
    /// Fourth option
    D,
}

impl OptionKey {
    /// All option keys in presentation order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];
}

/// Difficulty tier of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Questions most players answer correctly
    Easy,
    /// Questions of intermediate difficulty
    Medium,
    /// Questions few players answer correctly
    Hard,
}

/// Topic tag of a question
///
/// The seven named tags are the ones recognized by the settings panel.
/// [`Category::General`] acts as a sentinel meaning "matches any filter".
/// The untagged [`Category::Topic`] variant carries the free-form topic of
/// an AI-generated batch, whose `category` field equals the requested
/// topic rather than one of the built-in tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// General knowledge, matches every category filter
    General,
    /// History
    History,
    /// Science
    Science,
    /// Geography
    Geography,
    /// Art and literature
    ArtLiterature,
    /// Sports
    Sports,
    /// Islamic knowledge
    Islamic,
    /// Free-form topic of an AI-generated question set
    #[serde(untagged)]
    Topic(String),
}

/// Validates that every answer option carries non-empty, bounded text
fn validate_options(options: &EnumMap<OptionKey, String>) -> garde::Result {
    for (key, text) in options {
        if text.trim().is_empty() {
            return Err(garde::Error::new(format!("option {key} is empty")));
        }
        if text.len() > crate::constants::question::MAX_OPTION_LENGTH {
            return Err(garde::Error::new(format!("option {key} is too long")));
        }
    }
    Ok(())
}

/// A single multiple-choice trivia question
///
/// Questions are immutable records created either by loading the bundled
/// question bank or by parsing an AI-generated batch. The answer key is a
/// key of `options` by construction, since the option map always carries
/// all four keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// Identifier, unique within one question pool
    #[garde(skip)]
    pub id: u32,
    /// The question text shown to the player
    #[garde(length(min = 1, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub question: String,
    /// The four answer options keyed `A` through `D`
    #[garde(custom(|v, _| validate_options(v)))]
    pub options: EnumMap<OptionKey, String>,
    /// Key of the correct option
    #[garde(skip)]
    pub answer: OptionKey,
    /// Difficulty tier of this question
    #[garde(skip)]
    pub difficulty: Difficulty,
    /// Topic tag of this question
    #[garde(skip)]
    pub category: Category,
}

/// Errors that can occur while loading the question bank
#[derive(Error, Debug)]
pub enum BankError {
    /// The bank file is not valid JSON or does not match the schema
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
    /// The bank file parsed but contains no questions
    #[error("question bank is empty")]
    Empty,
    /// Two questions in the bank share the same id
    #[error("duplicate question id {0}")]
    DuplicateId(u32),
    /// A question record failed content validation
    #[error("invalid question {id}: {reason}")]
    Invalid {
        /// Identifier of the offending question
        id: u32,
        /// Human-readable description of the violation
        reason: String,
    },
}

/// Loads and validates a question pool from its JSON representation
///
/// The bank is an array of [`Question`] records. Every record is validated
/// and ids are checked for uniqueness; a single bad record rejects the
/// whole bank, since a partially loaded pool would silently change the
/// selection odds.
///
/// # Errors
///
/// * [`BankError::Parse`] - the JSON is malformed or mis-shaped
/// * [`BankError::Empty`] - the array contains no questions
/// * [`BankError::DuplicateId`] - two records share an id
/// * [`BankError::Invalid`] - a record failed content validation
pub fn load_bank(json: &str) -> Result<Vec<Question>, BankError> {
    let pool: Vec<Question> = serde_json::from_str(json)?;
    if pool.is_empty() {
        return Err(BankError::Empty);
    }
    let mut seen = std::collections::HashSet::new();
    for question in &pool {
        if !seen.insert(question.id) {
            return Err(BankError::DuplicateId(question.id));
        }
        question.validate().map_err(|report| BankError::Invalid {
            id: question.id,
            reason: report.to_string(),
        })?;
    }
    Ok(pool)
}
