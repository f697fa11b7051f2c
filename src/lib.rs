//! A "Who Wants to Be a Millionaire?" style trivia game engine.
//!
//! This crate implements the rules of a fifteen-question prize-ladder
//! quiz: question bank loading and selection, the game state machine with
//! its checkpoint scoring, the three classic lifelines, a per-question
//! countdown, a persistent top-ten leaderboard, and the contract for
//! generating fresh question sets with an AI model.
//!
//! The crate is deliberately free of IO and UI. Persistence goes through
//! the [`leaderboard::Store`] trait, AI calls through the
//! [`generate::QuestionSource`] trait, and all randomness through an
//! injected [`fastrand::Rng`], so hosts can embed the engine anywhere,
//! including WebAssembly, and tests can replay any game from a seed.
//!
//! A game usually starts from one of two entry points:
//!
//! * [`start_from_bank`] loads a bundled JSON question bank and selects
//!   fifteen questions according to the player's [`settings::Settings`].
//! * [`start_from_source`] asks a [`generate::QuestionSource`] for a
//!   fresh batch about a free-form topic and plays that instead.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

pub mod constants;
pub mod game;
pub mod generate;
pub mod leaderboard;
pub mod lifeline;
pub mod question;
pub mod select;
pub mod settings;
pub mod timer;

use thiserror::Error;

use crate::game::Game;
use crate::generate::QuestionSource;
use crate::question::BankError;
use crate::select::{InsufficientQuestions, Playlist};
use crate::settings::Settings;

/// Errors that can prevent a game from starting
#[derive(Error, Debug)]
pub enum StartError {
    /// The question bank could not be loaded
    #[error(transparent)]
    Bank(#[from] BankError),
    /// The pool or batch could not supply a full game
    #[error(transparent)]
    Selection(#[from] InsufficientQuestions),
    /// Question generation failed
    #[error(transparent)]
    Generation(#[from] generate::Error),
}

/// Starts a game from a JSON question bank
///
/// Loads and validates the bank, selects fifteen questions according to
/// the settings' difficulty mode and category filter, and returns the
/// game positioned on the first question.
///
/// # Errors
///
/// Returns a [`StartError`] when the bank is invalid or the filters leave
/// too few questions.
pub fn start_from_bank(
    bank_json: &str,
    settings: &Settings,
    rng: &mut fastrand::Rng,
) -> Result<Game, StartError> {
    let pool = question::load_bank(bank_json)?;
    let game = Game::from_pool(&pool, settings, rng)?;
    Ok(game)
}

/// Starts a game from a freshly generated question batch
///
/// Asks the source for a batch about `topic`, shuffles it, and accepts it
/// as a playlist: a batch longer than fifteen questions is truncated, a
/// shorter one is rejected. Difficulty distribution of the batch is
/// trusted as generated.
///
/// # Errors
///
/// Returns a [`StartError`] when generation fails or the batch is too
/// short for a full game.
pub fn start_from_source<S: QuestionSource>(
    source: &S,
    topic: &str,
    target_age: Option<u8>,
    rng: &mut fastrand::Rng,
) -> Result<Game, StartError> {
    let mut batch = source.generate(topic, target_age)?;
    rng.shuffle(&mut batch);
    let playlist = Playlist::new(batch)?;
    Ok(Game::new(playlist))
}
