//! Game state machine
//!
//! This module drives one play-through over a fixed fifteen-question
//! playlist. The [`Game`] owns the current position, the banked and
//! guaranteed scores, lifeline availability and the options hidden by
//! fifty-fifty. Transitions happen only through [`Game::submit_answer`],
//! [`Game::on_timeout`] and [`Game::use_lifeline`]; once the game is over
//! every input is ignored.

use serde::{Deserialize, Serialize};

use crate::constants::ladder::{GUARANTEED, PRIZES};
use crate::lifeline::{self, Advice, LifelineKind, Lifelines};
use crate::question::{OptionKey, Question};
use crate::select::{InsufficientQuestions, Playlist, select};
use crate::settings::Settings;

/// Whether the game is still accepting answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A question is on screen and an answer can be submitted
    AwaitingAnswer,
    /// The game ended, by win, elimination or timeout
    Over {
        /// The final score the player takes home
        score: u64,
    },
}

/// Result of resolving one answer or timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Correct answer on a non-final question
    Advanced {
        /// Zero-based index of the next question
        index: usize,
        /// Score banked so far
        score: u64,
    },
    /// Correct answer on the final question
    Won {
        /// The top prize
        score: u64,
    },
    /// Incorrect answer; score falls back to the last checkpoint
    Eliminated {
        /// The checkpoint score taken home
        score: u64,
        /// The option that would have been correct
        correct: OptionKey,
    },
    /// The countdown expired; scored like an incorrect answer
    TimedOut {
        /// The checkpoint score taken home
        score: u64,
    },
}

/// One play-through of the fifteen-question ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    playlist: Playlist,
    current_index: usize,
    score: u64,
    guaranteed_score: u64,
    lifelines: Lifelines,
    removed: Vec<OptionKey>,
    phase: Phase,
}

impl Game {
    /// Starts a new game over the given playlist
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            current_index: 0,
            score: 0,
            guaranteed_score: 0,
            lifelines: Lifelines::default(),
            removed: Vec::new(),
            phase: Phase::AwaitingAnswer,
        }
    }

    /// Selects a playlist from a question pool and starts a game on it
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientQuestions`] if the pool cannot supply the
    /// selection required by the settings.
    pub fn from_pool(
        pool: &[Question],
        settings: &Settings,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, InsufficientQuestions> {
        select(pool, settings, rng).map(Self::new)
    }

    /// Resolves the player's final answer for the current question
    ///
    /// A correct answer banks the current rung's prize and either advances
    /// to the next question or wins the game on the fifteenth. An
    /// incorrect answer ends the game with the score falling back to the
    /// last passed checkpoint. Returns `None` when the game is already
    /// over, leaving the state untouched.
    pub fn submit_answer(&mut self, key: OptionKey) -> Option<Outcome> {
        let correct = self.current_question()?.answer;

        if key == correct {
            self.score = PRIZES[self.current_index];
            if GUARANTEED.contains(&self.current_index) {
                self.guaranteed_score = self.score;
            }
            if self.current_index + 1 == self.playlist.questions().len() {
                self.phase = Phase::Over { score: self.score };
                Some(Outcome::Won { score: self.score })
            } else {
                self.current_index += 1;
                self.removed.clear();
                Some(Outcome::Advanced {
                    index: self.current_index,
                    score: self.score,
                })
            }
        } else {
            self.score = self.guaranteed_score;
            self.phase = Phase::Over { score: self.score };
            Some(Outcome::Eliminated {
                score: self.score,
                correct,
            })
        }
    }

    /// Resolves an expired countdown for the current question
    ///
    /// Scored exactly like an incorrect answer. Returns `None` when the
    /// game is already over.
    pub fn on_timeout(&mut self) -> Option<Outcome> {
        if self.current_question().is_none() {
            return None;
        }
        self.score = self.guaranteed_score;
        self.phase = Phase::Over { score: self.score };
        Some(Outcome::TimedOut { score: self.score })
    }

    /// Activates a lifeline for the current question
    ///
    /// Returns `None` if the game is over or the lifeline was already
    /// used; a `None` consumes nothing. Fifty-fifty additionally hides the
    /// removed options until the next question.
    pub fn use_lifeline(&mut self, kind: LifelineKind, rng: &mut fastrand::Rng) -> Option<Advice> {
        if self.current_question().is_none() || !self.lifelines.is_available(kind) {
            return None;
        }
        let visible = self.visible_options();
        let question = &self.playlist.questions()[self.current_index];

        let advice = match kind {
            LifelineKind::FiftyFifty => {
                let eliminated = lifeline::pick_removals(question, &visible, rng);
                self.removed.extend(&eliminated);
                Advice::EliminatedOptions(eliminated)
            }
            LifelineKind::AskAudience => {
                Advice::AudiencePoll(lifeline::audience_poll(question, &visible, rng))
            }
            LifelineKind::PhoneFriend => {
                let (suggestion, message) = lifeline::friend_hint(question, &visible, rng);
                Advice::FriendHint {
                    suggestion,
                    message,
                }
            }
        };
        self.lifelines.consume(kind);
        Some(advice)
    }

    /// Returns the question currently awaiting an answer, if any
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::AwaitingAnswer => Some(&self.playlist.questions()[self.current_index]),
            Phase::Over { .. } => None,
        }
    }

    /// Zero-based index of the question currently in play
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Option keys still visible for the current question
    pub fn visible_options(&self) -> Vec<OptionKey> {
        OptionKey::ALL
            .iter()
            .copied()
            .filter(|key| !self.removed.contains(key))
            .collect()
    }

    /// Score banked by correct answers so far
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Score the player keeps after an incorrect answer or timeout
    pub fn guaranteed_score(&self) -> u64 {
        self.guaranteed_score
    }

    /// Current lifeline availability
    pub fn lifelines(&self) -> &Lifelines {
        &self.lifelines
    }

    /// Current phase of the game
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Final score, once the game is over
    pub fn final_score(&self) -> Option<u64> {
        match self.phase {
            Phase::Over { score } => Some(score),
            Phase::AwaitingAnswer => None,
        }
    }
}
