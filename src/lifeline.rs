//! Lifelines and their advice generators
//!
//! This module defines the three one-shot lifelines, the per-game
//! availability tracking, and the random advice each lifeline produces.
//! Advice is computed here from the current question and the options
//! still visible; the state machine owns when a lifeline may fire.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::constants::lifeline::{
    FIFTY_FIFTY_REMOVALS, FRIEND_CORRECT_PROBABILITY, MAX_CORRECT_SHARE, MIN_CORRECT_SHARE,
};
use crate::question::{OptionKey, Question};

/// One of the three lifelines available during a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
#[serde(rename_all = "camelCase")]
pub enum LifelineKind {
    /// Removes two incorrect options from view
    FiftyFifty,
    /// A simulated friend suggests an answer
    PhoneFriend,
    /// A simulated audience votes on the options
    AskAudience,
}

/// Per-game lifeline availability
///
/// Each lifeline starts available and is consumed at most once; a new
/// game resets all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifelines(EnumMap<LifelineKind, bool>);

impl Default for Lifelines {
    fn default() -> Self {
        Self(enum_map! { _ => true })
    }
}

impl Lifelines {
    /// Returns whether the given lifeline is still available
    pub fn is_available(&self, kind: LifelineKind) -> bool {
        self.0[kind]
    }

    /// Marks the lifeline used, returning whether it was still available
    pub fn consume(&mut self, kind: LifelineKind) -> bool {
        std::mem::replace(&mut self.0[kind], false)
    }
}

/// Advice produced by activating a lifeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    /// Option keys removed from view by fifty-fifty
    EliminatedOptions(Vec<OptionKey>),
    /// Audience vote percentages in key order, summing to 100
    AudiencePoll(Vec<(OptionKey, u8)>),
    /// The friend's suggested option and spoken phrasing
    FriendHint {
        /// The option the friend suggests
        suggestion: OptionKey,
        /// The friend's message, quoting the suggested option text
        message: String,
    },
}

/// Picks the incorrect options fifty-fifty removes
///
/// Two of the visible incorrect options are chosen uniformly; the correct
/// option is never removed. If fewer than two incorrect options remain
/// visible, all of them are removed.
pub(crate) fn pick_removals(
    question: &Question,
    visible: &[OptionKey],
    rng: &mut fastrand::Rng,
) -> Vec<OptionKey> {
    let mut incorrect: Vec<OptionKey> = visible
        .iter()
        .copied()
        .filter(|key| *key != question.answer)
        .collect();
    rng.shuffle(&mut incorrect);
    incorrect.truncate(FIFTY_FIFTY_REMOVALS);
    incorrect
}

/// Simulates an audience vote over the visible options
///
/// The correct option receives 40 to 79 percent; the remainder is split
/// randomly over the visible incorrect options, with the last one
/// absorbing whatever is left so the total is exactly 100. Results are
/// reported in key order.
pub(crate) fn audience_poll(
    question: &Question,
    visible: &[OptionKey],
    rng: &mut fastrand::Rng,
) -> Vec<(OptionKey, u8)> {
    let incorrect: Vec<OptionKey> = visible
        .iter()
        .copied()
        .filter(|key| *key != question.answer)
        .collect();
    if incorrect.is_empty() {
        return vec![(question.answer, 100)];
    }

    let correct_share = rng.u8(MIN_CORRECT_SHARE..=MAX_CORRECT_SHARE);
    let mut remaining = 100 - correct_share;
    let mut results = vec![(question.answer, correct_share)];
    for (position, key) in incorrect.iter().enumerate() {
        let share = if position + 1 == incorrect.len() {
            remaining
        } else if remaining == 0 {
            0
        } else {
            rng.u8(0..remaining)
        };
        remaining -= share;
        results.push((*key, share));
    }
    results.sort_unstable_by_key(|(key, _)| *key);
    results
}

/// Simulates phoning a friend about the current question
///
/// The friend suggests the correct option with 80 percent probability and
/// otherwise a uniformly chosen visible incorrect option, phrased with one
/// of a handful of canned messages quoting the suggested option text.
pub(crate) fn friend_hint(
    question: &Question,
    visible: &[OptionKey],
    rng: &mut fastrand::Rng,
) -> (OptionKey, String) {
    let incorrect: Vec<OptionKey> = visible
        .iter()
        .copied()
        .filter(|key| *key != question.answer)
        .collect();

    let suggestion = if incorrect.is_empty() || rng.f64() < FRIEND_CORRECT_PROBABILITY {
        question.answer
    } else {
        incorrect[rng.usize(..incorrect.len())]
    };

    const TEMPLATES: [&str; 5] = [
        "Hmm, I'm fairly sure the answer is \"{answer}\".",
        "I remember reading about this, it should be \"{answer}\".",
        "I'd go with \"{answer}\", but don't hold me to it!",
        "Oh, that's an easy one. It's \"{answer}\"!",
        "Let me think... yes, I believe it's \"{answer}\".",
    ];
    let template = TEMPLATES[rng.usize(..TEMPLATES.len())];
    let message = template.replace("{answer}", &question.options[suggestion]);
    (suggestion, message)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::question::{Category, Difficulty};

    fn sample_question() -> Question {
        Question {
            id: 1,
            question: "Which river flows through Cairo?".to_string(),
            options: enum_map! {
                OptionKey::A => "Nile".to_string(),
                OptionKey::B => "Amazon".to_string(),
                OptionKey::C => "Danube".to_string(),
                OptionKey::D => "Tigris".to_string(),
            },
            answer: OptionKey::A,
            difficulty: Difficulty::Easy,
            category: Category::Geography,
        }
    }

    #[test]
    fn test_lifelines_start_available_and_consume_once() {
        let mut lifelines = Lifelines::default();
        assert!(lifelines.is_available(LifelineKind::FiftyFifty));
        assert!(lifelines.consume(LifelineKind::FiftyFifty));
        assert!(!lifelines.is_available(LifelineKind::FiftyFifty));
        assert!(!lifelines.consume(LifelineKind::FiftyFifty));
        assert!(lifelines.is_available(LifelineKind::PhoneFriend));
    }

    #[test]
    fn test_lifeline_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&LifelineKind::FiftyFifty).unwrap(),
            "\"fiftyFifty\""
        );
        assert_eq!(
            serde_json::to_string(&LifelineKind::AskAudience).unwrap(),
            "\"askAudience\""
        );
    }

    #[test]
    fn test_pick_removals_never_removes_answer() {
        let question = sample_question();
        for seed in 0..100 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let removed = pick_removals(&question, &OptionKey::ALL, &mut rng);
            assert_eq!(removed.len(), 2);
            assert!(!removed.contains(&OptionKey::A));
        }
    }

    #[test]
    fn test_pick_removals_varies_with_seed() {
        let question = sample_question();
        let picks: std::collections::HashSet<Vec<OptionKey>> = (0..50)
            .map(|seed| {
                let mut rng = fastrand::Rng::with_seed(seed);
                let mut removed = pick_removals(&question, &OptionKey::ALL, &mut rng);
                removed.sort_unstable();
                removed
            })
            .collect();
        assert!(picks.len() > 1);
    }

    #[test]
    fn test_pick_removals_with_reduced_visibility() {
        let question = sample_question();
        let mut rng = fastrand::Rng::with_seed(9);
        let visible = [OptionKey::A, OptionKey::B];
        let removed = pick_removals(&question, &visible, &mut rng);
        assert_eq!(removed, vec![OptionKey::B]);
    }

    #[test]
    fn test_audience_poll_sums_to_hundred() {
        let question = sample_question();
        for seed in 0..200 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let poll = audience_poll(&question, &OptionKey::ALL, &mut rng);
            assert_eq!(poll.len(), 4);
            assert_eq!(poll.iter().map(|(_, share)| u32::from(*share)).sum::<u32>(), 100);

            let correct = poll
                .iter()
                .find(|(key, _)| *key == question.answer)
                .unwrap()
                .1;
            assert!((40..=79).contains(&correct));
        }
    }

    #[test]
    fn test_audience_poll_reports_in_key_order() {
        let question = sample_question();
        let mut rng = fastrand::Rng::with_seed(11);
        let poll = audience_poll(&question, &OptionKey::ALL, &mut rng);
        let keys: Vec<OptionKey> = poll.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, OptionKey::ALL.to_vec());
    }

    #[test]
    fn test_audience_poll_after_fifty_fifty() {
        let question = sample_question();
        let mut rng = fastrand::Rng::with_seed(12);
        let visible = [OptionKey::A, OptionKey::C];
        let poll = audience_poll(&question, &visible, &mut rng);
        assert_eq!(poll.len(), 2);
        assert_eq!(poll.iter().map(|(_, share)| u32::from(*share)).sum::<u32>(), 100);
    }

    #[test]
    fn test_audience_poll_single_visible_option() {
        let question = sample_question();
        let mut rng = fastrand::Rng::with_seed(13);
        let poll = audience_poll(&question, &[OptionKey::A], &mut rng);
        assert_eq!(poll, vec![(OptionKey::A, 100)]);
    }

    #[test]
    fn test_friend_hint_accuracy_near_eighty_percent() {
        let question = sample_question();
        let mut correct = 0;
        for seed in 0..1000 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let (suggestion, _) = friend_hint(&question, &OptionKey::ALL, &mut rng);
            if suggestion == question.answer {
                correct += 1;
            }
        }
        assert!(
            (760..=840).contains(&correct),
            "friend was correct {correct}/1000 times"
        );
    }

    #[test]
    fn test_friend_hint_quotes_suggested_option() {
        let question = sample_question();
        let mut rng = fastrand::Rng::with_seed(14);
        let (suggestion, message) = friend_hint(&question, &OptionKey::ALL, &mut rng);
        assert!(message.contains(&question.options[suggestion]));
    }

    #[test]
    fn test_friend_hint_respects_visibility() {
        let question = sample_question();
        for seed in 0..100 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let visible = [OptionKey::A, OptionKey::D];
            let (suggestion, _) = friend_hint(&question, &visible, &mut rng);
            assert!(visible.contains(&suggestion));
        }
    }
}
