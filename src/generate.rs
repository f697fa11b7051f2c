//! AI question generation boundary
//!
//! Generating a fresh question set for a free-form topic is delegated to
//! a host-provided [`QuestionSource`], keeping network access and API
//! credentials out of the library. What lives here is the contract around
//! that call: the prompt sent to the model and the parsing and validation
//! of whatever text comes back, including the fenced code blocks models
//! like to wrap JSON in.

use garde::Validate;
use thiserror::Error;

use crate::constants::selection::{GAME_LENGTH, TIER_LENGTH};
use crate::question::Question;

/// Errors surfaced by question generation
#[derive(Error, Debug)]
pub enum Error {
    /// The API credential is missing or rejected
    #[error("generation credential is missing or invalid")]
    Credential,
    /// The provider reported a quota or rate limit
    #[error("generation quota exhausted")]
    Quota,
    /// The request failed in transit
    #[error("generation request failed: {0}")]
    Network(String),
    /// The response text could not be turned into valid questions
    #[error("generated questions were malformed: {0}")]
    MalformedResponse(String),
}

/// A provider of freshly generated question batches
///
/// Implementations call out to an AI model (or a fixture, in tests) and
/// return the raw batch; they are expected to run the response through
/// [`parse_batch`]. Batch length and shuffling are handled by the caller.
pub trait QuestionSource {
    /// Generates a question batch about `topic`
    ///
    /// When `target_age` is given, question content should be pitched at
    /// players of that age.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing why no usable batch was produced.
    fn generate(&self, topic: &str, target_age: Option<u8>) -> Result<Vec<Question>, Error>;
}

/// Builds the instruction prompt for generating a batch about `topic`
///
/// The prompt pins down everything [`parse_batch`] later relies on: a
/// bare JSON array, fifteen records, five per difficulty tier, four
/// options keyed `A` through `D`, and the topic echoed as each record's
/// category.
pub fn build_prompt(topic: &str, target_age: Option<u8>) -> String {
    let audience = match target_age {
        Some(age) => format!(
            " The questions must be suitable and engaging for players around {age} years old; \
             adjust wording and subject matter accordingly."
        ),
        None => String::new(),
    };
    format!(
        "Generate exactly {GAME_LENGTH} multiple-choice trivia questions about \"{topic}\": \
         {TIER_LENGTH} easy, {TIER_LENGTH} medium and {TIER_LENGTH} hard.{audience} \
         Respond with only a JSON array, no surrounding prose. Each element must have the \
         fields: \"id\" (a unique integer), \"question\" (the question text), \"options\" \
         (an object with string values under the keys \"A\", \"B\", \"C\" and \"D\"), \
         \"answer\" (the key of the correct option), \"difficulty\" (one of \"easy\", \
         \"medium\" or \"hard\") and \"category\" (the string \"{topic}\")."
    )
}

/// Parses and validates a model response into a question batch
///
/// Strips a surrounding ```` ```json ```` fence if present, parses the
/// array and validates every record. Batch length is not checked here;
/// acceptance as a playlist decides that.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] when the text is not a valid
/// question array or a record fails validation.
pub fn parse_batch(raw: &str) -> Result<Vec<Question>, Error> {
    let mut text = raw.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        text = stripped;
    } else if let Some(stripped) = text.strip_prefix("```") {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix("```") {
        text = stripped;
    }
    let text = text.trim();

    let batch: Vec<Question> =
        serde_json::from_str(text).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    for question in &batch {
        question
            .validate()
            .map_err(|report| Error::MalformedResponse(report.to_string()))?;
    }
    Ok(batch)
}
