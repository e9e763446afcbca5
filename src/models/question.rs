// src/models/question.rs

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub text: String,

    /// Ordered list of answer options.
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// Index of the correct entry in `options`, as authored.
    pub correct_index: i64,

    /// Optional explanation shown on the review screen.
    pub explanation: Option<String>,

    /// 'easy', 'medium' or 'hard'.
    pub difficulty: String,

    /// Grouping label, e.g. 'Aladdin' or 'Sinbad'.
    pub theme: String,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Presentation copy served to players: option order is re-rolled per
/// request and `correct_index` recomputed to follow the correct entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayQuestion {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: i64,
    pub explanation: Option<String>,
    pub difficulty: String,
    pub theme: String,
}

impl Question {
    /// Produces the presentation copy with a uniformly shuffled option
    /// order (Fisher-Yates).
    ///
    /// The correct option is carried through the permutation by its
    /// original position rather than looked up by value afterwards, so
    /// two options with identical text stay unambiguous.
    pub fn shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> PlayQuestion {
        let mut indexed: Vec<(usize, String)> = self.options.0.into_iter().enumerate().collect();
        indexed.shuffle(rng);

        let correct_index = indexed
            .iter()
            .position(|(original, _)| *original == self.correct_index as usize)
            .unwrap_or(0) as i64;

        PlayQuestion {
            id: self.id,
            text: self.text,
            options: indexed.into_iter().map(|(_, opt)| opt).collect(),
            correct_index,
            explanation: self.explanation,
            difficulty: self.difficulty,
            theme: self.theme,
        }
    }
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    pub correct_index: i64,
    #[validate(length(max = 2000))]
    pub explanation: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub difficulty: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub theme: Option<String>,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() < 2 {
        return Err(validator::ValidationError::new("need_at_least_two_options"));
    }
    for opt in options {
        if opt.is_empty() || opt.len() > 500 {
            return Err(validator::ValidationError::new("option_length"));
        }
    }
    Ok(())
}
