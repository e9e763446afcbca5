// src/models/score.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'scores' table in the database.
/// One row per completed quiz session, never updated afterwards.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: i64,
    pub username: String,
    pub score: i64,
    pub total: i64,

    /// Seconds elapsed across the whole session.
    pub time_taken: i64,

    pub date: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting a finished session's result.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Username must be between 1 and 50 characters."
    ))]
    pub username: String,
    #[validate(range(min = 0))]
    pub score: i64,
    #[validate(range(min = 0))]
    pub total: i64,
    #[validate(range(min = 0))]
    pub time_taken: i64,
}
