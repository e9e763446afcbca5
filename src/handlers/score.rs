// src/handlers/score.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::TOP_SCORES_LIMIT,
    error::AppError,
    models::score::{ScoreEntry, SubmitScoreRequest},
};

/// Records one finished session's result.
/// Requires a bearer token; returns the stored row.
pub async fn add_score(
    State(pool): State<PgPool>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if payload.score > payload.total {
        return Err(AppError::BadRequest(
            "score cannot exceed total".to_string(),
        ));
    }

    let saved = sqlx::query_as::<_, ScoreEntry>(
        r#"
        INSERT INTO scores (username, score, total, time_taken)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, score, total, time_taken, date
        "#,
    )
    .bind(&payload.username)
    .bind(payload.score)
    .bind(payload.total)
    .bind(payload.time_taken)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to save score: {:?}", e);
        AppError::Internal(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Retrieves the leaderboard: highest score first, ties broken by the
/// faster time. The trailing id keeps fully tied rows in a stable order
/// across repeated queries.
pub async fn top_scores(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let top = sqlx::query_as::<_, ScoreEntry>(
        r#"
        SELECT id, username, score, total, time_taken, date
        FROM scores
        ORDER BY score DESC, time_taken ASC, id ASC
        LIMIT $1
        "#,
    )
    .bind(TOP_SCORES_LIMIT)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        AppError::Internal(e.to_string())
    })?;

    Ok(Json(top))
}
