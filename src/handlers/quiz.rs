// src/handlers/quiz.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rand::thread_rng;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::DEFAULT_QUESTION_COUNT,
    error::AppError,
    models::question::{CreateQuestionRequest, PlayQuestion, Question},
};

/// Serves a random quiz paper.
///
/// Samples up to `limit` questions without replacement, then shuffles
/// each question's options and recomputes `correctIndex` so server-side
/// correctness and the client-rendered order stay consistent. A missing
/// or non-numeric limit falls back to the default. An empty bank yields
/// an empty array, not an error.
pub async fn list_questions(
    State(pool): State<PgPool>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params
        .get("limit")
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_QUESTION_COUNT);

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, text, options, correct_index, explanation, difficulty, theme, created_at
        FROM questions
        ORDER BY RANDOM()
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions: {:?}", e);
        AppError::Internal(e.to_string())
    })?;

    let mut rng = thread_rng();
    let paper: Vec<PlayQuestion> = questions
        .into_iter()
        .map(|q| q.shuffled(&mut rng))
        .collect();

    Ok(Json(paper))
}

/// Creates a new quiz question.
/// Requires a bearer token.
pub async fn create_question(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if payload.correct_index < 0 || payload.correct_index as usize >= payload.options.len() {
        return Err(AppError::BadRequest(
            "correctIndex must point into options".to_string(),
        ));
    }

    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (text, options, correct_index, explanation, difficulty, theme)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, text, options, correct_index, explanation, difficulty, theme, created_at
        "#,
    )
    .bind(&payload.text)
    .bind(sqlx::types::Json(&payload.options))
    .bind(payload.correct_index)
    .bind(&payload.explanation)
    .bind(payload.difficulty.as_deref().unwrap_or("easy"))
    .bind(payload.theme.as_deref().unwrap_or("Arabian Nights"))
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::Internal(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(question)))
}
