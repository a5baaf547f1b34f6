// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{error::AppError, models::quiz::CreateQuizRequest, store};

/// Validates an id path parameter before any store access.
/// Rejects blank, non-numeric, zero, and negative values.
fn parse_quiz_id(raw: &str) -> Result<i64, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Missing or invalid id".to_string()));
    }

    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(
            "Invalid id: must be a positive number".to_string(),
        )),
    }
}

/// Creates a quiz with its nested question/choice tree.
///
/// The body is taken as raw JSON first so an empty `{}` can be rejected with
/// "Missing fields" before any shape checks run, then deserialized and
/// validated against the declarative request schema.
pub async fn create_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    if body.as_object().is_none_or(|fields| fields.is_empty()) {
        return Err(AppError::BadRequest("Missing fields".to_string()));
    }

    let payload: CreateQuizRequest = serde_json::from_value(body)?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = store::create_quiz(&pool, payload).await?;

    tracing::info!("Created quiz {} ({} questions)", quiz.id, quiz.questions.len());

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Lists all quizzes, newest first, as `{ id, title, questionCount }`.
pub async fn list_quizzes(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let quizzes = store::list_quizzes(&pool).await?;

    Ok(Json(quizzes))
}

/// Retrieves a single quiz with its full question/choice tree.
pub async fn get_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz_id = parse_quiz_id(&id)?;

    let quiz = store::get_quiz(&pool, quiz_id).await?;

    Ok(Json(quiz))
}

/// Deletes a quiz and everything nested under it.
pub async fn delete_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz_id = parse_quiz_id(&id)?;

    store::delete_quiz(&pool, quiz_id).await?;

    tracing::info!("Deleted quiz {}", quiz_id);

    Ok(Json(serde_json::json!({
        "message": format!("Quiz with ID {} deleted successfully.", quiz_id)
    })))
}
