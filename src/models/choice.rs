// src/models/choice.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'choices' table in the database.
/// Choices belong to a checkbox-type question and are cascade-deleted with it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: i64,

    /// The text content of the choice.
    pub choice_text: String,

    /// Whether this choice is part of the correct answer set.
    pub is_correct: bool,
}

/// DTO for a choice inside a quiz-creation request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChoiceRequest {
    #[validate(length(min = 1, max = 500))]
    pub choice_text: String,
    pub is_correct: bool,
}
