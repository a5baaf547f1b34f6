// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::models::choice::{Choice, CreateChoiceRequest};

/// Closed set of question types.
/// Stored as lowercase text in the 'type' column and serialized the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum QuestionType {
    /// True/false question; `correct_answer` holds "true" or "false".
    Boolean,
    /// Free-text question; `correct_answer` holds the expected text.
    Input,
    /// Multi-select question; answers live in the `choices` collection.
    Checkbox,
}

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// The text content of the question.
    pub question_text: String,

    /// Used by boolean and input types; null for checkbox.
    pub correct_answer: Option<String>,

    /// Populated from the 'choices' table after the row is fetched.
    #[sqlx(skip)]
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// DTO for a question inside a quiz-creation request.
///
/// A `choices` array may be present for any type, but only checkbox questions
/// persist it; other types drop it on create.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[validate(length(min = 1, max = 1000))]
    pub question_text: String,
    pub correct_answer: Option<String>,
    #[validate(nested)]
    pub choices: Option<Vec<CreateChoiceRequest>>,
}
