// src/store.rs

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        choice::Choice,
        question::{Question, QuestionType},
        quiz::{CreateQuizRequest, Quiz, QuizRow, QuizSummary},
    },
};

/// Persists a quiz and its full nested question/choice tree in one transaction.
///
/// * `correct_answer` defaults to null when absent.
/// * Choices are only inserted for checkbox questions; any choices sent with a
///   boolean or input question are dropped.
/// * Returns the persisted tree (re-read after commit) including generated ids.
pub async fn create_quiz(pool: &SqlitePool, req: CreateQuizRequest) -> Result<Quiz, AppError> {
    let mut tx = pool.begin().await?;

    let quiz_id: i64 = sqlx::query_scalar("INSERT INTO quizzes (title) VALUES (?) RETURNING id")
        .bind(&req.title)
        .fetch_one(&mut *tx)
        .await?;

    for question in &req.questions {
        let question_id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (quiz_id, type, question_text, correct_answer)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(quiz_id)
        .bind(question.question_type)
        .bind(&question.question_text)
        .bind(&question.correct_answer)
        .fetch_one(&mut *tx)
        .await?;

        if question.question_type == QuestionType::Checkbox {
            if let Some(choices) = &question.choices {
                for choice in choices {
                    sqlx::query(
                        "INSERT INTO choices (question_id, choice_text, is_correct)
                         VALUES (?, ?, ?)",
                    )
                    .bind(question_id)
                    .bind(&choice.choice_text)
                    .bind(choice.is_correct)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }
    }

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit quiz creation: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    get_quiz(pool, quiz_id).await
}

/// Lists all quizzes, newest first, with a question count per quiz.
/// No question or choice detail is returned here.
pub async fn list_quizzes(pool: &SqlitePool) -> Result<Vec<QuizSummary>, AppError> {
    let summaries = sqlx::query_as::<_, QuizSummary>(
        "SELECT q.id, q.title, COUNT(qs.id) AS question_count
         FROM quizzes q
         LEFT JOIN questions qs ON qs.quiz_id = q.id
         GROUP BY q.id
         ORDER BY q.id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(summaries)
}

/// Fetches a quiz with its questions (ascending id) and each question's
/// choices (ascending id).
pub async fn get_quiz(pool: &SqlitePool, id: i64) -> Result<Quiz, AppError> {
    let quiz = sqlx::query_as::<_, QuizRow>("SELECT id, title FROM quizzes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    let mut questions = sqlx::query_as::<_, Question>(
        "SELECT id, type, question_text, correct_answer
         FROM questions
         WHERE quiz_id = ?
         ORDER BY id ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    for question in &mut questions {
        question.choices = sqlx::query_as::<_, Choice>(
            "SELECT id, choice_text, is_correct
             FROM choices
             WHERE question_id = ?
             ORDER BY id ASC",
        )
        .bind(question.id)
        .fetch_all(pool)
        .await?;
    }

    Ok(Quiz {
        id: quiz.id,
        title: quiz.title,
        questions,
    })
}

/// Deletes a quiz; questions and choices go with it via ON DELETE CASCADE.
/// Zero rows affected means the quiz never existed.
pub async fn delete_quiz(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM quizzes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Quiz not found".to_string()));
    }

    Ok(())
}
