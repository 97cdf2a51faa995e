//! Quiz endpoint
//!
//! # Endpoints
//!
//! - `POST /quizzes` - Draw a random question the player has not seen yet
//!
//! The request names a category (id 0 meaning "all categories") and the
//! ids already shown this session. When the quiz is exhausted the response
//! is still a success, just without a question - that is the client's
//! signal to end the game.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::http_error::ApiError;
use crate::AppState;
use trivia_core::models::Question;
use trivia_core::services::quiz;

/// Response for POST /quizzes
///
/// `question` is omitted entirely (not null) when the quiz is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// Extract the category id from the `quiz_category` object
///
/// Accepts a number or a numeric string; zero is the "all categories"
/// sentinel and therefore valid here, unlike in question creation.
fn category_id(quiz_category: &Value) -> Option<i64> {
    match quiz_category.get("id")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Draw the next quiz question
///
/// # Request Body
///
/// ```json
/// {
///   "previous_questions": [1, 2],
///   "quiz_category": {"id": 1, "type": "Science"}
/// }
/// ```
///
/// Both fields are required; a request missing either is a bad request.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/quizzes \
///   -H "Content-Type: application/json" \
///   -d '{"previous_questions": [], "quiz_category": {"id": 0, "type": "click"}}'
/// ```
pub async fn post_quizzes(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;

    let previous: Vec<i64> = body
        .get("previous_questions")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .ok_or(ApiError::BadRequest)?;

    let category = body
        .get("quiz_category")
        .and_then(category_id)
        .ok_or(ApiError::BadRequest)?;

    let candidates = if category == quiz::ALL_CATEGORIES {
        state.store.list_questions().await?
    } else {
        state.store.questions_by_category(category).await?
    };

    let question = quiz::pick_unseen(&previous, &candidates).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Create router with the quiz endpoint
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(post_quizzes))
        .with_state(state)
}
