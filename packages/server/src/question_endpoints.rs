//! Question endpoints
//!
//! # Endpoints
//!
//! - `GET /questions?page=N` - Paginated question listing
//! - `DELETE /questions/:id` - Delete one question
//! - `POST /questions` - Dual mode: search when the body carries a
//!   non-empty `searchTerm`, create otherwise
//!
//! POST bodies are dissected as loose JSON rather than a fixed struct: the
//! historical clients of this API send numeric fields as strings, and the
//! search/create dispatch depends on which keys are present at all.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::category_endpoints::category_map;
use crate::http_error::ApiError;
use crate::AppState;
use trivia_core::models::{NewQuestion, Question};
use trivia_core::services::paging;

/// Query parameters for paginated listings
///
/// `page` stays a raw string so a non-numeric value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Response for GET /questions
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<i64, String>,
}

/// Response for DELETE /questions/:id
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i64,
}

/// Response for POST /questions in search mode
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Total question count across the whole store, not the match count
    pub total_questions: i64,
}

/// Response for POST /questions in create mode
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: i64,
    pub question_created: String,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Extract a non-empty string field from a loose JSON body
fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Extract a non-zero integer field, accepting numbers and numeric strings
///
/// Zero counts as an empty value, like a missing key or an empty string.
fn truthy_int(body: &Value, key: &str) -> Option<i64> {
    let n = match body.get(key)? {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };

    (n != 0).then_some(n)
}

/// Get all questions, paginated
///
/// # Query Parameters
///
/// - `page` (optional): 1-based page number, default 1
///
/// An empty page slice (page past the end) is not-found.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/questions?page=2
/// ```
pub async fn get_questions(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let selection = state.store.list_questions().await?;
    let total_questions = selection.len() as i64;

    let page = paging::parse_page(params.page.as_deref());
    let questions = paging::paginate(&selection, page).to_vec();

    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = category_map(&state.store.list_categories().await?);

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories,
    }))
}

/// Delete a question by id
///
/// Unknown ids are not-found; a delete that fails after the question was
/// seen is unprocessable.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:8080/questions/5
/// ```
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.store.get_question(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let affected = state.store.delete_question(id).await.map_err(|e| {
        tracing::error!("Question delete failed for {}: {}", id, e);
        ApiError::Unprocessable
    })?;

    if affected == 0 {
        return Err(ApiError::Unprocessable);
    }

    tracing::debug!("Deleted question {}", id);

    Ok(Json(DeleteResponse {
        success: true,
        deleted: id,
    }))
}

/// Search questions or create a new one
///
/// A body with a non-empty `searchTerm` searches; anything else is treated
/// as a create. A malformed JSON body is a bad request either way.
///
/// # Examples
///
/// ```bash
/// # Search mode
/// curl -X POST http://localhost:8080/questions \
///   -H "Content-Type: application/json" \
///   -d '{"searchTerm": "Khwarizmi"}'
///
/// # Create mode
/// curl -X POST http://localhost:8080/questions \
///   -H "Content-Type: application/json" \
///   -d '{"question": "Q", "answer": "A", "difficulty": 3, "category": 1}'
/// ```
pub async fn post_questions(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let page = paging::parse_page(params.page.as_deref());

    if let Some(term) = non_empty_str(&body, "searchTerm") {
        search_questions(&state, term, page).await
    } else {
        create_question(&state, &body, page).await
    }
}

/// Search mode: case-insensitive substring match on question text
///
/// The not-found check applies to the full match set, before pagination.
async fn search_questions(state: &AppState, term: &str, page: i64) -> Result<Response, ApiError> {
    let matches = state.store.search_questions(term).await?;

    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    let questions = paging::paginate(&matches, page).to_vec();
    let total_questions = state.store.count_questions().await?;

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions,
    })
    .into_response())
}

/// Create mode: insert a question and return the refreshed first listing
///
/// All four fields must be present and non-empty; zero difficulty or
/// category counts as empty.
async fn create_question(state: &AppState, body: &Value, page: i64) -> Result<Response, ApiError> {
    let question = non_empty_str(body, "question").ok_or(ApiError::Unprocessable)?;
    let answer = non_empty_str(body, "answer").ok_or(ApiError::Unprocessable)?;
    let difficulty = truthy_int(body, "difficulty").ok_or(ApiError::Unprocessable)?;
    let category = truthy_int(body, "category").ok_or(ApiError::Unprocessable)?;

    let new = NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    };

    let created = state.store.insert_question(&new).await.map_err(|e| {
        tracing::error!("Question insert failed: {}", e);
        ApiError::Unprocessable
    })?;

    tracing::debug!("Created question {}", created);

    let selection = state.store.list_questions().await?;
    let total_questions = selection.len() as i64;
    let questions = paging::paginate(&selection, page).to_vec();

    Ok(Json(CreateResponse {
        success: true,
        created,
        question_created: new.question,
        questions,
        total_questions,
    })
    .into_response())
}

/// Create router with the question endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/questions", post(post_questions))
        .route("/questions/:id", delete(delete_question))
        .with_state(state)
}
