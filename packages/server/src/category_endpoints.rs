//! Category endpoints
//!
//! # Endpoints
//!
//! - `GET /categories` - All categories as an id → type mapping
//! - `GET /categories/:id/questions` - Paginated questions in one category
//!
//! Categories are read-only over HTTP; the default set is seeded when the
//! database is initialized.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::http_error::ApiError;
use crate::question_endpoints::PageQuery;
use crate::AppState;
use trivia_core::models::{Category, Question};
use trivia_core::services::paging;

/// Response for GET /categories
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Mapping of category id to type label
    pub categories: BTreeMap<i64, String>,
}

/// Response for GET /categories/:id/questions
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Total question count across the whole store, not just this category
    pub total_questions: i64,
    pub current_category: String,
}

/// Build the id → type mapping used in category-bearing responses
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.category_type.clone()))
        .collect()
}

/// Get all categories
///
/// An empty category table means the database was never initialized for
/// serving, so it maps to not-found.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/categories
/// ```
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.list_categories().await?;

    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// Get the questions of one category
///
/// # Path Parameters
///
/// - `id`: Category id; an unknown id is a bad request
///
/// # Query Parameters
///
/// - `page` (optional): 1-based page number, default 1
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/categories/1/questions?page=2
/// ```
pub async fn get_category_questions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or(ApiError::BadRequest)?;

    let selection = state.store.questions_by_category(category.id).await?;
    let page = paging::parse_page(params.page.as_deref());
    let questions = paging::paginate(&selection, page).to_vec();
    let total_questions = state.store.count_questions().await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.category_type,
    }))
}

/// Create router with the category endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/:id/questions", get(get_category_questions))
        .with_state(state)
}
