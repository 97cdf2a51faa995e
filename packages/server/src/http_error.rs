//! HTTP error handling
//!
//! Every failure leaving this server speaks the same JSON shape:
//! `{"success": false, "error": <code>, "message": <text>}` with one of the
//! four status codes and their fixed texts. Clients treat not-found and
//! unprocessable as non-retryable without modifying the request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use trivia_core::db::DatabaseError;

/// The four terminal request outcomes
///
/// Maps 1:1 to HTTP status codes; nothing is retried server-side. Internal
/// faults carry no detail on the wire - the cause goes to the log instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or missing required request fields
    BadRequest,
    /// Empty result set where a non-empty one was expected
    NotFound,
    /// Valid request shape but the operation cannot complete
    Unprocessable,
    /// Any uncaught internal fault
    Internal,
}

/// Wire shape of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::BadRequest => "Bad Request",
            ApiError::NotFound => "Not Found",
            ApiError::Unprocessable => "Unprocessable",
            ApiError::Internal => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            // A rejected mutation is the request's fault, not the server's
            DatabaseError::ConstraintViolation { .. } => ApiError::Unprocessable,
            other => {
                // Log the cause; the client only ever sees the generic 500 body
                tracing::error!("Database failure: {}", other);
                ApiError::Internal
            }
        }
    }
}
