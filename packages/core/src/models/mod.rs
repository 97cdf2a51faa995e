//! Data Model
//!
//! Typed records for the two persisted entities. Field names double as the
//! JSON wire names used by the HTTP layer and match the column names in the
//! database schema.

use serde::{Deserialize, Serialize};

/// A trivia question as stored and served
///
/// `id` is identity-assigned by the database on insert. Questions are
/// immutable after creation; the only mutation is deletion by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Foreign key to [`Category::id`]
    pub category: i64,
    pub difficulty: i64,
}

/// Fields required to insert a new question
///
/// Identical to [`Question`] minus the identity-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question category
///
/// Read-only over HTTP; the default set is seeded at schema initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Human-readable label, serialized as `type` on the wire
    #[serde(rename = "type")]
    pub category_type: String,
}
