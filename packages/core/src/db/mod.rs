//! Database Layer
//!
//! libsql-backed storage for questions and categories.
//!
//! - [`DatabaseService`] owns the connection and schema lifecycle
//! - [`QuestionStore`] exposes the typed query and mutation operations
//! - [`DatabaseError`] is the error type for everything below the HTTP layer

pub mod database;
pub mod error;
pub mod question_store;

pub use database::DatabaseService;
pub use error::DatabaseError;
pub use question_store::QuestionStore;
