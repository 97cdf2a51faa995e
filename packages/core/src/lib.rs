//! Trivia Core Business Logic Layer
//!
//! This crate provides the data model, storage layer, and selection logic
//! for the trivia API.
//!
//! # Architecture
//!
//! - **Typed records**: questions and categories are explicit structs; no
//!   dynamic attribute access anywhere in the data path
//! - **libsql**: embedded SQLite database with WAL mode and foreign keys
//! - **Injected store handle**: the database service is constructed once at
//!   process start and passed down explicitly; there is no global connection
//!
//! # Modules
//!
//! - [`models`] - Data structures (Question, Category)
//! - [`db`] - Database layer with libsql integration
//! - [`services`] - Pagination and quiz selection logic

pub mod db;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use db::{DatabaseError, DatabaseService, QuestionStore};
pub use models::*;
