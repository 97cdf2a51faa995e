//! Database Connection Management
//!
//! This module provides the core database connection and initialization
//! functionality using libsql.
//!
//! # Architecture
//!
//! - **Path-agnostic**: accepts any valid PathBuf (configured at startup)
//! - **Idempotent schema**: `CREATE TABLE IF NOT EXISTS`, safe to re-run
//! - **WAL mode**: Write-Ahead Logging for better concurrency
//! - **Foreign keys**: enabled so `questions.category` references a real row
//! - **Seeded categories**: the default category set is inserted with
//!   `INSERT OR IGNORE` so repeated initialization never duplicates rows
//!
//! # Connection Pattern
//!
//! Use `connect_with_timeout()` in async functions. The 5-second busy
//! timeout lets concurrent operations wait and retry instead of failing
//! immediately with `SQLITE_BUSY` when the Tokio runtime interleaves
//! requests.

use crate::db::error::DatabaseError;
use libsql::{Builder, Database};
use std::path::PathBuf;
use std::sync::Arc;

/// The category labels seeded into a fresh database, with stable ids
/// starting at 1. GET /categories treats an empty category table as
/// not-found, so a usable database always carries these.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Database service for managing the libsql connection and schema
///
/// Constructed once at process start and shared via `Arc`; there is no
/// module-level connection anywhere in the crate.
///
/// # Examples
///
/// ```no_run
/// use trivia_core::db::DatabaseService;
/// use std::path::PathBuf;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let db = DatabaseService::new(PathBuf::from("./data/trivia.db")).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseService {
    /// libsql database handle (wrapped in Arc for sharing)
    pub db: Arc<Database>,

    /// Path to the database file
    pub db_path: PathBuf,
}

impl DatabaseService {
    /// Create a new DatabaseService with the specified database path
    ///
    /// This will:
    /// 1. Ensure the parent directory exists (create if needed)
    /// 2. Open/create the database file
    /// 3. Initialize the schema (CREATE TABLE IF NOT EXISTS)
    /// 4. Seed the default categories (INSERT OR IGNORE)
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the parent directory cannot be created,
    /// the connection fails, or schema initialization fails.
    pub async fn new(db_path: PathBuf) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| DatabaseError::connection_failed(db_path.clone(), e))?;

        let service = Self {
            db: Arc::new(db),
            db_path,
        };

        service.initialize_schema().await?;

        Ok(service)
    }

    /// Execute a PRAGMA statement
    ///
    /// PRAGMA statements return rows, so we must use query() instead of
    /// execute(). This helper encapsulates that pattern.
    async fn execute_pragma(
        &self,
        conn: &libsql::Connection,
        pragma: &str,
    ) -> Result<(), DatabaseError> {
        let mut stmt = conn.prepare(pragma).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute '{}': {}", pragma, e))
        })?;
        let _ = stmt.query(()).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute '{}': {}", pragma, e))
        })?;
        Ok(())
    }

    /// Initialize database schema and configuration
    ///
    /// Creates tables and indexes using CREATE TABLE IF NOT EXISTS and
    /// seeds the default categories, so initialization is idempotent.
    ///
    /// # Schema
    ///
    /// - `categories` table: id + type label
    /// - `questions` table: question text, answer, category FK, difficulty
    /// - Index on `questions.category` (most common filter)
    async fn initialize_schema(&self) -> Result<(), DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        // Enable WAL mode for better concurrency
        self.execute_pragma(&conn, "PRAGMA journal_mode = WAL")
            .await?;

        // Wait up to 5s on a locked database instead of failing immediately
        self.execute_pragma(&conn, "PRAGMA busy_timeout = 5000")
            .await?;

        // Enable foreign key constraints
        self.execute_pragma(&conn, "PRAGMA foreign_keys = ON")
            .await?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| {
            DatabaseError::initialization_failed(format!(
                "Failed to create categories table: {}",
                e
            ))
        })?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL,
                difficulty INTEGER NOT NULL,
                FOREIGN KEY (category) REFERENCES categories(id)
            )",
            (),
        )
        .await
        .map_err(|e| {
            DatabaseError::initialization_failed(format!("Failed to create questions table: {}", e))
        })?;

        // Index on category (most common filter)
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)",
            (),
        )
        .await
        .map_err(|e| {
            DatabaseError::sql_execution(format!(
                "Failed to create index 'idx_questions_category': {}",
                e
            ))
        })?;

        self.seed_categories(&conn).await?;

        Ok(())
    }

    /// Seed the default categories
    ///
    /// Uses INSERT OR IGNORE with explicit ids so repeated initialization
    /// is safe and ids stay stable across databases.
    async fn seed_categories(&self, conn: &libsql::Connection) -> Result<(), DatabaseError> {
        for (index, label) in DEFAULT_CATEGORIES.iter().enumerate() {
            let id = index as i64 + 1;
            conn.execute(
                "INSERT OR IGNORE INTO categories (id, type) VALUES (?, ?)",
                (id, *label),
            )
            .await
            .map_err(|e| {
                DatabaseError::initialization_failed(format!(
                    "Failed to seed category '{}': {}",
                    label, e
                ))
            })?;
        }

        tracing::debug!("Seeded {} default categories", DEFAULT_CATEGORIES.len());

        Ok(())
    }

    /// Get a synchronous connection handle
    ///
    /// Prefer [`connect_with_timeout`](Self::connect_with_timeout) in async
    /// contexts.
    pub fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        self.db.connect().map_err(DatabaseError::LibsqlError)
    }

    /// Get an async connection with busy timeout configured
    ///
    /// Sets a 5-second busy timeout so concurrent operations wait and retry
    /// instead of failing immediately when the database is locked. Foreign
    /// key enforcement is per-connection in SQLite, so it is re-enabled
    /// here as well.
    pub async fn connect_with_timeout(&self) -> Result<libsql::Connection, DatabaseError> {
        let conn = self.connect()?;

        self.execute_pragma(&conn, "PRAGMA busy_timeout = 5000")
            .await?;
        self.execute_pragma(&conn, "PRAGMA foreign_keys = ON")
            .await?;

        Ok(conn)
    }
}
