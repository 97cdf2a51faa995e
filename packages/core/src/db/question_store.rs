//! QuestionStore - Typed Query and Mutation Operations
//!
//! Thin wrapper around [`DatabaseService`] exposing the operations the HTTP
//! layer needs. All row-to-struct conversion happens here, in one place, so
//! nothing above this module ever touches a raw row.
//!
//! # Operations
//!
//! - `list_questions`: all questions ordered by id
//! - `questions_by_category`: exact-match filter on the category column
//! - `search_questions`: case-insensitive substring match on question text
//! - `get_question` / `insert_question` / `delete_question`
//! - `count_questions`
//! - `list_categories` / `get_category`

use crate::db::{DatabaseError, DatabaseService};
use crate::models::{Category, NewQuestion, Question};
use libsql::Row;
use std::sync::Arc;

/// Typed store over the trivia database
///
/// Cheap to clone; the underlying database handle is shared.
///
/// # Examples
///
/// ```no_run
/// use trivia_core::db::{DatabaseService, QuestionStore};
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let db = Arc::new(DatabaseService::new(PathBuf::from("./trivia.db")).await?);
///     let store = QuestionStore::new(db);
///     let questions = store.list_questions().await?;
///     println!("{} questions", questions.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct QuestionStore {
    db: Arc<DatabaseService>,
}

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

impl QuestionStore {
    /// Create a new store over an initialized database service
    pub fn new(db: Arc<DatabaseService>) -> Self {
        Self { db }
    }

    /// Convert a libsql::Row to a Question
    ///
    /// Expected columns (in order): id, question, answer, category, difficulty.
    fn row_to_question(row: &Row) -> Result<Question, DatabaseError> {
        let id: i64 = row
            .get(0)
            .map_err(|e| DatabaseError::row_decode(format!("question id: {}", e)))?;
        let question: String = row
            .get(1)
            .map_err(|e| DatabaseError::row_decode(format!("question text: {}", e)))?;
        let answer: String = row
            .get(2)
            .map_err(|e| DatabaseError::row_decode(format!("question answer: {}", e)))?;
        let category: i64 = row
            .get(3)
            .map_err(|e| DatabaseError::row_decode(format!("question category: {}", e)))?;
        let difficulty: i64 = row
            .get(4)
            .map_err(|e| DatabaseError::row_decode(format!("question difficulty: {}", e)))?;

        Ok(Question {
            id,
            question,
            answer,
            category,
            difficulty,
        })
    }

    /// Convert a libsql::Row to a Category
    ///
    /// Expected columns (in order): id, type.
    fn row_to_category(row: &Row) -> Result<Category, DatabaseError> {
        let id: i64 = row
            .get(0)
            .map_err(|e| DatabaseError::row_decode(format!("category id: {}", e)))?;
        let category_type: String = row
            .get(1)
            .map_err(|e| DatabaseError::row_decode(format!("category type: {}", e)))?;

        Ok(Category { id, category_type })
    }

    /// Drain a result set into questions
    async fn collect_questions(mut rows: libsql::Rows) -> Result<Vec<Question>, DatabaseError> {
        let mut questions = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::sql_execution(e.to_string()))?
        {
            questions.push(Self::row_to_question(&row)?);
        }
        Ok(questions)
    }

    /// List all questions ordered by id
    pub async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM questions ORDER BY id",
                QUESTION_COLUMNS
            ))
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to prepare list query: {}", e))
            })?;

        let rows = stmt.query(()).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute list query: {}", e))
        })?;

        Self::collect_questions(rows).await
    }

    /// List questions in one category, ordered by id
    pub async fn questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM questions WHERE category = ? ORDER BY id",
                QUESTION_COLUMNS
            ))
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to prepare category query: {}", e))
            })?;

        let rows = stmt.query([category_id]).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute category query: {}", e))
        })?;

        Self::collect_questions(rows).await
    }

    /// Case-insensitive substring search on question text, ordered by id
    ///
    /// SQLite LIKE is case-insensitive for ASCII, which matches the
    /// behavior this API has always had.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM questions WHERE question LIKE '%' || ? || '%' ORDER BY id",
                QUESTION_COLUMNS
            ))
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to prepare search query: {}", e))
            })?;

        let rows = stmt.query([term]).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute search query: {}", e))
        })?;

        Self::collect_questions(rows).await
    }

    /// Get a single question by id
    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM questions WHERE id = ?",
                QUESTION_COLUMNS
            ))
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to prepare get query: {}", e))
            })?;

        let mut rows = stmt.query([id]).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute get query: {}", e))
        })?;

        let row = rows
            .next()
            .await
            .map_err(|e| DatabaseError::sql_execution(e.to_string()))?;

        row.as_ref().map(Self::row_to_question).transpose()
    }

    /// Insert a new question and return its identity-assigned id
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?, ?, ?, ?)",
            (
                new.question.as_str(),
                new.answer.as_str(),
                new.category,
                new.difficulty,
            ),
        )
        .await
        .map_err(|e| DatabaseError::mutation_failed("Failed to insert question", e))?;

        Ok(conn.last_insert_rowid())
    }

    /// Delete a question by id
    ///
    /// Returns the number of rows affected (0 when the id did not exist).
    pub async fn delete_question(&self, id: i64) -> Result<u64, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let rows_affected = conn
            .execute("DELETE FROM questions WHERE id = ?", [id])
            .await
            .map_err(|e| DatabaseError::mutation_failed("Failed to delete question", e))?;

        Ok(rows_affected)
    }

    /// Total number of questions in the store
    pub async fn count_questions(&self) -> Result<i64, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare("SELECT COUNT(*) FROM questions")
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to prepare count query: {}", e))
            })?;

        let mut rows = stmt.query(()).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute count query: {}", e))
        })?;

        let row = rows
            .next()
            .await
            .map_err(|e| DatabaseError::sql_execution(e.to_string()))?
            .ok_or_else(|| DatabaseError::sql_execution("COUNT(*) returned no row"))?;

        row.get(0)
            .map_err(|e| DatabaseError::row_decode(format!("question count: {}", e)))
    }

    /// List all categories ordered by id
    pub async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare("SELECT id, type FROM categories ORDER BY id")
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to prepare categories query: {}", e))
            })?;

        let mut rows = stmt.query(()).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute categories query: {}", e))
        })?;

        let mut categories = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::sql_execution(e.to_string()))?
        {
            categories.push(Self::row_to_category(&row)?);
        }

        Ok(categories)
    }

    /// Get a single category by id
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, DatabaseError> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare("SELECT id, type FROM categories WHERE id = ?")
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to prepare category get: {}", e))
            })?;

        let mut rows = stmt.query([id]).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute category get: {}", e))
        })?;

        let row = rows
            .next()
            .await
            .map_err(|e| DatabaseError::sql_execution(e.to_string()))?;

        row.as_ref().map(Self::row_to_category).transpose()
    }
}
