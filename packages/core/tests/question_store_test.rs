//! Integration tests for QuestionStore
//!
//! Tests cover:
//! - Schema initialization and category seeding
//! - Insert / get / delete round trip
//! - Category filtering and substring search
//! - Count bookkeeping

use std::path::PathBuf;
use std::sync::Arc;

use trivia_core::db::{DatabaseService, QuestionStore};
use trivia_core::models::NewQuestion;

async fn test_store() -> (tempfile::TempDir, QuestionStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path: PathBuf = dir.path().join("trivia-test.db");
    let db = DatabaseService::new(db_path).await.expect("open database");
    (dir, QuestionStore::new(Arc::new(db)))
}

fn sample_question() -> NewQuestion {
    NewQuestion {
        question: "Where was Al-Khwarizmi born?".to_string(),
        answer: "Khwarezm".to_string(),
        category: 4,
        difficulty: 3,
    }
}

#[tokio::test]
async fn test_categories_are_seeded() {
    let (_dir, store) = test_store().await;

    let categories = store.list_categories().await.unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].id, 1);
    assert_eq!(categories[0].category_type, "Science");
    assert_eq!(categories[5].category_type, "Sports");
}

#[tokio::test]
async fn test_initialization_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trivia-test.db");

    let first = DatabaseService::new(db_path.clone()).await.unwrap();
    drop(first);

    // Re-opening the same file must not duplicate seeded categories
    let second = DatabaseService::new(db_path).await.unwrap();
    let store = QuestionStore::new(Arc::new(second));
    assert_eq!(store.list_categories().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_get_category() {
    let (_dir, store) = test_store().await;

    let science = store.get_category(1).await.unwrap().unwrap();
    assert_eq!(science.category_type, "Science");

    assert!(store.get_category(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let (_dir, store) = test_store().await;

    let first = store.insert_question(&sample_question()).await.unwrap();
    let second = store.insert_question(&sample_question()).await.unwrap();

    assert!(first > 0);
    assert!(second > first);
}

#[tokio::test]
async fn test_insert_get_delete_round_trip() {
    let (_dir, store) = test_store().await;

    let id = store.insert_question(&sample_question()).await.unwrap();

    let stored = store.get_question(id).await.unwrap().expect("inserted");
    assert_eq!(stored.question, "Where was Al-Khwarizmi born?");
    assert_eq!(stored.answer, "Khwarezm");
    assert_eq!(stored.category, 4);
    assert_eq!(stored.difficulty, 3);

    let affected = store.delete_question(id).await.unwrap();
    assert_eq!(affected, 1);
    assert!(store.get_question(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_unknown_category_is_constraint_violation() {
    let (_dir, store) = test_store().await;

    let result = store
        .insert_question(&NewQuestion {
            question: "Orphan".to_string(),
            answer: "None".to_string(),
            category: 99,
            difficulty: 1,
        })
        .await;

    assert!(matches!(
        result,
        Err(trivia_core::db::DatabaseError::ConstraintViolation { .. })
    ));
}

#[tokio::test]
async fn test_delete_missing_question_affects_no_rows() {
    let (_dir, store) = test_store().await;

    let affected = store.delete_question(99999).await.unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn test_list_questions_ordered_by_id() {
    let (_dir, store) = test_store().await;

    for _ in 0..3 {
        store.insert_question(&sample_question()).await.unwrap();
    }

    let questions = store.list_questions().await.unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_questions_by_category() {
    let (_dir, store) = test_store().await;

    store.insert_question(&sample_question()).await.unwrap();
    store
        .insert_question(&NewQuestion {
            question: "What boxer's original name is Cassius Clay?".to_string(),
            answer: "Muhammad Ali".to_string(),
            category: 6,
            difficulty: 1,
        })
        .await
        .unwrap();

    let history = store.questions_by_category(4).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].category, 4);

    assert!(store.questions_by_category(2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let (_dir, store) = test_store().await;

    store.insert_question(&sample_question()).await.unwrap();

    let hits = store.search_questions("al-khwarizmi").await.unwrap();
    assert_eq!(hits.len(), 1);

    let hits = store.search_questions("KHWARIZMI").await.unwrap();
    assert_eq!(hits.len(), 1);

    assert!(store.search_questions("nonexistent").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_count_questions_tracks_mutations() {
    let (_dir, store) = test_store().await;

    assert_eq!(store.count_questions().await.unwrap(), 0);

    let id = store.insert_question(&sample_question()).await.unwrap();
    assert_eq!(store.count_questions().await.unwrap(), 1);

    store.delete_question(id).await.unwrap();
    assert_eq!(store.count_questions().await.unwrap(), 0);
}
