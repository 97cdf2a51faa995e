//! Trivia API Server Binary
//!
//! Starts the HTTP server over a libsql database.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trivia-server
//!
//! # Custom port and database location
//! TRIVIA_PORT=8081 TRIVIA_DB_PATH=/tmp/trivia.db cargo run --bin trivia-server
//! ```
//!
//! # Environment Variables
//!
//! - `TRIVIA_PORT`: Server port (default: 8080)
//! - `TRIVIA_DB_PATH`: Database file path (default: ~/.trivia/database/trivia.db)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use trivia_core::db::{DatabaseService, QuestionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 Trivia API Server");

    let port = env::var("TRIVIA_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    tracing::info!("📡 Port: {}", port);

    // Determine database path
    let db_path: PathBuf = match env::var("TRIVIA_DB_PATH") {
        Ok(custom) => PathBuf::from(custom),
        Err(_) => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?;
            home_dir.join(".trivia").join("database").join("trivia.db")
        }
    };

    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    tracing::info!("📦 Database: {}", db_path.display());

    // Open the database and initialize the schema; the handle lives for the
    // whole process and is shared through application state
    let db = Arc::new(DatabaseService::new(db_path).await?);
    let store = QuestionStore::new(db);

    tracing::info!("✅ Store initialized");

    trivia_server::start_server(store, port).await?;

    Ok(())
}
