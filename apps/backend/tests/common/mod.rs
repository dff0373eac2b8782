//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating and removing test data
//!
//! # Requirements
//! Tests built with `TestContext::new` require a PostgreSQL database
//! (set DATABASE_URL env var). `TestContext::without_database` builds the
//! router over a lazy pool for endpoints that never reach the database.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use mcq_testbank_backend::db::Database;
use mcq_testbank_backend::models::{DbMcq, McqInput};
use mcq_testbank_backend::{router, AppState};

/// Test context containing database connection and test router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self::with_database(db)
    }

    /// Create a test context whose pool never connects unless used.
    pub fn without_database() -> Self {
        let db = Database::connect_lazy("postgres://localhost:1/unused")
            .expect("Failed to create lazy pool");

        Self::with_database(db)
    }

    fn with_database(db: Database) -> Self {
        let db = Arc::new(db);
        let app = router(AppState { db: db.clone() });
        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Insert an MCQ directly through the repository.
    pub async fn create_test_mcq(&self, title: &str, content: &str) -> DbMcq {
        self.db
            .create_mcq(&McqInput {
                title: title.to_string(),
                slug: None,
                content: content.to_string(),
            })
            .await
            .expect("Failed to create test MCQ")
    }

    /// Remove MCQs created by a test.
    pub async fn cleanup_mcqs(&self, ids: &[Uuid]) {
        for id in ids {
            let _ = self.db.delete_mcq(*id).await;
        }
    }

    /// Remove MCQs whose title starts with the given prefix.
    pub async fn cleanup_by_title_prefix(&self, prefix: &str) {
        let _ = sqlx::query("DELETE FROM mcqs WHERE title LIKE $1")
            .bind(format!("{}%", prefix))
            .execute(self.db.pool())
            .await;
    }
}
