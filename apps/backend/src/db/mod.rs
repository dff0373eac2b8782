//! PostgreSQL database operations

use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, Connection, PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

const MCQ_COLUMNS: &str = "id, title, slug, content, created_at, updated_at";

/// Slug searches per write before a concurrent conflict is reported
const SLUG_ATTEMPTS: usize = 16;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === MCQ Repository ===

    /// Get all MCQs, newest first
    pub async fn list_mcqs(&self) -> Result<Vec<DbMcq>> {
        let mcqs = sqlx::query_as::<_, DbMcq>(&format!(
            "SELECT {MCQ_COLUMNS} FROM mcqs ORDER BY created_at DESC, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(mcqs)
    }

    /// Get MCQ by ID
    pub async fn get_mcq(&self, id: Uuid) -> Result<Option<DbMcq>> {
        let mcq = sqlx::query_as::<_, DbMcq>(&format!(
            "SELECT {MCQ_COLUMNS} FROM mcqs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mcq)
    }

    /// Create an MCQ with a unique slug
    pub async fn create_mcq(&self, input: &McqInput) -> Result<DbMcq> {
        let mut tx = self.pool.begin().await?;
        let mcq = insert_mcq(&mut tx, input).await?;
        tx.commit().await?;

        tracing::info!("Created MCQ {} ({})", mcq.id, mcq.slug);
        Ok(mcq)
    }

    /// Update an MCQ, returning None when it does not exist
    pub async fn update_mcq(&self, id: Uuid, input: &McqInput) -> Result<Option<DbMcq>> {
        let mut tx = self.pool.begin().await?;
        let mcq = save_with_unique_slug(&mut tx, input, Some(id)).await?;
        tx.commit().await?;

        if let Some(ref mcq) = mcq {
            tracing::info!("Updated MCQ {} ({})", mcq.id, mcq.slug);
        }
        Ok(mcq)
    }

    /// Delete an MCQ, returning whether a row was removed
    pub async fn delete_mcq(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM mcqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert a batch of MCQs atomically
    pub async fn import_mcqs(&self, inputs: &[McqInput]) -> Result<Vec<DbMcq>> {
        let mut tx = self.pool.begin().await?;

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(insert_mcq(&mut tx, input).await?);
        }

        tx.commit().await?;

        tracing::info!("Imported {} MCQs", created.len());
        Ok(created)
    }

    /// Get all MCQs in export shape, newest first
    pub async fn export_mcqs(&self) -> Result<Vec<McqJsonRecord>> {
        let mcqs = self.list_mcqs().await?;
        Ok(mcqs.iter().map(DbMcq::to_json_record).collect())
    }
}

async fn insert_mcq(conn: &mut PgConnection, input: &McqInput) -> Result<DbMcq> {
    let mcq = save_with_unique_slug(conn, input, None).await?;
    // An insert always returns its row.
    mcq.ok_or(ApiError::Internal("insert returned no row".to_string()))
}

/// Insert (`existing` = None) or update an MCQ under a free slug.
///
/// A concurrent writer can claim the chosen slug between the search and the
/// write; the unique violation is rolled back to a savepoint and the search
/// runs again.
async fn save_with_unique_slug(
    conn: &mut PgConnection,
    input: &McqInput,
    existing: Option<Uuid>,
) -> Result<Option<DbMcq>> {
    let base = slug_base(input);
    let mut attempt = 1;

    loop {
        let slug = unique_slug(conn, &base, existing).await?;

        let mut savepoint = conn.begin().await?;
        let result = match existing {
            Some(id) => update_row(&mut savepoint, id, input, &slug).await,
            None => insert_row(&mut savepoint, input, &slug).await.map(Some),
        };

        match result {
            Ok(mcq) => {
                savepoint.commit().await?;
                return Ok(mcq);
            }
            Err(e) if is_unique_violation(&e) && attempt < SLUG_ATTEMPTS => {
                savepoint.rollback().await?;
                tracing::warn!("Slug {} claimed concurrently, retrying", slug);
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

async fn insert_row(conn: &mut PgConnection, input: &McqInput, slug: &str) -> sqlx::Result<DbMcq> {
    sqlx::query_as::<_, DbMcq>(&format!(
        r#"
        INSERT INTO mcqs (id, title, slug, content, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING {MCQ_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(&input.title)
    .bind(slug)
    .bind(&input.content)
    .bind(Utc::now())
    .fetch_one(conn)
    .await
}

async fn update_row(
    conn: &mut PgConnection,
    id: Uuid,
    input: &McqInput,
    slug: &str,
) -> sqlx::Result<Option<DbMcq>> {
    sqlx::query_as::<_, DbMcq>(&format!(
        r#"
        UPDATE mcqs
        SET title = $2, slug = $3, content = $4, updated_at = NOW()
        WHERE id = $1
        RETURNING {MCQ_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&input.title)
    .bind(slug)
    .bind(&input.content)
    .fetch_optional(conn)
    .await
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// First free slug among `base`, `base-1`, `base-2`, ...
///
/// The record `exclude` may keep its own slug.
async fn unique_slug(conn: &mut PgConnection, base: &str, exclude: Option<Uuid>) -> Result<String> {
    let mut candidate = base.to_string();
    let mut suffix = 1;

    loop {
        let taken: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM mcqs
                WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(&candidate)
        .bind(exclude)
        .fetch_one(&mut *conn)
        .await?;

        if !taken {
            return Ok(candidate);
        }

        candidate = format!("{}-{}", base, suffix);
        suffix += 1;
    }
}

fn slug_base(input: &McqInput) -> String {
    mcq_core::base_slug(input.slug.as_deref(), &input.title)
        .unwrap_or_else(|| format!("mcq-{}", Utc::now().timestamp_millis()))
}
