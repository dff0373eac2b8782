//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{ApiError, Result};

// Re-export shared types from mcq-core
pub use mcq_core::types::{McqJsonRecord, McqOption, ParsedMcq};

// === Database Entity Types ===

/// MCQ stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMcq {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbMcq {
    /// Convert to the API view, parsing the markdown content
    pub fn to_view(&self) -> McqView {
        let parsed = mcq_core::parse(&self.content);
        McqView {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            option_count: parsed.options.len(),
            correct_count: parsed.correct_count(),
            parsed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Convert to the export record shape
    pub fn to_json_record(&self) -> McqJsonRecord {
        McqJsonRecord {
            id: Some(self.id.to_string()),
            title: self.title.clone(),
            slug: Some(self.slug.clone()),
            content: self.content.clone(),
        }
    }
}

/// Validated fields for creating or updating an MCQ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqInput {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
}

impl From<McqJsonRecord> for McqInput {
    fn from(record: McqJsonRecord) -> Self {
        Self {
            title: record.title,
            slug: record.slug,
            content: record.content,
        }
    }
}

// === API Request/Response Types ===

/// Body of POST /api/mcqs and PUT /api/mcqs/:id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McqRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl McqRequest {
    /// Trim fields and require a title and content
    pub fn validate(self) -> Result<McqInput> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();
        let slug = self
            .slug
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if title.is_empty() || content.is_empty() {
            return Err(ApiError::BadRequest(
                "Title and markdown content are required.".to_string(),
            ));
        }

        Ok(McqInput {
            title,
            slug,
            content,
        })
    }
}

/// MCQ with its parsed question, options and explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub parsed: ParsedMcq,
    pub option_count: usize,
    pub correct_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for GET /api/mcqs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqListResponse {
    pub mcqs: Vec<McqView>,
    pub total: usize,
}

/// Response for DELETE /api/mcqs/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Response for POST /api/import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub mcqs: Vec<McqView>,
}
