//! Core MCQ library shared by the backend service.
//!
//! Provides:
//! - Markdown parser for MCQ documents (question, options, explanation)
//! - JSON import/export of MCQ records
//! - Slug generation for record URLs
//! - Shared types (McqOption, ParsedMcq, McqJsonRecord)

pub mod error;
pub mod json;
pub mod parser;
pub mod slug;
pub mod types;

pub use error::{ParseError, Result};
pub use json::{parse_mcq_json, to_mcq_json};
pub use parser::parse;
pub use slug::{base_slug, slugify};
pub use types::{McqJsonRecord, McqOption, ParsedMcq};
