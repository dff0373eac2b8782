//! Core types for MCQ documents and records.

use serde::{Deserialize, Serialize};

/// One answer choice of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqOption {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub correct: bool,
}

/// Structured view of an MCQ markdown document.
///
/// Derived from a record's content on every read; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMcq {
    pub question: String,
    pub options: Vec<McqOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_explanation: Option<String>,
}

impl ParsedMcq {
    /// Number of options marked correct.
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }

    /// True when the document yielded no question, options or explanation.
    pub fn is_empty(&self) -> bool {
        self.question.is_empty() && self.options.is_empty() && self.general_explanation.is_none()
    }
}

/// MCQ record as it appears in JSON import/export payloads.
///
/// Field order is the serialized order: `id, title, slug, content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqJsonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(text: &str, correct: bool) -> McqOption {
        McqOption {
            text: text.to_string(),
            explanation: None,
            correct,
        }
    }

    #[test]
    fn correct_count_counts_marked_options() {
        let parsed = ParsedMcq {
            question: "Q".to_string(),
            options: vec![option("a", true), option("b", false), option("c", true)],
            general_explanation: None,
        };
        assert_eq!(parsed.correct_count(), 2);
    }

    #[test]
    fn default_is_empty() {
        assert!(ParsedMcq::default().is_empty());
    }

    #[test]
    fn parsed_serializes_camel_case() {
        let parsed = ParsedMcq {
            question: "Q".to_string(),
            options: vec![option("a", true)],
            general_explanation: Some("because".to_string()),
        };
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["generalExplanation"], "because");
        assert!(value["options"][0].get("explanation").is_none());
    }

    #[test]
    fn record_omits_absent_id_and_slug() {
        let record = McqJsonRecord {
            id: None,
            title: "T".to_string(),
            slug: None,
            content: "C".to_string(),
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "T", "content": "C" }));
    }
}
