//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Sample MCQ markdown with one correct option and a general explanation.
pub const SAMPLE_MARKDOWN: &str = "# Sample question
What does HTTP stand for?

- [x] Hypertext Transfer Protocol :: This is the core web protocol.
- [ ] Hyperlink Transfer Process :: Not a real standard.
- [ ] High Transfer Text Package :: Made up.

---
HTTP is the foundation of data communication on the web.";

/// Generate MCQ markdown with a given number of options, the first correct.
pub fn sample_markdown(num_options: usize) -> String {
    let options = (0..num_options)
        .map(|i| {
            let mark = if i == 0 { "x" } else { " " };
            format!("- [{}] Option {} :: Reason {}", mark, i + 1, i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("# Question?\n\n{}\n\n---\nGeneral explanation.", options)
}

/// Create a create/update request body.
pub fn mcq_request(title: &str, slug: Option<&str>, content: &str) -> serde_json::Value {
    match slug {
        Some(s) => json!({ "title": title, "slug": s, "content": content }),
        None => json!({ "title": title, "content": content }),
    }
}

/// Create an import payload with one entry per title.
pub fn import_payload(titles: &[String]) -> String {
    let entries: Vec<serde_json::Value> = titles
        .iter()
        .map(|title| json!({ "title": title, "content": sample_markdown(2) }))
        .collect();
    serde_json::to_string(&entries).unwrap()
}

/// Generate a unique title prefix to avoid collisions between test runs.
pub fn unique_title(prefix: &str) -> String {
    format!("{} {}", prefix, &Uuid::new_v4().to_string()[..8])
}
