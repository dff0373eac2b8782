//! URL slug generation for MCQ records.

/// Lowercase ASCII slug: alphanumerics kept, whitespace/`_`/`-` runs become a
/// single `-`, everything else dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_dash = true;
        }
    }

    slug
}

/// Slug base for a record: the preferred slug when non-empty, otherwise the
/// title. A whitespace-only preferred slug still wins over the title.
///
/// Returns `None` when nothing slug-worthy remains.
pub fn base_slug(preferred: Option<&str>, title: &str) -> Option<String> {
    let source = preferred.filter(|s| !s.is_empty()).unwrap_or(title);
    let slug = slugify(source);
    (!slug.is_empty()).then_some(slug)
}
