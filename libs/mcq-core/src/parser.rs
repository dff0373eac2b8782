//! Markdown parser for MCQ documents.
//!
//! # Format
//! ```markdown
//! # What does HTTP stand for?
//!
//! - [x] Hypertext Transfer Protocol :: This is the core web protocol.
//! - [ ] Hyperlink Transfer Process :: Not a real standard.
//! - [ ] High Transfer Text Package
//!
//! ---
//! HTTP is the foundation of data communication on the web.
//! ```
//!
//! Every line is classified on its own, in this order: explanation header,
//! option, then prose. Prose goes to the question until the first explanation
//! header and to the general explanation afterwards. Option lines are still
//! recognised after an explanation header.

use crate::types::{McqOption, ParsedMcq};

/// Parse an MCQ markdown document.
///
/// Never fails: empty or unstructured input yields an empty question, no
/// options and no general explanation.
pub fn parse(markdown: &str) -> ParsedMcq {
    markdown
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .fold(Accumulator::default(), Accumulator::push)
        .finish()
}

#[derive(Default)]
struct Accumulator<'a> {
    options: Vec<McqOption>,
    question_lines: Vec<&'a str>,
    explanation_lines: Vec<&'a str>,
    in_explanation: bool,
}

impl<'a> Accumulator<'a> {
    fn push(mut self, line: &'a str) -> Self {
        match parse_line(line) {
            LineType::ExplanationHeader => self.in_explanation = true,
            LineType::Option(option) => self.options.push(option),
            LineType::Prose { raw, blank } => {
                if self.in_explanation {
                    self.explanation_lines.push(raw);
                } else if !blank || !self.question_lines.is_empty() {
                    // Leading blank lines never start the question.
                    self.question_lines.push(raw);
                }
            }
        }
        self
    }

    fn finish(self) -> ParsedMcq {
        let question = self.question_lines.join("\n");
        let question = trim(strip_heading_marker(&question)).to_string();

        let explanation = self.explanation_lines.join("\n");
        let explanation = trim(&explanation);

        ParsedMcq {
            question,
            options: self.options,
            general_explanation: (!explanation.is_empty()).then(|| explanation.to_string()),
        }
    }
}

enum LineType<'a> {
    ExplanationHeader,
    Option(McqOption),
    Prose { raw: &'a str, blank: bool },
}

fn parse_line(line: &str) -> LineType<'_> {
    let trimmed = trim(line);

    if is_explanation_header(trimmed) {
        LineType::ExplanationHeader
    } else if let Some(option) = parse_option(trimmed) {
        LineType::Option(option)
    } else {
        LineType::Prose {
            raw: line,
            blank: trimmed.is_empty(),
        }
    }
}

/// `---...`, `## Explanation` (any heading level from 2, optional colon) or
/// `Explanation:`. Case-insensitive.
fn is_explanation_header(trimmed: &str) -> bool {
    if trimmed.starts_with("---") {
        return true;
    }

    if let Some(rest) = trimmed.strip_prefix("##") {
        let rest = trim_start(rest.trim_start_matches('#'));
        return match strip_prefix_ignore_case(rest, "explanation") {
            Some(after) => {
                let after = trim_start(after);
                after.strip_prefix(':').unwrap_or(after).is_empty()
            }
            None => false,
        };
    }

    strip_prefix_ignore_case(trimmed, "explanation")
        .is_some_and(|rest| trim_start(rest).starts_with(':'))
}

/// `- [x] text :: explanation` or `- [ ] text`.
fn parse_option(trimmed: &str) -> Option<McqOption> {
    let rest = trimmed.strip_prefix("- [")?;

    let mut chars = rest.chars();
    let correct = match chars.next()? {
        'x' | 'X' => true,
        ' ' => false,
        _ => return None,
    };
    let rest = chars.as_str().strip_prefix(']')?;

    // At least one whitespace character must separate the box from the text.
    let body = trim_start(rest);
    if body.len() == rest.len() || body.is_empty() {
        return None;
    }

    let (text, explanation) = split_explanation(body)?;
    Some(McqOption {
        text: trim(text).to_string(),
        explanation: explanation.map(|e| trim(e).to_string()),
        correct,
    })
}

/// Shortest option text followed by either the end of the line or a `::`
/// separator with a non-empty explanation.
///
/// Text and explanation never span a line terminator; whitespace around the
/// separator may.
fn split_explanation(body: &str) -> Option<(&str, Option<&str>)> {
    for (idx, c) in body.char_indices() {
        if is_line_terminator(c) {
            return None;
        }

        let end = idx + c.len_utf8();
        let rest = &body[end..];
        if rest.is_empty() {
            return Some((body, None));
        }

        if let Some(after) = trim_start(rest).strip_prefix("::") {
            let explanation = trim_start(after);
            if !explanation.is_empty() && !explanation.contains(is_line_terminator) {
                return Some((&body[..end], Some(explanation)));
            }
        }
    }
    None
}

fn strip_heading_marker(text: &str) -> &str {
    if text.starts_with('#') {
        trim_start(text.trim_start_matches('#'))
    } else {
        text
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Whitespace as markdown editors and browsers see it: Unicode white space
/// plus the byte-order mark, without NEL (U+0085).
fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_space)
}
