//! Inline markup parser. The only markup is `<b>…</b>` (tag names are
//! ASCII case-insensitive); everything else is literal text.

use thiserror::Error;

/// A run of text in a single weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn regular(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// `</b>` with no open `<b>`, at this byte offset.
    #[error("closing </b> without opening <b> at offset {offset}")]
    UnexpectedClose { offset: usize },

    /// `<b>` never closed; `depth` tags still open at end of input.
    #[error("{depth} unclosed <b> tag(s)")]
    Unclosed { depth: usize },
}

const OPEN_TAG: &str = "<b>";
const CLOSE_TAG: &str = "</b>";

/// Parses `text` into spans. Nested `<b>` stays bold until the outermost
/// close. Empty spans are dropped; adjacent spans of the same weight merge.
pub fn parse_inline(text: &str) -> Result<Vec<Span>, MarkupError> {
    let mut spans: Vec<Span> = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if starts_with_tag(rest, OPEN_TAG) {
            flush(&mut spans, &mut current, depth > 0);
            depth += 1;
            i += OPEN_TAG.len();
        } else if starts_with_tag(rest, CLOSE_TAG) {
            if depth == 0 {
                return Err(MarkupError::UnexpectedClose { offset: i });
            }
            flush(&mut spans, &mut current, true);
            depth -= 1;
            i += CLOSE_TAG.len();
        } else {
            // `rest` is non-empty and starts on a char boundary.
            let c = rest.chars().next().unwrap_or_default();
            current.push(c);
            i += c.len_utf8();
        }
    }

    if depth > 0 {
        return Err(MarkupError::Unclosed { depth });
    }
    flush(&mut spans, &mut current, false);

    Ok(spans)
}

fn starts_with_tag(rest: &str, tag: &str) -> bool {
    rest.get(..tag.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(tag))
}

fn flush(spans: &mut Vec<Span>, current: &mut String, bold: bool) {
    if current.is_empty() {
        return;
    }
    let text = std::mem::take(current);
    match spans.last_mut() {
        Some(last) if last.bold == bold => last.text.push_str(&text),
        _ => spans.push(Span { text, bold }),
    }
}
