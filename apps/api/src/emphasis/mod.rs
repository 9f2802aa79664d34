//! Emphasis Engine — deterministic bold markup over generated prose.
//!
//! Rules, applied per paragraph (paragraphs are separated by a blank line):
//! 1. The company name is bolded once in the whole document, at its first
//!    case-insensitive occurrence in paragraph order.
//! 2. Every catalog keyword present in the paragraph is collected in catalog
//!    order; the first `MAX_KEYWORDS_PER_PARAGRAPH` of them have every
//!    occurrence in that paragraph bolded.
//!
//! Matching is literal (escaped) and case-insensitive; the matched span keeps its
//! original casing. Existing `<b>`/`</b>` markers (any ASCII case) are stripped
//! first, so emphasis is always recomputed from the plain text and re-running
//! the pass over edited text never carries earlier marks forward.

pub mod catalog;

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use tracing::warn;

pub use catalog::KeywordCatalog;

/// Separator between paragraphs in draft text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";
/// Upper bound on distinct keywords bolded within one paragraph.
pub const MAX_KEYWORDS_PER_PARAGRAPH: usize = 3;

pub const BOLD_OPEN: &str = "<b>";
pub const BOLD_CLOSE: &str = "</b>";

/// Splits draft text into paragraphs. `join_paragraphs(&split_paragraphs(t)) == t`.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR).collect()
}

pub fn join_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    paragraphs
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// Applies company and keyword emphasis to `text`. Never fails; text without
/// matches comes back unchanged.
pub fn apply_emphasis(text: &str, company_name: &str, catalog: &KeywordCatalog) -> String {
    let company = company_name.trim();
    let company_matcher = if company.is_empty() {
        None
    } else {
        literal_matcher(company)
    };
    let keyword_matchers: Vec<Regex> = catalog.keywords().filter_map(literal_matcher).collect();

    let plain = strip_bold_markers(text);
    let (paragraphs, _) = split_paragraphs(&plain).into_iter().fold(
        (Vec::new(), false),
        |(mut out, company_marked), paragraph| {
            let (emphasized, company_marked) = emphasize_paragraph(
                paragraph,
                company_matcher.as_ref(),
                &keyword_matchers,
                company_marked,
            );
            out.push(emphasized);
            (out, company_marked)
        },
    );

    join_paragraphs(&paragraphs)
}

/// Emphasizes a single paragraph. Returns the new text and the updated
/// company-marked flag.
fn emphasize_paragraph(
    paragraph: &str,
    company: Option<&Regex>,
    keywords: &[Regex],
    company_marked: bool,
) -> (String, bool) {
    let mut text = paragraph.to_string();
    let mut company_marked = company_marked;

    if !company_marked {
        if let Some(first) = company.and_then(|m| m.find(&text)) {
            text = wrap_ranges(&text, std::slice::from_ref(&first.range()));
            company_marked = true;
        }
    }

    // Selection is by catalog order; duplicates across groups use up the cap.
    // Spans bolded earlier in this pass are not wrapped again.
    let selected: Vec<&Regex> = keywords
        .iter()
        .filter(|kw| kw.is_match(&text))
        .take(MAX_KEYWORDS_PER_PARAGRAPH)
        .collect();

    for keyword in selected {
        let protected = bold_spans(&text);
        let ranges: Vec<Range<usize>> = keyword
            .find_iter(&text)
            .map(|m| m.range())
            .filter(|r| !overlaps_any(&protected, r))
            .collect();
        if !ranges.is_empty() {
            text = wrap_ranges(&text, &ranges);
        }
    }

    (text, company_marked)
}

/// Case-insensitive matcher for a literal phrase.
fn literal_matcher(phrase: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping unmatchable emphasis phrase {phrase:?}: {e}");
            None
        }
    }
}

/// Removes every `<b>` and `</b>` marker, matching tag names in any ASCII case
/// the same way the renderer does.
fn strip_bold_markers(text: &str) -> String {
    // ASCII lowercasing keeps byte offsets identical to `text`.
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        if lower[i..].starts_with(BOLD_OPEN) {
            i += BOLD_OPEN.len();
        } else if lower[i..].starts_with(BOLD_CLOSE) {
            i += BOLD_CLOSE.len();
        } else if let Some(c) = text[i..].chars().next() {
            out.push(c);
            i += c.len_utf8();
        } else {
            break;
        }
    }

    out
}

/// Byte ranges covered by `<b>…</b>` spans, tags included, tag names in any
/// ASCII case. An unclosed `<b>` protects the rest of the paragraph.
fn bold_spans(text: &str) -> Vec<Range<usize>> {
    let lower = text.to_ascii_lowercase();
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(open) = lower[cursor..].find(BOLD_OPEN) {
        let start = cursor + open;
        let body = start + BOLD_OPEN.len();
        let end = lower[body..]
            .find(BOLD_CLOSE)
            .map(|close| body + close + BOLD_CLOSE.len())
            .unwrap_or(text.len());
        spans.push(start..end);
        cursor = end;
    }

    spans
}

fn overlaps_any(spans: &[Range<usize>], range: &Range<usize>) -> bool {
    spans
        .iter()
        .any(|span| range.start < span.end && span.start < range.end)
}

/// Wraps each (sorted, non-overlapping) range in bold markers.
fn wrap_ranges(text: &str, ranges: &[Range<usize>]) -> String {
    let extra = ranges.len() * (BOLD_OPEN.len() + BOLD_CLOSE.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut last = 0;

    for range in ranges {
        out.push_str(&text[last..range.start]);
        out.push_str(BOLD_OPEN);
        out.push_str(&text[range.clone()]);
        out.push_str(BOLD_CLOSE);
        last = range.end;
    }
    out.push_str(&text[last..]);

    out
}
