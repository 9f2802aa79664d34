//! Letter composition — turns emphasized text and the candidate profile into
//! the fixed block structure: one header, one body block per paragraph, one
//! closing.

use chrono::NaiveDate;
use crate::assembly::markup::{parse_inline, Span};
use crate::assembly::RenderError;
use crate::emphasis::split_paragraphs;
use crate::models::candidate::CandidateProfile;

pub const SALUTATION: &str = "Dear Hiring Manager,";
pub const VALEDICTION: &str = "Sincerely,";

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    /// Every line but the last stretched to the full text width.
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size_pt: f32,
    pub leading_pt: f32,
    pub alignment: Alignment,
    pub space_after_pt: f32,
}

/// Body paragraphs: Times 11.4/14.8, justified, 10pt after.
pub const BODY_STYLE: ParagraphStyle = ParagraphStyle {
    font_size_pt: 11.4,
    leading_pt: 14.8,
    alignment: Alignment::Justify,
    space_after_pt: 10.0,
};

/// Header and closing: same face and size, ragged right, no extra space.
pub const HEADER_STYLE: ParagraphStyle = ParagraphStyle {
    font_size_pt: 11.4,
    leading_pt: 14.8,
    alignment: Alignment::Left,
    space_after_pt: 0.0,
};

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Body,
    Closing,
}

/// A block of hard lines. Each hard line may still wrap when laid out; an
/// empty hard line renders as a blank line.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterBlock {
    pub kind: BlockKind,
    pub style: ParagraphStyle,
    pub lines: Vec<Vec<Span>>,
}

/// "04 March 2025".
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Builds header, body and closing blocks. Fails if any paragraph carries
/// unbalanced `<b>` markup; profile fields are plain text.
pub fn compose_letter(
    emphasized_text: &str,
    profile: &CandidateProfile,
    date: NaiveDate,
) -> Result<Vec<LetterBlock>, RenderError> {
    let mut blocks = vec![header_block(profile, date)];

    for (index, paragraph) in split_paragraphs(emphasized_text).into_iter().enumerate() {
        let spans = parse_inline(paragraph).map_err(|source| RenderError::UnbalancedMarkup {
            paragraph: index + 1,
            source,
        })?;
        blocks.push(LetterBlock {
            kind: BlockKind::Body,
            style: BODY_STYLE,
            lines: vec![spans],
        });
    }

    blocks.push(closing_block(profile));
    Ok(blocks)
}

fn header_block(profile: &CandidateProfile, date: NaiveDate) -> LetterBlock {
    LetterBlock {
        kind: BlockKind::Header,
        style: HEADER_STYLE,
        lines: vec![
            vec![Span::bold(profile.name.to_uppercase())],
            vec![Span::regular(format!("Date: {}", format_letter_date(date)))],
            Vec::new(),
            vec![Span::regular(SALUTATION)],
            Vec::new(),
        ],
    }
}

/// Contact lines are always present, in fixed order, even when empty.
fn closing_block(profile: &CandidateProfile) -> LetterBlock {
    let line = |text: &str| -> Vec<Span> {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![Span::regular(text)]
        }
    };

    LetterBlock {
        kind: BlockKind::Closing,
        style: HEADER_STYLE,
        lines: vec![
            line(VALEDICTION),
            Vec::new(),
            line(&profile.name),
            line(&profile.mobile),
            line(&profile.email),
            line(&profile.linkedin),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    fn full_profile() -> CandidateProfile {
        CandidateProfile {
            name: "Asha Rao".to_string(),
            company: "Acme Corp".to_string(),
            role: "Finance Manager".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "+91 98765 43210".to_string(),
            linkedin: "https://linkedin.com/in/asharao".to_string(),
        }
    }

    fn plain(line: &[Span]) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_date_format_is_day_month_year() {
        assert_eq!(format_letter_date(date()), "04 March 2025");
    }

    #[test]
    fn test_five_paragraphs_yield_header_five_bodies_closing() {
        let text = "One.\n\nTwo.\n\nThree.\n\nFour.\n\nFive.";
        let blocks = compose_letter(text, &full_profile(), date()).unwrap();
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Header,
                BlockKind::Body,
                BlockKind::Body,
                BlockKind::Body,
                BlockKind::Body,
                BlockKind::Body,
                BlockKind::Closing,
            ]
        );
        assert_eq!(plain(&blocks[3].lines[0]), "Three.");
        assert!(blocks[1..6].iter().all(|b| b.style == BODY_STYLE));
    }

    #[test]
    fn test_header_lines() {
        let blocks = compose_letter("Body.", &full_profile(), date()).unwrap();
        let header = &blocks[0];
        assert_eq!(header.lines.len(), 5);
        assert_eq!(header.lines[0], vec![Span::bold("ASHA RAO")]);
        assert_eq!(plain(&header.lines[1]), "Date: 04 March 2025");
        assert!(header.lines[2].is_empty());
        assert_eq!(plain(&header.lines[3]), SALUTATION);
        assert!(header.lines[4].is_empty());
        assert_eq!(header.style.alignment, Alignment::Left);
    }

    #[test]
    fn test_closing_keeps_four_contact_lines_when_optional_fields_empty() {
        let profile = CandidateProfile {
            email: String::new(),
            mobile: String::new(),
            linkedin: String::new(),
            ..full_profile()
        };
        let blocks = compose_letter("Body.", &profile, date()).unwrap();
        let closing = blocks.last().unwrap();
        assert_eq!(closing.kind, BlockKind::Closing);
        assert_eq!(closing.lines.len(), 6);
        assert_eq!(plain(&closing.lines[0]), VALEDICTION);
        assert!(closing.lines[1].is_empty());
        assert_eq!(plain(&closing.lines[2]), "Asha Rao");
        assert!(closing.lines[3..].iter().all(Vec::is_empty));
    }

    #[test]
    fn test_closing_order_is_name_mobile_email_linkedin() {
        let blocks = compose_letter("Body.", &full_profile(), date()).unwrap();
        let closing: Vec<String> = blocks.last().unwrap().lines.iter().map(|l| plain(l)).collect();
        assert_eq!(
            closing[2..],
            [
                "Asha Rao".to_string(),
                "+91 98765 43210".to_string(),
                "asha@example.com".to_string(),
                "https://linkedin.com/in/asharao".to_string(),
            ]
        );
    }

    #[test]
    fn test_body_bold_markup_becomes_bold_spans() {
        let blocks =
            compose_letter("At <b>Acme Corp</b> we grow.", &full_profile(), date()).unwrap();
        assert_eq!(
            blocks[1].lines[0],
            vec![
                Span::regular("At "),
                Span::bold("Acme Corp"),
                Span::regular(" we grow."),
            ]
        );
    }

    #[test]
    fn test_unbalanced_markup_names_paragraph() {
        let err = compose_letter("Fine.\n\nBroken <b>tag.", &full_profile(), date()).unwrap_err();
        assert!(matches!(err, RenderError::UnbalancedMarkup { paragraph: 2, .. }));
    }

    #[test]
    fn test_profile_fields_are_not_parsed_as_markup() {
        let profile = CandidateProfile {
            name: "A <b> B".to_string(),
            ..full_profile()
        };
        let blocks = compose_letter("Body.", &profile, date()).unwrap();
        assert_eq!(blocks[0].lines[0], vec![Span::bold("A <B> B")]);
    }
}
