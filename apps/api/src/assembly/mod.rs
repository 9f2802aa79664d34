//! Document assembler — emphasized draft text in, PDF bytes out.
//!
//! Pipeline: `letter::compose_letter` (header / body / closing blocks) →
//! `layout::layout_blocks` (wrap, justify, paginate) → `pdf::render_pdf`.
//!
//! ARCHITECTURAL RULE: this module never calls the LLM and never re-applies
//! emphasis. Callers pass text that has already been through
//! `emphasis::apply_emphasis`.

pub mod encoding;
pub mod font_metrics;
pub mod layout;
pub mod letter;
pub mod markup;
pub mod pdf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::models::candidate::CandidateProfile;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unbalanced bold markup in paragraph {paragraph}: {source}")]
    UnbalancedMarkup {
        paragraph: usize,
        #[source]
        source: markup::MarkupError,
    },

    #[error("PDF serialization failed: {0}")]
    Pdf(String),
}

/// Builds the complete cover letter PDF dated `date`.
pub fn build_document(
    emphasized_text: &str,
    profile: &CandidateProfile,
    date: NaiveDate,
) -> Result<Vec<u8>, RenderError> {
    let blocks = letter::compose_letter(emphasized_text, profile, date)?;
    let config = font_metrics::letter_page_config();
    let pages = layout::layout_blocks(&blocks, &config);

    debug!(
        blocks = blocks.len(),
        pages = pages.len(),
        "Cover letter laid out"
    );

    let title = format!("{} Cover Letter", profile.name.trim());
    pdf::render_pdf(&pages, &config, &title)
}

/// [`build_document`] dated with the server's local date.
pub fn build_document_today(
    emphasized_text: &str,
    profile: &CandidateProfile,
) -> Result<Vec<u8>, RenderError> {
    build_document(emphasized_text, profile, chrono::Local::now().date_naive())
}
