//! Text Extractor — plain text from uploaded PDF documents.
//!
//! Extraction never fails the request: unreadable documents, extraction
//! errors and library panics all degrade to an empty string (logged at warn).
//! Callers receive whatever text could be recovered.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("PDF extraction panicked (malformed document)")]
    Panicked,
}

/// Extracts text from every page, trimmed, with empty pages dropped and the
/// rest joined by a newline. Returns `""` when nothing is recoverable.
pub fn extract_text(document: &[u8]) -> String {
    match extract_pages(document) {
        Ok(pages) => {
            let text = join_pages(&pages);
            debug!(
                "Extracted {} chars from {} page(s)",
                text.len(),
                pages.len()
            );
            text
        }
        Err(e) => {
            warn!("Degrading to empty text: {e}");
            String::new()
        }
    }
}

/// Runs `pdf_extract` per page. Some inputs make the library panic rather than
/// return an error, so the call is isolated behind `catch_unwind`.
fn extract_pages(document: &[u8]) -> Result<Vec<String>, ExtractionError> {
    if document.is_empty() {
        return Err(ExtractionError::Pdf("empty document".to_string()));
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(document)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => Err(ExtractionError::Panicked),
    }
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_degrades_to_empty_string() {
        assert_eq!(extract_text(&[]), "");
    }

    #[test]
    fn test_garbage_bytes_degrade_to_empty_string() {
        assert_eq!(extract_text(b"this is not a pdf at all"), "");
    }

    #[test]
    fn test_empty_document_is_an_extraction_error() {
        assert!(matches!(extract_pages(&[]), Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn test_join_pages_drops_blank_pages_and_trims() {
        let pages = vec![
            "  Page one text \n".to_string(),
            "   \n".to_string(),
            "Page three".to_string(),
        ];
        assert_eq!(join_pages(&pages), "Page one text\nPage three");
    }

    #[test]
    fn test_join_pages_all_blank_is_empty() {
        let pages = vec![String::new(), "\n\n".to_string()];
        assert_eq!(join_pages(&pages), "");
    }
}
