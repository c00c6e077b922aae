//! PDF text extraction
//!
//! Page text comes from a [`PdfTextSource`]; the default source uses
//! pdf-extract.

use crate::ContentError;
use std::panic::{self, AssertUnwindSafe};

/// Something that can split a PDF document into per-page text
pub trait PdfTextSource: Send + Sync {
    /// Returns the extractable text of every page, in order
    ///
    /// Fails with a document-level error when the PDF cannot be read.
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ContentError>;
}

/// PDF source backed by the pdf-extract crate
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractSource;

impl PdfTextSource for PdfExtractSource {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ContentError> {
        // pdf-extract panics on some malformed documents
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ContentError::Pdf(e.to_string())),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                Err(ContentError::PdfPanic(message))
            }
        }
    }
}

/// Rebuilds paragraphs from the hard-wrapped lines of a PDF page
///
/// Consecutive non-empty lines are joined with spaces; blank lines separate
/// paragraphs, which are returned one per line.
pub fn page_paragraphs(page_text: &str) -> String {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in page_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs.join("\n")
}
