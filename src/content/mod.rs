//! Content extraction and filtering
//!
//! This module turns a fetched page into cleaned corpus text:
//! - Content-type dispatch between HTML and PDF extraction
//! - URL and text blocklists, copyright detection
//! - Whitespace normalization and boilerplate rejection
//! - Page-level duplicate detection

pub mod dedup;
pub mod filter;
pub mod html;
pub mod pdf;

pub use dedup::{fingerprint, DedupIndex, Fingerprint};
pub use pdf::{PdfExtractSource, PdfTextSource};

use crate::crawler::FetchedPage;

pub const REASON_URL_BLOCKED: &str = "URL contains blog/news/article";
pub const REASON_PDF_URL_BLOCKED: &str = "PDF URL contains blog/news/article";
pub const REASON_COPYRIGHT_OR_BLOCKED: &str = "Copyrighted or blog/news/article content";
pub const REASON_SHORT_OR_BLOCKED: &str = "Short or blocked content (blog/news/article)";
pub const REASON_DUPLICATE: &str = "Duplicate content (no new text)";

pub const HTML_DESCRIPTION: &str =
    "Government or educational webpage (e.g., policy, service description, or educational material)";
pub const PDF_DESCRIPTION: &str =
    "Government or educational PDF (e.g., policy, report, or manual)";

/// Number of characters of rejected text kept in skip records
const SNIPPET_CHARS: usize = 100;

/// Broad content type of a fetched response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Html,
    Pdf,
    /// Anything else; handled by the HTML path
    Other,
}

impl ContentKind {
    /// Classifies a Content-Type header value
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_harvest::content::ContentKind;
    ///
    /// assert_eq!(ContentKind::from_content_type("application/pdf"), ContentKind::Pdf);
    /// assert_eq!(ContentKind::from_content_type("text/html; charset=utf-8"), ContentKind::Html);
    /// assert_eq!(ContentKind::from_content_type(""), ContentKind::Other);
    /// ```
    pub fn from_content_type(content_type: &str) -> Self {
        let content_type = content_type.to_lowercase();
        if content_type.contains("pdf") {
            Self::Pdf
        } else if content_type.contains("html") {
            Self::Html
        } else {
            Self::Other
        }
    }

    pub fn is_pdf(&self) -> bool {
        matches!(self, Self::Pdf)
    }

    /// Fixed description recorded for pages of this kind
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_DESCRIPTION,
            Self::Html | Self::Other => HTML_DESCRIPTION,
        }
    }
}

/// Why a URL or a piece of text was not added to the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: String,
    pub url: Option<String>,
    /// Leading characters of the rejected text
    pub snippet: Option<String>,
}

impl Rejection {
    /// A rejection tied to a URL
    pub fn url(reason: impl Into<String>, url: &str) -> Self {
        Self {
            reason: reason.into(),
            url: Some(url.to_string()),
            snippet: None,
        }
    }

    /// A rejection tied to a piece of text
    pub fn text(reason: impl Into<String>, text: &str) -> Self {
        Self {
            reason: reason.into(),
            url: None,
            snippet: Some(text.chars().take(SNIPPET_CHARS).collect()),
        }
    }
}

/// Cleaned text of a page, one paragraph per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub description: &'static str,
}

/// Extracts corpus text from a fetched page
///
/// PDFs (any content type containing "pdf") go through the PDF path,
/// everything else through the HTML path.
pub fn extract(page: &FetchedPage, pdf_source: &dyn PdfTextSource) -> Result<ExtractedText, Rejection> {
    let url = page.url.as_str();
    let text = if page.kind.is_pdf() {
        extract_pdf(url, &page.body, pdf_source)?
    } else {
        extract_html(url, page.html().unwrap_or_default())?
    };

    Ok(ExtractedText {
        text,
        description: page.kind.description(),
    })
}

/// Extracts and cleans the text of an HTML page
pub fn extract_html(url: &str, html: &str) -> Result<String, Rejection> {
    if filter::is_blocklisted(&url.to_lowercase()) {
        return Err(Rejection::url(REASON_URL_BLOCKED, url));
    }

    let text = html::extract_text(html);
    if filter::is_copyrighted(&text) || filter::is_blocklisted(&text) {
        return Err(Rejection::text(REASON_COPYRIGHT_OR_BLOCKED, &text));
    }

    filter::clean_document(&text)
}

/// Extracts and cleans the text of a PDF document
///
/// Pages carrying a copyright notice or blocklisted terms are dropped
/// individually; the rest are joined with a space.
pub fn extract_pdf(
    url: &str,
    bytes: &[u8],
    source: &dyn PdfTextSource,
) -> Result<String, Rejection> {
    if filter::is_blocklisted(&url.to_lowercase()) {
        return Err(Rejection::url(REASON_PDF_URL_BLOCKED, url));
    }

    let pages = source.page_texts(bytes).map_err(|e| {
        tracing::error!("Error extracting PDF {}: {}", url, e);
        Rejection::url(format!("PDF extraction failed: {}", e), url)
    })?;

    let page_count = pages.len();
    let kept: Vec<String> = pages
        .iter()
        .filter(|page| {
            !page.trim().is_empty() && !filter::is_copyrighted(page) && !filter::is_blocklisted(page)
        })
        .map(|page| pdf::page_paragraphs(page))
        .collect();

    tracing::debug!("PDF {}: kept {}/{} pages", url, kept.len(), page_count);

    filter::clean_document(&kept.join(" "))
}
