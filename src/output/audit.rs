//! Audit log of skipped and scraped URLs
//!
//! Each record is appended to its log file as soon as it is made and also
//! kept in memory for the end-of-run summary.

use crate::content::Rejection;
use crate::output::dataset::remove_if_exists;
use crate::HarvestError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A skipped URL or rejected piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    pub url: Option<String>,
    pub snippet: Option<String>,
    pub reason: String,
}

/// A page that contributed text to the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRecord {
    pub url: String,
    pub description: String,
}

/// Append-only skip and scrape logs
#[derive(Debug)]
pub struct AuditLog {
    skipped_path: PathBuf,
    scraped_path: PathBuf,
    skipped: Vec<SkipRecord>,
    scraped: Vec<ScrapeRecord>,
}

impl AuditLog {
    pub fn new(skipped_path: impl Into<PathBuf>, scraped_path: impl Into<PathBuf>) -> Self {
        Self {
            skipped_path: skipped_path.into(),
            scraped_path: scraped_path.into(),
            skipped: Vec::new(),
            scraped: Vec::new(),
        }
    }

    /// Records a skip event
    ///
    /// Writes `Skipped URL: <url> | Reason: <reason>` when a URL is given and
    /// `Skipped Text: <snippet>... | Reason: <reason>` when a snippet is given.
    pub fn log_skip(
        &mut self,
        reason: &str,
        url: Option<&str>,
        snippet: Option<&str>,
    ) -> Result<(), HarvestError> {
        let snippet: Option<String> = snippet.map(|s| s.chars().take(100).collect());

        let mut lines = String::new();
        if let Some(url) = url {
            lines.push_str(&format!("Skipped URL: {} | Reason: {}\n", url, reason));
        }
        if let Some(snippet) = &snippet {
            lines.push_str(&format!("Skipped Text: {}... | Reason: {}\n", snippet, reason));
        }
        append(&self.skipped_path, &lines)?;

        tracing::debug!("Skipped ({}): {}", reason, url.unwrap_or("<text>"));
        self.skipped.push(SkipRecord {
            url: url.map(str::to_string),
            snippet,
            reason: reason.to_string(),
        });
        Ok(())
    }

    /// Records a content rejection
    pub fn log_rejection(&mut self, rejection: &Rejection) -> Result<(), HarvestError> {
        self.log_skip(
            &rejection.reason,
            rejection.url.as_deref(),
            rejection.snippet.as_deref(),
        )
    }

    /// Records a page that contributed paragraphs
    pub fn log_scrape(&mut self, url: &str, description: &str) -> Result<(), HarvestError> {
        append(
            &self.scraped_path,
            &format!("URL: {} | Description: {}\n", url, description),
        )?;
        self.scraped.push(ScrapeRecord {
            url: url.to_string(),
            description: description.to_string(),
        });
        Ok(())
    }

    pub fn skipped(&self) -> &[SkipRecord] {
        &self.skipped
    }

    pub fn scraped(&self) -> &[ScrapeRecord] {
        &self.scraped
    }

    /// Skip records tied to a URL
    pub fn skipped_urls(&self) -> impl Iterator<Item = &SkipRecord> {
        self.skipped.iter().filter(|r| r.url.is_some())
    }

    /// Skip records tied to rejected text
    pub fn skipped_texts(&self) -> impl Iterator<Item = &SkipRecord> {
        self.skipped.iter().filter(|r| r.snippet.is_some())
    }

    /// Truncates both log files and forgets all records
    pub fn reset(&mut self) -> Result<(), HarvestError> {
        remove_if_exists(&self.skipped_path)?;
        remove_if_exists(&self.scraped_path)?;
        self.skipped.clear();
        self.scraped.clear();
        Ok(())
    }
}

fn append(path: &Path, lines: &str) -> Result<(), HarvestError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(lines.as_bytes()))
        .map_err(|source| HarvestError::Output {
            path: path.display().to_string(),
            source,
        })
}
