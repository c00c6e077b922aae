//! Corpus accumulation and persistence
//!
//! Accepted paragraphs are held in memory and the dataset file is rewritten
//! in full on every flush, so the file on disk is always a complete snapshot.

use crate::content::filter::word_count;
use crate::HarvestError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// In-memory corpus with its backing file
#[derive(Debug)]
pub struct Dataset {
    path: PathBuf,
    paragraphs: Vec<String>,
    word_count: u64,
}

impl Dataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            paragraphs: Vec::new(),
            word_count: 0,
        }
    }

    /// Appends a paragraph and returns its word count
    pub fn push(&mut self, paragraph: String) -> u64 {
        let words = word_count(&paragraph) as u64;
        self.paragraphs.push(paragraph);
        self.word_count += words;
        words
    }

    /// Total words across all accepted paragraphs
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Writes every paragraph to the dataset file, one per line
    pub fn flush(&self) -> Result<(), HarvestError> {
        self.write_all().map_err(|source| HarvestError::Output {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::info!(
            "Saved dataset to {} with {} words.",
            self.path.display(),
            self.word_count
        );
        Ok(())
    }

    fn write_all(&self) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for paragraph in &self.paragraphs {
            writeln!(writer, "{}", paragraph)?;
        }
        writer.flush()
    }

    /// Removes a dataset file left over from a previous run
    pub fn remove_file(&self) -> Result<(), HarvestError> {
        remove_if_exists(&self.path)
    }
}

/// Returns true if growing from `before` to `after` words crosses a multiple
/// of `interval`
///
/// # Example
///
/// ```
/// use sumi_harvest::output::crossed_interval;
///
/// assert!(crossed_interval(99_990, 100_020, 100_000));
/// assert!(!crossed_interval(100_020, 150_000, 100_000));
/// ```
pub fn crossed_interval(before: u64, after: u64, interval: u64) -> bool {
    interval > 0 && after / interval > before / interval
}

pub(crate) fn remove_if_exists(path: &Path) -> Result<(), HarvestError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(HarvestError::Output {
            path: path.display().to_string(),
            source,
        }),
    }
}
