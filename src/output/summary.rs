//! Run summary generation
//!
//! Builds a markdown report of a finished harvest from the in-memory audit
//! records and the crawler's counters.

use crate::output::audit::AuditLog;
use crate::HarvestError;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Outcome of one harvest run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// SHA-256 of the configuration file, when loaded from disk
    pub config_hash: Option<String>,

    pub seeds: Vec<String>,
    pub target_words: u64,
    pub word_count: u64,
    pub paragraphs: usize,

    /// URLs taken from the frontier that passed the depth and visited checks
    pub pages_visited: u64,
    /// Successful HTTP responses
    pub pages_fetched: u64,
    /// Pages that contributed at least one paragraph
    pub pages_scraped: usize,

    /// Skip records grouped by reason
    pub skip_counts: BTreeMap<String, u64>,
}

impl RunSummary {
    /// Run duration in whole seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Whether the word target was met
    pub fn target_reached(&self) -> bool {
        self.word_count >= self.target_words
    }

    pub fn total_skips(&self) -> u64 {
        self.skip_counts.values().sum()
    }
}

/// Counts skip records per reason
///
/// Reasons carrying a detail after a colon (`Request error: ...`,
/// `PDF extraction failed: ...`) are grouped under the part before it.
pub fn count_skips(audit: &AuditLog) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in audit.skipped() {
        let key = record
            .reason
            .split_once(':')
            .map(|(head, _)| head)
            .unwrap_or(&record.reason)
            .trim()
            .to_string();
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Writes the markdown summary to `output_path`
pub fn write_summary(summary: &RunSummary, output_path: &Path) -> Result<(), HarvestError> {
    fs::write(output_path, format_markdown_summary(summary)).map_err(|source| {
        HarvestError::Output {
            path: output_path.display().to_string(),
            source,
        }
    })
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &RunSummary) -> String {
    let mut md = String::new();

    md.push_str("# Sumi-Harvest Run Summary\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    let duration = summary.duration_seconds();
    md.push_str(&format!(
        "- **Duration**: {} seconds ({:.2} minutes)\n",
        duration,
        duration as f64 / 60.0
    ));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    md.push_str("## Corpus\n\n");
    md.push_str(&format!(
        "- **Words**: {} / {} ({})\n",
        summary.word_count,
        summary.target_words,
        if summary.target_reached() {
            "target reached"
        } else {
            "target not reached"
        }
    ));
    md.push_str(&format!("- **Paragraphs**: {}\n\n", summary.paragraphs));

    md.push_str("## Pages\n\n");
    md.push_str("| Stage | Count |\n");
    md.push_str("|-------|-------|\n");
    md.push_str(&format!("| Visited | {} |\n", summary.pages_visited));
    md.push_str(&format!("| Fetched | {} |\n", summary.pages_fetched));
    md.push_str(&format!("| Scraped | {} |\n\n", summary.pages_scraped));

    md.push_str(&format!("## Seeds ({})\n\n", summary.seeds.len()));
    for seed in &summary.seeds {
        md.push_str(&format!("- {}\n", seed));
    }
    md.push('\n');

    if !summary.skip_counts.is_empty() {
        md.push_str(&format!("## Skips ({})\n\n", summary.total_skips()));
        md.push_str("| Reason | Count |\n");
        md.push_str("|--------|-------|\n");

        let mut reasons: Vec<_> = summary.skip_counts.iter().collect();
        reasons.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (reason, count) in reasons {
            md.push_str(&format!("| {} | {} |\n", reason, count));
        }
        md.push('\n');
    }

    md
}
