//! Output module for the harvested corpus and its records
//!
//! This module handles:
//! - Accumulating accepted paragraphs and saving the dataset file
//! - Appending skip and scrape records to their logs
//! - Writing the markdown run summary

pub mod audit;
pub mod dataset;
pub mod summary;

pub use audit::{AuditLog, ScrapeRecord, SkipRecord};
pub use dataset::{crossed_interval, Dataset};
pub use summary::{count_skips, format_markdown_summary, write_summary, RunSummary};
