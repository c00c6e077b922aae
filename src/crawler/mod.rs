//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML link extraction and domain filtering
//! - The depth-first frontier
//! - Overall harvest coordination

mod coordinator;
mod fetcher;
pub mod frontier;
mod parser;

pub use coordinator::{harvest, Crawler, PageReport, Skip, Visit};
pub use fetcher::{build_http_client, fetch_page, FetchError, FetchedPage};
pub use frontier::{Frontier, QueuedUrl};
pub use parser::{discover_links, extract_links};
