//! Page-level duplicate detection
//!
//! Fingerprints are SHA-256 digests of the exact cleaned page text, so two
//! pages are duplicates only when their cleaned text is byte-identical.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// A content fingerprint
pub type Fingerprint = [u8; 32];

/// Computes the fingerprint of a cleaned text
pub fn fingerprint(text: &str) -> Fingerprint {
    Sha256::digest(text.as_bytes()).into()
}

/// Set of fingerprints of every page accepted so far
#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashSet<Fingerprint>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the text and returns true if it has not been seen before
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_harvest::content::DedupIndex;
    ///
    /// let mut index = DedupIndex::new();
    /// assert!(index.admit("Quarterly revenue report"));
    /// assert!(!index.admit("Quarterly revenue report"));
    /// ```
    pub fn admit(&mut self, text: &str) -> bool {
        self.seen.insert(fingerprint(text))
    }

    /// Number of distinct pages admitted
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
