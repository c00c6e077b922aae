//! Crawl frontier
//!
//! A LIFO work-list of `(url, depth)` entries. Children of a page are pushed
//! in reverse so they are popped in discovery order, which reproduces a
//! depth-first recursive traversal without growing the call stack.

use url::Url;

/// A URL waiting to be visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedUrl {
    /// The URL to fetch
    pub url: Url,

    /// Link distance from the seed
    pub depth: u32,
}

/// Depth-first work-list
#[derive(Debug, Default)]
pub struct Frontier {
    stack: Vec<QueuedUrl>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a single entry; it is popped next
    pub fn push(&mut self, url: Url, depth: u32) {
        self.stack.push(QueuedUrl { url, depth });
    }

    /// Pushes the links of a page so that the first link is popped first
    pub fn push_children(&mut self, links: Vec<Url>, depth: u32) {
        self.stack
            .extend(links.into_iter().rev().map(|url| QueuedUrl { url, depth }));
    }

    pub fn pop(&mut self) -> Option<QueuedUrl> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
