//! Text normalization and boilerplate filtering
//!
//! Everything here is a pure function over text so the rules can be tested
//! independently of the crawl.

use crate::content::{Rejection, REASON_SHORT_OR_BLOCKED};
use once_cell::sync::Lazy;
use regex::Regex;

/// Texts with this many words or fewer are rejected
pub const MIN_WORDS_EXCLUSIVE: usize = 10;

/// Copyright notices: the word itself, the symbol, or "(c)"
static COPYRIGHT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\bcopyright\b|©|\(c\))").expect("copyright pattern is a valid regex")
});

/// Blog, news and article style content
static BLOCKLIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\bblog\b|\bnews\b|\barticle\b|\bpress release\b|\bpublication\b|\bposted by\b|\bread more\b)",
    )
    .expect("blocklist pattern is a valid regex")
});

/// Navigational and legal phrases, matched as lowercase substrings
const GENERIC_PHRASES: &[&str] = &[
    "home",
    "contact us",
    "site map",
    "privacy policy",
    "read more",
    "posted by",
    "subscribe",
    "newsletter",
];

/// Returns true if the text carries a copyright notice
pub fn is_copyrighted(text: &str) -> bool {
    COPYRIGHT_PATTERN.is_match(text)
}

/// Returns true if the text (or URL) matches the blog/news/article blocklist
pub fn is_blocklisted(text: &str) -> bool {
    BLOCKLIST_PATTERN.is_match(text)
}

/// Returns true if the text contains any generic navigational phrase
pub fn is_boilerplate(text: &str) -> bool {
    let lower = text.to_lowercase();
    GENERIC_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Counts whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Collapses every whitespace run (including line breaks) to a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans a single paragraph
///
/// Whitespace is collapsed and the result is rejected when it has
/// [`MIN_WORDS_EXCLUSIVE`] words or fewer, contains a generic phrase, or
/// matches the blocklist.
///
/// # Example
///
/// ```
/// use sumi_harvest::content::filter::clean;
///
/// let text = "The federal budget allocates  funds\nfor provincial education and health programs.";
/// assert_eq!(
///     clean(text).unwrap(),
///     "The federal budget allocates funds for provincial education and health programs."
/// );
/// assert!(clean("Too short to keep").is_err());
/// ```
pub fn clean(text: &str) -> Result<String, Rejection> {
    let cleaned = collapse_whitespace(text);
    check(&cleaned)?;
    Ok(cleaned)
}

/// Cleans a whole document, keeping one paragraph per line
///
/// Whitespace is collapsed inside each line, blank lines are dropped, and
/// the same rejection rules as [`clean`] apply to the document as a whole.
pub fn clean_document(text: &str) -> Result<String, Rejection> {
    let cleaned = text
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    check(&cleaned)?;
    Ok(cleaned)
}

fn check(text: &str) -> Result<(), Rejection> {
    if word_count(text) <= MIN_WORDS_EXCLUSIVE || is_boilerplate(text) || is_blocklisted(text) {
        return Err(Rejection::text(REASON_SHORT_OR_BLOCKED, text));
    }
    Ok(())
}
