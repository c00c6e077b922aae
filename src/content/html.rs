//! HTML text extraction
//!
//! Collects the visible text of a document, one line per block element, and
//! leaves out navigation and other page chrome.

use scraper::{ElementRef, Html, Node};

/// Elements whose whole subtree is dropped before extraction
const SKIPPED_ELEMENTS: &[&str] = &[
    "nav", "footer", "script", "style", "header", "noscript", "template",
];

/// Elements that start and end a line of text
const BLOCK_ELEMENTS: &[&str] = &[
    "html", "head", "title", "body", "main", "section", "article", "aside", "div", "p",
    "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "dl", "dt", "dd", "table",
    "thead", "tbody", "tfoot", "tr", "td", "th", "caption", "blockquote", "pre", "figure",
    "figcaption", "address", "form", "fieldset", "details", "summary", "br", "hr",
];

/// Extracts text from an HTML document
///
/// Text nodes inside the same block are joined with single spaces; separate
/// blocks end up on separate lines.
///
/// # Example
///
/// ```
/// use sumi_harvest::content::html::extract_text;
///
/// let html = r#"<html><body>
///     <nav>Menu</nav>
///     <p>First <b>paragraph</b></p>
///     <p>Second paragraph</p>
///     <footer>Footer links</footer>
/// </body></html>"#;
/// assert_eq!(extract_text(html), "First paragraph\nSecond paragraph");
/// ```
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();
    let mut current = Vec::new();

    collect_text(document.root_element(), &mut lines, &mut current);
    finish_line(&mut lines, &mut current);

    lines.join("\n")
}

fn collect_text(element: ElementRef<'_>, lines: &mut Vec<String>, current: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    current.push(text.to_string());
                }
            }
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }

                let is_block = BLOCK_ELEMENTS.contains(&name);
                if is_block {
                    finish_line(lines, current);
                }

                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, lines, current);
                }

                if is_block {
                    finish_line(lines, current);
                }
            }
            _ => {}
        }
    }
}

fn finish_line(lines: &mut Vec<String>, current: &mut Vec<String>) {
    if !current.is_empty() {
        lines.push(current.join(" "));
        current.clear();
    }
}
