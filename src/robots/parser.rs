//! Robots.txt parser implementation
//!
//! Only `Disallow` lines are honoured, for every user agent. `Allow`,
//! `User-agent` grouping and `Crawl-delay` are ignored.

/// Disallow rules for one host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsRuleset {
    /// Path prefixes that may not be fetched
    disallowed_prefixes: Vec<String>,
}

impl RobotsRuleset {
    /// Parses raw robots.txt content
    ///
    /// Directive names are matched case-insensitively. A `Disallow:` line
    /// with an empty value disallows nothing and is skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_harvest::robots::RobotsRuleset;
    ///
    /// let robots = RobotsRuleset::parse("User-agent: *\nDisallow: /private\n");
    /// assert!(!robots.is_allowed("/private/report.pdf"));
    /// assert!(robots.is_allowed("/public/report.pdf"));
    /// ```
    pub fn parse(content: &str) -> Self {
        let mut disallowed_prefixes = Vec::new();

        for line in content.lines() {
            let line = match line.split_once('#') {
                Some((before, _)) => before,
                None => line,
            }
            .trim();

            if let Some((key, value)) = line.split_once(':') {
                if key.trim().eq_ignore_ascii_case("disallow") {
                    let path = value.trim();
                    if !path.is_empty() {
                        disallowed_prefixes.push(path.to_string());
                    }
                }
            }
        }

        Self {
            disallowed_prefixes,
        }
    }

    /// Creates a permissive ruleset that allows everything
    ///
    /// This is used when robots.txt cannot be fetched.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Returns the disallowed path prefixes
    pub fn disallowed_prefixes(&self) -> &[String] {
        &self.disallowed_prefixes
    }

    /// Checks if a request path (path plus optional `?query`) is allowed
    pub fn is_allowed(&self, path: &str) -> bool {
        !self
            .disallowed_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}
