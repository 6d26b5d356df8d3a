use std::sync::LazyLock;

use regex::Regex;

static BOLD_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(?:\*\*|__)(.+?)(?:\*\*|__)\s*$").unwrap());

/// Bold-only-line knowledge (MD036: emphasis used instead of a heading).
pub struct BoldLine;

impl BoldLine {
    /// Matches a body whose entire content is a single bold span, returning
    /// the leading indentation and the inner text.
    pub fn parse(body: &str) -> Option<(&str, &str)> {
        let caps = BOLD_ONLY.captures(body)?;
        Some((
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ))
    }
}
