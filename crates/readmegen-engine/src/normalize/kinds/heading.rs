use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+").unwrap());

/// ATX heading knowledge.
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: usize = 6;

    /// Punctuation stripped from the end of heading text (MD026), covering
    /// both ASCII and full-width CJK forms.
    pub const TRAILING_PUNCT: &'static [char] = &[
        '：', ':', '。', '．', '，', ',', '；', ';', '！', '？', '!', '?', '、',
    ];

    /// Whether the (blockquote-stripped) body is a heading line.
    pub fn is_heading(body: &str) -> bool {
        HEADING.is_match(body.trim())
    }

    /// Splits a trimmed heading line into its level and the raw text after
    /// the marker. Returns `None` when the line is not a heading.
    pub fn split(s: &str) -> Option<(usize, &str)> {
        let caps = HEADING.captures(s)?;
        let level = caps.get(1).map_or(0, |m| m.as_str().len());
        let text = &s[caps.get(0).map_or(0, |m| m.end())..];
        Some((level, text))
    }

    /// Renders a heading line at the given level.
    pub fn format(level: usize, text: &str) -> String {
        format!("{} {}", "#".repeat(level), text)
    }

    /// Strips trailing punctuation from a heading's text (MD026).
    ///
    /// Non-heading input comes back unchanged.
    pub fn strip_trailing_punct(line: &str) -> String {
        let s = line.trim_end();
        let Some(caps) = HEADING.captures(s) else {
            return line.to_string();
        };
        let marks = caps.get(1).map_or("", |m| m.as_str());
        let rest = s[caps.get(0).map_or(0, |m| m.end())..]
            .trim_end()
            .trim_end_matches(Self::TRAILING_PUNCT);
        format!("{marks} {rest}").trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_levels() {
        assert_eq!(Heading::split("# Title"), Some((1, "Title")));
        assert_eq!(Heading::split("###### Deep"), Some((6, "Deep")));
        assert_eq!(Heading::split("####### too deep"), None);
        assert_eq!(Heading::split("#NoSpace"), None);
        assert_eq!(Heading::split("plain"), None);
    }

    #[test]
    fn strip_ascii_punct() {
        assert_eq!(Heading::strip_trailing_punct("## Overview:"), "## Overview");
        assert_eq!(Heading::strip_trailing_punct("## Why?!"), "## Why");
    }

    #[test]
    fn strip_cjk_punct() {
        assert_eq!(Heading::strip_trailing_punct("## 概述："), "## 概述");
        assert_eq!(Heading::strip_trailing_punct("# 注意。"), "# 注意");
    }

    #[test]
    fn strip_leaves_non_headings_alone() {
        assert_eq!(Heading::strip_trailing_punct("not a heading:"), "not a heading:");
    }

    #[test]
    fn strip_punct_only_text_leaves_bare_marks() {
        assert_eq!(Heading::strip_trailing_punct("# ："), "#");
    }
}
