//! # Markdown normalization
//!
//! Rewrites machine-assembled Markdown into a form that satisfies the
//! markdownlint rules the generated READMEs are checked against:
//!
//! - MD004/MD030: dash markers with exactly one space
//! - MD005/MD007: consistent 2-space list indentation
//! - MD012: collapse multiple blank lines
//! - MD022/MD032: blank lines around headings and list blocks
//! - MD024: no duplicate heading text (auto-suffixed)
//! - MD025: a single H1 (extras demoted)
//! - MD026: no trailing punctuation on headings
//! - MD029: sequential ordered-list numbering
//! - MD034: no bare URLs
//! - MD036: bold-only lines promoted to headings
//!
//! ## Passes
//!
//! Four pure `lines -> lines` passes run in fixed order:
//!
//! 1. **`rewrite`**: per-line classification and rewriting with mutable list
//!    and heading state
//! 2. **`spacing::blank_after_lists`**: blank line after finished list blocks
//! 3. **`spacing::collapse_blanks`**: blank-run collapsing and edge trimming
//! 4. **`headings::finalize_headings`**: H1 singularity, duplicate suffixing,
//!    punctuation stripping
//!
//! Fenced code is a raw zone in every pass. An unbalanced fence converts the
//! rest of the document to code mode and everything after it passes through
//! unmodified; this matches the behavior READMEs have always been generated
//! with and is deliberately not "fixed" here.
//!
//! The normalizer is total: any input string produces output, and the output
//! always ends with exactly one newline.

pub mod classify;
pub mod kinds;
pub mod line;
pub mod list;

mod headings;
mod inline;
mod rewrite;
mod spacing;

pub use classify::{LineClass, LineClassifier, LineKind};
pub use list::ListContext;

/// Normalizes a Markdown document into its lint-clean canonical form.
pub fn normalize(input: &str) -> String {
    let text = input.replace("\r\n", "\n").replace('\r', "\n");
    let src: Vec<&str> = text.split('\n').collect();

    let lines = rewrite::rewrite_lines(&src);
    let lines = spacing::blank_after_lists(lines);
    let lines = spacing::collapse_blanks(lines);
    let lines = headings::finalize_headings(lines);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::normalize;

    #[rstest]
    #[case::duplicate_h1("# A\n# A\n", "# A\n\n## A（2）\n")]
    #[case::valid_list_unchanged("- one\n- two\n", "- one\n- two\n")]
    #[case::ordered_renumbering("1. x\n3. y\n", "1. x\n2. y\n")]
    #[case::bare_url("Visit https://example.com now\n", "Visit <https://example.com> now\n")]
    #[case::bold_promotion("**Summary**\n", "## Summary\n")]
    #[case::blank_collapse("a\n\n\n\nb\n", "a\n\nb\n")]
    #[case::empty_input("", "\n")]
    #[case::crlf_input("# A\r\n\r\ntext\r\n", "# A\n\ntext\n")]
    fn normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn trailing_newline_is_exactly_one() {
        assert_eq!(normalize("text"), "text\n");
        assert_eq!(normalize("text\n\n\n"), "text\n");
    }

    #[test]
    fn heading_blank_line_enforcement() {
        assert_eq!(normalize("intro\n## Section\nbody\n"), "intro\n\n## Section\n\nbody\n");
    }

    #[test]
    fn quoted_list_gets_quoted_spacing_then_plain_blanks() {
        assert_eq!(
            normalize("> intro\n> - a\n> outro\n"),
            "> intro\n\n> - a\n\n> outro\n"
        );
    }

    #[test]
    fn fenced_code_keeps_tabs_and_trailing_whitespace() {
        let input = "```\n\tindented()\ndone\t\n```\n";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn unbalanced_fence_passes_remainder_through() {
        assert_eq!(
            normalize("before\n```\n1. x\n3. y\n\n\n"),
            "before\n```\n1. x\n3. y\n"
        );
    }

    #[test]
    fn idempotent_on_representative_document() {
        let input = concat!(
            "# PE1001 - 体育课：\n",
            "some intro with https://example.com link\n",
            "**总评构成**\n",
            "- 说明文字\n",
            "  - 平时表现的说明\n",
            "  - 期末考试 70%\n",
            "1. 第一项\n",
            "3. 第二项\n",
            "   - 子项\n",
            "\n",
            "\n",
            "## 概述\n",
            "## 概述\n",
            "> quoted\n",
            "> - quoted item\n",
            "```\n",
            "raw   code\n",
            "```\n",
        );
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn idempotent_on_already_clean_document() {
        let clean = "# Title\n\ntext\n\n- a\n- b\n";
        assert_eq!(normalize(clean), clean);
    }
}
