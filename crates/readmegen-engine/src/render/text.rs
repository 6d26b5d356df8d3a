use std::sync::LazyLock;

use regex::Regex;

static LEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]\s+").unwrap());

/// Removes the common leading whitespace of all non-blank lines.
///
/// Whitespace-only lines are ignored when computing the margin and come out
/// empty.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");

    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

/// Normalizes multiline Markdown stored in TOML triple-quoted strings.
///
/// Many records indent the whole block for readability; a plain trim would
/// only fix the first line and leave the rest misaligned in the generated
/// README, so the block is dedented first.
pub fn normalize_multiline(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    dedent(&text).trim().to_string()
}

/// Conservative single-line cleanup for headings and inline positions.
pub fn escape_inline(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Splits content into trimmed non-empty lines, dropping any leading list
/// marker so callers can re-bullet the lines at their own indent.
pub fn split_nonempty_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| LEADING_MARKER.replace(line, "").into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedent_common_margin() {
        assert_eq!(dedent("  a\n  b"), "a\nb");
        assert_eq!(dedent("  a\n    b"), "a\n  b");
    }

    #[test]
    fn dedent_ignores_blank_lines() {
        assert_eq!(dedent("  a\n\n  b"), "a\n\nb");
    }

    #[test]
    fn normalize_multiline_trims_and_dedents() {
        assert_eq!(normalize_multiline("  第一行\n  第二行\n"), "第一行\n第二行");
    }

    #[test]
    fn split_lines_strips_markers() {
        assert_eq!(
            split_nonempty_lines("- a\n\n* b\n• c\nplain"),
            vec!["a", "b", "c", "plain"]
        );
    }
}
