use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};
use super::line::is_blank;

/// What a line is, judged from its blockquote-stripped body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Fence,
    Heading,
    ListItem,
    Plain,
}

/// Classification of a single line: blockquote prefix, body, and kind.
///
/// The kind is always derived from the body, never the prefix, so a quoted
/// heading still classifies as [`LineKind::Heading`]; the passes decide
/// whether quoted structure is acted on.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    pub prefix: &'a str,
    pub body: &'a str,
    pub kind: LineKind,
}

/// Classifies lines in fixed priority order: fence, blank, heading, list,
/// plain.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let (prefix, body) = BlockQuote::split_prefix(line);
        let kind = if CodeFence::is_fence(body) {
            LineKind::Fence
        } else if is_blank(body) {
            LineKind::Blank
        } else if Heading::is_heading(body) {
            LineKind::Heading
        } else if ListMarker::is_item(body) {
            LineKind::ListItem
        } else {
            LineKind::Plain
        };
        LineClass { prefix, body, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(line: &str) -> LineKind {
        LineClassifier.classify(line).kind
    }

    #[test]
    fn classify_basic_kinds() {
        assert_eq!(kind_of(""), LineKind::Blank);
        assert_eq!(kind_of("```rust"), LineKind::Fence);
        assert_eq!(kind_of("## title"), LineKind::Heading);
        assert_eq!(kind_of("- item"), LineKind::ListItem);
        assert_eq!(kind_of("2. item"), LineKind::ListItem);
        assert_eq!(kind_of("text"), LineKind::Plain);
    }

    #[test]
    fn kind_is_judged_on_the_dequoted_body() {
        assert_eq!(kind_of("> # quoted heading"), LineKind::Heading);
        assert_eq!(kind_of("> - quoted item"), LineKind::ListItem);
        assert_eq!(kind_of("> ```"), LineKind::Fence);
        assert_eq!(kind_of(">"), LineKind::Blank);
    }

    #[test]
    fn quoted_line_keeps_its_prefix() {
        let lc = LineClassifier.classify("> > body here");
        assert_eq!(lc.prefix, "> > ");
        assert_eq!(lc.body, "body here");
    }
}
