/// Fenced-code-block delimiter knowledge.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Whether a blockquote-stripped body is a fence delimiter line.
    ///
    /// Three or more backticks (optionally with an info string) toggle code
    /// mode; everything between an opening fence and its closing fence is
    /// passed through untouched by the normalizer.
    pub fn is_fence(body: &str) -> bool {
        body.trim().starts_with(Self::MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_plain_fence() {
        assert!(CodeFence::is_fence("```"));
    }

    #[test]
    fn detect_fence_with_info_string() {
        assert!(CodeFence::is_fence("```rust"));
    }

    #[test]
    fn detect_long_fence() {
        assert!(CodeFence::is_fence("````"));
    }

    #[test]
    fn detect_indented_fence() {
        assert!(CodeFence::is_fence("  ```"));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_fence("hello"));
        assert!(!CodeFence::is_fence("`` not a fence"));
    }
}
