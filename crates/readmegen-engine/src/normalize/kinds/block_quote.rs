/// Blockquote marker knowledge.
///
/// All blockquote syntax handling lives here, not scattered through the
/// pass code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Splits a line into its blockquote prefix and the remaining body.
    ///
    /// The prefix keeps its original spacing, including whitespace between
    /// and after nested markers: `"> > spaced"` yields `("> > ", "spaced")`.
    /// Lines without a leading marker return an empty prefix and the whole
    /// line as body.
    pub fn split_prefix(line: &str) -> (&str, &str) {
        let b = line.as_bytes();
        let mut i = 0usize;
        while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
            i += 1;
        }
        if i >= b.len() || b[i] != (Self::PREFIX as u8) {
            return ("", line);
        }
        let mut end = i;
        while i < b.len() && b[i] == (Self::PREFIX as u8) {
            i += 1;
            while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
                i += 1;
            }
            end = i;
        }
        (&line[..end], &line[end..])
    }

    /// Strips the blockquote prefix, keeping only the body.
    pub fn strip_prefix(line: &str) -> &str {
        Self::split_prefix(line).1
    }

    /// A line containing only blockquote markers and whitespace.
    ///
    /// Such "quote-blank" lines count as blank for spacing purposes.
    pub fn is_quote_blank(line: &str) -> bool {
        let (prefix, body) = Self::split_prefix(line);
        !prefix.is_empty() && body.trim().is_empty()
    }
}
