use super::kinds::BlockQuote;

/// Tab stop width used when expanding tabs outside code fences.
pub const TAB_STOP: usize = 4;

/// Expands tabs to the next `TAB_STOP` column. Lines inside code fences are
/// never passed through here.
pub fn expand_tabs(s: &str) -> String {
    if !s.contains('\t') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + TAB_STOP);
    let mut col = 0usize;
    for ch in s.chars() {
        if ch == '\t' {
            let pad = TAB_STOP - (col % TAB_STOP);
            out.extend(std::iter::repeat_n(' ', pad));
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}

/// Width of the leading whitespace run, in characters, plus the byte offset
/// where the content starts.
pub fn leading_ws(s: &str) -> (usize, usize) {
    let mut count = 0usize;
    for (idx, ch) in s.char_indices() {
        if !ch.is_whitespace() {
            return (count, idx);
        }
        count += 1;
    }
    (count, s.len())
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Blank, or a quote-blank line (`>` markers only); both count as blank for
/// spacing decisions.
pub fn is_blankish(line: &str) -> bool {
    is_blank(line) || BlockQuote::is_quote_blank(line)
}
