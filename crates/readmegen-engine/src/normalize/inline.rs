use std::sync::LazyLock;

use regex::Regex;

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s>]+").unwrap());

/// Wraps bare `http(s)://` URLs in angle brackets (MD034).
///
/// URLs already preceded by `<` or by `(` (a markdown link destination) are
/// left alone. Applied to the blockquote-stripped body before any other
/// rewriting of the line.
pub fn wrap_bare_urls(body: &str) -> String {
    if !body.contains("http://") && !body.contains("https://") {
        return body.to_string();
    }
    let mut out = String::with_capacity(body.len() + 8);
    let mut last = 0usize;
    for m in BARE_URL.find_iter(body) {
        out.push_str(&body[last..m.start()]);
        let preceded = body[..m.start()].chars().next_back();
        if matches!(preceded, Some('(') | Some('<')) {
            out.push_str(m.as_str());
        } else {
            out.push('<');
            out.push_str(m.as_str());
            out.push('>');
        }
        last = m.end();
    }
    out.push_str(&body[last..]);
    out
}
