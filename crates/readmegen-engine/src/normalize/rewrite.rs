use std::sync::LazyLock;

use regex::Regex;

use super::classify::{LineClassifier, LineKind};
use super::inline::wrap_bare_urls;
use super::kinds::{BlockQuote, BoldLine, Heading, ListKind, ListMarker};
use super::line::{expand_tabs, is_blank, is_blankish, leading_ws};
use super::list::ListContext;

static PERCENT_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+%\s*$").unwrap());
static PERCENT_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(]\s*\d+%\s*[）)]\s*$").unwrap());

/// The most recent list item emitted, used by the score-breakdown heuristic.
struct PrevItem {
    prefix: String,
    kind: ListKind,
    indent: usize,
    rest: String,
}

/// Pass 1: the stateful per-line rewrite.
///
/// Classifies each line, wraps bare URLs, promotes bold-only lines to
/// headings, normalizes list markers / indentation / numbering, enforces
/// blank lines around headings, and drops orphan markers. Code fences are
/// raw zones: the delimiter and everything inside pass through untouched.
pub(super) fn rewrite_lines(src: &[&str]) -> Vec<String> {
    let classifier = LineClassifier;
    let mut out: Vec<String> = Vec::with_capacity(src.len());
    let mut in_code = false;
    let mut ctx = ListContext::new();
    let mut last_heading_level = 0usize;
    let mut prev_item: Option<PrevItem> = None;

    for (i, &raw) in src.iter().enumerate() {
        let lc = classifier.classify(raw);
        if lc.kind == LineKind::Fence {
            in_code = !in_code;
            out.push(raw.to_string());
            continue;
        }
        if in_code {
            out.push(raw.to_string());
            continue;
        }

        let expanded = expand_tabs(raw);
        let line = expanded.trim_end();
        let lc = classifier.classify(line);
        if lc.kind == LineKind::Blank {
            // Blank and quote-blank lines keep the list context so ordered
            // numbering stays sequential across them.
            out.push(lc.prefix.trim_end().to_string());
            prev_item = None;
            continue;
        }

        let prefix = lc.prefix;
        let mut body = wrap_bare_urls(lc.body);

        // MD036: bold-only line becomes a heading, outside blockquotes only.
        if prefix.is_empty()
            && let Some((indent, text)) = BoldLine::parse(&body)
            && indent.is_empty()
        {
            let text = text.trim();
            if !text.is_empty()
                && !text.starts_with('#')
                && !text.starts_with(BlockQuote::PREFIX)
                && !ListMarker::is_item(text)
            {
                let level = (last_heading_level + 1).clamp(2, Heading::MAX_LEVEL);
                body = Heading::format(level, text);
            }
        }

        // MD004 / MD030: canonical dash marker with exactly one space.
        if let Some((indent, rest)) = ListMarker::parse_unordered(&body)
            .map(|it| (it.indent, it.rest.trim_start().to_string()))
        {
            body = format!("{}- {rest}", " ".repeat(indent));
        }

        // A marker with no content breaks list parsing downstream; replace
        // it with a (prefix-preserving) blank line.
        if ListMarker::is_orphan(&body) {
            out.push(prefix.trim_end().to_string());
            continue;
        }

        // MD005 / MD007: indentation normalization. Ordered markers at up to
        // three columns are top-level; 4-space nesting collapses to 2-space.
        if let Some((indent, number, delimiter, rest)) = ListMarker::parse_ordered(&body)
            .map(|it| (it.indent, it.number.to_string(), it.delimiter, it.rest.trim_start().to_string()))
        {
            let norm = if indent <= 3 { 0 } else { indent - 2 };
            body = format!("{}{number}{delimiter} {rest}", " ".repeat(norm));
        } else if let Some((indent, rest)) = ListMarker::parse_unordered(&body)
            .map(|it| (it.indent, it.rest.trim_start().to_string()))
        {
            let rest_trimmed = rest.trim_end();
            let ends_with_percent = PERCENT_TAIL.is_match(rest_trimmed);
            let paren_percent = PERCENT_PAREN.is_match(rest_trimmed);

            // Score-breakdown heuristic: after a 2-space explanatory bullet
            // without a percent tail, a 2-space bullet that does end with a
            // percent value is a top-level score component that inherited
            // stray indentation. Promote it.
            if indent == 2
                && (ends_with_percent || paren_percent)
                && prev_item.as_ref().is_some_and(|prev| {
                    prev.prefix == prefix
                        && prev.kind == ListKind::Unordered
                        && prev.indent == 2
                        && !PERCENT_TAIL.is_match(&prev.rest)
                        && !PERCENT_PAREN.is_match(&prev.rest)
                })
            {
                body = format!("- {rest}");
            } else if indent <= 3 && paren_percent {
                // Lightly-indented parenthesized-percent items are top-level.
                body = format!("- {rest}");
            } else if let Some((ancestor, desired)) = ctx.ordered_ancestor_target()
                && indent > ancestor
            {
                // Under an ordered ancestor, a nested unordered item must sit
                // at the ancestor's indent plus its marker width ("1. " is 3,
                // so a common 2-space nesting mistake becomes 3 spaces).
                if indent != desired {
                    body = format!("{}- {rest}", " ".repeat(desired));
                }
            } else if indent >= 4 {
                body = format!("{}- {rest}", " ".repeat(indent - 2));
            }
        }

        // MD022: headings get surrounding blank lines and terminate any open
        // list. Quoted headings are not document structure and fall through.
        if prefix.is_empty() && Heading::is_heading(&body) {
            ctx.clear();
            prev_item = None;
            let trimmed = body.trim();
            if let Some((level, _)) = Heading::split(trimmed) {
                last_heading_level = level;
            }
            if out.last().is_some_and(|l| !is_blankish(l)) {
                out.push(String::new());
            }
            out.push(Heading::strip_trailing_punct(trimmed));
            if src.get(i + 1).is_some_and(|next| !is_blank(next)) {
                out.push(String::new());
            }
            continue;
        }

        let is_item = ListMarker::is_item(&body);
        if is_item {
            let (mut indent, content_at) = leading_ws(&body);
            // MD007: an indented list with no active list context is an
            // accidentally-indented top-level list.
            if indent > 0 && !ctx.has_active_list() {
                body = body[content_at..].to_string();
                indent = 0;
            }
            ctx.enter_item(indent);
        } else {
            let (cont_indent, _) = leading_ws(&body);
            ctx.observe_plain(cont_indent);
        }

        // MD029 / MD030: sequential ordered numbering, source delimiter kept.
        if let Some((indent, digits, delimiter, rest)) = ListMarker::parse_ordered(&body)
            .map(|it| (it.indent, it.number.len(), it.delimiter, it.rest.trim_start().to_string()))
        {
            ctx.record_marker_width(indent, digits);
            let n = ctx.next_ordered(indent);
            body = format!("{}{n}{delimiter} {rest}", " ".repeat(indent));
        } else if is_item {
            let (indent, _) = leading_ws(&body);
            ctx.note_unordered(indent);
        }

        if is_item {
            // MD032: a list block needs a blank line before its first item.
            let needs_blank = out.last().is_some_and(|last| {
                let last_body = BlockQuote::strip_prefix(last);
                !is_blankish(last)
                    && !Heading::is_heading(last_body)
                    && !ListMarker::is_item(last_body)
            });
            if needs_blank {
                out.push(prefix.trim_end().to_string());
            }
            prev_item = current_item(prefix, &body);
            out.push(format!("{prefix}{body}").trim_end().to_string());
            continue;
        }

        out.push(format!("{prefix}{body}").trim_end().to_string());
        prev_item = None;
    }

    out
}

fn current_item(prefix: &str, body: &str) -> Option<PrevItem> {
    if let Some(it) = ListMarker::parse_ordered(body) {
        return Some(PrevItem {
            prefix: prefix.to_string(),
            kind: ListKind::Ordered,
            indent: it.indent,
            rest: it.rest.trim().to_string(),
        });
    }
    if let Some(it) = ListMarker::parse_unordered(body) {
        return Some(PrevItem {
            prefix: prefix.to_string(),
            kind: ListKind::Unordered,
            indent: it.indent,
            rest: it.rest.trim().to_string(),
        });
    }
    None
}
