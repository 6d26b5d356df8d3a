use super::kinds::{BlockQuote, CodeFence, ListMarker};
use super::line::is_blankish;

/// Pass 2: a finished list block gets exactly one blank line after it.
///
/// "Finished" means the next non-blank line is not a list item. The inserted
/// blank inherits the list's blockquote prefix so quoted lists stay quoted.
pub(super) fn blank_after_lists(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut in_code = false;

    for (i, ln) in lines.iter().enumerate() {
        if CodeFence::is_fence(BlockQuote::strip_prefix(ln)) {
            in_code = !in_code;
            out.push(ln.clone());
            continue;
        }
        if in_code {
            out.push(ln.clone());
            continue;
        }

        out.push(ln.clone());
        if !ListMarker::is_item(BlockQuote::strip_prefix(ln)) {
            continue;
        }
        let mut j = i + 1;
        while j < lines.len() && is_blankish(&lines[j]) {
            j += 1;
        }
        let block_ends = j < lines.len() && !ListMarker::is_item(BlockQuote::strip_prefix(&lines[j]));
        if block_ends && i + 1 < lines.len() && !is_blankish(&lines[i + 1]) {
            let (prefix, _) = BlockQuote::split_prefix(ln);
            out.push(prefix.trim_end().to_string());
        }
    }

    out
}

/// Pass 3: runs of blank (and quote-blank) lines collapse to one plain blank
/// line, and leading/trailing blanks are trimmed. Quote-blank lines lose
/// their `>` prefix here; quoting is not preserved across a collapsed blank.
pub(super) fn collapse_blanks(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut in_code = false;
    let mut blank_run = 0usize;

    for ln in lines {
        if CodeFence::is_fence(BlockQuote::strip_prefix(&ln)) {
            in_code = !in_code;
            blank_run = 0;
            out.push(ln);
            continue;
        }
        if in_code {
            out.push(ln);
            continue;
        }
        if is_blankish(&ln) {
            blank_run += 1;
            if blank_run == 1 {
                out.push(String::new());
            }
        } else {
            blank_run = 0;
            out.push(ln);
        }
    }

    let keep_from = out.iter().position(|l| !is_blankish(l)).unwrap_or(out.len());
    out.drain(..keep_from);
    while out.last().is_some_and(|l| is_blankish(l)) {
        out.pop();
    }
    out
}
