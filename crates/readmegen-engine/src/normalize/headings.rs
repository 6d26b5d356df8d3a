use std::collections::HashMap;

use super::kinds::{BlockQuote, CodeFence, Heading};

/// Pass 4: heading finalization.
///
/// Strips trailing punctuation (MD026), demotes every H1 after the first to
/// H2 (MD025), and suffixes repeated heading text with a Chinese-parenthesized
/// occurrence counter (MD024): the second `概述` becomes `概述（2）`.
/// Occurrences are counted on the punctuation-stripped text before any level
/// demotion. Headings inside blockquotes are quoted prose, not document
/// structure, and pass through untouched.
pub(super) fn finalize_headings(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut have_h1 = false;
    let mut in_code = false;

    for ln in lines {
        if CodeFence::is_fence(BlockQuote::strip_prefix(&ln)) {
            in_code = !in_code;
            out.push(ln);
            continue;
        }
        if in_code {
            out.push(ln);
            continue;
        }

        let finalized = {
            let (prefix, body) = BlockQuote::split_prefix(&ln);
            let trimmed = body.trim();
            if prefix.is_empty() {
                finalize_one(trimmed, &mut counts, &mut have_h1)
            } else {
                None
            }
        };
        match finalized {
            Some(heading) => out.push(heading),
            None => out.push(ln),
        }
    }

    out
}

fn finalize_one(
    trimmed: &str,
    counts: &mut HashMap<String, u32>,
    have_h1: &mut bool,
) -> Option<String> {
    let (fallback_level, fallback_text) = Heading::split(trimmed)?;
    let stripped = Heading::strip_trailing_punct(trimmed);
    let (mut level, text) = match Heading::split(&stripped) {
        Some((level, text)) => (level, text.trim().to_string()),
        // Punctuation stripping can leave bare marks; keep the source text.
        None => (fallback_level, fallback_text.trim().to_string()),
    };

    if level == 1 {
        if *have_h1 {
            level = 2;
        } else {
            *have_h1 = true;
        }
    }

    let n = counts.entry(text.clone()).and_modify(|c| *c += 1).or_insert(1);
    let text = if *n > 1 { format!("{text}（{n}）") } else { text };
    Some(Heading::format(level, &text))
}
