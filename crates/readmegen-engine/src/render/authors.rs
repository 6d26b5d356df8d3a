use super::model::{Author, AuthorField};

const ANONYMOUS: &str = "佚名";

fn field_str(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

/// Renders one author as a `> 文 / ...` quote line.
///
/// Explicitly anonymous signatures with nothing else to show are skipped; a
/// dated signature without a name falls back to `佚名`.
fn render_one(author: &Author, indent: &str) -> Option<String> {
    let mut name = field_str(&author.name);
    let link = field_str(&author.link);
    let date = field_str(&author.date);

    if (name == ANONYMOUS || name == "匿名") && link.is_empty() && date.is_empty() {
        return None;
    }
    if name.is_empty() && !date.is_empty() {
        name = ANONYMOUS;
    }

    let name_part = if !link.is_empty() && !name.is_empty() {
        format!("[{name}]({link})")
    } else {
        name.to_string()
    };

    if name_part.is_empty() && date.is_empty() {
        return None;
    }

    let suffix = match (name_part.is_empty(), date.is_empty()) {
        (false, false) => format!("{name_part}, {date}"),
        (false, true) => name_part,
        (true, false) => date.to_string(),
        (true, true) => unreachable!(),
    };

    Some(format!("{indent}> 文 / {suffix}"))
}

/// Renders an author field (single table or array) as a quote block.
///
/// A plain newline between two quote lines is not a visible break in
/// rendered Markdown, so multiple signatures are separated by bare `>`
/// lines to force a paragraph break.
pub fn render_quote(author: Option<&AuthorField>, indent: &str) -> Option<String> {
    let sigs: Vec<String> = author?
        .authors()
        .iter()
        .filter_map(|a| render_one(a, indent))
        .collect();
    if sigs.is_empty() {
        return None;
    }
    if sigs.len() == 1 {
        return Some(sigs[0].trim_end().to_string());
    }

    let mut out: Vec<String> = Vec::with_capacity(sigs.len() * 2 - 1);
    for (i, sig) in sigs.iter().enumerate() {
        if i > 0 {
            out.push(format!("{indent}>"));
        }
        out.push(sig.clone());
    }
    Some(out.join("\n").trim_end().to_string())
}

/// A comparable key for signature grouping: consecutive entries with the
/// same key render their signature only once.
pub fn sig_key(author: Option<&AuthorField>) -> Vec<(String, String, String)> {
    author
        .map(|field| {
            field
                .authors()
                .iter()
                .map(|a| {
                    (
                        field_str(&a.name).to_string(),
                        field_str(&a.link).to_string(),
                        field_str(&a.date).to_string(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}
