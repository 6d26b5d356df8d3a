//! Auto-generation warning banner at the top of a README.
//!
//! When conversion fails, a visible `> [!WARNING]` block is inserted at the
//! very top of the README; a successful run clears it again. The block is
//! delimited by HTML comments so both operations are idempotent.

const WARNING_START: &str = "<!-- RDME_TOML_AUTOGEN_WARNING_START -->";
const WARNING_END: &str = "<!-- RDME_TOML_AUTOGEN_WARNING_END -->";

const DEFAULT_MESSAGE: &str = "TOML 自动化格式化/生成 README 失败，请检查 readme.toml。";

fn build_block(message: &str) -> String {
    let msg = message.trim();
    let msg = if msg.is_empty() { DEFAULT_MESSAGE } else { msg };
    format!("{WARNING_START}\n> [!WARNING]\n> {msg}\n{WARNING_END}\n\n")
}

/// Removes the warning block if present, along with the blank lines that
/// separated it from the document body.
pub fn strip_warning(text: &str) -> String {
    let Some(start) = text.find(WARNING_START) else {
        return text.to_string();
    };
    let Some(end) = text.find(WARNING_END) else {
        return text.to_string();
    };
    let after = text[end + WARNING_END.len()..].trim_start_matches('\n');
    let before = text[..start].strip_suffix('\n').unwrap_or(&text[..start]);
    let out = if before.is_empty() {
        after.to_string()
    } else {
        format!("{before}\n{after}")
    };
    out.trim_start_matches('\n').to_string()
}

/// Ensures a warning block sits at the top of the document, replacing any
/// previous one. An empty message falls back to the default Chinese notice.
pub fn set_warning(text: &str, message: &str) -> String {
    let text = strip_warning(text);
    let block = build_block(message);
    if text.trim().is_empty() {
        return block;
    }
    format!("{block}{}", text.trim_start_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BODY: &str = "# 标题\n\n正文。\n";

    #[test]
    fn sets_block_above_body() {
        let out = set_warning(BODY, "");
        assert!(out.starts_with(WARNING_START));
        assert!(out.contains("> [!WARNING]"));
        assert!(out.contains(DEFAULT_MESSAGE));
        assert!(out.ends_with(BODY));
    }

    #[test]
    fn custom_message_is_used() {
        let out = set_warning(BODY, "转换失败：缺少 course_name。");
        assert!(out.contains("> 转换失败：缺少 course_name。"));
        assert!(!out.contains(DEFAULT_MESSAGE));
    }

    #[test]
    fn set_is_idempotent() {
        let once = set_warning(BODY, "失败");
        let twice = set_warning(&once, "失败");
        assert_eq!(once, twice);
    }

    #[test]
    fn strip_restores_original_body() {
        let warned = set_warning(BODY, "失败");
        assert_eq!(strip_warning(&warned), BODY);
    }

    #[test]
    fn strip_without_block_is_noop() {
        assert_eq!(strip_warning(BODY), BODY);
    }

    #[test]
    fn set_on_empty_text_emits_only_block() {
        let out = set_warning("", "");
        assert!(out.starts_with(WARNING_START));
        assert!(out.ends_with("\n\n"));
    }

    #[test]
    fn unterminated_block_is_left_alone() {
        let text = format!("{WARNING_START}\n> [!WARNING]\n# 标题\n");
        assert_eq!(strip_warning(&text), text);
    }
}
