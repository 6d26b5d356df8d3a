use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::text::normalize_multiline;

const SHIELDS_BASE: &str = "https://img.shields.io/badge/";

static NUMERIC_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?%?$").unwrap());
static BASIC_INFO_KV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*【([^】]+)】\s*[:：]\s*(.*\S)\s*$").unwrap());

/// Encodes a single shields.io path component.
///
/// shields.io uses `-` as a delimiter, so a literal `-` must be written as
/// `--`; `%` must be percent-encoded to keep the URL valid. CJK text stays
/// readable.
pub fn encode_component(text: &str) -> String {
    let s = text.trim();
    if s.is_empty() {
        return String::new();
    }
    s.replace('-', "--").replace('%', "%25").replace(' ', "%20")
}

/// Renders a shields.io badge image.
///
/// With no message and an explicit color this is the two-part
/// `/badge/<label>-<color>` variant; otherwise `<label>-<message>-<color>`
/// with a `brightgreen` default.
pub fn shields_badge(alt: &str, label: &str, message: Option<&str>, color: Option<&str>) -> String {
    let path = match (message, color) {
        (None, Some(color)) => {
            format!("{}-{}", encode_component(label), encode_component(color))
        }
        (message, color) => format!(
            "{}-{}-{}",
            encode_component(label),
            encode_component(message.unwrap_or("")),
            encode_component(color.unwrap_or("brightgreen"))
        ),
    };
    format!("![{alt}]({SHIELDS_BASE}{path})")
}

/// Splits a segment like `理论学时 32` into `("理论学时", "32")`.
///
/// Falls back to the whole text with an empty value when there is no obvious
/// numeric/percent tail.
pub fn split_label_value_tail(text: &str) -> (String, String) {
    let s = text.trim();
    if s.is_empty() {
        return (String::new(), String::new());
    }
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() < 2 {
        return (s.to_string(), String::new());
    }
    let tail = parts[parts.len() - 1];
    if NUMERIC_TAIL.is_match(tail) {
        let label = parts[..parts.len() - 1].concat();
        let label = if label.is_empty() { s.to_string() } else { label };
        (label, tail.to_string())
    } else {
        (s.to_string(), String::new())
    }
}

/// Renders a `基本信息` review block into shields.io badge lines.
///
/// Recognized keys are `学分`, `学时构成`, and `成绩构成`; the latter two are
/// `|`-separated segment lists rendered as a gold header badge followed by
/// wheat segment badges.
pub fn basic_info_badges(content: &str) -> Vec<String> {
    let text = normalize_multiline(content);
    if text.is_empty() {
        return Vec::new();
    }

    let mut kv: HashMap<String, String> = HashMap::new();
    for line in text.split('\n') {
        if let Some(caps) = BASIC_INFO_KV.captures(line) {
            kv.insert(caps[1].trim().to_string(), caps[2].trim().to_string());
        }
    }

    let mut badges: Vec<String> = Vec::new();
    let ensure_blank_sep = |badges: &mut Vec<String>| {
        if badges.last().is_some_and(|b| !b.is_empty()) {
            badges.push(String::new());
        }
    };

    if let Some(credit) = kv.get("学分") {
        badges.push(shields_badge("学分", "学分", Some(credit), Some("moccasin")));
    }

    for key in ["学时构成", "成绩构成"] {
        let Some(value) = kv.get(key) else { continue };
        ensure_blank_sep(&mut badges);
        badges.push(shields_badge(key, key, None, Some("gold")));
        for seg in value.split('|').map(str::trim).filter(|s| !s.is_empty()) {
            let (label, tail) = split_label_value_tail(seg);
            let alt = format!("{label}{tail}");
            badges.push(shields_badge(&alt, &label, Some(&tail), Some("wheat")));
        }
    }

    while badges.last().is_some_and(|b| b.is_empty()) {
        badges.pop();
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_shields_components() {
        assert_eq!(encode_component("a-b"), "a--b");
        assert_eq!(encode_component("30%"), "30%25");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("  "), "");
    }

    #[test]
    fn two_part_badge_without_message() {
        assert_eq!(
            shields_badge("成绩构成", "成绩构成", None, Some("gold")),
            "![成绩构成](https://img.shields.io/badge/成绩构成-gold)"
        );
    }

    #[test]
    fn three_part_badge_with_message() {
        assert_eq!(
            shields_badge("期末70%", "期末", Some("70%"), Some("wheat")),
            "![期末70%](https://img.shields.io/badge/期末-70%25-wheat)"
        );
    }

    #[test]
    fn default_color_is_brightgreen() {
        assert_eq!(
            shields_badge("x", "x", Some("1"), None),
            "![x](https://img.shields.io/badge/x-1-brightgreen)"
        );
    }

    #[test]
    fn splits_numeric_tail() {
        assert_eq!(
            split_label_value_tail("理论学时 32"),
            ("理论学时".to_string(), "32".to_string())
        );
        assert_eq!(
            split_label_value_tail("期末考试 70%"),
            ("期末考试".to_string(), "70%".to_string())
        );
    }

    #[test]
    fn no_tail_keeps_whole_text() {
        assert_eq!(
            split_label_value_tail("开卷考试"),
            ("开卷考试".to_string(), String::new())
        );
        assert_eq!(
            split_label_value_tail("期末 闭卷"),
            ("期末 闭卷".to_string(), String::new())
        );
    }

    #[test]
    fn basic_info_block_renders_badge_rows() {
        let content = "【学分】：2\n【成绩构成】：平时 30% | 期末 70%";
        let badges = basic_info_badges(content);
        assert_eq!(
            badges,
            vec![
                "![学分](https://img.shields.io/badge/学分-2-moccasin)".to_string(),
                String::new(),
                "![成绩构成](https://img.shields.io/badge/成绩构成-gold)".to_string(),
                "![平时30%](https://img.shields.io/badge/平时-30%25-wheat)".to_string(),
                "![期末70%](https://img.shields.io/badge/期末-70%25-wheat)".to_string(),
            ]
        );
    }

    #[test]
    fn unrecognized_content_yields_no_badges() {
        assert!(basic_info_badges("自由文本，没有键值对").is_empty());
    }
}
