use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::badges::shields_badge;

const SUMMARY_FILE: &str = "grades_summary.json";

/// Optional per-repo `grades_summary.json` side file, looked up by walking
/// up from the TOML being converted.
///
/// Loading is best-effort: a missing, unreadable, or non-object file is an
/// empty summary, never an error.
#[derive(Debug, Default)]
pub struct GradesSummary {
    data: Map<String, Value>,
}

impl GradesSummary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load_near(toml_path: &Path) -> Self {
        let Some(path) = find_upwards(toml_path, SUMMARY_FILE) else {
            return Self::empty();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::empty();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(data)) => Self { data },
            _ => Self::empty(),
        }
    }

    /// Badge lines for a course's grading breakdown, or empty when the
    /// summary has no usable entry for the code.
    pub fn badges_for(&self, course_code: &str) -> Vec<String> {
        let Some(entry) = self.data.get(course_code) else {
            return Vec::new();
        };
        let items = pick_variant(entry);
        if items.is_empty() {
            return Vec::new();
        }

        let mut badges = vec![shields_badge("成绩构成", "成绩构成", None, Some("gold"))];
        for item in items {
            let name = value_str(item.get("name"));
            let name = name.trim();
            let percent = value_str(item.get("percent"));
            let percent = percent.trim();
            if name.is_empty() {
                continue;
            }
            let alt = format!("{name}{percent}");
            badges.push(shields_badge(&alt, name, Some(percent), Some("wheat")));
        }
        badges
    }
}

fn find_upwards(start: &Path, filename: &str) -> Option<PathBuf> {
    let start = if start.is_file() {
        start.parent().unwrap_or(start)
    } else {
        start
    };
    for dir in start.ancestors() {
        let candidate = dir.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Picks the grade-item list out of a summary entry.
///
/// An entry is either a plain list of items or a map of named variants; the
/// `default` variant wins, then the lexically-first key mentioning
/// "default", then the lexically-first key.
fn pick_variant(entry: &Value) -> Vec<&Map<String, Value>> {
    match entry {
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        Value::Object(variants) => {
            if let Some(Value::Array(items)) = variants.get("default") {
                return items.iter().filter_map(Value::as_object).collect();
            }
            let mut keys: Vec<&String> = variants.keys().collect();
            keys.sort();
            let pick = keys
                .iter()
                .find(|k| k.to_lowercase().contains("default"))
                .or_else(|| keys.first())
                .copied();
            match pick.and_then(|k| variants.get(k)) {
                Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

fn value_str(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
