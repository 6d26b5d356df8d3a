//! README generation from `readme.toml` course records.
//!
//! A record deserializes into [`ReadmeDoc`] and renders through one of two
//! layouts: the normal single-course layout, or the multi-project layout for
//! `repo_type = "multi-project"` collections. Rendered output is raw
//! Markdown; callers pass it through [`crate::normalize::normalize`] before
//! writing it out.

mod authors;
mod badges;
mod grades;
mod model;
mod multi_project;
mod normal;
mod text;

pub use grades::GradesSummary;
pub use model::{
    Author, AuthorField, Course, Lecturer, OnlineResource, ReadmeDoc, Review, Textbook,
};

/// Renders a record as Markdown, dispatching on the record's layout.
pub fn render_readme(doc: &ReadmeDoc, grades: &GradesSummary) -> String {
    if doc.is_multi_project() {
        multi_project::render_multi_project(doc)
    } else {
        normal::render_normal(doc, grades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dispatches_on_repo_type() {
        let normal: ReadmeDoc = toml::from_str("course_name = \"课程A\"").unwrap();
        let multi: ReadmeDoc =
            toml::from_str("repo_type = \"multi-project\"\ncourse_name = \"集合\"").unwrap();
        assert_eq!(render_readme(&normal, &GradesSummary::empty()), "# 课程A\n");
        assert_eq!(render_readme(&multi, &GradesSummary::empty()), "# 集合\n");
    }

    #[test]
    fn full_record_renders_through_layout() {
        let toml = r#"
course_name = "线性代数"
course_code = "MA1001"
description = "基础数学课。"

[[course]]
content = "内容扎实。"
author = { name = "甲", date = "2024-06" }
"#;
        let doc: ReadmeDoc = toml::from_str(toml).unwrap();
        let md = render_readme(&doc, &GradesSummary::empty());
        assert!(md.starts_with("# MA1001 - 线性代数\n"));
        assert!(md.contains("基础数学课。"));
        assert!(md.contains("## 课程内容"));
        assert!(md.contains("> 文 / 甲, 2024-06"));
    }
}
