use super::authors::render_quote;
use super::badges::basic_info_badges;
use super::model::{AuthorField, ReadmeDoc, Review};
use super::normal::{push_lecturer_list, push_title};
use super::text::{escape_inline, normalize_multiline};

fn field(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

/// Renders a content block with its signature quote, or an empty string when
/// there is no content.
fn render_block(content: &str, author: Option<&AuthorField>) -> String {
    let content = normalize_multiline(content);
    if content.is_empty() {
        return String::new();
    }
    match render_quote(author, "") {
        // Trailing blank keeps following lines out of the quote.
        Some(quote) => format!("{content}\n\n{quote}\n\n"),
        None => content,
    }
}

/// Renders a multi-project collection record as Markdown.
///
/// Each course gets its own `###` block; a `基本信息` review is lifted out of
/// the review list and shown as badges under the course title.
pub(super) fn render_multi_project(doc: &ReadmeDoc) -> String {
    let course_name = escape_inline(field(&doc.course_name));
    let course_code = escape_inline(field(&doc.course_code));
    let description = normalize_multiline(doc.description.as_deref().unwrap_or(""));

    let mut lines: Vec<String> = Vec::new();
    push_title(&mut lines, &course_code, &course_name, "课程集合");

    if !description.is_empty() {
        lines.push(String::new());
        lines.push(description);
    }

    if !doc.courses.is_empty() {
        lines.push(String::new());
        lines.push("## 课程列表".to_string());
        lines.push(String::new());
        for course in &doc.courses {
            let name = escape_inline(field(&course.name));
            let code = escape_inline(field(&course.code));
            let header = if !code.is_empty() && !name.is_empty() {
                format!("{code} - {name}")
            } else if !name.is_empty() {
                name
            } else {
                code
            };
            if header.is_empty() {
                continue;
            }

            let mut info_badges: Vec<String> = Vec::new();
            let mut reviews: Vec<&Review> = Vec::new();
            for review in &course.reviews {
                if field(&review.topic) == "基本信息" && info_badges.is_empty() {
                    info_badges = basic_info_badges(review.content.as_deref().unwrap_or(""));
                    continue;
                }
                reviews.push(review);
            }

            lines.push(String::new());
            lines.push(format!("### {header}"));

            if !info_badges.is_empty() {
                lines.push(String::new());
                lines.extend(info_badges);
            }

            if !course.teachers.is_empty() {
                lines.push(String::new());
                lines.push(format!("#### {header} - 授课教师"));
                lines.push(String::new());
                push_lecturer_list(&mut lines, &course.teachers);
            }

            if !reviews.is_empty() {
                lines.push(String::new());
                lines.push(format!("#### {header} - 课程评价"));
                lines.push(String::new());
                for review in reviews {
                    let topic = escape_inline(field(&review.topic));
                    if !topic.is_empty() {
                        lines.push(String::new());
                        lines.push(format!("##### {header} - {topic}"));
                        lines.push(String::new());
                    }
                    let block = render_block(
                        review.content.as_deref().unwrap_or(""),
                        review.author.as_ref(),
                    );
                    if !block.is_empty() {
                        lines.push(block);
                    }
                }
            }
        }
    }

    if !doc.misc.is_empty() {
        lines.push(String::new());
        lines.push("## 其他".to_string());
        for item in &doc.misc {
            let topic = escape_inline(field(&item.topic));
            if !topic.is_empty() {
                lines.push(String::new());
                lines.push(format!("### {topic}"));
            }
            let block = render_block(item.content.as_deref().unwrap_or(""), item.author.as_ref());
            if !block.is_empty() {
                lines.push(block);
            }
        }
    }

    format!("{}\n", lines.join("\n").trim_end())
}
