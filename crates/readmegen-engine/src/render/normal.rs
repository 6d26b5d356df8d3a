use super::authors::{render_quote, sig_key};
use super::grades::GradesSummary;
use super::model::{AuthorField, ReadmeDoc, Review};
use super::text::{escape_inline, normalize_multiline, split_nonempty_lines};

fn field(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

/// Emits the document title, falling back to `**课程代码：**` metadata when
/// the code cannot go into the title itself.
pub(super) fn push_title(lines: &mut Vec<String>, code: &str, name: &str, fallback: &str) {
    if !code.is_empty() && !name.is_empty() {
        lines.push(format!("# {code} - {name}"));
        return;
    }
    let title = if !name.is_empty() {
        name
    } else if !code.is_empty() {
        code
    } else {
        fallback
    };
    lines.push(format!("# {title}"));
    if !code.is_empty() {
        lines.push(String::new());
        lines.push(format!("**课程代码：** {code}"));
    }
}

/// Renders a lecturer bullet with nested review lines and an indented
/// signature quote after each signed review.
pub(super) fn push_lecturer_list(lines: &mut Vec<String>, lecturers: &[super::model::Lecturer]) {
    for lec in lecturers {
        let name = escape_inline(field(&lec.name));
        if name.is_empty() {
            continue;
        }
        lines.push(format!("- {name}"));
        for review in &lec.reviews {
            let content_lines = split_nonempty_lines(review.content.as_deref().unwrap_or(""));
            for line in &content_lines {
                lines.push(format!("  - {line}"));
            }
            if !content_lines.is_empty()
                && let Some(quote) = render_quote(review.author.as_ref(), "  ")
            {
                lines.push(quote);
                // Keep following lines out of the quote (lazy continuation).
                lines.push(String::new());
            }
        }
    }
}

fn flush_signature(
    out: &mut Vec<String>,
    sig: Option<&Vec<(String, String, String)>>,
    author: Option<&AuthorField>,
) {
    if sig.is_some_and(|s| !s.is_empty())
        && let Some(quote) = render_quote(author, "")
    {
        out.push(quote);
        out.push(String::new());
    }
}

/// Renders a `## <title>` review section.
///
/// Consecutive items with the same author signature share one trailing
/// quote; the signature is flushed whenever it changes and once at the end.
pub(super) fn render_section_items(title: &str, items: &[Review], use_topic: bool) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out: Vec<String> = vec![format!("## {title}"), String::new()];
    let mut pending_sig: Option<Vec<(String, String, String)>> = None;
    let mut pending_author: Option<AuthorField> = None;

    for item in items {
        let sig = sig_key(item.author.as_ref());
        match &pending_sig {
            None => {
                pending_sig = Some(sig);
                pending_author = item.author.clone();
            }
            Some(prev) if *prev != sig => {
                flush_signature(&mut out, pending_sig.as_ref(), pending_author.as_ref());
                pending_sig = Some(sig);
                pending_author = item.author.clone();
            }
            _ => {}
        }

        if use_topic {
            let topic = field(&item.topic);
            if !topic.is_empty() {
                out.push(format!("### {topic}"));
                out.push(String::new());
            }
        }
        let block = normalize_multiline(item.content.as_deref().unwrap_or(""));
        if !block.is_empty() {
            out.push(block);
        }
        out.push(String::new());
    }

    flush_signature(&mut out, pending_sig.as_ref(), pending_author.as_ref());
    format!("{}\n", out.join("\n").trim_end())
}

/// Renders a single-course record as Markdown.
pub(super) fn render_normal(doc: &ReadmeDoc, grades: &GradesSummary) -> String {
    let course_name = escape_inline(field(&doc.course_name));
    let course_code = escape_inline(field(&doc.course_code));
    let description = normalize_multiline(doc.description.as_deref().unwrap_or(""));

    let mut lines: Vec<String> = Vec::new();
    push_title(&mut lines, &course_code, &course_name, "课程");

    // Grading badges sit above the description block.
    if !course_code.is_empty() {
        let badges = grades.badges_for(&course_code);
        if !badges.is_empty() {
            lines.push(String::new());
            lines.extend(badges);
        }
    }

    if !description.is_empty() {
        lines.push(String::new());
        lines.push(description);
    }

    if !doc.lecturers.is_empty() {
        lines.push(String::new());
        lines.push("## 授课教师".to_string());
        lines.push(String::new());
        push_lecturer_list(&mut lines, &doc.lecturers);
    }

    if !doc.textbooks.is_empty() {
        lines.push(String::new());
        lines.push("## 教材".to_string());
        for tb in &doc.textbooks {
            let title = field(&tb.title);
            if title.is_empty() {
                continue;
            }
            let meta: Vec<&str> = [
                field(&tb.book_author),
                field(&tb.publisher),
                field(&tb.edition),
                field(&tb.kind),
            ]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
            if meta.is_empty() {
                lines.push(format!("- **{title}**"));
            } else {
                lines.push(format!("- **{title}**（{}）", meta.join(" / ")));
            }
        }
    }

    if !doc.online_resources.is_empty() {
        lines.push(String::new());
        lines.push("## 在线资源".to_string());
        lines.push(String::new());
        for res in &doc.online_resources {
            let url = field(&res.url);
            let title = {
                let t = field(&res.title);
                if t.is_empty() { url } else { t }
            };
            let desc = field(&res.description);
            if title.is_empty() && url.is_empty() {
                continue;
            }
            let tail = if desc.is_empty() {
                String::new()
            } else {
                format!("：{desc}")
            };
            if url.is_empty() {
                lines.push(format!("- {title}{tail}"));
            } else {
                lines.push(format!("- [{title}]({url}){tail}"));
            }
        }
    }

    let sections: [(&[Review], &str); 5] = [
        (&doc.course, "课程内容"),
        (&doc.exam, "考核/考试"),
        (&doc.lab, "实验/作业"),
        (&doc.advice, "选课建议"),
        (&doc.schedule, "课程安排"),
    ];
    for (items, title) in sections {
        let section = render_section_items(title, items, false);
        if !section.is_empty() {
            lines.push(String::new());
            lines.push(section.trim_end().to_string());
        }
    }

    // related_links render without signatures, one bullet per line.
    if !doc.related_links.is_empty() {
        lines.push(String::new());
        lines.push("## 相关链接".to_string());
        lines.push(String::new());
        for item in &doc.related_links {
            let content = field(&item.content);
            if content.is_empty() {
                continue;
            }
            for line in content.replace("\r\n", "\n").replace('\r', "\n").split('\n') {
                let line = line.trim();
                if !line.is_empty() {
                    lines.push(format!("- {line}"));
                }
            }
        }
    }

    let misc = render_section_items("其他", &doc.misc, true);
    if !misc.is_empty() {
        lines.push(String::new());
        lines.push(misc.trim_end().to_string());
    }

    format!("{}\n", lines.join("\n").trim_end())
}
