use serde::Deserialize;

/// A deserialized `readme.toml` record.
///
/// Exported TOMLs are hand-edited and loosely typed; every field defaults so
/// partial records still render.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReadmeDoc {
    pub repo_type: Option<String>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub description: Option<String>,
    pub lecturers: Vec<Lecturer>,
    pub textbooks: Vec<Textbook>,
    pub online_resources: Vec<OnlineResource>,
    pub course: Vec<Review>,
    pub exam: Vec<Review>,
    pub lab: Vec<Review>,
    pub advice: Vec<Review>,
    pub schedule: Vec<Review>,
    pub related_links: Vec<Review>,
    pub misc: Vec<Review>,
    /// Only present in multi-project repos (`[[courses]]`).
    pub courses: Vec<Course>,
}

impl ReadmeDoc {
    /// Whether the record is a multi-project collection rather than a single
    /// course.
    pub fn is_multi_project(&self) -> bool {
        self.repo_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("multi-project"))
    }
}

/// A review-style entry: optional topic, free-form Markdown content, and the
/// signature(s) of whoever wrote it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Review {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorField>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Lecturer {
    pub name: Option<String>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Textbook {
    pub title: Option<String>,
    pub book_author: Option<String>,
    pub publisher: Option<String>,
    pub edition: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OnlineResource {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Course {
    pub name: Option<String>,
    pub code: Option<String>,
    pub teachers: Vec<Lecturer>,
    pub reviews: Vec<Review>,
}

/// An author signature.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: Option<String>,
    pub link: Option<String>,
    pub date: Option<String>,
}

/// `author` may be a single table or an array of tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    One(Author),
    Many(Vec<Author>),
}

impl AuthorField {
    pub fn authors(&self) -> &[Author] {
        match self {
            AuthorField::One(author) => std::slice::from_ref(author),
            AuthorField::Many(authors) => authors,
        }
    }
}
