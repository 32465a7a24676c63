//! Learning items tracked on the home page.
//!
//! Wire names match the Mindmarks API (`in-progress` is hyphenated there).
//! Filtering follows the API's list endpoint: a free-text query over title,
//! summary and author, membership tests on type, status and priority, every
//! requested tag present, then `skip` / `limit` paging.

#[cfg(test)]
#[path = "learning_test.rs"]
mod learning_test;

use serde::{Deserialize, Serialize};

use super::editor::EditorContent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Book,
    #[default]
    Article,
    Video,
    Podcast,
    Course,
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Archived,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl ContentType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Article => "Article",
            Self::Video => "Video",
            Self::Podcast => "Podcast",
            Self::Course => "Course",
            Self::Other => "Other",
        }
    }
}

impl ContentStatus {
    pub const ALL: [Self; 4] = [Self::Planned, Self::InProgress, Self::Completed, Self::Archived];

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.wire_name() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

/// One tracked learning item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub priority: ContentPriority,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Completion in `0.0..=1.0`.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub content: EditorContent,
}

impl LearningItem {
    pub fn new(title: impl Into<String>, kind: ContentType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            kind,
            status: ContentStatus::default(),
            priority: ContentPriority::default(),
            author: None,
            summary: None,
            tags: Vec::new(),
            progress: 0.0,
            content: Vec::new(),
        }
    }

    /// Whole-percent progress for display, clamped to `0..=100`.
    pub fn progress_percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8;
        pct
    }

    /// Case-insensitive match of a lowercased `needle` against title, summary
    /// and author.
    fn matches_query(&self, needle: &str) -> bool {
        [Some(self.title.as_str()), self.summary.as_deref(), self.author.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

pub const DEFAULT_LIMIT: usize = 100;
pub const MAX_LIMIT: usize = 1000;

/// List filters. Empty lists and a blank query match everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentFilters {
    pub query: Option<String>,
    pub types: Vec<ContentType>,
    pub statuses: Vec<ContentStatus>,
    pub priorities: Vec<ContentPriority>,
    /// Every tag listed must be on the item.
    pub tags: Vec<String>,
    pub skip: usize,
    /// Clamped to `1..=MAX_LIMIT` when applied.
    pub limit: usize,
}

impl Default for ContentFilters {
    fn default() -> Self {
        Self {
            query: None,
            types: Vec::new(),
            statuses: Vec::new(),
            priorities: Vec::new(),
            tags: Vec::new(),
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ContentFilters {
    /// Add `tag` to the required tags, or remove it if already required.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_owned());
        }
    }
}

/// Items matching `filters`, in their original order.
pub fn filter_items(items: &[LearningItem], filters: &ContentFilters) -> Vec<LearningItem> {
    let needle = filters.query.as_deref().map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase);

    items
        .iter()
        .filter(|item| needle.as_deref().is_none_or(|q| item.matches_query(q)))
        .filter(|item| filters.types.is_empty() || filters.types.contains(&item.kind))
        .filter(|item| filters.statuses.is_empty() || filters.statuses.contains(&item.status))
        .filter(|item| filters.priorities.is_empty() || filters.priorities.contains(&item.priority))
        .filter(|item| filters.tags.iter().all(|tag| item.tags.contains(tag)))
        .skip(filters.skip)
        .take(filters.limit.clamp(1, MAX_LIMIT))
        .cloned()
        .collect()
}

/// Remove the item with `id`, returning whether anything was removed.
pub fn remove_item(items: &mut Vec<LearningItem>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Items shown on a fresh home page.
pub fn sample_items() -> Vec<LearningItem> {
    let mut book = LearningItem::new("The Rust Programming Language", ContentType::Book);
    book.author = Some("Steve Klabnik, Carol Nichols".to_owned());
    book.status = ContentStatus::InProgress;
    book.priority = ContentPriority::High;
    book.progress = 0.45;
    book.summary = Some("Ownership, traits and fearless concurrency from the ground up.".to_owned());
    book.tags = vec!["rust".to_owned(), "programming".to_owned()];

    let mut talk = LearningItem::new("Fine-grained reactivity explained", ContentType::Video);
    talk.progress = 0.0;
    talk.summary = Some("How signals track dependencies and update only what changed.".to_owned());
    talk.tags = vec!["frontend".to_owned(), "programming".to_owned()];

    let mut course = LearningItem::new("Distributed systems lecture series", ContentType::Course);
    course.status = ContentStatus::Completed;
    course.progress = 1.0;
    course.priority = ContentPriority::Low;
    course.tags = vec!["distributed-systems".to_owned()];

    vec![book, talk, course]
}
