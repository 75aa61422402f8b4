//! # Feature: Community Forum
//!
//! In-memory discussion store: posts with nested comments, like toggles,
//! and category/text filtering. Single logical user; there is no multi-user
//! double-count protection because there is no second actor.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.2.0: Comment ids switched to UUIDs
//! - 1.1.0: Category/search filtering over a read-only view
//! - 1.0.0: Initial release with seeded posts, likes, and comments

pub mod seed;
pub mod store;

pub use store::ForumStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Forum categories (id, display name). `"all"` is the match-everything
/// filter, not a category a post can carry.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Topics"),
    ("safety-tips", "Safety Tips"),
    ("equipment", "Equipment"),
    ("maintenance", "Maintenance"),
    ("emergencies", "Emergencies"),
    ("regulations", "Regulations"),
];

/// Validate a category id exists
pub fn is_valid_category(id: &str) -> bool {
    CATEGORIES.iter().any(|(cid, _)| *cid == id)
}

/// Display name for a category id
pub fn category_name(id: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(cid, _)| *cid == id)
        .map(|(_, name)| *name)
}

/// A reply nested under a post. Lifecycle is tied to the parent post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub date: NaiveDate,
    pub likes: u32,
    pub is_liked: bool,
}

impl Comment {
    /// New comment dated today, zero likes, unliked
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Comment {
            id: Uuid::new_v4(),
            author: author.into(),
            content: content.into(),
            date: chrono::Utc::now().date_naive(),
            likes: 0,
            is_liked: false,
        }
    }
}

/// A forum discussion. `replies` is the displayed reply counter and may
/// exceed `comments.len()` for seeded posts (older replies are not loaded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: String,
    pub likes: u32,
    pub replies: u32,
    pub tags: Vec<String>,
    pub is_liked: bool,
    pub show_comments: bool,
    pub comments: Vec<Comment>,
}

impl ForumPost {
    /// Whether this post survives the category + search filter.
    /// Text matching is a case-insensitive substring test on title or content.
    pub fn matches(&self, category: &str, query: &str) -> bool {
        let matches_category = category == "all" || self.category == category;
        let query = query.to_lowercase();
        let matches_search = self.title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query);
        matches_category && matches_search
    }
}
