//! Forum interaction store.
//!
//! Owns the post collection and applies every mutation. Operations are
//! synchronous and atomic under a single lock; unknown post or comment ids
//! match nothing and mutate nothing. Readers get cloned snapshots, never a
//! handle into the underlying collection.

use super::{seed, Comment, ForumPost};
use log::debug;
use std::sync::RwLock;
use uuid::Uuid;

pub struct ForumStore {
    posts: RwLock<Vec<ForumPost>>,
}

impl Default for ForumStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ForumStore {
    /// Store seeded with the stock discussions
    pub fn new() -> Self {
        Self::with_posts(seed::seed_posts())
    }

    pub fn with_posts(posts: Vec<ForumPost>) -> Self {
        ForumStore {
            posts: RwLock::new(posts),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().unwrap().is_empty()
    }

    /// Snapshot of one post
    pub fn get(&self, post_id: u64) -> Option<ForumPost> {
        self.posts
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
    }

    /// Posts surviving the category + search filter, in original order.
    /// Returns clones; mutating the result does not touch the store.
    pub fn visible_posts(&self, category: &str, query: &str) -> Vec<ForumPost> {
        self.posts
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.matches(category, query))
            .cloned()
            .collect()
    }

    /// Flip the like state of a post, moving its counter in lockstep
    pub fn toggle_like_post(&self, post_id: u64) {
        let mut posts = self.posts.write().unwrap();
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            toggle_like(&mut post.likes, &mut post.is_liked);
        }
    }

    /// Flip the like state of one comment inside one post
    pub fn toggle_like_comment(&self, post_id: u64, comment_id: Uuid) {
        let mut posts = self.posts.write().unwrap();
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            if let Some(comment) = post.comments.iter_mut().find(|c| c.id == comment_id) {
                toggle_like(&mut comment.likes, &mut comment.is_liked);
            }
        }
    }

    /// Flip whether a post's comment thread is expanded (presentational)
    pub fn toggle_comments(&self, post_id: u64) {
        let mut posts = self.posts.write().unwrap();
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.show_comments = !post.show_comments;
        }
    }

    /// Append a comment to a post. Whitespace-only text is dropped without
    /// error. Comments stay in creation order; the post's reply counter
    /// moves with the append.
    pub fn add_comment(&self, post_id: u64, author: &str, text: &str) {
        if text.trim().is_empty() {
            debug!("Ignoring empty comment for post {}", post_id);
            return;
        }

        let mut posts = self.posts.write().unwrap();
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.comments.push(Comment::new(author, text));
            post.replies += 1;
        }
    }
}

/// Like toggles carry at most one unit of influence: liking increments,
/// un-liking takes that same unit back.
fn toggle_like(likes: &mut u32, is_liked: &mut bool) {
    if *is_liked {
        *likes = likes.saturating_sub(1);
    } else {
        *likes += 1;
    }
    *is_liked = !*is_liked;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_post_round_trip() {
        let store = ForumStore::new();
        let before = store.get(1).unwrap();
        assert_eq!(before.likes, 24);
        assert!(!before.is_liked);

        store.toggle_like_post(1);
        let liked = store.get(1).unwrap();
        assert_eq!(liked.likes, 25);
        assert!(liked.is_liked);

        store.toggle_like_post(1);
        let unliked = store.get(1).unwrap();
        assert_eq!(unliked.likes, 24);
        assert!(!unliked.is_liked);
    }

    #[test]
    fn test_like_unknown_post_is_noop() {
        let store = ForumStore::new();
        store.toggle_like_post(999);
        let likes: Vec<u32> = store.visible_posts("all", "").iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![24, 18, 32]);
    }

    #[test]
    fn test_like_comment_only_touches_target() {
        let store = ForumStore::new();
        let post = store.get(1).unwrap();
        let target = post.comments[0].id;
        let other = post.comments[1].clone();

        store.toggle_like_comment(1, target);
        let post = store.get(1).unwrap();
        assert_eq!(post.comments[0].likes, 6);
        assert!(post.comments[0].is_liked);
        assert_eq!(post.comments[1], other);

        store.toggle_like_comment(1, target);
        let post = store.get(1).unwrap();
        assert_eq!(post.comments[0].likes, 5);
        assert!(!post.comments[0].is_liked);
    }

    #[test]
    fn test_toggle_comments_visibility() {
        let store = ForumStore::new();
        assert!(!store.get(2).unwrap().show_comments);
        store.toggle_comments(2);
        assert!(store.get(2).unwrap().show_comments);
        store.toggle_comments(2);
        assert!(!store.get(2).unwrap().show_comments);
    }

    #[test]
    fn test_add_comment_appends_and_counts() {
        let store = ForumStore::new();
        let before = store.get(3).unwrap();

        store.add_comment(3, "Current User", "Check hose clamps for rust.");

        let after = store.get(3).unwrap();
        assert_eq!(after.comments.len(), before.comments.len() + 1);
        assert_eq!(after.replies, before.replies + 1);

        let added = after.comments.last().unwrap();
        assert_eq!(added.author, "Current User");
        assert_eq!(added.likes, 0);
        assert!(!added.is_liked);
    }

    #[test]
    fn test_add_comment_preserves_order() {
        let store = ForumStore::new();
        store.add_comment(1, "A", "first new");
        store.add_comment(1, "B", "second new");

        let post = store.get(1).unwrap();
        let authors: Vec<&str> = post.comments.iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, vec!["Mike Smith", "Emma Davis", "A", "B"]);
    }

    #[test]
    fn test_add_whitespace_comment_is_rejected() {
        let store = ForumStore::new();
        let before = store.get(1).unwrap();

        store.add_comment(1, "Current User", "");
        store.add_comment(1, "Current User", "   \t\n");

        let after = store.get(1).unwrap();
        assert_eq!(after.comments.len(), before.comments.len());
        assert_eq!(after.replies, before.replies);
    }

    #[test]
    fn test_visible_posts_all_is_identity() {
        let store = ForumStore::new();
        let ids: Vec<u64> = store.visible_posts("all", "").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_visible_posts_category_filter() {
        let store = ForumStore::new();
        let equipment = store.visible_posts("equipment", "");
        assert_eq!(equipment.len(), 1);
        assert_eq!(equipment[0].id, 2);
    }

    #[test]
    fn test_visible_posts_search_is_anded_with_category() {
        let store = ForumStore::new();
        // "checklist" appears in post 3 only; the equipment category excludes it
        assert_eq!(store.visible_posts("all", "checklist").len(), 1);
        assert!(store.visible_posts("equipment", "checklist").is_empty());
    }

    #[test]
    fn test_view_serializes_for_rendering() {
        let store = ForumStore::new();
        let json = serde_json::to_string(&store.visible_posts("all", "")).unwrap();
        assert!(json.contains("Best practices for LPG cylinder storage"));
        assert!(json.contains("\"show_comments\":false"));
    }

    #[test]
    fn test_view_is_detached_from_store() {
        let store = ForumStore::new();
        let mut view = store.visible_posts("all", "");
        view[0].likes = 9999;
        view[0].comments.clear();

        let post = store.get(1).unwrap();
        assert_eq!(post.likes, 24);
        assert_eq!(post.comments.len(), 2);
    }
}
