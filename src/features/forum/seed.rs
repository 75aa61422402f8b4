//! Seed discussions shown before any real traffic exists.

use super::{Comment, ForumPost};
use chrono::NaiveDate;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn comment(author: &str, content: &str, posted: NaiveDate, likes: u32) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        author: author.to_string(),
        content: content.to_string(),
        date: posted,
        likes,
        is_liked: false,
    }
}

/// The initial post collection, in display order.
pub fn seed_posts() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: 1,
            title: "Best practices for LPG cylinder storage".to_string(),
            content: "I recently moved to a new house and want to ensure I'm storing my LPG \
                      cylinders correctly. What are the essential safety measures I should take?"
                .to_string(),
            author: "Sarah Johnson".to_string(),
            date: date(2025, 3, 15),
            category: "safety-tips".to_string(),
            likes: 24,
            replies: 12,
            tags: vec![
                "storage".to_string(),
                "safety".to_string(),
                "residential".to_string(),
            ],
            is_liked: false,
            show_comments: false,
            comments: vec![
                comment(
                    "Mike Smith",
                    "Always store cylinders upright in a well-ventilated area away from direct sunlight.",
                    date(2025, 3, 15),
                    5,
                ),
                comment(
                    "Emma Davis",
                    "Don't forget to maintain at least 3 feet distance from any electrical outlets!",
                    date(2025, 3, 15),
                    3,
                ),
            ],
        },
        ForumPost {
            id: 2,
            title: "Automatic Gas Leak Detector Recommendations".to_string(),
            content: "Looking for recommendations on reliable automatic gas leak detectors. \
                      Which brands and models do you trust?"
                .to_string(),
            author: "Michael Chen".to_string(),
            date: date(2025, 3, 14),
            category: "equipment".to_string(),
            likes: 18,
            replies: 15,
            tags: vec![
                "equipment".to_string(),
                "safety".to_string(),
                "detectors".to_string(),
            ],
            is_liked: false,
            show_comments: false,
            comments: vec![comment(
                "Lisa Wong",
                "I've been using the SafeGuard Pro for 2 years now, highly recommend it!",
                date(2025, 3, 14),
                7,
            )],
        },
        ForumPost {
            id: 3,
            title: "Monthly Maintenance Checklist Discussion".to_string(),
            content: "Let's create a comprehensive monthly maintenance checklist for LPG \
                      systems. What items should be included?"
                .to_string(),
            author: "David Miller".to_string(),
            date: date(2025, 3, 13),
            category: "maintenance".to_string(),
            likes: 32,
            replies: 20,
            tags: vec![
                "maintenance".to_string(),
                "checklist".to_string(),
                "safety".to_string(),
            ],
            is_liked: false,
            show_comments: false,
            comments: vec![comment(
                "John Cooper",
                "Regular inspection of hoses and connections is crucial.",
                date(2025, 3, 13),
                9,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_posts_are_stable() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].likes, 24);
        assert_eq!(posts[0].comments.len(), 2);
        assert_eq!(posts[1].category, "equipment");
        assert_eq!(posts[2].category, "maintenance");
    }

    #[test]
    fn test_seed_post_ids_unique() {
        let posts = seed_posts();
        let mut ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }
}
