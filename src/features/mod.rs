//! # Features Layer
//!
//! All feature modules of the LPG companion core. Each feature is
//! self-contained; the reminders feature is the only one that depends on
//! another (notifications).

pub mod assistant;
pub mod calculator;
pub mod forum;
pub mod notifications;
pub mod reminders;

// Re-export feature items
pub use assistant::{ChatMessage, ChatRole, SafetyAssistant, COMMON_QUESTIONS};
pub use calculator::{
    find_pattern, project_usage, CalculatorError, UsagePattern, UsageProjection, USAGE_PATTERNS,
};
pub use forum::{
    category_name, is_valid_category, Comment, ForumPost, ForumStore, CATEGORIES,
};
pub use notifications::{
    request_notification_permission, InMemoryChannel, Notification, NotificationChannel,
    NotificationPermission, UnsupportedChannel,
};
pub use reminders::ReminderScheduler;
