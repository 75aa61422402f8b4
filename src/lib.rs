// Core layer - shared configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// Re-export core config for convenience
pub use crate::core::Config;

// Re-export feature items so embedders can use `lpgmate::ForumStore` etc.
pub use features::{
    // Assistant
    ChatMessage, ChatRole, SafetyAssistant, COMMON_QUESTIONS,
    // Calculator
    find_pattern, project_usage, CalculatorError, UsagePattern, UsageProjection, USAGE_PATTERNS,
    // Forum
    category_name, is_valid_category, Comment, ForumPost, ForumStore, CATEGORIES,
    // Notifications
    request_notification_permission, InMemoryChannel, Notification, NotificationChannel,
    NotificationPermission, UnsupportedChannel,
    // Reminders
    ReminderScheduler,
};
