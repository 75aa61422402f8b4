//! Runtime configuration loaded from the environment.
//!
//! All values have sensible defaults so an embedding app can run without any
//! environment at all. A `.env` file is honored when present.

use dotenvy::dotenv;
use std::env;

/// Lead time between the reminder firing and the projected refill date.
pub const DEFAULT_REMINDER_LEAD_DAYS: i64 = 3;

/// The most common cylinder size in the target market (kg).
pub const DEFAULT_CYLINDER_KG: f64 = 14.5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Days before the projected refill date to fire the reminder
    pub reminder_lead_days: i64,
    /// Author name attached to comments created through this instance
    pub comment_author: String,
    /// Pre-selected cylinder capacity for projection defaults (kg)
    pub default_cylinder_kg: f64,
    /// Pre-selected usage pattern key for projection defaults
    pub default_pattern: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let reminder_lead_days = env::var("LPG_REMINDER_LEAD_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_REMINDER_LEAD_DAYS);

        let comment_author =
            env::var("LPG_COMMENT_AUTHOR").unwrap_or_else(|_| "Current User".to_string());

        let default_cylinder_kg = env::var("LPG_DEFAULT_CYLINDER_KG")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_CYLINDER_KG);

        let default_pattern =
            env::var("LPG_DEFAULT_PATTERN").unwrap_or_else(|_| "medium-household".to_string());

        Config {
            reminder_lead_days,
            comment_author,
            default_cylinder_kg,
            default_pattern,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reminder_lead_days: DEFAULT_REMINDER_LEAD_DAYS,
            comment_author: "Current User".to_string(),
            default_cylinder_kg: DEFAULT_CYLINDER_KG,
            default_pattern: "medium-household".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reminder_lead_days, 3);
        assert_eq!(config.comment_author, "Current User");
        assert_eq!(config.default_pattern, "medium-household");
    }
}
