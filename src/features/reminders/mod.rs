//! # Reminders Feature
//!
//! One-shot refill reminders tied to a projected refill date.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true

pub mod scheduler;

pub use scheduler::ReminderScheduler;
