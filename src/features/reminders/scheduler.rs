//! # Feature: Refill Reminder Scheduler
//!
//! Schedules a single deferred notification ahead of a projected refill
//! date. Timers are fire-and-forget: no handle is retained, so scheduling a
//! new reminder does not cancel one already in flight. Permission is checked
//! when the timer fires, not when it is armed; a reminder whose fire time
//! has already passed is skipped silently.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Lead time sourced from Config; single default shared with the config layer
//! - 1.0.0: Initial release with lead-time reminders over a NotificationChannel

use crate::core::config::{Config, DEFAULT_REMINDER_LEAD_DAYS};
use crate::features::notifications::{Notification, NotificationChannel, NotificationPermission};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

const REMINDER_TITLE: &str = "LPG Refill Reminder";
// Fixed copy; intentionally not parameterized by the configured lead time
const REMINDER_BODY: &str = "Your gas cylinder will need a refill in 3 days. \
     Please schedule your refill to avoid running out.";

pub struct ReminderScheduler {
    channel: Arc<dyn NotificationChannel>,
    lead_days: i64,
}

impl ReminderScheduler {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        ReminderScheduler {
            channel,
            lead_days: DEFAULT_REMINDER_LEAD_DAYS,
        }
    }

    /// Scheduler with the lead time taken from [`Config`]
    pub fn from_config(channel: Arc<dyn NotificationChannel>, config: &Config) -> Self {
        Self::new(channel).with_lead_days(config.reminder_lead_days)
    }

    /// Override the lead time (the notification copy still says "3 days")
    pub fn with_lead_days(mut self, lead_days: i64) -> Self {
        self.lead_days = lead_days;
        self
    }

    /// Instant at which a reminder for `refill_date` fires: UTC midnight of
    /// the refill date, minus the lead time.
    pub fn reminder_time(&self, refill_date: NaiveDate) -> DateTime<Utc> {
        let midnight = refill_date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            .and_utc();
        midnight - Duration::days(self.lead_days)
    }

    /// Arm a one-shot reminder for the given refill date.
    ///
    /// Returns whether a timer was actually created. A fire time already in
    /// the past is a silent skip: the refill is imminent or overdue and a
    /// "plan ahead" nudge would be noise.
    ///
    /// Must be called from within a tokio runtime; the timer task is spawned
    /// onto it and `tokio::spawn` panics without one.
    pub fn schedule_refill_reminder(&self, refill_date: NaiveDate) -> bool {
        if !self.channel.is_supported() {
            warn!("This host does not support notifications; refill reminder dropped");
            return false;
        }

        let fire_at = self.reminder_time(refill_date);
        self.schedule_at(fire_at)
    }

    fn schedule_at(&self, fire_at: DateTime<Utc>) -> bool {
        let now = Utc::now();
        if fire_at < now {
            debug!("Reminder time {} already passed; not scheduling", fire_at);
            return false;
        }

        let wait = (fire_at - now).to_std().unwrap_or_default();
        let channel = Arc::clone(&self.channel);

        // No handle kept: a second schedule call leaves both timers live
        tokio::spawn(async move {
            tokio::time::sleep(wait).await;

            if channel.permission().await != NotificationPermission::Granted {
                debug!("Notification permission not granted at fire time; reminder skipped");
                return;
            }

            if let Err(e) = channel
                .deliver(Notification::new(REMINDER_TITLE, REMINDER_BODY))
                .await
            {
                warn!("Failed to deliver refill reminder: {}", e);
            }
        });

        info!("Refill reminder armed for {}", fire_at);
        true
    }
}
