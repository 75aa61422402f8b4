//! # Feature: Notification Capability
//!
//! Abstraction over the host's notification surface. The core never talks to
//! an OS notification API directly; embedders hand the scheduler whatever
//! [`NotificationChannel`] their platform provides. Permission is queried at
//! delivery time, never cached by this module.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Permission state of the host notification surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPermission {
    /// Not yet asked
    #[default]
    Default,
    Granted,
    Denied,
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Host notification surface. Implementations decide how a notification is
/// actually shown and how the permission prompt resolves.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Whether the host supports notifications at all
    fn is_supported(&self) -> bool {
        true
    }

    /// Current permission state, without prompting
    async fn permission(&self) -> NotificationPermission;

    /// Prompt the user and suspend until they answer. Implementations may
    /// resolve immediately from a cached answer.
    async fn request_permission(&self) -> NotificationPermission;

    /// Show a notification now
    async fn deliver(&self, notification: Notification) -> Result<()>;
}

/// Ask for notification permission, mirroring the usual platform flow:
/// unsupported hosts report `false` without suspending, an existing grant
/// short-circuits, otherwise the user is prompted.
pub async fn request_notification_permission(channel: &dyn NotificationChannel) -> bool {
    if !channel.is_supported() {
        return false;
    }
    if channel.permission().await == NotificationPermission::Granted {
        return true;
    }
    channel.request_permission().await == NotificationPermission::Granted
}

/// In-memory channel for tests and headless embedders. Delivered
/// notifications are retained for inspection.
#[derive(Debug)]
pub struct InMemoryChannel {
    permission: Mutex<NotificationPermission>,
    delivered: Mutex<Vec<Notification>>,
    /// What the permission prompt resolves to; defaults to granting
    prompt_answer: NotificationPermission,
}

impl Default for InMemoryChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryChannel {
    pub fn new() -> Self {
        InMemoryChannel {
            permission: Mutex::new(NotificationPermission::Default),
            delivered: Mutex::new(Vec::new()),
            prompt_answer: NotificationPermission::Granted,
        }
    }

    /// Channel that starts with permission already granted
    pub fn granted() -> Self {
        let channel = Self::new();
        channel.set_permission(NotificationPermission::Granted);
        channel
    }

    /// Channel whose prompt the user will refuse
    pub fn refusing() -> Self {
        let mut channel = Self::new();
        channel.prompt_answer = NotificationPermission::Denied;
        channel
    }

    pub fn set_permission(&self, permission: NotificationPermission) {
        *self.permission.lock().unwrap() = permission;
    }

    /// Snapshot of everything delivered so far
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationChannel for InMemoryChannel {
    async fn permission(&self) -> NotificationPermission {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> NotificationPermission {
        let mut permission = self.permission.lock().unwrap();
        if *permission == NotificationPermission::Default {
            *permission = self.prompt_answer;
        }
        *permission
    }

    async fn deliver(&self, notification: Notification) -> Result<()> {
        self.delivered.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Channel for hosts without any notification surface. Every call reports
/// the capability as absent; nothing is ever shown.
#[derive(Debug, Default)]
pub struct UnsupportedChannel;

#[async_trait]
impl NotificationChannel for UnsupportedChannel {
    fn is_supported(&self) -> bool {
        false
    }

    async fn permission(&self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    async fn request_permission(&self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    async fn deliver(&self, _notification: Notification) -> Result<()> {
        anyhow::bail!("this host does not support notifications")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_request_permission_grants_once() {
        let channel = InMemoryChannel::new();
        assert_eq!(channel.permission().await, NotificationPermission::Default);

        assert!(request_notification_permission(&channel).await);
        assert_eq!(channel.permission().await, NotificationPermission::Granted);

        // Second request short-circuits on the existing grant
        assert!(request_notification_permission(&channel).await);
    }

    #[tokio::test]
    async fn test_refused_prompt_sticks() {
        let channel = InMemoryChannel::refusing();
        assert!(!request_notification_permission(&channel).await);
        assert_eq!(channel.permission().await, NotificationPermission::Denied);
    }

    #[tokio::test]
    async fn test_unsupported_host_reports_false() {
        let channel = UnsupportedChannel;
        assert!(!request_notification_permission(&channel).await);
    }

    #[tokio::test]
    async fn test_delivery_is_recorded() {
        let channel = InMemoryChannel::granted();
        channel
            .deliver(Notification::new("Title", "Body"))
            .await
            .unwrap();
        let delivered = channel.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].title, "Title");
    }
}
