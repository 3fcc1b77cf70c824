//! Transient user feedback messages.
//!
//! Append-only queue ordered by creation time; entries expire on a fixed
//! timer and there is no manual dismiss.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::time::Duration;

/// Identifier for a notification, unique for the lifetime of the page.
pub type NotificationId = u64;

/// How long a notification stays visible before its expiry task removes it.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// One transient feedback message.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

/// Queue of visible notifications plus the id allocator.
///
/// Ids come from a counter rather than the list maximum because expiry
/// removes entries; a pending timer must never see its id reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationsState {
    /// Append a notification and return its identifier so the caller can
    /// schedule the expiry task.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the notification with `id`. Idempotent; a no-op when the
    /// identifier no longer resolves.
    pub fn remove(&mut self, id: NotificationId) {
        self.items.retain(|n| n.id != id);
    }
}
