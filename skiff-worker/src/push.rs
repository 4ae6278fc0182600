//! Push Events and Notifications
//!
//! A push delivery becomes a notification with the shell's fixed title,
//! a body taken from the payload text (or a generic placeholder), and two
//! actions: explore (open the app root) and close (dismiss). Payloads are
//! treated as plain text; there is no validation or deduplication.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::config::WorkerConfig;

/// Placeholder body when a push arrives without a payload.
pub const FALLBACK_NOTIFICATION_BODY: &str = "New notification";

/// Vibration pattern used for every notification (ms on/off/on).
pub const VIBRATE_PATTERN: [u32; 3] = [200, 100, 200];

/// A push event delivered by the platform.
#[derive(Debug, Clone)]
pub struct PushEvent {
    data: Option<Vec<u8>>,
}

impl PushEvent {
    /// Create a new push event.
    pub fn new(data: Option<Vec<u8>>) -> Self {
        Self { data }
    }

    /// Raw payload bytes.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Payload as text, if present and valid UTF-8.
    pub fn text(&self) -> Option<String> {
        self.data
            .as_ref()
            .and_then(|d| core::str::from_utf8(d).ok().map(|s| s.to_string()))
    }
}

/// One notification action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    /// Action identifier reported back on click.
    pub action: String,
    /// Button label.
    pub title: String,
    /// Button icon route.
    pub icon: String,
}

/// A displayed notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Icon route.
    pub icon: String,
    /// Badge route.
    pub badge: String,
    /// Vibration pattern.
    pub vibrate: Vec<u32>,
    /// Action buttons.
    pub actions: Vec<NotificationAction>,
}

/// Build the notification for a push event.
pub fn build_notification(event: &PushEvent, config: &WorkerConfig) -> Notification {
    let body = event
        .text()
        .unwrap_or_else(|| FALLBACK_NOTIFICATION_BODY.to_string());

    Notification {
        title: config.notification_title.clone(),
        body,
        icon: config.notification_icon.clone(),
        badge: config.notification_badge.clone(),
        vibrate: VIBRATE_PATTERN.to_vec(),
        actions: alloc::vec![
            NotificationAction {
                action: String::from("explore"),
                title: String::from("View"),
                icon: config.notification_badge.clone(),
            },
            NotificationAction {
                action: String::from("close"),
                title: String::from("Close"),
                icon: config.notification_badge.clone(),
            },
        ],
    }
}

/// A click on a displayed notification.
#[derive(Debug, Clone)]
pub struct NotificationClick {
    /// The action button clicked, if any.
    pub action: Option<String>,
}

impl NotificationClick {
    /// Click on an action button.
    pub fn on_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
        }
    }

    /// Click outside any action button.
    pub fn plain() -> Self {
        Self { action: None }
    }
}

/// What the host should do after a notification click. The notification
/// itself is always closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Open a window at the given URL.
    OpenWindow(String),
    /// Just dismiss.
    Dismissed,
}
