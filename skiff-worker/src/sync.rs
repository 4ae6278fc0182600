//! Background Sync Events
//!
//! The worker performs a single fire-and-forget call to the configured
//! synchronization endpoint when a matching tagged sync event arrives.
//! Retry scheduling belongs to the platform's sync scheduler; the event
//! carries its `last_chance` signal through unchanged.

use alloc::string::String;

/// A background sync event delivered by the platform.
#[derive(Debug, Clone)]
pub struct SyncEvent {
    /// Registration tag.
    pub tag: String,
    /// Whether the platform will not retry after this attempt.
    pub last_chance: bool,
}

impl SyncEvent {
    /// Create a new sync event.
    pub fn new(tag: impl Into<String>, last_chance: bool) -> Self {
        Self {
            tag: tag.into(),
            last_chance,
        }
    }
}

/// Outcome of handling one sync event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The synchronization call went through.
    Synced,
    /// The call failed; the platform scheduler may retry.
    Failed,
    /// The tag is not one this worker responds to.
    Ignored,
}
