//! Control Channel
//!
//! Messages posted to the worker by the controlling page. Only two
//! commands are recognized; anything else is ignored.

use crate::config::extract_json_string;

/// A recognized control message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMessage {
    /// `{"type": "SKIP_WAITING"}`: force immediate activation.
    SkipWaiting,
    /// `{"type": "CLEAR_CACHE"}`: delete every cache partition.
    ClearCache,
}

/// Parse a raw message payload. Returns `None` for unrecognized types or
/// malformed payloads.
pub fn parse_message(raw: &str) -> Option<ClientMessage> {
    match extract_json_string(raw, "type")?.as_str() {
        "SKIP_WAITING" => Some(ClientMessage::SkipWaiting),
        "CLEAR_CACHE" => Some(ClientMessage::ClearCache),
        _ => None,
    }
}
