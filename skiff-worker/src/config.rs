//! Worker Configuration
//!
//! The fixed inputs of the worker: cache partition names (derived from a
//! version tag), the pre-cache manifest, the offline route, fallback icon,
//! sync endpoint, and notification fields. A config can be built in code
//! or loaded from a JSON string shipped with the shell
//! (`shell_config.json`).

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Configuration of one worker version.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Version tag the partition names are derived from.
    pub version: String,
    /// Base partition name.
    pub base_cache: String,
    /// Static-asset partition name.
    pub static_cache: String,
    /// Dynamic-content partition name.
    pub dynamic_cache: String,
    /// Essential assets fetched into the static partition on install.
    pub precache_urls: Vec<String>,
    /// Route serving the full offline fallback document.
    pub offline_path: String,
    /// Placeholder icon served when an image fetch fails.
    pub fallback_icon_path: String,
    /// Background sync tag this worker responds to.
    pub sync_tag: String,
    /// Endpoint hit on a background sync event.
    pub sync_endpoint: String,
    /// Fixed title of push notifications.
    pub notification_title: String,
    /// Notification icon route.
    pub notification_icon: String,
    /// Notification badge route.
    pub notification_badge: String,
    /// App root opened from a notification's explore action.
    pub app_root: String,
}

impl WorkerConfig {
    /// Build a config for the given version tag with the shell defaults.
    pub fn with_version(version: &str) -> Self {
        Self {
            version: String::from(version),
            base_cache: alloc::format!("skiff-{}", version),
            static_cache: alloc::format!("skiff-static-{}", version),
            dynamic_cache: alloc::format!("skiff-dynamic-{}", version),
            precache_urls: alloc::vec![
                String::from("/"),
                String::from("/offline/"),
                String::from("/static/css/style.css"),
                String::from("/static/js/main.js"),
                String::from("/manifest.json"),
                String::from("/static/icons/icon-192x192.png"),
                String::from("/static/icons/icon-512x512.png"),
                // Third-party stylesheets and scripts from CDN
                String::from("https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css"),
                String::from("https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js"),
                String::from("https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"),
                String::from("https://code.jquery.com/jquery-3.6.0.min.js"),
            ],
            offline_path: String::from("/offline/"),
            fallback_icon_path: String::from("/static/icons/icon-192x192.png"),
            sync_tag: String::from("sync-data"),
            sync_endpoint: String::from("/api/sync/"),
            notification_title: String::from("Skiff"),
            notification_icon: String::from("/static/icons/icon-192x192.png"),
            notification_badge: String::from("/static/icons/icon-72x72.png"),
            app_root: String::from("/"),
        }
    }

    /// The partition names considered current. Everything else is purged
    /// on activation.
    pub fn whitelist(&self) -> [&str; 3] {
        [
            self.base_cache.as_str(),
            self.static_cache.as_str(),
            self.dynamic_cache.as_str(),
        ]
    }

    /// Load a config from a JSON string, falling back to the defaults for
    /// absent fields.
    ///
    /// Expected shape:
    /// ```json
    /// {
    ///   "version": "v2",
    ///   "precache": ["/", "/offline/"],
    ///   "offline": "/offline/",
    ///   "fallback_icon": "/static/icons/icon-192x192.png",
    ///   "sync_tag": "sync-data",
    ///   "sync_endpoint": "/api/sync/"
    /// }
    /// ```
    pub fn from_json(json: &str) -> Self {
        let version = extract_json_string(json, "version").unwrap_or_else(|| "v2".to_string());
        let mut config = Self::with_version(&version);

        if let Some(urls) = extract_json_array(json, "precache") {
            config.precache_urls = urls;
        }
        if let Some(offline) = extract_json_string(json, "offline") {
            config.offline_path = offline;
        }
        if let Some(icon) = extract_json_string(json, "fallback_icon") {
            config.fallback_icon_path = icon;
        }
        if let Some(tag) = extract_json_string(json, "sync_tag") {
            config.sync_tag = tag;
        }
        if let Some(endpoint) = extract_json_string(json, "sync_endpoint") {
            config.sync_endpoint = endpoint;
        }
        if let Some(title) = extract_json_string(json, "notification_title") {
            config.notification_title = title;
        }

        config
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self::with_version("v2")
    }
}

// ── JSON helpers ────────────────────────────────────────────

/// Extract a JSON string value for a given key from a flat JSON object.
pub(crate) fn extract_json_string(json: &str, key: &str) -> Option<String> {
    let search = alloc::format!("\"{}\"", key);
    let idx = json.find(&search)?;
    let after = &json[idx + search.len()..];

    // Skip `:` and whitespace
    let colon = after.find(':')?;
    let after_colon = after[colon + 1..].trim_start();

    if let Some(rest) = after_colon.strip_prefix('"') {
        let end = rest.find('"')?;
        Some(String::from(&rest[..end]))
    } else {
        None
    }
}

/// Extract a JSON array of strings for a given key.
pub(crate) fn extract_json_array(json: &str, key: &str) -> Option<Vec<String>> {
    let search = alloc::format!("\"{}\"", key);
    let idx = json.find(&search)?;
    let after = &json[idx + search.len()..];

    let open = after.find('[')?;
    let close = after[open..].find(']')?;
    let inner = &after[open + 1..open + close];

    let mut values = Vec::new();
    let mut rest = inner;
    while let Some(start) = rest.find('"') {
        let tail = &rest[start + 1..];
        let end = tail.find('"')?;
        values.push(String::from(&tail[..end]));
        rest = &tail[end + 1..];
    }
    Some(values)
}

// ── Tests ───────────────────────────────────────────────────
