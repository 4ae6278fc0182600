//! Install Readiness
//!
//! Diagnostics for the platform's install preconditions, and detection of
//! an already-installed (standalone) launch. Useful for surfacing why the
//! installability signal never arrives.

use alloc::vec::Vec;

/// How the app was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Regular browser tab.
    Browser,
    /// Minimal browser chrome.
    MinimalUi,
    /// Standalone app window.
    Standalone,
    /// Fullscreen.
    Fullscreen,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Browser
    }
}

impl DisplayMode {
    /// Whether the app is running as an installed app.
    pub fn is_standalone(&self) -> bool {
        matches!(self, Self::Standalone | Self::Fullscreen)
    }
}

/// Observed install preconditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallReadiness {
    /// Served over a secure context (or localhost).
    pub secure_context: bool,
    /// The platform supports proxy workers.
    pub worker_supported: bool,
    /// A manifest link is present in the document.
    pub manifest_present: bool,
    /// The required icon sizes are available.
    pub has_icons: bool,
}

/// A failed precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessError {
    /// Not a secure context.
    InsecureContext,
    /// No proxy worker support.
    NoWorkerSupport,
    /// No manifest link.
    NoManifest,
    /// Missing icons.
    NoIcons,
}

impl core::fmt::Display for ReadinessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadinessError::InsecureContext => write!(f, "not served over a secure context"),
            ReadinessError::NoWorkerSupport => write!(f, "proxy workers unsupported"),
            ReadinessError::NoManifest => write!(f, "no manifest link in document"),
            ReadinessError::NoIcons => write!(f, "required icons missing"),
        }
    }
}

/// Result of a readiness check.
#[derive(Debug, Clone)]
pub struct ReadinessReport {
    /// Failed preconditions, in check order.
    pub errors: Vec<ReadinessError>,
}

impl ReadinessReport {
    /// Whether the platform can be expected to signal installability.
    pub fn is_installable(&self) -> bool {
        self.errors.is_empty()
    }
}

impl InstallReadiness {
    /// Check the preconditions and report everything that fails.
    pub fn check(&self) -> ReadinessReport {
        let mut errors = Vec::new();

        if !self.secure_context {
            errors.push(ReadinessError::InsecureContext);
        }
        if !self.worker_supported {
            errors.push(ReadinessError::NoWorkerSupport);
        }
        if !self.manifest_present {
            errors.push(ReadinessError::NoManifest);
        }
        if !self.has_icons {
            errors.push(ReadinessError::NoIcons);
        }

        for error in &errors {
            log::debug!("[InstallPrompt] readiness: {}", error);
        }

        ReadinessReport { errors }
    }
}
