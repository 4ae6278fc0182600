//! UI Affordances
//!
//! DOM fragments for the install control, the informational banner, and
//! the success confirmation. The class names belong to the externally
//! supplied CSS framework; this module only builds the markup and carries
//! the auto-dismiss durations.

use alloc::string::String;

/// How long the informational banner stays up if untouched.
pub const BANNER_AUTO_DISMISS_MS: u64 = 10_000;

/// How long the success confirmation stays up.
pub const SUCCESS_AUTO_DISMISS_MS: u64 = 5_000;

/// A rendered DOM fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiFragment {
    /// The markup to insert.
    pub html: String,
    /// Auto-dismiss delay, if the fragment expires on its own.
    pub auto_dismiss_ms: Option<u64>,
}

/// An instruction to the page glue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Make the install control visible.
    ShowInstallControl,
    /// Hide the install control.
    HideInstallControl,
    /// Show a dismissible banner.
    ShowBanner(UiFragment),
    /// Show an alert.
    ShowAlert(UiFragment),
}

/// The floating install control. Hidden until an installability signal
/// arrives.
pub fn install_button() -> UiFragment {
    UiFragment {
        html: String::from(
            r#"<button id="install-app-btn" class="btn btn-primary shadow-lg" style="display: none;">
  <i class="fas fa-download me-2"></i>
  Install App
</button>"#,
        ),
        auto_dismiss_ms: None,
    }
}

/// The informational banner shown when installation becomes possible.
pub fn install_banner() -> UiFragment {
    UiFragment {
        html: String::from(
            r#"<div class="toast show position-fixed top-0 end-0 m-3">
  <div class="toast-header bg-primary text-white">
    <i class="fas fa-mobile-alt me-2"></i>
    <strong class="me-auto">Install Skiff!</strong>
    <button type="button" class="btn-close btn-close-white" data-bs-dismiss="toast"></button>
  </div>
  <div class="toast-body">
    You can install Skiff as an app on your device for quick access.
    <div class="mt-2">
      <button class="btn btn-sm btn-primary" data-install-trigger>Install Now</button>
      <button class="btn btn-sm btn-secondary" data-bs-dismiss="toast">Later</button>
    </div>
  </div>
</div>"#,
        ),
        auto_dismiss_ms: Some(BANNER_AUTO_DISMISS_MS),
    }
}

/// The confirmation shown after an accepted installation.
pub fn success_alert() -> UiFragment {
    UiFragment {
        html: String::from(
            r#"<div class="alert alert-success alert-dismissible fade show position-fixed top-0 start-50 translate-middle-x mt-3">
  <i class="fas fa-check-circle me-2"></i>
  Skiff was installed successfully!
  <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
</div>"#,
        ),
        auto_dismiss_ms: Some(SUCCESS_AUTO_DISMISS_MS),
    }
}
