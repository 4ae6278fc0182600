//! Install Prompt Controller
//!
//! The platform delivers an opaque, single-use install prompt when its
//! installability preconditions are met. The controller keeps it in a
//! single-slot holder with three states (empty, pending, consumed) and
//! consumes it exactly once; a completed install reported by the platform
//! invalidates whatever is retained.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::ui::{self, UiAction};

// ── Platform prompt ─────────────────────────────────────────

/// The user's choice in the installation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user accepted the installation.
    Accepted,
    /// The user dismissed the dialog.
    Dismissed,
}

/// An opaque platform-supplied install prompt. Able to suppress the
/// platform's own mini-UI and to show the installation dialog once.
pub trait InstallPrompt: Send {
    /// Suppress the platform's default install mini-UI.
    fn prevent_default(&mut self);

    /// Show the installation dialog and report the user's choice.
    fn show(&mut self) -> PromptOutcome;
}

// ── Signal slot ─────────────────────────────────────────────

/// Holder for the deferred install prompt.
enum SignalSlot {
    /// No signal has arrived on this page load.
    Empty,
    /// A signal is retained and the dialog can be triggered.
    Pending(Box<dyn InstallPrompt>),
    /// The signal was used or invalidated; a new one must arrive first.
    Consumed,
}

/// Observable state of the signal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Empty,
    Pending,
    Consumed,
}

// ── Controller ──────────────────────────────────────────────

/// Result of a `trigger_install` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerResult {
    /// No signal has been received; nothing happens.
    NoSignal,
    /// The retained signal was already used; nothing happens.
    AlreadyConsumed,
    /// The dialog was shown and the user accepted.
    Accepted,
    /// The dialog was shown and the user dismissed it.
    Dismissed,
}

/// Drives the install affordance for one page load.
pub struct InstallController {
    slot: SignalSlot,
    control_visible: bool,
}

impl InstallController {
    /// Create a controller with an empty slot.
    pub fn new() -> Self {
        Self {
            slot: SignalSlot::Empty,
            control_visible: false,
        }
    }

    /// Observable slot state.
    pub fn signal_state(&self) -> SignalState {
        match self.slot {
            SignalSlot::Empty => SignalState::Empty,
            SignalSlot::Pending(_) => SignalState::Pending,
            SignalSlot::Consumed => SignalState::Consumed,
        }
    }

    /// Whether the install control is currently visible.
    pub fn control_visible(&self) -> bool {
        self.control_visible
    }

    /// The platform signaled that installation is possible. Suppresses
    /// the platform mini-UI, retains the prompt, surfaces the install
    /// control, and shows the informational banner.
    pub fn on_installability_signal(&mut self, mut signal: Box<dyn InstallPrompt>) -> [UiAction; 2] {
        log::info!("[InstallPrompt] installability signal captured");
        signal.prevent_default();
        self.slot = SignalSlot::Pending(signal);
        self.control_visible = true;
        [
            UiAction::ShowInstallControl,
            UiAction::ShowBanner(ui::install_banner()),
        ]
    }

    /// Trigger the installation dialog. Without a retained signal this is
    /// a no-op reported only through the log; the signal is discarded
    /// after a single use whatever the outcome.
    pub fn trigger_install(&mut self) -> (TriggerResult, Vec<UiAction>) {
        match core::mem::replace(&mut self.slot, SignalSlot::Consumed) {
            SignalSlot::Empty => {
                self.slot = SignalSlot::Empty;
                log::info!("[InstallPrompt] no install prompt available");
                (TriggerResult::NoSignal, Vec::new())
            }
            SignalSlot::Consumed => {
                log::info!("[InstallPrompt] install prompt already used");
                (TriggerResult::AlreadyConsumed, Vec::new())
            }
            SignalSlot::Pending(mut signal) => {
                let outcome = signal.show();
                self.control_visible = false;
                match outcome {
                    PromptOutcome::Accepted => {
                        log::info!("[InstallPrompt] user accepted installation");
                        (
                            TriggerResult::Accepted,
                            alloc::vec![
                                UiAction::ShowAlert(ui::success_alert()),
                                UiAction::HideInstallControl,
                            ],
                        )
                    }
                    PromptOutcome::Dismissed => {
                        log::info!("[InstallPrompt] user dismissed installation");
                        (
                            TriggerResult::Dismissed,
                            alloc::vec![UiAction::HideInstallControl],
                        )
                    }
                }
            }
        }
    }

    /// The platform reported a completed install. This can happen without
    /// `trigger_install` (e.g. install via the browser menu); any retained
    /// signal is invalidated.
    pub fn on_installed(&mut self) -> [UiAction; 1] {
        log::info!("[InstallPrompt] app installed");
        self.slot = SignalSlot::Consumed;
        self.control_visible = false;
        [UiAction::HideInstallControl]
    }
}

impl Default for InstallController {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ───────────────────────────────────────────────────
