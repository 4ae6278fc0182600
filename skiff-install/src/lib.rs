//! Skiff Install Prompt Controller
//!
//! Surfaces an install affordance only when the host platform signals
//! that installation is possible, and drives the resulting dialog. The
//! platform hands the controller an opaque, single-use install prompt;
//! the controller retains it in a single-slot holder, exposes the install
//! control, and consumes the prompt exactly once when the user triggers
//! it. All UI is expressed as [`UiAction`] values the page glue applies;
//! the fragments carry the fixed class names the external CSS framework
//! styles.
//!
//! - `prompt`: the controller, signal slot, and platform prompt trait
//! - `ui`: DOM fragments and auto-dismiss durations
//! - `readiness`: install precondition diagnostics and display mode

#![no_std]

extern crate alloc;

pub mod prompt;
pub mod readiness;
pub mod ui;

pub use prompt::{InstallController, InstallPrompt, PromptOutcome, SignalState, TriggerResult};
pub use readiness::{DisplayMode, InstallReadiness, ReadinessError, ReadinessReport};
pub use ui::{UiAction, UiFragment};
