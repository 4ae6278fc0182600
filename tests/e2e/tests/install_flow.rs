//! E2E: Install Prompt Flow
//!
//! Walks the controller through the full installability flow: signal
//! arrival, banner, dialog trigger, and the post-install cleanup.

use skiff_install::ui::{BANNER_AUTO_DISMISS_MS, SUCCESS_AUTO_DISMISS_MS};
use skiff_install::{
    DisplayMode, InstallController, InstallPrompt, InstallReadiness, PromptOutcome, SignalState,
    TriggerResult, UiAction,
};

struct ScriptedPrompt {
    outcome: PromptOutcome,
}

impl InstallPrompt for ScriptedPrompt {
    fn prevent_default(&mut self) {}

    fn show(&mut self) -> PromptOutcome {
        self.outcome
    }
}

fn accepting() -> Box<ScriptedPrompt> {
    Box::new(ScriptedPrompt {
        outcome: PromptOutcome::Accepted,
    })
}

fn dismissing() -> Box<ScriptedPrompt> {
    Box::new(ScriptedPrompt {
        outcome: PromptOutcome::Dismissed,
    })
}

#[test]
fn accepted_install_full_flow() {
    let mut controller = InstallController::new();

    let actions = controller.on_installability_signal(accepting());
    assert_eq!(actions[0], UiAction::ShowInstallControl);
    let banner = match &actions[1] {
        UiAction::ShowBanner(fragment) => fragment,
        other => panic!("expected banner, got {:?}", other),
    };
    assert_eq!(banner.auto_dismiss_ms, Some(BANNER_AUTO_DISMISS_MS));
    assert!(controller.control_visible());

    let (result, actions) = controller.trigger_install();
    assert_eq!(result, TriggerResult::Accepted);
    let alert = match &actions[0] {
        UiAction::ShowAlert(fragment) => fragment,
        other => panic!("expected alert, got {:?}", other),
    };
    assert_eq!(alert.auto_dismiss_ms, Some(SUCCESS_AUTO_DISMISS_MS));
    assert_eq!(actions[1], UiAction::HideInstallControl);
    assert!(!controller.control_visible());
}

#[test]
fn dismissed_install_shows_no_confirmation() {
    let mut controller = InstallController::new();
    controller.on_installability_signal(dismissing());

    let (result, actions) = controller.trigger_install();

    assert_eq!(result, TriggerResult::Dismissed);
    assert_eq!(actions, vec![UiAction::HideInstallControl]);
}

#[test]
fn second_trigger_produces_no_dialog() {
    let mut controller = InstallController::new();
    controller.on_installability_signal(accepting());
    controller.trigger_install();

    let (result, actions) = controller.trigger_install();

    assert_eq!(result, TriggerResult::AlreadyConsumed);
    assert!(actions.is_empty());
    assert_eq!(controller.signal_state(), SignalState::Consumed);
}

#[test]
fn trigger_before_any_signal_is_silent() {
    let mut controller = InstallController::new();
    let (result, actions) = controller.trigger_install();
    assert_eq!(result, TriggerResult::NoSignal);
    assert!(actions.is_empty());
}

#[test]
fn menu_install_hides_control_without_trigger() {
    let mut controller = InstallController::new();
    controller.on_installability_signal(accepting());

    // The platform completed the install on its own (e.g. browser menu).
    let actions = controller.on_installed();

    assert_eq!(actions, [UiAction::HideInstallControl]);
    let (result, _) = controller.trigger_install();
    assert_eq!(result, TriggerResult::AlreadyConsumed);
}

#[test]
fn readiness_report_explains_missing_signal() {
    let readiness = InstallReadiness {
        secure_context: true,
        worker_supported: true,
        manifest_present: false,
        has_icons: true,
    };
    let report = readiness.check();
    assert!(!report.is_installable());
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn standalone_launch_detected() {
    assert!(DisplayMode::Standalone.is_standalone());
    assert!(!DisplayMode::Browser.is_standalone());
}
