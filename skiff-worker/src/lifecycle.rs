//! Worker Lifecycle
//!
//! State machine for one worker version, with validated transitions.

/// Worker lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Initial state, script parsed.
    Parsed,
    /// Install event running (pre-cache in progress).
    Installing,
    /// Installed, waiting to activate.
    Installed,
    /// Activate event running (version GC in progress).
    Activating,
    /// Active and controlling clients.
    Activated,
    /// Replaced or unregistered.
    Redundant,
}

impl Default for WorkerState {
    fn default() -> Self {
        Self::Parsed
    }
}

/// Lifecycle error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// The requested state change is not in the transition relation.
    InvalidTransition {
        from: WorkerState,
        to: WorkerState,
    },
}

impl core::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LifecycleError::InvalidTransition { from, to } => {
                write!(f, "invalid lifecycle transition {:?} -> {:?}", from, to)
            }
        }
    }
}

/// Check if a state transition is valid.
fn is_valid_transition(from: WorkerState, to: WorkerState) -> bool {
    use WorkerState::*;

    matches!(
        (from, to),
        (Parsed, Installing)
            | (Installing, Installed)
            | (Installing, Redundant)   // install failed
            | (Installed, Activating)
            | (Activating, Activated)
            | (Activating, Redundant)   // activate failed
            | (Activated, Redundant)    // replaced by a new version
    )
}

/// Lifecycle holder for one worker.
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: WorkerState,
}

impl Lifecycle {
    /// Create a new lifecycle in the `Parsed` state.
    pub fn new() -> Self {
        Self {
            state: WorkerState::Parsed,
        }
    }

    /// Current state.
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Whether the worker is active.
    pub fn is_active(&self) -> bool {
        self.state == WorkerState::Activated
    }

    /// Advance to a new state, validating the transition.
    pub fn transition(&mut self, to: WorkerState) -> Result<(), LifecycleError> {
        if !is_valid_transition(self.state, to) {
            return Err(LifecycleError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }
}
