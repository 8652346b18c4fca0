//! Lifecycle actions and their per-descriptor outcomes.

/// A lifecycle action applied to a resolved descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Start,
    Stop,
    /// Unload then load. Not atomic.
    Restart,
}

/// Sub-action passed to the control command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlVerb {
    Load,
    Unload,
}

impl ControlVerb {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Unload => "unload",
        }
    }
}

/// Result of applying one action to one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed(String),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Aggregated outcomes of a batch, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub outcomes: Vec<(String, ActionOutcome)>,
}

impl BatchSummary {
    pub fn record(&mut self, name: &str, outcome: ActionOutcome) {
        self.outcomes.push((name.to_string(), outcome));
    }

    /// Names of descriptors the action was applied to.
    pub fn dispatched(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| !o.is_success()).count()
    }
}
