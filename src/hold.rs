//! Press-and-hold confirmation.
//!
//! A hold is a deadline, not an OS timer: the frame loop calls [`HoldController::poll`]
//! with the current time and the option now under the cursor. The held
//! [`OptionRef`] carries the catalog generation, so a hold started on a catalog
//! that has since been replaced can never fire.

use crate::catalog::{OptionRef, Target};

#[derive(Debug, Clone, PartialEq, Default)]
enum HoldState {
    #[default]
    Idle,
    Holding {
        option: OptionRef,
        target: Target,
        started_ms: f64,
        deadline_ms: f64,
    },
}

/// Result of asking the controller to start a hold.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldOutcome {
    /// No hold needed; select this target now.
    Immediate(Target),
    Started,
    /// A hold is already in flight.
    Rejected,
}

#[derive(Debug, Default)]
pub struct HoldController {
    state: HoldState,
}

impl HoldController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(
        &mut self,
        option: OptionRef,
        target: &Target,
        hold_ms: u32,
        now_ms: f64,
    ) -> HoldOutcome {
        if self.is_holding() {
            return HoldOutcome::Rejected;
        }
        if hold_ms == 0 {
            return HoldOutcome::Immediate(target.clone());
        }
        self.state = HoldState::Holding {
            option,
            target: target.clone(),
            started_ms: now_ms,
            deadline_ms: now_ms + f64::from(hold_ms),
        };
        HoldOutcome::Started
    }

    /// Drop any hold in flight. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_holding = self.is_holding();
        self.state = HoldState::Idle;
        was_holding
    }

    /// Finish the hold once its deadline has passed. Yields the target only if
    /// `current` is still the option the hold started on.
    pub fn poll(&mut self, now_ms: f64, current: Option<OptionRef>) -> Option<Target> {
        let HoldState::Holding { deadline_ms, .. } = &self.state else {
            return None;
        };
        if now_ms < *deadline_ms {
            return None;
        }
        match std::mem::take(&mut self.state) {
            HoldState::Holding { option, target, .. } if current == Some(option) => Some(target),
            _ => None,
        }
    }

    /// Fill fraction of the progress indicator, 0.0 when idle.
    pub fn progress(&self, now_ms: f64) -> f64 {
        match &self.state {
            HoldState::Idle => 0.0,
            HoldState::Holding {
                started_ms,
                deadline_ms,
                ..
            } => {
                let span = deadline_ms - started_ms;
                if span <= 0.0 {
                    return 1.0;
                }
                ((now_ms - started_ms) / span).clamp(0.0, 1.0)
            }
        }
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, HoldState::Holding { .. })
    }
}
