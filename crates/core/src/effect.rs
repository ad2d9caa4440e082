// SPDX-License-Identifier: MIT

//! Effects and events requested by the scheduling state machines
//!
//! State machines never perform I/O; they return effects for the engine to
//! execute against the pool, the notifier, and the timer queue.

use crate::resource::ResourceId;
use crate::schedule::TargetState;
use std::time::Duration;

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Pause one resource
    Pause { id: ResourceId },
    /// Resume one resource
    Resume { id: ResourceId },
    /// Resume the pool-wide session switch
    ResumeSession,
    /// Arm a timer
    SetTimer { id: String, duration: Duration },
    /// Cancel a timer; cancelling an absent timer is a tolerated no-op
    CancelTimer { id: String },
    /// Emit an event for outside observers
    Emit(Event),
}

impl Effect {
    /// Short name for tracing spans
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Pause { .. } => "pause",
            Effect::Resume { .. } => "resume",
            Effect::ResumeSession => "resume-session",
            Effect::SetTimer { .. } => "set-timer",
            Effect::CancelTimer { .. } => "cancel-timer",
            Effect::Emit(_) => "emit",
        }
    }
}

/// Events emitted by the scheduling state machines
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Event {
    /// The schedule's target state changed; at most one per actual transition
    ScheduleStateChanged { state: TargetState },
    /// The scheduler was enabled and armed
    SchedulerEnabled,
    /// The scheduler was disabled and its timer cancelled
    SchedulerDisabled,
}

impl Event {
    /// Get the event name for pattern matching
    /// Format: "category:action"
    pub fn name(&self) -> String {
        match self {
            Event::ScheduleStateChanged { .. } => "schedule:state-changed".to_string(),
            Event::SchedulerEnabled => "scheduler:enabled".to_string(),
            Event::SchedulerDisabled => "scheduler:disabled".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
