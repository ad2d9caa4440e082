// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! offpeak-core: pure domain logic for schedule-driven pause/resume
//!
//! This crate provides:
//! - The weekly schedule table and its target-state evaluation
//! - The pure reconciliation pass and scheduler state machine
//! - Effect-based orchestration (no I/O happens here)
//! - Clock abstraction with a controllable fake for tests

pub mod clock;
pub mod effect;
pub mod resource;
pub mod schedule;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use effect::{Effect, Event};
pub use resource::{ResourceId, ResourcePhase, ResourceSnapshot};
pub use schedule::{
    is_exempt, reconcile, ReconcileOutcome, ScheduleConfig, ScheduleError, ScheduleTable,
    Scheduler, SchedulerEvent, SchedulerState, TargetState, TICK_TIMER,
};
