// SPDX-License-Identifier: MIT

//! Schedule evaluation and reconciliation
//!
//! This module provides:
//! - **ScheduleTable**: the 7x24 weekly grid and its total evaluation
//! - **ScheduleConfig**: the wholesale-replaced configuration record
//! - **reconcile**: the pure pause/resume reconciliation pass
//! - **Scheduler**: the hourly-aligned scheduling state machine

mod config;
mod reconcile;
mod scheduler;
mod table;

pub use config::ScheduleConfig;
pub use reconcile::{is_exempt, reconcile, ReconcileOutcome};
pub use scheduler::{Scheduler, SchedulerEvent, SchedulerState, TICK_TIMER};
pub use table::{ScheduleError, ScheduleTable, TargetState, DAYS, HOURS};
