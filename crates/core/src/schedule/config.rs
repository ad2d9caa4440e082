// SPDX-License-Identifier: MIT

//! Scheduler configuration record
//!
//! Replaced wholesale on every update and never partially mutated while an
//! evaluation is in flight; persistence belongs to the `ConfigStore`
//! boundary, not to this type.

use super::table::{ScheduleTable, TargetState};
use serde::{Deserialize, Serialize};

/// Configuration for the schedule-driven pause/resume controller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// The 7x24 weekly grid
    #[serde(default)]
    pub table: ScheduleTable,
    /// Exempt seeding (and queued-complete) resources from pause/resume
    #[serde(default)]
    pub ignore_seeding: bool,
}

impl ScheduleConfig {
    pub fn new(table: ScheduleTable) -> Self {
        Self {
            table,
            ignore_seeding: false,
        }
    }

    pub fn ignore_seeding(mut self) -> Self {
        self.ignore_seeding = true;
        self
    }

    /// A config whose grid holds one state everywhere
    pub fn uniform(state: TargetState) -> Self {
        Self::new(ScheduleTable::uniform(state))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
