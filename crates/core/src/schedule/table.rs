// SPDX-License-Identifier: MIT

//! Weekly schedule table and target-state evaluation
//!
//! The table is a 7x24 grid (rows = day of week, Monday = 0; columns = hour
//! of day) where each cell holds the state the pool should be in during that
//! hour. Lookup is total: the indices derived from a wall-clock time are
//! in range by construction, so evaluation can never fail. Invalid numeric
//! codes are rejected once, at the decode boundary.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Days per week in the schedule grid
pub const DAYS: usize = 7;
/// Hours per day in the schedule grid
pub const HOURS: usize = 24;

/// The state the schedule says the pool should be in at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetState {
    /// Resources run normally
    Active,
    /// Auto-managed resources are paused
    Suspended,
}

impl TargetState {
    /// Numeric code used in the persisted grid
    pub fn code(self) -> u8 {
        match self {
            TargetState::Active => 0,
            TargetState::Suspended => 1,
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetState::Active => write!(f, "active"),
            TargetState::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for TargetState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TargetState::Active),
            "suspended" => Ok(TargetState::Suspended),
            _ => Err(format!("unknown target state: {}", s)),
        }
    }
}

/// Errors decoding a schedule grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("schedule grid must have 7 day rows, got {0}")]
    WrongRowCount(usize),
    #[error("day {day} must have 24 hour slots, got {got}")]
    WrongColumnCount { day: usize, got: usize },
    /// The grid holds exactly two valid codes; anything else is a defect in
    /// the stored configuration, never a third behavior.
    #[error("invalid state code {code} at day {day} hour {hour}")]
    InvalidStateCode { day: usize, hour: usize, code: u8 },
}

/// 7x24 grid mapping (day of week, hour of day) to a target state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct ScheduleTable {
    slots: [[TargetState; HOURS]; DAYS],
}

impl Default for ScheduleTable {
    fn default() -> Self {
        Self::uniform(TargetState::Active)
    }
}

impl ScheduleTable {
    /// A table with every slot set to the same state
    pub fn uniform(state: TargetState) -> Self {
        Self {
            slots: [[state; HOURS]; DAYS],
        }
    }

    /// Set one slot; day is Monday-based (0..=6), hour 0..=23.
    /// Out-of-range indices are a programming error and panic.
    pub fn set_slot(&mut self, day: usize, hour: usize, state: TargetState) {
        self.slots[day][hour] = state;
    }

    /// Set every hour of one day
    pub fn set_day(&mut self, day: usize, state: TargetState) {
        self.slots[day] = [state; HOURS];
    }

    /// Set one hour across every day of the week
    pub fn set_hour(&mut self, hour: usize, state: TargetState) {
        for day in &mut self.slots {
            day[hour] = state;
        }
    }

    /// The state stored for one slot
    pub fn slot(&self, day: usize, hour: usize) -> TargetState {
        self.slots[day][hour]
    }

    /// Evaluate the target state for a wall-clock instant
    ///
    /// Total: weekday (Monday = 0) and hour are in range by construction.
    pub fn target_at(&self, wall: NaiveDateTime) -> TargetState {
        let day = wall.weekday().num_days_from_monday() as usize;
        let hour = wall.hour() as usize;
        self.slots[day][hour]
    }
}

impl TryFrom<Vec<Vec<u8>>> for ScheduleTable {
    type Error = ScheduleError;

    fn try_from(grid: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        if grid.len() != DAYS {
            return Err(ScheduleError::WrongRowCount(grid.len()));
        }
        let mut slots = [[TargetState::Active; HOURS]; DAYS];
        for (day, row) in grid.iter().enumerate() {
            if row.len() != HOURS {
                return Err(ScheduleError::WrongColumnCount {
                    day,
                    got: row.len(),
                });
            }
            for (hour, &code) in row.iter().enumerate() {
                slots[day][hour] = match code {
                    0 => TargetState::Active,
                    1 => TargetState::Suspended,
                    code => return Err(ScheduleError::InvalidStateCode { day, hour, code }),
                };
            }
        }
        Ok(Self { slots })
    }
}

impl From<ScheduleTable> for Vec<Vec<u8>> {
    fn from(table: ScheduleTable) -> Self {
        table
            .slots
            .iter()
            .map(|row| row.iter().map(|state| state.code()).collect())
            .collect()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
