// SPDX-License-Identifier: MIT

//! Poll-based timer store
//!
//! Timers are keyed by id; setting an id that is already pending replaces
//! it, so each id is at most one outstanding timer. Cancellation of an
//! absent id is a tolerated no-op that merely reports nothing was pending.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Pending timers keyed by id
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BTreeMap<String, Instant>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) a timer
    pub fn set(&mut self, id: impl Into<String>, duration: Duration, now: Instant) {
        self.pending.insert(id.into(), now + duration);
    }

    /// Cancel a timer, reporting whether one was actually pending
    pub fn cancel(&mut self, id: &str) -> bool {
        self.pending.remove(id).is_some()
    }

    /// Take all timers due at or before `now`, in fire order
    pub fn poll(&mut self, now: Instant) -> Vec<String> {
        let mut due: Vec<(Instant, String)> = self
            .pending
            .iter()
            .filter(|(_, &at)| at <= now)
            .map(|(id, &at)| (at, id.clone()))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Whether a specific timer is pending
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    /// The earliest pending fire time, if any
    pub fn next_fire_at(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod tests;
