// SPDX-License-Identifier: MIT

//! Clock abstraction for testable time handling
//!
//! Schedule lookups are indexed by the local wall clock (day of week, hour
//! of day) while timer arithmetic uses monotonic instants, so the clock
//! exposes both.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A clock that provides the current monotonic and wall-clock time
pub trait Clock: Clone + Send + Sync {
    /// Monotonic time, used for timer scheduling
    fn now(&self) -> Instant;

    /// Local wall-clock time, used for schedule evaluation
    fn wall(&self) -> NaiveDateTime;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fake clock for testing with controllable time
///
/// `advance` moves the monotonic and wall clocks together; `set_wall` pins
/// the wall clock to an exact local time without touching the monotonic side.
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<FakeNow>>,
}

#[derive(Clone, Copy)]
struct FakeNow {
    instant: Instant,
    wall: NaiveDateTime,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(FakeNow {
                instant: Instant::now(),
                wall: DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
            })),
        }
    }

    /// Advance both clocks by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.instant += duration;
        current.wall += chrono::Duration::from_std(duration).unwrap_or(chrono::Duration::zero());
    }

    /// Set the wall clock to a specific local time
    pub fn set_wall(&self, wall: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.wall = wall;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.current.lock().unwrap_or_else(|e| e.into_inner()).instant
    }

    fn wall(&self) -> NaiveDateTime {
        self.current.lock().unwrap_or_else(|e| e.into_inner()).wall
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
