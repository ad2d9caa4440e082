// SPDX-License-Identifier: MIT

//! Scheduler state machine for hourly schedule evaluation
//!
//! Owns the last-known target state and the single timer chain. On enable
//! the first timer is aligned to the next top of the hour; every tick after
//! that re-arms a fixed 3600 second delay. Host lifecycle events trigger
//! forced out-of-band reconciliations without disturbing the hourly cadence.

use super::config::ScheduleConfig;
use super::reconcile::{is_exempt, reconcile};
use super::table::TargetState;
use crate::clock::Clock;
use crate::effect::{Effect, Event};
use crate::resource::ResourceSnapshot;
use chrono::{NaiveDateTime, Timelike};
use std::fmt;
use std::time::Duration;

/// Timer id for the evaluation tick chain
pub const TICK_TIMER: &str = "schedule:tick";

const HOUR: Duration = Duration::from_secs(3600);

/// The current state of the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No timer outstanding, events ignored
    Disabled,
    /// One-shot timer armed for the next top of the hour
    AwaitingFirstTick { last_known: TargetState },
    /// Fixed 3600 second cadence
    Hourly { last_known: TargetState },
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerState::Disabled => write!(f, "disabled"),
            SchedulerState::AwaitingFirstTick { .. } => write!(f, "awaiting-first-tick"),
            SchedulerState::Hourly { .. } => write!(f, "hourly"),
        }
    }
}

/// Events that can transition the scheduler
#[derive(Debug, Clone)]
pub enum SchedulerEvent {
    /// Activate: evaluate immediately and arm the aligned first timer
    Enable,
    /// Deactivate: cancel the outstanding timer
    Disable,
    /// The evaluation timer fired
    Tick,
    /// The pool session finished loading its resources
    SessionStarted,
    /// The pool session was resumed
    SessionResumed,
    /// A new configuration took effect
    ConfigApplied,
    /// The pool added a resource
    ResourceAdded { snapshot: ResourceSnapshot },
}

/// Schedule-driven pause/resume controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    state: SchedulerState,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Disabled,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        !matches!(self.state, SchedulerState::Disabled)
    }

    /// The target state as of the most recent reconciliation
    pub fn last_known(&self) -> Option<TargetState> {
        match self.state {
            SchedulerState::Disabled => None,
            SchedulerState::AwaitingFirstTick { last_known }
            | SchedulerState::Hourly { last_known } => Some(last_known),
        }
    }

    /// Pure state transition returning the new machine and effects
    pub fn transition(
        &self,
        event: SchedulerEvent,
        config: &ScheduleConfig,
        pool: &[ResourceSnapshot],
        clock: &impl Clock,
    ) -> (Self, Vec<Effect>) {
        match (self.state, event) {
            // Activate: apply the schedule immediately, then align to the hour
            (SchedulerState::Disabled, SchedulerEvent::Enable) => {
                let wall = clock.wall();
                let target = config.table.target_at(wall);
                // no prior state exists, so force the first application;
                // equal states means no notification is produced
                let outcome = reconcile(target, target, true, config, pool);

                let delay = until_next_hour(wall);
                tracing::debug!(delay_secs = delay.as_secs(), %target, "scheduler enabled");

                let mut effects = outcome.effects;
                effects.push(Effect::SetTimer {
                    id: TICK_TIMER.to_string(),
                    duration: delay,
                });
                effects.push(Effect::Emit(Event::SchedulerEnabled));

                (
                    Self {
                        state: SchedulerState::AwaitingFirstTick {
                            last_known: outcome.state,
                        },
                    },
                    effects,
                )
            }

            // Deactivate from any armed state
            (
                SchedulerState::AwaitingFirstTick { .. } | SchedulerState::Hourly { .. },
                SchedulerEvent::Disable,
            ) => {
                let effects = vec![
                    Effect::CancelTimer {
                        id: TICK_TIMER.to_string(),
                    },
                    Effect::Emit(Event::SchedulerDisabled),
                ];
                (
                    Self {
                        state: SchedulerState::Disabled,
                    },
                    effects,
                )
            }

            // Timer fired: act only on transitions, then re-arm the hour
            (
                SchedulerState::AwaitingFirstTick { last_known }
                | SchedulerState::Hourly { last_known },
                SchedulerEvent::Tick,
            ) => {
                let target = config.table.target_at(clock.wall());
                let outcome = reconcile(target, last_known, false, config, pool);

                let mut effects = outcome.effects;
                effects.push(Effect::SetTimer {
                    id: TICK_TIMER.to_string(),
                    duration: HOUR,
                });

                (
                    Self {
                        state: SchedulerState::Hourly {
                            last_known: outcome.state,
                        },
                    },
                    effects,
                )
            }

            // Lifecycle and configuration events force a consistent
            // re-application without touching the timer cadence
            (
                SchedulerState::AwaitingFirstTick { last_known },
                SchedulerEvent::SessionStarted
                | SchedulerEvent::SessionResumed
                | SchedulerEvent::ConfigApplied,
            ) => {
                let target = config.table.target_at(clock.wall());
                let outcome = reconcile(target, last_known, true, config, pool);
                (
                    Self {
                        state: SchedulerState::AwaitingFirstTick {
                            last_known: outcome.state,
                        },
                    },
                    outcome.effects,
                )
            }
            (
                SchedulerState::Hourly { last_known },
                SchedulerEvent::SessionStarted
                | SchedulerEvent::SessionResumed
                | SchedulerEvent::ConfigApplied,
            ) => {
                let target = config.table.target_at(clock.wall());
                let outcome = reconcile(target, last_known, true, config, pool);
                (
                    Self {
                        state: SchedulerState::Hourly {
                            last_known: outcome.state,
                        },
                    },
                    outcome.effects,
                )
            }

            // A new resource is only ever paused, never resumed, so an
            // explicit add-as-paused request is not overridden. The
            // last-known state is untouched: this is a point action on one
            // resource, not a reconciliation.
            (
                SchedulerState::AwaitingFirstTick { .. } | SchedulerState::Hourly { .. },
                SchedulerEvent::ResourceAdded { snapshot },
            ) => {
                let target = config.table.target_at(clock.wall());
                let effects = if target == TargetState::Suspended
                    && snapshot.auto_managed
                    && !is_exempt(config, &snapshot)
                {
                    tracing::debug!(id = %snapshot.id, name = %snapshot.name, "pausing new resource");
                    vec![Effect::Pause { id: snapshot.id }]
                } else {
                    vec![]
                };
                (self.clone(), effects)
            }

            // Everything else, including any event while disabled and a
            // stray tick after disable, is a no-op
            _ => (self.clone(), vec![]),
        }
    }
}

/// Whole seconds from `wall` to the next top of the hour
///
/// Exactly on the boundary the full hour is returned, so enable at *:00:00
/// ticks first at the following hour.
fn until_next_hour(wall: NaiveDateTime) -> Duration {
    let elapsed = u64::from(wall.minute()) * 60 + u64::from(wall.second());
    Duration::from_secs(3600 - elapsed)
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
