// SPDX-License-Identifier: MIT

//! Reconciliation of the pool against the schedule's target state
//!
//! Pure: takes the target, the last-known state, and a snapshot of the pool,
//! and returns the pause/resume effects plus the new last-known state. The
//! engine executes the effects; a failed command is simply retried by nature
//! on the next cycle because nothing here is cached.

use super::config::ScheduleConfig;
use super::table::TargetState;
use crate::effect::{Effect, Event};
use crate::resource::{ResourcePhase, ResourceSnapshot};

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub effects: Vec<Effect>,
    /// The last-known state after this pass
    pub state: TargetState,
}

/// Whether a resource is excluded from the current pause/resume decision
///
/// Exemption is re-evaluated fresh on every cycle, never sticky: a resource
/// exempt now may be acted on by a later cycle once its phase changes.
pub fn is_exempt(config: &ScheduleConfig, resource: &ResourceSnapshot) -> bool {
    if !config.ignore_seeding {
        return false;
    }
    match resource.phase {
        ResourcePhase::Seeding => true,
        // queued and complete, so just waiting to seed
        ResourcePhase::Queued => resource.is_complete(),
        _ => false,
    }
}

/// Apply the schedule's target state to the pool
///
/// With `forced` unset this only acts on transitions; lifecycle events and
/// configuration changes pass `forced` to guarantee consistency even if a
/// timer missed an edge. A notification is emitted only on an actual
/// transition, never for a forced re-application of an unchanged state.
pub fn reconcile(
    target: TargetState,
    last_known: TargetState,
    forced: bool,
    config: &ScheduleConfig,
    resources: &[ResourceSnapshot],
) -> ReconcileOutcome {
    if target == last_known && !forced {
        return ReconcileOutcome {
            effects: vec![],
            state: last_known,
        };
    }

    tracing::debug!(%target, %last_known, forced, resources = resources.len(), "applying schedule");

    let mut effects = Vec::new();
    let managed = resources
        .iter()
        .filter(|r| r.auto_managed && !is_exempt(config, r));

    match target {
        TargetState::Active => {
            for resource in managed {
                effects.push(Effect::Resume {
                    id: resource.id.clone(),
                });
            }
            // The pool-wide switch is resumed in this direction only; global
            // suspension belongs to a different control path.
            effects.push(Effect::ResumeSession);
        }
        TargetState::Suspended => {
            for resource in managed {
                effects.push(Effect::Pause {
                    id: resource.id.clone(),
                });
            }
        }
    }

    if target != last_known {
        effects.push(Effect::Emit(Event::ScheduleStateChanged { state: target }));
    }

    ReconcileOutcome {
        effects,
        state: target,
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
