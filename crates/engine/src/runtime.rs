// SPDX-License-Identifier: MIT

//! Runtime driving the scheduler machine
//!
//! Owns the machine and the active configuration behind one async lock, so
//! every transition runs to completion before the next begins; timer fires
//! and host events can never interleave two reconciliations.

use crate::bridge::HostEvent;
use crate::error::RuntimeError;
use crate::executor::Executor;
use crate::timers::TimerQueue;
use offpeak_adapters::{ConfigStore, NotifyAdapter, PoolAdapter};
use offpeak_core::{Clock, ScheduleConfig, Scheduler, SchedulerEvent, SchedulerState, TICK_TIMER};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

/// Runtime adapter dependencies
pub struct RuntimeDeps<P, N, S> {
    pub pool: P,
    pub notify: N,
    pub store: S,
}

struct RuntimeState {
    machine: Scheduler,
    config: ScheduleConfig,
}

/// Runtime that coordinates the scheduler with the outside world
pub struct Runtime<P, N, S, C: Clock> {
    state: tokio::sync::Mutex<RuntimeState>,
    executor: Executor<P, N, C>,
    pool: P,
    store: S,
    timers: Arc<Mutex<TimerQueue>>,
    clock: C,
}

impl<P, N, S, C> Runtime<P, N, S, C>
where
    P: PoolAdapter,
    N: NotifyAdapter,
    S: ConfigStore,
    C: Clock,
{
    /// Create a runtime, loading the persisted configuration
    pub async fn new(deps: RuntimeDeps<P, N, S>, clock: C) -> Result<Self, RuntimeError> {
        let config = deps.store.load().await?.unwrap_or_default();
        let timers = Arc::new(Mutex::new(TimerQueue::new()));
        let executor = Executor::new(
            deps.pool.clone(),
            deps.notify,
            Arc::clone(&timers),
            clock.clone(),
        );

        Ok(Self {
            state: tokio::sync::Mutex::new(RuntimeState {
                machine: Scheduler::new(),
                config,
            }),
            executor,
            pool: deps.pool,
            store: deps.store,
            timers,
            clock,
        })
    }

    /// Activate the scheduler: applies the schedule immediately and arms
    /// the first timer for the next top of the hour
    pub async fn enable(&self) -> Result<(), RuntimeError> {
        self.dispatch(SchedulerEvent::Enable).await
    }

    /// Deactivate the scheduler, cancelling the outstanding timer.
    /// Safe to call at any time; disabling twice is a no-op.
    pub async fn disable(&self) -> Result<(), RuntimeError> {
        self.dispatch(SchedulerEvent::Disable).await
    }

    /// Handle a host lifecycle event
    pub async fn handle_event(&self, event: HostEvent) -> Result<(), RuntimeError> {
        match event {
            HostEvent::SessionStarted => self.dispatch(SchedulerEvent::SessionStarted).await,
            HostEvent::SessionResumed => self.dispatch(SchedulerEvent::SessionResumed).await,
            HostEvent::ResourceAdded(id) => match self.pool.get(&id).await? {
                Some(snapshot) => {
                    self.dispatch(SchedulerEvent::ResourceAdded { snapshot })
                        .await
                }
                None => {
                    tracing::debug!(%id, "added resource vanished before evaluation");
                    Ok(())
                }
            },
        }
    }

    /// Fire every due timer
    pub async fn fire_due_timers(&self) -> Result<(), RuntimeError> {
        let due = {
            let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
            timers.poll(self.clock.now())
        };
        for id in due {
            if id == TICK_TIMER {
                self.dispatch(SchedulerEvent::Tick).await?;
            } else {
                tracing::debug!(id, "ignoring unknown timer");
            }
        }
        Ok(())
    }

    /// The current configuration record, verbatim
    pub async fn config(&self) -> ScheduleConfig {
        self.state.lock().await.config.clone()
    }

    /// Replace the configuration
    ///
    /// Persists first: a failed save leaves the active configuration
    /// untouched and is returned to the caller. On success the new record
    /// takes effect immediately through a forced reconciliation.
    pub async fn set_config(&self, config: ScheduleConfig) -> Result<(), RuntimeError> {
        let mut state = self.state.lock().await;
        self.store.save(&config).await?;
        state.config = config;
        self.transition_locked(&mut state, SchedulerEvent::ConfigApplied)
            .await
    }

    /// The scheduler machine's current state
    pub async fn scheduler_state(&self) -> SchedulerState {
        self.state.lock().await.machine.state()
    }

    /// Drive due timers until `shutdown` flips to true
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        const IDLE_POLL: Duration = Duration::from_secs(1);

        loop {
            if *shutdown.borrow() {
                break;
            }

            let until_next = {
                let timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
                timers
                    .next_fire_at()
                    .map(|at| at.saturating_duration_since(self.clock.now()))
            };
            // cap the sleep so a timer re-armed mid-sleep is not missed
            let wait = until_next.unwrap_or(IDLE_POLL).min(IDLE_POLL);

            tokio::select! {
                () = tokio::time::sleep(wait) => {
                    if let Err(e) = self.fire_due_timers().await {
                        tracing::warn!(error = %e, "timer evaluation failed");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
    }

    async fn dispatch(&self, event: SchedulerEvent) -> Result<(), RuntimeError> {
        let mut state = self.state.lock().await;
        self.transition_locked(&mut state, event).await
    }

    async fn transition_locked(
        &self,
        state: &mut RuntimeState,
        event: SchedulerEvent,
    ) -> Result<(), RuntimeError> {
        // disable and resource-added act without a pool sweep; disable in
        // particular must succeed even when the pool is unreachable
        let snapshot = match &event {
            SchedulerEvent::Disable | SchedulerEvent::ResourceAdded { .. } => vec![],
            _ => self.pool.list().await?,
        };

        let (machine, effects) =
            state
                .machine
                .transition(event, &state.config, &snapshot, &self.clock);
        state.machine = machine;

        for effect in effects {
            // best-effort: a failed command on one resource, or a failed
            // notification, must not starve the remaining effects
            if let Err(e) = self.executor.execute(effect).await {
                tracing::warn!(error = %e, "effect failed");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
