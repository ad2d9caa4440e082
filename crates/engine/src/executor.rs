// SPDX-License-Identifier: MIT

//! Effect executor

use crate::timers::TimerQueue;
use offpeak_adapters::{NotifyAdapter, NotifyError, PoolAdapter, PoolError};
use offpeak_core::{Clock, Effect};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors that can occur during effect execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
}

/// Executes effects using the configured adapters
pub struct Executor<P, N, C> {
    pool: P,
    notify: N,
    timers: Arc<Mutex<TimerQueue>>,
    clock: C,
}

impl<P, N, C> Executor<P, N, C>
where
    P: PoolAdapter,
    N: NotifyAdapter,
    C: Clock,
{
    pub fn new(pool: P, notify: N, timers: Arc<Mutex<TimerQueue>>, clock: C) -> Self {
        Self {
            pool,
            notify,
            timers,
            clock,
        }
    }

    /// Execute a single effect with tracing
    pub async fn execute(&self, effect: Effect) -> Result<(), ExecuteError> {
        let op_name = effect.name();
        let span = tracing::debug_span!("effect", effect = op_name);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.execute_inner(effect).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "completed"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "failed"
            ),
        }

        result
    }

    /// Inner execution logic for a single effect
    async fn execute_inner(&self, effect: Effect) -> Result<(), ExecuteError> {
        match effect {
            Effect::Pause { id } => {
                self.pool.pause(&id).await?;
                Ok(())
            }

            Effect::Resume { id } => {
                self.pool.resume(&id).await?;
                Ok(())
            }

            Effect::ResumeSession => {
                self.pool.resume_session().await?;
                Ok(())
            }

            Effect::SetTimer { id, duration } => {
                let now = self.clock.now();
                self.timers
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .set(id, duration, now);
                Ok(())
            }

            Effect::CancelTimer { id } => {
                let was_pending = self
                    .timers
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .cancel(&id);
                if !was_pending {
                    tracing::debug!(id, "no timer outstanding");
                }
                Ok(())
            }

            Effect::Emit(event) => {
                self.notify.notify(&event).await?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
