// SPDX-License-Identifier: MIT

//! Bridge from host lifecycle events to the runtime
//!
//! The host pushes events into an mpsc channel; the bridge task drains it
//! and forwards each event into the runtime in arrival order. Dropping the
//! sender ends the bridge, which is how the host deregisters.

use crate::runtime::Runtime;
use offpeak_adapters::{ConfigStore, NotifyAdapter, PoolAdapter};
use offpeak_core::{Clock, ResourceId};
use tokio::sync::mpsc;

/// Lifecycle events delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The pool finished loading its resources
    SessionStarted,
    /// The pool-wide session was resumed
    SessionResumed,
    /// A resource was added to the pool
    ResourceAdded(ResourceId),
}

/// Adapter feeding host events into the runtime
pub struct EventBridge {
    events: mpsc::Receiver<HostEvent>,
}

impl EventBridge {
    pub fn new(events: mpsc::Receiver<HostEvent>) -> Self {
        Self { events }
    }

    /// Create a bridge together with the sender half the host keeps
    pub fn channel(capacity: usize) -> (mpsc::Sender<HostEvent>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }

    /// Forward events until every sender is dropped
    pub async fn run<P, N, S, C>(mut self, runtime: &Runtime<P, N, S, C>)
    where
        P: PoolAdapter,
        N: NotifyAdapter,
        S: ConfigStore,
        C: Clock,
    {
        while let Some(event) = self.events.recv().await {
            tracing::debug!(?event, "host event");
            if let Err(e) = runtime.handle_event(event).await {
                tracing::warn!(error = %e, "event handling failed");
            }
        }
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
