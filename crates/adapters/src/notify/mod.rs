// SPDX-License-Identifier: MIT

//! Outbound notification adapter
//!
//! Schedule events leave the system through this boundary; the host decides
//! whether they become bus events, RPC pushes, or log lines.

use async_trait::async_trait;
use offpeak_core::Event;
use thiserror::Error;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifyAdapter;

/// Errors from notification delivery
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Adapter for delivering events to outside observers
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    async fn notify(&self, event: &Event) -> Result<(), NotifyError>;
}

/// Notification adapter that drops events after logging them
#[derive(Clone, Default)]
pub struct NoOpNotifyAdapter;

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn notify(&self, event: &Event) -> Result<(), NotifyError> {
        tracing::debug!(event = %event.name(), "dropping notification");
        Ok(())
    }
}
