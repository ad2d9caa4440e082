// SPDX-License-Identifier: MIT

//! Traced adapter wrappers for consistent observability

use crate::pool::{PoolAdapter, PoolError};
use async_trait::async_trait;
use offpeak_core::{ResourceId, ResourceSnapshot};

/// Wrapper that adds tracing to any PoolAdapter
#[derive(Clone)]
pub struct TracedPoolAdapter<P> {
    inner: P,
}

impl<P> TracedPoolAdapter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: PoolAdapter> PoolAdapter for TracedPoolAdapter<P> {
    async fn list(&self) -> Result<Vec<ResourceSnapshot>, PoolError> {
        let span = tracing::debug_span!("pool.list");
        let _guard = span.enter();

        let result = self.inner.list().await;
        match &result {
            Ok(resources) => tracing::debug!(count = resources.len(), "listed"),
            Err(e) => tracing::error!(error = %e, "list failed"),
        }
        result
    }

    async fn get(&self, id: &ResourceId) -> Result<Option<ResourceSnapshot>, PoolError> {
        let span = tracing::debug_span!("pool.get", id = %id);
        let _guard = span.enter();

        let result = self.inner.get(id).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "get failed");
        }
        result
    }

    async fn pause(&self, id: &ResourceId) -> Result<(), PoolError> {
        let span = tracing::info_span!("pool.pause", id = %id);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.pause(id).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "paused"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "pause failed"
            ),
        }
        result
    }

    async fn resume(&self, id: &ResourceId) -> Result<(), PoolError> {
        let span = tracing::info_span!("pool.resume", id = %id);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.resume(id).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "resumed"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "resume failed"
            ),
        }
        result
    }

    async fn resume_session(&self) -> Result<(), PoolError> {
        let span = tracing::info_span!("pool.resume_session");
        let _guard = span.enter();

        let result = self.inner.resume_session().await;
        match &result {
            Ok(()) => tracing::info!("session resumed"),
            Err(e) => tracing::error!(error = %e, "session resume failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
