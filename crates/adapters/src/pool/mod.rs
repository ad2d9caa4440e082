// SPDX-License-Identifier: MIT

//! Resource pool adapter
//!
//! The pool (the torrent session of the host application) owns every
//! resource; this boundary only reads snapshots and issues idempotent
//! pause/resume commands. Pausing an already-paused resource is a no-op on
//! the pool side.

use async_trait::async_trait;
use offpeak_core::{ResourceId, ResourceSnapshot};
use thiserror::Error;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePoolAdapter, PoolCall};

/// Errors from pool operations
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("resource not found: {0}")]
    NotFound(ResourceId),
    #[error("command failed for {id}: {message}")]
    CommandFailed { id: ResourceId, message: String },
    #[error("pool unavailable: {0}")]
    Unavailable(String),
}

/// Adapter for the external resource pool
#[async_trait]
pub trait PoolAdapter: Clone + Send + Sync + 'static {
    /// Snapshot every resource currently in the pool
    async fn list(&self) -> Result<Vec<ResourceSnapshot>, PoolError>;

    /// Snapshot a single resource, if it exists
    async fn get(&self, id: &ResourceId) -> Result<Option<ResourceSnapshot>, PoolError>;

    /// Pause one resource
    async fn pause(&self, id: &ResourceId) -> Result<(), PoolError>;

    /// Resume one resource
    async fn resume(&self, id: &ResourceId) -> Result<(), PoolError>;

    /// Resume the pool-wide session switch
    async fn resume_session(&self) -> Result<(), PoolError>;
}

/// Pool adapter that reports an empty pool and accepts every command
#[derive(Clone, Default)]
pub struct NoOpPoolAdapter;

#[async_trait]
impl PoolAdapter for NoOpPoolAdapter {
    async fn list(&self) -> Result<Vec<ResourceSnapshot>, PoolError> {
        Ok(vec![])
    }

    async fn get(&self, _id: &ResourceId) -> Result<Option<ResourceSnapshot>, PoolError> {
        Ok(None)
    }

    async fn pause(&self, _id: &ResourceId) -> Result<(), PoolError> {
        Ok(())
    }

    async fn resume(&self, _id: &ResourceId) -> Result<(), PoolError> {
        Ok(())
    }

    async fn resume_session(&self) -> Result<(), PoolError> {
        Ok(())
    }
}
