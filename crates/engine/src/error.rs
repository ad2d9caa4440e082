// SPDX-License-Identifier: MIT

//! Runtime error types

use offpeak_adapters::{ConfigStoreError, PoolError};
use thiserror::Error;

/// Errors surfaced by runtime operations
///
/// Per-resource command failures never appear here; they are logged and the
/// reconciliation continues with the remaining resources.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("config store error: {0}")]
    ConfigStore(#[from] ConfigStoreError),
}
