// SPDX-License-Identifier: MIT

//! Configuration persistence boundary
//!
//! Persistence belongs to the host; the engine only needs load-at-startup
//! and save-before-apply. `FsConfigStore` is the default TOML-file
//! implementation.

use async_trait::async_trait;
use offpeak_core::ScheduleConfig;
use std::path::PathBuf;
use thiserror::Error;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeConfigStore;

/// Errors from configuration persistence
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Decode(String),
    #[error("could not encode config: {0}")]
    Encode(String),
    #[error("save failed: {0}")]
    SaveFailed(String),
}

/// Adapter for loading and saving the schedule configuration
#[async_trait]
pub trait ConfigStore: Clone + Send + Sync + 'static {
    /// Load the persisted configuration, `None` if nothing was saved yet
    async fn load(&self) -> Result<Option<ScheduleConfig>, ConfigStoreError>;

    /// Persist the configuration
    async fn save(&self, config: &ScheduleConfig) -> Result<(), ConfigStoreError>;
}

/// TOML-file backed configuration store
#[derive(Clone)]
pub struct FsConfigStore {
    path: PathBuf,
}

impl FsConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ConfigStore for FsConfigStore {
    async fn load(&self) -> Result<Option<ScheduleConfig>, ConfigStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let config =
            toml::from_str(&raw).map_err(|e| ConfigStoreError::Decode(e.to_string()))?;
        Ok(Some(config))
    }

    async fn save(&self, config: &ScheduleConfig) -> Result<(), ConfigStoreError> {
        let raw =
            toml::to_string_pretty(config).map_err(|e| ConfigStoreError::Encode(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // write-then-rename so a crash mid-save never truncates the config
        let tmp = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
