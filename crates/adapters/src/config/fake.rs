// SPDX-License-Identifier: MIT

//! Fake configuration store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ConfigStore, ConfigStoreError};
use async_trait::async_trait;
use offpeak_core::ScheduleConfig;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    saved: Option<ScheduleConfig>,
    saves: usize,
    fail_save: bool,
}

/// Fake configuration store for testing
#[derive(Clone, Default)]
pub struct FakeConfigStore {
    inner: Arc<Mutex<Inner>>,
}

impl FakeConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a persisted configuration
    pub fn seeded(config: ScheduleConfig) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap_or_else(|e| e.into_inner()).saved = Some(config);
        store
    }

    /// The configuration most recently saved, if any
    pub fn saved(&self) -> Option<ScheduleConfig> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .saved
            .clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).saves
    }

    /// Make every save fail until called with `false`
    pub fn set_save_failing(&self, failing: bool) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_save = failing;
    }
}

#[async_trait]
impl ConfigStore for FakeConfigStore {
    async fn load(&self) -> Result<Option<ScheduleConfig>, ConfigStoreError> {
        Ok(self.saved())
    }

    async fn save(&self, config: &ScheduleConfig) -> Result<(), ConfigStoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.fail_save {
            return Err(ConfigStoreError::SaveFailed("scripted failure".to_string()));
        }
        inner.saved = Some(config.clone());
        inner.saves += 1;
        Ok(())
    }
}
