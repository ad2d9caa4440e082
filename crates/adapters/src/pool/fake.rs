// SPDX-License-Identifier: MIT

//! Fake pool adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PoolAdapter, PoolError};
use async_trait::async_trait;
use offpeak_core::{ResourceId, ResourcePhase, ResourceSnapshot};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Recorded pool command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolCall {
    Pause(ResourceId),
    Resume(ResourceId),
    ResumeSession,
}

#[derive(Default)]
struct Inner {
    resources: BTreeMap<ResourceId, ResourceSnapshot>,
    /// Phase to restore when a paused resource is resumed
    parked_phases: HashMap<ResourceId, ResourcePhase>,
    calls: Vec<PoolCall>,
    failing: HashSet<ResourceId>,
    list_failing: bool,
}

/// Fake pool adapter for testing
///
/// Records every command, keeps resource phases consistent with the
/// commands applied, and can inject per-resource command failures.
#[derive(Clone, Default)]
pub struct FakePoolAdapter {
    inner: Arc<Mutex<Inner>>,
}

impl FakePoolAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource
    pub fn insert(&self, snapshot: ResourceSnapshot) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.resources.insert(snapshot.id.clone(), snapshot);
    }

    /// Update the phase the pool reports for a resource
    pub fn set_phase(&self, id: &ResourceId, phase: ResourcePhase) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(resource) = inner.resources.get_mut(id) {
            resource.phase = phase;
        }
    }

    /// Make pause/resume commands for this resource fail
    pub fn fail_commands(&self, id: &ResourceId) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.failing.insert(id.clone());
    }

    /// Make `list` fail until called with `false`
    pub fn set_list_failing(&self, failing: bool) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.list_failing = failing;
    }

    /// All recorded commands, in order
    pub fn calls(&self) -> Vec<PoolCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Recorded commands touching one resource
    pub fn calls_for(&self, id: &ResourceId) -> Vec<PoolCall> {
        self.calls()
            .into_iter()
            .filter(|call| match call {
                PoolCall::Pause(c) | PoolCall::Resume(c) => c == id,
                PoolCall::ResumeSession => false,
            })
            .collect()
    }

    /// Number of pool-wide session resumes
    pub fn session_resumes(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, PoolCall::ResumeSession))
            .count()
    }

    /// Current snapshot of one resource
    pub fn snapshot(&self, id: &ResourceId) -> Option<ResourceSnapshot> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .resources
            .get(id)
            .cloned()
    }

    pub fn clear_calls(&self) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clear();
    }
}

#[async_trait]
impl PoolAdapter for FakePoolAdapter {
    async fn list(&self) -> Result<Vec<ResourceSnapshot>, PoolError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.list_failing {
            return Err(PoolError::Unavailable("scripted list failure".to_string()));
        }
        Ok(inner.resources.values().cloned().collect())
    }

    async fn get(&self, id: &ResourceId) -> Result<Option<ResourceSnapshot>, PoolError> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.resources.get(id).cloned())
    }

    async fn pause(&self, id: &ResourceId) -> Result<(), PoolError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.failing.contains(id) {
            return Err(PoolError::CommandFailed {
                id: id.clone(),
                message: "scripted failure".to_string(),
            });
        }
        let Some(current) = inner.resources.get(id).map(|r| r.phase) else {
            return Err(PoolError::NotFound(id.clone()));
        };
        if current != ResourcePhase::Paused {
            inner.parked_phases.insert(id.clone(), current);
            if let Some(resource) = inner.resources.get_mut(id) {
                resource.phase = ResourcePhase::Paused;
            }
        }
        inner.calls.push(PoolCall::Pause(id.clone()));
        Ok(())
    }

    async fn resume(&self, id: &ResourceId) -> Result<(), PoolError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.failing.contains(id) {
            return Err(PoolError::CommandFailed {
                id: id.clone(),
                message: "scripted failure".to_string(),
            });
        }
        if !inner.resources.contains_key(id) {
            return Err(PoolError::NotFound(id.clone()));
        }
        let restored = inner
            .parked_phases
            .remove(id)
            .unwrap_or(ResourcePhase::Downloading);
        if let Some(resource) = inner.resources.get_mut(id) {
            if resource.phase == ResourcePhase::Paused {
                resource.phase = restored;
            }
        }
        inner.calls.push(PoolCall::Resume(id.clone()));
        Ok(())
    }

    async fn resume_session(&self) -> Result<(), PoolError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(PoolCall::ResumeSession);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
