// SPDX-License-Identifier: MIT

//! Read-only view of the resources managed by the external pool
//!
//! The pool owns resource lifecycles entirely; the core only looks at
//! snapshots and issues pause/resume commands by id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a managed resource, issued by the pool
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The phase a resource is currently in, as reported by the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourcePhase {
    Queued,
    Checking,
    Downloading,
    Seeding,
    Paused,
    Error,
}

impl fmt::Display for ResourcePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourcePhase::Queued => write!(f, "queued"),
            ResourcePhase::Checking => write!(f, "checking"),
            ResourcePhase::Downloading => write!(f, "downloading"),
            ResourcePhase::Seeding => write!(f, "seeding"),
            ResourcePhase::Paused => write!(f, "paused"),
            ResourcePhase::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for ResourcePhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(ResourcePhase::Queued),
            "checking" => Ok(ResourcePhase::Checking),
            "downloading" => Ok(ResourcePhase::Downloading),
            "seeding" => Ok(ResourcePhase::Seeding),
            "paused" => Ok(ResourcePhase::Paused),
            "error" => Ok(ResourcePhase::Error),
            _ => Err(format!("unknown resource phase: {}", s)),
        }
    }
}

/// Point-in-time view of one pool resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot {
    pub id: ResourceId,
    pub name: String,
    pub phase: ResourcePhase,
    /// Completion percentage, 0.0 through 100.0
    pub progress: f32,
    /// Whether pause/resume is delegated to the scheduler rather than the user
    pub auto_managed: bool,
}

impl ResourceSnapshot {
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phase: ResourcePhase::Queued,
            progress: 0.0,
            auto_managed: true,
        }
    }

    pub fn with_phase(mut self, phase: ResourcePhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = progress;
        self
    }

    pub fn manual(mut self) -> Self {
        self.auto_managed = false;
        self
    }

    /// Whether the download has finished
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
