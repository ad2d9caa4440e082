// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external collaborators
//!
//! The resource pool, the outbound notification channel, and configuration
//! persistence are all owned by the host; these traits are the seams the
//! engine talks through.

pub mod config;
pub mod notify;
pub mod pool;
pub mod traced;

pub use config::{ConfigStore, ConfigStoreError, FsConfigStore};
pub use notify::{NoOpNotifyAdapter, NotifyAdapter, NotifyError};
pub use pool::{NoOpPoolAdapter, PoolAdapter, PoolError};
pub use traced::TracedPoolAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use config::FakeConfigStore;
#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifyAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use pool::{FakePoolAdapter, PoolCall};
