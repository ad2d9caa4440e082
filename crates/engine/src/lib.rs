// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! offpeak execution engine
//!
//! Wires the pure scheduler machine to real time and real adapters: a
//! poll-based timer queue, an effect executor, a runtime that serializes
//! all reconciliations, and the bridge consuming host lifecycle events.

mod bridge;
mod error;
mod executor;
mod runtime;
mod timers;

pub use bridge::{EventBridge, HostEvent};
pub use error::RuntimeError;
pub use executor::{ExecuteError, Executor};
pub use runtime::{Runtime, RuntimeDeps};
pub use timers::TimerQueue;
