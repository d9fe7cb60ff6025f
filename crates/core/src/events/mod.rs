// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process publish/subscribe by event name
//!
//! This module provides:
//! - `Registry` - Holds subscriptions and dispatches published events to them
//! - `Handler` - Shared callback with identity, for removal by reference
//! - `Subscription` / `Target` - Subscription records and removal selectors
//! - `DispatchMode` - Fail-fast or isolated handling of handler failures

mod dispatch;
mod handler;
mod registry;
mod subscription;

pub use dispatch::{DispatchMode, Failure, HandlerFailure};
pub use handler::{Args, Handler, HandlerError};
pub use registry::{Registry, MAX_ID_ATTEMPTS};
pub use subscription::{Subscription, Target};

#[cfg(test)]
mod tests;
