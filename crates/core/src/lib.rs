// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! evbus-core: in-process publish/subscribe registry
//!
//! This crate provides:
//! - A constructible `Registry` mapping event names to handlers
//! - Synchronous, re-entrancy safe dispatch in registration order
//! - Fire-once subscriptions and removal by id, by handler, or by event name
//! - Fail-fast or isolated handling of handler failures

pub mod config;
pub mod error;
pub mod events;
pub mod id;

// Re-exports
pub use config::RegistryConfig;
pub use error::{ConfigError, PublishError, SubscribeError};
pub use events::{
    Args, DispatchMode, Failure, Handler, HandlerError, HandlerFailure, Registry, Subscription,
    Target,
};
pub use id::{IdGen, SequentialIdGen, SubscriptionId, UuidIdGen};
