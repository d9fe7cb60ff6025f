// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription identifiers and their generators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Opaque handle naming exactly one subscription
///
/// Returned by `subscribe` / `subscribe_once` and accepted by `unsubscribe`.
/// Carries no behavior: whether a subscription fires once is recorded on the
/// subscription itself, never encoded in its id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(pub String);

impl SubscriptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubscriptionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SubscriptionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Generates subscription identifiers
///
/// Implementations must not repeat an id for the lifetime of the generator.
/// The registry still checks each id against every id it has issued, retired
/// ones included, and redraws on a collision.
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> SubscriptionId;
}

/// UUID v4 generator (122 random bits) for production use
#[derive(Clone, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> SubscriptionId {
        SubscriptionId(uuid::Uuid::new_v4().to_string())
    }
}

/// Sequential generator for deterministic tests
///
/// Clones share the same counter, so handing a clone to a registry still
/// yields predictable ids from the original.
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("sub")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> SubscriptionId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        SubscriptionId(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
