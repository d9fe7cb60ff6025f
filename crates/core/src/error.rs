// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the registry

use crate::events::{HandlerError, HandlerFailure};
use crate::id::SubscriptionId;
use thiserror::Error;

/// Errors returned by `publish`
#[derive(Debug, Error)]
pub enum PublishError {
    /// A handler failed and the rest of the dispatch was abandoned (fail-fast)
    #[error("handler {id} for event '{event}' failed: {source}")]
    Handler {
        event: String,
        id: SubscriptionId,
        source: HandlerError,
    },
    /// One or more handlers failed while every handler still ran (isolated)
    #[error("{} of {invoked} handler(s) for event '{event}' failed", .failures.len())]
    Isolated {
        event: String,
        invoked: usize,
        failures: Vec<HandlerFailure>,
    },
}

impl PublishError {
    pub fn event(&self) -> &str {
        match self {
            PublishError::Handler { event, .. } | PublishError::Isolated { event, .. } => event,
        }
    }
}

/// Errors returned by `subscribe` / `subscribe_once`
#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("id generator produced {attempts} colliding ids for event '{event}'")]
    IdExhausted { event: String, attempts: usize },
}

/// Errors loading a `RegistryConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid registry config: {0}")]
    Parse(#[from] toml::de::Error),
}
