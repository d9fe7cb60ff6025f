// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler invocation modes and failure capture

use super::handler::{Args, Handler, HandlerError};
use crate::id::SubscriptionId;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// How `publish` reacts to a failing handler
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// The first handler error aborts the remaining dispatch and is returned
    /// to the publisher. Panics unwind through `publish`.
    #[default]
    FailFast,
    /// Every handler runs; errors and panics are collected and returned
    /// together once dispatch completes.
    Isolate,
}

/// Why a handler failed in isolated dispatch
#[derive(Debug, Error)]
pub enum Failure {
    #[error("{0}")]
    Error(HandlerError),
    #[error("panicked: {0}")]
    Panic(String),
}

/// A handler failure captured during isolated dispatch
#[derive(Debug)]
pub struct HandlerFailure {
    pub id: SubscriptionId,
    pub cause: Failure,
}

/// Run a handler, converting both errors and panics into a `Failure`
pub(crate) fn call_isolated(handler: &Handler, args: &Args) -> Result<(), Failure> {
    match panic::catch_unwind(AssertUnwindSafe(|| handler.call(args))) {
        Ok(result) => result.map_err(Failure::Error),
        Err(payload) => Err(Failure::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
