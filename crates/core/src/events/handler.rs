// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event handlers and their identity

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Positional arguments passed to every handler of a publish
pub type Args = [Value];

/// Error a handler may return to its publisher
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

type HandlerFn = dyn Fn(&Args) -> Result<(), HandlerError> + Send + Sync;

/// A shared callback registered against an event name
///
/// Cloning a `Handler` shares the same callback, and clones compare equal
/// under [`Handler::same_as`]. Wrapping the same closure twice creates two
/// distinct handlers.
#[derive(Clone)]
pub struct Handler(Arc<HandlerFn>);

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Args) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap a callback that cannot fail
    pub fn infallible<F>(f: F) -> Self
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        Self::new(move |args| {
            f(args);
            Ok(())
        })
    }

    pub fn call(&self, args: &Args) -> Result<(), HandlerError> {
        (self.0)(args)
    }

    /// Identity comparison (same allocation), never a comparison of behavior
    pub fn same_as(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.0))
    }
}
