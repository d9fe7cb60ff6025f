// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription records and removal targets

use super::handler::Handler;
use crate::id::SubscriptionId;

/// A handler registered under one event name
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriptionId,
    /// Removed by the first publish that invokes it
    pub once: bool,
    pub handler: Handler,
}

impl Subscription {
    pub fn new(id: SubscriptionId, handler: Handler, once: bool) -> Self {
        Self { id, once, handler }
    }
}

/// What `unsubscribe` removes from an event name
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    /// Every subscription
    All,
    /// Exactly the subscription with this id
    Id(&'a SubscriptionId),
    /// Every subscription whose handler is this handler (by identity)
    Handler(&'a Handler),
}

impl Target<'_> {
    pub fn matches(&self, subscription: &Subscription) -> bool {
        match self {
            Target::All => true,
            Target::Id(id) => subscription.id == **id,
            Target::Handler(handler) => subscription.handler.same_as(handler),
        }
    }

    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Target::All => "all",
            Target::Id(_) => "id",
            Target::Handler(_) => "handler",
        }
    }
}

impl<'a> From<&'a SubscriptionId> for Target<'a> {
    fn from(id: &'a SubscriptionId) -> Self {
        Target::Id(id)
    }
}

impl<'a> From<&'a Handler> for Target<'a> {
    fn from(handler: &'a Handler) -> Self {
        Target::Handler(handler)
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
