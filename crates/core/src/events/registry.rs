// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription registry: synchronous publish/subscribe by event name

use super::dispatch::{self, DispatchMode, HandlerFailure};
use super::handler::{Args, Handler};
use super::subscription::{Subscription, Target};
use crate::config::RegistryConfig;
use crate::error::{PublishError, SubscribeError};
use crate::id::{IdGen, SubscriptionId, UuidIdGen};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Consecutive id collisions tolerated before the generator is considered broken
pub const MAX_ID_ATTEMPTS: usize = 8;

#[derive(Default)]
struct Inner {
    /// Event name to subscriptions in registration order. Never holds an
    /// empty list.
    events: HashMap<String, Vec<Subscription>>,
    /// Every live subscription id, across all event names
    live: HashSet<SubscriptionId>,
    /// Every id ever handed out, retired ones included, so a stale handle can
    /// never name a later subscription
    issued: HashSet<SubscriptionId>,
}

impl Inner {
    fn remove_matching(&mut self, event: &str, target: Target<'_>) -> usize {
        let Some(subs) = self.events.get_mut(event) else {
            return 0;
        };
        let live = &mut self.live;
        let before = subs.len();
        subs.retain(|sub| {
            if target.matches(sub) {
                live.remove(&sub.id);
                false
            } else {
                true
            }
        });
        let removed = before - subs.len();
        if subs.is_empty() {
            self.events.remove(event);
        }
        removed
    }
}

/// The registry maps event names to handlers and invokes them on publish
///
/// Handlers run synchronously on the publisher's thread, in registration
/// order. The internal lock is released while handlers run, so a handler may
/// subscribe, unsubscribe or publish on the same registry.
///
/// Clones share state: construct one registry and hand clones to every
/// producer and consumer that should see the same subscriptions.
pub struct Registry<G: IdGen = UuidIdGen> {
    inner: Arc<Mutex<Inner>>,
    id_gen: G,
    config: RegistryConfig,
}

impl Registry<UuidIdGen> {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_id_gen(UuidIdGen, config)
    }
}

impl<G: IdGen> Registry<G> {
    pub fn with_id_gen(id_gen: G, config: RegistryConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            id_gen,
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register `handler` for every publish of `event`
    pub fn subscribe(
        &self,
        event: &str,
        handler: Handler,
    ) -> Result<SubscriptionId, SubscribeError> {
        self.insert(event, handler, false)
    }

    /// Register `handler` for the next publish of `event` only
    ///
    /// The subscription is removed by the publish that invokes it, before the
    /// handler runs, so it fires at most once even if that handler publishes
    /// `event` again. While the handler runs, `contains` on its own id is
    /// already false and unsubscribing it is a no-op.
    pub fn subscribe_once(
        &self,
        event: &str,
        handler: Handler,
    ) -> Result<SubscriptionId, SubscribeError> {
        self.insert(event, handler, true)
    }

    fn insert(
        &self,
        event: &str,
        handler: Handler,
        once: bool,
    ) -> Result<SubscriptionId, SubscribeError> {
        let mut inner = self.lock();
        let id = self.allocate_id(&inner.issued, event)?;

        inner.issued.insert(id.clone());
        inner.live.insert(id.clone());
        inner
            .events
            .entry(event.to_string())
            .or_default()
            .push(Subscription::new(id.clone(), handler, once));

        tracing::debug!(event, %id, once, "subscribed");
        Ok(id)
    }

    fn allocate_id(
        &self,
        issued: &HashSet<SubscriptionId>,
        event: &str,
    ) -> Result<SubscriptionId, SubscribeError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.id_gen.next();
            if !issued.contains(&id) {
                return Ok(id);
            }
            tracing::error!(event, %id, attempt, "subscription id collision");
        }
        Err(SubscribeError::IdExhausted {
            event: event.to_string(),
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Invoke every handler subscribed to `event` with `args`
    ///
    /// Dispatch walks a snapshot taken when the call begins: subscriptions
    /// added by a handler wait for the next publish, and snapshot entries
    /// removed before their turn are skipped. Returns how many handlers ran.
    pub fn publish(&self, event: &str, args: &Args) -> Result<usize, PublishError> {
        let snapshot: Vec<Subscription> = match self.lock().events.get(event) {
            Some(subs) => subs.clone(),
            None => {
                tracing::trace!(event, "no subscribers");
                return Ok(0);
            }
        };

        tracing::debug!(
            event,
            subscribers = snapshot.len(),
            args = args.len(),
            "publishing"
        );

        let mut invoked = 0;
        let mut failures = Vec::new();

        for sub in snapshot {
            if !self.claim(event, &sub) {
                tracing::trace!(event, id = %sub.id, "skipping removed subscription");
                continue;
            }

            tracing::trace!(event, id = %sub.id, once = sub.once, "dispatching");
            invoked += 1;

            match self.config.dispatch {
                DispatchMode::FailFast => {
                    if let Err(source) = sub.handler.call(args) {
                        tracing::debug!(
                            event,
                            id = %sub.id,
                            error = %source,
                            "handler failed, aborting dispatch"
                        );
                        return Err(PublishError::Handler {
                            event: event.to_string(),
                            id: sub.id,
                            source,
                        });
                    }
                }
                DispatchMode::Isolate => {
                    if let Err(cause) = dispatch::call_isolated(&sub.handler, args) {
                        tracing::warn!(event, id = %sub.id, error = %cause, "handler failed");
                        failures.push(HandlerFailure { id: sub.id, cause });
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(invoked)
        } else {
            Err(PublishError::Isolated {
                event: event.to_string(),
                invoked,
                failures,
            })
        }
    }

    /// Confirm a snapshot entry is still live, removing it if it fires once
    ///
    /// Ids are never reissued, so a live id is still registered under the
    /// event it was snapshotted from.
    fn claim(&self, event: &str, sub: &Subscription) -> bool {
        let mut inner = self.lock();
        let live = inner.live.contains(&sub.id);
        if live && sub.once {
            inner.remove_matching(event, Target::Id(&sub.id));
        }
        live
    }

    /// Remove the subscriptions under `event` selected by `target`
    ///
    /// Unknown event names, ids and handlers are no-ops. Returns how many
    /// subscriptions were removed.
    pub fn unsubscribe<'a>(&self, event: &str, target: impl Into<Target<'a>>) -> usize {
        let target = target.into();
        let removed = self.lock().remove_matching(event, target);
        tracing::debug!(event, target = target.kind(), removed, "unsubscribed");
        removed
    }

    /// Remove every subscription for every event name
    ///
    /// Issued ids stay retired.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.events.clear();
        inner.live.clear();
    }

    pub fn has_subscribers(&self, event: &str) -> bool {
        self.lock().events.contains_key(event)
    }

    pub fn subscriber_count(&self, event: &str) -> usize {
        self.lock().events.get(event).map_or(0, Vec::len)
    }

    /// Total live subscriptions across all event names
    pub fn len(&self) -> usize {
        self.lock().live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().live.is_empty()
    }

    pub fn contains(&self, id: &SubscriptionId) -> bool {
        self.lock().live.contains(id)
    }

    /// Event names with at least one subscription, sorted
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().events.keys().cloned().collect();
        names.sort();
        names
    }

    /// Subscription ids for `event` in registration order
    pub fn list_subscriptions(&self, event: &str) -> Vec<SubscriptionId> {
        self.lock()
            .events
            .get(event)
            .map(|subs| subs.iter().map(|s| s.id.clone()).collect())
            .unwrap_or_default()
    }
}

impl Default for Registry<UuidIdGen> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGen> Clone for Registry<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            id_gen: self.id_gen.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G: IdGen> fmt::Debug for Registry<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Registry")
            .field("events", &inner.events.len())
            .field("subscriptions", &inner.live.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
