// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the events system

use super::*;
use crate::config::RegistryConfig;
use crate::id::SequentialIdGen;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// A consumer that keeps every order total it has seen
struct Ledger {
    totals: Arc<Mutex<Vec<i64>>>,
    handler: Handler,
}

impl Ledger {
    fn new() -> Self {
        let totals = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&totals);
        let handler = Handler::new(move |args: &Args| {
            let total = args
                .first()
                .and_then(Value::as_i64)
                .ok_or("order total missing")?;
            sink.lock().unwrap().push(total);
            Ok(())
        });
        Self { totals, handler }
    }

    fn attach(&self, registry: &Registry<SequentialIdGen>) {
        registry.subscribe("order:placed", self.handler.clone()).unwrap();
    }

    fn detach(&self, registry: &Registry<SequentialIdGen>) {
        registry.unsubscribe("order:placed", &self.handler);
    }

    fn totals(&self) -> Vec<i64> {
        self.totals.lock().unwrap().clone()
    }
}

#[test]
fn producers_and_consumers_share_an_injected_registry() {
    let registry = Registry::with_id_gen(SequentialIdGen::new("sub"), RegistryConfig::default());
    let producer = registry.clone();
    let ledger = Ledger::new();

    ledger.attach(&registry);
    producer.publish("order:placed", &[json!(40)]).unwrap();
    producer.publish("order:placed", &[json!(2)]).unwrap();
    ledger.detach(&registry);
    producer.publish("order:placed", &[json!(99)]).unwrap();

    assert_eq!(ledger.totals(), vec![40, 2]);
    assert!(registry.is_empty());
}

#[test]
fn consumer_rejecting_args_surfaces_to_producer() {
    let registry = Registry::with_id_gen(SequentialIdGen::new("sub"), RegistryConfig::default());
    let ledger = Ledger::new();
    ledger.attach(&registry);

    let err = registry
        .publish("order:placed", &[json!("not a number")])
        .unwrap_err();

    assert!(err.to_string().contains("order total missing"));
    assert!(ledger.totals().is_empty());
}

#[test]
fn once_subscription_chain_hands_off_between_events() {
    let registry = Registry::with_id_gen(SequentialIdGen::new("sub"), RegistryConfig::default());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let inner = registry.clone();
    let log = Arc::clone(&seen);
    registry
        .subscribe_once(
            "ready",
            Handler::new(move |_| {
                log.lock().unwrap().push("ready");
                let log = Arc::clone(&log);
                inner.subscribe_once(
                    "ready",
                    Handler::infallible(move |_| log.lock().unwrap().push("ready-again")),
                )?;
                Ok(())
            }),
        )
        .unwrap();

    registry.publish("ready", &[]).unwrap();
    registry.publish("ready", &[]).unwrap();
    registry.publish("ready", &[]).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["ready", "ready-again"]);
    assert!(!registry.has_subscribers("ready"));
}
