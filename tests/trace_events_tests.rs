//! Tests for the `tracing` events emitted by the intersection primitives.
//!
//! A capturing layer records every event while a scoped subscriber is
//! installed, so each test only sees its own calls.

#![cfg(all(feature = "tracing", feature = "std-adapters"))]

use rstest::rstest;
use sorted_intersect::prelude::*;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, registry};

// =============================================================================
// Capturing Layer
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct RecordedEvent {
    level: Option<Level>,
    variant: Option<String>,
    retained: Option<u64>,
    removed: Option<u64>,
}

impl Visit for RecordedEvent {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "variant" {
            self.variant = Some(value.to_owned());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "retained" => self.retained = Some(value),
            "removed" => self.removed = Some(value),
            _ => {}
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

#[derive(Clone, Default)]
struct EventLog {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl EventLog {
    fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut recorded = RecordedEvent {
            level: Some(*event.metadata().level()),
            ..RecordedEvent::default()
        };
        event.record(&mut recorded);
        self.events.lock().unwrap().push(recorded);
    }
}

/// Runs `action` with a capturing subscriber and returns the recorded events.
fn capture<F: FnOnce()>(action: F) -> Vec<RecordedEvent> {
    let log = EventLog::default();
    let subscriber = registry().with(log.clone());
    tracing::subscriber::with_default(subscriber, action);
    log.events()
}

fn expected_event(variant: &str, retained: u64, removed: u64) -> RecordedEvent {
    RecordedEvent {
        level: Some(Level::TRACE),
        variant: Some(variant.to_owned()),
        retained: Some(retained),
        removed: Some(removed),
    }
}

// =============================================================================
// Event Contract
// =============================================================================

#[rstest]
#[case::merge(Selector::new().with_probe_weight(usize::MAX), "merge")]
#[case::probe(Selector::new().with_probe_weight(0), "probe")]
fn test_one_event_per_selected_call(#[case] selector: Selector, #[case] variant: &str) {
    let allowed: BTreeSet<i32> = [2, 4, 6].into_iter().collect();
    let mut target = vec![1, 2, 3, 4, 5];

    let events = capture(|| {
        intersect_update_with(selector, &allowed, &mut target);
    });

    assert_eq!(target, vec![2, 4]);
    assert_eq!(events, vec![expected_event(variant, 2, 3)]);
}

#[rstest]
fn test_each_call_emits_its_own_event() {
    let allowed: BTreeSet<i32> = [1, 3].into_iter().collect();
    let mut first = vec![1, 2, 3];
    let mut second = vec![3, 3, 4];

    let events = capture(|| {
        intersect_update_merge(&allowed, &mut first);
        intersect_update_probe(&allowed, &mut second);
    });

    assert_eq!(
        events,
        vec![expected_event("merge", 2, 1), expected_event("probe", 2, 1)]
    );
}

#[rstest]
fn test_vec_specialization_emits_one_event() {
    let allowed = [2, 4];
    let mut target = vec![1, 2, 3, 4];

    let events = capture(|| intersect_update_merge_vec(&allowed, &mut target));

    assert_eq!(events, vec![expected_event("merge", 2, 2)]);
}

#[rstest]
fn test_scan_emits_only_on_completion() {
    let allowed = [2, 4];
    let mut target = vec![1, 2, 3, 4];

    let events = capture(|| {
        let mut scan = MergeScan::new(&allowed, &mut target);
        assert!(!scan.step(1).is_complete());
        assert!(scan.step(10).is_complete());
        assert!(scan.step(10).is_complete());
    });

    assert_eq!(events, vec![expected_event("merge", 2, 2)]);
}

#[rstest]
fn test_abandoned_scan_emits_nothing() {
    let allowed = [2, 4];
    let mut target = vec![1, 2, 3, 4];

    let events = capture(|| {
        let mut scan = MergeScan::new(&allowed, &mut target);
        let _ = scan.step(1);
    });

    assert!(events.is_empty());
}
