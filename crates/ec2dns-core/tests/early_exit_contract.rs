//! Contract: the driver short-circuits at the first unmet precondition
//!
//! Each early exit must leave later collaborators untouched, and a
//! collaborator failure must propagate instead of being swallowed.

mod common;

use common::*;
use ec2dns_core::record::Tag;
use ec2dns_core::{InstanceState, Outcome, Reconciler, StateChangeEvent};

fn event(state: InstanceState) -> StateChangeEvent {
    StateChangeEvent {
        instance_id: "i-dummy".to_string(),
        state,
    }
}

#[tokio::test]
async fn unrecognized_state_touches_no_collaborators() {
    let instances = MockInstanceSource::new(Some(tagged_instance("i-dummy")));
    let zones = MockZoneStore::new(public_zone(), Vec::new());

    let reconciler = Reconciler::new(Box::new(instances.clone()), Box::new(zones.clone()));
    let outcome = reconciler.handle_event(&event(InstanceState::Other)).await.unwrap();

    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(instances.describe_calls(), 0);
    assert_eq!(zones.get_zone_calls(), 0);
    assert_eq!(zones.apply_calls(), 0);
}

#[tokio::test]
async fn missing_instance_stops_before_zone_lookup() {
    let instances = MockInstanceSource::new(None);
    let zones = MockZoneStore::new(public_zone(), Vec::new());

    let reconciler = Reconciler::new(Box::new(instances.clone()), Box::new(zones.clone()));
    let outcome = reconciler.handle_event(&event(InstanceState::Running)).await.unwrap();

    assert_eq!(outcome, Outcome::NoInstance);
    assert_eq!(instances.describe_calls(), 1);
    assert_eq!(zones.get_zone_calls(), 0);
    assert_eq!(zones.apply_calls(), 0);
}

#[tokio::test]
async fn missing_zone_tag_stops_before_zone_lookup() {
    let mut instance = tagged_instance("i-dummy");
    instance.tags = vec![Tag::new("Name", "dummy")];
    let instances = MockInstanceSource::new(Some(instance));
    let zones = MockZoneStore::new(public_zone(), Vec::new());

    let reconciler = Reconciler::new(Box::new(instances.clone()), Box::new(zones.clone()));
    let outcome = reconciler.handle_event(&event(InstanceState::Stopped)).await.unwrap();

    assert_eq!(outcome, Outcome::NoZoneTag);
    assert_eq!(zones.get_zone_calls(), 0);
    assert_eq!(zones.apply_calls(), 0);
}

#[tokio::test]
async fn zone_store_failure_propagates() {
    let instances = MockInstanceSource::new(Some(tagged_instance("i-dummy")));
    let zones = MockZoneStore::failing(public_zone());

    let reconciler = Reconciler::new(Box::new(instances), Box::new(zones.clone()));
    let result = reconciler.handle_event(&event(InstanceState::Running)).await;

    assert!(result.is_err());
    assert_eq!(zones.apply_calls(), 0);
}
