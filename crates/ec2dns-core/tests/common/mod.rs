//! Test doubles and common utilities for driver contract tests
//!
//! The mocks track call counts and recorded arguments so tests can assert
//! which collaborators were touched and with what.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ec2dns_core::error::{Error, Result};
use ec2dns_core::record::{
    HostedZone, Instance, NetworkInterface, PrivateAddress, RecordChange, RecordSet, Tag,
};
use ec2dns_core::traits::{ChangeReceipt, InstanceSource, ZoneStore};

/// An InstanceSource returning a fixed answer and counting lookups
#[derive(Clone)]
pub struct MockInstanceSource {
    instance: Option<Instance>,
    describe_calls: Arc<AtomicUsize>,
    requested_tag_keys: Arc<Mutex<Vec<String>>>,
}

impl MockInstanceSource {
    pub fn new(instance: Option<Instance>) -> Self {
        Self {
            instance,
            describe_calls: Arc::new(AtomicUsize::new(0)),
            requested_tag_keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn describe_calls(&self) -> usize {
        self.describe_calls.load(Ordering::SeqCst)
    }

    pub fn requested_tag_keys(&self) -> Vec<String> {
        self.requested_tag_keys.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl InstanceSource for MockInstanceSource {
    async fn describe_instance(&self, _id: &str, tag_key: &str) -> Result<Option<Instance>> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_tag_keys
            .lock()
            .unwrap()
            .push(tag_key.to_string());
        Ok(self.instance.clone())
    }
}

/// A ZoneStore over one fixed zone, counting every call and recording
/// applied batches
#[derive(Clone)]
pub struct MockZoneStore {
    zone: HostedZone,
    sets: Vec<RecordSet>,
    fail_get_zone: bool,
    get_zone_calls: Arc<AtomicUsize>,
    list_calls: Arc<AtomicUsize>,
    apply_calls: Arc<AtomicUsize>,
    requested_zone_ids: Arc<Mutex<Vec<String>>>,
    applied_batches: Arc<Mutex<Vec<Vec<RecordChange>>>>,
}

impl MockZoneStore {
    pub fn new(zone: HostedZone, sets: Vec<RecordSet>) -> Self {
        Self {
            zone,
            sets,
            fail_get_zone: false,
            get_zone_calls: Arc::new(AtomicUsize::new(0)),
            list_calls: Arc::new(AtomicUsize::new(0)),
            apply_calls: Arc::new(AtomicUsize::new(0)),
            requested_zone_ids: Arc::new(Mutex::new(Vec::new())),
            applied_batches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store whose zone lookup always fails
    pub fn failing(zone: HostedZone) -> Self {
        let mut store = Self::new(zone, Vec::new());
        store.fail_get_zone = true;
        store
    }

    pub fn get_zone_calls(&self) -> usize {
        self.get_zone_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn apply_calls(&self) -> usize {
        self.apply_calls.load(Ordering::SeqCst)
    }

    pub fn requested_zone_ids(&self) -> Vec<String> {
        self.requested_zone_ids.lock().unwrap().clone()
    }

    pub fn applied_batches(&self) -> Vec<Vec<RecordChange>> {
        self.applied_batches.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ZoneStore for MockZoneStore {
    async fn get_zone(&self, id: &str) -> Result<HostedZone> {
        self.get_zone_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_zone_ids.lock().unwrap().push(id.to_string());
        if self.fail_get_zone {
            return Err(Error::zone_store("zone lookup failed"));
        }
        Ok(self.zone.clone())
    }

    async fn list_record_sets(&self, _zone_id: &str) -> Result<Vec<RecordSet>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.sets.clone())
    }

    async fn apply_change_batch(
        &self,
        _zone_id: &str,
        changes: Vec<RecordChange>,
    ) -> Result<ChangeReceipt> {
        self.apply_calls.fetch_add(1, Ordering::SeqCst);
        self.applied_batches.lock().unwrap().push(changes);
        Ok(ChangeReceipt {
            id: "change-1".to_string(),
            status: "PENDING".to_string(),
        })
    }
}

/// An instance tagged into the test zone, with one public IPv4 address
pub fn tagged_instance(id: &str) -> Instance {
    Instance {
        id: id.to_string(),
        interfaces: vec![NetworkInterface {
            private_addresses: vec![PrivateAddress {
                private_ip: None,
                public_ip: Some("0.0.0.0".to_string()),
            }],
            ipv6_addresses: Vec::new(),
        }],
        tags: vec![Tag::new("HostedZone", "Z-DUMMY")],
    }
}

pub fn public_zone() -> HostedZone {
    HostedZone {
        id: "Z-DUMMY".to_string(),
        name: "example.org.".to_string(),
        private: false,
    }
}
