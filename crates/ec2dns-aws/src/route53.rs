//! Route 53-backed zone store

use async_trait::async_trait;
use aws_sdk_route53::types as r53;
use aws_sdk_route53::Client;
use tracing::debug;

use ec2dns_core::error::{Error, Result};
use ec2dns_core::record::{ChangeAction, HostedZone, RecordChange, RecordSet, RecordType};
use ec2dns_core::traits::{ChangeReceipt, ZoneStore};

/// Zone reads and atomic change batches via the Route 53 API
#[derive(Debug, Clone)]
pub struct Route53ZoneStore {
    client: Client,
}

impl Route53ZoneStore {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ZoneStore for Route53ZoneStore {
    async fn get_zone(&self, id: &str) -> Result<HostedZone> {
        debug!(zone_id = %id, "fetching hosted zone");

        let output = self
            .client
            .get_hosted_zone()
            .id(id)
            .send()
            .await
            .map_err(|e| Error::zone_store(e.to_string()))?;

        let zone = output
            .hosted_zone()
            .ok_or_else(|| Error::zone_store(format!("hosted zone {id} not in response")))?;

        Ok(from_sdk_zone(zone, id))
    }

    async fn list_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>> {
        debug!(zone_id = %zone_id, "listing record sets");

        let output = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .send()
            .await
            .map_err(|e| Error::zone_store(e.to_string()))?;

        Ok(output
            .resource_record_sets()
            .iter()
            .map(from_sdk_record_set)
            .collect())
    }

    async fn apply_change_batch(
        &self,
        zone_id: &str,
        changes: Vec<RecordChange>,
    ) -> Result<ChangeReceipt> {
        debug!(zone_id = %zone_id, changes = changes.len(), "applying change batch");

        let sdk_changes = changes
            .into_iter()
            .map(to_sdk_change)
            .collect::<Result<Vec<_>>>()?;

        let batch = r53::ChangeBatch::builder()
            .set_changes(Some(sdk_changes))
            .build()
            .map_err(|e| Error::zone_store(e.to_string()))?;

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| Error::zone_store(e.to_string()))?;

        let info = output
            .change_info()
            .ok_or_else(|| Error::zone_store("change batch response carried no change info"))?;

        Ok(ChangeReceipt {
            id: info.id().to_string(),
            status: info.status().as_str().to_string(),
        })
    }
}

/// Map an SDK hosted zone onto the domain model.
///
/// The fetch may echo a prefixed id ("/hostedzone/..."); keep the id the
/// instance tag named so later calls stay consistent. A zone without
/// config is public.
fn from_sdk_zone(zone: &r53::HostedZone, requested_id: &str) -> HostedZone {
    HostedZone {
        id: requested_id.to_string(),
        name: zone.name().to_string(),
        private: zone
            .config()
            .map(|config| config.private_zone())
            .unwrap_or(false),
    }
}

fn from_sdk_record_set(set: &r53::ResourceRecordSet) -> RecordSet {
    RecordSet {
        name: set.name().to_string(),
        rtype: RecordType::from(set.r#type().as_str()),
        ttl: set.ttl(),
        values: set
            .resource_records()
            .iter()
            .map(|record| record.value().to_string())
            .collect(),
    }
}

fn to_sdk_record_set(set: RecordSet) -> Result<r53::ResourceRecordSet> {
    let records = set
        .values
        .into_iter()
        .map(|value| {
            r53::ResourceRecord::builder()
                .value(value)
                .build()
                .map_err(|e| Error::zone_store(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    r53::ResourceRecordSet::builder()
        .name(set.name)
        .r#type(r53::RrType::from(set.rtype.as_str()))
        .set_ttl(set.ttl)
        .set_resource_records(Some(records))
        .build()
        .map_err(|e| Error::zone_store(e.to_string()))
}

fn to_sdk_change(change: RecordChange) -> Result<r53::Change> {
    let action = match change.action {
        ChangeAction::Create => r53::ChangeAction::Create,
        ChangeAction::Delete => r53::ChangeAction::Delete,
    };

    r53::Change::builder()
        .action(action)
        .resource_record_set(to_sdk_record_set(change.record)?)
        .build()
        .map_err(|e| Error::zone_store(e.to_string()))
}
