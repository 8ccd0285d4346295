//! DNS zone store trait

use async_trait::async_trait;

use crate::error::Result;
use crate::record::{HostedZone, RecordChange, RecordSet};

/// Outcome of a submitted change batch, logged verbatim for audit purposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReceipt {
    pub id: String,
    pub status: String,
}

/// Access to a DNS zone: configuration reads, record listing, and atomic
/// application of a change batch
///
/// Batch semantics are owned by the store: failure of any change fails the
/// whole batch, and this system relies on that atomicity instead of
/// reimplementing it.
#[async_trait]
pub trait ZoneStore: Send + Sync {
    /// Fetch zone configuration by id.
    ///
    /// The returned zone carries the requested id even if the underlying
    /// fetch does not echo it.
    async fn get_zone(&self, id: &str) -> Result<HostedZone>;

    /// List every record set in the zone. One unpaginated call; the zone's
    /// record set is assumed to fit in a single listing response.
    async fn list_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>>;

    /// Atomically apply an ordered list of create/delete changes.
    async fn apply_change_batch(
        &self,
        zone_id: &str,
        changes: Vec<RecordChange>,
    ) -> Result<ChangeReceipt>;
}
