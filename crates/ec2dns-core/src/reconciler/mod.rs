//! Reconciliation driver
//!
//! Orchestrates one lifecycle event end to end:
//!
//! ```text
//! event ──▶ classify ──▶ resolve instance ──▶ resolve zone ──▶ plan ──▶ apply
//! ```
//!
//! The driver short-circuits at the first unmet precondition. Expected
//! absences (no matching instance, no zone tag, empty plan) log an
//! informational line and terminate the invocation cleanly; collaborator
//! failures propagate uncaught. No retries happen here: the trigger is
//! configured for at most one attempt per event, so a failed invocation is
//! a dropped event.

use tracing::info;

use crate::error::Result;
use crate::event::{InstanceState, StateChangeEvent};
use crate::planner::{canonical_name, plan_register, plan_unregister};
use crate::tags::{tag_value, HOSTED_ZONE_TAG};
use crate::traits::{InstanceSource, ZoneStore};

/// The two reconciliation paths, selected by the event's lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Register,
    Unregister,
}

/// How an invocation terminated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lifecycle state this system does not react to
    Ignored,
    /// No instance matched the id and zone-assignment tag filter
    NoInstance,
    /// Instance resolved but carries no zone-assignment tag
    NoZoneTag,
    /// The planner produced an empty change batch
    NoChanges,
    /// A change batch was submitted
    Applied { changes: usize },
}

/// Drives record reconciliation for one event at a time
///
/// Holds the collaborator handles for the life of the process; both are
/// immutable after construction and safe to reuse across concurrent
/// invocations.
pub struct Reconciler {
    instances: Box<dyn InstanceSource>,
    zones: Box<dyn ZoneStore>,
}

impl Reconciler {
    pub fn new(instances: Box<dyn InstanceSource>, zones: Box<dyn ZoneStore>) -> Self {
        Self { instances, zones }
    }

    /// Process one instance state-change event.
    ///
    /// Returns the terminal [`Outcome`]; collaborator errors propagate to
    /// the caller and mark the invocation failed.
    pub async fn handle_event(&self, event: &StateChangeEvent) -> Result<Outcome> {
        let action = match event.state {
            InstanceState::Running => Action::Register,
            InstanceState::Stopped | InstanceState::Terminated => Action::Unregister,
            InstanceState::Other => return Ok(Outcome::Ignored),
        };

        let Some(instance) = self
            .instances
            .describe_instance(&event.instance_id, HOSTED_ZONE_TAG)
            .await?
        else {
            info!(instance_id = %event.instance_id, "no matching instance");
            return Ok(Outcome::NoInstance);
        };

        let Some(zone_id) = tag_value(&instance.tags, HOSTED_ZONE_TAG) else {
            info!(instance_id = %instance.id, "no hosted zone assigned");
            return Ok(Outcome::NoZoneTag);
        };

        let zone = self.zones.get_zone(zone_id).await?;

        let changes = match action {
            Action::Register => plan_register(&instance, &zone),
            Action::Unregister => {
                let sets = self.zones.list_record_sets(&zone.id).await?;
                plan_unregister(&canonical_name(&instance.id, &zone.name), sets)
            }
        };
        if changes.is_empty() {
            info!(instance_id = %instance.id, zone_id = %zone.id, "no changes");
            return Ok(Outcome::NoChanges);
        }

        let submitted = changes.len();
        let receipt = self.zones.apply_change_batch(&zone.id, changes).await?;
        info!(
            instance_id = %instance.id,
            zone_id = %zone.id,
            changes = submitted,
            receipt = ?receipt,
            "change batch applied"
        );

        Ok(Outcome::Applied { changes: submitted })
    }
}
