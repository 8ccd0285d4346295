// # ec2dns-core
//
// Core library for EC2 lifecycle → Route 53 record synchronization.
//
// ## Architecture Overview
//
// - **event**: typed EC2 state-change payload, validated at the boundary
// - **tags**: zone assignment and naming intent read off instance tags
// - **planner**: pure record planning (register create-set, unregister
//   delete-set); the only part with real decision logic
// - **traits**: collaborator seams (`InstanceSource`, `ZoneStore`)
// - **reconciler**: single-invocation driver wiring the pieces together
//
// Each event is processed independently; no state survives an invocation
// beyond the collaborator client handles.

pub mod error;
pub mod event;
pub mod planner;
pub mod reconciler;
pub mod record;
pub mod tags;
pub mod traits;

// Re-export core types for convenience
pub use error::{Error, Result};
pub use event::{InstanceState, StateChangeEvent};
pub use reconciler::{Outcome, Reconciler};
pub use record::{
    ChangeAction, HostedZone, Instance, NetworkInterface, PrivateAddress, RecordChange,
    RecordSet, RecordType, Tag, RECORD_TTL,
};
pub use traits::{ChangeReceipt, InstanceSource, ZoneStore};
