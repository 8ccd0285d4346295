//! Typed EC2 state-change event payload
//!
//! EventBridge delivers the state change as the `detail` object of a
//! CloudWatch event. The payload is validated at the boundary: an
//! unrecognized lifecycle state becomes an explicit [`InstanceState::Other`]
//! variant rather than a fallthrough default.

use serde::{Deserialize, Serialize};

/// Lifecycle state carried by an EC2 instance state-change notification
///
/// Serialize is needed alongside Deserialize: the Lambda event envelope
/// bounds its detail type on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Running,
    Stopped,
    Terminated,
    /// Any state this system does not react to (pending, stopping, ...)
    #[serde(other)]
    Other,
}

/// The `detail` object of an EC2 instance state-change notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateChangeEvent {
    #[serde(rename = "instance-id")]
    pub instance_id: String,
    pub state: InstanceState,
}
