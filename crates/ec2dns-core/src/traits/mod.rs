//! Collaborator seams for the reconciliation driver
//!
//! - [`InstanceSource`]: compute-instance metadata lookup
//! - [`ZoneStore`]: hosted-zone reads and atomic change-batch application

pub mod instance_source;
pub mod zone_store;

pub use instance_source::InstanceSource;
pub use zone_store::{ChangeReceipt, ZoneStore};
