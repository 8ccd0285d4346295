//! Instance metadata provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::record::Instance;

/// Read-only access to compute-instance metadata
///
/// Implementations must be thread-safe; a single client handle is reused
/// across invocations and carries no business state.
#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// Look up one instance by id, filtered to instances carrying the given
    /// tag key.
    ///
    /// Returns `Ok(None)` when no instance matches the filter; that is an
    /// expected absence, not an error.
    async fn describe_instance(&self, id: &str, tag_key: &str) -> Result<Option<Instance>>;
}
