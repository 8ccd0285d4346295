//! Tag extraction
//!
//! Tag absence is a valid, expected outcome, not a failure. Keys are not
//! guaranteed unique; the first match wins.

use crate::record::Tag;

/// Tag key assigning an instance to a hosted zone; instances without it are
/// invisible to this system
pub const HOSTED_ZONE_TAG: &str = "HostedZone";

/// Tag key for the human-readable label, highest precedence
pub const HOST_NAME_TAG: &str = "HostName";

/// Fallback tag key for the human-readable label
pub const NAME_TAG: &str = "Name";

/// Value of the first tag whose key matches, or `None` if absent
pub fn tag_value<'a>(tags: &'a [Tag], key: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| tag.key == key)
        .map(|tag| tag.value.as_str())
}
