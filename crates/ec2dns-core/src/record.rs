//! Domain model for instances, hosted zones, and record changes
//!
//! These types are constructed fresh per invocation from collaborator
//! responses and discarded once the change batch has been applied. Nothing
//! here is persisted.

/// Fixed TTL applied to every created record set, in seconds
pub const RECORD_TTL: i64 = 300;

/// A key/value tag on an instance
///
/// Keys are not guaranteed unique; lookups take the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A private IPv4 address entry on a network interface
///
/// Both fields are structurally optional: an entry may carry only the
/// public-IP association, only the private address, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivateAddress {
    pub private_ip: Option<String>,
    /// Public IPv4 associated with this private address, if any
    pub public_ip: Option<String>,
}

/// A network interface attached to an instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInterface {
    pub private_addresses: Vec<PrivateAddress>,
    pub ipv6_addresses: Vec<String>,
}

/// An EC2 instance as seen by this system: identity, addresses, tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub id: String,
    pub interfaces: Vec<NetworkInterface>,
    pub tags: Vec<Tag>,
}

/// A Route 53 hosted zone
///
/// `name` is the fully-qualified domain suffix; its trailing dot is
/// significant and is never added or stripped by this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    pub id: String,
    pub name: String,
    /// Private zones resolve to private addresses, public zones to public ones
    pub private: bool,
}

/// DNS record set type
///
/// `Other` carries types this system never creates (SOA, NS, ...) so that
/// deletes can echo existing sets exactly as listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Other(s) => s,
        }
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        match s {
            "A" => RecordType::A,
            "AAAA" => RecordType::Aaaa,
            "CNAME" => RecordType::Cname,
            other => RecordType::Other(other.to_string()),
        }
    }
}

/// A named, typed collection of record values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub name: String,
    pub rtype: RecordType,
    /// Set on creates; deletes echo whatever the listing returned
    pub ttl: Option<i64>,
    pub values: Vec<String>,
}

/// Action applied to a record set within a change batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Create,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &str {
        match self {
            ChangeAction::Create => "CREATE",
            ChangeAction::Delete => "DELETE",
        }
    }
}

/// One entry of an atomic change batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    pub action: ChangeAction,
    pub record: RecordSet,
}
