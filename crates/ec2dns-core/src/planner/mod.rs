//! Record planner
//!
//! Pure functions computing the desired change batch for one instance.
//! No I/O happens here: the register path works off the instance
//! description, and the unregister path works off a record listing the
//! driver has already fetched.

use crate::record::{
    ChangeAction, HostedZone, Instance, RecordChange, RecordSet, RecordType, RECORD_TTL,
};
use crate::tags::{tag_value, HOST_NAME_TAG, NAME_TAG};

/// The deterministic join key between an instance and its owned records:
/// `<instance-id>.<zone-suffix>`, carrying exactly the trailing dot the
/// suffix already has.
pub fn canonical_name(instance_id: &str, zone_name: &str) -> String {
    format!("{instance_id}.{zone_name}")
}

/// Normalize a human-readable label into a DNS-safe ASCII form.
///
/// The IDNA transform handles internationalized labels; anything it cannot
/// encode passes through unchanged. Every remaining character outside the
/// printable-ASCII range `'!'..='~'` becomes an underscore.
fn normalize_label(label: &str) -> String {
    let ascii = idna::domain_to_ascii(label).unwrap_or_else(|_| label.to_string());
    ascii
        .chars()
        .map(|c| if ('!'..='~').contains(&c) { c } else { '_' })
        .collect()
}

/// Compute the create batch registering an instance in a zone.
///
/// Address buckets are filled by structural presence alone: a private
/// address entry without a private IP still contributes its associated
/// public IP, and entries lacking a field are silently skipped. A plan with
/// zero address records is "nothing to register" and suppresses the label
/// CNAME as well.
pub fn plan_register(instance: &Instance, zone: &HostedZone) -> Vec<RecordChange> {
    let mut private_v4 = Vec::new();
    let mut public_v4 = Vec::new();
    let mut public_v6 = Vec::new();
    for eni in &instance.interfaces {
        for addr in &eni.private_addresses {
            if let Some(ip) = &addr.private_ip {
                private_v4.push(ip.clone());
            }
            if let Some(ip) = &addr.public_ip {
                public_v4.push(ip.clone());
            }
        }
        public_v6.extend(eni.ipv6_addresses.iter().cloned());
    }

    let name = canonical_name(&instance.id, &zone.name);
    let mut sets = Vec::new();
    if zone.private {
        if !private_v4.is_empty() {
            sets.push(RecordSet {
                name: name.clone(),
                rtype: RecordType::A,
                ttl: Some(RECORD_TTL),
                values: private_v4,
            });
        }
    } else {
        if !public_v4.is_empty() {
            sets.push(RecordSet {
                name: name.clone(),
                rtype: RecordType::A,
                ttl: Some(RECORD_TTL),
                values: public_v4,
            });
        }

        if !public_v6.is_empty() {
            sets.push(RecordSet {
                name: name.clone(),
                rtype: RecordType::Aaaa,
                ttl: Some(RECORD_TTL),
                values: public_v6,
            });
        }
    }
    if sets.is_empty() {
        return Vec::new();
    }

    let label = tag_value(&instance.tags, HOST_NAME_TAG)
        .or_else(|| tag_value(&instance.tags, NAME_TAG));
    if let Some(label) = label {
        sets.push(RecordSet {
            // Always dot-terminated, regardless of the suffix's own trailing dot.
            name: format!("{}.{}.", normalize_label(label), zone.name),
            rtype: RecordType::Cname,
            ttl: Some(RECORD_TTL),
            values: vec![name],
        });
    }

    sets.into_iter()
        .map(|record| RecordChange {
            action: ChangeAction::Create,
            record,
        })
        .collect()
}

/// Compute the delete batch removing every record the instance left behind.
///
/// A listed set survives if its own name equals the canonical name (records
/// the instance owns directly) or any of its values equals it (a label
/// CNAME pointing at the instance). Sets without values are discarded
/// before that test runs, so a value-less set matching by name alone is
/// never retained. Known gap, kept as-is: changing the ordering would
/// change which records get cleaned up on termination.
///
/// Survivors are echoed unchanged; the zone store requires an exact-match
/// delete, so no TTL or value rewriting happens here.
pub fn plan_unregister(canonical: &str, sets: Vec<RecordSet>) -> Vec<RecordChange> {
    sets.into_iter()
        .filter(|set| !set.values.is_empty())
        .filter(|set| set.name == canonical || set.values.iter().any(|v| v == canonical))
        .map(|record| RecordChange {
            action: ChangeAction::Delete,
            record,
        })
        .collect()
}
