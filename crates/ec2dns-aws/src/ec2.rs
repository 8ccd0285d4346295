//! EC2-backed instance metadata source

use async_trait::async_trait;
use aws_sdk_ec2::types as ec2;
use aws_sdk_ec2::Client;
use tracing::debug;

use ec2dns_core::error::{Error, Result};
use ec2dns_core::record::{Instance, NetworkInterface, PrivateAddress, Tag};
use ec2dns_core::traits::InstanceSource;

/// Instance metadata lookup backed by EC2 DescribeInstances
#[derive(Debug, Clone)]
pub struct Ec2InstanceSource {
    client: Client,
}

impl Ec2InstanceSource {
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
impl InstanceSource for Ec2InstanceSource {
    async fn describe_instance(&self, id: &str, tag_key: &str) -> Result<Option<Instance>> {
        debug!(instance_id = %id, tag_key = %tag_key, "describing instance");

        let output = self
            .client
            .describe_instances()
            .instance_ids(id)
            .filters(
                ec2::Filter::builder()
                    .name("tag-key")
                    .values(tag_key)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| Error::instance_source(e.to_string()))?;

        let instance = output
            .reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .next()
            .map(|instance| convert_instance(instance, id));

        Ok(instance)
    }
}

/// Map an SDK instance description onto the domain model.
///
/// Structurally absent fields are skipped silently; the queried id fills in
/// when the description does not echo one.
fn convert_instance(instance: &ec2::Instance, queried_id: &str) -> Instance {
    let interfaces = instance
        .network_interfaces()
        .iter()
        .map(|eni| NetworkInterface {
            private_addresses: eni
                .private_ip_addresses()
                .iter()
                .map(|addr| PrivateAddress {
                    private_ip: addr.private_ip_address().map(str::to_string),
                    public_ip: addr
                        .association()
                        .and_then(|assoc| assoc.public_ip())
                        .map(str::to_string),
                })
                .collect(),
            ipv6_addresses: eni
                .ipv6_addresses()
                .iter()
                .filter_map(|addr| addr.ipv6_address())
                .map(str::to_string)
                .collect(),
        })
        .collect();

    let tags = instance
        .tags()
        .iter()
        .filter_map(|tag| match (tag.key(), tag.value()) {
            (Some(key), Some(value)) => Some(Tag::new(key, value)),
            _ => None,
        })
        .collect();

    Instance {
        id: instance.instance_id().unwrap_or(queried_id).to_string(),
        interfaces,
        tags,
    }
}
