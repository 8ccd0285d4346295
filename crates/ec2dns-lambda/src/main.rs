// # ec2dns-lambda
//
// Thin Lambda integration layer. All reconciliation logic lives in
// ec2dns-core; this binary only:
//
// 1. Initializes tracing for CloudWatch
// 2. Builds the shared AWS config and the two SDK clients, once per process
// 3. Hands each EventBridge notification to the reconciler
//
// The trigger is expected to be an EventBridge rule matching EC2 instance
// state-change notifications for the running/stopped/terminated states,
// configured with a short max event age and zero retry attempts. A failed
// invocation is a dropped event, not a queued one.
//
// ## Configuration
//
// - `EC2DNS_LOG_LEVEL`: trace | debug | info | warn | error (default: info)
//
// Everything else is driven by the event payload and instance tags.

use std::env;

use aws_config::BehaviorVersion;
use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{info, Level};

use ec2dns_aws::{Ec2InstanceSource, Route53ZoneStore};
use ec2dns_core::{Reconciler, StateChangeEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let log_level = match env::var("EC2DNS_LOG_LEVEL")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .json()
        .with_max_level(log_level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let reconciler = Reconciler::new(
        Box::new(Ec2InstanceSource::new(&shared_config)),
        Box::new(Route53ZoneStore::new(&shared_config)),
    );

    run(service_fn(|event| handle(event, &reconciler))).await
}

async fn handle(
    event: LambdaEvent<CloudWatchEvent<StateChangeEvent>>,
    reconciler: &Reconciler,
) -> Result<(), Error> {
    let detail = event
        .payload
        .detail
        .ok_or_else(|| ec2dns_core::Error::invalid_event("event carried no detail"))?;

    info!(instance_id = %detail.instance_id, state = ?detail.state, "handling state change");
    let outcome = reconciler.handle_event(&detail).await?;
    info!(outcome = ?outcome, "invocation finished");

    Ok(())
}
