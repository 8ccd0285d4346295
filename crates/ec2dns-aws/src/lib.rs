// # ec2dns-aws
//
// AWS SDK implementations of the ec2dns-core collaborator traits:
//
// - [`Ec2InstanceSource`]: instance metadata via EC2 DescribeInstances
// - [`Route53ZoneStore`]: zone reads and change batches via Route 53
//
// Both wrap a shared-config SDK client constructed once per process. They
// hold no business state and perform no retries of their own beyond what
// the SDK's default retry configuration provides on the wire.

pub mod ec2;
pub mod route53;

pub use ec2::Ec2InstanceSource;
pub use route53::Route53ZoneStore;
