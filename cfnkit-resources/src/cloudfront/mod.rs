//! AWS::CloudFront resource types
//!
//! Auto-generated from CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{ResourceProperties, ResourceSpec};

pub mod cache_policy;
pub mod cloud_front_origin_access_identity;
pub mod distribution;
pub mod function;
pub mod key_group;
pub mod origin_request_policy;
pub mod public_key;
pub mod realtime_log_config;
pub mod streaming_distribution;

pub use cache_policy::CachePolicy;
pub use cloud_front_origin_access_identity::CloudFrontOriginAccessIdentity;
pub use distribution::Distribution;
pub use function::Function;
pub use key_group::KeyGroup;
pub use origin_request_policy::OriginRequestPolicy;
pub use public_key::PublicKey;
pub use realtime_log_config::RealtimeLogConfig;
pub use streaming_distribution::StreamingDistribution;

/// Version of the resource specification these types were generated from
pub const SPECIFICATION_VERSION: &str = "31.1.0";

/// Specs of all AWS::CloudFront resource types
pub fn resource_specs() -> Vec<ResourceSpec> {
    vec![
        CachePolicy::spec(),
        CloudFrontOriginAccessIdentity::spec(),
        Distribution::spec(),
        Function::spec(),
        KeyGroup::spec(),
        OriginRequestPolicy::spec(),
        PublicKey::spec(),
        RealtimeLogConfig::spec(),
        StreamingDistribution::spec(),
    ]
}
