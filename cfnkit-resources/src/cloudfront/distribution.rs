//! distribution types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::Distribution
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::tag::Tag;
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::Distribution`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-distribution.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Distribution {
    /// _Required_: Yes
    ///
    /// _Type_: DistributionConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-distribution.html#cfn-cloudfront-distribution-distributionconfig>
    #[serde(rename = "DistributionConfig")]
    pub distribution_config: Value<DistributionConfig>,
    /// _Required_: No
    ///
    /// _Type_: List of Tag
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-distribution.html#cfn-cloudfront-distribution-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl Distribution {
    pub fn new(distribution_config: DistributionConfig) -> Self {
        Self {
            distribution_config: Value::Literal(distribution_config),
            tags: None,
        }
    }
}

impl PropertyType for Distribution {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-distribution.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DistributionConfig",
            PropertyKind::Property(DistributionConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-distribution.html#cfn-cloudfront-distribution-distributionconfig",
        ),
        PropertySpec::optional(
            "Tags",
            PropertyKind::List(ItemType::Property(Tag::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-distribution.html#cfn-cloudfront-distribution-tags",
        ),
    ];
}

impl ResourceProperties for Distribution {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("DomainName", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::Distribution.CacheBehavior`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheBehavior {
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-allowedmethods>
    #[serde(rename = "AllowedMethods", default, skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-cachepolicyid>
    #[serde(rename = "CachePolicyId", default, skip_serializing_if = "Option::is_none")]
    pub cache_policy_id: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-cachedmethods>
    #[serde(rename = "CachedMethods", default, skip_serializing_if = "Option::is_none")]
    pub cached_methods: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-compress>
    #[serde(rename = "Compress", default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-defaultttl>
    #[serde(rename = "DefaultTTL", default, skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<Value<f64>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-fieldlevelencryptionid>
    #[serde(rename = "FieldLevelEncryptionId", default, skip_serializing_if = "Option::is_none")]
    pub field_level_encryption_id: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: ForwardedValues
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-forwardedvalues>
    #[serde(rename = "ForwardedValues", default, skip_serializing_if = "Option::is_none")]
    pub forwarded_values: Option<Value<ForwardedValues>>,
    /// _Required_: No
    ///
    /// _Type_: List of FunctionAssociation
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-functionassociations>
    #[serde(rename = "FunctionAssociations", default, skip_serializing_if = "Option::is_none")]
    pub function_associations: Option<Value<Vec<FunctionAssociation>>>,
    /// _Required_: No
    ///
    /// _Type_: List of LambdaFunctionAssociation
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-lambdafunctionassociations>
    #[serde(rename = "LambdaFunctionAssociations", default, skip_serializing_if = "Option::is_none")]
    pub lambda_function_associations: Option<Value<Vec<LambdaFunctionAssociation>>>,
    /// _Required_: No
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-maxttl>
    #[serde(rename = "MaxTTL", default, skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<Value<f64>>,
    /// _Required_: No
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-minttl>
    #[serde(rename = "MinTTL", default, skip_serializing_if = "Option::is_none")]
    pub min_ttl: Option<Value<f64>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-originrequestpolicyid>
    #[serde(rename = "OriginRequestPolicyId", default, skip_serializing_if = "Option::is_none")]
    pub origin_request_policy_id: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-pathpattern>
    #[serde(rename = "PathPattern")]
    pub path_pattern: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-realtimelogconfigarn>
    #[serde(rename = "RealtimeLogConfigArn", default, skip_serializing_if = "Option::is_none")]
    pub realtime_log_config_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-smoothstreaming>
    #[serde(rename = "SmoothStreaming", default, skip_serializing_if = "Option::is_none")]
    pub smooth_streaming: Option<Value<bool>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-targetoriginid>
    #[serde(rename = "TargetOriginId")]
    pub target_origin_id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-trustedkeygroups>
    #[serde(rename = "TrustedKeyGroups", default, skip_serializing_if = "Option::is_none")]
    pub trusted_key_groups: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-trustedsigners>
    #[serde(rename = "TrustedSigners", default, skip_serializing_if = "Option::is_none")]
    pub trusted_signers: Option<Value<Vec<Value<String>>>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-viewerprotocolpolicy>
    #[serde(rename = "ViewerProtocolPolicy")]
    pub viewer_protocol_policy: Value<String>,
}

impl CacheBehavior {
    pub fn new(
        path_pattern: impl Into<Value<String>>,
        target_origin_id: impl Into<Value<String>>,
        viewer_protocol_policy: impl Into<Value<String>>,
    ) -> Self {
        Self {
            allowed_methods: None,
            cache_policy_id: None,
            cached_methods: None,
            compress: None,
            default_ttl: None,
            field_level_encryption_id: None,
            forwarded_values: None,
            function_associations: None,
            lambda_function_associations: None,
            max_ttl: None,
            min_ttl: None,
            origin_request_policy_id: None,
            path_pattern: path_pattern.into(),
            realtime_log_config_arn: None,
            smooth_streaming: None,
            target_origin_id: target_origin_id.into(),
            trusted_key_groups: None,
            trusted_signers: None,
            viewer_protocol_policy: viewer_protocol_policy.into(),
        }
    }
}

impl PropertyType for CacheBehavior {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.CacheBehavior";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "AllowedMethods",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-allowedmethods",
        ),
        PropertySpec::optional(
            "CachePolicyId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-cachepolicyid",
        ),
        PropertySpec::optional(
            "CachedMethods",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-cachedmethods",
        ),
        PropertySpec::optional(
            "Compress",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-compress",
        ),
        PropertySpec::optional(
            "DefaultTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-defaultttl",
        ),
        PropertySpec::optional(
            "FieldLevelEncryptionId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-fieldlevelencryptionid",
        ),
        PropertySpec::optional(
            "ForwardedValues",
            PropertyKind::Property(ForwardedValues::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-forwardedvalues",
        ),
        PropertySpec::optional(
            "FunctionAssociations",
            PropertyKind::List(ItemType::Property(FunctionAssociation::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-functionassociations",
        ),
        PropertySpec::optional(
            "LambdaFunctionAssociations",
            PropertyKind::List(ItemType::Property(LambdaFunctionAssociation::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-lambdafunctionassociations",
        ),
        PropertySpec::optional(
            "MaxTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-maxttl",
        ),
        PropertySpec::optional(
            "MinTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-minttl",
        ),
        PropertySpec::optional(
            "OriginRequestPolicyId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-originrequestpolicyid",
        ),
        PropertySpec::required(
            "PathPattern",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-pathpattern",
        ),
        PropertySpec::optional(
            "RealtimeLogConfigArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-realtimelogconfigarn",
        ),
        PropertySpec::optional(
            "SmoothStreaming",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-smoothstreaming",
        ),
        PropertySpec::required(
            "TargetOriginId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-targetoriginid",
        ),
        PropertySpec::optional(
            "TrustedKeyGroups",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-trustedkeygroups",
        ),
        PropertySpec::optional(
            "TrustedSigners",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-trustedsigners",
        ),
        PropertySpec::required(
            "ViewerProtocolPolicy",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cachebehavior.html#cfn-cloudfront-distribution-cachebehavior-viewerprotocolpolicy",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.Cookies`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cookies.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cookies {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cookies.html#cfn-cloudfront-distribution-cookies-forward>
    #[serde(rename = "Forward")]
    pub forward: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cookies.html#cfn-cloudfront-distribution-cookies-whitelistednames>
    #[serde(rename = "WhitelistedNames", default, skip_serializing_if = "Option::is_none")]
    pub whitelisted_names: Option<Value<Vec<Value<String>>>>,
}

impl Cookies {
    pub fn new(forward: impl Into<Value<String>>) -> Self {
        Self {
            forward: forward.into(),
            whitelisted_names: None,
        }
    }
}

impl PropertyType for Cookies {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.Cookies";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cookies.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Forward",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cookies.html#cfn-cloudfront-distribution-cookies-forward",
        ),
        PropertySpec::optional(
            "WhitelistedNames",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-cookies.html#cfn-cloudfront-distribution-cookies-whitelistednames",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.CustomErrorResponse`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomErrorResponse {
    /// _Required_: No
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-errorcachingminttl>
    #[serde(rename = "ErrorCachingMinTTL", default, skip_serializing_if = "Option::is_none")]
    pub error_caching_min_ttl: Option<Value<f64>>,
    /// _Required_: Yes
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-errorcode>
    #[serde(rename = "ErrorCode")]
    pub error_code: Value<i64>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-responsecode>
    #[serde(rename = "ResponseCode", default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-responsepagepath>
    #[serde(rename = "ResponsePagePath", default, skip_serializing_if = "Option::is_none")]
    pub response_page_path: Option<Value<String>>,
}

impl CustomErrorResponse {
    pub fn new(error_code: impl Into<Value<i64>>) -> Self {
        Self {
            error_caching_min_ttl: None,
            error_code: error_code.into(),
            response_code: None,
            response_page_path: None,
        }
    }
}

impl PropertyType for CustomErrorResponse {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.CustomErrorResponse";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "ErrorCachingMinTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-errorcachingminttl",
        ),
        PropertySpec::required(
            "ErrorCode",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-errorcode",
        ),
        PropertySpec::optional(
            "ResponseCode",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-responsecode",
        ),
        PropertySpec::optional(
            "ResponsePagePath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customerrorresponse.html#cfn-cloudfront-distribution-customerrorresponse-responsepagepath",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.CustomOriginConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomOriginConfig {
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-httpport>
    #[serde(rename = "HTTPPort", default, skip_serializing_if = "Option::is_none")]
    pub http_port: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-httpsport>
    #[serde(rename = "HTTPSPort", default, skip_serializing_if = "Option::is_none")]
    pub https_port: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originkeepalivetimeout>
    #[serde(rename = "OriginKeepaliveTimeout", default, skip_serializing_if = "Option::is_none")]
    pub origin_keepalive_timeout: Option<Value<i64>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originprotocolpolicy>
    #[serde(rename = "OriginProtocolPolicy")]
    pub origin_protocol_policy: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originreadtimeout>
    #[serde(rename = "OriginReadTimeout", default, skip_serializing_if = "Option::is_none")]
    pub origin_read_timeout: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originsslprotocols>
    #[serde(rename = "OriginSSLProtocols", default, skip_serializing_if = "Option::is_none")]
    pub origin_ssl_protocols: Option<Value<Vec<Value<String>>>>,
}

impl CustomOriginConfig {
    pub fn new(origin_protocol_policy: impl Into<Value<String>>) -> Self {
        Self {
            http_port: None,
            https_port: None,
            origin_keepalive_timeout: None,
            origin_protocol_policy: origin_protocol_policy.into(),
            origin_read_timeout: None,
            origin_ssl_protocols: None,
        }
    }
}

impl PropertyType for CustomOriginConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.CustomOriginConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "HTTPPort",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-httpport",
        ),
        PropertySpec::optional(
            "HTTPSPort",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-httpsport",
        ),
        PropertySpec::optional(
            "OriginKeepaliveTimeout",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originkeepalivetimeout",
        ),
        PropertySpec::required(
            "OriginProtocolPolicy",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originprotocolpolicy",
        ),
        PropertySpec::optional(
            "OriginReadTimeout",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originreadtimeout",
        ),
        PropertySpec::optional(
            "OriginSSLProtocols",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-customoriginconfig.html#cfn-cloudfront-distribution-customoriginconfig-originsslprotocols",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.DefaultCacheBehavior`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultCacheBehavior {
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-allowedmethods>
    #[serde(rename = "AllowedMethods", default, skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-cachepolicyid>
    #[serde(rename = "CachePolicyId", default, skip_serializing_if = "Option::is_none")]
    pub cache_policy_id: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-cachedmethods>
    #[serde(rename = "CachedMethods", default, skip_serializing_if = "Option::is_none")]
    pub cached_methods: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-compress>
    #[serde(rename = "Compress", default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-defaultttl>
    #[serde(rename = "DefaultTTL", default, skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<Value<f64>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-fieldlevelencryptionid>
    #[serde(rename = "FieldLevelEncryptionId", default, skip_serializing_if = "Option::is_none")]
    pub field_level_encryption_id: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: ForwardedValues
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-forwardedvalues>
    #[serde(rename = "ForwardedValues", default, skip_serializing_if = "Option::is_none")]
    pub forwarded_values: Option<Value<ForwardedValues>>,
    /// _Required_: No
    ///
    /// _Type_: List of FunctionAssociation
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-functionassociations>
    #[serde(rename = "FunctionAssociations", default, skip_serializing_if = "Option::is_none")]
    pub function_associations: Option<Value<Vec<FunctionAssociation>>>,
    /// _Required_: No
    ///
    /// _Type_: List of LambdaFunctionAssociation
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-lambdafunctionassociations>
    #[serde(rename = "LambdaFunctionAssociations", default, skip_serializing_if = "Option::is_none")]
    pub lambda_function_associations: Option<Value<Vec<LambdaFunctionAssociation>>>,
    /// _Required_: No
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-maxttl>
    #[serde(rename = "MaxTTL", default, skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<Value<f64>>,
    /// _Required_: No
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-minttl>
    #[serde(rename = "MinTTL", default, skip_serializing_if = "Option::is_none")]
    pub min_ttl: Option<Value<f64>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-originrequestpolicyid>
    #[serde(rename = "OriginRequestPolicyId", default, skip_serializing_if = "Option::is_none")]
    pub origin_request_policy_id: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-realtimelogconfigarn>
    #[serde(rename = "RealtimeLogConfigArn", default, skip_serializing_if = "Option::is_none")]
    pub realtime_log_config_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-smoothstreaming>
    #[serde(rename = "SmoothStreaming", default, skip_serializing_if = "Option::is_none")]
    pub smooth_streaming: Option<Value<bool>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-targetoriginid>
    #[serde(rename = "TargetOriginId")]
    pub target_origin_id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-trustedkeygroups>
    #[serde(rename = "TrustedKeyGroups", default, skip_serializing_if = "Option::is_none")]
    pub trusted_key_groups: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-trustedsigners>
    #[serde(rename = "TrustedSigners", default, skip_serializing_if = "Option::is_none")]
    pub trusted_signers: Option<Value<Vec<Value<String>>>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-viewerprotocolpolicy>
    #[serde(rename = "ViewerProtocolPolicy")]
    pub viewer_protocol_policy: Value<String>,
}

impl DefaultCacheBehavior {
    pub fn new(
        target_origin_id: impl Into<Value<String>>,
        viewer_protocol_policy: impl Into<Value<String>>,
    ) -> Self {
        Self {
            allowed_methods: None,
            cache_policy_id: None,
            cached_methods: None,
            compress: None,
            default_ttl: None,
            field_level_encryption_id: None,
            forwarded_values: None,
            function_associations: None,
            lambda_function_associations: None,
            max_ttl: None,
            min_ttl: None,
            origin_request_policy_id: None,
            realtime_log_config_arn: None,
            smooth_streaming: None,
            target_origin_id: target_origin_id.into(),
            trusted_key_groups: None,
            trusted_signers: None,
            viewer_protocol_policy: viewer_protocol_policy.into(),
        }
    }
}

impl PropertyType for DefaultCacheBehavior {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.DefaultCacheBehavior";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "AllowedMethods",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-allowedmethods",
        ),
        PropertySpec::optional(
            "CachePolicyId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-cachepolicyid",
        ),
        PropertySpec::optional(
            "CachedMethods",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-cachedmethods",
        ),
        PropertySpec::optional(
            "Compress",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-compress",
        ),
        PropertySpec::optional(
            "DefaultTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-defaultttl",
        ),
        PropertySpec::optional(
            "FieldLevelEncryptionId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-fieldlevelencryptionid",
        ),
        PropertySpec::optional(
            "ForwardedValues",
            PropertyKind::Property(ForwardedValues::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-forwardedvalues",
        ),
        PropertySpec::optional(
            "FunctionAssociations",
            PropertyKind::List(ItemType::Property(FunctionAssociation::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-functionassociations",
        ),
        PropertySpec::optional(
            "LambdaFunctionAssociations",
            PropertyKind::List(ItemType::Property(LambdaFunctionAssociation::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-lambdafunctionassociations",
        ),
        PropertySpec::optional(
            "MaxTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-maxttl",
        ),
        PropertySpec::optional(
            "MinTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-minttl",
        ),
        PropertySpec::optional(
            "OriginRequestPolicyId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-originrequestpolicyid",
        ),
        PropertySpec::optional(
            "RealtimeLogConfigArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-realtimelogconfigarn",
        ),
        PropertySpec::optional(
            "SmoothStreaming",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-smoothstreaming",
        ),
        PropertySpec::required(
            "TargetOriginId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-targetoriginid",
        ),
        PropertySpec::optional(
            "TrustedKeyGroups",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-trustedkeygroups",
        ),
        PropertySpec::optional(
            "TrustedSigners",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-trustedsigners",
        ),
        PropertySpec::required(
            "ViewerProtocolPolicy",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-defaultcachebehavior.html#cfn-cloudfront-distribution-defaultcachebehavior-viewerprotocolpolicy",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.DistributionConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistributionConfig {
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-aliases>
    #[serde(rename = "Aliases", default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-cnames>
    #[serde(rename = "CNAMEs", default, skip_serializing_if = "Option::is_none")]
    pub cnames: Option<Value<Vec<Value<String>>>>,
    /// _Required_: No
    ///
    /// _Type_: List of CacheBehavior
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-cachebehaviors>
    #[serde(rename = "CacheBehaviors", default, skip_serializing_if = "Option::is_none")]
    pub cache_behaviors: Option<Value<Vec<CacheBehavior>>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-comment>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: List of CustomErrorResponse
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-customerrorresponses>
    #[serde(rename = "CustomErrorResponses", default, skip_serializing_if = "Option::is_none")]
    pub custom_error_responses: Option<Value<Vec<CustomErrorResponse>>>,
    /// _Required_: No
    ///
    /// _Type_: LegacyCustomOrigin
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-customorigin>
    #[serde(rename = "CustomOrigin", default, skip_serializing_if = "Option::is_none")]
    pub custom_origin: Option<Value<LegacyCustomOrigin>>,
    /// _Required_: Yes
    ///
    /// _Type_: DefaultCacheBehavior
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-defaultcachebehavior>
    #[serde(rename = "DefaultCacheBehavior")]
    pub default_cache_behavior: Value<DefaultCacheBehavior>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-defaultrootobject>
    #[serde(rename = "DefaultRootObject", default, skip_serializing_if = "Option::is_none")]
    pub default_root_object: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-enabled>
    #[serde(rename = "Enabled")]
    pub enabled: Value<bool>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-httpversion>
    #[serde(rename = "HttpVersion", default, skip_serializing_if = "Option::is_none")]
    pub http_version: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-ipv6enabled>
    #[serde(rename = "IPV6Enabled", default, skip_serializing_if = "Option::is_none")]
    pub ipv6_enabled: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: Logging
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-logging>
    #[serde(rename = "Logging", default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<Value<Logging>>,
    /// _Required_: No
    ///
    /// _Type_: OriginGroups
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-origingroups>
    #[serde(rename = "OriginGroups", default, skip_serializing_if = "Option::is_none")]
    pub origin_groups: Option<Value<OriginGroups>>,
    /// _Required_: No
    ///
    /// _Type_: List of Origin
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-origins>
    #[serde(rename = "Origins", default, skip_serializing_if = "Option::is_none")]
    pub origins: Option<Value<Vec<Origin>>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-priceclass>
    #[serde(rename = "PriceClass", default, skip_serializing_if = "Option::is_none")]
    pub price_class: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Restrictions
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-restrictions>
    #[serde(rename = "Restrictions", default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Value<Restrictions>>,
    /// _Required_: No
    ///
    /// _Type_: LegacyS3Origin
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-s3origin>
    #[serde(rename = "S3Origin", default, skip_serializing_if = "Option::is_none")]
    pub s3_origin: Option<Value<LegacyS3Origin>>,
    /// _Required_: No
    ///
    /// _Type_: ViewerCertificate
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-viewercertificate>
    #[serde(rename = "ViewerCertificate", default, skip_serializing_if = "Option::is_none")]
    pub viewer_certificate: Option<Value<ViewerCertificate>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-webaclid>
    #[serde(rename = "WebACLId", default, skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<Value<String>>,
}

impl DistributionConfig {
    pub fn new(
        default_cache_behavior: DefaultCacheBehavior,
        enabled: impl Into<Value<bool>>,
    ) -> Self {
        Self {
            aliases: None,
            cnames: None,
            cache_behaviors: None,
            comment: None,
            custom_error_responses: None,
            custom_origin: None,
            default_cache_behavior: Value::Literal(default_cache_behavior),
            default_root_object: None,
            enabled: enabled.into(),
            http_version: None,
            ipv6_enabled: None,
            logging: None,
            origin_groups: None,
            origins: None,
            price_class: None,
            restrictions: None,
            s3_origin: None,
            viewer_certificate: None,
            web_acl_id: None,
        }
    }
}

impl PropertyType for DistributionConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.DistributionConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Aliases",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-aliases",
        ),
        PropertySpec::optional(
            "CNAMEs",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-cnames",
        ),
        PropertySpec::optional(
            "CacheBehaviors",
            PropertyKind::List(ItemType::Property(CacheBehavior::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-cachebehaviors",
        ),
        PropertySpec::optional(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-comment",
        ),
        PropertySpec::optional(
            "CustomErrorResponses",
            PropertyKind::List(ItemType::Property(CustomErrorResponse::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-customerrorresponses",
        ),
        PropertySpec::optional(
            "CustomOrigin",
            PropertyKind::Property(LegacyCustomOrigin::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-customorigin",
        ),
        PropertySpec::required(
            "DefaultCacheBehavior",
            PropertyKind::Property(DefaultCacheBehavior::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-defaultcachebehavior",
        ),
        PropertySpec::optional(
            "DefaultRootObject",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-defaultrootobject",
        ),
        PropertySpec::required(
            "Enabled",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-enabled",
        ),
        PropertySpec::optional(
            "HttpVersion",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-httpversion",
        ),
        PropertySpec::optional(
            "IPV6Enabled",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-ipv6enabled",
        ),
        PropertySpec::optional(
            "Logging",
            PropertyKind::Property(Logging::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-logging",
        ),
        PropertySpec::optional(
            "OriginGroups",
            PropertyKind::Property(OriginGroups::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-origingroups",
        ),
        PropertySpec::optional(
            "Origins",
            PropertyKind::List(ItemType::Property(Origin::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-origins",
        ),
        PropertySpec::optional(
            "PriceClass",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-priceclass",
        ),
        PropertySpec::optional(
            "Restrictions",
            PropertyKind::Property(Restrictions::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-restrictions",
        ),
        PropertySpec::optional(
            "S3Origin",
            PropertyKind::Property(LegacyS3Origin::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-s3origin",
        ),
        PropertySpec::optional(
            "ViewerCertificate",
            PropertyKind::Property(ViewerCertificate::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-viewercertificate",
        ),
        PropertySpec::optional(
            "WebACLId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-distributionconfig.html#cfn-cloudfront-distribution-distributionconfig-webaclid",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.ForwardedValues`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForwardedValues {
    /// _Required_: No
    ///
    /// _Type_: Cookies
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-cookies>
    #[serde(rename = "Cookies", default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Value<Cookies>>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-headers>
    #[serde(rename = "Headers", default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value<Vec<Value<String>>>>,
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-querystring>
    #[serde(rename = "QueryString")]
    pub query_string: Value<bool>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-querystringcachekeys>
    #[serde(rename = "QueryStringCacheKeys", default, skip_serializing_if = "Option::is_none")]
    pub query_string_cache_keys: Option<Value<Vec<Value<String>>>>,
}

impl ForwardedValues {
    pub fn new(query_string: impl Into<Value<bool>>) -> Self {
        Self {
            cookies: None,
            headers: None,
            query_string: query_string.into(),
            query_string_cache_keys: None,
        }
    }
}

impl PropertyType for ForwardedValues {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.ForwardedValues";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Cookies",
            PropertyKind::Property(Cookies::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-cookies",
        ),
        PropertySpec::optional(
            "Headers",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-headers",
        ),
        PropertySpec::required(
            "QueryString",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-querystring",
        ),
        PropertySpec::optional(
            "QueryStringCacheKeys",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-forwardedvalues.html#cfn-cloudfront-distribution-forwardedvalues-querystringcachekeys",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.FunctionAssociation`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-functionassociation.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionAssociation {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-functionassociation.html#cfn-cloudfront-distribution-functionassociation-eventtype>
    #[serde(rename = "EventType", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-functionassociation.html#cfn-cloudfront-distribution-functionassociation-functionarn>
    #[serde(rename = "FunctionARN", default, skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<Value<String>>,
}

impl PropertyType for FunctionAssociation {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.FunctionAssociation";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-functionassociation.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "EventType",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-functionassociation.html#cfn-cloudfront-distribution-functionassociation-eventtype",
        ),
        PropertySpec::optional(
            "FunctionARN",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-functionassociation.html#cfn-cloudfront-distribution-functionassociation-functionarn",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.GeoRestriction`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-georestriction.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoRestriction {
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-georestriction.html#cfn-cloudfront-distribution-georestriction-locations>
    #[serde(rename = "Locations", default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Value<Vec<Value<String>>>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-georestriction.html#cfn-cloudfront-distribution-georestriction-restrictiontype>
    #[serde(rename = "RestrictionType")]
    pub restriction_type: Value<String>,
}

impl GeoRestriction {
    pub fn new(restriction_type: impl Into<Value<String>>) -> Self {
        Self {
            locations: None,
            restriction_type: restriction_type.into(),
        }
    }
}

impl PropertyType for GeoRestriction {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.GeoRestriction";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-georestriction.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Locations",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-georestriction.html#cfn-cloudfront-distribution-georestriction-locations",
        ),
        PropertySpec::required(
            "RestrictionType",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-georestriction.html#cfn-cloudfront-distribution-georestriction-restrictiontype",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.LambdaFunctionAssociation`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LambdaFunctionAssociation {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html#cfn-cloudfront-distribution-lambdafunctionassociation-eventtype>
    #[serde(rename = "EventType", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html#cfn-cloudfront-distribution-lambdafunctionassociation-includebody>
    #[serde(rename = "IncludeBody", default, skip_serializing_if = "Option::is_none")]
    pub include_body: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html#cfn-cloudfront-distribution-lambdafunctionassociation-lambdafunctionarn>
    #[serde(rename = "LambdaFunctionARN", default, skip_serializing_if = "Option::is_none")]
    pub lambda_function_arn: Option<Value<String>>,
}

impl PropertyType for LambdaFunctionAssociation {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.LambdaFunctionAssociation";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "EventType",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html#cfn-cloudfront-distribution-lambdafunctionassociation-eventtype",
        ),
        PropertySpec::optional(
            "IncludeBody",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html#cfn-cloudfront-distribution-lambdafunctionassociation-includebody",
        ),
        PropertySpec::optional(
            "LambdaFunctionARN",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-lambdafunctionassociation.html#cfn-cloudfront-distribution-lambdafunctionassociation-lambdafunctionarn",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.LegacyCustomOrigin`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyCustomOrigin {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-dnsname>
    #[serde(rename = "DNSName")]
    pub dns_name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-httpport>
    #[serde(rename = "HTTPPort", default, skip_serializing_if = "Option::is_none")]
    pub http_port: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-httpsport>
    #[serde(rename = "HTTPSPort", default, skip_serializing_if = "Option::is_none")]
    pub https_port: Option<Value<i64>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-originprotocolpolicy>
    #[serde(rename = "OriginProtocolPolicy")]
    pub origin_protocol_policy: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-originsslprotocols>
    #[serde(rename = "OriginSSLProtocols")]
    pub origin_ssl_protocols: Value<Vec<Value<String>>>,
}

impl LegacyCustomOrigin {
    pub fn new(
        dns_name: impl Into<Value<String>>,
        origin_protocol_policy: impl Into<Value<String>>,
        origin_ssl_protocols: Vec<Value<String>>,
    ) -> Self {
        Self {
            dns_name: dns_name.into(),
            http_port: None,
            https_port: None,
            origin_protocol_policy: origin_protocol_policy.into(),
            origin_ssl_protocols: Value::Literal(origin_ssl_protocols),
        }
    }
}

impl PropertyType for LegacyCustomOrigin {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.LegacyCustomOrigin";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DNSName",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-dnsname",
        ),
        PropertySpec::optional(
            "HTTPPort",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-httpport",
        ),
        PropertySpec::optional(
            "HTTPSPort",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-httpsport",
        ),
        PropertySpec::required(
            "OriginProtocolPolicy",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-originprotocolpolicy",
        ),
        PropertySpec::required(
            "OriginSSLProtocols",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacycustomorigin.html#cfn-cloudfront-distribution-legacycustomorigin-originsslprotocols",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.LegacyS3Origin`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacys3origin.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyS3Origin {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacys3origin.html#cfn-cloudfront-distribution-legacys3origin-dnsname>
    #[serde(rename = "DNSName")]
    pub dns_name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacys3origin.html#cfn-cloudfront-distribution-legacys3origin-originaccessidentity>
    #[serde(rename = "OriginAccessIdentity", default, skip_serializing_if = "Option::is_none")]
    pub origin_access_identity: Option<Value<String>>,
}

impl LegacyS3Origin {
    pub fn new(dns_name: impl Into<Value<String>>) -> Self {
        Self {
            dns_name: dns_name.into(),
            origin_access_identity: None,
        }
    }
}

impl PropertyType for LegacyS3Origin {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.LegacyS3Origin";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacys3origin.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DNSName",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacys3origin.html#cfn-cloudfront-distribution-legacys3origin-dnsname",
        ),
        PropertySpec::optional(
            "OriginAccessIdentity",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-legacys3origin.html#cfn-cloudfront-distribution-legacys3origin-originaccessidentity",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.Logging`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logging {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html#cfn-cloudfront-distribution-logging-bucket>
    #[serde(rename = "Bucket")]
    pub bucket: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html#cfn-cloudfront-distribution-logging-includecookies>
    #[serde(rename = "IncludeCookies", default, skip_serializing_if = "Option::is_none")]
    pub include_cookies: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html#cfn-cloudfront-distribution-logging-prefix>
    #[serde(rename = "Prefix", default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Value<String>>,
}

impl Logging {
    pub fn new(bucket: impl Into<Value<String>>) -> Self {
        Self {
            bucket: bucket.into(),
            include_cookies: None,
            prefix: None,
        }
    }
}

impl PropertyType for Logging {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.Logging";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Bucket",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html#cfn-cloudfront-distribution-logging-bucket",
        ),
        PropertySpec::optional(
            "IncludeCookies",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html#cfn-cloudfront-distribution-logging-includecookies",
        ),
        PropertySpec::optional(
            "Prefix",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-logging.html#cfn-cloudfront-distribution-logging-prefix",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.Origin`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Origin {
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-connectionattempts>
    #[serde(rename = "ConnectionAttempts", default, skip_serializing_if = "Option::is_none")]
    pub connection_attempts: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-connectiontimeout>
    #[serde(rename = "ConnectionTimeout", default, skip_serializing_if = "Option::is_none")]
    pub connection_timeout: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: CustomOriginConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-customoriginconfig>
    #[serde(rename = "CustomOriginConfig", default, skip_serializing_if = "Option::is_none")]
    pub custom_origin_config: Option<Value<CustomOriginConfig>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-domainname>
    #[serde(rename = "DomainName")]
    pub domain_name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of OriginCustomHeader
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-origincustomheaders>
    #[serde(rename = "OriginCustomHeaders", default, skip_serializing_if = "Option::is_none")]
    pub origin_custom_headers: Option<Value<Vec<OriginCustomHeader>>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-originpath>
    #[serde(rename = "OriginPath", default, skip_serializing_if = "Option::is_none")]
    pub origin_path: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: OriginShield
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-originshield>
    #[serde(rename = "OriginShield", default, skip_serializing_if = "Option::is_none")]
    pub origin_shield: Option<Value<OriginShield>>,
    /// _Required_: No
    ///
    /// _Type_: S3OriginConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-s3originconfig>
    #[serde(rename = "S3OriginConfig", default, skip_serializing_if = "Option::is_none")]
    pub s3_origin_config: Option<Value<S3OriginConfig>>,
}

impl Origin {
    pub fn new(domain_name: impl Into<Value<String>>, id: impl Into<Value<String>>) -> Self {
        Self {
            connection_attempts: None,
            connection_timeout: None,
            custom_origin_config: None,
            domain_name: domain_name.into(),
            id: id.into(),
            origin_custom_headers: None,
            origin_path: None,
            origin_shield: None,
            s3_origin_config: None,
        }
    }
}

impl PropertyType for Origin {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.Origin";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "ConnectionAttempts",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-connectionattempts",
        ),
        PropertySpec::optional(
            "ConnectionTimeout",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-connectiontimeout",
        ),
        PropertySpec::optional(
            "CustomOriginConfig",
            PropertyKind::Property(CustomOriginConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-customoriginconfig",
        ),
        PropertySpec::required(
            "DomainName",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-domainname",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-id",
        ),
        PropertySpec::optional(
            "OriginCustomHeaders",
            PropertyKind::List(ItemType::Property(OriginCustomHeader::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-origincustomheaders",
        ),
        PropertySpec::optional(
            "OriginPath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-originpath",
        ),
        PropertySpec::optional(
            "OriginShield",
            PropertyKind::Property(OriginShield::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-originshield",
        ),
        PropertySpec::optional(
            "S3OriginConfig",
            PropertyKind::Property(S3OriginConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origin.html#cfn-cloudfront-distribution-origin-s3originconfig",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.OriginCustomHeader`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origincustomheader.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginCustomHeader {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origincustomheader.html#cfn-cloudfront-distribution-origincustomheader-headername>
    #[serde(rename = "HeaderName")]
    pub header_name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origincustomheader.html#cfn-cloudfront-distribution-origincustomheader-headervalue>
    #[serde(rename = "HeaderValue")]
    pub header_value: Value<String>,
}

impl OriginCustomHeader {
    pub fn new(
        header_name: impl Into<Value<String>>,
        header_value: impl Into<Value<String>>,
    ) -> Self {
        Self {
            header_name: header_name.into(),
            header_value: header_value.into(),
        }
    }
}

impl PropertyType for OriginCustomHeader {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.OriginCustomHeader";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origincustomheader.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "HeaderName",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origincustomheader.html#cfn-cloudfront-distribution-origincustomheader-headername",
        ),
        PropertySpec::required(
            "HeaderValue",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origincustomheader.html#cfn-cloudfront-distribution-origincustomheader-headervalue",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.OriginGroup`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginGroup {
    /// _Required_: Yes
    ///
    /// _Type_: OriginGroupFailoverCriteria
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html#cfn-cloudfront-distribution-origingroup-failovercriteria>
    #[serde(rename = "FailoverCriteria")]
    pub failover_criteria: Value<OriginGroupFailoverCriteria>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html#cfn-cloudfront-distribution-origingroup-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: OriginGroupMembers
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html#cfn-cloudfront-distribution-origingroup-members>
    #[serde(rename = "Members")]
    pub members: Value<OriginGroupMembers>,
}

impl OriginGroup {
    pub fn new(
        failover_criteria: OriginGroupFailoverCriteria,
        id: impl Into<Value<String>>,
        members: OriginGroupMembers,
    ) -> Self {
        Self {
            failover_criteria: Value::Literal(failover_criteria),
            id: id.into(),
            members: Value::Literal(members),
        }
    }
}

impl PropertyType for OriginGroup {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.OriginGroup";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "FailoverCriteria",
            PropertyKind::Property(OriginGroupFailoverCriteria::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html#cfn-cloudfront-distribution-origingroup-failovercriteria",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html#cfn-cloudfront-distribution-origingroup-id",
        ),
        PropertySpec::required(
            "Members",
            PropertyKind::Property(OriginGroupMembers::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroup.html#cfn-cloudfront-distribution-origingroup-members",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.OriginGroupFailoverCriteria`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupfailovercriteria.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginGroupFailoverCriteria {
    /// _Required_: Yes
    ///
    /// _Type_: StatusCodes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupfailovercriteria.html#cfn-cloudfront-distribution-origingroupfailovercriteria-statuscodes>
    #[serde(rename = "StatusCodes")]
    pub status_codes: Value<StatusCodes>,
}

impl OriginGroupFailoverCriteria {
    pub fn new(status_codes: StatusCodes) -> Self {
        Self {
            status_codes: Value::Literal(status_codes),
        }
    }
}

impl PropertyType for OriginGroupFailoverCriteria {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.OriginGroupFailoverCriteria";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupfailovercriteria.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "StatusCodes",
            PropertyKind::Property(StatusCodes::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupfailovercriteria.html#cfn-cloudfront-distribution-origingroupfailovercriteria-statuscodes",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.OriginGroupMember`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmember.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginGroupMember {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmember.html#cfn-cloudfront-distribution-origingroupmember-originid>
    #[serde(rename = "OriginId")]
    pub origin_id: Value<String>,
}

impl OriginGroupMember {
    pub fn new(origin_id: impl Into<Value<String>>) -> Self {
        Self {
            origin_id: origin_id.into(),
        }
    }
}

impl PropertyType for OriginGroupMember {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.OriginGroupMember";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmember.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "OriginId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmember.html#cfn-cloudfront-distribution-origingroupmember-originid",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.OriginGroupMembers`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmembers.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginGroupMembers {
    /// _Required_: Yes
    ///
    /// _Type_: List of OriginGroupMember
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmembers.html#cfn-cloudfront-distribution-origingroupmembers-items>
    #[serde(rename = "Items")]
    pub items: Value<Vec<OriginGroupMember>>,
    /// _Required_: Yes
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmembers.html#cfn-cloudfront-distribution-origingroupmembers-quantity>
    #[serde(rename = "Quantity")]
    pub quantity: Value<i64>,
}

impl OriginGroupMembers {
    pub fn new(items: Vec<OriginGroupMember>, quantity: impl Into<Value<i64>>) -> Self {
        Self {
            items: Value::Literal(items),
            quantity: quantity.into(),
        }
    }
}

impl PropertyType for OriginGroupMembers {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.OriginGroupMembers";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmembers.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Items",
            PropertyKind::List(ItemType::Property(OriginGroupMember::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmembers.html#cfn-cloudfront-distribution-origingroupmembers-items",
        ),
        PropertySpec::required(
            "Quantity",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroupmembers.html#cfn-cloudfront-distribution-origingroupmembers-quantity",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.OriginGroups`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroups.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginGroups {
    /// _Required_: No
    ///
    /// _Type_: List of OriginGroup
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroups.html#cfn-cloudfront-distribution-origingroups-items>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value<Vec<OriginGroup>>>,
    /// _Required_: Yes
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroups.html#cfn-cloudfront-distribution-origingroups-quantity>
    #[serde(rename = "Quantity")]
    pub quantity: Value<i64>,
}

impl OriginGroups {
    pub fn new(quantity: impl Into<Value<i64>>) -> Self {
        Self {
            items: None,
            quantity: quantity.into(),
        }
    }
}

impl PropertyType for OriginGroups {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.OriginGroups";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroups.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Items",
            PropertyKind::List(ItemType::Property(OriginGroup::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroups.html#cfn-cloudfront-distribution-origingroups-items",
        ),
        PropertySpec::required(
            "Quantity",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-origingroups.html#cfn-cloudfront-distribution-origingroups-quantity",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.OriginShield`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-originshield.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginShield {
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-originshield.html#cfn-cloudfront-distribution-originshield-enabled>
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-originshield.html#cfn-cloudfront-distribution-originshield-originshieldregion>
    #[serde(rename = "OriginShieldRegion", default, skip_serializing_if = "Option::is_none")]
    pub origin_shield_region: Option<Value<String>>,
}

impl PropertyType for OriginShield {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.OriginShield";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-originshield.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Enabled",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-originshield.html#cfn-cloudfront-distribution-originshield-enabled",
        ),
        PropertySpec::optional(
            "OriginShieldRegion",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-originshield.html#cfn-cloudfront-distribution-originshield-originshieldregion",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.Restrictions`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-restrictions.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Restrictions {
    /// _Required_: Yes
    ///
    /// _Type_: GeoRestriction
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-restrictions.html#cfn-cloudfront-distribution-restrictions-georestriction>
    #[serde(rename = "GeoRestriction")]
    pub geo_restriction: Value<GeoRestriction>,
}

impl Restrictions {
    pub fn new(geo_restriction: GeoRestriction) -> Self {
        Self {
            geo_restriction: Value::Literal(geo_restriction),
        }
    }
}

impl PropertyType for Restrictions {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.Restrictions";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-restrictions.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "GeoRestriction",
            PropertyKind::Property(GeoRestriction::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-restrictions.html#cfn-cloudfront-distribution-restrictions-georestriction",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.S3OriginConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-s3originconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct S3OriginConfig {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-s3originconfig.html#cfn-cloudfront-distribution-s3originconfig-originaccessidentity>
    #[serde(rename = "OriginAccessIdentity", default, skip_serializing_if = "Option::is_none")]
    pub origin_access_identity: Option<Value<String>>,
}

impl PropertyType for S3OriginConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.S3OriginConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-s3originconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "OriginAccessIdentity",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-s3originconfig.html#cfn-cloudfront-distribution-s3originconfig-originaccessidentity",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.StatusCodes`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-statuscodes.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusCodes {
    /// _Required_: Yes
    ///
    /// _Type_: List of Integer
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-statuscodes.html#cfn-cloudfront-distribution-statuscodes-items>
    #[serde(rename = "Items")]
    pub items: Value<Vec<Value<i64>>>,
    /// _Required_: Yes
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-statuscodes.html#cfn-cloudfront-distribution-statuscodes-quantity>
    #[serde(rename = "Quantity")]
    pub quantity: Value<i64>,
}

impl StatusCodes {
    pub fn new(items: Vec<Value<i64>>, quantity: impl Into<Value<i64>>) -> Self {
        Self {
            items: Value::Literal(items),
            quantity: quantity.into(),
        }
    }
}

impl PropertyType for StatusCodes {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.StatusCodes";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-statuscodes.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Items",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::Integer)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-statuscodes.html#cfn-cloudfront-distribution-statuscodes-items",
        ),
        PropertySpec::required(
            "Quantity",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-statuscodes.html#cfn-cloudfront-distribution-statuscodes-quantity",
        ),
    ];
}

/// `AWS::CloudFront::Distribution.ViewerCertificate`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerCertificate {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-acmcertificatearn>
    #[serde(rename = "AcmCertificateArn", default, skip_serializing_if = "Option::is_none")]
    pub acm_certificate_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-cloudfrontdefaultcertificate>
    #[serde(rename = "CloudFrontDefaultCertificate", default, skip_serializing_if = "Option::is_none")]
    pub cloud_front_default_certificate: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-iamcertificateid>
    #[serde(rename = "IamCertificateId", default, skip_serializing_if = "Option::is_none")]
    pub iam_certificate_id: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-minimumprotocolversion>
    #[serde(rename = "MinimumProtocolVersion", default, skip_serializing_if = "Option::is_none")]
    pub minimum_protocol_version: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-sslsupportmethod>
    #[serde(rename = "SslSupportMethod", default, skip_serializing_if = "Option::is_none")]
    pub ssl_support_method: Option<Value<String>>,
}

impl PropertyType for ViewerCertificate {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Distribution.ViewerCertificate";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "AcmCertificateArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-acmcertificatearn",
        ),
        PropertySpec::optional(
            "CloudFrontDefaultCertificate",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-cloudfrontdefaultcertificate",
        ),
        PropertySpec::optional(
            "IamCertificateId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-iamcertificateid",
        ),
        PropertySpec::optional(
            "MinimumProtocolVersion",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-minimumprotocolversion",
        ),
        PropertySpec::optional(
            "SslSupportMethod",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-distribution-viewercertificate.html#cfn-cloudfront-distribution-viewercertificate-sslsupportmethod",
        ),
    ];
}
