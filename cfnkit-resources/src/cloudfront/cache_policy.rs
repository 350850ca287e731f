//! cache_policy types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::CachePolicy
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::CachePolicy`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cachepolicy.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CachePolicy {
    /// _Required_: Yes
    ///
    /// _Type_: CachePolicyConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cachepolicy.html#cfn-cloudfront-cachepolicy-cachepolicyconfig>
    #[serde(rename = "CachePolicyConfig")]
    pub cache_policy_config: Value<CachePolicyConfig>,
}

impl CachePolicy {
    pub fn new(cache_policy_config: CachePolicyConfig) -> Self {
        Self {
            cache_policy_config: Value::Literal(cache_policy_config),
        }
    }
}

impl PropertyType for CachePolicy {
    const TYPE_NAME: &'static str = "AWS::CloudFront::CachePolicy";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cachepolicy.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CachePolicyConfig",
            PropertyKind::Property(CachePolicyConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cachepolicy.html#cfn-cloudfront-cachepolicy-cachepolicyconfig",
        ),
    ];
}

impl ResourceProperties for CachePolicy {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LastModifiedTime", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::CachePolicy.CachePolicyConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CachePolicyConfig {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-comment>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-defaultttl>
    #[serde(rename = "DefaultTTL")]
    pub default_ttl: Value<f64>,
    /// _Required_: Yes
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-maxttl>
    #[serde(rename = "MaxTTL")]
    pub max_ttl: Value<f64>,
    /// _Required_: Yes
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-minttl>
    #[serde(rename = "MinTTL")]
    pub min_ttl: Value<f64>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: ParametersInCacheKeyAndForwardedToOrigin
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-parametersincachekeyandforwardedtoorigin>
    #[serde(rename = "ParametersInCacheKeyAndForwardedToOrigin")]
    pub parameters_in_cache_key_and_forwarded_to_origin: Value<ParametersInCacheKeyAndForwardedToOrigin>,
}

impl CachePolicyConfig {
    pub fn new(
        default_ttl: impl Into<Value<f64>>,
        max_ttl: impl Into<Value<f64>>,
        min_ttl: impl Into<Value<f64>>,
        name: impl Into<Value<String>>,
        parameters_in_cache_key_and_forwarded_to_origin: ParametersInCacheKeyAndForwardedToOrigin,
    ) -> Self {
        Self {
            comment: None,
            default_ttl: default_ttl.into(),
            max_ttl: max_ttl.into(),
            min_ttl: min_ttl.into(),
            name: name.into(),
            parameters_in_cache_key_and_forwarded_to_origin: Value::Literal(parameters_in_cache_key_and_forwarded_to_origin),
        }
    }
}

impl PropertyType for CachePolicyConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::CachePolicy.CachePolicyConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-comment",
        ),
        PropertySpec::required(
            "DefaultTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-defaultttl",
        ),
        PropertySpec::required(
            "MaxTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-maxttl",
        ),
        PropertySpec::required(
            "MinTTL",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-minttl",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-name",
        ),
        PropertySpec::required(
            "ParametersInCacheKeyAndForwardedToOrigin",
            PropertyKind::Property(ParametersInCacheKeyAndForwardedToOrigin::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cachepolicyconfig.html#cfn-cloudfront-cachepolicy-cachepolicyconfig-parametersincachekeyandforwardedtoorigin",
        ),
    ];
}

/// `AWS::CloudFront::CachePolicy.CookiesConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cookiesconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookiesConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cookiesconfig.html#cfn-cloudfront-cachepolicy-cookiesconfig-cookiebehavior>
    #[serde(rename = "CookieBehavior")]
    pub cookie_behavior: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cookiesconfig.html#cfn-cloudfront-cachepolicy-cookiesconfig-cookies>
    #[serde(rename = "Cookies", default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Value<Vec<Value<String>>>>,
}

impl CookiesConfig {
    pub fn new(cookie_behavior: impl Into<Value<String>>) -> Self {
        Self {
            cookie_behavior: cookie_behavior.into(),
            cookies: None,
        }
    }
}

impl PropertyType for CookiesConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::CachePolicy.CookiesConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cookiesconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CookieBehavior",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cookiesconfig.html#cfn-cloudfront-cachepolicy-cookiesconfig-cookiebehavior",
        ),
        PropertySpec::optional(
            "Cookies",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-cookiesconfig.html#cfn-cloudfront-cachepolicy-cookiesconfig-cookies",
        ),
    ];
}

/// `AWS::CloudFront::CachePolicy.HeadersConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-headersconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadersConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-headersconfig.html#cfn-cloudfront-cachepolicy-headersconfig-headerbehavior>
    #[serde(rename = "HeaderBehavior")]
    pub header_behavior: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-headersconfig.html#cfn-cloudfront-cachepolicy-headersconfig-headers>
    #[serde(rename = "Headers", default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value<Vec<Value<String>>>>,
}

impl HeadersConfig {
    pub fn new(header_behavior: impl Into<Value<String>>) -> Self {
        Self {
            header_behavior: header_behavior.into(),
            headers: None,
        }
    }
}

impl PropertyType for HeadersConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::CachePolicy.HeadersConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-headersconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "HeaderBehavior",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-headersconfig.html#cfn-cloudfront-cachepolicy-headersconfig-headerbehavior",
        ),
        PropertySpec::optional(
            "Headers",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-headersconfig.html#cfn-cloudfront-cachepolicy-headersconfig-headers",
        ),
    ];
}

/// `AWS::CloudFront::CachePolicy.ParametersInCacheKeyAndForwardedToOrigin`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParametersInCacheKeyAndForwardedToOrigin {
    /// _Required_: Yes
    ///
    /// _Type_: CookiesConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-cookiesconfig>
    #[serde(rename = "CookiesConfig")]
    pub cookies_config: Value<CookiesConfig>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-enableacceptencodingbrotli>
    #[serde(rename = "EnableAcceptEncodingBrotli", default, skip_serializing_if = "Option::is_none")]
    pub enable_accept_encoding_brotli: Option<Value<bool>>,
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-enableacceptencodinggzip>
    #[serde(rename = "EnableAcceptEncodingGzip")]
    pub enable_accept_encoding_gzip: Value<bool>,
    /// _Required_: Yes
    ///
    /// _Type_: HeadersConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-headersconfig>
    #[serde(rename = "HeadersConfig")]
    pub headers_config: Value<HeadersConfig>,
    /// _Required_: Yes
    ///
    /// _Type_: QueryStringsConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-querystringsconfig>
    #[serde(rename = "QueryStringsConfig")]
    pub query_strings_config: Value<QueryStringsConfig>,
}

impl ParametersInCacheKeyAndForwardedToOrigin {
    pub fn new(
        cookies_config: CookiesConfig,
        enable_accept_encoding_gzip: impl Into<Value<bool>>,
        headers_config: HeadersConfig,
        query_strings_config: QueryStringsConfig,
    ) -> Self {
        Self {
            cookies_config: Value::Literal(cookies_config),
            enable_accept_encoding_brotli: None,
            enable_accept_encoding_gzip: enable_accept_encoding_gzip.into(),
            headers_config: Value::Literal(headers_config),
            query_strings_config: Value::Literal(query_strings_config),
        }
    }
}

impl PropertyType for ParametersInCacheKeyAndForwardedToOrigin {
    const TYPE_NAME: &'static str =
        "AWS::CloudFront::CachePolicy.ParametersInCacheKeyAndForwardedToOrigin";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CookiesConfig",
            PropertyKind::Property(CookiesConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-cookiesconfig",
        ),
        PropertySpec::optional(
            "EnableAcceptEncodingBrotli",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-enableacceptencodingbrotli",
        ),
        PropertySpec::required(
            "EnableAcceptEncodingGzip",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-enableacceptencodinggzip",
        ),
        PropertySpec::required(
            "HeadersConfig",
            PropertyKind::Property(HeadersConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-headersconfig",
        ),
        PropertySpec::required(
            "QueryStringsConfig",
            PropertyKind::Property(QueryStringsConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin.html#cfn-cloudfront-cachepolicy-parametersincachekeyandforwardedtoorigin-querystringsconfig",
        ),
    ];
}

/// `AWS::CloudFront::CachePolicy.QueryStringsConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-querystringsconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryStringsConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-querystringsconfig.html#cfn-cloudfront-cachepolicy-querystringsconfig-querystringbehavior>
    #[serde(rename = "QueryStringBehavior")]
    pub query_string_behavior: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-querystringsconfig.html#cfn-cloudfront-cachepolicy-querystringsconfig-querystrings>
    #[serde(rename = "QueryStrings", default, skip_serializing_if = "Option::is_none")]
    pub query_strings: Option<Value<Vec<Value<String>>>>,
}

impl QueryStringsConfig {
    pub fn new(query_string_behavior: impl Into<Value<String>>) -> Self {
        Self {
            query_string_behavior: query_string_behavior.into(),
            query_strings: None,
        }
    }
}

impl PropertyType for QueryStringsConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::CachePolicy.QueryStringsConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-querystringsconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "QueryStringBehavior",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-querystringsconfig.html#cfn-cloudfront-cachepolicy-querystringsconfig-querystringbehavior",
        ),
        PropertySpec::optional(
            "QueryStrings",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cachepolicy-querystringsconfig.html#cfn-cloudfront-cachepolicy-querystringsconfig-querystrings",
        ),
    ];
}
