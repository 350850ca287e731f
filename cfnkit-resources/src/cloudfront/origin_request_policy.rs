//! origin_request_policy types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::OriginRequestPolicy
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::OriginRequestPolicy`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-originrequestpolicy.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginRequestPolicy {
    /// _Required_: Yes
    ///
    /// _Type_: OriginRequestPolicyConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-originrequestpolicy.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig>
    #[serde(rename = "OriginRequestPolicyConfig")]
    pub origin_request_policy_config: Value<OriginRequestPolicyConfig>,
}

impl OriginRequestPolicy {
    pub fn new(origin_request_policy_config: OriginRequestPolicyConfig) -> Self {
        Self {
            origin_request_policy_config: Value::Literal(origin_request_policy_config),
        }
    }
}

impl PropertyType for OriginRequestPolicy {
    const TYPE_NAME: &'static str = "AWS::CloudFront::OriginRequestPolicy";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-originrequestpolicy.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "OriginRequestPolicyConfig",
            PropertyKind::Property(OriginRequestPolicyConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-originrequestpolicy.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig",
        ),
    ];
}

impl ResourceProperties for OriginRequestPolicy {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LastModifiedTime", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::OriginRequestPolicy.CookiesConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-cookiesconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookiesConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-cookiesconfig.html#cfn-cloudfront-originrequestpolicy-cookiesconfig-cookiebehavior>
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
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-cookiesconfig.html#cfn-cloudfront-originrequestpolicy-cookiesconfig-cookies>
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
    const TYPE_NAME: &'static str = "AWS::CloudFront::OriginRequestPolicy.CookiesConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-cookiesconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CookieBehavior",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-cookiesconfig.html#cfn-cloudfront-originrequestpolicy-cookiesconfig-cookiebehavior",
        ),
        PropertySpec::optional(
            "Cookies",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-cookiesconfig.html#cfn-cloudfront-originrequestpolicy-cookiesconfig-cookies",
        ),
    ];
}

/// `AWS::CloudFront::OriginRequestPolicy.HeadersConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-headersconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadersConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-headersconfig.html#cfn-cloudfront-originrequestpolicy-headersconfig-headerbehavior>
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
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-headersconfig.html#cfn-cloudfront-originrequestpolicy-headersconfig-headers>
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
    const TYPE_NAME: &'static str = "AWS::CloudFront::OriginRequestPolicy.HeadersConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-headersconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "HeaderBehavior",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-headersconfig.html#cfn-cloudfront-originrequestpolicy-headersconfig-headerbehavior",
        ),
        PropertySpec::optional(
            "Headers",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-headersconfig.html#cfn-cloudfront-originrequestpolicy-headersconfig-headers",
        ),
    ];
}

/// `AWS::CloudFront::OriginRequestPolicy.OriginRequestPolicyConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginRequestPolicyConfig {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-comment>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: CookiesConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-cookiesconfig>
    #[serde(rename = "CookiesConfig")]
    pub cookies_config: Value<CookiesConfig>,
    /// _Required_: Yes
    ///
    /// _Type_: HeadersConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-headersconfig>
    #[serde(rename = "HeadersConfig")]
    pub headers_config: Value<HeadersConfig>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: QueryStringsConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-querystringsconfig>
    #[serde(rename = "QueryStringsConfig")]
    pub query_strings_config: Value<QueryStringsConfig>,
}

impl OriginRequestPolicyConfig {
    pub fn new(
        cookies_config: CookiesConfig,
        headers_config: HeadersConfig,
        name: impl Into<Value<String>>,
        query_strings_config: QueryStringsConfig,
    ) -> Self {
        Self {
            comment: None,
            cookies_config: Value::Literal(cookies_config),
            headers_config: Value::Literal(headers_config),
            name: name.into(),
            query_strings_config: Value::Literal(query_strings_config),
        }
    }
}

impl PropertyType for OriginRequestPolicyConfig {
    const TYPE_NAME: &'static str =
        "AWS::CloudFront::OriginRequestPolicy.OriginRequestPolicyConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-comment",
        ),
        PropertySpec::required(
            "CookiesConfig",
            PropertyKind::Property(CookiesConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-cookiesconfig",
        ),
        PropertySpec::required(
            "HeadersConfig",
            PropertyKind::Property(HeadersConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-headersconfig",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-name",
        ),
        PropertySpec::required(
            "QueryStringsConfig",
            PropertyKind::Property(QueryStringsConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-originrequestpolicyconfig.html#cfn-cloudfront-originrequestpolicy-originrequestpolicyconfig-querystringsconfig",
        ),
    ];
}

/// `AWS::CloudFront::OriginRequestPolicy.QueryStringsConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-querystringsconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryStringsConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-querystringsconfig.html#cfn-cloudfront-originrequestpolicy-querystringsconfig-querystringbehavior>
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
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-querystringsconfig.html#cfn-cloudfront-originrequestpolicy-querystringsconfig-querystrings>
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
    const TYPE_NAME: &'static str = "AWS::CloudFront::OriginRequestPolicy.QueryStringsConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-querystringsconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "QueryStringBehavior",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-querystringsconfig.html#cfn-cloudfront-originrequestpolicy-querystringsconfig-querystringbehavior",
        ),
        PropertySpec::optional(
            "QueryStrings",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-originrequestpolicy-querystringsconfig.html#cfn-cloudfront-originrequestpolicy-querystringsconfig-querystrings",
        ),
    ];
}
