//! streaming_distribution types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::StreamingDistribution
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::tag::Tag;
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::StreamingDistribution`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-streamingdistribution.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamingDistribution {
    /// _Required_: Yes
    ///
    /// _Type_: StreamingDistributionConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-streamingdistribution.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig>
    #[serde(rename = "StreamingDistributionConfig")]
    pub streaming_distribution_config: Value<StreamingDistributionConfig>,
    /// _Required_: Yes
    ///
    /// _Type_: List of Tag
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-streamingdistribution.html#cfn-cloudfront-streamingdistribution-tags>
    #[serde(rename = "Tags")]
    pub tags: Value<Vec<Tag>>,
}

impl StreamingDistribution {
    pub fn new(streaming_distribution_config: StreamingDistributionConfig, tags: Vec<Tag>) -> Self {
        Self {
            streaming_distribution_config: Value::Literal(streaming_distribution_config),
            tags: Value::Literal(tags),
        }
    }
}

impl PropertyType for StreamingDistribution {
    const TYPE_NAME: &'static str = "AWS::CloudFront::StreamingDistribution";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-streamingdistribution.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "StreamingDistributionConfig",
            PropertyKind::Property(StreamingDistributionConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-streamingdistribution.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig",
        ),
        PropertySpec::required(
            "Tags",
            PropertyKind::List(ItemType::Property(Tag::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-streamingdistribution.html#cfn-cloudfront-streamingdistribution-tags",
        ),
    ];
}

impl ResourceProperties for StreamingDistribution {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("DomainName", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::StreamingDistribution.Logging`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logging {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html#cfn-cloudfront-streamingdistribution-logging-bucket>
    #[serde(rename = "Bucket")]
    pub bucket: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html#cfn-cloudfront-streamingdistribution-logging-enabled>
    #[serde(rename = "Enabled")]
    pub enabled: Value<bool>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html#cfn-cloudfront-streamingdistribution-logging-prefix>
    #[serde(rename = "Prefix")]
    pub prefix: Value<String>,
}

impl Logging {
    pub fn new(
        bucket: impl Into<Value<String>>,
        enabled: impl Into<Value<bool>>,
        prefix: impl Into<Value<String>>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            enabled: enabled.into(),
            prefix: prefix.into(),
        }
    }
}

impl PropertyType for Logging {
    const TYPE_NAME: &'static str = "AWS::CloudFront::StreamingDistribution.Logging";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Bucket",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html#cfn-cloudfront-streamingdistribution-logging-bucket",
        ),
        PropertySpec::required(
            "Enabled",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html#cfn-cloudfront-streamingdistribution-logging-enabled",
        ),
        PropertySpec::required(
            "Prefix",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-logging.html#cfn-cloudfront-streamingdistribution-logging-prefix",
        ),
    ];
}

/// `AWS::CloudFront::StreamingDistribution.S3Origin`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-s3origin.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct S3Origin {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-s3origin.html#cfn-cloudfront-streamingdistribution-s3origin-domainname>
    #[serde(rename = "DomainName")]
    pub domain_name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-s3origin.html#cfn-cloudfront-streamingdistribution-s3origin-originaccessidentity>
    #[serde(rename = "OriginAccessIdentity")]
    pub origin_access_identity: Value<String>,
}

impl S3Origin {
    pub fn new(
        domain_name: impl Into<Value<String>>,
        origin_access_identity: impl Into<Value<String>>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            origin_access_identity: origin_access_identity.into(),
        }
    }
}

impl PropertyType for S3Origin {
    const TYPE_NAME: &'static str = "AWS::CloudFront::StreamingDistribution.S3Origin";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-s3origin.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DomainName",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-s3origin.html#cfn-cloudfront-streamingdistribution-s3origin-domainname",
        ),
        PropertySpec::required(
            "OriginAccessIdentity",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-s3origin.html#cfn-cloudfront-streamingdistribution-s3origin-originaccessidentity",
        ),
    ];
}

/// `AWS::CloudFront::StreamingDistribution.StreamingDistributionConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamingDistributionConfig {
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-aliases>
    #[serde(rename = "Aliases", default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Value<Vec<Value<String>>>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-comment>
    #[serde(rename = "Comment")]
    pub comment: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-enabled>
    #[serde(rename = "Enabled")]
    pub enabled: Value<bool>,
    /// _Required_: No
    ///
    /// _Type_: Logging
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-logging>
    #[serde(rename = "Logging", default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<Value<Logging>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-priceclass>
    #[serde(rename = "PriceClass", default, skip_serializing_if = "Option::is_none")]
    pub price_class: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: S3Origin
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-s3origin>
    #[serde(rename = "S3Origin")]
    pub s3_origin: Value<S3Origin>,
    /// _Required_: Yes
    ///
    /// _Type_: TrustedSigners
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-trustedsigners>
    #[serde(rename = "TrustedSigners")]
    pub trusted_signers: Value<TrustedSigners>,
}

impl StreamingDistributionConfig {
    pub fn new(
        comment: impl Into<Value<String>>,
        enabled: impl Into<Value<bool>>,
        s3_origin: S3Origin,
        trusted_signers: TrustedSigners,
    ) -> Self {
        Self {
            aliases: None,
            comment: comment.into(),
            enabled: enabled.into(),
            logging: None,
            price_class: None,
            s3_origin: Value::Literal(s3_origin),
            trusted_signers: Value::Literal(trusted_signers),
        }
    }
}

impl PropertyType for StreamingDistributionConfig {
    const TYPE_NAME: &'static str =
        "AWS::CloudFront::StreamingDistribution.StreamingDistributionConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Aliases",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-aliases",
        ),
        PropertySpec::required(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-comment",
        ),
        PropertySpec::required(
            "Enabled",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-enabled",
        ),
        PropertySpec::optional(
            "Logging",
            PropertyKind::Property(Logging::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-logging",
        ),
        PropertySpec::optional(
            "PriceClass",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-priceclass",
        ),
        PropertySpec::required(
            "S3Origin",
            PropertyKind::Property(S3Origin::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-s3origin",
        ),
        PropertySpec::required(
            "TrustedSigners",
            PropertyKind::Property(TrustedSigners::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-streamingdistributionconfig.html#cfn-cloudfront-streamingdistribution-streamingdistributionconfig-trustedsigners",
        ),
    ];
}

/// `AWS::CloudFront::StreamingDistribution.TrustedSigners`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-trustedsigners.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustedSigners {
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-trustedsigners.html#cfn-cloudfront-streamingdistribution-trustedsigners-awsaccountnumbers>
    #[serde(rename = "AwsAccountNumbers", default, skip_serializing_if = "Option::is_none")]
    pub aws_account_numbers: Option<Value<Vec<Value<String>>>>,
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-trustedsigners.html#cfn-cloudfront-streamingdistribution-trustedsigners-enabled>
    #[serde(rename = "Enabled")]
    pub enabled: Value<bool>,
}

impl TrustedSigners {
    pub fn new(enabled: impl Into<Value<bool>>) -> Self {
        Self {
            aws_account_numbers: None,
            enabled: enabled.into(),
        }
    }
}

impl PropertyType for TrustedSigners {
    const TYPE_NAME: &'static str = "AWS::CloudFront::StreamingDistribution.TrustedSigners";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-trustedsigners.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "AwsAccountNumbers",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-trustedsigners.html#cfn-cloudfront-streamingdistribution-trustedsigners-awsaccountnumbers",
        ),
        PropertySpec::required(
            "Enabled",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-streamingdistribution-trustedsigners.html#cfn-cloudfront-streamingdistribution-trustedsigners-enabled",
        ),
    ];
}
