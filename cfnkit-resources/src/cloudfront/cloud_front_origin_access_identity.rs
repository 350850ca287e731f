//! cloud_front_origin_access_identity types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::CloudFrontOriginAccessIdentity
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, PrimitiveType, PropertyKind, PropertySpec, PropertyType, ResourceProperties,
    UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::CloudFrontOriginAccessIdentity`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cloudfrontoriginaccessidentity.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudFrontOriginAccessIdentity {
    /// _Required_: Yes
    ///
    /// _Type_: CloudFrontOriginAccessIdentityConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cloudfrontoriginaccessidentity.html#cfn-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig>
    #[serde(rename = "CloudFrontOriginAccessIdentityConfig")]
    pub cloud_front_origin_access_identity_config: Value<CloudFrontOriginAccessIdentityConfig>,
}

impl CloudFrontOriginAccessIdentity {
    pub fn new(
        cloud_front_origin_access_identity_config: CloudFrontOriginAccessIdentityConfig,
    ) -> Self {
        Self {
            cloud_front_origin_access_identity_config: Value::Literal(cloud_front_origin_access_identity_config),
        }
    }
}

impl PropertyType for CloudFrontOriginAccessIdentity {
    const TYPE_NAME: &'static str = "AWS::CloudFront::CloudFrontOriginAccessIdentity";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cloudfrontoriginaccessidentity.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CloudFrontOriginAccessIdentityConfig",
            PropertyKind::Property(CloudFrontOriginAccessIdentityConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-cloudfrontoriginaccessidentity.html#cfn-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig",
        ),
    ];
}

impl ResourceProperties for CloudFrontOriginAccessIdentity {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("S3CanonicalUserId", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::CloudFrontOriginAccessIdentity.CloudFrontOriginAccessIdentityConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudFrontOriginAccessIdentityConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig.html#cfn-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig-comment>
    #[serde(rename = "Comment")]
    pub comment: Value<String>,
}

impl CloudFrontOriginAccessIdentityConfig {
    pub fn new(comment: impl Into<Value<String>>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}

impl PropertyType for CloudFrontOriginAccessIdentityConfig {
    const TYPE_NAME: &'static str =
        "AWS::CloudFront::CloudFrontOriginAccessIdentity.CloudFrontOriginAccessIdentityConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig.html#cfn-cloudfront-cloudfrontoriginaccessidentity-cloudfrontoriginaccessidentityconfig-comment",
        ),
    ];
}
