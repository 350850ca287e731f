//! public_key types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::PublicKey
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, PrimitiveType, PropertyKind, PropertySpec, PropertyType, ResourceProperties,
    UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::PublicKey`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-publickey.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicKey {
    /// _Required_: Yes
    ///
    /// _Type_: PublicKeyConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-publickey.html#cfn-cloudfront-publickey-publickeyconfig>
    #[serde(rename = "PublicKeyConfig")]
    pub public_key_config: Value<PublicKeyConfig>,
}

impl PublicKey {
    pub fn new(public_key_config: PublicKeyConfig) -> Self {
        Self {
            public_key_config: Value::Literal(public_key_config),
        }
    }
}

impl PropertyType for PublicKey {
    const TYPE_NAME: &'static str = "AWS::CloudFront::PublicKey";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-publickey.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "PublicKeyConfig",
            PropertyKind::Property(PublicKeyConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-publickey.html#cfn-cloudfront-publickey-publickeyconfig",
        ),
    ];
}

impl ResourceProperties for PublicKey {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("CreatedTime", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::PublicKey.PublicKeyConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicKeyConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-callerreference>
    #[serde(rename = "CallerReference")]
    pub caller_reference: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-comment>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-encodedkey>
    #[serde(rename = "EncodedKey")]
    pub encoded_key: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
}

impl PublicKeyConfig {
    pub fn new(
        caller_reference: impl Into<Value<String>>,
        encoded_key: impl Into<Value<String>>,
        name: impl Into<Value<String>>,
    ) -> Self {
        Self {
            caller_reference: caller_reference.into(),
            comment: None,
            encoded_key: encoded_key.into(),
            name: name.into(),
        }
    }
}

impl PropertyType for PublicKeyConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::PublicKey.PublicKeyConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CallerReference",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-callerreference",
        ),
        PropertySpec::optional(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-comment",
        ),
        PropertySpec::required(
            "EncodedKey",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-encodedkey",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-publickey-publickeyconfig.html#cfn-cloudfront-publickey-publickeyconfig-name",
        ),
    ];
}
