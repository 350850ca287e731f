//! key_group types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::KeyGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::KeyGroup`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-keygroup.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyGroup {
    /// _Required_: Yes
    ///
    /// _Type_: KeyGroupConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-keygroup.html#cfn-cloudfront-keygroup-keygroupconfig>
    #[serde(rename = "KeyGroupConfig")]
    pub key_group_config: Value<KeyGroupConfig>,
}

impl KeyGroup {
    pub fn new(key_group_config: KeyGroupConfig) -> Self {
        Self {
            key_group_config: Value::Literal(key_group_config),
        }
    }
}

impl PropertyType for KeyGroup {
    const TYPE_NAME: &'static str = "AWS::CloudFront::KeyGroup";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-keygroup.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "KeyGroupConfig",
            PropertyKind::Property(KeyGroupConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-keygroup.html#cfn-cloudfront-keygroup-keygroupconfig",
        ),
    ];
}

impl ResourceProperties for KeyGroup {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LastModifiedTime", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::KeyGroup.KeyGroupConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyGroupConfig {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html#cfn-cloudfront-keygroup-keygroupconfig-comment>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html#cfn-cloudfront-keygroup-keygroupconfig-items>
    #[serde(rename = "Items")]
    pub items: Value<Vec<Value<String>>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html#cfn-cloudfront-keygroup-keygroupconfig-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
}

impl KeyGroupConfig {
    pub fn new(items: Vec<Value<String>>, name: impl Into<Value<String>>) -> Self {
        Self {
            comment: None,
            items: Value::Literal(items),
            name: name.into(),
        }
    }
}

impl PropertyType for KeyGroupConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::KeyGroup.KeyGroupConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html#cfn-cloudfront-keygroup-keygroupconfig-comment",
        ),
        PropertySpec::required(
            "Items",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html#cfn-cloudfront-keygroup-keygroupconfig-items",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-keygroup-keygroupconfig.html#cfn-cloudfront-keygroup-keygroupconfig-name",
        ),
    ];
}
