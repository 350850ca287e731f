//! group types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::Group
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, PrimitiveType, PropertyKind, PropertySpec, PropertyType, ResourceProperties,
    UpdateType,
};
use cfnkit_core::value::{Json, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::Group`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Group {
    /// _Required_: No
    ///
    /// _Type_: GroupVersion
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-initialversion>
    #[serde(rename = "InitialVersion", default, skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<Value<GroupVersion>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-rolearn>
    #[serde(rename = "RoleArn", default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Json>,
}

impl Group {
    pub fn new(name: impl Into<Value<String>>) -> Self {
        Self {
            initial_version: None,
            name: name.into(),
            role_arn: None,
            tags: None,
        }
    }
}

impl PropertyType for Group {
    const TYPE_NAME: &'static str = "AWS::Greengrass::Group";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "InitialVersion",
            PropertyKind::Property(GroupVersion::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-initialversion",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-name",
        ),
        PropertySpec::optional(
            "RoleArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-rolearn",
        ),
        PropertySpec::optional(
            "Tags",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-group.html#cfn-greengrass-group-tags",
        ),
    ];
}

impl ResourceProperties for Group {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Arn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LatestVersionArn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Name", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("RoleArn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("RoleAttachedAt", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::Greengrass::Group.GroupVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupVersion {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-connectordefinitionversionarn>
    #[serde(rename = "ConnectorDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub connector_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-coredefinitionversionarn>
    #[serde(rename = "CoreDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub core_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-devicedefinitionversionarn>
    #[serde(rename = "DeviceDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub device_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-functiondefinitionversionarn>
    #[serde(rename = "FunctionDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub function_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-loggerdefinitionversionarn>
    #[serde(rename = "LoggerDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub logger_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-resourcedefinitionversionarn>
    #[serde(rename = "ResourceDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub resource_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-subscriptiondefinitionversionarn>
    #[serde(rename = "SubscriptionDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub subscription_definition_version_arn: Option<Value<String>>,
}

impl PropertyType for GroupVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::Group.GroupVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "ConnectorDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-connectordefinitionversionarn",
        ),
        PropertySpec::optional(
            "CoreDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-coredefinitionversionarn",
        ),
        PropertySpec::optional(
            "DeviceDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-devicedefinitionversionarn",
        ),
        PropertySpec::optional(
            "FunctionDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-functiondefinitionversionarn",
        ),
        PropertySpec::optional(
            "LoggerDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-loggerdefinitionversionarn",
        ),
        PropertySpec::optional(
            "ResourceDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-resourcedefinitionversionarn",
        ),
        PropertySpec::optional(
            "SubscriptionDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-group-groupversion.html#cfn-greengrass-group-groupversion-subscriptiondefinitionversionarn",
        ),
    ];
}
