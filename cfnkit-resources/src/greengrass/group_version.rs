//! group_version types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::GroupVersion
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, PrimitiveType, PropertyKind, PropertySpec, PropertyType, ResourceProperties,
    UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::GroupVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupVersion {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-connectordefinitionversionarn>
    #[serde(rename = "ConnectorDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub connector_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-coredefinitionversionarn>
    #[serde(rename = "CoreDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub core_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-devicedefinitionversionarn>
    #[serde(rename = "DeviceDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub device_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-functiondefinitionversionarn>
    #[serde(rename = "FunctionDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub function_definition_version_arn: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-groupid>
    #[serde(rename = "GroupId")]
    pub group_id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-loggerdefinitionversionarn>
    #[serde(rename = "LoggerDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub logger_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-resourcedefinitionversionarn>
    #[serde(rename = "ResourceDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub resource_definition_version_arn: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-subscriptiondefinitionversionarn>
    #[serde(rename = "SubscriptionDefinitionVersionArn", default, skip_serializing_if = "Option::is_none")]
    pub subscription_definition_version_arn: Option<Value<String>>,
}

impl GroupVersion {
    pub fn new(group_id: impl Into<Value<String>>) -> Self {
        Self {
            connector_definition_version_arn: None,
            core_definition_version_arn: None,
            device_definition_version_arn: None,
            function_definition_version_arn: None,
            group_id: group_id.into(),
            logger_definition_version_arn: None,
            resource_definition_version_arn: None,
            subscription_definition_version_arn: None,
        }
    }
}

impl PropertyType for GroupVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::GroupVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "ConnectorDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-connectordefinitionversionarn",
        ),
        PropertySpec::optional(
            "CoreDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-coredefinitionversionarn",
        ),
        PropertySpec::optional(
            "DeviceDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-devicedefinitionversionarn",
        ),
        PropertySpec::optional(
            "FunctionDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-functiondefinitionversionarn",
        ),
        PropertySpec::required(
            "GroupId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-groupid",
        ),
        PropertySpec::optional(
            "LoggerDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-loggerdefinitionversionarn",
        ),
        PropertySpec::optional(
            "ResourceDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-resourcedefinitionversionarn",
        ),
        PropertySpec::optional(
            "SubscriptionDefinitionVersionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-groupversion.html#cfn-greengrass-groupversion-subscriptiondefinitionversionarn",
        ),
    ];
}

impl ResourceProperties for GroupVersion {
    const ATTRIBUTES: &'static [AttributeSpec] = &[];
}
