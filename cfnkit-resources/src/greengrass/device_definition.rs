//! device_definition types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::DeviceDefinition
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::{Json, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::DeviceDefinition`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceDefinition {
    /// _Required_: No
    ///
    /// _Type_: DeviceDefinitionVersion
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html#cfn-greengrass-devicedefinition-initialversion>
    #[serde(rename = "InitialVersion", default, skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<Value<DeviceDefinitionVersion>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html#cfn-greengrass-devicedefinition-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html#cfn-greengrass-devicedefinition-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Json>,
}

impl DeviceDefinition {
    pub fn new(name: impl Into<Value<String>>) -> Self {
        Self {
            initial_version: None,
            name: name.into(),
            tags: None,
        }
    }
}

impl PropertyType for DeviceDefinition {
    const TYPE_NAME: &'static str = "AWS::Greengrass::DeviceDefinition";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "InitialVersion",
            PropertyKind::Property(DeviceDefinitionVersion::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html#cfn-greengrass-devicedefinition-initialversion",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html#cfn-greengrass-devicedefinition-name",
        ),
        PropertySpec::optional(
            "Tags",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-devicedefinition.html#cfn-greengrass-devicedefinition-tags",
        ),
    ];
}

impl ResourceProperties for DeviceDefinition {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Arn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LatestVersionArn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Name", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::Greengrass::DeviceDefinition.Device`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Device {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-certificatearn>
    #[serde(rename = "CertificateArn")]
    pub certificate_arn: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-syncshadow>
    #[serde(rename = "SyncShadow", default, skip_serializing_if = "Option::is_none")]
    pub sync_shadow: Option<Value<bool>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-thingarn>
    #[serde(rename = "ThingArn")]
    pub thing_arn: Value<String>,
}

impl Device {
    pub fn new(
        certificate_arn: impl Into<Value<String>>,
        id: impl Into<Value<String>>,
        thing_arn: impl Into<Value<String>>,
    ) -> Self {
        Self {
            certificate_arn: certificate_arn.into(),
            id: id.into(),
            sync_shadow: None,
            thing_arn: thing_arn.into(),
        }
    }
}

impl PropertyType for Device {
    const TYPE_NAME: &'static str = "AWS::Greengrass::DeviceDefinition.Device";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CertificateArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-certificatearn",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-id",
        ),
        PropertySpec::optional(
            "SyncShadow",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-syncshadow",
        ),
        PropertySpec::required(
            "ThingArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-device.html#cfn-greengrass-devicedefinition-device-thingarn",
        ),
    ];
}

/// `AWS::Greengrass::DeviceDefinition.DeviceDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-devicedefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceDefinitionVersion {
    /// _Required_: Yes
    ///
    /// _Type_: List of Device
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-devicedefinitionversion.html#cfn-greengrass-devicedefinition-devicedefinitionversion-devices>
    #[serde(rename = "Devices")]
    pub devices: Value<Vec<Device>>,
}

impl DeviceDefinitionVersion {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices: Value::Literal(devices),
        }
    }
}

impl PropertyType for DeviceDefinitionVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::DeviceDefinition.DeviceDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-devicedefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Devices",
            PropertyKind::List(ItemType::Property(Device::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-devicedefinition-devicedefinitionversion.html#cfn-greengrass-devicedefinition-devicedefinitionversion-devices",
        ),
    ];
}
