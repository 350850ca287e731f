//! core_definition types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::CoreDefinition
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::{Json, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::CoreDefinition`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreDefinition {
    /// _Required_: No
    ///
    /// _Type_: CoreDefinitionVersion
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html#cfn-greengrass-coredefinition-initialversion>
    #[serde(rename = "InitialVersion", default, skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<Value<CoreDefinitionVersion>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html#cfn-greengrass-coredefinition-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html#cfn-greengrass-coredefinition-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Json>,
}

impl CoreDefinition {
    pub fn new(name: impl Into<Value<String>>) -> Self {
        Self {
            initial_version: None,
            name: name.into(),
            tags: None,
        }
    }
}

impl PropertyType for CoreDefinition {
    const TYPE_NAME: &'static str = "AWS::Greengrass::CoreDefinition";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "InitialVersion",
            PropertyKind::Property(CoreDefinitionVersion::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html#cfn-greengrass-coredefinition-initialversion",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html#cfn-greengrass-coredefinition-name",
        ),
        PropertySpec::optional(
            "Tags",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinition.html#cfn-greengrass-coredefinition-tags",
        ),
    ];
}

impl ResourceProperties for CoreDefinition {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Arn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LatestVersionArn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Name", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::Greengrass::CoreDefinition.Core`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Core {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-certificatearn>
    #[serde(rename = "CertificateArn")]
    pub certificate_arn: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-syncshadow>
    #[serde(rename = "SyncShadow", default, skip_serializing_if = "Option::is_none")]
    pub sync_shadow: Option<Value<bool>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-thingarn>
    #[serde(rename = "ThingArn")]
    pub thing_arn: Value<String>,
}

impl Core {
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

impl PropertyType for Core {
    const TYPE_NAME: &'static str = "AWS::Greengrass::CoreDefinition.Core";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CertificateArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-certificatearn",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-id",
        ),
        PropertySpec::optional(
            "SyncShadow",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-syncshadow",
        ),
        PropertySpec::required(
            "ThingArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-core.html#cfn-greengrass-coredefinition-core-thingarn",
        ),
    ];
}

/// `AWS::Greengrass::CoreDefinition.CoreDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-coredefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreDefinitionVersion {
    /// _Required_: Yes
    ///
    /// _Type_: List of Core
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-coredefinitionversion.html#cfn-greengrass-coredefinition-coredefinitionversion-cores>
    #[serde(rename = "Cores")]
    pub cores: Value<Vec<Core>>,
}

impl CoreDefinitionVersion {
    pub fn new(cores: Vec<Core>) -> Self {
        Self {
            cores: Value::Literal(cores),
        }
    }
}

impl PropertyType for CoreDefinitionVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::CoreDefinition.CoreDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-coredefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Cores",
            PropertyKind::List(ItemType::Property(Core::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinition-coredefinitionversion.html#cfn-greengrass-coredefinition-coredefinitionversion-cores",
        ),
    ];
}
