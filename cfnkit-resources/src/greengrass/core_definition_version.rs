//! core_definition_version types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::CoreDefinitionVersion
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::CoreDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreDefinitionVersion {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinitionversion.html#cfn-greengrass-coredefinitionversion-coredefinitionid>
    #[serde(rename = "CoreDefinitionId")]
    pub core_definition_id: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: List of Core
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinitionversion.html#cfn-greengrass-coredefinitionversion-cores>
    #[serde(rename = "Cores")]
    pub cores: Value<Vec<Core>>,
}

impl CoreDefinitionVersion {
    pub fn new(core_definition_id: impl Into<Value<String>>, cores: Vec<Core>) -> Self {
        Self {
            core_definition_id: core_definition_id.into(),
            cores: Value::Literal(cores),
        }
    }
}

impl PropertyType for CoreDefinitionVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::CoreDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CoreDefinitionId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinitionversion.html#cfn-greengrass-coredefinitionversion-coredefinitionid",
        ),
        PropertySpec::required(
            "Cores",
            PropertyKind::List(ItemType::Property(Core::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-coredefinitionversion.html#cfn-greengrass-coredefinitionversion-cores",
        ),
    ];
}

impl ResourceProperties for CoreDefinitionVersion {
    const ATTRIBUTES: &'static [AttributeSpec] = &[];
}

/// `AWS::Greengrass::CoreDefinitionVersion.Core`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Core {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-certificatearn>
    #[serde(rename = "CertificateArn")]
    pub certificate_arn: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-syncshadow>
    #[serde(rename = "SyncShadow", default, skip_serializing_if = "Option::is_none")]
    pub sync_shadow: Option<Value<bool>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-thingarn>
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
    const TYPE_NAME: &'static str = "AWS::Greengrass::CoreDefinitionVersion.Core";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "CertificateArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-certificatearn",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-id",
        ),
        PropertySpec::optional(
            "SyncShadow",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-syncshadow",
        ),
        PropertySpec::required(
            "ThingArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-coredefinitionversion-core.html#cfn-greengrass-coredefinitionversion-core-thingarn",
        ),
    ];
}
