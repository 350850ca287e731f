//! connector_definition types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::ConnectorDefinition
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::{Json, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::ConnectorDefinition`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectorDefinition {
    /// _Required_: No
    ///
    /// _Type_: ConnectorDefinitionVersion
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html#cfn-greengrass-connectordefinition-initialversion>
    #[serde(rename = "InitialVersion", default, skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<Value<ConnectorDefinitionVersion>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html#cfn-greengrass-connectordefinition-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html#cfn-greengrass-connectordefinition-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Json>,
}

impl ConnectorDefinition {
    pub fn new(name: impl Into<Value<String>>) -> Self {
        Self {
            initial_version: None,
            name: name.into(),
            tags: None,
        }
    }
}

impl PropertyType for ConnectorDefinition {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ConnectorDefinition";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "InitialVersion",
            PropertyKind::Property(ConnectorDefinitionVersion::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html#cfn-greengrass-connectordefinition-initialversion",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html#cfn-greengrass-connectordefinition-name",
        ),
        PropertySpec::optional(
            "Tags",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinition.html#cfn-greengrass-connectordefinition-tags",
        ),
    ];
}

impl ResourceProperties for ConnectorDefinition {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Arn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LatestVersionArn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Name", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::Greengrass::ConnectorDefinition.Connector`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Connector {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html#cfn-greengrass-connectordefinition-connector-connectorarn>
    #[serde(rename = "ConnectorArn")]
    pub connector_arn: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html#cfn-greengrass-connectordefinition-connector-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html#cfn-greengrass-connectordefinition-connector-parameters>
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Json>,
}

impl Connector {
    pub fn new(connector_arn: impl Into<Value<String>>, id: impl Into<Value<String>>) -> Self {
        Self {
            connector_arn: connector_arn.into(),
            id: id.into(),
            parameters: None,
        }
    }
}

impl PropertyType for Connector {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ConnectorDefinition.Connector";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "ConnectorArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html#cfn-greengrass-connectordefinition-connector-connectorarn",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html#cfn-greengrass-connectordefinition-connector-id",
        ),
        PropertySpec::optional(
            "Parameters",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connector.html#cfn-greengrass-connectordefinition-connector-parameters",
        ),
    ];
}

/// `AWS::Greengrass::ConnectorDefinition.ConnectorDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connectordefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectorDefinitionVersion {
    /// _Required_: Yes
    ///
    /// _Type_: List of Connector
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connectordefinitionversion.html#cfn-greengrass-connectordefinition-connectordefinitionversion-connectors>
    #[serde(rename = "Connectors")]
    pub connectors: Value<Vec<Connector>>,
}

impl ConnectorDefinitionVersion {
    pub fn new(connectors: Vec<Connector>) -> Self {
        Self {
            connectors: Value::Literal(connectors),
        }
    }
}

impl PropertyType for ConnectorDefinitionVersion {
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ConnectorDefinition.ConnectorDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connectordefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Connectors",
            PropertyKind::List(ItemType::Property(Connector::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinition-connectordefinitionversion.html#cfn-greengrass-connectordefinition-connectordefinitionversion-connectors",
        ),
    ];
}
