//! connector_definition_version types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::ConnectorDefinitionVersion
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::{Json, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::ConnectorDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectorDefinitionVersion {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinitionversion.html#cfn-greengrass-connectordefinitionversion-connectordefinitionid>
    #[serde(rename = "ConnectorDefinitionId")]
    pub connector_definition_id: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: List of Connector
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinitionversion.html#cfn-greengrass-connectordefinitionversion-connectors>
    #[serde(rename = "Connectors")]
    pub connectors: Value<Vec<Connector>>,
}

impl ConnectorDefinitionVersion {
    pub fn new(
        connector_definition_id: impl Into<Value<String>>,
        connectors: Vec<Connector>,
    ) -> Self {
        Self {
            connector_definition_id: connector_definition_id.into(),
            connectors: Value::Literal(connectors),
        }
    }
}

impl PropertyType for ConnectorDefinitionVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ConnectorDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "ConnectorDefinitionId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinitionversion.html#cfn-greengrass-connectordefinitionversion-connectordefinitionid",
        ),
        PropertySpec::required(
            "Connectors",
            PropertyKind::List(ItemType::Property(Connector::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-connectordefinitionversion.html#cfn-greengrass-connectordefinitionversion-connectors",
        ),
    ];
}

impl ResourceProperties for ConnectorDefinitionVersion {
    const ATTRIBUTES: &'static [AttributeSpec] = &[];
}

/// `AWS::Greengrass::ConnectorDefinitionVersion.Connector`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Connector {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html#cfn-greengrass-connectordefinitionversion-connector-connectorarn>
    #[serde(rename = "ConnectorArn")]
    pub connector_arn: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html#cfn-greengrass-connectordefinitionversion-connector-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html#cfn-greengrass-connectordefinitionversion-connector-parameters>
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
    const TYPE_NAME: &'static str = "AWS::Greengrass::ConnectorDefinitionVersion.Connector";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "ConnectorArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html#cfn-greengrass-connectordefinitionversion-connector-connectorarn",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html#cfn-greengrass-connectordefinitionversion-connector-id",
        ),
        PropertySpec::optional(
            "Parameters",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-connectordefinitionversion-connector.html#cfn-greengrass-connectordefinitionversion-connector-parameters",
        ),
    ];
}
