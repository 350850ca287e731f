//! function_definition types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::FunctionDefinition
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::{Json, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::FunctionDefinition`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionDefinition {
    /// _Required_: No
    ///
    /// _Type_: FunctionDefinitionVersion
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html#cfn-greengrass-functiondefinition-initialversion>
    #[serde(rename = "InitialVersion", default, skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<Value<FunctionDefinitionVersion>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html#cfn-greengrass-functiondefinition-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html#cfn-greengrass-functiondefinition-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Json>,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<Value<String>>) -> Self {
        Self {
            initial_version: None,
            name: name.into(),
            tags: None,
        }
    }
}

impl PropertyType for FunctionDefinition {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "InitialVersion",
            PropertyKind::Property(FunctionDefinitionVersion::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html#cfn-greengrass-functiondefinition-initialversion",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html#cfn-greengrass-functiondefinition-name",
        ),
        PropertySpec::optional(
            "Tags",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-functiondefinition.html#cfn-greengrass-functiondefinition-tags",
        ),
    ];
}

impl ResourceProperties for FunctionDefinition {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Arn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LatestVersionArn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Name", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.DefaultConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-defaultconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultConfig {
    /// _Required_: Yes
    ///
    /// _Type_: Execution
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-defaultconfig.html#cfn-greengrass-functiondefinition-defaultconfig-execution>
    #[serde(rename = "Execution")]
    pub execution: Value<Execution>,
}

impl DefaultConfig {
    pub fn new(execution: Execution) -> Self {
        Self {
            execution: Value::Literal(execution),
        }
    }
}

impl PropertyType for DefaultConfig {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.DefaultConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-defaultconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Execution",
            PropertyKind::Property(Execution::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-defaultconfig.html#cfn-greengrass-functiondefinition-defaultconfig-execution",
        ),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.Environment`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Environment {
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-accesssysfs>
    #[serde(rename = "AccessSysfs", default, skip_serializing_if = "Option::is_none")]
    pub access_sysfs: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: Execution
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-execution>
    #[serde(rename = "Execution", default, skip_serializing_if = "Option::is_none")]
    pub execution: Option<Value<Execution>>,
    /// _Required_: No
    ///
    /// _Type_: List of ResourceAccessPolicy
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-resourceaccesspolicies>
    #[serde(rename = "ResourceAccessPolicies", default, skip_serializing_if = "Option::is_none")]
    pub resource_access_policies: Option<Value<Vec<ResourceAccessPolicy>>>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-variables>
    #[serde(rename = "Variables", default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Json>,
}

impl PropertyType for Environment {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.Environment";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "AccessSysfs",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-accesssysfs",
        ),
        PropertySpec::optional(
            "Execution",
            PropertyKind::Property(Execution::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-execution",
        ),
        PropertySpec::optional(
            "ResourceAccessPolicies",
            PropertyKind::List(ItemType::Property(ResourceAccessPolicy::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-resourceaccesspolicies",
        ),
        PropertySpec::optional(
            "Variables",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-environment.html#cfn-greengrass-functiondefinition-environment-variables",
        ),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.Execution`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-execution.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Execution {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-execution.html#cfn-greengrass-functiondefinition-execution-isolationmode>
    #[serde(rename = "IsolationMode", default, skip_serializing_if = "Option::is_none")]
    pub isolation_mode: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: RunAs
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-execution.html#cfn-greengrass-functiondefinition-execution-runas>
    #[serde(rename = "RunAs", default, skip_serializing_if = "Option::is_none")]
    pub run_as: Option<Value<RunAs>>,
}

impl PropertyType for Execution {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.Execution";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-execution.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "IsolationMode",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-execution.html#cfn-greengrass-functiondefinition-execution-isolationmode",
        ),
        PropertySpec::optional(
            "RunAs",
            PropertyKind::Property(RunAs::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-execution.html#cfn-greengrass-functiondefinition-execution-runas",
        ),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.Function`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Function {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html#cfn-greengrass-functiondefinition-function-functionarn>
    #[serde(rename = "FunctionArn")]
    pub function_arn: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: FunctionConfiguration
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html#cfn-greengrass-functiondefinition-function-functionconfiguration>
    #[serde(rename = "FunctionConfiguration")]
    pub function_configuration: Value<FunctionConfiguration>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html#cfn-greengrass-functiondefinition-function-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
}

impl Function {
    pub fn new(
        function_arn: impl Into<Value<String>>,
        function_configuration: FunctionConfiguration,
        id: impl Into<Value<String>>,
    ) -> Self {
        Self {
            function_arn: function_arn.into(),
            function_configuration: Value::Literal(function_configuration),
            id: id.into(),
        }
    }
}

impl PropertyType for Function {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.Function";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "FunctionArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html#cfn-greengrass-functiondefinition-function-functionarn",
        ),
        PropertySpec::required(
            "FunctionConfiguration",
            PropertyKind::Property(FunctionConfiguration::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html#cfn-greengrass-functiondefinition-function-functionconfiguration",
        ),
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-function.html#cfn-greengrass-functiondefinition-function-id",
        ),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.FunctionConfiguration`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionConfiguration {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-encodingtype>
    #[serde(rename = "EncodingType", default, skip_serializing_if = "Option::is_none")]
    pub encoding_type: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Environment
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-environment>
    #[serde(rename = "Environment", default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value<Environment>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-execargs>
    #[serde(rename = "ExecArgs", default, skip_serializing_if = "Option::is_none")]
    pub exec_args: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-executable>
    #[serde(rename = "Executable", default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-memorysize>
    #[serde(rename = "MemorySize", default, skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-pinned>
    #[serde(rename = "Pinned", default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-timeout>
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<i64>>,
}

impl PropertyType for FunctionConfiguration {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.FunctionConfiguration";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "EncodingType",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-encodingtype",
        ),
        PropertySpec::optional(
            "Environment",
            PropertyKind::Property(Environment::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-environment",
        ),
        PropertySpec::optional(
            "ExecArgs",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-execargs",
        ),
        PropertySpec::optional(
            "Executable",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-executable",
        ),
        PropertySpec::optional(
            "MemorySize",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-memorysize",
        ),
        PropertySpec::optional(
            "Pinned",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-pinned",
        ),
        PropertySpec::optional(
            "Timeout",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functionconfiguration.html#cfn-greengrass-functiondefinition-functionconfiguration-timeout",
        ),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.FunctionDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functiondefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionDefinitionVersion {
    /// _Required_: No
    ///
    /// _Type_: DefaultConfig
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functiondefinitionversion.html#cfn-greengrass-functiondefinition-functiondefinitionversion-defaultconfig>
    #[serde(rename = "DefaultConfig", default, skip_serializing_if = "Option::is_none")]
    pub default_config: Option<Value<DefaultConfig>>,
    /// _Required_: Yes
    ///
    /// _Type_: List of Function
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functiondefinitionversion.html#cfn-greengrass-functiondefinition-functiondefinitionversion-functions>
    #[serde(rename = "Functions")]
    pub functions: Value<Vec<Function>>,
}

impl FunctionDefinitionVersion {
    pub fn new(functions: Vec<Function>) -> Self {
        Self {
            default_config: None,
            functions: Value::Literal(functions),
        }
    }
}

impl PropertyType for FunctionDefinitionVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.FunctionDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functiondefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "DefaultConfig",
            PropertyKind::Property(DefaultConfig::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functiondefinitionversion.html#cfn-greengrass-functiondefinition-functiondefinitionversion-defaultconfig",
        ),
        PropertySpec::required(
            "Functions",
            PropertyKind::List(ItemType::Property(Function::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-functiondefinitionversion.html#cfn-greengrass-functiondefinition-functiondefinitionversion-functions",
        ),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.ResourceAccessPolicy`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-resourceaccesspolicy.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceAccessPolicy {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-resourceaccesspolicy.html#cfn-greengrass-functiondefinition-resourceaccesspolicy-permission>
    #[serde(rename = "Permission", default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Value<String>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-resourceaccesspolicy.html#cfn-greengrass-functiondefinition-resourceaccesspolicy-resourceid>
    #[serde(rename = "ResourceId")]
    pub resource_id: Value<String>,
}

impl ResourceAccessPolicy {
    pub fn new(resource_id: impl Into<Value<String>>) -> Self {
        Self {
            permission: None,
            resource_id: resource_id.into(),
        }
    }
}

impl PropertyType for ResourceAccessPolicy {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.ResourceAccessPolicy";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-resourceaccesspolicy.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Permission",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-resourceaccesspolicy.html#cfn-greengrass-functiondefinition-resourceaccesspolicy-permission",
        ),
        PropertySpec::required(
            "ResourceId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-resourceaccesspolicy.html#cfn-greengrass-functiondefinition-resourceaccesspolicy-resourceid",
        ),
    ];
}

/// `AWS::Greengrass::FunctionDefinition.RunAs`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-runas.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunAs {
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-runas.html#cfn-greengrass-functiondefinition-runas-gid>
    #[serde(rename = "Gid", default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<Value<i64>>,
    /// _Required_: No
    ///
    /// _Type_: Integer
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-runas.html#cfn-greengrass-functiondefinition-runas-uid>
    #[serde(rename = "Uid", default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Value<i64>>,
}

impl PropertyType for RunAs {
    const TYPE_NAME: &'static str = "AWS::Greengrass::FunctionDefinition.RunAs";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-runas.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "Gid",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-runas.html#cfn-greengrass-functiondefinition-runas-gid",
        ),
        PropertySpec::optional(
            "Uid",
            PropertyKind::Primitive(PrimitiveType::Integer),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-functiondefinition-runas.html#cfn-greengrass-functiondefinition-runas-uid",
        ),
    ];
}
