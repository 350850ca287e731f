//! resource_definition types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::ResourceDefinition
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::{Json, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::ResourceDefinition`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDefinition {
    /// _Required_: No
    ///
    /// _Type_: ResourceDefinitionVersion
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html#cfn-greengrass-resourcedefinition-initialversion>
    #[serde(rename = "InitialVersion", default, skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<Value<ResourceDefinitionVersion>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html#cfn-greengrass-resourcedefinition-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: Json
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html#cfn-greengrass-resourcedefinition-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Json>,
}

impl ResourceDefinition {
    pub fn new(name: impl Into<Value<String>>) -> Self {
        Self {
            initial_version: None,
            name: name.into(),
            tags: None,
        }
    }
}

impl PropertyType for ResourceDefinition {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinition";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "InitialVersion",
            PropertyKind::Property(ResourceDefinitionVersion::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html#cfn-greengrass-resourcedefinition-initialversion",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html#cfn-greengrass-resourcedefinition-name",
        ),
        PropertySpec::optional(
            "Tags",
            PropertyKind::Primitive(PrimitiveType::Json),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinition.html#cfn-greengrass-resourcedefinition-tags",
        ),
    ];
}

impl ResourceProperties for ResourceDefinition {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Arn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Id", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("LatestVersionArn", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Name", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.GroupOwnerSetting`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-groupownersetting.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupOwnerSetting {
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-groupownersetting.html#cfn-greengrass-resourcedefinition-groupownersetting-autoaddgroupowner>
    #[serde(rename = "AutoAddGroupOwner")]
    pub auto_add_group_owner: Value<bool>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-groupownersetting.html#cfn-greengrass-resourcedefinition-groupownersetting-groupowner>
    #[serde(rename = "GroupOwner", default, skip_serializing_if = "Option::is_none")]
    pub group_owner: Option<Value<String>>,
}

impl GroupOwnerSetting {
    pub fn new(auto_add_group_owner: impl Into<Value<bool>>) -> Self {
        Self {
            auto_add_group_owner: auto_add_group_owner.into(),
            group_owner: None,
        }
    }
}

impl PropertyType for GroupOwnerSetting {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinition.GroupOwnerSetting";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-groupownersetting.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "AutoAddGroupOwner",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-groupownersetting.html#cfn-greengrass-resourcedefinition-groupownersetting-autoaddgroupowner",
        ),
        PropertySpec::optional(
            "GroupOwner",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-groupownersetting.html#cfn-greengrass-resourcedefinition-groupownersetting-groupowner",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.LocalDeviceResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localdeviceresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalDeviceResourceData {
    /// _Required_: No
    ///
    /// _Type_: GroupOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localdeviceresourcedata.html#cfn-greengrass-resourcedefinition-localdeviceresourcedata-groupownersetting>
    #[serde(rename = "GroupOwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub group_owner_setting: Option<Value<GroupOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localdeviceresourcedata.html#cfn-greengrass-resourcedefinition-localdeviceresourcedata-sourcepath>
    #[serde(rename = "SourcePath")]
    pub source_path: Value<String>,
}

impl LocalDeviceResourceData {
    pub fn new(source_path: impl Into<Value<String>>) -> Self {
        Self {
            group_owner_setting: None,
            source_path: source_path.into(),
        }
    }
}

impl PropertyType for LocalDeviceResourceData {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinition.LocalDeviceResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localdeviceresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "GroupOwnerSetting",
            PropertyKind::Property(GroupOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localdeviceresourcedata.html#cfn-greengrass-resourcedefinition-localdeviceresourcedata-groupownersetting",
        ),
        PropertySpec::required(
            "SourcePath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localdeviceresourcedata.html#cfn-greengrass-resourcedefinition-localdeviceresourcedata-sourcepath",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.LocalVolumeResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalVolumeResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html#cfn-greengrass-resourcedefinition-localvolumeresourcedata-destinationpath>
    #[serde(rename = "DestinationPath")]
    pub destination_path: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: GroupOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html#cfn-greengrass-resourcedefinition-localvolumeresourcedata-groupownersetting>
    #[serde(rename = "GroupOwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub group_owner_setting: Option<Value<GroupOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html#cfn-greengrass-resourcedefinition-localvolumeresourcedata-sourcepath>
    #[serde(rename = "SourcePath")]
    pub source_path: Value<String>,
}

impl LocalVolumeResourceData {
    pub fn new(
        destination_path: impl Into<Value<String>>,
        source_path: impl Into<Value<String>>,
    ) -> Self {
        Self {
            destination_path: destination_path.into(),
            group_owner_setting: None,
            source_path: source_path.into(),
        }
    }
}

impl PropertyType for LocalVolumeResourceData {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinition.LocalVolumeResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DestinationPath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html#cfn-greengrass-resourcedefinition-localvolumeresourcedata-destinationpath",
        ),
        PropertySpec::optional(
            "GroupOwnerSetting",
            PropertyKind::Property(GroupOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html#cfn-greengrass-resourcedefinition-localvolumeresourcedata-groupownersetting",
        ),
        PropertySpec::required(
            "SourcePath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-localvolumeresourcedata.html#cfn-greengrass-resourcedefinition-localvolumeresourcedata-sourcepath",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.ResourceDataContainer`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDataContainer {
    /// _Required_: No
    ///
    /// _Type_: LocalDeviceResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-localdeviceresourcedata>
    #[serde(rename = "LocalDeviceResourceData", default, skip_serializing_if = "Option::is_none")]
    pub local_device_resource_data: Option<Value<LocalDeviceResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: LocalVolumeResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-localvolumeresourcedata>
    #[serde(rename = "LocalVolumeResourceData", default, skip_serializing_if = "Option::is_none")]
    pub local_volume_resource_data: Option<Value<LocalVolumeResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: S3MachineLearningModelResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-s3machinelearningmodelresourcedata>
    #[serde(rename = "S3MachineLearningModelResourceData", default, skip_serializing_if = "Option::is_none")]
    pub s3_machine_learning_model_resource_data: Option<Value<S3MachineLearningModelResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: SageMakerMachineLearningModelResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-sagemakermachinelearningmodelresourcedata>
    #[serde(rename = "SageMakerMachineLearningModelResourceData", default, skip_serializing_if = "Option::is_none")]
    pub sage_maker_machine_learning_model_resource_data: Option<Value<SageMakerMachineLearningModelResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: SecretsManagerSecretResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-secretsmanagersecretresourcedata>
    #[serde(rename = "SecretsManagerSecretResourceData", default, skip_serializing_if = "Option::is_none")]
    pub secrets_manager_secret_resource_data: Option<Value<SecretsManagerSecretResourceData>>,
}

impl PropertyType for ResourceDataContainer {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinition.ResourceDataContainer";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "LocalDeviceResourceData",
            PropertyKind::Property(LocalDeviceResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-localdeviceresourcedata",
        ),
        PropertySpec::optional(
            "LocalVolumeResourceData",
            PropertyKind::Property(LocalVolumeResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-localvolumeresourcedata",
        ),
        PropertySpec::optional(
            "S3MachineLearningModelResourceData",
            PropertyKind::Property(S3MachineLearningModelResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-s3machinelearningmodelresourcedata",
        ),
        PropertySpec::optional(
            "SageMakerMachineLearningModelResourceData",
            PropertyKind::Property(SageMakerMachineLearningModelResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-sagemakermachinelearningmodelresourcedata",
        ),
        PropertySpec::optional(
            "SecretsManagerSecretResourceData",
            PropertyKind::Property(SecretsManagerSecretResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedatacontainer.html#cfn-greengrass-resourcedefinition-resourcedatacontainer-secretsmanagersecretresourcedata",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.ResourceDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDefinitionVersion {
    /// _Required_: Yes
    ///
    /// _Type_: List of ResourceInstance
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedefinitionversion.html#cfn-greengrass-resourcedefinition-resourcedefinitionversion-resources>
    #[serde(rename = "Resources")]
    pub resources: Value<Vec<ResourceInstance>>,
}

impl ResourceDefinitionVersion {
    pub fn new(resources: Vec<ResourceInstance>) -> Self {
        Self {
            resources: Value::Literal(resources),
        }
    }
}

impl PropertyType for ResourceDefinitionVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinition.ResourceDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Resources",
            PropertyKind::List(ItemType::Property(ResourceInstance::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedefinitionversion.html#cfn-greengrass-resourcedefinition-resourcedefinitionversion-resources",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.ResourceDownloadOwnerSetting`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedownloadownersetting.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDownloadOwnerSetting {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinition-resourcedownloadownersetting-groupowner>
    #[serde(rename = "GroupOwner")]
    pub group_owner: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinition-resourcedownloadownersetting-grouppermission>
    #[serde(rename = "GroupPermission")]
    pub group_permission: Value<String>,
}

impl ResourceDownloadOwnerSetting {
    pub fn new(
        group_owner: impl Into<Value<String>>,
        group_permission: impl Into<Value<String>>,
    ) -> Self {
        Self {
            group_owner: group_owner.into(),
            group_permission: group_permission.into(),
        }
    }
}

impl PropertyType for ResourceDownloadOwnerSetting {
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ResourceDefinition.ResourceDownloadOwnerSetting";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedownloadownersetting.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "GroupOwner",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinition-resourcedownloadownersetting-groupowner",
        ),
        PropertySpec::required(
            "GroupPermission",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinition-resourcedownloadownersetting-grouppermission",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.ResourceInstance`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceInstance {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html#cfn-greengrass-resourcedefinition-resourceinstance-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html#cfn-greengrass-resourcedefinition-resourceinstance-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: ResourceDataContainer
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html#cfn-greengrass-resourcedefinition-resourceinstance-resourcedatacontainer>
    #[serde(rename = "ResourceDataContainer")]
    pub resource_data_container: Value<ResourceDataContainer>,
}

impl ResourceInstance {
    pub fn new(
        id: impl Into<Value<String>>,
        name: impl Into<Value<String>>,
        resource_data_container: ResourceDataContainer,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resource_data_container: Value::Literal(resource_data_container),
        }
    }
}

impl PropertyType for ResourceInstance {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinition.ResourceInstance";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html#cfn-greengrass-resourcedefinition-resourceinstance-id",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html#cfn-greengrass-resourcedefinition-resourceinstance-name",
        ),
        PropertySpec::required(
            "ResourceDataContainer",
            PropertyKind::Property(ResourceDataContainer::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-resourceinstance.html#cfn-greengrass-resourcedefinition-resourceinstance-resourcedatacontainer",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.S3MachineLearningModelResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct S3MachineLearningModelResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-s3machinelearningmodelresourcedata-destinationpath>
    #[serde(rename = "DestinationPath")]
    pub destination_path: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: ResourceDownloadOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-s3machinelearningmodelresourcedata-ownersetting>
    #[serde(rename = "OwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub owner_setting: Option<Value<ResourceDownloadOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-s3machinelearningmodelresourcedata-s3uri>
    #[serde(rename = "S3Uri")]
    pub s3_uri: Value<String>,
}

impl S3MachineLearningModelResourceData {
    pub fn new(
        destination_path: impl Into<Value<String>>,
        s3_uri: impl Into<Value<String>>,
    ) -> Self {
        Self {
            destination_path: destination_path.into(),
            owner_setting: None,
            s3_uri: s3_uri.into(),
        }
    }
}

impl PropertyType for S3MachineLearningModelResourceData {
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ResourceDefinition.S3MachineLearningModelResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DestinationPath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-s3machinelearningmodelresourcedata-destinationpath",
        ),
        PropertySpec::optional(
            "OwnerSetting",
            PropertyKind::Property(ResourceDownloadOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-s3machinelearningmodelresourcedata-ownersetting",
        ),
        PropertySpec::required(
            "S3Uri",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-s3machinelearningmodelresourcedata-s3uri",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.SageMakerMachineLearningModelResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SageMakerMachineLearningModelResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata-destinationpath>
    #[serde(rename = "DestinationPath")]
    pub destination_path: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: ResourceDownloadOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata-ownersetting>
    #[serde(rename = "OwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub owner_setting: Option<Value<ResourceDownloadOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata-sagemakerjobarn>
    #[serde(rename = "SageMakerJobArn")]
    pub sage_maker_job_arn: Value<String>,
}

impl SageMakerMachineLearningModelResourceData {
    pub fn new(
        destination_path: impl Into<Value<String>>,
        sage_maker_job_arn: impl Into<Value<String>>,
    ) -> Self {
        Self {
            destination_path: destination_path.into(),
            owner_setting: None,
            sage_maker_job_arn: sage_maker_job_arn.into(),
        }
    }
}

impl PropertyType for SageMakerMachineLearningModelResourceData {
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ResourceDefinition.SageMakerMachineLearningModelResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DestinationPath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata-destinationpath",
        ),
        PropertySpec::optional(
            "OwnerSetting",
            PropertyKind::Property(ResourceDownloadOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata-ownersetting",
        ),
        PropertySpec::required(
            "SageMakerJobArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinition-sagemakermachinelearningmodelresourcedata-sagemakerjobarn",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinition.SecretsManagerSecretResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-secretsmanagersecretresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsManagerSecretResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinition-secretsmanagersecretresourcedata-arn>
    #[serde(rename = "ARN")]
    pub arn: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinition-secretsmanagersecretresourcedata-additionalstaginglabelstodownload>
    #[serde(rename = "AdditionalStagingLabelsToDownload", default, skip_serializing_if = "Option::is_none")]
    pub additional_staging_labels_to_download: Option<Value<Vec<Value<String>>>>,
}

impl SecretsManagerSecretResourceData {
    pub fn new(arn: impl Into<Value<String>>) -> Self {
        Self {
            arn: arn.into(),
            additional_staging_labels_to_download: None,
        }
    }
}

impl PropertyType for SecretsManagerSecretResourceData {
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ResourceDefinition.SecretsManagerSecretResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-secretsmanagersecretresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "ARN",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinition-secretsmanagersecretresourcedata-arn",
        ),
        PropertySpec::optional(
            "AdditionalStagingLabelsToDownload",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinition-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinition-secretsmanagersecretresourcedata-additionalstaginglabelstodownload",
        ),
    ];
}
