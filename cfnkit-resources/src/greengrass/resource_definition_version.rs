//! resource_definition_version types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::Greengrass::ResourceDefinitionVersion
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Greengrass::ResourceDefinitionVersion`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinitionversion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDefinitionVersion {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinitionversion.html#cfn-greengrass-resourcedefinitionversion-resourcedefinitionid>
    #[serde(rename = "ResourceDefinitionId")]
    pub resource_definition_id: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: List of ResourceInstance
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinitionversion.html#cfn-greengrass-resourcedefinitionversion-resources>
    #[serde(rename = "Resources")]
    pub resources: Value<Vec<ResourceInstance>>,
}

impl ResourceDefinitionVersion {
    pub fn new(
        resource_definition_id: impl Into<Value<String>>,
        resources: Vec<ResourceInstance>,
    ) -> Self {
        Self {
            resource_definition_id: resource_definition_id.into(),
            resources: Value::Literal(resources),
        }
    }
}

impl PropertyType for ResourceDefinitionVersion {
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinitionVersion";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinitionversion.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "ResourceDefinitionId",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinitionversion.html#cfn-greengrass-resourcedefinitionversion-resourcedefinitionid",
        ),
        PropertySpec::required(
            "Resources",
            PropertyKind::List(ItemType::Property(ResourceInstance::TYPE_REF)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-greengrass-resourcedefinitionversion.html#cfn-greengrass-resourcedefinitionversion-resources",
        ),
    ];
}

impl ResourceProperties for ResourceDefinitionVersion {
    const ATTRIBUTES: &'static [AttributeSpec] = &[];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.GroupOwnerSetting`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-groupownersetting.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupOwnerSetting {
    /// _Required_: Yes
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-groupownersetting.html#cfn-greengrass-resourcedefinitionversion-groupownersetting-autoaddgroupowner>
    #[serde(rename = "AutoAddGroupOwner")]
    pub auto_add_group_owner: Value<bool>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-groupownersetting.html#cfn-greengrass-resourcedefinitionversion-groupownersetting-groupowner>
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
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinitionVersion.GroupOwnerSetting";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-groupownersetting.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "AutoAddGroupOwner",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-groupownersetting.html#cfn-greengrass-resourcedefinitionversion-groupownersetting-autoaddgroupowner",
        ),
        PropertySpec::optional(
            "GroupOwner",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-groupownersetting.html#cfn-greengrass-resourcedefinitionversion-groupownersetting-groupowner",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.LocalDeviceResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localdeviceresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalDeviceResourceData {
    /// _Required_: No
    ///
    /// _Type_: GroupOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localdeviceresourcedata.html#cfn-greengrass-resourcedefinitionversion-localdeviceresourcedata-groupownersetting>
    #[serde(rename = "GroupOwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub group_owner_setting: Option<Value<GroupOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localdeviceresourcedata.html#cfn-greengrass-resourcedefinitionversion-localdeviceresourcedata-sourcepath>
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
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ResourceDefinitionVersion.LocalDeviceResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localdeviceresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "GroupOwnerSetting",
            PropertyKind::Property(GroupOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localdeviceresourcedata.html#cfn-greengrass-resourcedefinitionversion-localdeviceresourcedata-groupownersetting",
        ),
        PropertySpec::required(
            "SourcePath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localdeviceresourcedata.html#cfn-greengrass-resourcedefinitionversion-localdeviceresourcedata-sourcepath",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.LocalVolumeResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalVolumeResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html#cfn-greengrass-resourcedefinitionversion-localvolumeresourcedata-destinationpath>
    #[serde(rename = "DestinationPath")]
    pub destination_path: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: GroupOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html#cfn-greengrass-resourcedefinitionversion-localvolumeresourcedata-groupownersetting>
    #[serde(rename = "GroupOwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub group_owner_setting: Option<Value<GroupOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html#cfn-greengrass-resourcedefinitionversion-localvolumeresourcedata-sourcepath>
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
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ResourceDefinitionVersion.LocalVolumeResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DestinationPath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html#cfn-greengrass-resourcedefinitionversion-localvolumeresourcedata-destinationpath",
        ),
        PropertySpec::optional(
            "GroupOwnerSetting",
            PropertyKind::Property(GroupOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html#cfn-greengrass-resourcedefinitionversion-localvolumeresourcedata-groupownersetting",
        ),
        PropertySpec::required(
            "SourcePath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-localvolumeresourcedata.html#cfn-greengrass-resourcedefinitionversion-localvolumeresourcedata-sourcepath",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.ResourceDataContainer`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDataContainer {
    /// _Required_: No
    ///
    /// _Type_: LocalDeviceResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-localdeviceresourcedata>
    #[serde(rename = "LocalDeviceResourceData", default, skip_serializing_if = "Option::is_none")]
    pub local_device_resource_data: Option<Value<LocalDeviceResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: LocalVolumeResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-localvolumeresourcedata>
    #[serde(rename = "LocalVolumeResourceData", default, skip_serializing_if = "Option::is_none")]
    pub local_volume_resource_data: Option<Value<LocalVolumeResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: S3MachineLearningModelResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-s3machinelearningmodelresourcedata>
    #[serde(rename = "S3MachineLearningModelResourceData", default, skip_serializing_if = "Option::is_none")]
    pub s3_machine_learning_model_resource_data: Option<Value<S3MachineLearningModelResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: SageMakerMachineLearningModelResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-sagemakermachinelearningmodelresourcedata>
    #[serde(rename = "SageMakerMachineLearningModelResourceData", default, skip_serializing_if = "Option::is_none")]
    pub sage_maker_machine_learning_model_resource_data: Option<Value<SageMakerMachineLearningModelResourceData>>,
    /// _Required_: No
    ///
    /// _Type_: SecretsManagerSecretResourceData
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-secretsmanagersecretresourcedata>
    #[serde(rename = "SecretsManagerSecretResourceData", default, skip_serializing_if = "Option::is_none")]
    pub secrets_manager_secret_resource_data: Option<Value<SecretsManagerSecretResourceData>>,
}

impl PropertyType for ResourceDataContainer {
    const TYPE_NAME: &'static str =
        "AWS::Greengrass::ResourceDefinitionVersion.ResourceDataContainer";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "LocalDeviceResourceData",
            PropertyKind::Property(LocalDeviceResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-localdeviceresourcedata",
        ),
        PropertySpec::optional(
            "LocalVolumeResourceData",
            PropertyKind::Property(LocalVolumeResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-localvolumeresourcedata",
        ),
        PropertySpec::optional(
            "S3MachineLearningModelResourceData",
            PropertyKind::Property(S3MachineLearningModelResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-s3machinelearningmodelresourcedata",
        ),
        PropertySpec::optional(
            "SageMakerMachineLearningModelResourceData",
            PropertyKind::Property(SageMakerMachineLearningModelResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-sagemakermachinelearningmodelresourcedata",
        ),
        PropertySpec::optional(
            "SecretsManagerSecretResourceData",
            PropertyKind::Property(SecretsManagerSecretResourceData::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedatacontainer.html#cfn-greengrass-resourcedefinitionversion-resourcedatacontainer-secretsmanagersecretresourcedata",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.ResourceDownloadOwnerSetting`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedownloadownersetting.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDownloadOwnerSetting {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinitionversion-resourcedownloadownersetting-groupowner>
    #[serde(rename = "GroupOwner")]
    pub group_owner: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinitionversion-resourcedownloadownersetting-grouppermission>
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
        "AWS::Greengrass::ResourceDefinitionVersion.ResourceDownloadOwnerSetting";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedownloadownersetting.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "GroupOwner",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinitionversion-resourcedownloadownersetting-groupowner",
        ),
        PropertySpec::required(
            "GroupPermission",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourcedownloadownersetting.html#cfn-greengrass-resourcedefinitionversion-resourcedownloadownersetting-grouppermission",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.ResourceInstance`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceInstance {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html#cfn-greengrass-resourcedefinitionversion-resourceinstance-id>
    #[serde(rename = "Id")]
    pub id: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html#cfn-greengrass-resourcedefinitionversion-resourceinstance-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: ResourceDataContainer
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html#cfn-greengrass-resourcedefinitionversion-resourceinstance-resourcedatacontainer>
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
    const TYPE_NAME: &'static str = "AWS::Greengrass::ResourceDefinitionVersion.ResourceInstance";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html#cfn-greengrass-resourcedefinitionversion-resourceinstance-id",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html#cfn-greengrass-resourcedefinitionversion-resourceinstance-name",
        ),
        PropertySpec::required(
            "ResourceDataContainer",
            PropertyKind::Property(ResourceDataContainer::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-resourceinstance.html#cfn-greengrass-resourcedefinitionversion-resourceinstance-resourcedatacontainer",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.S3MachineLearningModelResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct S3MachineLearningModelResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata-destinationpath>
    #[serde(rename = "DestinationPath")]
    pub destination_path: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: ResourceDownloadOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata-ownersetting>
    #[serde(rename = "OwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub owner_setting: Option<Value<ResourceDownloadOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata-s3uri>
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
        "AWS::Greengrass::ResourceDefinitionVersion.S3MachineLearningModelResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DestinationPath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata-destinationpath",
        ),
        PropertySpec::optional(
            "OwnerSetting",
            PropertyKind::Property(ResourceDownloadOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata-ownersetting",
        ),
        PropertySpec::required(
            "S3Uri",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-s3machinelearningmodelresourcedata-s3uri",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.SageMakerMachineLearningModelResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SageMakerMachineLearningModelResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata-destinationpath>
    #[serde(rename = "DestinationPath")]
    pub destination_path: Value<String>,
    /// _Required_: No
    ///
    /// _Type_: ResourceDownloadOwnerSetting
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata-ownersetting>
    #[serde(rename = "OwnerSetting", default, skip_serializing_if = "Option::is_none")]
    pub owner_setting: Option<Value<ResourceDownloadOwnerSetting>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata-sagemakerjobarn>
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
        "AWS::Greengrass::ResourceDefinitionVersion.SageMakerMachineLearningModelResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "DestinationPath",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata-destinationpath",
        ),
        PropertySpec::optional(
            "OwnerSetting",
            PropertyKind::Property(ResourceDownloadOwnerSetting::TYPE_REF),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata-ownersetting",
        ),
        PropertySpec::required(
            "SageMakerJobArn",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata.html#cfn-greengrass-resourcedefinitionversion-sagemakermachinelearningmodelresourcedata-sagemakerjobarn",
        ),
    ];
}

/// `AWS::Greengrass::ResourceDefinitionVersion.SecretsManagerSecretResourceData`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsManagerSecretResourceData {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata-arn>
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
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata-additionalstaginglabelstodownload>
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
        "AWS::Greengrass::ResourceDefinitionVersion.SecretsManagerSecretResourceData";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "ARN",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata-arn",
        ),
        PropertySpec::optional(
            "AdditionalStagingLabelsToDownload",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata.html#cfn-greengrass-resourcedefinitionversion-secretsmanagersecretresourcedata-additionalstaginglabelstodownload",
        ),
    ];
}
