//! function types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::Function
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, PrimitiveType, PropertyKind, PropertySpec, PropertyType, ResourceProperties,
    UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::Function`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Function {
    /// _Required_: No
    ///
    /// _Type_: Boolean
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-autopublish>
    #[serde(rename = "AutoPublish", default, skip_serializing_if = "Option::is_none")]
    pub auto_publish: Option<Value<bool>>,
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-functioncode>
    #[serde(rename = "FunctionCode", default, skip_serializing_if = "Option::is_none")]
    pub function_code: Option<Value<String>>,
    /// _Required_: No
    ///
    /// _Type_: FunctionConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-functionconfig>
    #[serde(rename = "FunctionConfig", default, skip_serializing_if = "Option::is_none")]
    pub function_config: Option<Value<FunctionConfig>>,
    /// _Required_: No
    ///
    /// _Type_: FunctionMetadata
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-functionmetadata>
    #[serde(rename = "FunctionMetadata", default, skip_serializing_if = "Option::is_none")]
    pub function_metadata: Option<Value<FunctionMetadata>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
}

impl Function {
    pub fn new(name: impl Into<Value<String>>) -> Self {
        Self {
            auto_publish: None,
            function_code: None,
            function_config: None,
            function_metadata: None,
            name: name.into(),
        }
    }
}

impl PropertyType for Function {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Function";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "AutoPublish",
            PropertyKind::Primitive(PrimitiveType::Boolean),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-autopublish",
        ),
        PropertySpec::optional(
            "FunctionCode",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-functioncode",
        ),
        PropertySpec::optional(
            "FunctionConfig",
            PropertyKind::Property(FunctionConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-functionconfig",
        ),
        PropertySpec::optional(
            "FunctionMetadata",
            PropertyKind::Property(FunctionMetadata::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-functionmetadata",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-function.html#cfn-cloudfront-function-name",
        ),
    ];
}

impl ResourceProperties for Function {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("FunctionARN", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("FunctionMetadata.FunctionARN", PropertyKind::Primitive(PrimitiveType::String)),
        AttributeSpec::new("Stage", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::Function.FunctionConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionconfig.html#cfn-cloudfront-function-functionconfig-comment>
    #[serde(rename = "Comment")]
    pub comment: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionconfig.html#cfn-cloudfront-function-functionconfig-runtime>
    #[serde(rename = "Runtime")]
    pub runtime: Value<String>,
}

impl FunctionConfig {
    pub fn new(comment: impl Into<Value<String>>, runtime: impl Into<Value<String>>) -> Self {
        Self {
            comment: comment.into(),
            runtime: runtime.into(),
        }
    }
}

impl PropertyType for FunctionConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Function.FunctionConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Comment",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionconfig.html#cfn-cloudfront-function-functionconfig-comment",
        ),
        PropertySpec::required(
            "Runtime",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionconfig.html#cfn-cloudfront-function-functionconfig-runtime",
        ),
    ];
}

/// `AWS::CloudFront::Function.FunctionMetadata`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionmetadata.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionMetadata {
    /// _Required_: No
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionmetadata.html#cfn-cloudfront-function-functionmetadata-functionarn>
    #[serde(rename = "FunctionARN", default, skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<Value<String>>,
}

impl PropertyType for FunctionMetadata {
    const TYPE_NAME: &'static str = "AWS::CloudFront::Function.FunctionMetadata";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionmetadata.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::optional(
            "FunctionARN",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-function-functionmetadata.html#cfn-cloudfront-function-functionmetadata-functionarn",
        ),
    ];
}
