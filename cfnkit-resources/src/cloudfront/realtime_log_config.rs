//! realtime_log_config types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: AWS::CloudFront::RealtimeLogConfig
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{
    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,
    ResourceProperties, UpdateType,
};
use cfnkit_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFront::RealtimeLogConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RealtimeLogConfig {
    /// _Required_: Yes
    ///
    /// _Type_: List of EndPoint
    ///
    /// _Duplicates allowed_: Yes
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-endpoints>
    #[serde(rename = "EndPoints")]
    pub end_points: Value<Vec<EndPoint>>,
    /// _Required_: Yes
    ///
    /// _Type_: List of String
    ///
    /// _Duplicates allowed_: No
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-fields>
    #[serde(rename = "Fields")]
    pub fields: Value<Vec<Value<String>>>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: Replacement
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-name>
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: Double
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-samplingrate>
    #[serde(rename = "SamplingRate")]
    pub sampling_rate: Value<f64>,
}

impl RealtimeLogConfig {
    pub fn new(
        end_points: Vec<EndPoint>,
        fields: Vec<Value<String>>,
        name: impl Into<Value<String>>,
        sampling_rate: impl Into<Value<f64>>,
    ) -> Self {
        Self {
            end_points: Value::Literal(end_points),
            fields: Value::Literal(fields),
            name: name.into(),
            sampling_rate: sampling_rate.into(),
        }
    }
}

impl PropertyType for RealtimeLogConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::RealtimeLogConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "EndPoints",
            PropertyKind::List(ItemType::Property(EndPoint::TYPE_REF)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-endpoints",
        ),
        PropertySpec::required(
            "Fields",
            PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-fields",
        ),
        PropertySpec::required(
            "Name",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-name",
        ),
        PropertySpec::required(
            "SamplingRate",
            PropertyKind::Primitive(PrimitiveType::Double),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-cloudfront-realtimelogconfig.html#cfn-cloudfront-realtimelogconfig-samplingrate",
        ),
    ];
}

impl ResourceProperties for RealtimeLogConfig {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("Arn", PropertyKind::Primitive(PrimitiveType::String)),
    ];
}

/// `AWS::CloudFront::RealtimeLogConfig.EndPoint`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-endpoint.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndPoint {
    /// _Required_: Yes
    ///
    /// _Type_: KinesisStreamConfig
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-endpoint.html#cfn-cloudfront-realtimelogconfig-endpoint-kinesisstreamconfig>
    #[serde(rename = "KinesisStreamConfig")]
    pub kinesis_stream_config: Value<KinesisStreamConfig>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-endpoint.html#cfn-cloudfront-realtimelogconfig-endpoint-streamtype>
    #[serde(rename = "StreamType")]
    pub stream_type: Value<String>,
}

impl EndPoint {
    pub fn new(
        kinesis_stream_config: KinesisStreamConfig,
        stream_type: impl Into<Value<String>>,
    ) -> Self {
        Self {
            kinesis_stream_config: Value::Literal(kinesis_stream_config),
            stream_type: stream_type.into(),
        }
    }
}

impl PropertyType for EndPoint {
    const TYPE_NAME: &'static str = "AWS::CloudFront::RealtimeLogConfig.EndPoint";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-endpoint.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "KinesisStreamConfig",
            PropertyKind::Property(KinesisStreamConfig::TYPE_REF),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-endpoint.html#cfn-cloudfront-realtimelogconfig-endpoint-kinesisstreamconfig",
        ),
        PropertySpec::required(
            "StreamType",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-endpoint.html#cfn-cloudfront-realtimelogconfig-endpoint-streamtype",
        ),
    ];
}

/// `AWS::CloudFront::RealtimeLogConfig.KinesisStreamConfig`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-kinesisstreamconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KinesisStreamConfig {
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-kinesisstreamconfig.html#cfn-cloudfront-realtimelogconfig-kinesisstreamconfig-rolearn>
    #[serde(rename = "RoleARN")]
    pub role_arn: Value<String>,
    /// _Required_: Yes
    ///
    /// _Type_: String
    ///
    /// _Update requires_: No interruption
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-kinesisstreamconfig.html#cfn-cloudfront-realtimelogconfig-kinesisstreamconfig-streamarn>
    #[serde(rename = "StreamARN")]
    pub stream_arn: Value<String>,
}

impl KinesisStreamConfig {
    pub fn new(role_arn: impl Into<Value<String>>, stream_arn: impl Into<Value<String>>) -> Self {
        Self {
            role_arn: role_arn.into(),
            stream_arn: stream_arn.into(),
        }
    }
}

impl PropertyType for KinesisStreamConfig {
    const TYPE_NAME: &'static str = "AWS::CloudFront::RealtimeLogConfig.KinesisStreamConfig";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-kinesisstreamconfig.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "RoleARN",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-kinesisstreamconfig.html#cfn-cloudfront-realtimelogconfig-kinesisstreamconfig-rolearn",
        ),
        PropertySpec::required(
            "StreamARN",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-cloudfront-realtimelogconfig-kinesisstreamconfig.html#cfn-cloudfront-realtimelogconfig-kinesisstreamconfig-streamarn",
        ),
    ];
}
