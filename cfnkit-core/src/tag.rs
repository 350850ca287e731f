//! Tag - The key-value pair shared by all taggable resource types

use serde::{Deserialize, Serialize};

use crate::schema::{PrimitiveType, PropertyKind, PropertySpec, PropertyType, UpdateType};
use crate::value::Value;

/// `Tag`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: Value<String>,
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

impl Tag {
    pub fn new(key: impl Into<Value<String>>, value: impl Into<Value<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl PropertyType for Tag {
    const TYPE_NAME: &'static str = "Tag";
    const DOCUMENTATION: &'static str =
        "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html";
    const PROPERTIES: &'static [PropertySpec] = &[
        PropertySpec::required(
            "Key",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html#cfn-resource-tags-key",
        ),
        PropertySpec::required(
            "Value",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Mutable,
            "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html#cfn-resource-tags-value",
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intrinsic::Intrinsic;
    use serde_json::json;

    #[test]
    fn tag_shape() {
        let tag = Tag::new("Environment", Intrinsic::reference("Env"));
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({"Key": "Environment", "Value": {"Ref": "Env"}})
        );
    }

    #[test]
    fn tag_requires_both_fields() {
        assert!(serde_json::from_value::<Tag>(json!({"Key": "Name"})).is_err());
        assert!(
            serde_json::from_value::<Tag>(json!({"Key": "Name", "Value": "web", "Extra": 1}))
                .is_err()
        );
    }
}
