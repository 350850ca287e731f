//! Resource - A typed resource declaration: `Type`, `Properties` and the
//! resource attributes CloudFormation accepts on every resource

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::schema::ResourceProperties;
use crate::value::Json;

/// What CloudFormation does with the physical resource when it is removed
/// from the stack or replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    Snapshot,
}

/// Attributes that apply to every resource regardless of its type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceAttributes {
    /// Logical IDs this resource must be created after.
    /// A single string in the template is read as a one-element list.
    #[serde(
        rename = "DependsOn",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "one_or_many"
    )]
    pub depends_on: Vec<String>,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(
        rename = "DeletionPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_policy: Option<DeletionPolicy>,
    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<DeletionPolicy>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(
        rename = "CreationPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_policy: Option<Json>,
    #[serde(
        rename = "UpdatePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_policy: Option<Json>,
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(id) => vec![id],
        OneOrMany::Many(ids) => ids,
    })
}

/// Resource declaration with typed properties
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    /// CloudFormation resource type (e.g., "AWS::CloudFront::Distribution")
    pub fn resource_type(&self) -> &'static str {
        P::TYPE_NAME
    }

    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        self.attributes.depends_on.push(logical_id.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.attributes.condition = Some(condition.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.update_replace_policy = Some(policy);
        self
    }

    pub fn with_metadata(mut self, metadata: Json) -> Self {
        self.attributes.metadata = Some(metadata);
        self
    }
}

#[derive(Serialize)]
struct ResourceDocument<'a, P> {
    #[serde(rename = "Type")]
    resource_type: &'static str,
    #[serde(rename = "Properties")]
    properties: &'a P,
    #[serde(flatten)]
    attributes: &'a ResourceAttributes,
}

impl<P: ResourceProperties + Serialize> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResourceDocument {
            resource_type: P::TYPE_NAME,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de, P: ResourceProperties + DeserializeOwned> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = serde_json::Map::<String, Json>::deserialize(deserializer)?;

        let resource_type = object
            .remove("Type")
            .ok_or_else(|| D::Error::missing_field("Type"))?;
        if resource_type.as_str() != Some(P::TYPE_NAME) {
            return Err(D::Error::custom(format!(
                "expected resource type {}, found {}",
                P::TYPE_NAME,
                resource_type
            )));
        }

        let properties = object
            .remove("Properties")
            .ok_or_else(|| D::Error::missing_field("Properties"))?;
        let properties = P::deserialize(properties).map_err(D::Error::custom)?;
        let attributes =
            ResourceAttributes::deserialize(Json::Object(object)).map_err(D::Error::custom)?;

        Ok(Self {
            properties,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        AttributeSpec, PrimitiveType, PropertyKind, PropertySpec, PropertyType, UpdateType,
    };
    use crate::value::Value;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Queue {
        #[serde(rename = "QueueName")]
        queue_name: Value<String>,
    }

    impl PropertyType for Queue {
        const TYPE_NAME: &'static str = "AWS::Test::Queue";
        const DOCUMENTATION: &'static str = "https://example.com/queue";
        const PROPERTIES: &'static [PropertySpec] = &[PropertySpec::required(
            "QueueName",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "https://example.com/queue#queuename",
        )];
    }

    impl ResourceProperties for Queue {
        const ATTRIBUTES: &'static [AttributeSpec] = &[];
    }

    fn queue() -> Queue {
        Queue {
            queue_name: "jobs".into(),
        }
    }

    #[test]
    fn serializes_type_and_attributes() {
        let resource = Resource::new(queue())
            .depends_on("Topic")
            .with_deletion_policy(DeletionPolicy::Retain)
            .with_condition("IsProd");

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "Type": "AWS::Test::Queue",
                "Properties": {"QueueName": "jobs"},
                "DependsOn": ["Topic"],
                "Condition": "IsProd",
                "DeletionPolicy": "Retain"
            })
        );
    }

    #[test]
    fn deserializes_single_depends_on() {
        let resource: Resource<Queue> = serde_json::from_value(json!({
            "Type": "AWS::Test::Queue",
            "Properties": {"QueueName": "jobs"},
            "DependsOn": "Topic",
            "UpdateReplacePolicy": "Snapshot",
            "Metadata": {"Owner": "platform"}
        }))
        .unwrap();

        assert_eq!(resource.properties, queue());
        assert_eq!(resource.attributes.depends_on, vec!["Topic".to_string()]);
        assert_eq!(
            resource.attributes.update_replace_policy,
            Some(DeletionPolicy::Snapshot)
        );
        assert_eq!(resource.resource_type(), "AWS::Test::Queue");
    }

    #[test]
    fn rejects_other_resource_type() {
        let err = serde_json::from_value::<Resource<Queue>>(json!({
            "Type": "AWS::Test::Topic",
            "Properties": {"QueueName": "jobs"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("expected resource type AWS::Test::Queue"));
    }

    #[test]
    fn rejects_missing_properties_and_unknown_attributes() {
        assert!(
            serde_json::from_value::<Resource<Queue>>(json!({"Type": "AWS::Test::Queue"}))
                .is_err()
        );
        assert!(
            serde_json::from_value::<Resource<Queue>>(json!({
                "Type": "AWS::Test::Queue",
                "Properties": {"QueueName": "jobs"},
                "DependOn": "Topic"
            }))
            .is_err()
        );
    }
}
