//! Template - A CloudFormation template document holding typed resources
//!
//! Resources are stored in their template JSON form, so a template can hold
//! any resource type (including ones without generated types). Typed access
//! goes through [`Template::add_resource`] and [`Template::resource`].

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::intrinsic::Intrinsic;
use crate::resource::Resource;
use crate::schema::ResourceProperties;
use crate::value::{Expr, Json, Value};

pub const DEFAULT_FORMAT_VERSION: &str = "2010-09-09";

const MAX_LOGICAL_ID_LEN: usize = 255;

/// Template parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    /// Parameter type (e.g., "String", "Number", "CommaDelimitedList",
    /// "AWS::EC2::KeyPair::KeyName")
    #[serde(rename = "Type")]
    pub parameter_type: String,
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Json>,
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        rename = "AllowedValues",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allowed_values: Vec<Json>,
    #[serde(
        rename = "AllowedPattern",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_pattern: Option<String>,
    #[serde(
        rename = "ConstraintDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub constraint_description: Option<String>,
    #[serde(rename = "MinLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(rename = "MaxLength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(rename = "MinValue", default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(rename = "MaxValue", default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(rename = "NoEcho", default, skip_serializing_if = "Option::is_none")]
    pub no_echo: Option<bool>,
}

impl Parameter {
    pub fn new(parameter_type: impl Into<String>) -> Self {
        Self {
            parameter_type: parameter_type.into(),
            default: None,
            description: None,
            allowed_values: Vec::new(),
            allowed_pattern: None,
            constraint_description: None,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
            no_echo: None,
        }
    }

    pub fn with_default(mut self, default: Json) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_allowed_values(mut self, values: impl IntoIterator<Item = Json>) -> Self {
        self.allowed_values = values.into_iter().collect();
        self
    }
}

/// Name under which an output is exported for `Fn::ImportValue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Export {
    #[serde(rename = "Name")]
    pub name: Value<String>,
}

/// Template output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    #[serde(rename = "Value")]
    pub value: Expr,
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "Export", default, skip_serializing_if = "Option::is_none")]
    pub export: Option<Export>,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Output {
    pub fn new(value: impl Into<Expr>) -> Self {
        Self {
            value: value.into(),
            description: None,
            export: None,
            condition: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_export(mut self, name: impl Into<Value<String>>) -> Self {
        self.export = Some(Export { name: name.into() });
        self
    }
}

/// CloudFormation template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    /// Macros processed by CloudFormation (e.g., "AWS::Serverless-2016-10-31")
    #[serde(rename = "Transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Json>,
    #[serde(
        rename = "Parameters",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub parameters: IndexMap<String, Parameter>,
    #[serde(
        rename = "Mappings",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub mappings: IndexMap<String, Json>,
    #[serde(
        rename = "Conditions",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub conditions: IndexMap<String, Intrinsic>,
    /// Resources in template JSON form, keyed by logical ID
    #[serde(rename = "Resources")]
    pub resources: IndexMap<String, Json>,
    #[serde(
        rename = "Outputs",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub outputs: IndexMap<String, Output>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    pub fn new() -> Self {
        Self {
            format_version: Some(DEFAULT_FORMAT_VERSION.to_string()),
            description: None,
            metadata: None,
            transform: None,
            parameters: IndexMap::new(),
            mappings: IndexMap::new(),
            conditions: IndexMap::new(),
            resources: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a typed resource under `logical_id`
    ///
    /// Resources and parameters share one namespace, since `Ref` resolves
    /// either.
    pub fn add_resource<P>(
        &mut self,
        logical_id: impl Into<String>,
        resource: &Resource<P>,
    ) -> Result<(), TemplateError>
    where
        P: ResourceProperties + Serialize,
    {
        let logical_id = logical_id.into();
        validate_logical_id(&logical_id)?;
        if self.parameters.contains_key(&logical_id) {
            return Err(TemplateError::DuplicateLogicalId {
                logical_id,
                section: "Parameters",
            });
        }

        let json = serde_json::to_value(resource).map_err(|source| {
            TemplateError::InvalidResource {
                logical_id: logical_id.clone(),
                source,
            }
        })?;

        match self.resources.entry(logical_id) {
            Entry::Occupied(entry) => Err(TemplateError::DuplicateLogicalId {
                logical_id: entry.key().clone(),
                section: "Resources",
            }),
            Entry::Vacant(entry) => {
                debug!("Adding resource {} ({})", entry.key(), P::TYPE_NAME);
                entry.insert(json);
                Ok(())
            }
        }
    }

    /// Read the resource at `logical_id` back as type `P`
    pub fn resource<P>(&self, logical_id: &str) -> Result<Resource<P>, TemplateError>
    where
        P: ResourceProperties + DeserializeOwned,
    {
        let json = self
            .resources
            .get(logical_id)
            .ok_or_else(|| TemplateError::ResourceNotFound {
                logical_id: logical_id.to_string(),
            })?;

        let found = resource_type_of(json);
        if found != P::TYPE_NAME {
            return Err(TemplateError::TypeMismatch {
                logical_id: logical_id.to_string(),
                expected: P::TYPE_NAME,
                found: found.to_string(),
            });
        }

        debug!("Reading resource {} as {}", logical_id, P::TYPE_NAME);
        serde_json::from_value(json.clone()).map_err(|source| TemplateError::InvalidResource {
            logical_id: logical_id.to_string(),
            source,
        })
    }

    /// `(logical_id, resource type)` pairs in template order
    pub fn resource_types(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resources
            .iter()
            .map(|(id, json)| (id.as_str(), resource_type_of(json)))
    }

    pub fn add_parameter(
        &mut self,
        logical_id: impl Into<String>,
        parameter: Parameter,
    ) -> Result<(), TemplateError> {
        let logical_id = logical_id.into();
        validate_logical_id(&logical_id)?;
        if self.resources.contains_key(&logical_id) {
            return Err(TemplateError::DuplicateLogicalId {
                logical_id,
                section: "Resources",
            });
        }
        insert_unique(&mut self.parameters, logical_id, parameter, "Parameters")
    }

    pub fn add_condition(
        &mut self,
        name: impl Into<String>,
        condition: Intrinsic,
    ) -> Result<(), TemplateError> {
        let name = name.into();
        validate_logical_id(&name)?;
        insert_unique(&mut self.conditions, name, condition, "Conditions")
    }

    pub fn add_output(
        &mut self,
        logical_id: impl Into<String>,
        output: Output,
    ) -> Result<(), TemplateError> {
        let logical_id = logical_id.into();
        validate_logical_id(&logical_id)?;
        insert_unique(&mut self.outputs, logical_id, output, "Outputs")
    }
}

fn insert_unique<T>(
    section: &mut IndexMap<String, T>,
    logical_id: String,
    value: T,
    section_name: &'static str,
) -> Result<(), TemplateError> {
    match section.entry(logical_id) {
        Entry::Occupied(entry) => Err(TemplateError::DuplicateLogicalId {
            logical_id: entry.key().clone(),
            section: section_name,
        }),
        Entry::Vacant(entry) => {
            debug!("Adding {} entry {}", section_name, entry.key());
            entry.insert(value);
            Ok(())
        }
    }
}

fn resource_type_of(json: &Json) -> &str {
    json.get("Type").and_then(Json::as_str).unwrap_or_default()
}

/// Logical IDs are alphanumeric (A-Za-z0-9) and at most 255 characters
pub fn validate_logical_id(logical_id: &str) -> Result<(), TemplateError> {
    if logical_id.is_empty()
        || logical_id.len() > MAX_LOGICAL_ID_LEN
        || !logical_id.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(TemplateError::InvalidLogicalId {
            logical_id: logical_id.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        AttributeSpec, PrimitiveType, PropertyKind, PropertySpec, PropertyType, UpdateType,
    };
    use crate::tag::Tag;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Topic {
        #[serde(rename = "TopicName")]
        topic_name: Value<String>,
        #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
        tags: Option<Value<Vec<Tag>>>,
    }

    impl PropertyType for Topic {
        const TYPE_NAME: &'static str = "AWS::Test::Topic";
        const DOCUMENTATION: &'static str = "https://example.com/topic";
        const PROPERTIES: &'static [PropertySpec] = &[PropertySpec::required(
            "TopicName",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "https://example.com/topic#topicname",
        )];
    }

    impl ResourceProperties for Topic {
        const ATTRIBUTES: &'static [AttributeSpec] = &[AttributeSpec::new(
            "TopicArn",
            PropertyKind::Primitive(PrimitiveType::String),
        )];
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Other {}

    impl PropertyType for Other {
        const TYPE_NAME: &'static str = "AWS::Test::Other";
        const DOCUMENTATION: &'static str = "https://example.com/other";
        const PROPERTIES: &'static [PropertySpec] = &[];
    }

    impl ResourceProperties for Other {
        const ATTRIBUTES: &'static [AttributeSpec] = &[];
    }

    fn topic(name: &str) -> Resource<Topic> {
        Resource::new(Topic {
            topic_name: name.into(),
            tags: Some(vec![Tag::new("Team", "platform")].into()),
        })
    }

    #[test]
    fn add_and_read_back_resource() {
        let mut template = Template::new().with_description("alerts");
        template.add_resource("AlertTopic", &topic("alerts")).unwrap();

        let read: Resource<Topic> = template.resource("AlertTopic").unwrap();
        assert_eq!(read, topic("alerts"));
        assert_eq!(
            template.resource_types().collect::<Vec<_>>(),
            vec![("AlertTopic", "AWS::Test::Topic")]
        );
    }

    #[test]
    fn duplicate_logical_ids_are_rejected() {
        let mut template = Template::new();
        template.add_resource("AlertTopic", &topic("a")).unwrap();
        let err = template.add_resource("AlertTopic", &topic("b")).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::DuplicateLogicalId {
                section: "Resources",
                ..
            }
        ));

        let err = template
            .add_parameter("AlertTopic", Parameter::new("String"))
            .unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateLogicalId { .. }));
    }

    #[test]
    fn parameters_and_resources_share_namespace() {
        let mut template = Template::new();
        template
            .add_parameter("Env", Parameter::new("String"))
            .unwrap();
        assert!(template.add_resource("Env", &topic("a")).is_err());
    }

    #[test]
    fn invalid_logical_ids() {
        for id in ["", "my-topic", "my_topic", "Topic 1"] {
            assert!(
                matches!(
                    validate_logical_id(id),
                    Err(TemplateError::InvalidLogicalId { .. })
                ),
                "{id:?} should be rejected"
            );
        }
        assert!(validate_logical_id(&"A".repeat(256)).is_err());
        assert!(validate_logical_id("Topic1").is_ok());
    }

    #[test]
    fn typed_read_checks_resource_type() {
        let mut template = Template::new();
        template.add_resource("AlertTopic", &topic("a")).unwrap();

        let err = template.resource::<Other>("AlertTopic").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::TypeMismatch {
                expected: "AWS::Test::Other",
                ..
            }
        ));

        let err = template.resource::<Topic>("Missing").unwrap_err();
        assert!(matches!(err, TemplateError::ResourceNotFound { .. }));
    }

    #[test]
    fn invalid_stored_resource_is_reported() {
        let template = Template::from_json_str(
            r#"{"Resources": {"T": {"Type": "AWS::Test::Topic", "Properties": {}}}}"#,
        )
        .unwrap();
        let err = template.resource::<Topic>("T").unwrap_err();
        assert!(err.to_string().contains("TopicName"), "{err}");
    }

    #[test]
    fn full_template_round_trip() {
        let mut template = Template::new();
        template
            .add_parameter(
                "Env",
                Parameter::new("String")
                    .with_allowed_values([json!("dev"), json!("prod")])
                    .with_default(json!("dev")),
            )
            .unwrap();
        template
            .add_condition(
                "IsProd",
                Intrinsic::equals(Intrinsic::reference("Env"), json!("prod")),
            )
            .unwrap();
        template
            .add_resource("AlertTopic", &topic("alerts").with_condition("IsProd"))
            .unwrap();
        template
            .add_output(
                "TopicArn",
                Output::new(Topic::get_att("AlertTopic", "TopicArn").unwrap())
                    .with_export(Intrinsic::sub("${AWS::StackName}-TopicArn")),
            )
            .unwrap();

        let text = template.to_json_pretty().unwrap();
        let parsed = Template::from_json_str(&text).unwrap();
        assert_eq!(parsed, template);

        let json: Json = serde_json::from_str(&text).unwrap();
        assert_eq!(json["AWSTemplateFormatVersion"], json!("2010-09-09"));
        assert_eq!(
            json["Outputs"]["TopicArn"]["Value"],
            json!({"Fn::GetAtt": ["AlertTopic", "TopicArn"]})
        );
        assert_eq!(
            json["Conditions"]["IsProd"],
            json!({"Fn::Equals": [{"Ref": "Env"}, "prod"]})
        );
    }

    #[test]
    fn resources_section_is_required() {
        assert!(Template::from_json_str(r#"{"Description": "empty"}"#).is_err());
    }
}
