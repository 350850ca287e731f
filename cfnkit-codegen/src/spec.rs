//! Spec - AWS CloudFormation resource specification and the model built from it
//!
//! The resource specification is a single JSON document with two maps,
//! `PropertyTypes` ("AWS::CloudFront::Distribution.Origin") and
//! `ResourceTypes` ("AWS::CloudFront::Distribution"). The model groups the
//! property types under the resource that owns them and resolves every
//! reference to the Rust struct it will be generated as.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};
use cfnkit_core::schema::{PrimitiveType, UpdateType, short_name};
use serde::Deserialize;

use crate::naming;

/// Property type provided by cfnkit-core instead of being generated
pub const SHARED_TAG: &str = "Tag";

/// CloudFormation resource specification document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Specification {
    #[serde(default)]
    pub property_types: BTreeMap<String, TypeDefinition>,
    #[serde(default)]
    pub resource_types: BTreeMap<String, TypeDefinition>,
    #[serde(default)]
    pub resource_specification_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeDefinition {
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDefinition>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeDefinition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyDefinition {
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub required: bool,
    pub primitive_type: Option<String>,
    #[serde(rename = "Type")]
    pub type_name: Option<String>,
    pub primitive_item_type: Option<String>,
    pub item_type: Option<String>,
    pub update_type: Option<String>,
    pub duplicates_allowed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub primitive_type: Option<String>,
    #[serde(rename = "Type")]
    pub type_name: Option<String>,
    pub primitive_item_type: Option<String>,
    pub item_type: Option<String>,
}

/// Element of a list or map
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Primitive(PrimitiveType),
    /// Rust struct name of the property type
    Property(String),
}

/// Resolved type of a property or attribute
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Primitive(PrimitiveType),
    /// Rust struct name of the property type
    Property(String),
    List(ItemKind),
    Map(ItemKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// CloudFormation property name
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub update_type: UpdateType,
    /// `DuplicatesAllowed`, given for list properties
    pub duplicates_allowed: Option<bool>,
    pub documentation: String,
}

/// A struct to generate: a property type or the `Properties` of a resource
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Full specification name
    pub type_name: String,
    pub struct_name: String,
    pub documentation: String,
    pub fields: Vec<Field>,
}

impl Shape {
    pub fn has_required(&self) -> bool {
        self.fields.iter().any(|f| f.required)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub field_type: FieldType,
}

/// One resource type with the property types it owns
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceModel {
    pub module: String,
    pub resource: Shape,
    pub attributes: Vec<Attribute>,
    pub property_types: Vec<Shape>,
}

impl ResourceModel {
    pub fn type_name(&self) -> &str {
        &self.resource.type_name
    }

    /// Every field of the resource and its property types
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.property_types
            .iter()
            .chain(std::iter::once(&self.resource))
            .flat_map(|shape| shape.fields.iter())
    }
}

/// All resource types of one service (e.g., "CloudFront")
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceModel {
    pub name: String,
    pub version: Option<String>,
    pub resources: Vec<ResourceModel>,
}

impl ServiceModel {
    pub fn resource(&self, type_name: &str) -> Option<&ResourceModel> {
        self.resources.iter().find(|r| r.type_name() == type_name)
    }
}

impl Specification {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse CloudFormation resource specification")
    }

    /// Service names present in `ResourceTypes`
    pub fn services(&self) -> BTreeSet<&str> {
        self.resource_types
            .keys()
            .filter_map(|name| name.split("::").nth(1))
            .collect()
    }

    pub fn service(&self, service: &str) -> Result<ServiceModel> {
        let prefix = format!("AWS::{}::", service);
        let resources = self
            .resource_types
            .iter()
            .filter(|(name, _)| name.starts_with(&prefix))
            .map(|(name, definition)| self.resource(name, definition))
            .collect::<Result<Vec<_>>>()?;

        if resources.is_empty() {
            bail!("No resource types found for service: {}", service);
        }
        log::debug!(
            "service {} has {} resource types",
            service,
            resources.len()
        );

        Ok(ServiceModel {
            name: service.to_string(),
            version: self.resource_specification_version.clone(),
            resources,
        })
    }

    fn resource(&self, type_name: &str, definition: &TypeDefinition) -> Result<ResourceModel> {
        let resource_name = short_name(type_name);
        let prefix = format!("{}.", type_name);
        let owned: Vec<(&String, &TypeDefinition)> = self
            .property_types
            .iter()
            .filter(|(name, _)| name.starts_with(&prefix))
            .collect();

        let mut struct_names = BTreeMap::new();
        struct_names.insert(SHARED_TAG.to_string(), SHARED_TAG.to_string());
        for (name, _) in &owned {
            let property_type = short_name(name);
            struct_names.insert(
                property_type.to_string(),
                naming::struct_name(property_type, resource_name),
            );
        }

        let property_types = owned
            .iter()
            .map(|(name, definition)| {
                shape(
                    name,
                    &struct_names[short_name(name)],
                    definition,
                    &struct_names,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let attributes = definition
            .attributes
            .iter()
            .map(|(name, attribute)| {
                let field_type = resolve(
                    attribute.primitive_type.as_deref(),
                    attribute.type_name.as_deref(),
                    attribute
                        .primitive_item_type
                        .as_deref()
                        .or(attribute.item_type.as_deref()),
                    &struct_names,
                )
                .with_context(|| format!("Invalid attribute {}.{}", type_name, name))?;
                Ok(Attribute {
                    name: name.clone(),
                    field_type,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ResourceModel {
            module: naming::module_name(resource_name),
            resource: shape(type_name, resource_name, definition, &struct_names)?,
            attributes,
            property_types,
        })
    }
}

fn shape(
    type_name: &str,
    struct_name: &str,
    definition: &TypeDefinition,
    struct_names: &BTreeMap<String, String>,
) -> Result<Shape> {
    let fields = definition
        .properties
        .iter()
        .map(|(name, property)| {
            field(name, property, struct_names)
                .with_context(|| format!("Invalid property {}.{}", type_name, name))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Shape {
        type_name: type_name.to_string(),
        struct_name: struct_name.to_string(),
        documentation: definition.documentation.clone(),
        fields,
    })
}

fn field(
    name: &str,
    property: &PropertyDefinition,
    struct_names: &BTreeMap<String, String>,
) -> Result<Field> {
    let field_type = resolve(
        property.primitive_type.as_deref(),
        property.type_name.as_deref(),
        property
            .primitive_item_type
            .as_deref()
            .or(property.item_type.as_deref()),
        struct_names,
    )?;

    let update_type = match property.update_type.as_deref() {
        Some("Mutable") => UpdateType::Mutable,
        Some("Immutable") => UpdateType::Immutable,
        Some("Conditional") => UpdateType::Conditional,
        Some(other) => bail!("Unknown update type: {}", other),
        None => {
            log::warn!("property {} has no UpdateType, assuming Mutable", name);
            UpdateType::Mutable
        }
    };

    Ok(Field {
        name: name.to_string(),
        field_type,
        required: property.required,
        update_type,
        duplicates_allowed: property.duplicates_allowed,
        documentation: property.documentation.clone(),
    })
}

fn resolve(
    primitive_type: Option<&str>,
    type_name: Option<&str>,
    item_type: Option<&str>,
    struct_names: &BTreeMap<String, String>,
) -> Result<FieldType> {
    if let Some(primitive) = primitive_type {
        return Ok(FieldType::Primitive(primitive_from_name(primitive)?));
    }

    match type_name {
        Some("List") => Ok(FieldType::List(item(item_type, struct_names)?)),
        Some("Map") => Ok(FieldType::Map(item(item_type, struct_names)?)),
        Some(name) => Ok(FieldType::Property(struct_name_of(name, struct_names)?)),
        None => bail!("Neither PrimitiveType nor Type is set"),
    }
}

fn item(item_type: Option<&str>, struct_names: &BTreeMap<String, String>) -> Result<ItemKind> {
    let Some(name) = item_type else {
        bail!("Collection without PrimitiveItemType or ItemType");
    };
    match PrimitiveType::from_name(name) {
        Some(primitive) => Ok(ItemKind::Primitive(primitive)),
        None => Ok(ItemKind::Property(struct_name_of(name, struct_names)?)),
    }
}

fn primitive_from_name(name: &str) -> Result<PrimitiveType> {
    PrimitiveType::from_name(name).with_context(|| format!("Unknown primitive type: {}", name))
}

fn struct_name_of(name: &str, struct_names: &BTreeMap<String, String>) -> Result<String> {
    struct_names
        .get(name)
        .cloned()
        .with_context(|| format!("Unknown property type: {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"{
        "ResourceSpecificationVersion": "1.0.0",
        "PropertyTypes": {
            "AWS::Test::Widget.Widget": {
                "Documentation": "https://example.com/widget-widget",
                "Properties": {
                    "Size": {"PrimitiveType": "Integer", "Required": true, "UpdateType": "Mutable"}
                }
            },
            "AWS::Test::Widget.Header": {
                "Documentation": "https://example.com/header",
                "Properties": {
                    "Name": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"}
                }
            },
            "AWS::Test::Gadget.Part": {
                "Properties": {
                    "Id": {"PrimitiveType": "String", "Required": true, "UpdateType": "Immutable"}
                }
            }
        },
        "ResourceTypes": {
            "AWS::Test::Widget": {
                "Documentation": "https://example.com/widget",
                "Attributes": {
                    "Arn": {"PrimitiveType": "String"},
                    "Ports": {"Type": "List", "PrimitiveItemType": "Integer"}
                },
                "Properties": {
                    "Headers": {"Type": "List", "ItemType": "Header", "DuplicatesAllowed": true, "Required": false, "UpdateType": "Mutable"},
                    "Labels": {"Type": "Map", "PrimitiveItemType": "String", "Required": false, "UpdateType": "Mutable"},
                    "Tags": {"Type": "List", "ItemType": "Tag", "Required": false, "UpdateType": "Mutable"},
                    "Widget": {"Type": "Widget", "Required": true, "UpdateType": "Immutable"}
                }
            },
            "AWS::Test::Gadget": {
                "Properties": {
                    "Parts": {"Type": "List", "ItemType": "Part", "Required": true, "UpdateType": "Conditional"}
                }
            },
            "AWS::Other::Thing": {
                "Properties": {}
            }
        }
    }"#;

    #[test]
    fn lists_services() {
        let spec = Specification::from_json(SPEC).unwrap();
        assert_eq!(
            spec.services().into_iter().collect::<Vec<_>>(),
            vec!["Other", "Test"]
        );
    }

    #[test]
    fn groups_property_types_under_their_resource() {
        let service = Specification::from_json(SPEC)
            .unwrap()
            .service("Test")
            .unwrap();
        assert_eq!(service.version.as_deref(), Some("1.0.0"));
        assert_eq!(service.resources.len(), 2);

        let gadget = service.resource("AWS::Test::Gadget").unwrap();
        assert_eq!(gadget.module, "gadget");
        assert_eq!(gadget.property_types.len(), 1);
        assert_eq!(gadget.property_types[0].type_name, "AWS::Test::Gadget.Part");
        assert_eq!(
            gadget.resource.fields[0].update_type,
            UpdateType::Conditional
        );
    }

    #[test]
    fn resolves_field_types() {
        let service = Specification::from_json(SPEC)
            .unwrap()
            .service("Test")
            .unwrap();
        let widget = service.resource("AWS::Test::Widget").unwrap();
        let types: Vec<&FieldType> = widget
            .resource
            .fields
            .iter()
            .map(|f| &f.field_type)
            .collect();

        assert_eq!(
            types,
            vec![
                &FieldType::List(ItemKind::Property("Header".to_string())),
                &FieldType::Map(ItemKind::Primitive(PrimitiveType::String)),
                &FieldType::List(ItemKind::Property("Tag".to_string())),
                &FieldType::Property("WidgetProperty".to_string()),
            ]
        );
        assert_eq!(
            widget.attributes[1].field_type,
            FieldType::List(ItemKind::Primitive(PrimitiveType::Integer))
        );
        assert!(widget.resource.has_required());
        assert_eq!(widget.resource.fields[0].duplicates_allowed, Some(true));
        assert_eq!(widget.resource.fields[1].duplicates_allowed, None);
    }

    #[test]
    fn property_type_named_like_resource_gets_suffix() {
        let service = Specification::from_json(SPEC)
            .unwrap()
            .service("Test")
            .unwrap();
        let widget = service.resource("AWS::Test::Widget").unwrap();
        let names: Vec<&str> = widget
            .property_types
            .iter()
            .map(|p| p.struct_name.as_str())
            .collect();
        assert_eq!(names, vec!["Header", "WidgetProperty"]);
    }

    #[test]
    fn unknown_service_is_an_error() {
        let spec = Specification::from_json(SPEC).unwrap();
        assert!(spec.service("CloudFront").is_err());
    }

    #[test]
    fn unresolved_reference_is_an_error() {
        let spec = Specification::from_json(
            r#"{"ResourceTypes": {"AWS::Test::Broken": {"Properties": {
                "Config": {"Type": "Missing", "Required": true, "UpdateType": "Mutable"}
            }}}}"#,
        )
        .unwrap();
        let err = spec.service("Test").unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown property type: Missing"));
    }
}
