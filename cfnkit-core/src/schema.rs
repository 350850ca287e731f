//! Schema - Metadata describing CloudFormation resource and property types
//!
//! Every generated type carries its schema as constant data, so callers can
//! look up which properties exist, which are required and how they are typed
//! without parsing AWS's resource specification at runtime.

use std::fmt;

use crate::error::AttributeError;
use crate::intrinsic::Intrinsic;

/// Primitive property type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Integer,
    Long,
    Double,
    Boolean,
    Timestamp,
    Json,
}

impl PrimitiveType {
    /// Name used in AWS's resource specification
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "String",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Double => "Double",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Timestamp => "Timestamp",
            PrimitiveType::Json => "Json",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(PrimitiveType::String),
            "Integer" => Some(PrimitiveType::Integer),
            "Long" => Some(PrimitiveType::Long),
            "Double" => Some(PrimitiveType::Double),
            "Boolean" => Some(PrimitiveType::Boolean),
            "Timestamp" => Some(PrimitiveType::Timestamp),
            "Json" => Some(PrimitiveType::Json),
            _ => None,
        }
    }
}

/// Reference to a nested property type and its properties
#[derive(Debug, Clone, Copy)]
pub struct PropertyTypeRef {
    /// Full specification name (e.g., "AWS::CloudFront::Distribution.CacheBehavior")
    pub name: &'static str,
    pub properties: &'static [PropertySpec],
}

impl PropertyTypeRef {
    /// Name without the resource prefix (e.g., "CacheBehavior")
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }
}

/// Element type of a list or map property
#[derive(Debug, Clone, Copy)]
pub enum ItemType {
    Primitive(PrimitiveType),
    Property(PropertyTypeRef),
}

impl ItemType {
    fn type_name(&self) -> &'static str {
        match self {
            ItemType::Primitive(primitive) => primitive.as_str(),
            ItemType::Property(property) => property.short_name(),
        }
    }
}

/// Kind of a property
#[derive(Debug, Clone, Copy)]
pub enum PropertyKind {
    Primitive(PrimitiveType),
    Property(PropertyTypeRef),
    List(ItemType),
    Map(ItemType),
}

impl PropertyKind {
    /// Nested property type, looking through lists and maps
    pub fn property_type(&self) -> Option<PropertyTypeRef> {
        match self {
            PropertyKind::Property(property)
            | PropertyKind::List(ItemType::Property(property))
            | PropertyKind::Map(ItemType::Property(property)) => Some(*property),
            _ => None,
        }
    }

    fn type_name(&self) -> String {
        match self {
            PropertyKind::Primitive(primitive) => primitive.as_str().to_string(),
            PropertyKind::Property(property) => property.short_name().to_string(),
            PropertyKind::List(item) => format!("List of {}", item.type_name()),
            PropertyKind::Map(item) => format!("Map of {}", item.type_name()),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// What happens to the physical resource when a property changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateType {
    /// No interruption
    Mutable,
    /// Replacement
    Immutable,
    /// Some interruptions, or replacement depending on the change
    Conditional,
}

impl UpdateType {
    /// Wording used in the AWS documentation ("Update requires: ...")
    pub fn update_requires(&self) -> &'static str {
        match self {
            UpdateType::Mutable => "No interruption",
            UpdateType::Immutable => "Replacement",
            UpdateType::Conditional => "Some interruptions",
        }
    }
}

/// Property schema
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    /// CloudFormation property name (e.g., "ViewerProtocolPolicy")
    pub name: &'static str,
    pub kind: PropertyKind,
    pub required: bool,
    pub update_type: UpdateType,
    /// Link to the AWS documentation of this property
    pub documentation: &'static str,
}

impl PropertySpec {
    pub const fn required(
        name: &'static str,
        kind: PropertyKind,
        update_type: UpdateType,
        documentation: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            required: true,
            update_type,
            documentation,
        }
    }

    pub const fn optional(
        name: &'static str,
        kind: PropertyKind,
        update_type: UpdateType,
        documentation: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            required: false,
            update_type,
            documentation,
        }
    }
}

/// Return value of `Fn::GetAtt`
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: PropertyKind,
}

impl AttributeSpec {
    pub const fn new(name: &'static str, kind: PropertyKind) -> Self {
        Self { name, kind }
    }
}

/// Resource schema
#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    /// CloudFormation resource type (e.g., "AWS::CloudFront::Distribution")
    pub type_name: &'static str,
    pub documentation: &'static str,
    pub properties: &'static [PropertySpec],
    pub attributes: &'static [AttributeSpec],
}

impl ResourceSpec {
    /// Service segment of the type name (e.g., "CloudFront")
    pub fn service(&self) -> &'static str {
        self.type_name.split("::").nth(1).unwrap_or_default()
    }

    pub fn property(&self, name: &str) -> Option<&'static PropertySpec> {
        find_property(self.properties, name)
    }

    pub fn required_properties(&self) -> impl Iterator<Item = &'static str> {
        required_properties(self.properties)
    }

    pub fn attribute(&self, name: &str) -> Option<&'static AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

pub fn find_property(
    properties: &'static [PropertySpec],
    name: &str,
) -> Option<&'static PropertySpec> {
    properties.iter().find(|p| p.name == name)
}

pub fn required_properties(
    properties: &'static [PropertySpec],
) -> impl Iterator<Item = &'static str> {
    properties.iter().filter(|p| p.required).map(|p| p.name)
}

/// A struct generated from a CloudFormation property type (or the
/// `Properties` block of a resource type)
pub trait PropertyType {
    /// Full specification name (e.g., "AWS::CloudFront::Distribution.Origin")
    const TYPE_NAME: &'static str;
    const DOCUMENTATION: &'static str;
    const PROPERTIES: &'static [PropertySpec];

    const TYPE_REF: PropertyTypeRef = PropertyTypeRef {
        name: Self::TYPE_NAME,
        properties: Self::PROPERTIES,
    };
}

/// `Properties` block of a CloudFormation resource type
pub trait ResourceProperties: PropertyType {
    const ATTRIBUTES: &'static [AttributeSpec];

    fn spec() -> ResourceSpec {
        ResourceSpec {
            type_name: Self::TYPE_NAME,
            documentation: Self::DOCUMENTATION,
            properties: Self::PROPERTIES,
            attributes: Self::ATTRIBUTES,
        }
    }

    /// `Fn::GetAtt` on a resource of this type, checked against its return values
    fn get_att(
        logical_id: impl Into<String>,
        attribute: &str,
    ) -> Result<Intrinsic, AttributeError> {
        if Self::ATTRIBUTES.iter().any(|a| a.name == attribute) {
            Ok(Intrinsic::get_att(logical_id, attribute))
        } else {
            Err(AttributeError::UnknownAttribute {
                resource_type: Self::TYPE_NAME,
                attribute: attribute.to_string(),
                expected: Self::ATTRIBUTES.iter().map(|a| a.name).collect(),
            })
        }
    }
}

/// Part of a specification name after the last `.` or `::`
/// ("AWS::CloudFront::Distribution.Origin" -> "Origin")
pub fn short_name(type_name: &str) -> &str {
    type_name
        .rsplit(['.', ':'])
        .next()
        .unwrap_or(type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: &[PropertySpec] = &[PropertySpec::required(
        "HeaderName",
        PropertyKind::Primitive(PrimitiveType::String),
        UpdateType::Mutable,
        "https://example.com/headername",
    )];

    const OUTER: &[PropertySpec] = &[
        PropertySpec::required(
            "Id",
            PropertyKind::Primitive(PrimitiveType::String),
            UpdateType::Immutable,
            "https://example.com/id",
        ),
        PropertySpec::optional(
            "Headers",
            PropertyKind::List(ItemType::Property(PropertyTypeRef {
                name: "AWS::Test::Widget.Header",
                properties: INNER,
            })),
            UpdateType::Mutable,
            "https://example.com/headers",
        ),
    ];

    struct Widget;

    impl PropertyType for Widget {
        const TYPE_NAME: &'static str = "AWS::Test::Widget";
        const DOCUMENTATION: &'static str = "https://example.com/widget";
        const PROPERTIES: &'static [PropertySpec] = OUTER;
    }

    impl ResourceProperties for Widget {
        const ATTRIBUTES: &'static [AttributeSpec] = &[AttributeSpec::new(
            "Arn",
            PropertyKind::Primitive(PrimitiveType::String),
        )];
    }

    #[test]
    fn short_names() {
        assert_eq!(short_name("AWS::CloudFront::Distribution.Origin"), "Origin");
        assert_eq!(short_name("AWS::CloudFront::Distribution"), "Distribution");
        assert_eq!(short_name("Tag"), "Tag");
        assert_eq!(Widget::TYPE_REF.short_name(), "Widget");
    }

    #[test]
    fn resource_spec_lookup() {
        let spec = Widget::spec();
        assert_eq!(spec.service(), "Test");
        assert_eq!(spec.required_properties().collect::<Vec<_>>(), vec!["Id"]);
        assert!(spec.property("Headers").is_some());
        assert!(spec.property("Nope").is_none());
        assert!(spec.attribute("Arn").is_some());
    }

    #[test]
    fn kind_type_names() {
        let headers = Widget::spec().property("Headers").unwrap();
        assert_eq!(headers.kind.to_string(), "List of Header");
        assert_eq!(
            headers.kind.property_type().unwrap().name,
            "AWS::Test::Widget.Header"
        );
        assert_eq!(
            PropertyKind::Map(ItemType::Primitive(PrimitiveType::String)).to_string(),
            "Map of String"
        );
        assert!(
            PropertyKind::Primitive(PrimitiveType::Long)
                .property_type()
                .is_none()
        );
    }

    #[test]
    fn get_att_checks_attribute_name() {
        assert_eq!(
            Widget::get_att("MyWidget", "Arn").unwrap(),
            Intrinsic::get_att("MyWidget", "Arn")
        );

        let err = Widget::get_att("MyWidget", "DomainName").unwrap_err();
        assert!(err.to_string().contains("expected one of: Arn"));
    }

    #[test]
    fn primitive_names_round_trip() {
        for primitive in [
            PrimitiveType::String,
            PrimitiveType::Integer,
            PrimitiveType::Long,
            PrimitiveType::Double,
            PrimitiveType::Boolean,
            PrimitiveType::Timestamp,
            PrimitiveType::Json,
        ] {
            assert_eq!(
                PrimitiveType::from_name(primitive.as_str()),
                Some(primitive)
            );
        }
        assert_eq!(PrimitiveType::from_name("Map"), None);
    }

    #[test]
    fn update_requires_wording() {
        assert_eq!(UpdateType::Mutable.update_requires(), "No interruption");
        assert_eq!(UpdateType::Immutable.update_requires(), "Replacement");
    }
}
