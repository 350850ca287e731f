//! Conformance - Check that a generated type matches its own schema metadata
//!
//! Sample documents are built from the [`PropertySpec`]s of a type and then
//! mutated one property at a time:
//! - the minimal (required only) and full samples must deserialize and
//!   serialize back to the same JSON
//! - removing any required property, at any depth, must be rejected
//! - an intrinsic function must be accepted in place of every property,
//!   whole lists, maps and nested objects included, and in place of every
//!   primitive list or map item
//! - an unknown property must be rejected in every object
//!
//! All violations are collected rather than stopping at the first one.

use log::trace;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ConformanceError;
use crate::resource::Resource;
use crate::schema::{
    ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType, ResourceProperties,
};
use crate::value::Json;

const SAMPLE_MAP_KEY: &str = "SampleKey";
const UNKNOWN_PROPERTY: &str = "UnknownSampleProperty";
const WRONG_TYPE: &str = "AWS::Sample::NotThisType";

/// Sample JSON for a primitive type
pub fn sample_primitive(primitive: PrimitiveType) -> Json {
    match primitive {
        PrimitiveType::String => json!("sample"),
        PrimitiveType::Integer | PrimitiveType::Long => json!(1),
        PrimitiveType::Double => json!(1.5),
        PrimitiveType::Boolean => json!(true),
        PrimitiveType::Timestamp => json!("2021-01-01T00:00:00Z"),
        PrimitiveType::Json => json!({"SampleKey": "sample"}),
    }
}

/// Sample object for a list of properties: required properties only, or all
pub fn sample(properties: &[PropertySpec], include_optional: bool) -> Json {
    let object = properties
        .iter()
        .filter(|p| p.required || include_optional)
        .map(|p| (p.name.to_string(), sample_kind(&p.kind, include_optional)))
        .collect();
    Json::Object(object)
}

fn sample_kind(kind: &PropertyKind, include_optional: bool) -> Json {
    match kind {
        PropertyKind::Primitive(primitive) => sample_primitive(*primitive),
        PropertyKind::Property(property) => sample(property.properties, include_optional),
        PropertyKind::List(item) => json!([sample_item(item, include_optional)]),
        PropertyKind::Map(item) => json!({ SAMPLE_MAP_KEY: sample_item(item, include_optional) }),
    }
}

fn sample_item(item: &ItemType, include_optional: bool) -> Json {
    match item {
        ItemType::Primitive(primitive) => sample_primitive(*primitive),
        ItemType::Property(property) => sample(property.properties, include_optional),
    }
}

/// Locations inside the full sample, as JSON pointers
#[derive(Debug, Default)]
struct SampleLocations {
    /// Objects generated from a property type (the root is "")
    objects: Vec<String>,
    /// Required properties
    required: Vec<String>,
    /// Values typed as a primitive other than Json
    primitives: Vec<String>,
    /// Properties holding a list, a map or a property type
    composites: Vec<String>,
}

impl SampleLocations {
    fn collect(properties: &[PropertySpec]) -> Self {
        let mut locations = SampleLocations::default();
        locations.walk(properties, String::new());
        locations
    }

    fn walk(&mut self, properties: &[PropertySpec], pointer: String) {
        for property in properties {
            let path = format!("{}/{}", pointer, escape(property.name));
            if property.required {
                self.required.push(path.clone());
            }
            match &property.kind {
                PropertyKind::Primitive(primitive) => self.primitive(*primitive, path),
                PropertyKind::Property(nested) => {
                    self.composites.push(path.clone());
                    self.walk(nested.properties, path);
                }
                PropertyKind::List(item) => {
                    self.composites.push(path.clone());
                    self.item(item, format!("{path}/0"));
                }
                PropertyKind::Map(item) => {
                    self.composites.push(path.clone());
                    self.item(item, format!("{path}/{SAMPLE_MAP_KEY}"));
                }
            }
        }
        self.objects.push(pointer);
    }

    fn item(&mut self, item: &ItemType, path: String) {
        match item {
            ItemType::Primitive(primitive) => self.primitive(*primitive, path),
            ItemType::Property(nested) => self.walk(nested.properties, path),
        }
    }

    fn primitive(&mut self, primitive: PrimitiveType, path: String) {
        if primitive != PrimitiveType::Json {
            self.primitives.push(path);
        }
    }
}

fn escape(name: &str) -> String {
    name.replace('~', "~0").replace('/', "~1")
}

fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

fn without(document: &Json, pointer: &str) -> Json {
    let mut document = document.clone();
    if let Some((parent, key)) = pointer.rsplit_once('/')
        && let Some(object) = document.pointer_mut(parent).and_then(Json::as_object_mut)
    {
        object.remove(&unescape(key));
    }
    document
}

fn replaced(document: &Json, pointer: &str, value: Json) -> Json {
    let mut document = document.clone();
    if let Some(slot) = document.pointer_mut(pointer) {
        *slot = value;
    }
    document
}

/// `Fn::If` choosing between the sample value and `AWS::NoValue`
fn conditional(document: &Json, pointer: &str) -> Json {
    let sample = document.pointer(pointer).cloned().unwrap_or(Json::Null);
    replaced(
        document,
        pointer,
        json!({"Fn::If": ["SampleCondition", sample, {"Ref": "AWS::NoValue"}]}),
    )
}

fn with_unknown_property(document: &Json, pointer: &str) -> Json {
    let mut document = document.clone();
    if let Some(object) = document.pointer_mut(pointer).and_then(Json::as_object_mut) {
        object.insert(UNKNOWN_PROPERTY.to_string(), json!("sample"));
    }
    document
}

fn accepts<P: DeserializeOwned>(document: Json) -> Result<P, serde_json::Error> {
    serde_json::from_value(document)
}

/// Check a generated property type against its schema metadata
pub fn check<P>() -> Result<(), Vec<ConformanceError>>
where
    P: PropertyType + Serialize + DeserializeOwned,
{
    let type_name = P::TYPE_NAME;
    let mut errors = Vec::new();

    let minimal = sample(P::PROPERTIES, false);
    let full = sample(P::PROPERTIES, true);

    for (variant, document) in [("minimal", &minimal), ("full", &full)] {
        match accepts::<P>(document.clone()) {
            Ok(value) => match serde_json::to_value(&value) {
                Ok(serialized) if serialized == *document => {}
                _ => errors.push(ConformanceError::RoundTripMismatch { type_name, variant }),
            },
            Err(e) => errors.push(ConformanceError::SampleRejected {
                type_name,
                variant,
                message: e.to_string(),
            }),
        }
    }

    let locations = SampleLocations::collect(P::PROPERTIES);

    for pointer in &locations.required {
        trace!("{}: removing required property {}", type_name, pointer);
        if accepts::<P>(without(&full, pointer)).is_ok() {
            errors.push(ConformanceError::RequiredNotEnforced {
                type_name,
                pointer: pointer.clone(),
            });
        }
    }

    for pointer in &locations.primitives {
        trace!("{}: intrinsic in place of {}", type_name, pointer);
        let document = replaced(&full, pointer, json!({"Ref": "SampleParameter"}));
        if let Err(e) = accepts::<P>(document) {
            errors.push(ConformanceError::IntrinsicRejected {
                type_name,
                pointer: pointer.clone(),
                message: e.to_string(),
            });
        }
    }

    for pointer in &locations.composites {
        trace!("{}: conditional in place of {}", type_name, pointer);
        if let Err(e) = accepts::<P>(conditional(&full, pointer)) {
            errors.push(ConformanceError::IntrinsicRejected {
                type_name,
                pointer: pointer.clone(),
                message: e.to_string(),
            });
        }
    }

    for pointer in &locations.objects {
        trace!("{}: unknown property in {:?}", type_name, pointer);
        if accepts::<P>(with_unknown_property(&full, pointer)).is_ok() {
            errors.push(ConformanceError::UnknownPropertyAccepted {
                type_name,
                pointer: pointer.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// [`check`] plus the resource envelope: the `Type` field must name exactly
/// this resource type
pub fn check_resource<P>() -> Result<(), Vec<ConformanceError>>
where
    P: ResourceProperties + Serialize + DeserializeOwned,
{
    let type_name = P::TYPE_NAME;
    let mut errors = check::<P>().err().unwrap_or_default();

    let properties = sample(P::PROPERTIES, false);
    let envelope = |resource_type: &str| {
        json!({
            "Type": resource_type,
            "Properties": properties.clone(),
        })
    };

    if let Err(e) = accepts::<Resource<P>>(envelope(type_name)) {
        errors.push(ConformanceError::SampleRejected {
            type_name,
            variant: "resource",
            message: e.to_string(),
        });
    }
    if accepts::<Resource<P>>(envelope(WRONG_TYPE)).is_ok() {
        errors.push(ConformanceError::TypeNotEnforced {
            type_name,
            found: WRONG_TYPE,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSpec, PropertyTypeRef, UpdateType};
    use crate::tag::Tag;
    use crate::value::Value;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Header {
        #[serde(rename = "Name")]
        name: Value<String>,
        #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
        values: Option<Value<Vec<Value<String>>>>,
    }

    impl PropertyType for Header {
        const TYPE_NAME: &'static str = "AWS::Test::Site.Header";
        const DOCUMENTATION: &'static str = "https://example.com/header";
        const PROPERTIES: &'static [PropertySpec] = &[
            PropertySpec::required(
                "Name",
                PropertyKind::Primitive(PrimitiveType::String),
                UpdateType::Mutable,
                "https://example.com/header#name",
            ),
            PropertySpec::optional(
                "Values",
                PropertyKind::List(ItemType::Primitive(PrimitiveType::String)),
                UpdateType::Mutable,
                "https://example.com/header#values",
            ),
        ];
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Site {
        #[serde(rename = "Port")]
        port: Value<i64>,
        #[serde(rename = "Headers", default, skip_serializing_if = "Option::is_none")]
        headers: Option<Value<Vec<Header>>>,
        #[serde(rename = "Settings", default, skip_serializing_if = "Option::is_none")]
        settings: Option<Json>,
        #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
        tags: Option<Value<Vec<Tag>>>,
    }

    impl PropertyType for Site {
        const TYPE_NAME: &'static str = "AWS::Test::Site";
        const DOCUMENTATION: &'static str = "https://example.com/site";
        const PROPERTIES: &'static [PropertySpec] = &[
            PropertySpec::required(
                "Port",
                PropertyKind::Primitive(PrimitiveType::Integer),
                UpdateType::Mutable,
                "https://example.com/site#port",
            ),
            PropertySpec::optional(
                "Headers",
                PropertyKind::List(ItemType::Property(Header::TYPE_REF)),
                UpdateType::Mutable,
                "https://example.com/site#headers",
            ),
            PropertySpec::optional(
                "Settings",
                PropertyKind::Primitive(PrimitiveType::Json),
                UpdateType::Mutable,
                "https://example.com/site#settings",
            ),
            PropertySpec::optional(
                "Tags",
                PropertyKind::List(ItemType::Property(Tag::TYPE_REF)),
                UpdateType::Mutable,
                "https://example.com/site#tags",
            ),
        ];
    }

    impl ResourceProperties for Site {
        const ATTRIBUTES: &'static [AttributeSpec] = &[];
    }

    /// Declares `Name` optional in the metadata while the struct requires it
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Drifted {
        #[serde(rename = "Name")]
        name: Value<String>,
        #[serde(rename = "Count")]
        count: Option<i64>,
    }

    impl PropertyType for Drifted {
        const TYPE_NAME: &'static str = "AWS::Test::Drifted";
        const DOCUMENTATION: &'static str = "https://example.com/drifted";
        const PROPERTIES: &'static [PropertySpec] = &[
            PropertySpec::optional(
                "Name",
                PropertyKind::Primitive(PrimitiveType::String),
                UpdateType::Mutable,
                "https://example.com/drifted#name",
            ),
            PropertySpec::required(
                "Count",
                PropertyKind::Primitive(PrimitiveType::Integer),
                UpdateType::Mutable,
                "https://example.com/drifted#count",
            ),
        ];
    }

    /// Same metadata as `Header`, but the list itself cannot be an intrinsic
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct BareList {
        #[serde(rename = "Name")]
        name: Value<String>,
        #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
        values: Option<Vec<Value<String>>>,
    }

    impl PropertyType for BareList {
        const TYPE_NAME: &'static str = "AWS::Test::Site.BareList";
        const DOCUMENTATION: &'static str = "https://example.com/bare-list";
        const PROPERTIES: &'static [PropertySpec] = Header::PROPERTIES;
    }

    #[test]
    fn samples() {
        assert_eq!(sample(Site::PROPERTIES, false), json!({"Port": 1}));
        assert_eq!(
            sample(Site::PROPERTIES, true),
            json!({
                "Port": 1,
                "Headers": [{"Name": "sample", "Values": ["sample"]}],
                "Settings": {"SampleKey": "sample"},
                "Tags": [{"Key": "sample", "Value": "sample"}]
            })
        );
    }

    #[test]
    fn locations_cover_nested_types() {
        let locations = SampleLocations::collect(Site::PROPERTIES);
        assert_eq!(
            locations.required,
            vec!["/Port", "/Headers/0/Name", "/Tags/0/Key", "/Tags/0/Value"]
        );
        assert!(locations.primitives.contains(&"/Headers/0/Values/0".to_string()));
        assert!(!locations.primitives.contains(&"/Settings".to_string()));
        assert!(locations.objects.contains(&String::new()));
        assert!(locations.objects.contains(&"/Headers/0".to_string()));
        assert_eq!(
            locations.composites,
            vec!["/Headers", "/Headers/0/Values", "/Tags"]
        );
    }

    #[test]
    fn conditional_wraps_the_sample() {
        let document = json!({"Headers": [{"Name": "sample"}]});
        assert_eq!(
            conditional(&document, "/Headers"),
            json!({"Headers": {"Fn::If": [
                "SampleCondition",
                [{"Name": "sample"}],
                {"Ref": "AWS::NoValue"}
            ]}})
        );
    }

    #[test]
    fn list_without_intrinsic_support_is_reported() {
        let errors = check::<BareList>().unwrap_err();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(matches!(
            &errors[0],
            ConformanceError::IntrinsicRejected { pointer, .. } if pointer == "/Values"
        ));
    }

    #[test]
    fn conforming_type_passes() {
        check_resource::<Site>().unwrap();
        check::<Header>().unwrap();
    }

    #[test]
    fn drifted_type_reports_every_violation() {
        let errors = check::<Drifted>().unwrap_err();

        assert!(errors.iter().any(|e| matches!(
            e,
            ConformanceError::SampleRejected { variant: "minimal", .. }
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ConformanceError::RequiredNotEnforced { pointer, .. } if pointer == "/Count"
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ConformanceError::IntrinsicRejected { pointer, .. } if pointer == "/Count"
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ConformanceError::UnknownPropertyAccepted { .. }
        )));
    }

    #[test]
    fn pointer_escaping() {
        assert_eq!(escape("a/b~c"), "a~1b~0c");
        assert_eq!(unescape("a~1b~0c"), "a/b~c");
        assert_eq!(
            without(&json!({"a/b": 1, "c": 2}), "/a~1b"),
            json!({"c": 2})
        );
    }

    #[test]
    fn typed_ref_points_at_nested_properties() {
        let reference: PropertyTypeRef = Header::TYPE_REF;
        assert_eq!(reference.short_name(), "Header");
        assert_eq!(reference.properties.len(), 2);
    }
}
