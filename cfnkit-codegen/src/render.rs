//! Render - Rust source for resource modules and service indexes

use cfnkit_core::schema::PrimitiveType;

use crate::spec::{Field, FieldType, ItemKind, ResourceModel, ServiceModel, Shape};

const MAX_WIDTH: usize = 100;

/// Rust type of a field, without the `Option` of optional fields. Lists,
/// maps and property types are wrapped in `Value` as a whole, so an
/// intrinsic can stand in for the entire collection or object.
pub fn rust_type(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Primitive(primitive) => primitive_rust_type(*primitive).to_string(),
        _ => format!("Value<{}>", literal_type(field_type)),
    }
}

/// Type a constructor takes for a field: the literal inside the `Value` of
/// a list, map or property type, the field type itself for primitives
fn literal_type(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Primitive(primitive) => primitive_rust_type(*primitive).to_string(),
        FieldType::Property(name) => name.clone(),
        FieldType::List(item) => format!("Vec<{}>", item_rust_type(item)),
        FieldType::Map(item) => format!("BTreeMap<String, {}>", item_rust_type(item)),
    }
}

fn item_rust_type(item: &ItemKind) -> String {
    match item {
        ItemKind::Primitive(primitive) => primitive_rust_type(*primitive).to_string(),
        ItemKind::Property(name) => name.clone(),
    }
}

fn primitive_rust_type(primitive: PrimitiveType) -> &'static str {
    match primitive {
        PrimitiveType::String | PrimitiveType::Timestamp => "Value<String>",
        PrimitiveType::Integer | PrimitiveType::Long => "Value<i64>",
        PrimitiveType::Double => "Value<f64>",
        PrimitiveType::Boolean => "Value<bool>",
        PrimitiveType::Json => "Json",
    }
}

/// `PropertyKind` expression describing a field
pub fn kind_expr(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Primitive(primitive) => format!(
            "PropertyKind::Primitive(PrimitiveType::{})",
            primitive.as_str()
        ),
        FieldType::Property(name) => format!("PropertyKind::Property({}::TYPE_REF)", name),
        FieldType::List(item) => format!("PropertyKind::List({})", item_expr(item)),
        FieldType::Map(item) => format!("PropertyKind::Map({})", item_expr(item)),
    }
}

fn item_expr(item: &ItemKind) -> String {
    match item {
        ItemKind::Primitive(primitive) => {
            format!("ItemType::Primitive(PrimitiveType::{})", primitive.as_str())
        }
        ItemKind::Property(name) => format!("ItemType::Property({}::TYPE_REF)", name),
    }
}

/// Type as worded in the field documentation ("List of CacheBehavior")
pub fn type_label(field_type: &FieldType) -> String {
    let item_label = |item: &ItemKind| match item {
        ItemKind::Primitive(primitive) => primitive.as_str().to_string(),
        ItemKind::Property(name) => name.clone(),
    };
    match field_type {
        FieldType::Primitive(primitive) => primitive.as_str().to_string(),
        FieldType::Property(name) => name.clone(),
        FieldType::List(item) => format!("List of {}", item_label(item)),
        FieldType::Map(item) => format!("Map of {}", item_label(item)),
    }
}

/// Imports a resource module needs
#[derive(Debug, Default, PartialEq)]
struct Imports {
    btree_map: bool,
    item_type: bool,
    primitive_type: bool,
    tag: bool,
    json: bool,
    value: bool,
}

impl Imports {
    fn scan(resource: &ResourceModel) -> Self {
        let mut imports = Imports::default();
        // Attributes only appear as schema constants, never as struct fields
        let field_types = resource
            .fields()
            .map(|f| (&f.field_type, true))
            .chain(resource.attributes.iter().map(|a| (&a.field_type, false)));

        for (field_type, is_field) in field_types {
            let item = match field_type {
                FieldType::Primitive(primitive) => {
                    imports.primitive(*primitive, is_field);
                    None
                }
                FieldType::Property(name) => {
                    imports.property(name);
                    imports.value |= is_field;
                    None
                }
                FieldType::List(item) => {
                    imports.value |= is_field;
                    Some(item)
                }
                FieldType::Map(item) => {
                    imports.btree_map = true;
                    imports.value |= is_field;
                    Some(item)
                }
            };
            if let Some(item) = item {
                imports.item_type = true;
                match item {
                    ItemKind::Primitive(primitive) => imports.primitive(*primitive, is_field),
                    ItemKind::Property(name) => imports.property(name),
                }
            }
        }
        imports
    }

    fn primitive(&mut self, primitive: PrimitiveType, is_field: bool) {
        self.primitive_type = true;
        if !is_field {
            return;
        }
        if primitive == PrimitiveType::Json {
            self.json = true;
        } else {
            self.value = true;
        }
    }

    fn property(&mut self, name: &str) {
        if name == crate::spec::SHARED_TAG {
            self.tag = true;
        }
    }

    fn render(&self) -> String {
        let mut code = String::new();
        if self.btree_map {
            code.push_str("use std::collections::BTreeMap;\n\n");
        }

        let mut schema = vec!["AttributeSpec"];
        if self.item_type {
            schema.push("ItemType");
        }
        if self.primitive_type {
            schema.push("PrimitiveType");
        }
        schema.extend([
            "PropertyKind",
            "PropertySpec",
            "PropertyType",
            "ResourceProperties",
            "UpdateType",
        ]);
        code.push_str(&use_list("cfnkit_core::schema", &schema));

        if self.tag {
            code.push_str("use cfnkit_core::tag::Tag;\n");
        }
        let value: Vec<&str> = [("Json", self.json), ("Value", self.value)]
            .into_iter()
            .filter_map(|(name, used)| used.then_some(name))
            .collect();
        if !value.is_empty() {
            code.push_str(&use_list("cfnkit_core::value", &value));
        }
        code.push_str("use serde::{Deserialize, Serialize};\n");
        code
    }
}

/// `use` declaration, wrapped the way rustfmt wraps long import lists
fn use_list(path: &str, names: &[&str]) -> String {
    if let [name] = names {
        return format!("use {}::{};\n", path, name);
    }

    let single = format!("use {}::{{{}}};\n", path, names.join(", "));
    if single.len() - 1 <= MAX_WIDTH {
        return single;
    }

    let mut code = format!("use {}::{{\n", path);
    let mut line = String::new();
    for name in names {
        if !line.is_empty() && 4 + line.len() + 1 + name.len() + 1 > MAX_WIDTH {
            code.push_str(&format!("    {}\n", line));
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(name);
        line.push(',');
    }
    code.push_str(&format!("    {}\n}};\n", line));
    code
}

/// Module for one resource type: the resource struct followed by its
/// property types
pub fn render_module(resource: &ResourceModel) -> String {
    let mut code = format!(
        r#"//! {} types for AWS CloudFormation
//!
//! Auto-generated from CloudFormation resource specification: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

"#,
        resource.module,
        resource.type_name()
    );
    code.push_str(&Imports::scan(resource).render());

    code.push('\n');
    render_shape(&mut code, &resource.resource);
    render_attributes(&mut code, resource);

    for property_type in &resource.property_types {
        code.push('\n');
        render_shape(&mut code, property_type);
    }

    code
}

fn render_shape(code: &mut String, shape: &Shape) {
    code.push_str(&format!("/// `{}`\n", shape.type_name));
    if !shape.documentation.is_empty() {
        code.push_str(&format!("///\n/// <{}>\n", shape.documentation));
    }

    let default = if shape.has_required() {
        ""
    } else {
        "Default, "
    };
    code.push_str(&format!(
        "#[derive(Debug, Clone, {}PartialEq, Serialize, Deserialize)]\n",
        default
    ));
    code.push_str("#[serde(deny_unknown_fields)]\n");

    if shape.fields.is_empty() {
        code.push_str(&format!("pub struct {} {{}}\n", shape.struct_name));
    } else {
        code.push_str(&format!("pub struct {} {{\n", shape.struct_name));
        for field in &shape.fields {
            render_field(code, field);
        }
        code.push_str("}\n");
    }

    if shape.has_required() {
        render_constructor(code, shape);
    }

    code.push_str(&format!("\nimpl PropertyType for {} {{\n", shape.struct_name));
    code.push_str(&const_str("TYPE_NAME", &shape.type_name));
    code.push_str(&const_str("DOCUMENTATION", &shape.documentation));
    if shape.fields.is_empty() {
        code.push_str("    const PROPERTIES: &'static [PropertySpec] = &[];\n");
    } else {
        code.push_str("    const PROPERTIES: &'static [PropertySpec] = &[\n");
        for field in &shape.fields {
            let constructor = if field.required { "required" } else { "optional" };
            code.push_str(&format!(
                r#"        PropertySpec::{}(
            "{}",
            {},
            UpdateType::{:?},
            "{}",
        ),
"#,
                constructor,
                field.name,
                kind_expr(&field.field_type),
                field.update_type,
                field.documentation
            ));
        }
        code.push_str("    ];\n");
    }
    code.push_str("}\n");
}

fn render_field(code: &mut String, field: &Field) {
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    code.push_str(&format!(
        "    /// _Required_: {}\n    ///\n    /// _Type_: {}\n    ///\n",
        yes_no(field.required),
        type_label(&field.field_type)
    ));
    if let Some(duplicates_allowed) = field.duplicates_allowed {
        code.push_str(&format!(
            "    /// _Duplicates allowed_: {}\n    ///\n",
            yes_no(duplicates_allowed)
        ));
    }
    code.push_str(&format!(
        "    /// _Update requires_: {}\n",
        field.update_type.update_requires()
    ));
    if !field.documentation.is_empty() {
        code.push_str(&format!("    ///\n    /// <{}>\n", field.documentation));
    }

    let name = crate::naming::field_name(&field.name);
    let ty = rust_type(&field.field_type);
    if field.required {
        code.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.name));
        code.push_str(&format!("    pub {}: {},\n", name, ty));
    } else {
        code.push_str(&format!(
            "    #[serde(rename = \"{}\", default, skip_serializing_if = \"Option::is_none\")]\n",
            field.name
        ));
        code.push_str(&format!("    pub {}: Option<{}>,\n", name, ty));
    }
}

fn render_constructor(code: &mut String, shape: &Shape) {
    let params: Vec<String> = shape
        .fields
        .iter()
        .filter(|f| f.required)
        .map(|f| {
            let ty = match &f.field_type {
                FieldType::Primitive(PrimitiveType::Json) => rust_type(&f.field_type),
                FieldType::Primitive(_) => format!("impl Into<{}>", rust_type(&f.field_type)),
                composite => literal_type(composite),
            };
            format!("{}: {}", crate::naming::field_name(&f.name), ty)
        })
        .collect();

    code.push_str(&format!("\nimpl {} {{\n", shape.struct_name));
    let signature = format!("    pub fn new({}) -> Self {{", params.join(", "));
    if signature.len() <= MAX_WIDTH {
        code.push_str(&signature);
        code.push('\n');
    } else {
        code.push_str("    pub fn new(\n");
        for param in &params {
            code.push_str(&format!("        {},\n", param));
        }
        code.push_str("    ) -> Self {\n");
    }

    code.push_str("        Self {\n");
    for field in &shape.fields {
        let name = crate::naming::field_name(&field.name);
        let init = match &field.field_type {
            _ if !field.required => format!("{}: None", name),
            FieldType::Primitive(PrimitiveType::Json) => name,
            FieldType::Primitive(_) => format!("{}: {}.into()", name, name),
            _ => format!("{}: Value::Literal({})", name, name),
        };
        code.push_str(&format!("            {},\n", init));
    }
    code.push_str("        }\n    }\n}\n");
}

fn render_attributes(code: &mut String, resource: &ResourceModel) {
    code.push_str(&format!(
        "\nimpl ResourceProperties for {} {{\n",
        resource.resource.struct_name
    ));
    if resource.attributes.is_empty() {
        code.push_str("    const ATTRIBUTES: &'static [AttributeSpec] = &[];\n");
    } else {
        code.push_str("    const ATTRIBUTES: &'static [AttributeSpec] = &[\n");
        for attribute in &resource.attributes {
            code.push_str(&format!(
                "        AttributeSpec::new(\"{}\", {}),\n",
                attribute.name,
                kind_expr(&attribute.field_type)
            ));
        }
        code.push_str("    ];\n");
    }
    code.push_str("}\n");
}

/// `const NAME: &'static str = "...";`, moving the value to its own line
/// when the declaration is too wide
fn const_str(name: &str, value: &str) -> String {
    let single = format!("    const {}: &'static str = \"{}\";\n", name, value);
    if single.len() - 1 <= MAX_WIDTH {
        single
    } else {
        format!(
            "    const {}: &'static str =\n        \"{}\";\n",
            name, value
        )
    }
}

/// `mod.rs` of a service: module declarations, re-exports and `resource_specs()`
pub fn render_service_index(service: &ServiceModel) -> String {
    let mut code = format!(
        r#"//! AWS::{} resource types
//!
//! Auto-generated from CloudFormation resource specification
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::schema::{{ResourceProperties, ResourceSpec}};

"#,
        service.name
    );

    for resource in &service.resources {
        code.push_str(&format!("pub mod {};\n", resource.module));
    }
    code.push('\n');
    for resource in &service.resources {
        code.push_str(&format!(
            "pub use {}::{};\n",
            resource.module, resource.resource.struct_name
        ));
    }

    if let Some(version) = &service.version {
        code.push_str(&format!(
            "\n/// Version of the resource specification these types were generated from\npub const SPECIFICATION_VERSION: &str = \"{}\";\n",
            version
        ));
    }

    code.push_str(&format!(
        "\n/// Specs of all AWS::{} resource types\npub fn resource_specs() -> Vec<ResourceSpec> {{\n    vec![\n",
        service.name
    ));
    for resource in &service.resources {
        code.push_str(&format!(
            "        {}::spec(),\n",
            resource.resource.struct_name
        ));
    }
    code.push_str("    ]\n}\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Specification;

    const SPEC: &str = r#"{
        "ResourceSpecificationVersion": "2.0.0",
        "PropertyTypes": {
            "AWS::Test::Widget.Header": {
                "Documentation": "https://example.com/header",
                "Properties": {
                    "Name": {"Documentation": "https://example.com/header#name", "PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"},
                    "Values": {"Type": "List", "PrimitiveItemType": "String", "DuplicatesAllowed": false, "Required": false, "UpdateType": "Mutable"}
                }
            }
        },
        "ResourceTypes": {
            "AWS::Test::Widget": {
                "Documentation": "https://example.com/widget",
                "Attributes": {
                    "Arn": {"PrimitiveType": "String"}
                },
                "Properties": {
                    "Headers": {"Type": "List", "ItemType": "Header", "Required": true, "UpdateType": "Mutable"},
                    "Labels": {"Type": "Map", "PrimitiveItemType": "String", "Required": false, "UpdateType": "Immutable"},
                    "Port": {"PrimitiveType": "Integer", "Required": true, "UpdateType": "Immutable"},
                    "Settings": {"PrimitiveType": "Json", "Required": false, "UpdateType": "Mutable"},
                    "Tags": {"Type": "List", "ItemType": "Tag", "Required": false, "UpdateType": "Mutable"}
                }
            }
        }
    }"#;

    fn widget() -> ResourceModel {
        let service = Specification::from_json(SPEC)
            .unwrap()
            .service("Test")
            .unwrap();
        service.resources[0].clone()
    }

    #[test]
    fn type_mapping() {
        assert_eq!(
            rust_type(&FieldType::Primitive(PrimitiveType::Timestamp)),
            "Value<String>"
        );
        assert_eq!(
            rust_type(&FieldType::Primitive(PrimitiveType::Long)),
            "Value<i64>"
        );
        assert_eq!(
            rust_type(&FieldType::Primitive(PrimitiveType::Json)),
            "Json"
        );
        assert_eq!(
            rust_type(&FieldType::List(ItemKind::Primitive(PrimitiveType::Double))),
            "Value<Vec<Value<f64>>>"
        );
        assert_eq!(
            rust_type(&FieldType::Map(ItemKind::Property("Origin".to_string()))),
            "Value<BTreeMap<String, Origin>>"
        );
        assert_eq!(
            rust_type(&FieldType::Property("ViewerCertificate".to_string())),
            "Value<ViewerCertificate>"
        );
        assert_eq!(
            literal_type(&FieldType::List(ItemKind::Property("Origin".to_string()))),
            "Vec<Origin>"
        );
        assert_eq!(
            kind_expr(&FieldType::List(ItemKind::Property("Origin".to_string()))),
            "PropertyKind::List(ItemType::Property(Origin::TYPE_REF))"
        );
        assert_eq!(
            type_label(&FieldType::Map(ItemKind::Primitive(PrimitiveType::String))),
            "Map of String"
        );
    }

    #[test]
    fn imports_follow_field_types() {
        let imports = Imports::scan(&widget());
        assert_eq!(
            imports,
            Imports {
                btree_map: true,
                item_type: true,
                primitive_type: true,
                tag: true,
                json: true,
                value: true,
            }
        );
        let rendered = imports.render();
        assert!(rendered.starts_with("use std::collections::BTreeMap;\n\n"));
        assert!(rendered.contains("use cfnkit_core::value::{Json, Value};\n"));
        assert!(rendered.contains("use cfnkit_core::tag::Tag;\n"));
    }

    #[test]
    fn long_import_lists_wrap() {
        let names = [
            "AttributeSpec",
            "ItemType",
            "PrimitiveType",
            "PropertyKind",
            "PropertySpec",
            "PropertyType",
            "ResourceProperties",
            "UpdateType",
        ];
        assert_eq!(
            use_list("cfnkit_core::schema", &names),
            "use cfnkit_core::schema::{\n    AttributeSpec, ItemType, PrimitiveType, PropertyKind, PropertySpec, PropertyType,\n    ResourceProperties, UpdateType,\n};\n"
        );
        assert_eq!(
            use_list("cfnkit_core::value", &["Value"]),
            "use cfnkit_core::value::Value;\n"
        );
    }

    #[test]
    fn renders_resource_module() {
        let code = render_module(&widget());

        assert!(code.starts_with("//! widget types for AWS CloudFormation\n"));
        assert!(code.contains("DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen"));
        assert!(code.contains(
            "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n#[serde(deny_unknown_fields)]\npub struct Widget {"
        ));
        assert!(code.contains("    pub headers: Value<Vec<Header>>,\n"));
        assert!(code.contains("    pub labels: Option<Value<BTreeMap<String, Value<String>>>>,\n"));
        assert!(code.contains("    pub settings: Option<Json>,\n"));
        assert!(code.contains("    pub tags: Option<Value<Vec<Tag>>>,\n"));
        assert!(code.contains("    /// _Update requires_: Replacement\n"));
        assert!(code.contains(
            "    /// _Type_: List of String\n    ///\n    /// _Duplicates allowed_: No\n"
        ));
        assert!(code.contains(
            "    pub fn new(headers: Vec<Header>, port: impl Into<Value<i64>>) -> Self {\n"
        ));
        assert!(code.contains("            headers: Value::Literal(headers),\n"));
        assert!(code.contains("            port: port.into(),\n"));
        assert!(code.contains("            settings: None,\n"));
        assert!(code.contains(
            "        AttributeSpec::new(\"Arn\", PropertyKind::Primitive(PrimitiveType::String)),\n"
        ));
        assert!(
            code.contains("    const TYPE_NAME: &'static str = \"AWS::Test::Widget.Header\";\n")
        );
        assert!(code.ends_with("    ];\n}\n"));
    }

    #[test]
    fn resource_comes_before_property_types() {
        let code = render_module(&widget());
        let resource = code.find("pub struct Widget {").unwrap();
        let header = code.find("pub struct Header {").unwrap();
        assert!(resource < header);
        assert_eq!(code.matches("impl ResourceProperties for").count(), 1);
    }

    #[test]
    fn renders_service_index() {
        let service = Specification::from_json(SPEC)
            .unwrap()
            .service("Test")
            .unwrap();
        let code = render_service_index(&service);

        assert!(code.contains("pub mod widget;\n"));
        assert!(code.contains("pub use widget::Widget;\n"));
        assert!(code.contains("pub const SPECIFICATION_VERSION: &str = \"2.0.0\";\n"));
        assert!(code.contains("        Widget::spec(),\n"));
    }

    #[test]
    fn wide_constants_move_to_next_line() {
        assert_eq!(
            const_str("TYPE_NAME", "AWS::Test::Widget"),
            "    const TYPE_NAME: &'static str = \"AWS::Test::Widget\";\n"
        );
        let wide = "x".repeat(90);
        assert_eq!(
            const_str("DOCUMENTATION", &wide),
            format!(
                "    const DOCUMENTATION: &'static str =\n        \"{}\";\n",
                wide
            )
        );
    }
}
