//! Naming - Rust identifiers for CloudFormation names

use heck::ToSnakeCase;

/// Names whose snake_case conversion would split a plural acronym
const FIELD_OVERRIDES: &[(&str, &str)] = &[("CNAMEs", "cnames")];

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "yield",
];

/// Module name for a resource type ("OriginRequestPolicy" -> "origin_request_policy")
pub fn module_name(resource: &str) -> String {
    escape_keyword(resource.to_snake_case())
}

/// Field name for a CloudFormation property ("IPV6Enabled" -> "ipv6_enabled")
pub fn field_name(property: &str) -> String {
    if let Some((_, name)) = FIELD_OVERRIDES.iter().find(|(from, _)| *from == property) {
        return name.to_string();
    }
    escape_keyword(property.to_snake_case())
}

/// Struct name for a property type. A property type named like its resource
/// ("AWS::Greengrass::Group.Group") gets a `Property` suffix.
pub fn struct_name(property_type: &str, resource: &str) -> String {
    if property_type == resource {
        format!("{}Property", property_type)
    } else {
        property_type.to_string()
    }
}

fn escape_keyword(name: String) -> String {
    if KEYWORDS.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names() {
        assert_eq!(field_name("ViewerProtocolPolicy"), "viewer_protocol_policy");
        assert_eq!(field_name("IPV6Enabled"), "ipv6_enabled");
        assert_eq!(field_name("HTTPSPort"), "https_port");
        assert_eq!(field_name("WebACLId"), "web_acl_id");
        assert_eq!(field_name("S3Origin"), "s3_origin");
        assert_eq!(field_name("DNSName"), "dns_name");
        assert_eq!(field_name("MinTTL"), "min_ttl");
        assert_eq!(field_name("ARN"), "arn");
    }

    #[test]
    fn overrides_and_keywords() {
        assert_eq!(field_name("CNAMEs"), "cnames");
        assert_eq!(field_name("Type"), "type_");
        assert_eq!(module_name("Function"), "function");
    }

    #[test]
    fn module_names() {
        assert_eq!(
            module_name("CloudFrontOriginAccessIdentity"),
            "cloud_front_origin_access_identity"
        );
        assert_eq!(module_name("RealtimeLogConfig"), "realtime_log_config");
    }

    #[test]
    fn struct_names() {
        assert_eq!(struct_name("Origin", "Distribution"), "Origin");
        assert_eq!(struct_name("Group", "Group"), "GroupProperty");
    }
}
