//! cfnkit Resources
//!
//! Typed resource declarations for the AWS::CloudFront and AWS::Greengrass
//! services, generated from the CloudFormation resource specification.

// Generated modules are kept exactly as cfnkit-codegen writes them
#[rustfmt::skip]
pub mod cloudfront;
#[rustfmt::skip]
pub mod greengrass;

use cfnkit_core::schema::ResourceSpec;

/// Specs of every resource type in this crate
pub fn all_resource_specs() -> Vec<ResourceSpec> {
    let mut specs = cloudfront::resource_specs();
    specs.extend(greengrass::resource_specs());
    specs
}

/// Look up a resource spec by CloudFormation type name
/// (e.g., "AWS::Greengrass::CoreDefinition")
pub fn find_resource_spec(type_name: &str) -> Option<ResourceSpec> {
    all_resource_specs()
        .into_iter()
        .find(|spec| spec.type_name == type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfnkit_core::conformance::check_resource;
    use cfnkit_core::error::{AttributeError, TemplateError};
    use cfnkit_core::template::{Output, Parameter};
    use cfnkit_core::{
        ConformanceError, Intrinsic, PseudoParameter, Resource, ResourceProperties, Tag, Template,
        Value,
    };
    use serde_json::json;
    use std::collections::HashSet;

    use crate::cloudfront::distribution::{
        DefaultCacheBehavior, DistributionConfig, Origin, S3OriginConfig,
    };
    use crate::cloudfront::{CloudFrontOriginAccessIdentity, Distribution, Function};
    use crate::greengrass::group::GroupVersion;
    use crate::greengrass::logger_definition::{Logger, LoggerDefinitionVersion};
    use crate::greengrass::{CoreDefinition, Group, LoggerDefinition};

    type Check = fn() -> Result<(), Vec<ConformanceError>>;

    const CHECKS: &[(&str, Check)] = &[
        (
            "AWS::CloudFront::CachePolicy",
            check_resource::<cloudfront::CachePolicy>,
        ),
        (
            "AWS::CloudFront::CloudFrontOriginAccessIdentity",
            check_resource::<cloudfront::CloudFrontOriginAccessIdentity>,
        ),
        (
            "AWS::CloudFront::Distribution",
            check_resource::<cloudfront::Distribution>,
        ),
        (
            "AWS::CloudFront::Function",
            check_resource::<cloudfront::Function>,
        ),
        (
            "AWS::CloudFront::KeyGroup",
            check_resource::<cloudfront::KeyGroup>,
        ),
        (
            "AWS::CloudFront::OriginRequestPolicy",
            check_resource::<cloudfront::OriginRequestPolicy>,
        ),
        (
            "AWS::CloudFront::PublicKey",
            check_resource::<cloudfront::PublicKey>,
        ),
        (
            "AWS::CloudFront::RealtimeLogConfig",
            check_resource::<cloudfront::RealtimeLogConfig>,
        ),
        (
            "AWS::CloudFront::StreamingDistribution",
            check_resource::<cloudfront::StreamingDistribution>,
        ),
        (
            "AWS::Greengrass::ConnectorDefinition",
            check_resource::<greengrass::ConnectorDefinition>,
        ),
        (
            "AWS::Greengrass::ConnectorDefinitionVersion",
            check_resource::<greengrass::ConnectorDefinitionVersion>,
        ),
        (
            "AWS::Greengrass::CoreDefinition",
            check_resource::<greengrass::CoreDefinition>,
        ),
        (
            "AWS::Greengrass::CoreDefinitionVersion",
            check_resource::<greengrass::CoreDefinitionVersion>,
        ),
        (
            "AWS::Greengrass::DeviceDefinition",
            check_resource::<greengrass::DeviceDefinition>,
        ),
        (
            "AWS::Greengrass::DeviceDefinitionVersion",
            check_resource::<greengrass::DeviceDefinitionVersion>,
        ),
        (
            "AWS::Greengrass::FunctionDefinition",
            check_resource::<greengrass::FunctionDefinition>,
        ),
        (
            "AWS::Greengrass::FunctionDefinitionVersion",
            check_resource::<greengrass::FunctionDefinitionVersion>,
        ),
        ("AWS::Greengrass::Group", check_resource::<greengrass::Group>),
        (
            "AWS::Greengrass::GroupVersion",
            check_resource::<greengrass::GroupVersion>,
        ),
        (
            "AWS::Greengrass::LoggerDefinition",
            check_resource::<greengrass::LoggerDefinition>,
        ),
        (
            "AWS::Greengrass::LoggerDefinitionVersion",
            check_resource::<greengrass::LoggerDefinitionVersion>,
        ),
        (
            "AWS::Greengrass::ResourceDefinition",
            check_resource::<greengrass::ResourceDefinition>,
        ),
        (
            "AWS::Greengrass::ResourceDefinitionVersion",
            check_resource::<greengrass::ResourceDefinitionVersion>,
        ),
        (
            "AWS::Greengrass::SubscriptionDefinition",
            check_resource::<greengrass::SubscriptionDefinition>,
        ),
        (
            "AWS::Greengrass::SubscriptionDefinitionVersion",
            check_resource::<greengrass::SubscriptionDefinitionVersion>,
        ),
    ];

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn every_resource_type_conforms_to_its_schema() {
        init_logger();
        let mut failures = Vec::new();
        for (type_name, check) in CHECKS {
            if let Err(errors) = check() {
                failures.extend(errors.iter().map(|e| format!("{}: {}", type_name, e)));
            }
        }
        assert!(failures.is_empty(), "{}", failures.join("\n"));
    }

    #[test]
    fn checks_cover_every_resource_type() {
        let specs: HashSet<&str> = all_resource_specs().iter().map(|s| s.type_name).collect();
        let checked: HashSet<&str> = CHECKS.iter().map(|(name, _)| *name).collect();
        assert_eq!(specs, checked);
        assert_eq!(specs.len(), 25);
    }

    #[test]
    fn specs_per_service() {
        assert_eq!(cloudfront::resource_specs().len(), 9);
        assert_eq!(greengrass::resource_specs().len(), 16);
        assert!(
            cloudfront::resource_specs()
                .iter()
                .all(|s| s.service() == "CloudFront")
        );
        assert!(
            greengrass::resource_specs()
                .iter()
                .all(|s| s.service() == "Greengrass")
        );
    }

    #[test]
    fn find_spec_by_type_name() {
        let spec = find_resource_spec("AWS::CloudFront::Distribution").unwrap();
        assert_eq!(
            spec.required_properties().collect::<Vec<_>>(),
            vec!["DistributionConfig"]
        );
        assert_eq!(
            spec.property("Tags").unwrap().kind.to_string(),
            "List of Tag"
        );
        assert!(spec.attribute("DomainName").is_some());

        assert!(find_resource_spec("AWS::CloudFront::Nope").is_none());
    }

    #[test]
    fn distribution_from_constructors() {
        let mut origin = Origin::new(Intrinsic::get_att("Bucket", "RegionalDomainName"), "web");
        origin.s3_origin_config = Some(Value::Literal(S3OriginConfig {
            origin_access_identity: Some(
                Intrinsic::sub("origin-access-identity/cloudfront/${Identity}").into(),
            ),
        }));

        let mut config =
            DistributionConfig::new(DefaultCacheBehavior::new("web", "redirect-to-https"), true);
        config.origins = Some(vec![origin].into());
        config.aliases = Some(vec![Value::from("www.example.com")].into());
        config.cnames = Some(vec![Value::<String>::from(PseudoParameter::StackName)].into());

        let mut distribution = Distribution::new(config);
        distribution.tags = Some(vec![Tag::new("Team", "web")].into());

        assert_eq!(
            serde_json::to_value(&distribution).unwrap(),
            json!({
                "DistributionConfig": {
                    "Aliases": ["www.example.com"],
                    "CNAMEs": [{"Ref": "AWS::StackName"}],
                    "DefaultCacheBehavior": {
                        "TargetOriginId": "web",
                        "ViewerProtocolPolicy": "redirect-to-https"
                    },
                    "Enabled": true,
                    "Origins": [{
                        "DomainName": {"Fn::GetAtt": ["Bucket", "RegionalDomainName"]},
                        "Id": "web",
                        "S3OriginConfig": {
                            "OriginAccessIdentity": {
                                "Fn::Sub": "origin-access-identity/cloudfront/${Identity}"
                            }
                        }
                    }]
                },
                "Tags": [{"Key": "Team", "Value": "web"}]
            })
        );
    }

    #[test]
    fn parses_custom_origin_distribution() {
        let resource: Resource<Distribution> = serde_json::from_value(json!({
            "Type": "AWS::CloudFront::Distribution",
            "Properties": {
                "DistributionConfig": {
                    "Origins": [{
                        "DomainName": "www.example.com",
                        "Id": "myCustomOrigin",
                        "CustomOriginConfig": {
                            "HTTPPort": 80,
                            "HTTPSPort": 443,
                            "OriginProtocolPolicy": "match-viewer"
                        }
                    }],
                    "Enabled": true,
                    "Comment": "Somecomment",
                    "DefaultRootObject": "index.html",
                    "Logging": {
                        "IncludeCookies": false,
                        "Bucket": "mylogs.s3.amazonaws.com",
                        "Prefix": "myprefix"
                    },
                    "Aliases": ["mysite.example.com", "*.yoursite.example.com"],
                    "DefaultCacheBehavior": {
                        "TargetOriginId": "myCustomOrigin",
                        "SmoothStreaming": false,
                        "ForwardedValues": {
                            "QueryString": false,
                            "Cookies": {"Forward": "all"}
                        },
                        "ViewerProtocolPolicy": "allow-all"
                    },
                    "CustomErrorResponses": [{
                        "ErrorCode": 404,
                        "ResponsePagePath": "/error-pages/404.html",
                        "ResponseCode": 200,
                        "ErrorCachingMinTTL": 30
                    }],
                    "PriceClass": "PriceClass_200",
                    "Restrictions": {
                        "GeoRestriction": {
                            "RestrictionType": "whitelist",
                            "Locations": ["AQ", "CV"]
                        }
                    },
                    "ViewerCertificate": {"CloudFrontDefaultCertificate": true}
                }
            },
            "DependsOn": "LogBucket"
        }))
        .unwrap();

        let config = resource.properties.distribution_config.as_literal().unwrap();
        let origin = &config.origins.as_ref().and_then(Value::as_literal).unwrap()[0];
        let custom = origin
            .custom_origin_config
            .as_ref()
            .and_then(Value::as_literal)
            .unwrap();
        assert_eq!(custom.https_port, Some(Value::literal(443)));
        assert_eq!(custom.origin_protocol_policy, Value::from("match-viewer"));

        let error_responses = config.custom_error_responses.as_ref().unwrap();
        let error_response = &error_responses.as_literal().unwrap()[0];
        assert_eq!(error_response.error_code, Value::literal(404));
        assert_eq!(
            error_response.error_caching_min_ttl,
            Some(Value::literal(30.0))
        );
        assert_eq!(
            resource.attributes.depends_on,
            vec!["LogBucket".to_string()]
        );

        let reparsed: Resource<Distribution> =
            serde_json::from_value(serde_json::to_value(&resource).unwrap()).unwrap();
        assert_eq!(reparsed, resource);
    }

    #[test]
    fn whole_lists_and_objects_may_be_intrinsics() {
        let config: DistributionConfig = serde_json::from_value(json!({
            "Aliases": {"Fn::Split": [",", {"Ref": "AliasList"}]},
            "DefaultCacheBehavior": {
                "TargetOriginId": "web",
                "ViewerProtocolPolicy": "allow-all"
            },
            "Enabled": true,
            "ViewerCertificate": {"Fn::If": [
                "HasCertificate",
                {"AcmCertificateArn": {"Ref": "CertificateArn"}, "SslSupportMethod": "sni-only"},
                {"Ref": "AWS::NoValue"}
            ]}
        }))
        .unwrap();

        let aliases = config.aliases.as_ref().unwrap();
        assert_eq!(
            aliases.as_intrinsic().map(Intrinsic::function_name),
            Some("Fn::Split")
        );
        let certificate = config.viewer_certificate.as_ref().unwrap();
        assert_eq!(
            certificate.as_intrinsic().map(Intrinsic::function_name),
            Some("Fn::If")
        );
        assert_eq!(
            serde_json::to_value(&config).unwrap()["Aliases"],
            json!({"Fn::Split": [",", {"Ref": "AliasList"}]})
        );
    }

    #[test]
    fn rejects_misspelled_and_mistyped_properties() {
        let misspelled = json!({
            "DistributionConfig": {
                "DefaultCacheBehavior": {
                    "TargetOriginId": "web",
                    "ViewerProtocolPolicy": "allow-all"
                },
                "Enabled": true,
                "Ipv6Enabled": true
            }
        });
        assert!(serde_json::from_value::<Distribution>(misspelled).is_err());

        let mistyped = json!({
            "DistributionConfig": {
                "DefaultCacheBehavior": {
                    "TargetOriginId": "web",
                    "ViewerProtocolPolicy": "allow-all"
                },
                "Enabled": "true"
            }
        });
        assert!(serde_json::from_value::<Distribution>(mistyped).is_err());
    }

    #[test]
    fn get_att_checks_return_values() {
        assert_eq!(
            Distribution::get_att("Cdn", "DomainName").unwrap(),
            Intrinsic::get_att("Cdn", "DomainName")
        );
        assert!(CloudFrontOriginAccessIdentity::get_att("Oai", "S3CanonicalUserId").is_ok());
        assert!(Function::get_att("Rewrite", "FunctionMetadata.FunctionARN").is_ok());

        let err = Distribution::get_att("Cdn", "Arn").unwrap_err();
        let AttributeError::UnknownAttribute { expected, .. } = &err;
        assert_eq!(expected, &vec!["DomainName", "Id"]);
    }

    #[test]
    fn greengrass_group_template() {
        init_logger();
        let mut template = Template::new().with_description("Greengrass group");
        template
            .add_parameter("CoreName", Parameter::new("String"))
            .unwrap();

        let core = CoreDefinition::new("core");
        template
            .add_resource("Core", &Resource::new(core))
            .unwrap();

        let mut loggers = LoggerDefinition::new("loggers");
        loggers.initial_version = Some(Value::Literal(LoggerDefinitionVersion::new(vec![
            Logger::new("GreengrassSystem", "system", "INFO", "FileSystem"),
        ])));
        template
            .add_resource("Loggers", &Resource::new(loggers))
            .unwrap();

        let mut group = Group::new(Intrinsic::reference("CoreName"));
        group.initial_version = Some(Value::Literal(GroupVersion {
            core_definition_version_arn: Some(
                CoreDefinition::get_att("Core", "LatestVersionArn")
                    .unwrap()
                    .into(),
            ),
            logger_definition_version_arn: Some(
                LoggerDefinition::get_att("Loggers", "LatestVersionArn")
                    .unwrap()
                    .into(),
            ),
            ..Default::default()
        }));
        template
            .add_resource("Group", &Resource::new(group.clone()).depends_on("Core"))
            .unwrap();
        template
            .add_output(
                "GroupId",
                Output::new(Group::get_att("Group", "Id").unwrap()).with_export("group-id"),
            )
            .unwrap();

        let json = template.to_json_pretty().unwrap();
        let parsed = Template::from_json_str(&json).unwrap();
        assert_eq!(parsed, template);
        assert_eq!(
            parsed.resource_types().collect::<Vec<_>>(),
            vec![
                ("Core", "AWS::Greengrass::CoreDefinition"),
                ("Loggers", "AWS::Greengrass::LoggerDefinition"),
                ("Group", "AWS::Greengrass::Group"),
            ]
        );

        let read: Resource<Group> = parsed.resource("Group").unwrap();
        assert_eq!(read.properties, group);
        assert_eq!(read.attributes.depends_on, vec!["Core".to_string()]);

        let logger = &parsed.resource::<LoggerDefinition>("Loggers").unwrap();
        let version = logger
            .properties
            .initial_version
            .as_ref()
            .and_then(Value::as_literal)
            .unwrap();
        let loggers = version.loggers.as_literal().unwrap();
        assert_eq!(loggers[0].type_, Value::from("FileSystem"));

        assert!(matches!(
            parsed.resource::<Group>("Core"),
            Err(TemplateError::TypeMismatch { .. })
        ));
        assert!(matches!(
            template.add_resource("CoreName", &Resource::new(CoreDefinition::new("other"))),
            Err(TemplateError::DuplicateLogicalId { .. })
        ));
    }

    #[test]
    fn greengrass_tags_are_free_form_json() {
        let definition: CoreDefinition = serde_json::from_value(json!({
            "Name": "core",
            "Tags": {"Environment": "test", "Owner": {"Ref": "OwnerParameter"}}
        }))
        .unwrap();
        assert_eq!(
            definition.tags,
            Some(json!({"Environment": "test", "Owner": {"Ref": "OwnerParameter"}}))
        );
    }
}
