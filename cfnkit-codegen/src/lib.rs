//! cfnkit-codegen - Generates cfnkit resource modules from the AWS
//! CloudFormation resource specification

pub mod naming;
pub mod render;
pub mod spec;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::spec::ServiceModel;

/// Write one module per resource type plus `mod.rs` into `out_dir`,
/// returning the written paths
pub fn write_service(service: &ServiceModel, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let mut written = Vec::new();
    for resource in &service.resources {
        let path = out_dir.join(format!("{}.rs", resource.module));
        write_file(&path, &render::render_module(resource))?;
        written.push(path);
    }

    let index = out_dir.join("mod.rs");
    write_file(&index, &render::render_service_index(service))?;
    written.push(index);

    Ok(written)
}

fn write_file(path: &Path, code: &str) -> Result<()> {
    log::debug!("writing {} ({} bytes)", path.display(), code.len());
    std::fs::write(path, code).with_context(|| format!("Failed to write to: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Specification;

    const SPEC: &str = r#"{
        "ResourceTypes": {
            "AWS::Test::Queue": {
                "Documentation": "https://example.com/queue",
                "Attributes": {"Arn": {"PrimitiveType": "String"}},
                "Properties": {
                    "QueueName": {"PrimitiveType": "String", "Required": true, "UpdateType": "Immutable"}
                }
            },
            "AWS::Test::Topic": {
                "Properties": {
                    "DisplayName": {"PrimitiveType": "String", "Required": false, "UpdateType": "Mutable"}
                }
            }
        }
    }"#;

    #[test]
    fn writes_modules_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let service = Specification::from_json(SPEC)
            .unwrap()
            .service("Test")
            .unwrap();

        let written = write_service(&service, &dir.path().join("test")).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["queue.rs", "topic.rs", "mod.rs"]);

        let index = std::fs::read_to_string(dir.path().join("test/mod.rs")).unwrap();
        assert!(index.contains("pub mod queue;\npub mod topic;\n"));
        assert!(!index.contains("SPECIFICATION_VERSION"));

        let topic = std::fs::read_to_string(dir.path().join("test/topic.rs")).unwrap();
        assert!(
            topic.contains("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]")
        );
        assert!(topic.contains("const ATTRIBUTES: &'static [AttributeSpec] = &[];"));
        assert!(!topic.contains("impl Topic {"));
    }

    #[test]
    fn committed_resource_modules_are_up_to_date() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        for service in ["CloudFront", "Greengrass"] {
            let json = std::fs::read_to_string(
                root.join(format!("specification/{}Specification.json", service)),
            )
            .unwrap();
            let model = Specification::from_json(&json)
                .unwrap()
                .service(service)
                .unwrap();

            let dir = tempfile::tempdir().unwrap();
            let written = write_service(&model, dir.path()).unwrap();
            let committed = root
                .join("cfnkit-resources/src")
                .join(service.to_lowercase());

            for path in &written {
                let file_name = path.file_name().unwrap();
                let expected = std::fs::read_to_string(path).unwrap();
                let actual = std::fs::read_to_string(committed.join(file_name)).unwrap();
                assert!(
                    actual == expected,
                    "{} is out of date, regenerate with cfnkit-codegen",
                    committed.join(file_name).display()
                );
            }
            assert_eq!(
                std::fs::read_dir(&committed).unwrap().count(),
                written.len(),
                "{} has files cfnkit-codegen does not write",
                committed.display()
            );
        }
    }
}
