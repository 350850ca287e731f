//! CloudFormation Resource Specification to cfnkit Code Generator
//!
//! Generates the typed resource modules of cfnkit-resources from AWS's
//! CloudFormation resource specification.
//!
//! Usage:
//!   # Regenerate a whole service
//!   cfnkit-codegen --spec specification/CloudFrontSpecification.json \
//!     --service CloudFront --out-dir cfnkit-resources/src/cloudfront
//!
//!   # Print a single resource module
//!   cfnkit-codegen --spec specification/GreengrassSpecification.json \
//!     --type-name AWS::Greengrass::Group

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use cfnkit_codegen::render;
use cfnkit_codegen::spec::Specification;

#[derive(Parser, Debug)]
#[command(name = "cfnkit-codegen")]
#[command(about = "Generate cfnkit resource types from the CloudFormation resource specification")]
struct Args {
    /// Resource specification JSON file
    #[arg(long, env = "CFNKIT_SPEC")]
    spec: PathBuf,

    /// Service to generate (e.g., CloudFront)
    #[arg(long)]
    service: Option<String>,

    /// Single resource type to generate (e.g., AWS::CloudFront::Distribution)
    #[arg(long, conflicts_with = "out_dir")]
    type_name: Option<String>,

    /// Output file for --type-name (writes to stdout if not specified)
    #[arg(long, short, requires = "type_name")]
    output: Option<PathBuf>,

    /// Directory to write the service modules and mod.rs into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// List the services in the resource specification
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let json = std::fs::read_to_string(&args.spec)
        .with_context(|| format!("Failed to read file: {}", args.spec.display()))?;
    let spec = Specification::from_json(&json)?;

    if args.list {
        for service in spec.services() {
            println!("{}", service);
        }
        return Ok(());
    }

    if let Some(type_name) = &args.type_name {
        let service_name = match &args.service {
            Some(service) => service.as_str(),
            None => type_name
                .split("::")
                .nth(1)
                .with_context(|| format!("Invalid type name format: {}", type_name))?,
        };
        let service = spec.service(service_name)?;
        let resource = service
            .resource(type_name)
            .with_context(|| format!("Resource type not found: {}", type_name))?;
        let code = render::render_module(resource);

        if let Some(output) = &args.output {
            std::fs::write(output, &code)
                .with_context(|| format!("Failed to write to: {}", output.display()))?;
            eprintln!("{} {}", "Generated:".green().bold(), output.display());
        } else {
            print!("{}", code);
        }
        return Ok(());
    }

    let (Some(service_name), Some(out_dir)) = (&args.service, &args.out_dir) else {
        bail!("Either --type-name, or --service with --out-dir, is required");
    };
    let service = spec.service(service_name)?;
    for path in cfnkit_codegen::write_service(&service, out_dir)? {
        eprintln!("{} {}", "Generated:".green().bold(), path.display());
    }

    Ok(())
}
