//! Library-level tests: Terraform directory in, SBOM file out.

use std::fs;

use tempfile::TempDir;
use tfsbom::{generate_sbom, write_sbom, ModuleRecord, OutputFormat, Sbom};

fn record(name: &str, source: &str, version: &str, config: &str) -> ModuleRecord {
    ModuleRecord {
        name: name.to_string(),
        source: source.to_string(),
        version: version.to_string(),
        config_path: config.to_string(),
    }
}

#[test]
fn test_mixed_syntax_directory_to_json() {
    let tmp = TempDir::new().unwrap();
    let infra = tmp.path().join("infra");
    fs::create_dir(&infra).unwrap();
    fs::write(
        infra.join("main.tf"),
        r#"terraform {
  required_version = ">= 1.5"
}

module "vpc" {
  source = "git::https://github.com/terraform-aws-modules/vpc.git?ref=v5.1.2"
}

module "iam" {
  source = "./modules/iam"
}
"#,
    )
    .unwrap();
    fs::write(
        infra.join("registry.tf.json"),
        r#"{"module": {"consul": {"source": "hashicorp/consul/aws", "version": "0.11.0"}}}"#,
    )
    .unwrap();

    let sbom = generate_sbom(&infra).unwrap();
    let config = infra.display().to_string();
    assert_eq!(
        sbom.modules(),
        &[
            record(
                "vpc",
                "git::https://github.com/terraform-aws-modules/vpc.git?ref=v5.1.2",
                "v5.1.2",
                &config
            ),
            record("iam", "./modules/iam", "local", &config),
            record("consul", "hashicorp/consul/aws", "0.11.0", &config),
        ]
    );

    let out = tmp.path().join("sbom.json");
    write_sbom(&sbom, &out, OutputFormat::Json).unwrap();
    let parsed: Sbom = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed, sbom);
}

#[test]
fn test_directory_without_modules() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("main.tf"),
        "resource \"aws_s3_bucket\" \"b\" {\n  bucket = \"b\"\n}\n",
    )
    .unwrap();

    let sbom = generate_sbom(tmp.path()).unwrap();
    assert!(sbom.is_empty());

    let out = tmp.path().join("sbom.xml");
    write_sbom(&sbom, &out, OutputFormat::Xml).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "<SBOM>\n  <Modules/>\n</SBOM>\n"
    );
}

#[test]
fn test_override_file_sets_recorded_version() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("main.tf"),
        "module \"vpc\" {\n  source  = \"terraform-aws-modules/vpc/aws\"\n  version = \"1.0.0\"\n}\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("override.tf"),
        "module \"vpc\" {\n  version = \"2.0.0\"\n}\n",
    )
    .unwrap();

    let sbom = generate_sbom(tmp.path()).unwrap();
    assert_eq!(
        sbom.modules(),
        &[record(
            "vpc",
            "terraform-aws-modules/vpc/aws",
            "2.0.0",
            &tmp.path().display().to_string()
        )]
    );
}
