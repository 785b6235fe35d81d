//! Human-readable SBOM listing for `--verbose`.

use std::fmt::Write as _;

use crate::constants;
use crate::sbom::Sbom;

/// Formats every record as a labelled block, in SBOM order.
pub fn render(sbom: &Sbom) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", constants::CLI_MSG_SUMMARY_TITLE);
    let _ = writeln!(out, "{}", constants::CLI_MSG_SUMMARY_RULE);
    for record in sbom.modules() {
        let _ = writeln!(out, "Config Path: {}", record.config_path);
        let _ = writeln!(out, "Module Name: {}", record.name);
        let _ = writeln!(out, "Source: {}", record.source);
        let _ = writeln!(out, "Version: {}\n", record.version);
    }
    out
}

/// Prints [`render`] to stdout.
pub fn print(sbom: &Sbom) {
    print!("{}", render(sbom));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom::fixtures::sample_sbom;

    #[test]
    fn test_render_lists_every_record() {
        let out = render(&sample_sbom());
        assert!(out.starts_with(constants::CLI_MSG_SUMMARY_TITLE));
        assert!(out.contains(
            "Config Path: /path/to/config\nModule Name: aws_vpc\n\
             Source: git::https://github.com/terraform-aws-modules/vpc.git?ref=v2.0.0\n\
             Version: v2.0.0\n\n"
        ));
        assert!(out.ends_with("Module Name: s3_bucket\nSource: hashicorp/aws\nVersion: N/A\n\n"));
    }

    #[test]
    fn test_render_empty() {
        let out = render(&Sbom::default());
        assert_eq!(out.lines().count(), 2);
    }
}
