//! Builds an [`Sbom`] from a Terraform configuration directory.

use std::path::Path;

use tracing::debug;

use super::{extract_version, ModuleRecord, Sbom};
use crate::error::Result;
use crate::terraform::{self, ModuleCall};

/// Loads the configuration at `config_path` and records every module call.
///
/// # Errors
///
/// Returns [`crate::Error::Load`] if the directory is not a valid Terraform
/// configuration. Nothing is returned for the valid files in that case.
pub fn generate_sbom(config_path: &Path) -> Result<Sbom> {
    let module = terraform::load_module(config_path)?;
    let sbom = from_module_calls(&module.module_calls, &config_path.display().to_string());
    debug!(
        config = %config_path.display(),
        modules = sbom.len(),
        "built SBOM"
    );
    Ok(sbom)
}

/// Maps module calls to records, keeping their order.
pub fn from_module_calls(calls: &[ModuleCall], config_path: &str) -> Sbom {
    calls
        .iter()
        .map(|call| ModuleRecord {
            name: call.name.clone(),
            source: call.source.clone(),
            version: extract_version(call),
            config_path: config_path.to_string(),
        })
        .collect::<Vec<_>>()
        .into()
}
