//! SBOM (Software Bill of Materials) data model and generation.
//!
//! An SBOM here is a flat, ordered list of the module calls declared by one
//! Terraform configuration directory, each paired with an inferred version.

pub mod builder;
pub mod version;

use serde::{Deserialize, Serialize};

pub use builder::generate_sbom;
pub use version::extract_version;

/// One module call found in a configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Local name of the module call.
    pub name: String,
    /// Source address exactly as declared.
    pub source: String,
    /// Inferred version; never empty.
    pub version: String,
    /// Configuration directory the record came from.
    #[serde(rename = "config")]
    pub config_path: String,
}

/// Ordered collection of module records for a single run.
///
/// Records keep the order in which the configuration loader returned them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sbom {
    modules: Vec<ModuleRecord>,
}

impl Sbom {
    pub fn new(modules: Vec<ModuleRecord>) -> Self {
        Self { modules }
    }

    /// Records in insertion order.
    pub fn modules(&self) -> &[ModuleRecord] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl From<Vec<ModuleRecord>> for Sbom {
    fn from(modules: Vec<ModuleRecord>) -> Self {
        Self::new(modules)
    }
}
