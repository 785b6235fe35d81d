//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout tfsbom, including
//! file naming rules, sentinel versions, output headers, and CLI messages.

// === Application Metadata ===

/// Application name (from Cargo.toml); also the log target.
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

// === Path Configuration ===

/// Name of the configuration subdirectory under the user config dir.
pub const CONFIG_DIR_NAME: &str = "tfsbom";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Environment Variables ===

/// Overrides the configuration file location.
pub const ENV_CONFIG: &str = "TFSBOM_CONFIG";
/// Overrides the output format when `--output` is not given.
pub const ENV_OUTPUT: &str = "TFSBOM_OUTPUT";

// === Terraform Files ===

/// Native HCL syntax extension.
pub const EXT_TF: &str = ".tf";
/// JSON syntax extension.
pub const EXT_TF_JSON: &str = ".tf.json";
/// Stem of the directory-wide override file.
pub const OVERRIDE_STEM: &str = "override";
/// Stem suffix marking any other override file.
pub const OVERRIDE_SUFFIX: &str = "_override";
/// Block type declaring a module call.
pub const BLOCK_MODULE: &str = "module";
/// Module call attribute holding the source address.
pub const ATTR_SOURCE: &str = "source";
/// Module call attribute holding the version constraint.
pub const ATTR_VERSION: &str = "version";

// === Version Inference ===

/// Marker separating a VCS source address from its ref.
pub const REF_MARKER: &str = "?ref=";
/// Source prefixes identifying a module stored next to the configuration.
pub const LOCAL_PREFIXES: [&str; 2] = ["./", "../"];
/// Sentinel version for local modules.
pub const VERSION_LOCAL: &str = "local";
/// Sentinel version when nothing could be inferred.
pub const VERSION_UNKNOWN: &str = "N/A";

// === Output Formats ===

/// Header row written to newly created CSV files.
pub const CSV_HEADER: [&str; 4] = ["Config Path", "Module Name", "Source", "Version"];
/// Indentation width for XML output.
pub const INDENT_WIDTH: usize = 2;
/// Root element of the XML document.
pub const XML_ROOT: &str = "SBOM";
/// Wrapper element holding the module list.
pub const XML_MODULES: &str = "Modules";
/// Element holding a single module record.
pub const XML_MODULE: &str = "Module";
/// Format used when nothing else is configured.
pub const DEFAULT_FORMAT: &str = "csv";

// === Messages: CLI Output ===

pub const CLI_MSG_SUMMARY_TITLE: &str =
    "Software Bill of Materials (SBOM) for Terraform configuration";
pub const CLI_MSG_SUMMARY_RULE: &str =
    "-----------------------------------------------------------";
pub const CLI_MSG_WRITE_SUCCESS: &str = "SBOM successfully written to ";
pub const CLI_MSG_GENERATE_FAILED: &str = "Error generating SBOM";
pub const CLI_MSG_WRITE_FAILED: &str = "Error writing SBOM";
