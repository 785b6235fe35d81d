//! User configuration.
//!
//! Defaults can be stored in `<config dir>/tfsbom/config.toml`:
//!
//! ```toml
//! output = "json"
//! verbose = true
//! ```
//!
//! Command-line flags and environment variables always take precedence.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::constants;
use crate::emit::OutputFormat;
use crate::error::{Error, Result};

/// Contents of the configuration file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Default output format name.
    pub output: Option<String>,
    /// Print the record summary by default.
    pub verbose: Option<bool>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub verbose: bool,
}

/// Default location of the configuration file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

/// Loads the configuration file.
///
/// An explicitly named file must exist. The default file is optional.
///
/// # Errors
///
/// Returns [`Error::Config`] if an explicit file is missing, or if any file
/// that is read is not valid TOML for [`FileConfig`].
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => read(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => read(&path),
            _ => Ok(FileConfig::default()),
        },
    }
}

fn read(path: &Path) -> Result<FileConfig> {
    let config = fs::read_to_string(path)
        .map_err(|e| config_err(path, &e))
        .and_then(|content| parse(&content).map_err(|e| config_err(path, &e)))?;
    debug!(path = %path.display(), "loaded configuration file");
    Ok(config)
}

fn parse(content: &str) -> std::result::Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

fn config_err(path: &Path, e: &dyn fmt::Display) -> Error {
    Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Combines command-line values with the file configuration.
///
/// `cli_output` already includes the environment override, since clap reads
/// it. The format is validated here, before any Terraform file is touched.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for an unknown format name.
pub fn resolve(cli_output: Option<&str>, cli_verbose: bool, file: &FileConfig) -> Result<Settings> {
    let format = cli_output
        .or(file.output.as_deref())
        .unwrap_or(constants::DEFAULT_FORMAT)
        .parse::<OutputFormat>()?;
    let verbose = cli_verbose || file.verbose.unwrap_or(false);
    Ok(Settings { format, verbose })
}
