//! SBOM output encodings.
//!
//! Each format lives in its own module. CSV appends to an existing file;
//! JSON and XML always replace the file's contents.

pub mod csv;
pub mod json;
pub mod xml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::sbom::Sbom;

/// Supported output encodings.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum OutputFormat {
    /// Comma-separated values, appended across runs.
    #[default]
    Csv,
    /// Pretty-printed JSON document.
    Json,
    /// Indented XML document.
    Xml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Xml => write!(f, "xml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Exact, case-insensitive match on `csv`, `json` or `xml`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Writes `sbom` to `path` in the given format.
///
/// # Errors
///
/// Returns [`Error::Io`] if the output file cannot be opened or written.
pub fn write_sbom(sbom: &Sbom, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => csv::write(sbom, path)?,
        OutputFormat::Json => json::write(sbom, path)?,
        OutputFormat::Xml => xml::write(sbom, path)?,
    }
    debug!(path = %path.display(), %format, records = sbom.len(), "wrote SBOM");
    Ok(())
}
