//! JSON output: `{"modules": [...]}`, two-space indented, replacing the file.

use std::fs;
use std::path::Path;

use crate::error::{Error, IoOperation, Result};
use crate::sbom::Sbom;

/// Renders `sbom` as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Serialization of the record type cannot fail in practice; any error is
/// reported as a write failure against `path` by [`write`].
pub fn render(sbom: &Sbom) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(sbom)?;
    out.push('\n');
    Ok(out)
}

/// Writes `sbom` to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write(sbom: &Sbom, path: &Path) -> Result<()> {
    let content = render(sbom).map_err(|e| Error::io(IoOperation::Write, path, e.into()))?;
    fs::write(path, content).map_err(|e| Error::io(IoOperation::Create, path, e))
}
