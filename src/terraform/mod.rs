//! Terraform configuration inspection.
//!
//! Loads a configuration directory and returns the module calls it declares.
//! Only what an SBOM needs is understood: top-level `module` blocks and their
//! `source` and `version` arguments, in both native (`.tf`) and JSON
//! (`.tf.json`) syntax. Everything else in the files is parsed and ignored.
//!
//! Override files (`override.tf`, `*_override.tf` and their `.tf.json`
//! forms) are read after every primary file. Their `module` blocks merge into
//! the call of the same name instead of declaring a new one.

mod hcl;
mod json;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::constants;

/// Location of a declaration inside a configuration directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Path of the file holding the declaration.
    pub file: String,
    /// 1-based line number, when the syntax tracks it.
    pub line: Option<usize>,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.file),
            None => write!(f, "{}", self.file),
        }
    }
}

/// A `module` block found in the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCall {
    /// Local name of the call (the block label).
    pub name: String,
    /// Source address as written; empty when the argument is absent.
    pub source: String,
    /// Version constraint as written, if any.
    pub version: Option<String>,
    /// Where the call is declared.
    pub pos: Position,
}

/// The inspected contents of one configuration directory.
#[derive(Clone, Debug, Default)]
pub struct TerraformModule {
    /// Module calls in file-name order, then declaration order.
    pub module_calls: Vec<ModuleCall>,
}

/// A single problem found while loading a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub pos: Position,
    pub summary: String,
}

impl Diagnostic {
    fn new(file: &str, line: Option<usize>, summary: impl Into<String>) -> Self {
        Self {
            pos: Position {
                file: file.to_string(),
                line,
            },
            summary: summary.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.summary)
    }
}

/// Loading failed; carries every diagnostic collected across all files.
#[derive(Debug)]
pub struct LoadError {
    diagnostics: Vec<Diagnostic>,
}

impl LoadError {
    /// All diagnostics, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.diagnostics.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for diagnostic in iter {
            write!(f, "; {diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

/// A `module` block as written, before it is added or merged.
struct Declaration {
    name: String,
    source: Option<String>,
    version: Option<String>,
    pos: Position,
}

/// Accumulates module calls and diagnostics while files are scanned.
#[derive(Default)]
struct Inspection {
    calls: Vec<ModuleCall>,
    diagnostics: Vec<Diagnostic>,
    declared: HashMap<String, Position>,
    /// Set while override files are being read.
    overriding: bool,
}

impl Inspection {
    fn declare(&mut self, declaration: Declaration) {
        if self.overriding {
            self.merge_override(declaration);
        } else {
            self.add_call(ModuleCall {
                name: declaration.name,
                source: declaration.source.unwrap_or_default(),
                version: declaration.version,
                pos: declaration.pos,
            });
        }
    }

    fn add_call(&mut self, call: ModuleCall) {
        if let Some(previous) = self.declared.get(&call.name) {
            let summary = format!(
                "Duplicate module call {:?}; a module call with this name was already declared at {previous}",
                call.name
            );
            self.diagnostics.push(Diagnostic {
                pos: call.pos,
                summary,
            });
            return;
        }
        debug!(name = %call.name, source = %call.source, "found module call");
        self.declared.insert(call.name.clone(), call.pos.clone());
        self.calls.push(call);
    }

    /// Replaces the arguments an override block sets on an existing call.
    fn merge_override(&mut self, declaration: Declaration) {
        let Some(call) = self.calls.iter_mut().find(|c| c.name == declaration.name) else {
            let summary = format!(
                "Missing base module call to override; there is no module call named {:?}",
                declaration.name
            );
            self.diagnostics.push(Diagnostic {
                pos: declaration.pos,
                summary,
            });
            return;
        };
        debug!(name = %call.name, file = %declaration.pos.file, "merging module override");
        if let Some(source) = declaration.source {
            call.source = source;
        }
        if let Some(version) = declaration.version {
            call.version = Some(version);
        }
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Loads the Terraform configuration stored directly in `dir`.
///
/// Subdirectories are not visited. A directory holding no Terraform files is
/// valid and yields no module calls.
///
/// # Errors
///
/// Returns a [`LoadError`] when the directory cannot be read or any file in
/// it is invalid. No partial result is returned.
pub fn load_module(dir: &Path) -> Result<TerraformModule, LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError {
        diagnostics: vec![Diagnostic::new(
            &dir.display().to_string(),
            None,
            format!("Failed to read module directory: {e}"),
        )],
    })?;

    let mut inspection = Inspection::default();
    let files = config_files(dir, entries.map(|entry| entry.map(|e| e.path())), &mut inspection);
    let (overrides, primaries): (Vec<_>, Vec<_>) =
        files.into_iter().partition(|path| is_override_file(file_name(path)));

    for path in &primaries {
        read_file(path, &mut inspection);
    }
    inspection.overriding = true;
    for path in &overrides {
        read_file(path, &mut inspection);
    }

    if !inspection.diagnostics.is_empty() {
        return Err(LoadError {
            diagnostics: inspection.diagnostics,
        });
    }

    Ok(TerraformModule {
        module_calls: inspection.calls,
    })
}

fn read_file(path: &Path, inspection: &mut Inspection) {
    let file = path.display().to_string();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            inspection.error(Diagnostic::new(&file, None, format!("Failed to read file: {e}")));
            return;
        }
    };

    debug!(file = %file, "parsing configuration file");
    if file.ends_with(constants::EXT_TF_JSON) {
        json::collect(&file, &content, inspection);
    } else {
        hcl::collect(&file, &content, inspection);
    }
}

/// Keeps the Terraform files among `entries`, sorted by name.
///
/// Entries that cannot be read are recorded as diagnostics.
fn config_files(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
    inspection: &mut Inspection,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                inspection.error(Diagnostic::new(
                    &dir.display().to_string(),
                    None,
                    format!("Failed to read directory entry: {e}"),
                ));
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        if is_ignored_file(name) || !is_config_file(name) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    files
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

fn is_config_file(name: &str) -> bool {
    name.ends_with(constants::EXT_TF) || name.ends_with(constants::EXT_TF_JSON)
}

/// `override.tf`, `*_override.tf` and the `.tf.json` forms.
fn is_override_file(name: &str) -> bool {
    let stem = name
        .strip_suffix(constants::EXT_TF_JSON)
        .or_else(|| name.strip_suffix(constants::EXT_TF))
        .unwrap_or(name);
    stem == constants::OVERRIDE_STEM || stem.ends_with(constants::OVERRIDE_SUFFIX)
}

/// Hidden files, editor backups and Emacs lock files (`#name#`).
fn is_ignored_file(name: &str) -> bool {
    name.starts_with('.') || name.ends_with('~') || (name.starts_with('#') && name.ends_with('#'))
}
