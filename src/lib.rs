//! tfsbom - Software Bill of Materials for Terraform module calls.
//!
//! Inspects a Terraform configuration directory, lists the module calls it
//! declares with an inferred version for each, and writes the result as CSV,
//! JSON, or XML.
//!
//! ```no_run
//! use std::path::Path;
//! use tfsbom::{generate_sbom, write_sbom, OutputFormat};
//!
//! let sbom = generate_sbom(Path::new("./infra"))?;
//! write_sbom(&sbom, Path::new("sbom.json"), OutputFormat::Json)?;
//! # Ok::<(), tfsbom::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod emit;
pub mod error;
pub mod sbom;
pub mod terraform;

pub use emit::{write_sbom, OutputFormat};
pub use error::{Error, Result};
pub use sbom::{extract_version, generate_sbom, ModuleRecord, Sbom};
