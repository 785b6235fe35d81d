//! CSV output.
//!
//! Rows are `Config Path, Module Name, Source, Version`. The file is opened
//! for appending; the header is written only when this call created the file,
//! so repeated runs against one path accumulate rows under a single header.
//! An existing file's first line is never inspected or corrected.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::constants;
use crate::error::{Error, IoOperation, Result};
use crate::sbom::Sbom;

/// Appends `sbom` to the CSV file at `path`, creating it with a header if needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or a row cannot be written.
pub fn write(sbom: &Sbom, path: &Path) -> Result<()> {
    let (file, created) = open_for_append(path)?;

    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(file);

    let write_err = |e: ::csv::Error| Error::io(IoOperation::Write, path, e.into());

    if created {
        writer
            .write_record(constants::CSV_HEADER)
            .map_err(write_err)?;
    }

    for record in sbom.modules() {
        writer
            .write_record([
                &record.config_path,
                &record.name,
                &record.source,
                &record.version,
            ])
            .map_err(write_err)?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(IoOperation::Write, path, e))?;
    Ok(())
}

/// Opens `path` for appending; the flag reports whether the file was created.
///
/// Creation is attempted exclusively first, so "created" never races with a
/// concurrent creator of the same path.
fn open_for_append(path: &Path) -> Result<(File, bool)> {
    match OpenOptions::new().append(true).create_new(true).open(path) {
        Ok(file) => Ok((file, true)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => OpenOptions::new()
            .append(true)
            .open(path)
            .map(|file| (file, false))
            .map_err(|e| Error::io(IoOperation::Open, path, e)),
        Err(e) => Err(Error::io(IoOperation::Create, path, e)),
    }
}
