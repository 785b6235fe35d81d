//! CLI command execution.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::debug;

use super::args::Args;
use super::summary;
use crate::{config, constants, emit, sbom};

/// Runs one SBOM generation: resolve settings, inspect, optionally print, write.
///
/// The output format is resolved first so an invalid format never reaches
/// the output file.
///
/// # Errors
///
/// Returns an error for an invalid configuration or output format, a
/// Terraform directory that cannot be loaded, or an output file that cannot
/// be written. Each is fatal to the run.
pub fn run(args: &Args) -> Result<()> {
    let file_config = config::load(args.config.as_deref())?;
    let settings = config::resolve(args.output.as_deref(), args.verbose, &file_config)?;
    debug!(format = %settings.format, verbose = settings.verbose, "resolved settings");

    let sbom = sbom::generate_sbom(&args.config_path).wrap_err(constants::CLI_MSG_GENERATE_FAILED)?;

    if settings.verbose {
        summary::print(&sbom);
    }

    emit::write_sbom(&sbom, &args.output_path, settings.format)
        .wrap_err(constants::CLI_MSG_WRITE_FAILED)?;

    println!(
        "{}{}",
        constants::CLI_MSG_WRITE_SUCCESS,
        args.output_path.display()
    );
    Ok(())
}
