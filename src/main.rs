//! tfsbom binary entry point.

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tfsbom::cli::args::{self, Args};
use tfsbom::cli::commands;
use tfsbom::constants;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse_from(args::normalize_legacy_flags(std::env::args_os()));
    init_tracing(args.verbose);

    commands::run(&args)
}

/// Logs go to stderr; stdout carries the summary and the success line.
/// `RUST_LOG` overrides the level chosen from `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(format!("{}=debug", constants::APP_NAME))
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
