//! Command-line argument definitions.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::constants;

/// tfsbom - Software Bill of Materials for Terraform module calls
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print every module record before writing
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: csv, json, or xml (case-insensitive) [default: csv]
    #[arg(short, long, value_name = "FORMAT", env = constants::ENV_OUTPUT)]
    pub output: Option<String>,

    /// Configuration file [default: <config dir>/tfsbom/config.toml]
    #[arg(long, value_name = "FILE", env = constants::ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Terraform configuration directory to inspect
    pub config_path: PathBuf,

    /// File to write the SBOM to
    pub output_path: PathBuf,
}

/// Long options that may also be spelled with a single dash.
const LEGACY_LONG_FLAGS: [&str; 5] = ["output", "verbose", "config", "help", "version"];

/// Rewrites single-dash long options such as `-output json` or
/// `-output=json` to `--output`, leaving everything else untouched.
///
/// The first item is the program name and is never rewritten, nor is
/// anything after a `--` separator.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            let arg: OsString = arg.into();
            if index == 0 || positional_only {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                positional_only = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_legacy_long(rest) => {
                    OsString::from(format!("--{rest}"))
                }
                _ => arg,
            }
        })
        .collect()
}

fn is_legacy_long(rest: &str) -> bool {
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LEGACY_LONG_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_legacy_flags(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_normalize_single_dash_long_flags() {
        assert_eq!(
            normalize(&["tfsbom", "-output", "json", "-verbose", "dir", "out"]),
            vec!["tfsbom", "--output", "json", "--verbose", "dir", "out"]
        );
        assert_eq!(
            normalize(&["tfsbom", "-output=xml", "dir", "out"]),
            vec!["tfsbom", "--output=xml", "dir", "out"]
        );
    }

    #[test]
    fn test_normalize_leaves_short_and_double_dash_flags() {
        assert_eq!(
            normalize(&["tfsbom", "-v", "-o", "csv", "--output", "json", "dir", "out"]),
            vec!["tfsbom", "-v", "-o", "csv", "--output", "json", "dir", "out"]
        );
    }

    #[test]
    fn test_normalize_stops_at_separator() {
        assert_eq!(
            normalize(&["-output", "-output", "--", "-output", "out"]),
            vec!["-output", "--output", "--", "-output", "out"]
        );
    }

    #[test]
    fn test_normalize_ignores_unknown_words() {
        assert_eq!(
            normalize(&["tfsbom", "-outputs", "-json", "dir", "out"]),
            vec!["tfsbom", "-outputs", "-json", "dir", "out"]
        );
    }

    #[test]
    fn test_parse_positionals_and_defaults() {
        let args = Args::try_parse_from(["tfsbom", "./infra", "sbom.csv"]).unwrap();
        assert_eq!(args.config_path, PathBuf::from("./infra"));
        assert_eq!(args.output_path, PathBuf::from("sbom.csv"));
        assert!(!args.verbose);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_legacy_surface() {
        let argv = normalize_legacy_flags(["tfsbom", "-v", "-output", "JSON", "./infra", "out.json"]);
        let args = Args::try_parse_from(argv).unwrap();
        assert!(args.verbose);
        assert_eq!(args.output.as_deref(), Some("JSON"));
    }

    #[test]
    fn test_parse_requires_both_positionals() {
        assert!(Args::try_parse_from(["tfsbom"]).is_err());
        assert!(Args::try_parse_from(["tfsbom", "./infra"]).is_err());
    }
}
