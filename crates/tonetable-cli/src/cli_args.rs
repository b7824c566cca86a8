//! CLI argument definitions for the tonetable command-line interface.
//!
//! The `#[derive(Parser)]` type lives here, keeping `main.rs` focused on
//! dispatch and exit codes.
//!
//! Only `--`-prefixed arguments are options. clap would read `-SC55.json`
//! as a cluster of short flags, so [`normalize_args`] rewrites such
//! arguments into explicit relative paths before parsing.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tonetable_cli::commands::table::TableOptions;
use tonetable_cli::options::{parse_ignore_msb, parse_rename, RenameDirective};

/// Tonetable - compare synthesizer tone maps side by side
///
/// Reads one tone-map JSON file per module and prints a MediaWiki table with
/// one row per program/bank pair and one column per module. Adjacent modules
/// that agree share a cell; disagreements are highlighted.
#[derive(Parser, Debug)]
#[command(name = "tonetable")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Tone-map JSON files, one per module, in column order
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Drop every tone on this bank select MSB (repeatable)
    #[arg(long = "ignore-msb", value_name = "MSB", value_parser = parse_ignore_msb)]
    pub ignore_msb: Vec<u32>,

    /// Rename a tone or module name (repeatable)
    #[arg(long, value_name = "FROM:TO", value_parser = parse_rename)]
    pub rename: Vec<RenameDirective>,

    /// JSON config file with `ignore_msb` and `rename` entries
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub config: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Print progress and a conflict summary to stderr
    #[arg(long)]
    pub verbose: bool,

    // Long-only replacements for clap's -h/-V, which would shadow file names.
    /// Print help
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// Long options whose value may follow as a separate argument.
const VALUE_OPTIONS: &[&str] = &["--ignore-msb", "--rename", "--config", "--output"];

/// Rewrites single-dash arguments (`-SC55.json`) as `./-SC55.json` so clap
/// takes them as files. The module name, being the file stem, is unchanged.
///
/// The first argument is the binary name and passes through. Values of
/// [`VALUE_OPTIONS`] and everything after a bare `--` are left alone.
pub(crate) fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut escaped = false;
    let mut option_value = false;

    for arg in args {
        let (single_dash, takes_value, separator) = {
            let text = arg.to_string_lossy();
            (
                text.len() > 1 && text.starts_with('-') && !text.starts_with("--"),
                VALUE_OPTIONS.iter().any(|option| *option == text),
                text == "--",
            )
        };
        let is_file = single_dash && !escaped && !option_value;

        option_value = takes_value && !escaped;
        escaped = escaped || separator;

        if is_file {
            normalized.push(Path::new(".").join(&arg).into_os_string());
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

impl Cli {
    pub(crate) fn into_options(self) -> TableOptions {
        TableOptions {
            files: self.files,
            ignore_msb: self.ignore_msb,
            renames: self.rename,
            config: self.config,
            output: self.output,
            verbose: self.verbose,
        }
    }
}
