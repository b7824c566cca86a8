//! Tonetable CLI - cross-module tone map comparison tables
//!
//! Usage:
//!   tonetable [--ignore-msb=MSB]... [--rename=FROM:TO]... FILES...

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use tonetable_cli::commands;

mod cli_args;

use cli_args::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(cli_args::normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout. Usage errors
            // exit 1 rather than clap's 2, so clap's own exit is bypassed; if
            // printing fails there is no stream left to report it on.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match commands::table::run(&cli.into_options()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
