//! Table command implementation
//!
//! Loads every tone map, builds the tone index and writes the comparison
//! table. Nothing is written until every input has loaded and the whole
//! table has been rendered.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tonetable_core::{render_table, Filters, ModuleSource, TableStats, ToneIndex};

use crate::input::{has_json_extension, load_config, load_module};
use crate::options::{apply_directives, module_list, RenameDirective};

/// Everything the table command needs, as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Tone-map files in column order.
    pub files: Vec<PathBuf>,
    pub ignore_msb: Vec<u32>,
    pub renames: Vec<RenameDirective>,
    /// Optional JSON config; command-line directives win over it.
    pub config: Option<PathBuf>,
    /// Output file (default: stdout).
    pub output: Option<PathBuf>,
    /// Report progress and a summary on stderr.
    pub verbose: bool,
}

/// Run the table command
///
/// # Returns
/// Exit code: 0 success. Usage and load errors are returned as `Err`.
pub fn run(options: &TableOptions) -> Result<ExitCode> {
    let modules = module_list(&options.files)?;

    let mut filters = match &options.config {
        Some(path) => load_config(path)?.into_filters(),
        None => Filters::default(),
    };
    apply_directives(&mut filters, &options.ignore_msb, &options.renames);

    let sources = load_sources(&options.files, options.verbose)?;
    let index = ToneIndex::build(&sources, &filters);
    let table = render_table(&index, &modules, &filters.renames);
    let wikitext = table.to_wikitext();

    match &options.output {
        Some(path) => fs::write(path, &wikitext)
            .with_context(|| format!("Failed to write to: {}", path.display()))?,
        None => write_stdout(&wikitext).context("Failed to write table to stdout")?,
    }

    if options.verbose {
        print_summary(&table.stats, options.output.as_deref());
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads all inputs in order. The first failure aborts the run.
fn load_sources(files: &[PathBuf], verbose: bool) -> Result<Vec<ModuleSource>> {
    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        if verbose {
            eprintln!("{} {}", "Loading:".cyan().bold(), path.display());
            if !has_json_extension(path) {
                eprintln!("  {} not a .json file, parsing anyway", "!".yellow());
            }
        }

        let source = load_module(path)?;

        if verbose {
            eprintln!(
                "  {}",
                format!("{} tone(s) as '{}'", source.tones.len(), source.name).dimmed()
            );
        }
        sources.push(source);
    }
    Ok(sources)
}

fn write_stdout(text: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(text.as_bytes())?;
    lock.flush()
}

fn print_summary(stats: &TableStats, output: Option<&Path>) {
    let summary = format!(
        "{} module(s), {} program(s), {} row(s)",
        stats.modules, stats.programs, stats.rows
    );
    match output {
        Some(path) => eprintln!(
            "{} {} -> {}",
            "SUCCESS".green().bold(),
            summary,
            path.display()
        ),
        None => eprintln!("{} {}", "SUCCESS".green().bold(), summary),
    }

    if stats.conflict_cells > 0 {
        eprintln!(
            "  {} {} cell(s) in {} row(s)",
            "Conflicts:".red().bold(),
            stats.conflict_cells,
            stats.conflict_rows
        );
    } else {
        eprintln!("  {} none", "Conflicts:".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::parse_rename;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_module(dir: &Path, name: &str, tones: &[(u32, u32, &str)]) -> PathBuf {
        let entries: Vec<String> = tones
            .iter()
            .map(|(prog, bank, name)| {
                format!(
                    r#"{{"prog": {}, "bankM": {}, "bankL": 0, "toneRef": {{"name": "{}"}}}}"#,
                    prog, bank, name
                )
            })
            .collect();
        let path = dir.join(format!("{}.json", name));
        fs::write(&path, format!(r#"{{"toneMaps": [{}]}}"#, entries.join(","))).unwrap();
        path
    }

    #[test]
    fn test_run_writes_output_file() {
        let tmp = tempdir().unwrap();
        let a = write_module(tmp.path(), "A", &[(0, 0, "Piano 1"), (0, 127, "Piano")]);
        let b = write_module(tmp.path(), "B", &[(0, 0, "Piano1")]);
        let out = tmp.path().join("table.wiki");

        let options = TableOptions {
            files: vec![a, b],
            ignore_msb: vec![127],
            renames: vec![
                parse_rename("Piano 1:Piano").unwrap(),
                parse_rename("Piano1:Piano").unwrap(),
                parse_rename("B:Module B").unwrap(),
            ],
            output: Some(out.clone()),
            ..Default::default()
        };

        run(&options).unwrap();

        let table = fs::read_to_string(&out).unwrap();
        assert_eq!(
            table.lines().collect::<Vec<_>>(),
            vec![
                "{| class=\"wikitable\"",
                "! style=\"width: 1em;\" | Prog #",
                "! style=\"width: 1em;\" | Bank Select MSB",
                "! style=\"width: 6em;\" | A",
                "! style=\"width: 6em;\" | Module B",
                "|-",
                "| rowspan=\"1\" | 0",
                "|0",
                "| colspan=\"2\" | Piano",
                "|-",
                "|}",
            ]
        );
    }

    #[test]
    fn test_run_config_and_flags_combine() {
        let tmp = tempdir().unwrap();
        let a = write_module(tmp.path(), "A", &[(0, 0, "x"), (0, 8, "y"), (0, 16, "z")]);
        let config = tmp.path().join("config.json");
        fs::write(&config, r#"{"ignore_msb": [8], "rename": {"z": "from-config"}}"#).unwrap();
        let out = tmp.path().join("out.wiki");

        let options = TableOptions {
            files: vec![a],
            ignore_msb: vec![16],
            config: Some(config),
            output: Some(out.clone()),
            ..Default::default()
        };
        run(&options).unwrap();

        let table = fs::read_to_string(&out).unwrap();
        assert!(table.contains("| rowspan=\"1\" | 0"));
        assert!(!table.contains("|8\n"));
        assert!(!table.contains("|16\n"));
    }

    #[test]
    fn test_run_load_error_writes_nothing() {
        let tmp = tempdir().unwrap();
        let a = write_module(tmp.path(), "A", &[(0, 0, "Piano")]);
        let bad = tmp.path().join("B.json");
        fs::write(&bad, r#"{"name": "B"}"#).unwrap();
        let out = tmp.path().join("out.wiki");

        let options = TableOptions {
            files: vec![a, bad],
            output: Some(out.clone()),
            ..Default::default()
        };
        let err = run(&options).unwrap_err();
        assert!(err.to_string().contains("JSON format not as expected"));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_without_files_is_usage_error() {
        let err = run(&TableOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Please specify .json filenames");
    }
}
