//! Command-line directives and usage errors.
//!
//! The parsers here double as clap value parsers, so a malformed
//! `--rename` or `--ignore-msb` is rejected while arguments are parsed.

use std::path::{Path, PathBuf};
use thiserror::Error;

use tonetable_core::{parse_number, Filters, ModuleList};

/// Errors caused by how the tool was invoked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Please specify .json filenames")]
    NoInputFiles,

    #[error("invalid rename '{0}': expected FROM:TO")]
    InvalidRename(String),

    #[error("invalid bank select MSB '{0}': expected a non-negative integer")]
    InvalidIgnoreMsb(String),

    /// Two inputs map to the same module column.
    #[error("module '{}' given twice ('{}' and '{}')", .module, .first.display(), .second.display())]
    DuplicateModule {
        module: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// A `--rename=FROM:TO` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDirective {
    pub from: String,
    pub to: String,
}

/// Parses `FROM:TO`, splitting at the first colon.
///
/// `TO` may itself contain colons or be empty; `FROM` must not be empty.
pub fn parse_rename(arg: &str) -> Result<RenameDirective, UsageError> {
    match arg.split_once(':') {
        Some((from, to)) if !from.is_empty() => Ok(RenameDirective {
            from: from.to_string(),
            to: to.to_string(),
        }),
        _ => Err(UsageError::InvalidRename(arg.to_string())),
    }
}

/// Parses an ignored bank MSB. `"008"` and `"8"` are the same bank.
pub fn parse_ignore_msb(arg: &str) -> Result<u32, UsageError> {
    parse_number(arg).ok_or_else(|| UsageError::InvalidIgnoreMsb(arg.to_string()))
}

/// Applies command-line directives on top of `filters` (usually the config
/// file's). Later renames replace earlier ones.
pub fn apply_directives(filters: &mut Filters, ignore_msb: &[u32], renames: &[RenameDirective]) {
    filters.ignore.extend(ignore_msb.iter().copied());
    filters
        .renames
        .extend(renames.iter().map(|r| (r.from.as_str(), r.to.as_str())));
}

/// Module name for an input file: the file name without its extension.
pub fn module_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Derives the column order from the input files, rejecting inputs that
/// would share a column.
pub fn module_list(files: &[PathBuf]) -> Result<ModuleList, UsageError> {
    if files.is_empty() {
        return Err(UsageError::NoInputFiles);
    }

    let mut modules = ModuleList::new();
    for (i, file) in files.iter().enumerate() {
        let name = module_name(file);
        if !modules.push(name.clone()) {
            let first = files[..i]
                .iter()
                .find(|f| module_name(f) == name)
                .cloned()
                .unwrap_or_default();
            return Err(UsageError::DuplicateModule {
                module: name,
                first,
                second: file.clone(),
            });
        }
    }
    Ok(modules)
}
