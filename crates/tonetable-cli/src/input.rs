//! Loading tone-map documents and config files from disk.

use std::path::Path;

use tonetable_core::{parse_tone_map, LoadError, ModuleSource, TableConfig};

use crate::options::module_name;

/// Recognized tone-map extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Load one module's tone map.
///
/// # Arguments
/// * `path` - Path to the tone-map JSON file
///
/// # Returns
/// * `Ok(ModuleSource)` - Module named after the file stem, with its raw tones
/// * `Err(LoadError)` - File read, JSON or shape error
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use tonetable_cli::input::load_module;
///
/// let module = load_module(Path::new("SC-55.json")).unwrap();
/// println!("{}: {} tones", module.name, module.tones.len());
/// ```
pub fn load_module(path: &Path) -> Result<ModuleSource, LoadError> {
    let content = read(path)?;
    let tones = parse_tone_map(path, &content)?;
    Ok(ModuleSource::new(module_name(path), tones))
}

/// Load a table config file.
pub fn load_config(path: &Path) -> Result<TableConfig, LoadError> {
    let content = read(path)?;
    TableConfig::from_json(path, &content)
}

/// Returns `true` if the file has a tone-map extension. Used only to warn
/// about likely mistakes; any file that parses is accepted.
pub fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| JSON_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
