//! Optional table configuration file.
//!
//! Lets a maintainer keep long lists of ignored banks and renames next to the
//! data instead of on the command line:
//!
//! ```json
//! {
//!   "ignore_msb": [126, 127],
//!   "rename": { "Piano 1": "Piano", "SC-55mkII": "SC-55mk2" }
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LoadError;
use crate::filters::{Filters, IgnoreSet, RenameMap};

/// Deserialized content of a config file. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Bank select MSB values to drop.
    pub ignore_msb: Vec<u32>,
    /// `from -> to` substitutions for tone and module names.
    pub rename: BTreeMap<String, String>,
}

impl TableConfig {
    /// Parses config content. `path` is only used for error messages.
    pub fn from_json(path: &Path, content: &str) -> Result<Self, LoadError> {
        let config: TableConfig =
            serde_json::from_str(content).map_err(|source| LoadError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?;
        if let Some(from) = config.rename.keys().find(|k| k.is_empty()) {
            return Err(LoadError::Config {
                path: path.to_path_buf(),
                message: format!("rename source must not be empty (maps to '{}')", config.rename[from]),
            });
        }
        Ok(config)
    }

    /// Converts into filters. Command-line directives are applied on top.
    pub fn into_filters(self) -> Filters {
        Filters::new(
            self.ignore_msb.into_iter().collect::<IgnoreSet>(),
            self.rename.into_iter().collect::<RenameMap>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<TableConfig, LoadError> {
        TableConfig::from_json(Path::new("tonetable.json"), content)
    }

    #[test]
    fn test_full_config() {
        let config = parse(r#"{"ignore_msb": [127, 126], "rename": {"Piano 1": "Piano"}}"#).unwrap();
        let filters = config.into_filters();
        assert!(filters.ignore.contains(126));
        assert!(filters.ignore.contains(127));
        assert_eq!(filters.renames.apply("Piano 1"), "Piano");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse("{}").unwrap(), TableConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse(r#"{"ignore_lsb": [1]}"#).unwrap_err();
        match err {
            LoadError::JsonParse { source, .. } => {
                assert!(source.to_string().contains("ignore_lsb"));
            }
            other => panic!("expected JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_rename_source_rejected() {
        let err = parse(r#"{"rename": {"": "Piano"}}"#).unwrap_err();
        assert!(matches!(err, LoadError::Config { .. }));
    }
}
