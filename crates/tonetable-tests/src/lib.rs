//! Test helpers for tonetable integration tests.
//!
//! [`ToneMapFixture`] writes tone-map documents into a temporary directory in
//! the same shape the tone-browser project publishes.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of tone-map files.
pub struct ToneMapFixture {
    dir: TempDir,
}

impl ToneMapFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `<module>.json` with one entry per `(prog, bankM, name)`.
    pub fn add_module(&self, module: &str, tones: &[(u32, u32, &str)]) -> PathBuf {
        let entries: Vec<Value> = tones
            .iter()
            .map(|&(prog, bank, name)| tone_entry(prog, bank, name))
            .collect();
        self.add_raw(
            &format!("{}.json", module),
            &json!({ "name": module, "toneMaps": entries }),
        )
    }

    /// Writes an arbitrary JSON document.
    pub fn add_raw(&self, file_name: &str, document: &Value) -> PathBuf {
        let path = self.dir.path().join(file_name);
        fs::write(&path, serde_json::to_string_pretty(document).unwrap())
            .expect("failed to write fixture");
        path
    }

    /// Path of a file that does not exist.
    pub fn missing(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }
}

impl Default for ToneMapFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One `toneMaps` entry.
pub fn tone_entry(prog: u32, bank: u32, name: &str) -> Value {
    json!({
        "prog": prog,
        "bankM": bank,
        "bankL": 0,
        "toneRef": { "id": format!("{}-{}", prog, bank), "name": name }
    })
}
