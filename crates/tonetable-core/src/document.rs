//! Tone-map document parsing.
//!
//! A tone-map document is the per-module JSON published by the tone-browser
//! project. Only a small part of it matters here:
//!
//! ```json
//! {
//!   "toneMaps": [
//!     { "prog": 0, "bankM": 0, "bankL": 0, "toneRef": { "name": "Piano 1" } }
//!   ]
//! }
//! ```
//!
//! The shape is checked once, up front. Entries are mapped onto [`RawTone`]
//! and any missing or mistyped field fails the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

use crate::error::LoadError;

/// Name of the collection field holding the tone-map entries.
pub const TONE_MAPS_FIELD: &str = "toneMaps";

/// One program/bank assignment as read from a document, before trimming and
/// renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTone {
    /// Program change number.
    pub program: u32,
    /// Bank select MSB (CC#0).
    pub bank_msb: u32,
    /// Tone name exactly as it appears in the document.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ToneMapEntry {
    #[serde(deserialize_with = "de_number")]
    prog: u32,
    #[serde(rename = "bankM", deserialize_with = "de_number")]
    bank_msb: u32,
    #[serde(rename = "toneRef")]
    tone_ref: ToneRef,
}

#[derive(Debug, Deserialize)]
struct ToneRef {
    name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrDigits {
    Number(u32),
    Digits(String),
}

/// Accepts `8` as well as `"8"` or `"008"`.
fn de_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrDigits::deserialize(deserializer)? {
        NumberOrDigits::Number(n) => Ok(n),
        NumberOrDigits::Digits(s) => parse_number(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a non-negative integer, got '{}'", s))
        }),
    }
}

/// Parses a program or bank number written as decimal digits.
///
/// Surrounding whitespace and leading zeros are accepted, so `"008"` and
/// `"8"` name the same bank.
pub fn parse_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses the content of a tone-map document.
///
/// `path` is only used for error messages.
pub fn parse_tone_map(path: &Path, content: &str) -> Result<Vec<RawTone>, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|source| LoadError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = value
        .get(TONE_MAPS_FIELD)
        .ok_or_else(|| LoadError::shape(path, format!("missing '{}' field", TONE_MAPS_FIELD)))?
        .as_array()
        .ok_or_else(|| LoadError::shape(path, format!("'{}' is not an array", TONE_MAPS_FIELD)))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry = ToneMapEntry::deserialize(entry).map_err(|e| {
                LoadError::shape(path, format!("{}[{}]: {}", TONE_MAPS_FIELD, i, e))
            })?;
            Ok(RawTone {
                program: entry.prog,
                bank_msb: entry.bank_msb,
                name: entry.tone_ref.name,
            })
        })
        .collect()
}
