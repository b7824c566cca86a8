//! Record filters applied while indexing: ignored banks and name renames.

use std::collections::{BTreeSet, HashMap};

/// Bank select MSB values whose tones are dropped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    banks: BTreeSet<u32>,
}

impl IgnoreSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bank MSB. Returns `false` if it was already present.
    pub fn insert(&mut self, bank_msb: u32) -> bool {
        self.banks.insert(bank_msb)
    }

    /// Returns `true` if tones on this bank should be skipped.
    pub fn contains(&self, bank_msb: u32) -> bool {
        self.banks.contains(&bank_msb)
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }
}

impl FromIterator<u32> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            banks: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for IgnoreSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.banks.extend(iter);
    }
}

/// Name substitutions shared by tone names and module names.
///
/// A lookup is a single step: with `A -> B` and `B -> C`, `A` becomes `B`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMap {
    names: HashMap<String, String>,
}

impl RenameMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the substitution for `from`.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.names.insert(from.into(), to.into());
    }

    /// Returns the replacement for `name`, or `name` itself.
    pub fn apply<'a>(&'a self, name: &'a str) -> &'a str {
        self.names.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenameMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = RenameMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for RenameMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.insert(from, to);
        }
    }
}

/// The filters the index builder applies to every raw tone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub ignore: IgnoreSet,
    pub renames: RenameMap,
}

impl Filters {
    pub fn new(ignore: IgnoreSet, renames: RenameMap) -> Self {
        Self { ignore, renames }
    }

    /// Normalizes a raw tone name: trim, then rename.
    pub fn tone_name(&self, raw: &str) -> String {
        self.renames.apply(raw.trim()).to_string()
    }
}
