//! The tone index: program -> bank select MSB -> module -> tone name.
//!
//! Programs iterate in the order they were first seen across all inputs.
//! Banks within a program iterate in ascending numeric order. The index is
//! built in one forward pass by [`ToneIndex::build`] and only read afterwards.

use std::collections::{BTreeMap, HashMap};

use crate::document::RawTone;
use crate::filters::Filters;

/// The tones loaded from one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    /// Module name, derived from the file name.
    pub name: String,
    /// Raw tones in document order.
    pub tones: Vec<RawTone>,
}

impl ModuleSource {
    pub fn new(name: impl Into<String>, tones: Vec<RawTone>) -> Self {
        Self {
            name: name.into(),
            tones,
        }
    }
}

/// A normalized tone assignment, ready to be indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneRecord {
    pub program: u32,
    pub bank_msb: u32,
    pub module: String,
    /// Trimmed and renamed tone name.
    pub tone_name: String,
}

impl ToneRecord {
    /// Applies `filters` to a raw tone. Returns `None` for ignored banks.
    pub fn from_raw(module: &str, raw: &RawTone, filters: &Filters) -> Option<Self> {
        if filters.ignore.contains(raw.bank_msb) {
            return None;
        }
        Some(Self {
            program: raw.program,
            bank_msb: raw.bank_msb,
            module: module.to_string(),
            tone_name: filters.tone_name(&raw.name),
        })
    }
}

/// Module names in input order. This fixes the table's column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleList {
    names: Vec<String>,
}

impl ModuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a module. Returns `false` (and leaves the list unchanged) if
    /// the name is already present.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Tone names per module for one (program, bank) pair.
pub type ModuleTones = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProgramEntry {
    program: u32,
    banks: BTreeMap<u32, ModuleTones>,
}

/// Nested program -> bank -> module -> tone name mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToneIndex {
    programs: Vec<ProgramEntry>,
    positions: HashMap<u32, usize>,
}

impl ToneIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from loaded modules, in module order then document
    /// order. Ignored banks are skipped; a later tone for the same
    /// (program, bank, module) overwrites an earlier one.
    pub fn build(sources: &[ModuleSource], filters: &Filters) -> Self {
        let mut index = Self::new();
        for source in sources {
            for raw in &source.tones {
                if let Some(record) = ToneRecord::from_raw(&source.name, raw, filters) {
                    index.insert(record);
                }
            }
        }
        index
    }

    /// Stores a record, overwriting any previous name for the same key.
    pub fn insert(&mut self, record: ToneRecord) {
        let slot = match self.positions.get(&record.program) {
            Some(&pos) => pos,
            None => {
                self.programs.push(ProgramEntry {
                    program: record.program,
                    banks: BTreeMap::new(),
                });
                let pos = self.programs.len() - 1;
                self.positions.insert(record.program, pos);
                pos
            }
        };
        self.programs[slot]
            .banks
            .entry(record.bank_msb)
            .or_default()
            .insert(record.module, record.tone_name);
    }

    /// Program numbers in discovery order.
    pub fn programs(&self) -> impl Iterator<Item = u32> + '_ {
        self.programs.iter().map(|entry| entry.program)
    }

    /// Banks of `program` in ascending order, with their module tones.
    pub fn banks(&self, program: u32) -> impl Iterator<Item = (u32, &ModuleTones)> + '_ {
        self.positions
            .get(&program)
            .map(|&pos| &self.programs[pos].banks)
            .into_iter()
            .flat_map(|banks| banks.iter().map(|(&bank, tones)| (bank, tones)))
    }

    /// Number of distinct banks recorded for `program`.
    pub fn bank_count(&self, program: u32) -> usize {
        self.positions
            .get(&program)
            .map_or(0, |&pos| self.programs[pos].banks.len())
    }

    /// Tone name for one cell, if the module defines it.
    pub fn tone(&self, program: u32, bank_msb: u32, module: &str) -> Option<&str> {
        let pos = *self.positions.get(&program)?;
        self.programs[pos]
            .banks
            .get(&bank_msb)?
            .get(module)
            .map(String::as_str)
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Total number of (program, bank) rows.
    pub fn row_count(&self) -> usize {
        self.programs.iter().map(|entry| entry.banks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
