//! Tonetable core library
//!
//! Builds cross-module comparison tables from synthesizer tone maps. Each
//! input document lists which tone a module assigns to every
//! (program number, bank select MSB) pair; the table lines the modules up
//! side by side and highlights where they disagree.
//!
//! # Pipeline
//!
//! 1. **Parse**: [`document::parse_tone_map`] turns a JSON document into
//!    [`RawTone`]s.
//! 2. **Index**: [`ToneIndex::build`] drops ignored banks, trims and renames
//!    tone names and nests them program -> bank -> module.
//! 3. **Render**: [`render_table`] merges adjacent agreeing columns and writes
//!    MediaWiki markup.
//!
//! # Example
//!
//! ```
//! use tonetable_core::{render_table, Filters, ModuleList, ModuleSource, RawTone, ToneIndex};
//!
//! let piano = |name: &str| vec![RawTone { program: 0, bank_msb: 0, name: name.to_string() }];
//! let sources = vec![
//!     ModuleSource::new("SC-55", piano("Piano 1")),
//!     ModuleSource::new("SC-88", piano("Piano 1")),
//! ];
//!
//! let mut modules = ModuleList::new();
//! for source in &sources {
//!     modules.push(source.name.clone());
//! }
//!
//! let filters = Filters::default();
//! let index = ToneIndex::build(&sources, &filters);
//! let table = render_table(&index, &modules, &filters.renames);
//!
//! assert!(table.to_wikitext().contains("| colspan=\"2\" | Piano 1"));
//! assert_eq!(table.stats.conflict_cells, 0);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Load error type
//! - [`document`]: Tone-map JSON parsing
//! - [`filters`]: Ignored banks and renames
//! - [`config`]: Optional JSON config file
//! - [`index`]: The tone index and module list
//! - [`render`]: Row merging and wikitext output

pub mod config;
pub mod document;
pub mod error;
pub mod filters;
pub mod index;
pub mod render;

pub use config::TableConfig;
pub use document::{parse_number, parse_tone_map, RawTone};
pub use error::LoadError;
pub use filters::{Filters, IgnoreSet, RenameMap};
pub use index::{ModuleList, ModuleSource, ToneIndex, ToneRecord};
pub use render::{
    build_rows, merge_row, render_table, MergedCell, RenderedTable, TableRow, TableStats,
};
