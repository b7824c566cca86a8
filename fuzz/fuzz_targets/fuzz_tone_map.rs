//! Feeds arbitrary bytes through document parsing, indexing and rendering.
//!
//! Parsing may fail, but nothing may panic, and every rendered row must
//! span exactly one column per module.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;
use tonetable_core::{
    build_rows, parse_tone_map, render_table, Filters, ModuleList, ModuleSource, ToneIndex,
};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tones) = parse_tone_map(Path::new("fuzz.json"), content) else {
        return;
    };

    // Same document twice, so rows have two columns to merge.
    let sources = vec![
        ModuleSource::new("A", tones.clone()),
        ModuleSource::new("B", tones),
    ];
    let mut modules = ModuleList::new();
    modules.push("A");
    modules.push("B");

    let filters = Filters::default();
    let index = ToneIndex::build(&sources, &filters);
    for row in build_rows(&index, &modules) {
        assert_eq!(row.cells.iter().map(|c| c.colspan).sum::<usize>(), 2);
        assert!(row.cells.iter().all(|c| !c.conflict));
    }
    let _ = render_table(&index, &modules, &filters.renames).to_wikitext();
});
