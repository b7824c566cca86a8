//! Comparison table rendering.
//!
//! Each (program, bank) pair becomes one table row with one column per
//! module. Neighbouring modules that assign the same tone (or that both lack
//! one) are merged into a single cell spanning those columns. A cell whose
//! tone differs from the tone in the next cell is highlighted as a conflict.
//! A missing tone is never a conflict, on either side.
//!
//! Rendering is split in two steps so the merge logic can be tested without
//! looking at markup:
//!
//! 1. [`build_rows`] walks the index and produces [`TableRow`]s of
//!    [`MergedCell`]s.
//! 2. [`render_table`] writes those rows as MediaWiki table markup.

use crate::filters::RenameMap;
use crate::index::{ModuleList, ToneIndex};

/// Shown in cells where the module has no tone.
pub const NO_DATA: &str = "\u{2014}";

/// Inline style for conflicting cells.
pub const CONFLICT_STYLE: &str = "background: red;";

/// One output cell covering `colspan` adjacent module columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedCell<'a> {
    pub colspan: usize,
    /// `None` when none of the covered modules has a tone here.
    pub tone: Option<&'a str>,
    /// Set when the next cell holds a different tone.
    pub conflict: bool,
}

impl<'a> MergedCell<'a> {
    /// Text shown in the cell.
    pub fn text(&self) -> &'a str {
        self.tone.unwrap_or(NO_DATA)
    }
}

/// Merges one row of per-module values into spanning cells.
///
/// Runs of exactly equal values collapse into one cell (absent equals
/// absent). A cell is flagged when it and the cell after it are both
/// present; the cell after the boundary is left alone, and the last cell is
/// never flagged.
pub fn merge_row<'a>(values: &[Option<&'a str>]) -> Vec<MergedCell<'a>> {
    let mut cells: Vec<MergedCell<'a>> = Vec::new();
    let mut i = 0;

    while i < values.len() {
        let tone = values[i];
        let mut colspan = 1;
        while i + colspan < values.len() && values[i + colspan] == tone {
            colspan += 1;
        }

        // Runs are maximal, so the next run always differs.
        let conflict = tone.is_some() && matches!(values.get(i + colspan), Some(Some(_)));

        cells.push(MergedCell {
            colspan,
            tone,
            conflict,
        });
        i += colspan;
    }

    cells
}

/// One bank row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub program: u32,
    pub bank_msb: u32,
    /// Set on the first bank row of a program: the number of rows the
    /// program cell spans. `None` on the following rows.
    pub program_rowspan: Option<usize>,
    pub cells: Vec<MergedCell<'a>>,
}

/// Walks the index in table order and merges every row.
///
/// Programs come in discovery order, banks ascending.
pub fn build_rows<'a>(index: &'a ToneIndex, modules: &ModuleList) -> Vec<TableRow<'a>> {
    let mut rows = Vec::with_capacity(index.row_count());

    for program in index.programs() {
        let rowspan = index.bank_count(program);
        for (n, (bank_msb, tones)) in index.banks(program).enumerate() {
            let values: Vec<Option<&'a str>> = modules
                .iter()
                .map(|module| tones.get(module).map(String::as_str))
                .collect();
            rows.push(TableRow {
                program,
                bank_msb,
                program_rowspan: (n == 0).then_some(rowspan),
                cells: merge_row(&values),
            });
        }
    }

    rows
}

/// Counts gathered while rendering, for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub modules: usize,
    pub programs: usize,
    pub rows: usize,
    pub cells: usize,
    pub conflict_cells: usize,
    /// Rows containing at least one conflict.
    pub conflict_rows: usize,
}

impl TableStats {
    fn collect(rows: &[TableRow<'_>], modules: usize, programs: usize) -> Self {
        let mut stats = TableStats {
            modules,
            programs,
            rows: rows.len(),
            ..Default::default()
        };
        for row in rows {
            let conflicts = row.cells.iter().filter(|c| c.conflict).count();
            stats.cells += row.cells.len();
            stats.conflict_cells += conflicts;
            if conflicts > 0 {
                stats.conflict_rows += 1;
            }
        }
        stats
    }
}

/// A fully rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// Markup lines, without line terminators.
    pub lines: Vec<String>,
    pub stats: TableStats,
}

impl RenderedTable {
    /// Joins the lines into the final document, one trailing newline.
    pub fn to_wikitext(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Renders the comparison table as MediaWiki markup.
///
/// The header holds the program and bank columns followed by one column per
/// module, with module names passed through `renames`.
pub fn render_table(index: &ToneIndex, modules: &ModuleList, renames: &RenameMap) -> RenderedTable {
    let rows = build_rows(index, modules);
    let mut lines = Vec::with_capacity(4 + modules.len() + rows.len() * (modules.len() + 3));

    lines.push("{| class=\"wikitable\"".to_string());
    lines.push("! style=\"width: 1em;\" | Prog #".to_string());
    lines.push("! style=\"width: 1em;\" | Bank Select MSB".to_string());
    for module in modules.iter() {
        lines.push(format!("! style=\"width: 6em;\" | {}", renames.apply(module)));
    }
    lines.push("|-".to_string());

    for row in &rows {
        if let Some(rowspan) = row.program_rowspan {
            lines.push(format!("| rowspan=\"{}\" | {}", rowspan, row.program));
        }
        lines.push(format!("|{}", row.bank_msb));
        for cell in &row.cells {
            lines.push(cell_line(cell));
        }
        lines.push("|-".to_string());
    }

    lines.push("|}".to_string());

    RenderedTable {
        stats: TableStats::collect(&rows, modules.len(), index.program_count()),
        lines,
    }
}

fn cell_line(cell: &MergedCell<'_>) -> String {
    if cell.conflict {
        format!(
            "| style=\"{}\" colspan=\"{}\" | {}",
            CONFLICT_STYLE,
            cell.colspan,
            cell.text()
        )
    } else {
        format!("| colspan=\"{}\" | {}", cell.colspan, cell.text())
    }
}
