use super::collapse::collapse_context;
use super::lcs::{EditScript, adds_before_removes, split_lines};
use super::split::format_split;
use super::types::{DiffStats, DisplayLine, EditOp, SplitRow};
use super::unified::format_unified;
use crate::constant::{DEFAULT_CONTEXT_LINES, DEFAULT_MAX_TABLE_CELLS};
use similar::{Algorithm, ChangeTag, TextDiff};
use tracing::{debug, warn};

/// Entry point shared by the suggestion viewer and the diff views.
///
/// Every view runs the same matcher; only the formatting differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffEngine {
    context_lines: usize,
    max_table_cells: usize,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl DiffEngine {
    pub fn new(context_lines: usize, max_table_cells: usize) -> Self {
        Self {
            context_lines,
            max_table_cells,
        }
    }

    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    /// `0` lifts the ceiling entirely
    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    pub fn max_table_cells(&self) -> usize {
        self.max_table_cells
    }

    /// Whether a pair of texts would skip the LCS table
    pub fn exceeds_ceiling(&self, original_lines: usize, revised_lines: usize) -> bool {
        self.max_table_cells > 0
            && original_lines.saturating_mul(revised_lines) > self.max_table_cells
    }

    /// Compute the edit script for two texts.
    ///
    /// Inputs past the table ceiling get a Myers diff instead. It still
    /// replays to both inputs and lists adds first within a changed block,
    /// but repeated lines may be matched differently.
    pub fn edit_script<'a>(&self, original: &'a str, revised: &'a str) -> EditScript<'a> {
        let original_len = split_lines(original).len();
        let revised_len = split_lines(revised).len();

        if self.exceeds_ceiling(original_len, revised_len) {
            warn!(
                "Diff input too large for LCS ({} x {} lines), using Myers diff",
                original_len, revised_len
            );
            let ops = myers_ops(original, revised);
            return EditScript::from_ops(original, revised, ops);
        }

        debug!("Computing LCS diff over {} x {} lines", original_len, revised_len);
        EditScript::compute(original, revised)
    }

    /// Full single-column diff
    pub fn unified(&self, original: &str, revised: &str) -> Vec<DisplayLine> {
        format_unified(&self.edit_script(original, revised))
    }

    /// Side-by-side rows
    pub fn split(&self, original: &str, revised: &str) -> Vec<SplitRow> {
        format_split(&self.edit_script(original, revised))
    }

    /// Single-column diff trimmed to the context window
    pub fn compact(&self, original: &str, revised: &str) -> Vec<DisplayLine> {
        self.collapse(&self.edit_script(original, revised))
    }

    /// Collapse an already computed script with this engine's window
    pub fn collapse(&self, script: &EditScript<'_>) -> Vec<DisplayLine> {
        collapse_context(&format_unified(script), self.context_lines)
    }

    /// Diff shown under an edit suggestion. Identical texts have nothing
    /// to show and yield an empty list.
    pub fn suggestion(&self, original: &str, suggested: &str) -> Vec<DisplayLine> {
        if original == suggested {
            return Vec::new();
        }
        self.compact(original, suggested)
    }

    pub fn stats(&self, original: &str, revised: &str) -> DiffStats {
        self.edit_script(original, revised).stats()
    }
}

fn myers_ops(original: &str, revised: &str) -> Vec<EditOp> {
    let original_lines = split_lines(original);
    let revised_lines = split_lines(revised);
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(original_lines.as_slice(), revised_lines.as_slice());

    let mut ops: Vec<EditOp> = diff
        .iter_all_changes()
        .filter_map(
            |change| match (change.tag(), change.old_index(), change.new_index()) {
                (ChangeTag::Equal, Some(old), Some(new)) => Some(EditOp::Same(old, new)),
                (ChangeTag::Delete, Some(old), _) => Some(EditOp::Remove(old)),
                (ChangeTag::Insert, _, Some(new)) => Some(EditOp::Add(new)),
                _ => None,
            },
        )
        .collect();
    adds_before_removes(&mut ops);
    ops
}
