//! Plain-text rendering of diff views
//!
//! Mirrors how the views lay out a preformatted block: unified lines print
//! their text as is, split rows print `- ` on the left column, `+ ` on the
//! right column and a single space for an empty side.

use crate::constant::{ADD_MARKER, REMOVE_MARKER};
use crate::diff::{DiffStats, DisplayLine, SplitCell, SplitRow};

const COLUMN_SEPARATOR: &str = " | ";

pub fn render_unified(lines: &[DisplayLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn side(cell: Option<&SplitCell>, marker: &str) -> String {
    match cell {
        Some(cell) => format!("{}{}", marker, cell.text),
        None => " ".to_string(),
    }
}

/// Lay split rows out as two columns, the left one padded to `width` chars.
/// Longer left cells are not truncated.
pub fn render_split(rows: &[SplitRow], width: usize) -> String {
    rows.iter()
        .map(|row| {
            let left = side(row.left.as_ref(), REMOVE_MARKER);
            let right = side(row.right.as_ref(), ADD_MARKER);
            format!("{:<width$}{}{}", left, COLUMN_SEPARATOR, right, width = width)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Widest left cell, used to size the left column
pub fn left_column_width(rows: &[SplitRow]) -> usize {
    rows.iter()
        .map(|row| side(row.left.as_ref(), REMOVE_MARKER).chars().count())
        .max()
        .unwrap_or(0)
}

/// Short summary such as `+2 -1`
pub fn render_stats(stats: &DiffStats) -> String {
    format!("+{} -{}", stats.added_count, stats.removed_count)
}
