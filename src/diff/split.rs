use super::lcs::EditScript;
use super::types::{EditOp, LineKind, SplitCell, SplitRow};

/// Render an edit script as side-by-side rows, in op order.
///
/// Replaced lines are not paired up: a remove and the add that replaces it
/// land on two separate single-sided rows.
pub fn format_split(script: &EditScript<'_>) -> Vec<SplitRow> {
    script
        .ops()
        .iter()
        .map(|op| {
            let cell = |kind| SplitCell {
                kind,
                text: script.line(op).to_string(),
            };
            match op {
                EditOp::Same(..) => SplitRow {
                    left: Some(cell(LineKind::Same)),
                    right: Some(cell(LineKind::Same)),
                },
                EditOp::Add(_) => SplitRow {
                    left: None,
                    right: Some(cell(LineKind::Add)),
                },
                EditOp::Remove(_) => SplitRow {
                    left: Some(cell(LineKind::Remove)),
                    right: None,
                },
            }
        })
        .collect()
}
