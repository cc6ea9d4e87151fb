use super::lcs::EditScript;
use super::types::DisplayLine;

/// Render an edit script as a single column, one line per op.
/// Each line's text starts with the marker of its kind.
pub fn format_unified(script: &EditScript<'_>) -> Vec<DisplayLine> {
    script
        .ops()
        .iter()
        .map(|op| DisplayLine::marked(op.kind(), script.line(op)))
        .collect()
}
