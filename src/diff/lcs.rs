//! Longest-common-subsequence line matcher
//!
//! Builds the `(n + 1) x (m + 1)` LCS table over two line sequences and walks
//! it backwards into an ordered edit script. Time and space are O(n * m).

use super::types::{DiffStats, EditOp};

/// Split a text blob into lines on `\n`, without trimming.
///
/// The empty text has no lines at all, so a pure insertion diffs to adds
/// only. Any other text keeps plain split semantics: `"a\n"` is `["a", ""]`.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// `table[i][j]` is the LCS length of `original[..i]` and `revised[..j]`
pub fn lcs_table<T: PartialEq>(original: &[T], revised: &[T]) -> Vec<Vec<usize>> {
    let n = original.len();
    let m = revised.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if original[i - 1] == revised[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    dp
}

/// Compute the edit script between two line sequences.
///
/// Backtracks from `(n, m)`; on a tie the add is taken first, which keeps the
/// latest possible match for repeated lines. Within each run of changed
/// lines, adds are then moved ahead of removes, e.g. `"a"` to `"b"` is
/// `[Add(0), Remove(0)]`.
pub fn edit_script_lines<T: PartialEq>(original: &[T], revised: &[T]) -> Vec<EditOp> {
    let dp = lcs_table(original, revised);
    let mut ops = Vec::with_capacity(original.len() + revised.len());
    let mut i = original.len();
    let mut j = revised.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == revised[j - 1] {
            ops.push(EditOp::Same(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            ops.push(EditOp::Add(j - 1));
            j -= 1;
        } else if i > 0 && (j == 0 || dp[i][j - 1] < dp[i - 1][j]) {
            ops.push(EditOp::Remove(i - 1));
            i -= 1;
        } else {
            break;
        }
    }

    ops.reverse();
    adds_before_removes(&mut ops);
    ops
}

/// Stable reorder of every run between two `Same` ops so adds lead.
/// Each side keeps its own order, so the script still replays both inputs.
pub(crate) fn adds_before_removes(ops: &mut [EditOp]) {
    for run in ops.split_mut(|op| !op.is_change()) {
        run.sort_by_key(|op| matches!(op, EditOp::Remove(_)));
    }
}

/// Compute the edit script between two text blobs
pub fn edit_script(original: &str, revised: &str) -> Vec<EditOp> {
    edit_script_lines(&split_lines(original), &split_lines(revised))
}

/// An edit script together with the line sequences it indexes into
#[derive(Debug, Clone)]
pub struct EditScript<'a> {
    original: Vec<&'a str>,
    revised: Vec<&'a str>,
    ops: Vec<EditOp>,
}

impl<'a> EditScript<'a> {
    /// Run the LCS matcher over both texts
    pub fn compute(original: &'a str, revised: &'a str) -> Self {
        let original = split_lines(original);
        let revised = split_lines(revised);
        let ops = edit_script_lines(&original, &revised);
        Self {
            original,
            revised,
            ops,
        }
    }

    /// Pair already computed ops with the texts they were computed from.
    /// The ops must index into `split_lines` of these same texts.
    pub(crate) fn from_ops(original: &'a str, revised: &'a str, ops: Vec<EditOp>) -> Self {
        Self {
            original: split_lines(original),
            revised: split_lines(revised),
            ops,
        }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }

    pub fn original_lines(&self) -> &[&'a str] {
        &self.original
    }

    pub fn revised_lines(&self) -> &[&'a str] {
        &self.revised
    }

    /// Text of the line an op refers to. `Same` and `Remove` read the
    /// original side, `Add` reads the revised side.
    pub fn line(&self, op: &EditOp) -> &'a str {
        match *op {
            EditOp::Same(original, _) | EditOp::Remove(original) => self.original[original],
            EditOp::Add(revised) => self.revised[revised],
        }
    }

    /// Replay `Same` and `Remove` ops
    pub fn replay_original(&self) -> Vec<&'a str> {
        self.ops
            .iter()
            .filter_map(|op| op.original_index())
            .map(|index| self.original[index])
            .collect()
    }

    /// Replay `Same` and `Add` ops
    pub fn replay_revised(&self) -> Vec<&'a str> {
        self.ops
            .iter()
            .filter_map(|op| op.revised_index())
            .map(|index| self.revised[index])
            .collect()
    }

    /// Number of retained common lines
    pub fn common_len(&self) -> usize {
        self.ops.iter().filter(|op| !op.is_change()).count()
    }

    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| !op.is_change())
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats::from_ops(&self.ops)
    }

    /// Check whether some added or removed line has non-blank content
    pub fn has_meaningful_changes(&self) -> bool {
        self.ops
            .iter()
            .any(|op| op.is_change() && !self.line(op).trim().is_empty())
    }
}
