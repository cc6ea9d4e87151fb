use crate::constant::{ADD_MARKER, ELLIPSIS_TEXT, REMOVE_MARKER, SAME_MARKER};
use serde::{Deserialize, Serialize};

/// One step of an edit script. Indices point into the split line sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    /// Line kept: (original index, revised index)
    Same(usize, usize),
    /// Line only in the revised text
    Add(usize),
    /// Line only in the original text
    Remove(usize),
}

impl EditOp {
    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Same(..))
    }

    pub fn original_index(&self) -> Option<usize> {
        match *self {
            EditOp::Same(original, _) | EditOp::Remove(original) => Some(original),
            EditOp::Add(_) => None,
        }
    }

    pub fn revised_index(&self) -> Option<usize> {
        match *self {
            EditOp::Same(_, revised) | EditOp::Add(revised) => Some(revised),
            EditOp::Remove(_) => None,
        }
    }

    pub fn kind(&self) -> LineKind {
        match self {
            EditOp::Same(..) => LineKind::Same,
            EditOp::Add(_) => LineKind::Add,
            EditOp::Remove(_) => LineKind::Remove,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Same,
    Add,
    Remove,
    Ellipsis,
}

impl LineKind {
    pub fn is_change(&self) -> bool {
        matches!(self, LineKind::Add | LineKind::Remove)
    }

    /// Marker embedded at the start of unified display text
    pub fn marker(&self) -> &'static str {
        match self {
            LineKind::Add => ADD_MARKER,
            LineKind::Remove => REMOVE_MARKER,
            LineKind::Same => SAME_MARKER,
            LineKind::Ellipsis => "",
        }
    }
}

/// A single row of the unified view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    pub kind: LineKind,
    pub text: String,
}

impl DisplayLine {
    /// Build a line whose text carries the marker of its kind
    pub fn marked(kind: LineKind, line: &str) -> Self {
        Self {
            kind,
            text: format!("{}{}", kind.marker(), line),
        }
    }

    pub fn ellipsis() -> Self {
        Self {
            kind: LineKind::Ellipsis,
            text: ELLIPSIS_TEXT.to_string(),
        }
    }
}

/// One side of a split row. Text is the raw line, without marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCell {
    pub kind: LineKind,
    pub text: String,
}

/// A row of the side-by-side view. Additions only fill `right`,
/// removals only fill `left`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<SplitCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<SplitCell>,
}

/// Line counts of an edit script
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added_count: usize,
    pub removed_count: usize,
    pub unchanged_count: usize,
}

impl DiffStats {
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            match op {
                EditOp::Same(..) => stats.unchanged_count += 1,
                EditOp::Add(_) => stats.added_count += 1,
                EditOp::Remove(_) => stats.removed_count += 1,
            }
        }
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.added_count + self.removed_count > 0
    }
}
