//! Paper Diff library
//!
//! Line-based diffs for reviewing model-suggested file edits: an LCS
//! matcher, unified and split formatters, context collapsing, and the
//! suggestion/edited-file bookkeeping around them.

pub mod config;
pub mod constant;
pub mod diff;
pub mod render;
pub mod suggestion;
pub mod workspace;

pub use diff::{DiffEngine, DisplayLine, EditOp, LineKind, SplitRow};
pub use suggestion::{CodeSuggestion, Source, SuggestionStatus};
pub use workspace::{EditedFiles, FileStore, InMemoryFileStore};
