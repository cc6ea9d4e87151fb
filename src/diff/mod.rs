//! Line-based diff engine
//!
//! One LCS matcher produces an edit script; the unified and split
//! formatters render it and the collapser trims unified output down to the
//! lines around each change.

pub mod cache;
pub mod collapse;
pub mod engine;
pub mod lcs;
pub mod split;
pub mod types;
pub mod unified;

pub use cache::DiffCache;
pub use collapse::collapse_context;
pub use engine::DiffEngine;
pub use lcs::{EditScript, edit_script, split_lines};
pub use split::format_split;
pub use types::{DiffStats, DisplayLine, EditOp, LineKind, SplitCell, SplitRow};
pub use unified::format_unified;
