/// Application name and metadata constants
pub const APP_NAME: &str = "paper-diff";

/// Unchanged lines kept around each change when a diff is collapsed
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Marker line inserted over a collapsed gap
pub const ELLIPSIS_TEXT: &str = "...";

// Markers embedded into unified display text
pub const ADD_MARKER: &str = "+ ";
pub const REMOVE_MARKER: &str = "- ";
pub const SAME_MARKER: &str = "  ";

/// Largest LCS table (original lines x revised lines) built before falling
/// back to the coarser Myers diff. Roughly 2000 x 2000 lines.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 4_000_000;

/// Number of edit scripts the diff cache keeps
pub const DEFAULT_CACHE_CAPACITY: usize = 32;
