use serde::{Deserialize, Serialize};

/// Row-level tally of one streaming pass over a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    /// Rows persisted.
    pub imported: usize,
    /// Rows that were empty or unreadable.
    pub skipped: usize,
    /// Data rows encountered, header excluded.
    pub total_rows: usize,
}

/// Outcome of one import run, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported_count: usize,
    pub skipped_count: usize,
    /// Data rows the source carried, header excluded.
    pub total_rows: usize,
    /// Stored positions before this run touched the table.
    pub existing_count_before: i64,
    /// Stored positions once the run finished.
    pub total_count_after: i64,
    /// Whether the run wiped the table before inserting.
    pub cleared_existing: bool,
}
