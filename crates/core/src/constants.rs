/// Number of position records flushed to the database per batch insert
/// during an import run.
pub const IMPORT_BATCH_SIZE: usize = 1000;

/// Number of columns in the fixed source layout.
pub const SOURCE_COLUMN_COUNT: usize = 57;

/// Currency used for the FX-converted account total.
pub const REFERENCE_CURRENCY: &str = "CHF";

/// Default page size for paginated position listings.
pub const DEFAULT_PAGE_SIZE: i64 = 20;
