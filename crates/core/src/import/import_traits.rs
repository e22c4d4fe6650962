use std::path::Path;

use async_trait::async_trait;

use super::import_model::ImportSummary;
use crate::errors::Result;

/// Behavioural contract for loading position source files.
#[async_trait]
pub trait ImportServiceTrait: Send + Sync {
    /// Imports every data row of the file at `source_path`, optionally
    /// wiping stored positions first.
    async fn import_positions(
        &self,
        source_path: &Path,
        clear_existing: bool,
    ) -> Result<ImportSummary>;
}
