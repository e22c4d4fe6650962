use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use uuid::Uuid;

use super::columns::map_row;
use super::import_errors::ImportError;
use super::import_model::{ImportResult, ImportSummary};
use super::import_traits::ImportServiceTrait;
use super::sheet::SheetReader;
use crate::constants::IMPORT_BATCH_SIZE;
use crate::db::DbPool;
use crate::errors::Result;
use crate::positions::{NewPosition, PositionRepository};

/// Loads position source files into the store.
///
/// Reads are streamed and rows are persisted in fixed-size batches, so
/// the run never holds more than one batch in memory. A row that cannot
/// be read is logged and skipped; only an unreadable source fails the run.
pub struct ImportService {
    repository: Arc<PositionRepository>,
}

struct RunCounters {
    imported: usize,
    skipped: usize,
    data_rows: usize,
}

impl ImportService {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ImportService {
            repository: Arc::new(PositionRepository::new(pool)),
        }
    }

    /// Streams the source and persists its data rows. The first row is the
    /// header and is never imported.
    pub fn import_from_reader<R: std::io::Read>(&self, source: R) -> Result<ImportResult> {
        let run_id = Uuid::new_v4();
        let mut counters = RunCounters {
            imported: 0,
            skipped: 0,
            data_rows: 0,
        };
        let mut batch: Vec<NewPosition> = Vec::with_capacity(IMPORT_BATCH_SIZE);

        for (index, record) in SheetReader::new(source).rows().enumerate() {
            if index == 0 {
                continue;
            }
            counters.data_rows += 1;
            let row_number = index + 1;

            match record {
                Ok(row) => {
                    if row.is_empty() {
                        debug!("[import {}] Row {} is empty, skipping", run_id, row_number);
                        counters.skipped += 1;
                        continue;
                    }
                    batch.push(map_row(&row));
                    if batch.len() == IMPORT_BATCH_SIZE {
                        self.flush(run_id, &mut batch, &mut counters)?;
                    }
                }
                Err(e) => {
                    error!(
                        "[import {}] Skipping unreadable row {}: {}",
                        run_id, row_number, e
                    );
                    counters.skipped += 1;
                }
            }
        }

        if !batch.is_empty() {
            self.flush(run_id, &mut batch, &mut counters)?;
        }

        info!(
            "[import {}] Finished: {} rows read, {} imported, {} skipped",
            run_id, counters.data_rows, counters.imported, counters.skipped
        );
        Ok(ImportResult {
            imported: counters.imported,
            skipped: counters.skipped,
            total_rows: counters.data_rows,
        })
    }

    fn flush(
        &self,
        run_id: Uuid,
        batch: &mut Vec<NewPosition>,
        counters: &mut RunCounters,
    ) -> Result<()> {
        let inserted = self.repository.create_positions(std::mem::take(batch))?;
        counters.imported += inserted;
        debug!(
            "[import {}] Persisted batch of {} ({} so far)",
            run_id, inserted, counters.imported
        );
        Ok(())
    }
}

#[async_trait]
impl ImportServiceTrait for ImportService {
    async fn import_positions(
        &self,
        source_path: &Path,
        clear_existing: bool,
    ) -> Result<ImportSummary> {
        if !source_path.is_file() {
            return Err(
                ImportError::SourceNotFound(source_path.display().to_string()).into(),
            );
        }

        let existing_count_before = self.repository.count_positions()?;

        if clear_existing {
            let removed = self.repository.delete_all_positions()?;
            warn!(
                "Cleared {} existing positions before import of {}",
                removed,
                source_path.display()
            );
        }

        let file = File::open(source_path).map_err(|e| {
            ImportError::SourceRead(format!("{}: {}", source_path.display(), e))
        })?;

        let result = self.import_from_reader(file)?;
        let total_count_after = self.repository.count_positions()?;

        Ok(ImportSummary {
            imported_count: result.imported,
            skipped_count: result.skipped,
            total_rows: result.total_rows,
            existing_count_before,
            total_count_after,
            cleared_existing: clear_existing,
        })
    }
}
