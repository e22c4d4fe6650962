use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::positions_model::{
    NewPosition, Position, PositionFilters, PositionPage, PositionPageMeta, PositionPatch, Sort,
};
use super::positions_repository::PositionRepository;
use super::positions_traits::PositionServiceTrait;
use crate::db::DbPool;
use crate::errors::{Error, Result, ValidationError};

pub struct PositionService {
    repository: Arc<PositionRepository>,
}

impl PositionService {
    pub fn new(pool: Arc<DbPool>) -> Self {
        PositionService {
            repository: Arc::new(PositionRepository::new(pool)),
        }
    }
}

#[async_trait]
impl PositionServiceTrait for PositionService {
    async fn get_position(&self, position_id: i64) -> Result<Position> {
        self.repository.get_position(position_id)
    }

    async fn get_positions(&self) -> Result<Vec<Position>> {
        self.repository.get_positions()
    }

    async fn list_positions(
        &self,
        page: i64,
        page_size: i64,
        sort: Option<Sort>,
    ) -> Result<PositionPage> {
        if page_size <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "page size must be positive".to_string(),
            )));
        }
        let (data, total_row_count) = self.repository.list_positions(page, page_size, sort)?;
        Ok(PositionPage {
            data,
            meta: PositionPageMeta { total_row_count },
        })
    }

    async fn search_positions(&self, filters: PositionFilters) -> Result<Vec<Position>> {
        debug!("Searching positions with filters: {:?}", filters);
        self.repository.search_positions(&filters)
    }

    async fn get_positions_by_partner(&self, partner_id: &str) -> Result<Vec<Position>> {
        self.repository.get_positions_by_partner(partner_id)
    }

    async fn get_positions_by_account(&self, account_id: &str) -> Result<Vec<Position>> {
        self.repository.get_positions_by_account(account_id)
    }

    async fn get_positions_by_currency(&self, currency: &str) -> Result<Vec<Position>> {
        self.repository.get_positions_by_currency(currency)
    }

    async fn get_positions_by_asset_class(&self, asset_class: &str) -> Result<Vec<Position>> {
        self.repository.get_positions_by_asset_class(asset_class)
    }

    async fn get_positions_above_value(&self, threshold: f64) -> Result<Vec<Position>> {
        self.repository.get_positions_above_value(threshold)
    }

    async fn get_top_positions_by_value(&self, limit: i64) -> Result<Vec<Position>> {
        if limit <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "limit must be positive".to_string(),
            )));
        }
        self.repository.get_top_positions_by_value(limit)
    }

    async fn get_distinct_account_ids(&self) -> Result<Vec<String>> {
        self.repository.get_distinct_account_ids()
    }

    async fn get_distinct_partner_ids(&self) -> Result<Vec<String>> {
        self.repository.get_distinct_partner_ids()
    }

    async fn get_distinct_asset_classes(&self) -> Result<Vec<String>> {
        self.repository.get_distinct_asset_classes()
    }

    async fn get_distinct_currencies(&self) -> Result<Vec<String>> {
        self.repository.get_distinct_currencies()
    }

    async fn get_distinct_mandate_types(&self) -> Result<Vec<String>> {
        self.repository.get_distinct_mandate_types()
    }

    async fn count_positions(&self) -> Result<i64> {
        self.repository.count_positions()
    }

    async fn count_by_partner(&self, partner_id: &str) -> Result<i64> {
        self.repository.count_by_partner(partner_id)
    }

    async fn count_by_account(&self, account_id: &str) -> Result<i64> {
        self.repository.count_by_account(account_id)
    }

    async fn create_position(&self, new_position: NewPosition) -> Result<Position> {
        self.repository.create_position(new_position)
    }

    async fn update_position(&self, position_id: i64, update: NewPosition) -> Result<Position> {
        self.repository.update_position(position_id, update)
    }

    async fn patch_position(&self, position_id: i64, patch: PositionPatch) -> Result<Position> {
        if patch.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "patch carries no fields".to_string(),
            )));
        }
        self.repository.patch_position(position_id, &patch)
    }

    async fn delete_position(&self, position_id: i64) -> Result<()> {
        self.repository.delete_position(position_id)
    }

    async fn delete_positions(&self, ids: Vec<i64>) -> Result<usize> {
        if ids.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "no ids given".to_string(),
            )));
        }
        self.repository.delete_positions(&ids)
    }

    async fn delete_all_positions(&self) -> Result<usize> {
        self.repository.delete_all_positions()
    }
}
