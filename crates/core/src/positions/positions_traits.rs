use async_trait::async_trait;

use super::positions_model::{
    NewPosition, Position, PositionFilters, PositionPage, PositionPatch, Sort,
};
use crate::errors::Result;

/// Behavioural contract for position CRUD and lookups.
#[async_trait]
pub trait PositionServiceTrait: Send + Sync {
    async fn get_position(&self, position_id: i64) -> Result<Position>;
    async fn get_positions(&self) -> Result<Vec<Position>>;
    async fn list_positions(
        &self,
        page: i64,
        page_size: i64,
        sort: Option<Sort>,
    ) -> Result<PositionPage>;
    async fn search_positions(&self, filters: PositionFilters) -> Result<Vec<Position>>;
    async fn get_positions_by_partner(&self, partner_id: &str) -> Result<Vec<Position>>;
    async fn get_positions_by_account(&self, account_id: &str) -> Result<Vec<Position>>;
    async fn get_positions_by_currency(&self, currency: &str) -> Result<Vec<Position>>;
    async fn get_positions_by_asset_class(&self, asset_class: &str) -> Result<Vec<Position>>;
    async fn get_positions_above_value(&self, threshold: f64) -> Result<Vec<Position>>;
    async fn get_top_positions_by_value(&self, limit: i64) -> Result<Vec<Position>>;
    async fn get_distinct_account_ids(&self) -> Result<Vec<String>>;
    async fn get_distinct_partner_ids(&self) -> Result<Vec<String>>;
    async fn get_distinct_asset_classes(&self) -> Result<Vec<String>>;
    async fn get_distinct_currencies(&self) -> Result<Vec<String>>;
    async fn get_distinct_mandate_types(&self) -> Result<Vec<String>>;
    async fn count_positions(&self) -> Result<i64>;
    async fn count_by_partner(&self, partner_id: &str) -> Result<i64>;
    async fn count_by_account(&self, account_id: &str) -> Result<i64>;
    async fn create_position(&self, new_position: NewPosition) -> Result<Position>;
    async fn update_position(&self, position_id: i64, update: NewPosition) -> Result<Position>;
    async fn patch_position(&self, position_id: i64, patch: PositionPatch) -> Result<Position>;
    async fn delete_position(&self, position_id: i64) -> Result<()>;
    async fn delete_positions(&self, ids: Vec<i64>) -> Result<usize>;
    async fn delete_all_positions(&self) -> Result<usize>;
}
