use std::sync::Arc;

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use super::positions_model::{
    NewPosition, NewPositionDB, Position, PositionDB, PositionFilters, PositionPatch, Sort,
};
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::positions::PositionError;
use crate::schema::portfolio_positions::dsl::*;

pub struct PositionRepository {
    pool: Arc<DbPool>,
}

impl PositionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        PositionRepository { pool }
    }

    pub fn get_position(&self, position_id: i64) -> Result<Position> {
        let mut conn = get_connection(&self.pool)?;
        let row = portfolio_positions
            .find(position_id)
            .first::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(Position::from(row))
    }

    pub fn get_positions(&self) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_positions
            .order(id.asc())
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn count_positions(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total = portfolio_positions
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(total)
    }

    pub fn count_by_partner(&self, partner: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total = portfolio_positions
            .filter(partner_id.eq(partner))
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(total)
    }

    pub fn count_by_account(&self, account: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total = portfolio_positions
            .filter(account_id.eq(account))
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(total)
    }

    /// Paginated listing with an optional sort directive. Ties and repeated
    /// sort keys resolve by ascending id so pages are stable across calls.
    pub fn list_positions(
        &self,
        page: i64,
        page_size: i64,
        sort: Option<Sort>,
    ) -> Result<(Vec<Position>, i64)> {
        let mut conn = get_connection(&self.pool)?;

        let total = portfolio_positions
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(PositionError::from)?;

        let mut query = portfolio_positions.into_boxed::<diesel::sqlite::Sqlite>();
        query = match sort {
            Some(s) => {
                let descending = s.desc;
                match s.id.as_str() {
                    "valueAmount" => {
                        if descending {
                            query.order((value_amount.desc(), id.asc()))
                        } else {
                            query.order((value_amount.asc(), id.asc()))
                        }
                    }
                    "accountId" => {
                        if descending {
                            query.order((account_id.desc(), id.asc()))
                        } else {
                            query.order((account_id.asc(), id.asc()))
                        }
                    }
                    "instrumentNameShort" => {
                        if descending {
                            query.order((instrument_name_short.desc(), id.asc()))
                        } else {
                            query.order((instrument_name_short.asc(), id.asc()))
                        }
                    }
                    _ => {
                        if descending {
                            query.order(id.desc())
                        } else {
                            query.order(id.asc())
                        }
                    }
                }
            }
            None => query.order(id.asc()),
        };

        let offset = (page.max(1) - 1) * page_size;
        let rows = query
            .limit(page_size)
            .offset(offset)
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;

        Ok((rows.into_iter().map(Position::from).collect(), total))
    }

    /// Filtered search; absent criteria match everything. The search term
    /// matches a case-sensitive substring of the short instrument name.
    pub fn search_positions(&self, filters: &PositionFilters) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = portfolio_positions.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(partner) = &filters.partner_id {
            query = query.filter(partner_id.eq(partner.clone()));
        }
        if let Some(account) = &filters.account_id {
            query = query.filter(account_id.eq(account.clone()));
        }
        if let Some(class) = &filters.asset_class {
            query = query.filter(asset_class_description_short.eq(class.clone()));
        }
        if let Some(currency) = &filters.currency {
            query = query.filter(value_currency.eq(currency.clone()));
        }
        if let Some(min_value) = filters.min_value {
            if let Some(threshold) = num_traits::ToPrimitive::to_f64(&min_value) {
                query = query.filter(value_amount.ge(threshold));
            }
        }
        if let Some(term) = &filters.instrument_name {
            query = query.filter(instrument_name_short.like(format!("%{}%", term)));
        }

        let rows = query
            .order(id.asc())
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn get_positions_by_partner(&self, partner: &str) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_positions
            .filter(partner_id.eq(partner))
            .order(id.asc())
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn get_positions_by_account(&self, account: &str) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_positions
            .filter(account_id.eq(account))
            .order(id.asc())
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn get_positions_by_currency(&self, currency: &str) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_positions
            .filter(value_currency.eq(currency))
            .order(id.asc())
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn get_positions_by_asset_class(&self, class: &str) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_positions
            .filter(asset_class_description_short.eq(class))
            .order(id.asc())
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn get_positions_above_value(&self, threshold: f64) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_positions
            .filter(value_amount.gt(threshold))
            .order((value_amount.desc(), id.asc()))
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn get_top_positions_by_value(&self, limit: i64) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_positions
            .filter(value_amount.is_not_null())
            .order((value_amount.desc(), id.asc()))
            .limit(limit)
            .load::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(rows.into_iter().map(Position::from).collect())
    }

    pub fn get_distinct_account_ids(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let values = portfolio_positions
            .filter(account_id.is_not_null())
            .select(account_id.assume_not_null())
            .distinct()
            .order(account_id.asc())
            .load::<String>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(values)
    }

    pub fn get_distinct_partner_ids(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let values = portfolio_positions
            .filter(partner_id.is_not_null())
            .select(partner_id.assume_not_null())
            .distinct()
            .order(partner_id.asc())
            .load::<String>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(values)
    }

    pub fn get_distinct_asset_classes(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let values = portfolio_positions
            .filter(asset_class_description_short.is_not_null())
            .select(asset_class_description_short.assume_not_null())
            .distinct()
            .order(asset_class_description_short.asc())
            .load::<String>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(values)
    }

    pub fn get_distinct_currencies(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let values = portfolio_positions
            .filter(value_currency.is_not_null())
            .select(value_currency.assume_not_null())
            .distinct()
            .order(value_currency.asc())
            .load::<String>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(values)
    }

    pub fn get_distinct_mandate_types(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let values = portfolio_positions
            .filter(mandate_type.is_not_null())
            .select(mandate_type.assume_not_null())
            .distinct()
            .order(mandate_type.asc())
            .load::<String>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(values)
    }

    pub fn create_position(&self, new_position: NewPosition) -> Result<Position> {
        let mut conn = get_connection(&self.pool)?;
        let db_row: NewPositionDB = new_position.into();
        let inserted = diesel::insert_into(portfolio_positions)
            .values(&db_row)
            .get_result::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(Position::from(inserted))
    }

    /// Inserts the batch inside a single transaction; either every row in
    /// the slice lands or none does.
    pub fn create_positions(&self, new_positions: Vec<NewPosition>) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        self.insert_batch(&mut conn, new_positions)
    }

    pub(crate) fn insert_batch(
        &self,
        conn: &mut SqliteConnection,
        new_positions: Vec<NewPosition>,
    ) -> Result<usize> {
        let rows: Vec<NewPositionDB> =
            new_positions.into_iter().map(NewPositionDB::from).collect();
        let inserted = conn.transaction(|conn| {
            diesel::insert_into(portfolio_positions)
                .values(&rows)
                .execute(conn)
        })
        .map_err(PositionError::from)?;
        Ok(inserted)
    }

    /// Full replacement: every column except the id takes the incoming
    /// value, including absent ones, which become null.
    pub fn update_position(&self, position_id: i64, update: NewPosition) -> Result<Position> {
        let mut conn = get_connection(&self.pool)?;

        // Ensure the row exists so a miss maps to NotFound, not a no-op.
        portfolio_positions
            .find(position_id)
            .first::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;

        let replacement = update.overwrite(position_id);
        let updated = diesel::update(portfolio_positions.find(position_id))
            .set(&replacement)
            .get_result::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(Position::from(updated))
    }

    /// Partial update: only the fields present in the patch change.
    pub fn patch_position(&self, position_id: i64, patch: &PositionPatch) -> Result<Position> {
        let mut conn = get_connection(&self.pool)?;

        let mut row = portfolio_positions
            .find(position_id)
            .first::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;

        patch.apply(&mut row);

        let updated = diesel::update(portfolio_positions.find(position_id))
            .set(&row)
            .get_result::<PositionDB>(&mut conn)
            .map_err(PositionError::from)?;
        Ok(Position::from(updated))
    }

    pub fn delete_position(&self, position_id: i64) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::delete(portfolio_positions.find(position_id))
            .execute(&mut conn)
            .map_err(PositionError::from)?;
        if affected == 0 {
            return Err(
                PositionError::NotFound(format!("Position not found: {}", position_id)).into(),
            );
        }
        Ok(())
    }

    /// Removes the given ids; ids with no row are ignored. Returns how
    /// many rows actually went.
    pub fn delete_positions(&self, ids: &[i64]) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(portfolio_positions.filter(id.eq_any(ids.to_vec())))
            .execute(&mut conn)
            .map_err(PositionError::from)?;
        Ok(deleted)
    }

    /// Removes every stored position and returns how many were deleted.
    pub fn delete_all_positions(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(portfolio_positions)
            .execute(&mut conn)
            .map_err(PositionError::from)?;
        Ok(deleted)
    }
}
