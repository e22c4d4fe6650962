use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing one financial holding record.
///
/// A position with a non-null `value_amount` is "active" for aggregation:
/// it contributes to value sums. Positions with a null value amount are
/// excluded from sums but still counted as rows.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    pub partner_id: Option<String>,
    pub account_id: Option<String>,
    pub position_created_date: Option<NaiveDateTime>,
    pub fi_unit_type_code: Option<String>,
    pub balance_amount: Option<Decimal>,
    pub value_amount: Option<Decimal>,
    pub trade_amount: Option<Decimal>,
    pub valuation_date: Option<NaiveDateTime>,
    pub as_of_date: Option<NaiveDateTime>,
    pub value_currency: Option<String>,
    pub source_currency: Option<String>,
    pub original_quantity: Option<Decimal>,
    pub market_value_amount: Option<Decimal>,
    pub fx_rate: Option<Decimal>,
    pub valor: Option<String>,
    pub isin: Option<String>,
    pub instrument_name_short: Option<String>,
    pub symbol_id: Option<String>,
    pub title_group_id: Option<String>,
    pub title_id: Option<String>,
    pub title_id_description: Option<String>,
    pub symbol_id_alt: Option<String>,
    pub product_description: Option<String>,
    pub product_id: Option<String>,
    pub product_id_description: Option<String>,
    pub product_class_id: Option<String>,
    pub product_class_description: Option<String>,
    pub product_family_id: Option<String>,
    pub product_family_description: Option<String>,
    pub asset_class: Option<String>,
    pub asset_class_subtype: Option<String>,
    pub asset_class_description_short: Option<String>,
    pub asset_class_description_long: Option<String>,
    pub category_type_code: Option<String>,
    pub instrument_id: Option<String>,
    pub portfolio_currency: Option<String>,
    pub portfolio_short_name: Option<String>,
    pub currency_id: Option<String>,
    pub mandate_pricing_id: Option<String>,
    pub mandate_program: Option<String>,
    pub mandate_pricing_name_short: Option<String>,
    pub mandate_pricing_name_long: Option<String>,
    pub mandate_pricing_type: Option<String>,
    pub mandate_program_secondary: Option<String>,
    pub investment_strategy_code: Option<String>,
    pub investment_strategy_name: Option<String>,
    pub solution_subtype_id: Option<String>,
    pub solution_subtype_name_short: Option<String>,
    pub solution_name_short: Option<String>,
    pub solution_name_long: Option<String>,
    pub mandate_type: Option<String>,
    pub mandate_subtype: Option<String>,
    pub mandate_group: Option<String>,
    pub domicile: Option<String>,
    pub client_advisor_id: Option<i32>,
}

/// Input model for creating a position or fully replacing an existing one.
///
/// Every field is optional; descriptive fields are opaque pass-through
/// strings with no validation beyond presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPosition {
    pub partner_id: Option<String>,
    pub account_id: Option<String>,
    pub position_created_date: Option<NaiveDateTime>,
    pub fi_unit_type_code: Option<String>,
    pub balance_amount: Option<Decimal>,
    pub value_amount: Option<Decimal>,
    pub trade_amount: Option<Decimal>,
    pub valuation_date: Option<NaiveDateTime>,
    pub as_of_date: Option<NaiveDateTime>,
    pub value_currency: Option<String>,
    pub source_currency: Option<String>,
    pub original_quantity: Option<Decimal>,
    pub market_value_amount: Option<Decimal>,
    pub fx_rate: Option<Decimal>,
    pub valor: Option<String>,
    pub isin: Option<String>,
    pub instrument_name_short: Option<String>,
    pub symbol_id: Option<String>,
    pub title_group_id: Option<String>,
    pub title_id: Option<String>,
    pub title_id_description: Option<String>,
    pub symbol_id_alt: Option<String>,
    pub product_description: Option<String>,
    pub product_id: Option<String>,
    pub product_id_description: Option<String>,
    pub product_class_id: Option<String>,
    pub product_class_description: Option<String>,
    pub product_family_id: Option<String>,
    pub product_family_description: Option<String>,
    pub asset_class: Option<String>,
    pub asset_class_subtype: Option<String>,
    pub asset_class_description_short: Option<String>,
    pub asset_class_description_long: Option<String>,
    pub category_type_code: Option<String>,
    pub instrument_id: Option<String>,
    pub portfolio_currency: Option<String>,
    pub portfolio_short_name: Option<String>,
    pub currency_id: Option<String>,
    pub mandate_pricing_id: Option<String>,
    pub mandate_program: Option<String>,
    pub mandate_pricing_name_short: Option<String>,
    pub mandate_pricing_name_long: Option<String>,
    pub mandate_pricing_type: Option<String>,
    pub mandate_program_secondary: Option<String>,
    pub investment_strategy_code: Option<String>,
    pub investment_strategy_name: Option<String>,
    pub solution_subtype_id: Option<String>,
    pub solution_subtype_name_short: Option<String>,
    pub solution_name_short: Option<String>,
    pub solution_name_long: Option<String>,
    pub mandate_type: Option<String>,
    pub mandate_subtype: Option<String>,
    pub mandate_group: Option<String>,
    pub domicile: Option<String>,
    pub client_advisor_id: Option<i32>,
}

/// Field-level partial update for a position.
///
/// Only the fields named here are patchable; unknown field names in the
/// request body are rejected at deserialization instead of being silently
/// dropped.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PositionPatch {
    pub partner_id: Option<String>,
    pub account_id: Option<String>,
    pub position_created_date: Option<NaiveDateTime>,
    pub value_amount: Option<Decimal>,
    pub value_currency: Option<String>,
    pub source_currency: Option<String>,
    pub fx_rate: Option<Decimal>,
    pub instrument_name_short: Option<String>,
    pub asset_class_description_short: Option<String>,
}

impl PositionPatch {
    /// Returns true when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.partner_id.is_none()
            && self.account_id.is_none()
            && self.position_created_date.is_none()
            && self.value_amount.is_none()
            && self.value_currency.is_none()
            && self.source_currency.is_none()
            && self.fx_rate.is_none()
            && self.instrument_name_short.is_none()
            && self.asset_class_description_short.is_none()
    }

    /// Applies the present fields onto an existing database row.
    pub(crate) fn apply(&self, row: &mut PositionDB) {
        if let Some(v) = &self.partner_id {
            row.partner_id = Some(v.clone());
        }
        if let Some(v) = &self.account_id {
            row.account_id = Some(v.clone());
        }
        if let Some(v) = self.position_created_date {
            row.position_created_date = Some(v);
        }
        if let Some(v) = self.value_amount {
            row.value_amount = v.to_f64();
        }
        if let Some(v) = &self.value_currency {
            row.value_currency = Some(v.clone());
        }
        if let Some(v) = &self.source_currency {
            row.source_currency = Some(v.clone());
        }
        if let Some(v) = self.fx_rate {
            row.fx_rate = v.to_f64();
        }
        if let Some(v) = &self.instrument_name_short {
            row.instrument_name_short = Some(v.clone());
        }
        if let Some(v) = &self.asset_class_description_short {
            row.asset_class_description_short = Some(v.clone());
        }
    }
}

/// Sort directive for paginated listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sort {
    pub id: String,
    pub desc: bool,
}

/// One page of positions plus the unpaginated row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionPage {
    pub data: Vec<Position>,
    pub meta: PositionPageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionPageMeta {
    pub total_row_count: i64,
}

/// Optional criteria for filtered position searches. Absent criteria match
/// everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionFilters {
    pub partner_id: Option<String>,
    pub account_id: Option<String>,
    pub asset_class: Option<String>,
    pub currency: Option<String>,
    pub min_value: Option<Decimal>,
    pub instrument_name: Option<String>,
}

/// Database model for portfolio positions.
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::portfolio_positions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct PositionDB {
    pub id: i64,
    pub partner_id: Option<String>,
    pub account_id: Option<String>,
    pub position_created_date: Option<NaiveDateTime>,
    pub fi_unit_type_code: Option<String>,
    pub balance_amount: Option<f64>,
    pub value_amount: Option<f64>,
    pub trade_amount: Option<f64>,
    pub valuation_date: Option<NaiveDateTime>,
    pub as_of_date: Option<NaiveDateTime>,
    pub value_currency: Option<String>,
    pub source_currency: Option<String>,
    pub original_quantity: Option<f64>,
    pub market_value_amount: Option<f64>,
    pub fx_rate: Option<f64>,
    pub valor: Option<String>,
    pub isin: Option<String>,
    pub instrument_name_short: Option<String>,
    pub symbol_id: Option<String>,
    pub title_group_id: Option<String>,
    pub title_id: Option<String>,
    pub title_id_description: Option<String>,
    pub symbol_id_alt: Option<String>,
    pub product_description: Option<String>,
    pub product_id: Option<String>,
    pub product_id_description: Option<String>,
    pub product_class_id: Option<String>,
    pub product_class_description: Option<String>,
    pub product_family_id: Option<String>,
    pub product_family_description: Option<String>,
    pub asset_class: Option<String>,
    pub asset_class_subtype: Option<String>,
    pub asset_class_description_short: Option<String>,
    pub asset_class_description_long: Option<String>,
    pub category_type_code: Option<String>,
    pub instrument_id: Option<String>,
    pub portfolio_currency: Option<String>,
    pub portfolio_short_name: Option<String>,
    pub currency_id: Option<String>,
    pub mandate_pricing_id: Option<String>,
    pub mandate_program: Option<String>,
    pub mandate_pricing_name_short: Option<String>,
    pub mandate_pricing_name_long: Option<String>,
    pub mandate_pricing_type: Option<String>,
    pub mandate_program_secondary: Option<String>,
    pub investment_strategy_code: Option<String>,
    pub investment_strategy_name: Option<String>,
    pub solution_subtype_id: Option<String>,
    pub solution_subtype_name_short: Option<String>,
    pub solution_name_short: Option<String>,
    pub solution_name_long: Option<String>,
    pub mandate_type: Option<String>,
    pub mandate_subtype: Option<String>,
    pub mandate_group: Option<String>,
    pub domicile: Option<String>,
    pub client_advisor_id: Option<i32>,
}

/// Insertable row; the id is assigned by the database exactly once.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolio_positions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewPositionDB {
    pub partner_id: Option<String>,
    pub account_id: Option<String>,
    pub position_created_date: Option<NaiveDateTime>,
    pub fi_unit_type_code: Option<String>,
    pub balance_amount: Option<f64>,
    pub value_amount: Option<f64>,
    pub trade_amount: Option<f64>,
    pub valuation_date: Option<NaiveDateTime>,
    pub as_of_date: Option<NaiveDateTime>,
    pub value_currency: Option<String>,
    pub source_currency: Option<String>,
    pub original_quantity: Option<f64>,
    pub market_value_amount: Option<f64>,
    pub fx_rate: Option<f64>,
    pub valor: Option<String>,
    pub isin: Option<String>,
    pub instrument_name_short: Option<String>,
    pub symbol_id: Option<String>,
    pub title_group_id: Option<String>,
    pub title_id: Option<String>,
    pub title_id_description: Option<String>,
    pub symbol_id_alt: Option<String>,
    pub product_description: Option<String>,
    pub product_id: Option<String>,
    pub product_id_description: Option<String>,
    pub product_class_id: Option<String>,
    pub product_class_description: Option<String>,
    pub product_family_id: Option<String>,
    pub product_family_description: Option<String>,
    pub asset_class: Option<String>,
    pub asset_class_subtype: Option<String>,
    pub asset_class_description_short: Option<String>,
    pub asset_class_description_long: Option<String>,
    pub category_type_code: Option<String>,
    pub instrument_id: Option<String>,
    pub portfolio_currency: Option<String>,
    pub portfolio_short_name: Option<String>,
    pub currency_id: Option<String>,
    pub mandate_pricing_id: Option<String>,
    pub mandate_program: Option<String>,
    pub mandate_pricing_name_short: Option<String>,
    pub mandate_pricing_name_long: Option<String>,
    pub mandate_pricing_type: Option<String>,
    pub mandate_program_secondary: Option<String>,
    pub investment_strategy_code: Option<String>,
    pub investment_strategy_name: Option<String>,
    pub solution_subtype_id: Option<String>,
    pub solution_subtype_name_short: Option<String>,
    pub solution_name_short: Option<String>,
    pub solution_name_long: Option<String>,
    pub mandate_type: Option<String>,
    pub mandate_subtype: Option<String>,
    pub mandate_group: Option<String>,
    pub domicile: Option<String>,
    pub client_advisor_id: Option<i32>,
}

fn to_db_amount(value: Option<Decimal>) -> Option<f64> {
    value.and_then(|v| v.to_f64())
}

fn from_db_amount(value: Option<f64>) -> Option<Decimal> {
    value.and_then(Decimal::from_f64)
}

impl From<PositionDB> for Position {
    fn from(db: PositionDB) -> Self {
        Self {
            id: db.id,
            partner_id: db.partner_id,
            account_id: db.account_id,
            position_created_date: db.position_created_date,
            fi_unit_type_code: db.fi_unit_type_code,
            balance_amount: from_db_amount(db.balance_amount),
            value_amount: from_db_amount(db.value_amount),
            trade_amount: from_db_amount(db.trade_amount),
            valuation_date: db.valuation_date,
            as_of_date: db.as_of_date,
            value_currency: db.value_currency,
            source_currency: db.source_currency,
            original_quantity: from_db_amount(db.original_quantity),
            market_value_amount: from_db_amount(db.market_value_amount),
            fx_rate: from_db_amount(db.fx_rate),
            valor: db.valor,
            isin: db.isin,
            instrument_name_short: db.instrument_name_short,
            symbol_id: db.symbol_id,
            title_group_id: db.title_group_id,
            title_id: db.title_id,
            title_id_description: db.title_id_description,
            symbol_id_alt: db.symbol_id_alt,
            product_description: db.product_description,
            product_id: db.product_id,
            product_id_description: db.product_id_description,
            product_class_id: db.product_class_id,
            product_class_description: db.product_class_description,
            product_family_id: db.product_family_id,
            product_family_description: db.product_family_description,
            asset_class: db.asset_class,
            asset_class_subtype: db.asset_class_subtype,
            asset_class_description_short: db.asset_class_description_short,
            asset_class_description_long: db.asset_class_description_long,
            category_type_code: db.category_type_code,
            instrument_id: db.instrument_id,
            portfolio_currency: db.portfolio_currency,
            portfolio_short_name: db.portfolio_short_name,
            currency_id: db.currency_id,
            mandate_pricing_id: db.mandate_pricing_id,
            mandate_program: db.mandate_program,
            mandate_pricing_name_short: db.mandate_pricing_name_short,
            mandate_pricing_name_long: db.mandate_pricing_name_long,
            mandate_pricing_type: db.mandate_pricing_type,
            mandate_program_secondary: db.mandate_program_secondary,
            investment_strategy_code: db.investment_strategy_code,
            investment_strategy_name: db.investment_strategy_name,
            solution_subtype_id: db.solution_subtype_id,
            solution_subtype_name_short: db.solution_subtype_name_short,
            solution_name_short: db.solution_name_short,
            solution_name_long: db.solution_name_long,
            mandate_type: db.mandate_type,
            mandate_subtype: db.mandate_subtype,
            mandate_group: db.mandate_group,
            domicile: db.domicile,
            client_advisor_id: db.client_advisor_id,
        }
    }
}

impl From<NewPosition> for NewPositionDB {
    fn from(domain: NewPosition) -> Self {
        Self {
            partner_id: domain.partner_id,
            account_id: domain.account_id,
            position_created_date: domain.position_created_date,
            fi_unit_type_code: domain.fi_unit_type_code,
            balance_amount: to_db_amount(domain.balance_amount),
            value_amount: to_db_amount(domain.value_amount),
            trade_amount: to_db_amount(domain.trade_amount),
            valuation_date: domain.valuation_date,
            as_of_date: domain.as_of_date,
            value_currency: domain.value_currency,
            source_currency: domain.source_currency,
            original_quantity: to_db_amount(domain.original_quantity),
            market_value_amount: to_db_amount(domain.market_value_amount),
            fx_rate: to_db_amount(domain.fx_rate),
            valor: domain.valor,
            isin: domain.isin,
            instrument_name_short: domain.instrument_name_short,
            symbol_id: domain.symbol_id,
            title_group_id: domain.title_group_id,
            title_id: domain.title_id,
            title_id_description: domain.title_id_description,
            symbol_id_alt: domain.symbol_id_alt,
            product_description: domain.product_description,
            product_id: domain.product_id,
            product_id_description: domain.product_id_description,
            product_class_id: domain.product_class_id,
            product_class_description: domain.product_class_description,
            product_family_id: domain.product_family_id,
            product_family_description: domain.product_family_description,
            asset_class: domain.asset_class,
            asset_class_subtype: domain.asset_class_subtype,
            asset_class_description_short: domain.asset_class_description_short,
            asset_class_description_long: domain.asset_class_description_long,
            category_type_code: domain.category_type_code,
            instrument_id: domain.instrument_id,
            portfolio_currency: domain.portfolio_currency,
            portfolio_short_name: domain.portfolio_short_name,
            currency_id: domain.currency_id,
            mandate_pricing_id: domain.mandate_pricing_id,
            mandate_program: domain.mandate_program,
            mandate_pricing_name_short: domain.mandate_pricing_name_short,
            mandate_pricing_name_long: domain.mandate_pricing_name_long,
            mandate_pricing_type: domain.mandate_pricing_type,
            mandate_program_secondary: domain.mandate_program_secondary,
            investment_strategy_code: domain.investment_strategy_code,
            investment_strategy_name: domain.investment_strategy_name,
            solution_subtype_id: domain.solution_subtype_id,
            solution_subtype_name_short: domain.solution_subtype_name_short,
            solution_name_short: domain.solution_name_short,
            solution_name_long: domain.solution_name_long,
            mandate_type: domain.mandate_type,
            mandate_subtype: domain.mandate_subtype,
            mandate_group: domain.mandate_group,
            domicile: domain.domicile,
            client_advisor_id: domain.client_advisor_id,
        }
    }
}

impl NewPosition {
    /// Applies the full-replace semantics of an update onto an existing row,
    /// preserving only the id.
    pub(crate) fn overwrite(self, id: i64) -> PositionDB {
        let new_db: NewPositionDB = self.into();
        PositionDB {
            id,
            partner_id: new_db.partner_id,
            account_id: new_db.account_id,
            position_created_date: new_db.position_created_date,
            fi_unit_type_code: new_db.fi_unit_type_code,
            balance_amount: new_db.balance_amount,
            value_amount: new_db.value_amount,
            trade_amount: new_db.trade_amount,
            valuation_date: new_db.valuation_date,
            as_of_date: new_db.as_of_date,
            value_currency: new_db.value_currency,
            source_currency: new_db.source_currency,
            original_quantity: new_db.original_quantity,
            market_value_amount: new_db.market_value_amount,
            fx_rate: new_db.fx_rate,
            valor: new_db.valor,
            isin: new_db.isin,
            instrument_name_short: new_db.instrument_name_short,
            symbol_id: new_db.symbol_id,
            title_group_id: new_db.title_group_id,
            title_id: new_db.title_id,
            title_id_description: new_db.title_id_description,
            symbol_id_alt: new_db.symbol_id_alt,
            product_description: new_db.product_description,
            product_id: new_db.product_id,
            product_id_description: new_db.product_id_description,
            product_class_id: new_db.product_class_id,
            product_class_description: new_db.product_class_description,
            product_family_id: new_db.product_family_id,
            product_family_description: new_db.product_family_description,
            asset_class: new_db.asset_class,
            asset_class_subtype: new_db.asset_class_subtype,
            asset_class_description_short: new_db.asset_class_description_short,
            asset_class_description_long: new_db.asset_class_description_long,
            category_type_code: new_db.category_type_code,
            instrument_id: new_db.instrument_id,
            portfolio_currency: new_db.portfolio_currency,
            portfolio_short_name: new_db.portfolio_short_name,
            currency_id: new_db.currency_id,
            mandate_pricing_id: new_db.mandate_pricing_id,
            mandate_program: new_db.mandate_program,
            mandate_pricing_name_short: new_db.mandate_pricing_name_short,
            mandate_pricing_name_long: new_db.mandate_pricing_name_long,
            mandate_pricing_type: new_db.mandate_pricing_type,
            mandate_program_secondary: new_db.mandate_program_secondary,
            investment_strategy_code: new_db.investment_strategy_code,
            investment_strategy_name: new_db.investment_strategy_name,
            solution_subtype_id: new_db.solution_subtype_id,
            solution_subtype_name_short: new_db.solution_subtype_name_short,
            solution_name_short: new_db.solution_name_short,
            solution_name_long: new_db.solution_name_long,
            mandate_type: new_db.mandate_type,
            mandate_subtype: new_db.mandate_subtype,
            mandate_group: new_db.mandate_group,
            domicile: new_db.domicile,
            client_advisor_id: new_db.client_advisor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn patch_rejects_unknown_fields() {
        let body = r#"{"valueAmount": 100.5, "mandateGroup": "MG1"}"#;
        let parsed: Result<PositionPatch, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let patch: PositionPatch =
            serde_json::from_str(r#"{"valueAmount": 250.0, "valueCurrency": "USD"}"#).unwrap();
        let mut row = PositionDB {
            id: 7,
            partner_id: Some("P1".to_string()),
            value_amount: Some(100.0),
            value_currency: Some("CHF".to_string()),
            ..empty_row()
        };

        patch.apply(&mut row);

        assert_eq!(row.value_amount, Some(250.0));
        assert_eq!(row.value_currency.as_deref(), Some("USD"));
        // Untouched fields keep their values
        assert_eq!(row.partner_id.as_deref(), Some("P1"));
    }

    #[test]
    fn new_position_round_trips_decimal_amounts() {
        let new = NewPosition {
            value_amount: Some(dec!(1234.56)),
            fx_rate: Some(dec!(0.912345)),
            ..Default::default()
        };
        let db: NewPositionDB = new.into();
        assert_eq!(db.value_amount, Some(1234.56));

        let restored = from_db_amount(db.fx_rate).unwrap();
        assert_eq!(restored, dec!(0.912345));
    }

    fn empty_row() -> PositionDB {
        PositionDB {
            id: 0,
            partner_id: None,
            account_id: None,
            position_created_date: None,
            fi_unit_type_code: None,
            balance_amount: None,
            value_amount: None,
            trade_amount: None,
            valuation_date: None,
            as_of_date: None,
            value_currency: None,
            source_currency: None,
            original_quantity: None,
            market_value_amount: None,
            fx_rate: None,
            valor: None,
            isin: None,
            instrument_name_short: None,
            symbol_id: None,
            title_group_id: None,
            title_id: None,
            title_id_description: None,
            symbol_id_alt: None,
            product_description: None,
            product_id: None,
            product_id_description: None,
            product_class_id: None,
            product_class_description: None,
            product_family_id: None,
            product_family_description: None,
            asset_class: None,
            asset_class_subtype: None,
            asset_class_description_short: None,
            asset_class_description_long: None,
            category_type_code: None,
            instrument_id: None,
            portfolio_currency: None,
            portfolio_short_name: None,
            currency_id: None,
            mandate_pricing_id: None,
            mandate_program: None,
            mandate_pricing_name_short: None,
            mandate_pricing_name_long: None,
            mandate_pricing_type: None,
            mandate_program_secondary: None,
            investment_strategy_code: None,
            investment_strategy_name: None,
            solution_subtype_id: None,
            solution_subtype_name_short: None,
            solution_name_short: None,
            solution_name_long: None,
            mandate_type: None,
            mandate_subtype: None,
            mandate_group: None,
            domicile: None,
            client_advisor_id: None,
        }
    }
}
