use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of how concentrated an account's holdings are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Value and row count for one (account, partner, currency) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: String,
    pub partner_id: Option<String>,
    pub currency: Option<String>,
    pub total_value: Decimal,
    pub position_count: i64,
    /// Total over row count, two decimals, half away from zero.
    pub average_position_value: Decimal,
}

/// Reduced view of one position inside an account details response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSummary {
    pub id: i64,
    pub instrument_name: Option<String>,
    pub isin: Option<String>,
    pub value_amount: Option<Decimal>,
    pub value_currency: Option<String>,
    pub asset_class: Option<String>,
    pub fx_rate: Option<Decimal>,
}

/// Value and row count for one asset class, used in descending
/// allocation listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub label: String,
    pub position_count: usize,
    pub total_value: Decimal,
}

/// Aggregated view over every position of one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub account_id: String,
    /// Taken from the first position of the account.
    pub partner_id: Option<String>,
    pub position_count: usize,
    /// Value totals keyed by currency; positions without a currency are
    /// grouped under the empty key.
    pub totals_by_currency: BTreeMap<String, Decimal>,
    /// Row counts keyed by the short asset class description; unlabelled
    /// rows are not counted.
    pub asset_class_breakdown: BTreeMap<String, usize>,
    /// Sum of value times fx rate over rows carrying both, present only
    /// when strictly positive.
    pub reference_currency_total: Option<Decimal>,
    /// Currency holding the largest total; ties resolve to the
    /// lexicographically smallest code. The unknown-currency bucket is
    /// never selected, even when it holds the largest total.
    pub primary_currency: Option<String>,
    pub positions: Vec<PositionSummary>,
    pub risk_metrics: RiskMetrics,
}

/// Concentration and exposure figures for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    pub account_id: String,
    pub position_count: usize,
    pub total_value: Decimal,
    pub largest_position_value: Decimal,
    /// Share of the largest position in percent, four fractional digits of
    /// the ratio kept before scaling.
    pub concentration_percent: Decimal,
    pub average_position_value: Decimal,
    pub currency_count: usize,
    /// Distinct short asset class descriptions across the account.
    pub asset_class_count: usize,
    /// Total held outside the reference currency.
    pub foreign_currency_exposure: Decimal,
    /// True when any position settles in a currency other than its
    /// source currency.
    pub has_fx_exposure: bool,
    pub risk_level: RiskLevel,
}

/// Portfolio-wide aggregate over every stored position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub position_count: i64,
    pub account_count: usize,
    pub partner_count: usize,
    pub totals_by_currency: BTreeMap<String, Decimal>,
    /// Descending by total value, ties by label.
    pub asset_class_allocation: Vec<AllocationEntry>,
    pub asset_classes: Vec<String>,
    pub currencies: Vec<String>,
    pub mandate_types: Vec<String>,
}

/// Aggregate over every position belonging to one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSummary {
    pub partner_id: String,
    pub account_count: usize,
    pub position_count: usize,
    pub totals_by_currency: BTreeMap<String, Decimal>,
    /// Descending by total value, ties by label.
    pub asset_class_allocation: Vec<AllocationEntry>,
    /// Sum of value times fx rate over rows carrying both, present only
    /// when strictly positive.
    pub reference_currency_total: Option<Decimal>,
}

/// Row and dimension counts over the whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStats {
    pub position_count: i64,
    pub is_empty: bool,
    pub account_count: usize,
    pub partner_count: usize,
    pub currency_count: usize,
    pub asset_class_count: usize,
}
