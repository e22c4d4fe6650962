use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};

use super::analytics_model::{
    AccountDetails, AccountSummary, AllocationEntry, DatabaseStats, PartnerSummary,
    PortfolioSummary, PositionSummary, RiskLevel, RiskMetrics,
};
use super::analytics_traits::AnalyticsServiceTrait;
use crate::constants::REFERENCE_CURRENCY;
use crate::db::DbPool;
use crate::errors::Result;
use crate::positions::{Position, PositionError, PositionRepository};

/// Aggregation over stored positions.
///
/// All grouping runs over ordered maps, so equal inputs always produce
/// the same output order regardless of storage order.
pub struct AnalyticsService {
    repository: Arc<PositionRepository>,
}

impl AnalyticsService {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AnalyticsService {
            repository: Arc::new(PositionRepository::new(pool)),
        }
    }
}

/// Groups positions by (account, partner, currency) and sums their values.
/// Positions without an account are not addressable and are left out;
/// missing partner or currency groups under `None`.
pub(crate) fn summarize_accounts(positions: &[Position]) -> Vec<AccountSummary> {
    let mut groups: BTreeMap<(String, String, String), (Decimal, i64)> = BTreeMap::new();
    for position in positions {
        let Some(account) = position.account_id.clone() else {
            continue;
        };
        let partner = position.partner_id.clone().unwrap_or_default();
        let currency = position.value_currency.clone().unwrap_or_default();
        let entry = groups
            .entry((account, partner, currency))
            .or_insert((Decimal::ZERO, 0));
        if let Some(value) = position.value_amount {
            entry.0 += value;
        }
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(
            |((account_id, partner, currency), (total_value, position_count))| AccountSummary {
                account_id,
                partner_id: (!partner.is_empty()).then_some(partner),
                currency: (!currency.is_empty()).then_some(currency),
                total_value,
                position_count,
                average_position_value: (total_value / Decimal::from(position_count))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            },
        )
        .collect()
}

/// Value totals keyed by currency; the empty key collects positions
/// without one. Every position contributes an entry for its currency,
/// with a null value amount counting as zero, so a currency observed
/// only on valueless positions still shows up with a zero total.
fn totals_by_currency(positions: &[Position]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for position in positions {
        let key = position.value_currency.clone().unwrap_or_default();
        let value = position.value_amount.unwrap_or(Decimal::ZERO);
        *totals.entry(key).or_insert(Decimal::ZERO) += value;
    }
    totals
}

/// Row counts keyed by asset class label; unlabelled rows are left out.
fn asset_class_counts(positions: &[Position]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for position in positions {
        if let Some(label) = position.asset_class_description_short.clone() {
            *counts.entry(label).or_insert(0) += 1;
        }
    }
    counts
}

/// Reference-currency (CHF) total: value times fx rate, summed over rows
/// carrying both, surfaced only when strictly positive.
fn reference_currency_total(positions: &[Position]) -> Option<Decimal> {
    let total: Decimal = positions
        .iter()
        .filter_map(|p| Some(p.value_amount? * p.fx_rate?))
        .sum();
    (total > Decimal::ZERO).then_some(total)
}

/// Per-asset-class count and total, descending by total value with ties
/// broken by label.
pub(crate) fn asset_class_allocation(positions: &[Position]) -> Vec<AllocationEntry> {
    let mut groups: BTreeMap<String, (usize, Decimal)> = BTreeMap::new();
    for position in positions {
        let key = position
            .asset_class_description_short
            .clone()
            .unwrap_or_default();
        let entry = groups.entry(key).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        if let Some(value) = position.value_amount {
            entry.1 += value;
        }
    }

    let mut allocation: Vec<AllocationEntry> = groups
        .into_iter()
        .map(|(label, (position_count, total_value))| AllocationEntry {
            label,
            position_count,
            total_value,
        })
        .collect();
    allocation.sort_by(|a, b| b.total_value.cmp(&a.total_value).then(a.label.cmp(&b.label)));
    allocation
}

pub(crate) fn compute_risk_metrics(account_id: &str, positions: &[Position]) -> RiskMetrics {
    let values: Vec<Decimal> = positions.iter().filter_map(|p| p.value_amount).collect();
    let total_value: Decimal = values.iter().copied().sum();
    let largest_position_value = values.iter().copied().max().unwrap_or(Decimal::ZERO);

    // Ratio rounded to four places before scaling to percent, so a share
    // of 0.33335 reports as 33.34 rather than 33.33.
    let concentration_percent = if total_value > Decimal::ZERO {
        (largest_position_value / total_value)
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
            * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let average_position_value = if values.is_empty() {
        Decimal::ZERO
    } else {
        (total_value / Decimal::from(values.len() as u64))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    let asset_classes: BTreeSet<&str> = positions
        .iter()
        .filter_map(|p| p.asset_class_description_short.as_deref())
        .collect();

    // Every bucket of the totals map counts as one currency, the
    // unknown-currency bucket included.
    let totals = totals_by_currency(positions);
    let currency_count = totals.len();
    let reference_total = totals
        .get(REFERENCE_CURRENCY)
        .copied()
        .unwrap_or(Decimal::ZERO);
    let foreign_currency_exposure = total_value - reference_total;

    let has_fx_exposure = positions.iter().any(|p| {
        matches!(
            (p.value_currency.as_deref(), p.source_currency.as_deref()),
            (Some(value), Some(source)) if value != source
        )
    });

    let risk_level = if concentration_percent > Decimal::from(50) || currency_count > 5 {
        RiskLevel::High
    } else if concentration_percent > Decimal::from(25) || currency_count > 3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskMetrics {
        account_id: account_id.to_string(),
        position_count: positions.len(),
        total_value,
        largest_position_value,
        concentration_percent,
        average_position_value,
        currency_count,
        asset_class_count: asset_classes.len(),
        foreign_currency_exposure,
        has_fx_exposure,
        risk_level,
    }
}

pub(crate) fn compute_account_details(account_id: &str, positions: &[Position]) -> AccountDetails {
    let totals = totals_by_currency(positions);

    // Ascending iteration plus a strict comparison resolves ties to the
    // smallest currency code.
    let mut primary: Option<(&String, Decimal)> = None;
    for (currency, total) in &totals {
        if currency.is_empty() {
            continue;
        }
        match primary {
            Some((_, best)) if *total > best => primary = Some((currency, *total)),
            None => primary = Some((currency, *total)),
            _ => {}
        }
    }

    let summaries = positions
        .iter()
        .map(|p| PositionSummary {
            id: p.id,
            instrument_name: p.instrument_name_short.clone(),
            isin: p.isin.clone(),
            value_amount: p.value_amount,
            value_currency: p.value_currency.clone(),
            asset_class: p.asset_class_description_short.clone(),
            fx_rate: p.fx_rate,
        })
        .collect();

    AccountDetails {
        account_id: account_id.to_string(),
        partner_id: positions.first().and_then(|p| p.partner_id.clone()),
        position_count: positions.len(),
        asset_class_breakdown: asset_class_counts(positions),
        reference_currency_total: reference_currency_total(positions),
        primary_currency: primary.map(|(currency, _)| currency.clone()),
        positions: summaries,
        risk_metrics: compute_risk_metrics(account_id, positions),
        totals_by_currency: totals,
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn get_account_summaries(&self) -> Result<Vec<AccountSummary>> {
        let positions = self.repository.get_positions()?;
        Ok(summarize_accounts(&positions))
    }

    async fn get_account_details(&self, account_id: &str) -> Result<AccountDetails> {
        let positions = self.repository.get_positions_by_account(account_id)?;
        if positions.is_empty() {
            return Err(PositionError::NotFound(format!(
                "No positions for account {}",
                account_id
            ))
            .into());
        }
        Ok(compute_account_details(account_id, &positions))
    }

    async fn get_risk_metrics(&self, account_id: &str) -> Result<RiskMetrics> {
        let positions = self.repository.get_positions_by_account(account_id)?;
        if positions.is_empty() {
            return Err(PositionError::NotFound(format!(
                "No positions for account {}",
                account_id
            ))
            .into());
        }
        Ok(compute_risk_metrics(account_id, &positions))
    }

    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let positions = self.repository.get_positions()?;
        let accounts: BTreeSet<&str> = positions
            .iter()
            .filter_map(|p| p.account_id.as_deref())
            .collect();
        let partners: BTreeSet<&str> = positions
            .iter()
            .filter_map(|p| p.partner_id.as_deref())
            .collect();
        Ok(PortfolioSummary {
            position_count: positions.len() as i64,
            account_count: accounts.len(),
            partner_count: partners.len(),
            totals_by_currency: totals_by_currency(&positions),
            asset_class_allocation: asset_class_allocation(&positions),
            asset_classes: self.repository.get_distinct_asset_classes()?,
            currencies: self.repository.get_distinct_currencies()?,
            mandate_types: self.repository.get_distinct_mandate_types()?,
        })
    }

    async fn get_partner_summary(&self, partner_id: &str) -> Result<PartnerSummary> {
        let positions = self.repository.get_positions_by_partner(partner_id)?;
        if positions.is_empty() {
            return Err(PositionError::NotFound(format!(
                "No positions for partner {}",
                partner_id
            ))
            .into());
        }
        let accounts: BTreeSet<&str> = positions
            .iter()
            .filter_map(|p| p.account_id.as_deref())
            .collect();
        Ok(PartnerSummary {
            partner_id: partner_id.to_string(),
            account_count: accounts.len(),
            position_count: positions.len(),
            asset_class_allocation: asset_class_allocation(&positions),
            reference_currency_total: reference_currency_total(&positions),
            totals_by_currency: totals_by_currency(&positions),
        })
    }

    async fn get_database_stats(&self) -> Result<DatabaseStats> {
        let position_count = self.repository.count_positions()?;
        Ok(DatabaseStats {
            position_count,
            is_empty: position_count == 0,
            account_count: self.repository.get_distinct_account_ids()?.len(),
            partner_count: self.repository.get_distinct_partner_ids()?.len(),
            currency_count: self.repository.get_distinct_currencies()?.len(),
            asset_class_count: self.repository.get_distinct_asset_classes()?.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position(account: &str, currency: Option<&str>, value: Option<Decimal>) -> Position {
        Position {
            account_id: Some(account.to_string()),
            value_currency: currency.map(str::to_string),
            value_amount: value,
            ..Default::default()
        }
    }

    #[test]
    fn concentration_of_dominant_position_is_high_risk() {
        let positions = vec![
            position("A1", Some("CHF"), Some(dec!(900))),
            position("A1", Some("CHF"), Some(dec!(100))),
        ];
        let metrics = compute_risk_metrics("A1", &positions);
        assert_eq!(metrics.total_value, dec!(1000));
        assert_eq!(metrics.largest_position_value, dec!(900));
        assert_eq!(metrics.concentration_percent, dec!(90.00));
        assert_eq!(metrics.risk_level, RiskLevel::High);
    }

    #[test]
    fn four_currencies_push_risk_to_medium() {
        let positions = vec![
            position("A1", Some("CHF"), Some(dec!(100))),
            position("A1", Some("USD"), Some(dec!(100))),
            position("A1", Some("EUR"), Some(dec!(100))),
            position("A1", Some("GBP"), Some(dec!(100))),
        ];
        let metrics = compute_risk_metrics("A1", &positions);
        assert_eq!(metrics.currency_count, 4);
        assert_eq!(metrics.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn six_currencies_push_risk_to_high() {
        let positions: Vec<Position> = ["CHF", "USD", "EUR", "GBP", "JPY", "SEK"]
            .iter()
            .map(|c| position("A1", Some(c), Some(dec!(10))))
            .collect();
        let metrics = compute_risk_metrics("A1", &positions);
        assert_eq!(metrics.currency_count, 6);
        assert_eq!(metrics.risk_level, RiskLevel::High);
    }

    #[test]
    fn balanced_two_positions_are_medium_not_low() {
        // Two equal positions concentrate at exactly 50 percent, which is
        // not above the high threshold but is above the medium one.
        let positions = vec![
            position("A1", Some("CHF"), Some(dec!(500))),
            position("A1", Some("CHF"), Some(dec!(500))),
        ];
        let metrics = compute_risk_metrics("A1", &positions);
        assert_eq!(metrics.concentration_percent, dec!(50.00));
        assert_eq!(metrics.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn average_rounds_half_away_from_zero() {
        let positions = vec![
            position("A1", Some("CHF"), Some(dec!(33.33))),
            position("A1", Some("CHF"), Some(dec!(33.33))),
            position("A1", Some("CHF"), Some(dec!(33.34))),
        ];
        let metrics = compute_risk_metrics("A1", &positions);
        assert_eq!(metrics.average_position_value, dec!(33.33));

        let uneven = vec![
            position("A1", Some("CHF"), Some(dec!(50))),
            position("A1", Some("CHF"), Some(dec!(50))),
            position("A1", Some("CHF"), Some(dec!(0.01))),
        ];
        let metrics = compute_risk_metrics("A1", &uneven);
        // 100.01 / 3 = 33.336..., rounds up
        assert_eq!(metrics.average_position_value, dec!(33.34));
    }

    #[test]
    fn foreign_exposure_excludes_reference_currency() {
        let positions = vec![
            position("A1", Some("CHF"), Some(dec!(700))),
            position("A1", Some("USD"), Some(dec!(200))),
            position("A1", Some("EUR"), Some(dec!(100))),
        ];
        let metrics = compute_risk_metrics("A1", &positions);
        assert_eq!(metrics.foreign_currency_exposure, dec!(300));
    }

    #[test]
    fn fx_exposure_requires_a_currency_mismatch() {
        let mut matched_a = position("A1", Some("CHF"), Some(dec!(100)));
        matched_a.source_currency = Some("CHF".to_string());
        let mut matched_b = position("A1", Some("USD"), Some(dec!(100)));
        matched_b.source_currency = Some("USD".to_string());
        let metrics = compute_risk_metrics("A1", &[matched_a.clone(), matched_b]);
        assert!(!metrics.has_fx_exposure);

        // One mismatched pair flips the whole account
        let mut mismatched = position("A1", Some("CHF"), Some(dec!(50)));
        mismatched.source_currency = Some("EUR".to_string());
        let metrics = compute_risk_metrics("A1", &[matched_a, mismatched]);
        assert!(metrics.has_fx_exposure);
    }

    #[test]
    fn valueless_positions_count_rows_but_not_sums() {
        let positions = vec![
            position("A1", Some("CHF"), Some(dec!(100))),
            position("A1", Some("USD"), None),
        ];
        let metrics = compute_risk_metrics("A1", &positions);
        assert_eq!(metrics.position_count, 2);
        assert_eq!(metrics.total_value, dec!(100));
        // The valueless currency still gets a zero bucket
        assert_eq!(metrics.currency_count, 2);
        assert_eq!(metrics.average_position_value, dec!(100));
    }

    #[test]
    fn currencies_of_valueless_positions_count_toward_risk() {
        let mut positions = vec![position("A1", Some("CHF"), Some(dec!(100)))];
        for currency in ["USD", "EUR", "GBP", "JPY", "SEK"] {
            positions.push(position("A1", Some(currency), None));
        }

        let details = compute_account_details("A1", &positions);
        assert_eq!(details.totals_by_currency.len(), 6);
        assert_eq!(details.totals_by_currency.get("USD"), Some(&Decimal::ZERO));
        // Six distinct currencies put the account in the highest tier even
        // though only one of them carries a value
        assert_eq!(details.risk_metrics.currency_count, 6);
        assert_eq!(details.risk_metrics.risk_level, RiskLevel::High);
        assert_eq!(details.risk_metrics.total_value, dec!(100));
    }

    #[test]
    fn empty_account_yields_zeroes_and_low_risk() {
        let metrics = compute_risk_metrics("A1", &[]);
        assert_eq!(metrics.total_value, Decimal::ZERO);
        assert_eq!(metrics.concentration_percent, Decimal::ZERO);
        assert_eq!(metrics.average_position_value, Decimal::ZERO);
        assert_eq!(metrics.risk_level, RiskLevel::Low);
    }

    #[test]
    fn details_report_reference_total_only_when_positive() {
        let mut chf = position("A1", Some("CHF"), Some(dec!(700)));
        chf.fx_rate = Some(dec!(1));
        let mut usd = position("A1", Some("USD"), Some(dec!(300)));
        usd.fx_rate = Some(dec!(0.9));
        // No fx rate, so this row contributes nothing to the CHF total
        let eur = position("A1", Some("EUR"), Some(dec!(100)));

        let details = compute_account_details("A1", &[chf, usd, eur]);
        assert_eq!(details.reference_currency_total, Some(dec!(970.0)));
        assert_eq!(details.primary_currency.as_deref(), Some("CHF"));

        let mut loss = position("A1", Some("CHF"), Some(dec!(-50)));
        loss.fx_rate = Some(dec!(1));
        let unrated = position("A1", Some("USD"), Some(dec!(300)));
        let details = compute_account_details("A1", &[loss, unrated]);
        assert_eq!(details.reference_currency_total, None);
        assert_eq!(details.primary_currency.as_deref(), Some("USD"));
    }

    #[test]
    fn primary_currency_tie_resolves_to_smallest_code() {
        let positions = vec![
            position("A1", Some("USD"), Some(dec!(500))),
            position("A1", Some("EUR"), Some(dec!(500))),
        ];
        let details = compute_account_details("A1", &positions);
        assert_eq!(details.primary_currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn details_group_currencyless_values_under_empty_key() {
        let positions = vec![
            position("A1", None, Some(dec!(40))),
            position("A1", Some("CHF"), Some(dec!(60))),
        ];
        let details = compute_account_details("A1", &positions);
        assert_eq!(details.totals_by_currency.get(""), Some(&dec!(40)));
        assert_eq!(details.totals_by_currency.get("CHF"), Some(&dec!(60)));
        // The unknown-currency bucket counts as a currency for risk
        // purposes but never becomes the primary currency
        assert_eq!(details.risk_metrics.currency_count, 2);
        assert_eq!(details.primary_currency.as_deref(), Some("CHF"));
    }

    #[test]
    fn allocation_sorts_descending_with_label_tie_break() {
        let mut a = position("A1", Some("CHF"), Some(dec!(100)));
        a.asset_class_description_short = Some("Bonds".to_string());
        let mut b = position("A1", Some("CHF"), Some(dec!(300)));
        b.asset_class_description_short = Some("Equities".to_string());
        let mut c = position("A1", Some("CHF"), Some(dec!(100)));
        c.asset_class_description_short = Some("Alternatives".to_string());

        let allocation = asset_class_allocation(&[a, b, c]);
        assert_eq!(allocation.len(), 3);
        assert_eq!(allocation[0].label, "Equities");
        assert_eq!(allocation[0].total_value, dec!(300));
        // Equal totals fall back to alphabetical labels
        assert_eq!(allocation[1].label, "Alternatives");
        assert_eq!(allocation[2].label, "Bonds");
    }

    #[test]
    fn details_carry_partner_of_first_position() {
        let mut first = position("A1", Some("CHF"), Some(dec!(10)));
        first.partner_id = Some("P7".to_string());
        let second = position("A1", Some("CHF"), Some(dec!(20)));

        let details = compute_account_details("A1", &[first, second]);
        assert_eq!(details.partner_id.as_deref(), Some("P7"));
    }

    #[test]
    fn summaries_group_by_account_partner_and_currency() {
        let mut p1 = position("A1", Some("CHF"), Some(dec!(100)));
        p1.partner_id = Some("P1".to_string());
        let mut p2 = position("A1", Some("CHF"), Some(dec!(150)));
        p2.partner_id = Some("P1".to_string());
        let mut p3 = position("A1", Some("USD"), Some(dec!(50)));
        p3.partner_id = Some("P1".to_string());
        let p4 = position("A2", None, None);
        let mut unaddressable = position("A1", Some("CHF"), Some(dec!(999)));
        unaddressable.account_id = None;

        let summaries = summarize_accounts(&[p1, p2, p3, p4, unaddressable]);
        assert_eq!(summaries.len(), 3);

        assert_eq!(summaries[0].account_id, "A1");
        assert_eq!(summaries[0].currency.as_deref(), Some("CHF"));
        assert_eq!(summaries[0].total_value, dec!(250));
        assert_eq!(summaries[0].position_count, 2);
        assert_eq!(summaries[0].average_position_value, dec!(125.00));

        assert_eq!(summaries[1].currency.as_deref(), Some("USD"));
        assert_eq!(summaries[1].total_value, dec!(50));

        assert_eq!(summaries[2].account_id, "A2");
        assert_eq!(summaries[2].partner_id, None);
        assert_eq!(summaries[2].currency, None);
        assert_eq!(summaries[2].total_value, Decimal::ZERO);
        assert_eq!(summaries[2].position_count, 1);
        assert_eq!(summaries[2].average_position_value, Decimal::ZERO);
    }

    #[test]
    fn details_list_position_summaries_and_label_counts() {
        let mut a = position("A1", Some("CHF"), Some(dec!(100)));
        a.id = 1;
        a.instrument_name_short = Some("Nestle SA".to_string());
        a.isin = Some("CH0038863350".to_string());
        a.asset_class_description_short = Some("Equities".to_string());
        let mut b = position("A1", Some("USD"), Some(dec!(50)));
        b.id = 2;
        b.asset_class_description_short = Some("Equities".to_string());
        // Unlabelled row counts as a position but not in the breakdown
        let mut c = position("A1", None, None);
        c.id = 3;

        let details = compute_account_details("A1", &[a, b, c]);
        assert_eq!(details.position_count, 3);
        assert_eq!(details.positions.len(), 3);
        assert_eq!(details.positions[0].id, 1);
        assert_eq!(details.positions[0].isin.as_deref(), Some("CH0038863350"));
        assert_eq!(details.positions[2].value_amount, None);
        assert_eq!(details.asset_class_breakdown.len(), 1);
        assert_eq!(details.asset_class_breakdown.get("Equities"), Some(&2));
        assert_eq!(details.risk_metrics.asset_class_count, 1);
    }
}
