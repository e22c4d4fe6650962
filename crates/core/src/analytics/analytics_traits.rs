use async_trait::async_trait;

use super::analytics_model::{
    AccountDetails, AccountSummary, DatabaseStats, PartnerSummary, PortfolioSummary, RiskMetrics,
};
use crate::errors::Result;

/// Behavioural contract for aggregate views over stored positions.
#[async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    async fn get_account_summaries(&self) -> Result<Vec<AccountSummary>>;
    async fn get_account_details(&self, account_id: &str) -> Result<AccountDetails>;
    async fn get_risk_metrics(&self, account_id: &str) -> Result<RiskMetrics>;
    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;
    async fn get_partner_summary(&self, partner_id: &str) -> Result<PartnerSummary>;
    async fn get_database_stats(&self) -> Result<DatabaseStats>;
}
