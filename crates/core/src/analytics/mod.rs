pub(crate) mod analytics_model;
pub(crate) mod analytics_service;
pub(crate) mod analytics_traits;

pub use analytics_model::{
    AccountDetails, AccountSummary, AllocationEntry, DatabaseStats, PartnerSummary,
    PortfolioSummary, PositionSummary, RiskLevel, RiskMetrics,
};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
