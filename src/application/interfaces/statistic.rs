use crate::error::AppError;
use crate::presentation::common::Platform;
use crate::presentation::statistic::Statistic;
use async_trait::async_trait;

/// Interface for the statistics endpoint
#[async_trait]
pub trait StatisticService: Send + Sync {
    /// Gets closed-trade and live-order statistics of an item over 48 hours
    /// and 90 days
    async fn get_statistic(
        &self,
        url_name: &str,
        platform: Option<Platform>,
    ) -> Result<Statistic, AppError>;
}
