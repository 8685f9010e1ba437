//! Statistics sources.
//!
//! The collector only sees `StatisticsSource`; production uses `SesSource`.

pub mod ses;

use async_trait::async_trait;
use ses_exporter_core::error::Result;
use ses_exporter_core::model::Statistics;

pub use ses::SesSource;

/// Fetches one quota record and one statistics series. Implementations must
/// not cache between calls.
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    async fn fetch(&self) -> Result<Statistics>;
}
