//! Values returned by one round of SES statistics calls.

use chrono::{DateTime, Utc};

/// Sending limits and usage from `GetSendQuota`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaSnapshot {
    /// Maximum number of emails allowed in a rolling 24 hours.
    pub max_24h_send: f64,
    /// Maximum emails per second.
    pub max_send_rate: f64,
    /// Emails sent during the previous 24 hours.
    pub sent_last_24h: f64,
}

/// One 15-minute sample from `GetSendStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendDataPoint {
    pub timestamp: DateTime<Utc>,
    pub bounces: i64,
    pub complaints: i64,
    pub delivery_attempts: i64,
    pub rejects: i64,
}

/// Result of a single fetch. `region` is whatever the API client resolved for
/// this particular fetch.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub region: String,
    pub quota: QuotaSnapshot,
    pub data_points: Vec<SendDataPoint>,
}
