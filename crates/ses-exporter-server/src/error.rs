//! HTTP mapping for failed scrapes.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use ses_exporter_core::error::ExporterError;

/// Seconds a throttled scraper is asked to wait.
pub const THROTTLE_RETRY_AFTER_SECS: u64 = 60;

/// A scrape that produced no metrics. Never rendered as an empty 200.
#[derive(Debug)]
pub struct ScrapeFailure(pub ExporterError);

impl ScrapeFailure {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ExporterError::Transport(_) | ExporterError::Api { .. } => StatusCode::BAD_GATEWAY,
            ExporterError::Throttled { .. } | ExporterError::EmptySeries => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ExporterError::BadConfig(_) | ExporterError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ScrapeFailure {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = format!("scrape failed: {}: {}\n", self.0.code().as_str(), self.0);

        if matches!(self.0, ExporterError::Throttled { .. }) {
            (
                status,
                [(header::RETRY_AFTER, THROTTLE_RETRY_AFTER_SECS.to_string())],
                body,
            )
                .into_response()
        } else {
            (status, body).into_response()
        }
    }
}
