//! Shared error type across SES exporter crates.

use thiserror::Error;

/// Stable error codes, used in logs, self-metric labels and scrape-error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// SES unreachable or the response could not be decoded.
    Transport,
    /// SES answered with a structured error.
    ApiError,
    /// SES asked us to slow down.
    Throttled,
    /// The statistics series had no data points.
    EmptySeries,
    /// Invalid startup configuration.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in responses and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::ApiError => "API_ERROR",
            ErrorCode::Throttled => "THROTTLED",
            ErrorCode::EmptySeries => "EMPTY_SERIES",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// API error codes SES (and the AWS query protocol in general) uses for rate limiting.
const THROTTLE_CODES: [&str; 4] = [
    "Throttling",
    "ThrottlingException",
    "TooManyRequestsException",
    "RequestLimitExceeded",
];

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("{operation} failed with {code}: {message}")]
    Api {
        operation: &'static str,
        code: String,
        message: String,
    },
    #[error("{operation} throttled with {code}: {message}")]
    Throttled {
        operation: &'static str,
        code: String,
        message: String,
    },
    #[error("send statistics contained no data points")]
    EmptySeries,
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Build an error from a structured API error code, routing rate-limit
    /// codes to `Throttled`.
    pub fn from_api_code(
        operation: &'static str,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let message = message.into();
        if THROTTLE_CODES.contains(&code.as_str()) {
            ExporterError::Throttled { operation, code, message }
        } else {
            ExporterError::Api { operation, code, message }
        }
    }

    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExporterError::Transport(_) => ErrorCode::Transport,
            ExporterError::Api { .. } => ErrorCode::ApiError,
            ExporterError::Throttled { .. } => ErrorCode::Throttled,
            ExporterError::EmptySeries => ErrorCode::EmptySeries,
            ExporterError::BadConfig(_) => ErrorCode::BadConfig,
            ExporterError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Whether a later scrape can reasonably be expected to succeed without
    /// operator intervention.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ExporterError::Transport(_)
                | ExporterError::Throttled { .. }
                | ExporterError::EmptySeries
        )
    }
}
