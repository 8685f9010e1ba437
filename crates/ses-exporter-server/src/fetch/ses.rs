//! Amazon SES statistics source backed by the AWS SDK.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ses::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ses::types::SendDataPoint as SdkDataPoint;
use aws_sdk_ses::Client;
use chrono::{DateTime, Utc};

use ses_exporter_core::error::{ExporterError, Result};
use ses_exporter_core::model::{QuotaSnapshot, SendDataPoint, Statistics};

use super::StatisticsSource;

const GET_SEND_QUOTA: &str = "GetSendQuota";
const GET_SEND_STATISTICS: &str = "GetSendStatistics";

/// Region label used when the SDK could not resolve one.
const UNKNOWN_REGION: &str = "unknown";

/// Reads the shared AWS config (env, profile files, instance role) on every
/// fetch, so credential or region changes apply on the next scrape.
#[derive(Debug, Default)]
pub struct SesSource;

impl SesSource {
    pub fn new() -> Self {
        Self
    }

    async fn client(&self) -> Client {
        let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Client::new(&shared)
    }
}

#[async_trait]
impl StatisticsSource for SesSource {
    async fn fetch(&self) -> Result<Statistics> {
        let client = self.client().await;
        let region = client
            .config()
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| UNKNOWN_REGION.to_string());

        let stats = client
            .get_send_statistics()
            .send()
            .await
            .map_err(|e| classify(GET_SEND_STATISTICS, e))?;

        let quota = client
            .get_send_quota()
            .send()
            .await
            .map_err(|e| classify(GET_SEND_QUOTA, e))?;

        let data_points = stats
            .send_data_points()
            .iter()
            .filter_map(|p| convert_point(&region, p))
            .collect();

        Ok(Statistics {
            region,
            // GetSendQuota always returns all three fields; the SDK's 0.0
            // default only applies to a response SES never sends.
            quota: QuotaSnapshot {
                max_24h_send: quota.max24_hour_send(),
                max_send_rate: quota.max_send_rate(),
                sent_last_24h: quota.sent_last24_hours(),
            },
            data_points,
        })
    }
}

fn convert_point(region: &str, p: &SdkDataPoint) -> Option<SendDataPoint> {
    let Some(ts) = p.timestamp() else {
        tracing::warn!(%region, "dropping send data point without timestamp");
        return None;
    };
    let Some(timestamp) = DateTime::<Utc>::from_timestamp(ts.secs(), ts.subsec_nanos()) else {
        tracing::warn!(
            %region,
            secs = ts.secs(),
            "dropping send data point with out-of-range timestamp"
        );
        return None;
    };

    Some(SendDataPoint {
        timestamp,
        bounces: p.bounces(),
        complaints: p.complaints(),
        delivery_attempts: p.delivery_attempts(),
        rejects: p.rejects(),
    })
}

/// Service errors keep their code verbatim; everything else is a transport failure.
fn classify<E, R>(operation: &'static str, err: SdkError<E, R>) -> ExporterError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match &err {
        SdkError::ServiceError(_) => ExporterError::from_api_code(
            operation,
            err.code().unwrap_or("Unknown"),
            err.message().unwrap_or_default(),
        ),
        _ => ExporterError::Transport(format!("{operation}: {}", DisplayErrorContext(&err))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    use aws_sdk_ses::error::ErrorMetadata;
    use aws_sdk_ses::operation::get_send_quota::GetSendQuotaError;
    use aws_sdk_ses::primitives::DateTime as SdkDateTime;
    use aws_smithy_runtime_api::http::{Response, StatusCode};
    use aws_smithy_types::body::SdkBody;
    use ses_exporter_core::error::ErrorCode;

    fn service_error(code: &str) -> SdkError<GetSendQuotaError, Response> {
        let meta = ErrorMetadata::builder()
            .code(code)
            .message("from ses")
            .build();
        let raw = Response::new(StatusCode::try_from(400).unwrap(), SdkBody::empty());
        SdkError::service_error(GetSendQuotaError::generic(meta), raw)
    }

    #[test]
    fn throttle_service_error_is_throttled() {
        let err = classify(GET_SEND_QUOTA, service_error("Throttling"));
        assert_eq!(err.code(), ErrorCode::Throttled);
        match err {
            ExporterError::Throttled { operation, code, message } => {
                assert_eq!(operation, "GetSendQuota");
                assert_eq!(code, "Throttling");
                assert_eq!(message, "from ses");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn other_service_error_keeps_code() {
        let err = classify(GET_SEND_QUOTA, service_error("AccessDenied"));
        assert_eq!(err.code(), ErrorCode::ApiError);
        assert!(err.to_string().contains("AccessDenied"));
    }

    #[test]
    fn non_service_error_is_transport() {
        let err: SdkError<GetSendQuotaError, Response> = SdkError::timeout_error("timed out");
        let err = classify(GET_SEND_QUOTA, err);
        assert_eq!(err.code(), ErrorCode::Transport);
        assert!(err.to_string().contains("GetSendQuota"));
    }

    #[test]
    fn point_without_timestamp_is_dropped() {
        let p = SdkDataPoint::builder().bounces(4).build();
        assert!(convert_point("us-east-1", &p).is_none());
    }

    #[test]
    fn point_with_timestamp_is_converted() {
        let p = SdkDataPoint::builder()
            .timestamp(SdkDateTime::from_secs(1_709_287_500))
            .bounces(5)
            .complaints(2)
            .delivery_attempts(100)
            .rejects(1)
            .build();
        let got = convert_point("us-east-1", &p).unwrap();
        assert_eq!(got.timestamp.timestamp(), 1_709_287_500);
        assert_eq!(got.bounces, 5);
        assert_eq!(got.complaints, 2);
        assert_eq!(got.delivery_attempts, 100);
        assert_eq!(got.rejects, 1);
    }
}
