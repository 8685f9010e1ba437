//! Metric descriptors for the SES gauges.
//!
//! The set is built once at startup and only read afterwards. It is advertised
//! on its own (`DescriptorSet::iter`) so the metric names can be enumerated
//! before any fetch has succeeded.

use crate::error::Result;
use crate::exposition::Sample;
use crate::model::{QuotaSnapshot, SendDataPoint, Statistics};
use crate::select::select_latest;

/// Metric namespace shared by every SES gauge.
pub const NAMESPACE: &str = "ses";

/// Label carried by every SES gauge.
pub const REGION_LABEL: &str = "aws_region";

/// Join the non-empty parts with `_`.
pub fn fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    [namespace, subsystem, name]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

/// Which field of a fetch a gauge reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeSource {
    Max24HourSend,
    MaxSendRate,
    SentLast24Hours,
    Bounces,
    Complaints,
    DeliveryAttempts,
    Rejects,
}

impl GaugeSource {
    pub fn value(self, quota: &QuotaSnapshot, latest: &SendDataPoint) -> f64 {
        match self {
            GaugeSource::Max24HourSend => quota.max_24h_send,
            GaugeSource::MaxSendRate => quota.max_send_rate,
            GaugeSource::SentLast24Hours => quota.sent_last_24h,
            GaugeSource::Bounces => latest.bounces as f64,
            GaugeSource::Complaints => latest.complaints as f64,
            GaugeSource::DeliveryAttempts => latest.delivery_attempts as f64,
            GaugeSource::Rejects => latest.rejects as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub fq_name: String,
    pub help: &'static str,
    pub label_names: Vec<&'static str>,
    pub source: GaugeSource,
}

impl MetricDescriptor {
    pub fn new(name: &str, help: &'static str, source: GaugeSource) -> Self {
        Self {
            fq_name: fq_name(NAMESPACE, "", name),
            help,
            label_names: vec![REGION_LABEL],
            source,
        }
    }
}

/// Read-only registry of the gauges the exporter publishes.
#[derive(Debug, Clone)]
pub struct DescriptorSet {
    descriptors: Vec<MetricDescriptor>,
}

impl DescriptorSet {
    /// The seven SES gauges, quota first, then the latest data point.
    pub fn ses() -> Self {
        let descriptors = vec![
            MetricDescriptor::new(
                "max24hoursend",
                "The maximum number of emails allowed to be sent in a rolling 24 hours.",
                GaugeSource::Max24HourSend,
            ),
            MetricDescriptor::new(
                "maxsendrate",
                "The maximum rate of emails allowed to be sent per second.",
                GaugeSource::MaxSendRate,
            ),
            MetricDescriptor::new(
                "sentlast24hours",
                "The number of emails sent in the last 24 hours.",
                GaugeSource::SentLast24Hours,
            ),
            MetricDescriptor::new(
                "Bounces",
                "The number of emails that have bounced.",
                GaugeSource::Bounces,
            ),
            MetricDescriptor::new(
                "Complaints",
                "Number of unwanted emails that were rejected by recipients.",
                GaugeSource::Complaints,
            ),
            MetricDescriptor::new(
                "DeliveryAttempts",
                "Number of emails that have been sent.",
                GaugeSource::DeliveryAttempts,
            ),
            MetricDescriptor::new(
                "Rejects",
                "Number of emails rejected by Amazon SES.",
                GaugeSource::Rejects,
            ),
        ];
        Self { descriptors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricDescriptor> {
        self.descriptors.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.fq_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Map one fetch onto one sample per descriptor.
    ///
    /// Fails with `EmptySeries` before producing anything when the series is
    /// empty, so quota gauges are never published alone.
    pub fn samples(&self, stats: &Statistics) -> Result<Vec<Sample<'_>>> {
        let latest = select_latest(&stats.data_points)?;
        tracing::debug!(
            region = %stats.region,
            points = stats.data_points.len(),
            latest = %latest.timestamp,
            "selected latest send data point"
        );

        Ok(self
            .descriptors
            .iter()
            .map(|desc| Sample {
                desc,
                value: desc.source.value(&stats.quota, latest),
                label_values: vec![stats.region.clone()],
            })
            .collect())
    }
}
