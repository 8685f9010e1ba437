//! Shared application state for the exporter.

use std::sync::Arc;

use ses_exporter_core::descriptor::DescriptorSet;
use ses_exporter_core::error::Result;

use crate::collector::Collector;
use crate::config::ExporterConfig;
use crate::fetch::StatisticsSource;
use crate::obs::metrics::ExporterMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    collector: Collector,
    metrics: ExporterMetrics,
}

impl AppState {
    /// Build application state. The descriptor set is created here, once,
    /// and never changes afterwards.
    pub fn new(cfg: ExporterConfig, source: Arc<dyn StatisticsSource>) -> Result<Self> {
        cfg.validate()?;

        let collector = Collector::new(DescriptorSet::ses(), source);
        tracing::debug!(
            metrics = ?collector.describe().names(),
            "registered SES metric descriptors"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                collector,
                metrics: ExporterMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn collector(&self) -> &Collector {
        &self.inner.collector
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.inner.metrics
    }
}
