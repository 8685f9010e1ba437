//! Scrape-time collector: fetch once, map onto the descriptor set.

use std::sync::Arc;

use ses_exporter_core::descriptor::DescriptorSet;
use ses_exporter_core::error::Result;
use ses_exporter_core::exposition::{self, Sample};

use crate::fetch::StatisticsSource;

/// Holds the read-only descriptor set and the statistics source. Nothing from
/// one scrape survives into the next.
pub struct Collector {
    descriptors: DescriptorSet,
    source: Arc<dyn StatisticsSource>,
}

impl Collector {
    pub fn new(descriptors: DescriptorSet, source: Arc<dyn StatisticsSource>) -> Self {
        Self { descriptors, source }
    }

    /// Advertised metrics, available whether or not a fetch ever succeeded.
    pub fn describe(&self) -> &DescriptorSet {
        &self.descriptors
    }

    /// Fetch and map. Either every gauge is produced or none is.
    pub async fn collect(&self) -> Result<Vec<Sample<'_>>> {
        let stats = self.source.fetch().await?;
        self.descriptors.samples(&stats)
    }

    /// Fetch and render the SES gauges into `out`.
    pub async fn render(&self, out: &mut String) -> Result<usize> {
        let samples = self.collect().await?;
        exposition::render_gauges(&samples, out);
        Ok(samples.len())
    }
}
