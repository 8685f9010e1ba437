//! Exporter self-metrics.
//!
//! Tracks scrape outcomes as atomics and renders them after the SES gauges on
//! successful scrapes.

pub mod metrics;
