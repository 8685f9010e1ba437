//! SES exporter core: data model, error types, latest-sample selection, and
//! metric descriptors with text exposition rendering.
//!
//! This crate carries no HTTP or AWS SDK dependencies. The server crate wires
//! it to the SES API and the scrape endpoint; tests can drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `ExporterError`/`Result` so a bad response never takes the
//! process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod descriptor;
pub mod error;
pub mod exposition;
pub mod model;
pub mod select;

pub use descriptor::{DescriptorSet, GaugeSource, MetricDescriptor};
/// Shared result type.
pub use error::{ErrorCode, ExporterError, Result};
pub use model::{QuotaSnapshot, SendDataPoint, Statistics};
pub use select::select_latest;
