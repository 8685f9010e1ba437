//! SES exporter server library.
//!
//! Wires configuration, the SES statistics source, the collector, and the
//! HTTP surface together. Consumed by the binary (`main.rs`) and by
//! integration tests, which swap in their own `StatisticsSource`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod fetch;
pub mod obs;
pub mod ops;
pub mod router;
