//! Top-level facade crate for the SES exporter.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use ses_exporter_core::*;
}

pub mod server {
    pub use ses_exporter_server::*;
}
