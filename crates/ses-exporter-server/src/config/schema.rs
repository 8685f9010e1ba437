use std::net::SocketAddr;

use serde::Deserialize;
use ses_exporter_core::error::{ExporterError, Result};

/// Paths served by the exporter itself; the telemetry path must not shadow them.
const RESERVED_PATHS: [&str; 2] = ["/", "/healthz"];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub web: WebSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web: WebSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ExporterError::BadConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.web.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            telemetry_path: default_telemetry_path(),
        }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        let path = self.telemetry_path.as_str();
        if !path.starts_with('/') {
            return Err(ExporterError::BadConfig(
                "web.telemetry_path must start with '/'".into(),
            ));
        }
        // The path is mounted literally; axum reads `:` and `*` as captures.
        if path.contains([':', '*']) {
            return Err(ExporterError::BadConfig(format!(
                "web.telemetry_path {path:?} must not contain ':' or '*'"
            )));
        }
        if RESERVED_PATHS.contains(&path) {
            return Err(ExporterError::BadConfig(format!(
                "web.telemetry_path must not be {path}"
            )));
        }
        Ok(())
    }

    /// Parse the listen address. A bare `:port` binds every interface.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let raw = self.listen_address.trim();
        let full = if raw.starts_with(':') {
            format!("0.0.0.0{raw}")
        } else {
            raw.to_string()
        };
        full.parse().map_err(|e| {
            ExporterError::BadConfig(format!(
                "web.listen_address {raw:?} is not a valid socket address: {e}"
            ))
        })
    }
}

fn default_listen_address() -> String {
    ":9435".into()
}
fn default_telemetry_path() -> String {
    "/metrics".into()
}
