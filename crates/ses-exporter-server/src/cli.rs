//! Command-line flags. Flags win over the config file, which wins over defaults.

use clap::Parser;
use ses_exporter_core::error::Result;

use crate::config::{self, ExporterConfig};

#[derive(Debug, Default, Parser)]
#[command(
    name = "ses-exporter",
    about = "Prometheus exporter for Amazon SES sending quota and statistics"
)]
pub struct Cli {
    /// Address to listen on for telemetry [default: :9435].
    #[arg(long = "web.listen-address")]
    pub listen_address: Option<String>,

    /// Path under which to expose metrics [default: /metrics].
    #[arg(long = "web.telemetry-path")]
    pub telemetry_path: Option<String>,

    /// Optional YAML config file.
    #[arg(long = "config.file")]
    pub config_file: Option<String>,
}

impl Cli {
    /// Build the effective config.
    pub fn resolve(&self) -> Result<ExporterConfig> {
        let mut cfg = match &self.config_file {
            Some(path) => config::load_from_file(path)?,
            None => ExporterConfig::default(),
        };

        if let Some(addr) = &self.listen_address {
            cfg.web.listen_address = addr.clone();
        }
        if let Some(path) = &self.telemetry_path {
            cfg.web.telemetry_path = path.clone();
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
