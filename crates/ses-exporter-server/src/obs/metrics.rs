//! Minimal self-metrics registry for the exporter.
//!
//! Counters with dynamic labels are backed by `DashMap`. Labels are flattened
//! into sorted key vectors and rendered in sorted order, so repeated scrapes
//! list series deterministically.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use ses_exporter_core::exposition::{escape_help, escape_label};

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for an exact label set, 0 if never incremented.
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();

        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Last observed duration, stored in microseconds.
#[derive(Default)]
pub struct DurationGauge {
    micros: AtomicU64,
}

impl DurationGauge {
    pub fn set(&self, d: Duration) {
        self.micros
            .store(u64::try_from(d.as_micros()).unwrap_or(u64::MAX), Ordering::Relaxed);
    }

    pub fn seconds(&self) -> f64 {
        self.micros.load(Ordering::Relaxed) as f64 / 1_000_000.0
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
        let _ = writeln!(out, "# TYPE {} gauge", name);
        let _ = writeln!(out, "{} {}", name, self.seconds());
    }
}

#[derive(Default)]
pub struct ExporterMetrics {
    pub scrapes: CounterVec,
    pub scrape_errors: CounterVec,
    pub last_scrape_duration: DurationGauge,
}

impl ExporterMetrics {
    pub fn record_success(&self, took: Duration) {
        self.scrapes.inc(&[("result", "success")]);
        self.last_scrape_duration.set(took);
    }

    pub fn record_failure(&self, code: &str, took: Duration) {
        self.scrapes.inc(&[("result", "failure")]);
        self.scrape_errors.inc(&[("code", code)]);
        self.last_scrape_duration.set(took);
    }

    /// Render all self-metrics.
    pub fn render(&self, out: &mut String) {
        self.scrapes.render(
            "ses_exporter_scrapes_total",
            "Scrapes handled, by result.",
            out,
        );
        self.scrape_errors.render(
            "ses_exporter_scrape_errors_total",
            "Failed scrapes, by error code.",
            out,
        );
        self.last_scrape_duration.render(
            "ses_exporter_last_scrape_duration_seconds",
            "Duration of the most recent SES fetch.",
            out,
        );
    }
}
