//! Prometheus text exposition format (version 0.0.4).

use std::fmt::Write;

use crate::descriptor::MetricDescriptor;

/// Content type of a rendered scrape body.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// One gauge value bound to its descriptor. `label_values` line up with
/// `desc.label_names`.
#[derive(Debug, Clone)]
pub struct Sample<'a> {
    pub desc: &'a MetricDescriptor,
    pub value: f64,
    pub label_values: Vec<String>,
}

/// Escape a label value.
pub fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape HELP text (quotes are legal there).
pub fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format a sample value. Integral values print without a fraction.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{v}")
    }
}

/// Render samples as gauges. HELP/TYPE headers are written once per run of
/// samples sharing a descriptor.
pub fn render_gauges(samples: &[Sample<'_>], out: &mut String) {
    let mut current: Option<&str> = None;
    for s in samples {
        let name = s.desc.fq_name.as_str();
        if current != Some(name) {
            let _ = writeln!(out, "# HELP {} {}", name, escape_help(s.desc.help));
            let _ = writeln!(out, "# TYPE {} gauge", name);
            current = Some(name);
        }

        let label_str = s
            .desc
            .label_names
            .iter()
            .zip(&s.label_values)
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
            .collect::<Vec<_>>()
            .join(",");
        if label_str.is_empty() {
            let _ = writeln!(out, "{} {}", name, format_value(s.value));
        } else {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, format_value(s.value));
        }
    }
}
