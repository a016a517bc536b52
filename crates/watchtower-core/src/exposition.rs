//! Prometheus text exposition format (version 0.0.4).
//!
//! Rendering is a pure function of a snapshot: the caller gathers current
//! instrument values into [`Sample`]s and [`render`] turns them into the
//! line-oriented body served to scrapers. Each sample becomes one block:
//!
//! ```text
//! # HELP <name> <help text>
//! # TYPE <name> <gauge|counter>
//! <name> <value>
//! ```

use std::fmt::Write;

/// Content type announced on scrape responses.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Instrument kind as written on the `# TYPE` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

/// Point-in-time value of one instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    pub value: f64,
}

/// Escape help text (`\` and newline only; quotes are legal in HELP).
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format a sample value the way Prometheus parsers expect.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        // f64 Display prints integral values without a fractional part.
        format!("{v}")
    }
}

/// Append one block for `sample` to `out`.
pub fn write_sample(sample: &Sample, out: &mut String) {
    let _ = writeln!(out, "# HELP {} {}", sample.name, escape_help(sample.help));
    let _ = writeln!(out, "# TYPE {} {}", sample.name, sample.kind.as_str());
    let _ = writeln!(out, "{} {}", sample.name, format_value(sample.value));
}

/// Render every sample in the given order.
pub fn render(samples: &[Sample]) -> String {
    let mut out = String::new();
    for s in samples {
        write_sample(s, &mut out);
    }
    out
}
