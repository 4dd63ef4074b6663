//! Log setup and one-line JSON records. Logs go to stderr so stdout carries
//! only the report.

use crate::error::AssessmentError;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Single-line record for a failed assessment. Never carries a probability.
#[derive(Debug, Serialize)]
pub struct LogEvent<'a> {
    pub ts: String,
    pub outcome: &'a str,
    pub error_kind: &'a str,
    pub error: String,
}

impl<'a> LogEvent<'a> {
    pub fn failure(e: &'a AssessmentError) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339(),
            outcome: "failed",
            error_kind: e.kind(),
            error: e.to_string(),
        }
    }
}

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber, level from RUST_LOG or the configured default.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry().with(filter).with(fmt).try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init();
        }
    }

    /// Write one JSON line without going through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event).map_err(std::io::Error::other)?;
        writeln!(w, "{}", line)
    }
}
