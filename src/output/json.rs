//! JSON output formatter for machine processing

use crate::domain::{CheckReport, UpdateEvent};
use crate::output::OutputFormatter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    checked_at: DateTime<Utc>,
    summary: JsonSummary,
    events: &'a [UpdateEvent],
    updated: &'a [String],
    failed: &'a [String],
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    checked: usize,
    updated: usize,
    failed: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            checked_at: report.checked_at,
            summary: JsonSummary {
                checked: report.total_checked(),
                updated: report.total_updates(),
                failed: report.total_failures(),
            },
            events: &report.events,
            updated: &report.updated,
            failed: &report.failed,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
