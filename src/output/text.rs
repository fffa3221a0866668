//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per updated or failed package, colored by kind
//! - Unchanged packages in verbose mode
//! - Summary with the list of failed packages

use crate::domain::{CheckReport, UpdateEvent, UpdateKind};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Minimum width of the package name column
const MIN_NAME_WIDTH: usize = 20;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_color(verbosity, true)
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Whether an event gets its own line at this verbosity
    fn shows(&self, event: &UpdateEvent) -> bool {
        match self.verbosity {
            Verbosity::Quiet => false,
            Verbosity::Normal => event.kind != UpdateKind::NoChange,
            Verbosity::Verbose => true,
        }
    }

    fn kind_label(&self, kind: UpdateKind) -> String {
        if !self.color {
            return kind.label().to_string();
        }
        match kind {
            UpdateKind::Stable => kind.label().green().bold().to_string(),
            UpdateKind::Prerelease => kind.label().yellow().to_string(),
            UpdateKind::NoChange => kind.label().dimmed().to_string(),
            UpdateKind::Error => kind.label().red().bold().to_string(),
        }
    }

    /// Format a single event line
    fn format_event_line(
        &self,
        event: &UpdateEvent,
        name_width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let label = self.kind_label(event.kind);
        let name = format!("{:width$}", event.package, width = name_width);

        let detail = match event.kind {
            UpdateKind::Stable | UpdateKind::Prerelease => {
                let version = event.version.as_deref().unwrap_or("");
                let link = event.link.as_deref().unwrap_or("");
                if self.color {
                    format!("{} {}", version.bright_white().bold(), link.dimmed())
                } else {
                    format!("{} {}", version, link)
                }
            }
            UpdateKind::NoChange => String::new(),
            UpdateKind::Error => {
                let message = event.error.as_deref().unwrap_or("unknown error");
                if self.color {
                    message.dimmed().to_string()
                } else {
                    message.to_string()
                }
            }
        };

        let line = format!("  {} [{}] {}", name, label, detail);
        writeln!(writer, "{}", line.trim_end())
    }

    /// Format the closing summary
    fn format_summary(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let checked = report.total_checked();
        let updated = report.total_updates();
        let failed = report.total_failures();

        if self.color {
            writeln!(
                writer,
                "{} checked, {} updated, {} failed",
                checked.to_string().bold(),
                updated.to_string().green(),
                if failed > 0 {
                    failed.to_string().red().to_string()
                } else {
                    failed.to_string().dimmed().to_string()
                }
            )?;
        } else {
            writeln!(
                writer,
                "{} checked, {} updated, {} failed",
                checked, updated, failed
            )?;
        }

        if !report.failed.is_empty() {
            writeln!(writer, "Failed: {}", report.failed.join(", "))?;
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let shown: Vec<&UpdateEvent> = report.events.iter().filter(|e| self.shows(e)).collect();

        if !shown.is_empty() {
            let name_width = shown
                .iter()
                .map(|e| e.package.len())
                .max()
                .unwrap_or(0)
                .max(MIN_NAME_WIDTH);

            for event in &shown {
                self.format_event_line(event, name_width, writer)?;
            }
            writeln!(writer)?;
        }

        self.format_summary(report, writer)
    }
}
