//! Batch runner coordinating one check over every tracked package
//!
//! This module provides:
//! - Workflow coordination: resolve source → fetch → evaluate → report
//! - Strictly sequential processing in configuration order
//! - Per-package error isolation with an accumulated failure list

use crate::domain::{CheckReport, PackageRecord, UpdateEvent, UpdateKind};
use crate::progress::Progress;
use crate::registry::Registry;
use crate::update::UpdateEvaluator;
use tracing::{debug, info, warn};

/// Batch runner for a check run
pub struct Orchestrator {
    /// Adapters for every supported source
    registry: Registry,
    /// Update detection engine
    evaluator: UpdateEvaluator,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl Orchestrator {
    /// Create a new orchestrator over the given registry
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            evaluator: UpdateEvaluator::new(),
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check every record once, in order, updating records in place
    pub async fn run(&self, records: &mut [PackageRecord]) -> CheckReport {
        let mut progress = Progress::new(self.show_progress);
        let mut report = CheckReport::new();

        progress.start(records.len() as u64, "Checking packages");

        for record in records.iter_mut() {
            progress.set_message(&format!("Checking {}", record.name));
            let event = self.check(record).await;
            progress.suspend(|| log_event(&event));
            report.add_event(event);
            progress.inc();
        }

        progress.finish_and_clear();

        if report.has_failures() {
            warn!(
                "{} package(s) could not be checked: {}",
                report.total_failures(),
                report.failed.join(", ")
            );
        }

        report
    }

    /// Check a single record
    pub async fn check(&self, record: &mut PackageRecord) -> UpdateEvent {
        let outcome = match self.registry.resolve(&record.name, &record.source) {
            Ok(adapter) => {
                debug!(package = %record.name, source = %adapter.source(), "fetching");
                adapter.fetch(&record.name).await
            }
            Err(e) => Err(e),
        };

        self.evaluator.evaluate_outcome(record, outcome)
    }
}

fn log_event(event: &UpdateEvent) {
    let version = event.version.as_deref().unwrap_or("");
    match event.kind {
        UpdateKind::Prerelease => info!("Pre-release {} found for {}", version, event.package),
        UpdateKind::Stable => info!("Stable release {} found for {}", version, event.package),
        UpdateKind::NoChange => warn!("No new versions found for {}", event.package),
        UpdateKind::Error => warn!(
            "No info found for package {}: {}",
            event.package,
            event.error.as_deref().unwrap_or("unknown error")
        ),
    }
}
