//! Per-run report accumulated by the batch runner

use super::UpdateEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one run found, in run order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// When the run started
    pub checked_at: DateTime<Utc>,
    /// One event per configured package
    pub events: Vec<UpdateEvent>,
    /// Packages with a new stable or pre-release version
    pub updated: Vec<String>,
    /// Packages that could not be checked
    pub failed: Vec<String>,
}

impl CheckReport {
    /// Creates an empty report stamped with the current time
    pub fn new() -> Self {
        Self::with_time(Utc::now())
    }

    /// Creates an empty report with a custom timestamp (for testing)
    pub fn with_time(checked_at: DateTime<Utc>) -> Self {
        Self {
            checked_at,
            events: Vec::new(),
            updated: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Adds an event, tracking updated and failed package names
    pub fn add_event(&mut self, event: UpdateEvent) {
        if event.is_update() {
            self.updated.push(event.package.clone());
        } else if event.is_error() {
            self.failed.push(event.package.clone());
        }
        self.events.push(event);
    }

    /// Returns the number of packages checked
    pub fn total_checked(&self) -> usize {
        self.events.len()
    }

    /// Returns the number of updated packages
    pub fn total_updates(&self) -> usize {
        self.updated.len()
    }

    /// Returns the number of failed packages
    pub fn total_failures(&self) -> usize {
        self.failed.len()
    }

    /// Returns true if any package failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Returns the event for a package
    pub fn event(&self, package: &str) -> Option<&UpdateEvent> {
        self.events.iter().find(|e| e.package == package)
    }
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}
