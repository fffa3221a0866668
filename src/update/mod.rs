//! Update detection for tracked packages
//!
//! Given the state recorded for a package and the latest observation from its
//! source, the evaluator decides whether anything changed and records it.
//! Version tokens are compared for exact equality only.

use crate::domain::{Observation, PackageRecord, UpdateEvent};
use crate::error::SourceError;

/// Update detection engine
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateEvaluator;

impl UpdateEvaluator {
    /// Create a new UpdateEvaluator
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a fetch outcome against a record
    ///
    /// A failed fetch yields an `error` event and leaves the record untouched.
    pub fn evaluate_outcome(
        &self,
        record: &mut PackageRecord,
        outcome: Result<Observation, SourceError>,
    ) -> UpdateEvent {
        match outcome {
            Ok(observation) => self.evaluate(record, &observation),
            Err(e) => UpdateEvent::error(&record.name, e.to_string()),
        }
    }

    /// Evaluate an observation against a record, updating the record in place
    ///
    /// A changed pre-release wins over a changed stable version; in that case
    /// the stable version is not looked at until the next run. The stable check
    /// compares the version token only, so a pre-release that is already
    /// recorded moves into the stable slot on the following run.
    pub fn evaluate(&self, record: &mut PackageRecord, observation: &Observation) -> UpdateEvent {
        if !observation.is_stable && observation.version != record.prerelease() {
            record.prerelease_version = Some(observation.version.clone());
            record.link = Some(observation.link.clone());
            return UpdateEvent::prerelease(&record.name, &observation.version, &observation.link);
        }

        if observation.version != record.stable() {
            record.stable_version = Some(observation.version.clone());
            record.link = Some(observation.link.clone());
            return UpdateEvent::stable(&record.name, &observation.version, &observation.link);
        }

        UpdateEvent::no_change(&record.name)
    }
}
