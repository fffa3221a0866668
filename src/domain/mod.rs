//! Core domain models for softup
//!
//! This module contains the fundamental types used throughout the application:
//! - Source kinds for the supported upstream registries
//! - Package records loaded from configuration
//! - Observations returned by source adapters
//! - Update events and the per-run report

mod observation;
mod package;
mod report;
mod source;
mod update_event;

pub use observation::Observation;
pub use package::PackageRecord;
pub use report::CheckReport;
pub use source::SourceKind;
pub use update_event::{UpdateEvent, UpdateKind};
