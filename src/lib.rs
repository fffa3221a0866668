//! softup - upstream release checker library
//!
//! This library checks tracked packages for new releases on:
//! - PyPI
//! - CRAN
//! - Bioconductor
//! - GitHub releases

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod update;
