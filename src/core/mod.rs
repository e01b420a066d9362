//! Core module for grade tracking and projection

pub mod config;
pub mod gradebook;
pub mod grading;
pub mod models;
pub mod report;
pub mod store;

/// Returns the current version of the `GradePro` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
