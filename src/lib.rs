//! Shared library for `GradePro`
//! Contains the grade aggregation engine and the supporting course, storage,
//! configuration, and reporting layers used by the `gradepro` CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
