//! CLI command handlers for `GradePro`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod course;
pub mod exam;
pub mod gpa;
pub mod report;
pub mod score;
pub mod show;

use grade_pro::core::gradebook::{CourseEdit, Gradebook};
use grade_pro::core::store::CourseStore;
use grade_pro::{debug, error, warn};

/// Load the stored course list into a gradebook snapshot
///
/// # Errors
/// Returns a printable message if the store cannot be read.
pub fn load_gradebook(store: &dyn CourseStore) -> Result<Gradebook, String> {
    let courses = store
        .load()
        .map_err(|e| format!("✗ Failed to load courses: {e}"))?;
    debug!("Loaded {} course(s)", courses.len());
    Ok(Gradebook::new(courses))
}

/// Persist a gradebook snapshot and surface its weight warnings
///
/// # Errors
/// Returns a printable message if the store cannot be written.
pub fn commit(store: &dyn CourseStore, book: &Gradebook) -> Result<(), String> {
    store
        .save(book.courses())
        .map_err(|e| format!("✗ Failed to save courses: {e}"))?;
    for warning in book.weight_warnings() {
        warn!("{warning}");
    }
    Ok(())
}

/// Load, edit one course, and save
///
/// # Errors
/// Returns a printable message if loading, the edit, or saving fails.
pub fn edit_course(
    store: &dyn CourseStore,
    selector: &str,
    edit: CourseEdit,
) -> Result<Gradebook, String> {
    let book = load_gradebook(store)?;
    let next = book.apply(selector, edit).map_err(|e| format!("✗ {e}"))?;
    commit(store, &next)?;
    Ok(next)
}

/// Print a handler's outcome, exiting non-zero on failure
pub fn finish(result: Result<String, String>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(message) => {
            error!("{}", message.trim_start_matches("✗ "));
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
