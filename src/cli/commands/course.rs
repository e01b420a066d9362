//! Course command handler

use super::{commit, edit_course, finish, load_gradebook};
use crate::args::CourseSubcommand;
use grade_pro::config::Config;
use grade_pro::core::gradebook::CourseEdit;
use grade_pro::core::models::{Category, Course, RigorClass};
use grade_pro::core::store::CourseStore;
use grade_pro::{info, verbose};

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, store: &dyn CourseStore, config: &Config) {
    let result = match subcommand {
        CourseSubcommand::List => handle_list(store),
        CourseSubcommand::Add { name, rigor } => handle_add(store, config, name, rigor),
        CourseSubcommand::Remove { course } => handle_remove(store, &course),
        CourseSubcommand::Rename { course, name } => {
            edit_course(store, &course, CourseEdit::Rename(name.clone()))
                .map(|_| format!("✓ Renamed '{course}' to '{name}'"))
        }
        CourseSubcommand::Rigor { course, rigor } => {
            edit_course(store, &course, CourseEdit::SetRigor(rigor))
                .map(|_| format!("✓ Set '{course}' type to {rigor}"))
        }
        CourseSubcommand::Weights {
            course,
            major,
            minor,
            other,
        } => handle_weights(store, &course, [major, minor, other]),
    };
    finish(result);
}

fn handle_list(store: &dyn CourseStore) -> Result<String, String> {
    let book = load_gradebook(store)?;
    if book.courses().is_empty() {
        return Ok("No courses yet. Add one with `gradepro course add <NAME>`.".to_string());
    }

    let mut lines = vec![format!("\n=== Courses ({}) ===\n", book.courses().len())];
    for course in book.courses() {
        lines.push(format!(
            "  {:<24} {:<7} {}",
            course.name,
            course.rigor.code(),
            course.weights
        ));
        verbose!("    id: {}", course.id);
    }
    Ok(lines.join("\n"))
}

fn handle_add(
    store: &dyn CourseStore,
    config: &Config,
    name: String,
    rigor: Option<RigorClass>,
) -> Result<String, String> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err("✗ Course name cannot be empty".to_string());
    }

    let rigor = rigor.unwrap_or_else(|| config.default_rigor());
    let course = Course::new(name, rigor, config.default_weights());
    info!("Adding course '{}' ({})", course.name, course.id);

    let message = format!(
        "✓ Added course '{}' ({}, {})",
        course.name, course.rigor, course.weights
    );
    let book = load_gradebook(store)?.add_course(course);
    commit(store, &book)?;
    Ok(message)
}

fn handle_remove(store: &dyn CourseStore, selector: &str) -> Result<String, String> {
    let book = load_gradebook(store)?;
    let removed = book.find(selector).map_err(|e| format!("✗ {e}"))?.name.clone();
    let next = book.remove_course(selector).map_err(|e| format!("✗ {e}"))?;
    commit(store, &next)?;
    info!("Removed course '{removed}'");
    Ok(format!("✓ Removed course '{removed}'"))
}

fn handle_weights(
    store: &dyn CourseStore,
    selector: &str,
    values: [Option<u32>; 3],
) -> Result<String, String> {
    let mut book = load_gradebook(store)?;
    let mut changed = false;

    for (category, value) in Category::ALL.into_iter().zip(values) {
        if let Some(value) = value {
            book = book
                .apply(selector, CourseEdit::SetWeight { category, value })
                .map_err(|e| format!("✗ {e}"))?;
            changed = true;
        }
    }

    let course = book.find(selector).map_err(|e| format!("✗ {e}"))?;
    let summary = format!(
        "{}: major {}% / minor {}% / other {}% (total {}%)",
        course.name,
        course.weights.major,
        course.weights.minor,
        course.weights.other,
        course.weights.total()
    );

    if changed {
        commit(store, &book)?;
        Ok(format!("✓ Updated weights for {summary}"))
    } else {
        Ok(summary)
    }
}
