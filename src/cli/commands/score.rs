//! Score command handler

use super::{edit_course, finish};
use crate::args::ScoreSubcommand;
use grade_pro::core::gradebook::{clamp_score, CourseEdit, Gradebook, DEFAULT_NEW_SCORE};
use grade_pro::core::grading::{period_grade, round_half_up};
use grade_pro::core::models::Category;
use grade_pro::core::store::CourseStore;
use grade_pro::debug;

/// Dispatch score subcommands
///
/// Periods and score positions arrive 1-based from the command line.
pub fn run(subcommand: ScoreSubcommand, store: &dyn CourseStore) {
    let result = match subcommand {
        ScoreSubcommand::Add {
            course,
            period,
            category,
            score,
        } => {
            let category = Category::from(category);
            let score = score.unwrap_or(DEFAULT_NEW_SCORE);
            let edit = CourseEdit::AddScore {
                period: usize::from(period) - 1,
                category,
                score,
            };
            edit_course(store, &course, edit).map(|book| {
                format!(
                    "✓ Added {} to {course} SW{period} {category}{}",
                    clamp_score(score),
                    period_summary(&book, &course, period)
                )
            })
        }
        ScoreSubcommand::Set {
            course,
            period,
            category,
            index,
            score,
        } => {
            let category = Category::from(category);
            let edit = CourseEdit::SetScore {
                period: usize::from(period) - 1,
                category,
                index: usize::from(index) - 1,
                score,
            };
            edit_course(store, &course, edit).map(|book| {
                format!(
                    "✓ Set {course} SW{period} {category} #{index} to {}{}",
                    clamp_score(score),
                    period_summary(&book, &course, period)
                )
            })
        }
        ScoreSubcommand::Remove {
            course,
            period,
            category,
            index,
        } => {
            let category = Category::from(category);
            let edit = CourseEdit::RemoveScore {
                period: usize::from(period) - 1,
                category,
                index: usize::from(index) - 1,
            };
            edit_course(store, &course, edit).map(|book| {
                format!(
                    "✓ Removed {course} SW{period} {category} #{index}{}",
                    period_summary(&book, &course, period)
                )
            })
        }
    };
    finish(result);
}

/// Trailing " (SW grade: N)" for the edited period, empty when it has no data
fn period_summary(book: &Gradebook, selector: &str, period: u8) -> String {
    let Ok(course) = book.find(selector) else {
        return String::new();
    };
    let grade = course
        .period(usize::from(period) - 1)
        .and_then(|p| period_grade(p, &course.weights));
    debug!("SW{period} raw grade for '{}': {grade:?}", course.name);
    grade.map_or_else(String::new, |g| {
        format!(" (SW{period} grade: {:.0})", round_half_up(g))
    })
}
