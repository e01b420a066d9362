//! Show command handler

use super::{finish, load_gradebook};
use grade_pro::core::grading::{CourseSummary, GradeRollup};
use grade_pro::core::models::{Course, PERIODS_PER_SEMESTER};
use grade_pro::core::report::display_grade;
use grade_pro::core::store::CourseStore;
use grade_pro::{verbose, warn};

/// Print grades for one course, or for every course plus the yearly average
pub fn run(course: Option<&str>, store: &dyn CourseStore) {
    finish(render(course, store));
}

fn render(selector: Option<&str>, store: &dyn CourseStore) -> Result<String, String> {
    let book = load_gradebook(store)?;
    for warning in book.weight_warnings() {
        warn!("{warning}");
    }

    if let Some(selector) = selector {
        let course = book.find(selector).map_err(|e| format!("✗ {e}"))?;
        return Ok(course_block(course, &CourseSummary::from_course(course)));
    }

    if book.courses().is_empty() {
        return Ok("No courses yet. Add one with `gradepro course add <NAME>`.".to_string());
    }

    let rollup = GradeRollup::from_courses(book.courses());
    let mut blocks: Vec<String> = book
        .courses()
        .iter()
        .zip(&rollup.courses)
        .map(|(course, summary)| course_block(course, summary))
        .collect();
    blocks.push(format!("Yearly Average: {:.0}%", rollup.yearly_average));
    Ok(blocks.join("\n"))
}

/// Multi-line grade breakdown for a single course
fn course_block(course: &Course, summary: &CourseSummary) -> String {
    verbose!("{} ({}): {}", course.name, course.id, course.weights);

    let mut lines = vec![format!(
        "\n=== {} ({}, {}/{}/{}) ===",
        course.name, course.rigor, course.weights.major, course.weights.minor, course.weights.other
    )];

    for (sem, chunk) in summary.periods.chunks(PERIODS_PER_SEMESTER).enumerate() {
        let periods: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(i, grade)| {
                format!(
                    "SW{} {:>3}",
                    sem * PERIODS_PER_SEMESTER + i + 1,
                    display_grade(*grade)
                )
            })
            .collect();
        lines.push(format!(
            "  Semester {}:  {}  Exam {:>3}  => {:>3}",
            sem + 1,
            periods.join("  "),
            display_grade(summary.exams[sem]),
            display_grade(summary.semesters[sem])
        ));
    }

    lines.push(format!(
        "  Year: {:.0}%  (GPA points {:.1}, unweighted {:.1})",
        summary.final_grade, summary.weighted_points, summary.unweighted_points
    ));
    lines.join("\n")
}
