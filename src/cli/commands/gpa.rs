//! GPA command handler

use super::{finish, load_gradebook};
use grade_pro::core::grading::GradeRollup;
use grade_pro::core::store::CourseStore;
use grade_pro::verbose;

/// Print unweighted and weighted GPA across all courses
pub fn run(store: &dyn CourseStore) {
    finish(render(store));
}

fn render(store: &dyn CourseStore) -> Result<String, String> {
    let book = load_gradebook(store)?;
    let rollup = GradeRollup::from_courses(book.courses());

    for summary in &rollup.courses {
        verbose!(
            "  {:<24} {:<7} year {:>3.0}  points {:.1} / {:.1}",
            summary.name,
            summary.rigor.code(),
            summary.final_grade,
            summary.unweighted_points,
            summary.weighted_points
        );
    }

    Ok(format!(
        "Courses: {}\nUnweighted GPA: {:.2}\nWeighted GPA: {:.2}",
        rollup.courses.len(),
        rollup.unweighted_gpa,
        rollup.weighted_gpa
    ))
}
