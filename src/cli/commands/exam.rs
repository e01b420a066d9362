//! Exam command handler

use super::{edit_course, finish};
use crate::args::{semester_from_arg, ExamSubcommand};
use grade_pro::core::gradebook::{clamp_score, CourseEdit, Gradebook};
use grade_pro::core::grading::semester_grade;
use grade_pro::core::models::Semester;
use grade_pro::core::report::display_grade;
use grade_pro::core::store::CourseStore;

/// Dispatch exam subcommands
pub fn run(subcommand: ExamSubcommand, store: &dyn CourseStore) {
    let result = match subcommand {
        ExamSubcommand::Set {
            course,
            semester,
            score,
        } => {
            let sem = semester_from_arg(semester);
            let edit = CourseEdit::SetExam {
                semester: sem,
                score: Some(score),
            };
            edit_course(store, &course, edit).map(|book| {
                format!(
                    "✓ Set {course} semester {semester} exam to {}{}",
                    clamp_score(score),
                    semester_summary(&book, &course, sem)
                )
            })
        }
        ExamSubcommand::Clear { course, semester } => {
            let sem = semester_from_arg(semester);
            let edit = CourseEdit::SetExam {
                semester: sem,
                score: None,
            };
            edit_course(store, &course, edit).map(|book| {
                format!(
                    "✓ Cleared {course} semester {semester} exam{}",
                    semester_summary(&book, &course, sem)
                )
            })
        }
    };
    finish(result);
}

fn semester_summary(book: &Gradebook, selector: &str, semester: Semester) -> String {
    book.find(selector).map_or_else(
        |_| String::new(),
        |course| {
            format!(
                " (S{} grade: {})",
                semester.index() + 1,
                display_grade(semester_grade(course, semester))
            )
        },
    )
}
