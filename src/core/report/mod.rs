//! Report generation for a student's course list
//!
//! Renders the same figures the `show` and `gpa` commands print (six-weeks,
//! semester, and yearly grades plus GPA) as a Markdown or HTML document.

pub mod formats;

use crate::core::grading::{round_half_up, CourseSummary, GradeRollup};
use crate::core::models::{Course, WeightConfig};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Placeholder shown where no grade has been recorded
pub const NO_GRADE: &str = "--";

/// Data context for report generation
///
/// Aggregates everything a report template needs, computed once from a
/// course list snapshot.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Profile the course list belongs to
    pub profile: &'a str,
    /// Courses being reported
    pub courses: &'a [Course],
    /// Computed grades and GPA rollups
    pub rollup: GradeRollup,
    /// Advisory weight warnings
    pub warnings: Vec<String>,
}

impl<'a> ReportContext<'a> {
    /// Build a report context from a course list snapshot
    #[must_use]
    pub fn new(profile: &'a str, courses: &'a [Course], warnings: Vec<String>) -> Self {
        Self {
            profile,
            courses,
            rollup: GradeRollup::from_courses(courses),
            warnings,
        }
    }

    /// Number of courses in the report
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Course summaries paired with their category weights
    pub fn rows(&self) -> impl Iterator<Item = (&CourseSummary, &WeightConfig)> {
        self.rollup
            .courses
            .iter()
            .zip(self.courses.iter().map(|c| &c.weights))
    }
}

/// Format an optional grade rounded for display, or [`NO_GRADE`] when absent
#[must_use]
pub fn display_grade(grade: Option<f64>) -> String {
    grade.map_or_else(
        || NO_GRADE.to_string(),
        |g| format!("{:.0}", round_half_up(g)),
    )
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
