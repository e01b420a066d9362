//! Per-course and across-course grade rollups

use super::{final_grade, gpa_points, period_grades, round_half_up, semester_grade};
use crate::core::models::{Course, RigorClass, Semester, PERIODS_PER_YEAR};

/// Every computed grade for one course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    /// Course id
    pub id: String,
    /// Course display name
    pub name: String,
    /// Rigor classification
    pub rigor: RigorClass,
    /// Unrounded six-weeks grades; `None` where nothing is recorded
    pub periods: [Option<f64>; PERIODS_PER_YEAR],
    /// Rounded semester grades; `None` where nothing is recorded
    pub semesters: [Option<f64>; 2],
    /// Recorded semester exams
    pub exams: [Option<f64>; 2],
    /// Final yearly grade (0 when the course has no data)
    pub final_grade: f64,
    /// GPA points at the course's own rigor
    pub weighted_points: f64,
    /// GPA points as if the course were Academic
    pub unweighted_points: f64,
}

impl CourseSummary {
    /// Compute the summary for a course snapshot
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        let mut periods = [None; PERIODS_PER_YEAR];
        for (slot, grade) in periods.iter_mut().zip(period_grades(course)) {
            *slot = grade;
        }

        let final_grade = final_grade(course);

        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            rigor: course.rigor,
            periods,
            semesters: Semester::ALL.map(|s| semester_grade(course, s)),
            exams: Semester::ALL.map(|s| course.exams.get(s)),
            final_grade,
            weighted_points: gpa_points(final_grade, course.rigor),
            unweighted_points: gpa_points(final_grade, RigorClass::Academic),
        }
    }
}

/// Rollups across the whole course list
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRollup {
    /// Per-course summaries, in course-list order
    pub courses: Vec<CourseSummary>,
    /// Rounded mean of final grades (0 for an empty list)
    pub yearly_average: f64,
    /// Mean GPA points with every course treated as Academic
    pub unweighted_gpa: f64,
    /// Mean GPA points using each course's rigor classification
    pub weighted_gpa: f64,
}

impl GradeRollup {
    /// Compute every rollup for a course list snapshot
    ///
    /// GPA figures divide by `max(1, n)` so an empty list reports 0 rather
    /// than failing.
    #[must_use]
    pub fn from_courses(courses: &[Course]) -> Self {
        let summaries: Vec<CourseSummary> = courses.iter().map(CourseSummary::from_course).collect();

        #[allow(clippy::cast_precision_loss)]
        let divisor = summaries.len().max(1) as f64;

        let yearly_average = if summaries.is_empty() {
            0.0
        } else {
            round_half_up(summaries.iter().map(|s| s.final_grade).sum::<f64>() / divisor)
        };
        let unweighted_gpa = summaries.iter().map(|s| s.unweighted_points).sum::<f64>() / divisor;
        let weighted_gpa = summaries.iter().map(|s| s.weighted_points).sum::<f64>() / divisor;

        Self {
            courses: summaries,
            yearly_average,
            unweighted_gpa,
            weighted_gpa,
        }
    }
}

/// Final grade of every course, in course-list order
#[must_use]
pub fn final_grades(courses: &[Course]) -> Vec<f64> {
    courses.iter().map(final_grade).collect()
}

/// Rounded mean of final grades across courses; 0 for an empty list
#[must_use]
pub fn yearly_average(courses: &[Course]) -> f64 {
    GradeRollup::from_courses(courses).yearly_average
}

/// Mean GPA points treating every course as Academic
#[must_use]
pub fn unweighted_gpa(courses: &[Course]) -> f64 {
    GradeRollup::from_courses(courses).unweighted_gpa
}

/// Mean GPA points using each course's own rigor classification
#[must_use]
pub fn weighted_gpa(courses: &[Course]) -> f64 {
    GradeRollup::from_courses(courses).weighted_gpa
}
