//! Grade aggregation engine
//!
//! Turns raw per-assignment scores into category averages, six-weeks period
//! grades, semester grades, and a final yearly grade. Every function here is
//! pure: it reads an immutable snapshot and never fails. A missing result
//! ("no scores recorded") is `None` and propagates through each stage,
//! distinct from a numeric zero.

pub mod gpa;
pub mod rollup;

use crate::core::models::{Category, Course, GradingPeriod, Semester, WeightConfig};

pub use gpa::gpa_points;
pub use rollup::{CourseSummary, GradeRollup};

/// Share of the semester grade carried by the averaged grading periods
pub const PERIOD_SHARE: f64 = 0.85;

/// Share of the semester grade carried by the semester exam
pub const EXAM_SHARE: f64 = 0.15;

/// Round to the nearest integer, halves rounding up.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Arithmetic mean of a score set.
///
/// Returns `None` when the set holds no usable scores. Non-finite entries
/// (NaN, infinities) are excluded rather than poisoning the mean. No clamping
/// or rounding is applied.
#[must_use]
pub fn category_average(scores: &[f64]) -> Option<f64> {
    let (sum, count) = scores
        .iter()
        .filter(|s| s.is_finite())
        .fold((0.0, 0_u32), |(sum, count), s| (sum + s, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Grade for one six-weeks period.
///
/// Each category with data contributes `average * weight / 100` to the earned
/// total and its weight to the applicable weight. The result is normalized by
/// the applicable weight only, so a period with just major grades still reports
/// a meaningful running average.
///
/// Returns `None` when no category has data, and `Some(0.0)` when data exists
/// but every populated category carries zero weight.
#[must_use]
pub fn period_grade(period: &GradingPeriod, weights: &WeightConfig) -> Option<f64> {
    let mut earned = 0.0;
    let mut total_weight = 0_u64;
    let mut has_data = false;

    for category in Category::ALL {
        if let Some(average) = category_average(period.scores(category)) {
            let weight = weights.get(category);
            earned += average * (f64::from(weight) / 100.0);
            total_weight += u64::from(weight);
            has_data = true;
        }
    }

    if !has_data {
        return None;
    }
    if total_weight == 0 {
        return Some(0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let applicable = total_weight as f64;
    Some(earned / applicable * 100.0)
}

/// Period grades for all six grading periods of a course, in order.
#[must_use]
pub fn period_grades(course: &Course) -> Vec<Option<f64>> {
    course
        .periods
        .iter()
        .map(|period| period_grade(period, &course.weights))
        .collect()
}

/// Grade for one semester.
///
/// Averages the semester's non-empty period grades (unweighted), then folds in
/// the semester exam at a fixed 85/15 split when one is recorded. The result is
/// rounded half-up; this is the first point at which any rounding happens.
///
/// Returns `None` when none of the three periods has data. An exam alone does
/// not produce a semester grade.
#[must_use]
pub fn semester_grade(course: &Course, semester: Semester) -> Option<f64> {
    let grades: Vec<f64> = course
        .semester_periods(semester)
        .iter()
        .filter_map(|period| period_grade(period, &course.weights))
        .collect();

    if grades.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let period_average = grades.iter().sum::<f64>() / grades.len() as f64;

    // Unfused on purpose: a fused multiply-add can move exact .5 ties
    #[allow(clippy::suboptimal_flops)]
    let grade = match course.exams.get(semester).filter(|exam| exam.is_finite()) {
        Some(exam) => period_average * PERIOD_SHARE + exam * EXAM_SHARE,
        None => period_average,
    };

    Some(round_half_up(grade))
}

/// Final yearly grade for a course.
///
/// Uses whichever semesters have data, averaging and rounding when both do.
/// A course with no data at all reports `0.0` instead of propagating `None`.
#[must_use]
pub fn final_grade(course: &Course) -> f64 {
    match (
        semester_grade(course, Semester::First),
        semester_grade(course, Semester::Second),
    ) {
        (Some(first), Some(second)) => round_half_up((first + second) / 2.0),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => 0.0,
    }
}
