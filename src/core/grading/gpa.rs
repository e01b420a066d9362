//! Grade-point conversion

use crate::core::models::{RigorClass, RigorTier};

/// Lower bounds of the grade bands and the base points each earns, highest first.
///
/// The bands are deliberately uneven; 75 is a band edge.
const GRADE_BANDS: [(f64, f64); 4] = [(90.0, 4.0), (80.0, 3.0), (75.0, 2.0), (70.0, 1.0)];

/// Base grade points for a final grade, before any rigor offset.
///
/// Each band includes its lower bound; anything below 70 earns 0.
#[must_use]
pub fn base_points(grade: f64) -> f64 {
    GRADE_BANDS
        .iter()
        .find(|(floor, _)| grade >= *floor)
        .map_or(0.0, |(_, points)| *points)
}

/// Convert a final grade into GPA points for a course of the given rigor.
///
/// Advanced courses (AP, KAP, GT) add a full point, dual-credit courses add
/// half a point, and non-GPA courses always earn zero. Malformed grades (NaN,
/// infinite, or negative) also earn zero; this function never fails.
#[must_use]
pub fn gpa_points(grade: f64, rigor: RigorClass) -> f64 {
    if !grade.is_finite() || grade < 0.0 {
        return 0.0;
    }

    match rigor.tier() {
        RigorTier::Ineligible => 0.0,
        tier => base_points(grade) + tier.bonus(),
    }
}
