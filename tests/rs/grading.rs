//! Integration tests for grade aggregation and GPA conversion.

use grade_pro::core::grading::{
    category_average, final_grade, gpa_points, period_grade, round_half_up, semester_grade,
    GradeRollup,
};
use grade_pro::core::models::{Course, GradingPeriod, RigorClass, Semester, WeightConfig};

fn course(rigor: RigorClass) -> Course {
    Course::with_id(
        "c".to_string(),
        "Course".to_string(),
        rigor,
        WeightConfig::default(),
    )
}

fn major_only(score: f64) -> GradingPeriod {
    GradingPeriod {
        major: vec![score],
        ..GradingPeriod::default()
    }
}

#[test]
fn test_category_average_basics() {
    assert_eq!(category_average(&[]), None);
    assert_eq!(category_average(&[73.0]), Some(73.0));
    assert_eq!(category_average(&[100.0, 90.0, 80.0]), Some(90.0));
}

#[test]
fn test_period_grade_absent_only_without_data() {
    let weights = WeightConfig::default();
    assert_eq!(period_grade(&GradingPeriod::default(), &weights), None);

    let only_other = GradingPeriod {
        other: vec![50.0],
        ..GradingPeriod::default()
    };
    assert!(period_grade(&only_other, &weights).is_some());
}

#[test]
fn test_period_grade_stays_within_category_averages() {
    let cases = [
        (vec![100.0, 90.0], vec![80.0], vec![70.0], WeightConfig::new(50, 35, 15)),
        (vec![40.0], vec![100.0], vec![85.0, 95.0], WeightConfig::new(10, 10, 80)),
        (vec![150.0], vec![0.0], vec![60.0], WeightConfig::new(34, 33, 33)),
        (vec![88.0], vec![91.0], vec![79.0], WeightConfig::new(70, 0, 40)),
    ];

    for (major, minor, other, weights) in cases {
        let averages = [
            category_average(&major).expect("major"),
            category_average(&minor).expect("minor"),
            category_average(&other).expect("other"),
        ];
        let lo = averages.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let grade = period_grade(&GradingPeriod { major, minor, other }, &weights)
            .expect("period has data");
        assert!(
            grade >= lo - 1e-9 && grade <= hi + 1e-9,
            "{grade} outside [{lo}, {hi}]"
        );
    }
}

#[test]
fn test_period_grade_worked_example() {
    let period = GradingPeriod {
        major: vec![100.0, 90.0],
        minor: vec![80.0],
        other: Vec::new(),
    };
    let grade = period_grade(&period, &WeightConfig::default()).expect("grade");
    assert!((grade - 88.823_529).abs() < 1e-4);
}

#[test]
fn test_zero_total_weight_with_data_is_zero() {
    let weights = WeightConfig::new(0, 0, 0);
    assert_eq!(period_grade(&major_only(95.0), &weights), Some(0.0));
}

#[test]
fn test_period_grade_with_extreme_weights() {
    let period = GradingPeriod {
        major: vec![90.0],
        minor: vec![70.0],
        other: Vec::new(),
    };

    for weights in [
        WeightConfig::new(3_000_000_000, 3_000_000_000, 0),
        WeightConfig::new(u32::MAX, u32::MAX, 0),
    ] {
        let grade = period_grade(&period, &weights).expect("period has data");
        assert!((grade - 80.0).abs() < 1e-9, "got {grade}");
    }
}

#[test]
fn test_gpa_reference_points() {
    assert!((gpa_points(95.0, RigorClass::Ap) - 5.0).abs() < f64::EPSILON);
    assert!((gpa_points(82.0, RigorClass::Academic) - 3.0).abs() < f64::EPSILON);
    assert!((gpa_points(72.0, RigorClass::DualCredit) - 1.5).abs() < f64::EPSILON);
    assert!(gpa_points(60.0, RigorClass::Academic).abs() < f64::EPSILON);
}

#[test]
fn test_gpa_non_gpa_is_always_zero() {
    for grade in [0.0, 69.9, 70.0, 75.0, 80.0, 90.0, 100.0, 150.0] {
        assert!(gpa_points(grade, RigorClass::NonGpa).abs() < f64::EPSILON);
    }
}

#[test]
fn test_gpa_malformed_grades_are_zero() {
    for rigor in RigorClass::ALL {
        assert!(gpa_points(f64::NAN, rigor).abs() < f64::EPSILON);
        assert!(gpa_points(f64::INFINITY, rigor).abs() < f64::EPSILON);
        assert!(gpa_points(-5.0, rigor).abs() < f64::EPSILON);
    }
}

#[test]
fn test_empty_course_final_grade_is_zero() {
    let c = course(RigorClass::Academic);
    assert_eq!(semester_grade(&c, Semester::First), None);
    assert!(final_grade(&c).abs() < f64::EPSILON);
}

#[test]
fn test_single_semester_with_exam() {
    let mut c = course(RigorClass::Regular);
    c.periods[0] = major_only(90.0);
    c.periods[2] = major_only(80.0);
    c.exams.sem1 = Some(88.0);

    // Period mean 85: 85 * 0.85 + 88 * 0.15 = 85.45
    let expected = round_half_up(85.0 * 0.85 + 88.0 * 0.15);
    assert_eq!(semester_grade(&c, Semester::First), Some(expected));
    assert!((final_grade(&c) - 85.0).abs() < f64::EPSILON);
}

#[test]
fn test_semester_rounding_differs_from_per_period_rounding() {
    let mut c = course(RigorClass::Academic);
    c.periods[0] = major_only(84.4);
    c.periods[1] = major_only(84.4);
    c.periods[2] = major_only(85.0);

    // Rounded once: mean 84.6 -> 85
    assert_eq!(semester_grade(&c, Semester::First), Some(85.0));

    // Rounding each period first would give (84 + 84 + 85) / 3 -> 84
    let per_period: f64 = c.periods[..3]
        .iter()
        .filter_map(|p| period_grade(p, &c.weights))
        .map(round_half_up)
        .sum::<f64>()
        / 3.0;
    assert!((round_half_up(per_period) - 84.0).abs() < f64::EPSILON);
}

#[test]
fn test_year_averages_both_semesters() {
    let mut c = course(RigorClass::Academic);
    c.periods[0] = major_only(90.0);
    c.periods[3] = major_only(79.0);

    // (90 + 79) / 2 = 84.5 rounds half-up
    assert!((final_grade(&c) - 85.0).abs() < f64::EPSILON);
}

#[test]
fn test_rollup_empty_list() {
    let rollup = GradeRollup::from_courses(&[]);
    assert!(rollup.courses.is_empty());
    assert!(rollup.yearly_average.abs() < f64::EPSILON);
    assert!(rollup.unweighted_gpa.abs() < f64::EPSILON);
    assert!(rollup.weighted_gpa.abs() < f64::EPSILON);
}

#[test]
fn test_rollup_mixed_rigor() {
    let mut ap = course(RigorClass::Ap);
    ap.periods[0] = major_only(91.0);
    let mut art = course(RigorClass::NonGpa);
    art.periods[0] = major_only(100.0);
    let empty = course(RigorClass::Academic);

    let rollup = GradeRollup::from_courses(&[ap, art, empty]);
    // Finals 91, 100, 0
    assert!((rollup.yearly_average - 64.0).abs() < f64::EPSILON);
    // Unweighted (4 + 4 + 0) / 3; NonGPA only drops out of the weighted figure
    assert!((rollup.unweighted_gpa - 8.0 / 3.0).abs() < 1e-12);
    assert!((rollup.weighted_gpa - 5.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_aggregation_is_idempotent() {
    let mut c = course(RigorClass::GiftedTalented);
    c.periods[1] = GradingPeriod {
        major: vec![77.0, 93.5],
        minor: vec![88.0],
        other: vec![100.0, 100.0, 65.0],
    };
    c.periods[4] = major_only(81.0);
    c.exams.sem2 = Some(72.0);
    let courses = vec![c];

    assert_eq!(
        GradeRollup::from_courses(&courses),
        GradeRollup::from_courses(&courses)
    );
}
