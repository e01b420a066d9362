//! Integration tests for editing and persisting course lists.

use grade_pro::core::gradebook::{CourseEdit, Gradebook, GradebookError};
use grade_pro::core::grading::{final_grade, GradeRollup};
use grade_pro::core::models::{Category, Course, RigorClass, Semester, WeightConfig};
use grade_pro::core::report::{MarkdownReporter, ReportContext, ReportGenerator};
use grade_pro::core::store::{CourseStore, FileStore, MemoryStore};
use tempfile::TempDir;

fn add(book: &Gradebook, selector: &str, period: usize, category: Category, score: f64) -> Gradebook {
    book.apply(
        selector,
        CourseEdit::AddScore {
            period,
            category,
            score,
        },
    )
    .expect("add score")
}

#[test]
fn test_edits_never_mutate_the_source() {
    let original = Gradebook::new(MemoryStore::with_sample().load().expect("load"));
    let snapshot = original.clone();

    let edited = add(&original, "English I", 0, Category::Major, 95.0)
        .apply("1", CourseEdit::SetRigor(RigorClass::Ap))
        .expect("rigor")
        .apply(
            "1",
            CourseEdit::SetExam {
                semester: Semester::First,
                score: Some(90.0),
            },
        )
        .expect("exam");

    assert_eq!(original, snapshot);
    assert_ne!(edited, original);
    assert_eq!(edited.courses()[0].rigor, RigorClass::Ap);
    assert!(original.courses()[0].is_empty());
}

#[test]
fn test_file_store_round_trips_a_year_of_edits() {
    let dir = TempDir::new().expect("temp dir");
    let store = FileStore::new(dir.path(), "student");

    let mut book = Gradebook::new(store.load().expect("load")).add_course(Course::with_id(
        "bio".to_string(),
        "Biology".to_string(),
        RigorClass::Academic,
        WeightConfig::default(),
    ));
    for period in 0..6 {
        book = add(&book, "bio", period, Category::Major, 90.0);
        book = add(&book, "bio", period, Category::Minor, 80.0);
    }
    book = book
        .apply(
            "biology",
            CourseEdit::SetExam {
                semester: Semester::Second,
                score: Some(100.0),
            },
        )
        .expect("exam");
    store.save(book.courses()).expect("save");

    let reloaded = store.load().expect("reload");
    assert_eq!(reloaded, book.courses());
    // Each period: (45 + 28) / 85 -> 85.88; S1 86, S2 round(85.88*0.85 + 15) = 88, year 87
    assert!((final_grade(&reloaded[0]) - 87.0).abs() < f64::EPSILON);
}

#[test]
fn test_profiles_are_isolated() {
    let dir = TempDir::new().expect("temp dir");
    let alice = FileStore::new(dir.path(), "alice");
    let bob = FileStore::new(dir.path(), "bob");

    alice
        .save(&[Course::new(
            "Chemistry".to_string(),
            RigorClass::Regular,
            WeightConfig::default(),
        )])
        .expect("save");

    assert_eq!(alice.load().expect("load").len(), 1);
    assert!(bob.load().expect("load").is_empty());
}

#[test]
fn test_selector_errors() {
    let book = Gradebook::new(vec![
        Course::with_id(
            "a".to_string(),
            "Art".to_string(),
            RigorClass::NonGpa,
            WeightConfig::default(),
        ),
        Course::with_id(
            "b".to_string(),
            "art".to_string(),
            RigorClass::NonGpa,
            WeightConfig::default(),
        ),
    ]);

    assert_eq!(
        book.remove_course("ART").expect_err("ambiguous"),
        GradebookError::AmbiguousCourse {
            selector: "ART".to_string(),
            count: 2,
        }
    );
    // Ids still resolve when names collide
    assert_eq!(book.remove_course("b").expect("remove").courses().len(), 1);
    assert!(matches!(
        book.find("Music"),
        Err(GradebookError::CourseNotFound(_))
    ));
}

#[test]
fn test_out_of_range_edits_are_rejected() {
    let book = Gradebook::new(MemoryStore::with_sample().load().expect("load"));

    let err = book
        .apply(
            "1",
            CourseEdit::AddScore {
                period: 6,
                category: Category::Other,
                score: 90.0,
            },
        )
        .expect_err("period 7 does not exist");
    assert_eq!(err, GradebookError::PeriodOutOfRange(7));

    let err = book
        .apply(
            "1",
            CourseEdit::SetScore {
                period: 0,
                category: Category::Minor,
                index: 0,
                score: 90.0,
            },
        )
        .expect_err("no minor scores yet");
    assert_eq!(
        err.to_string(),
        "score #1 does not exist in minor (it has 0 scores)"
    );
}

#[test]
fn test_unbalanced_weights_warn_but_still_compute() {
    let book = Gradebook::new(MemoryStore::with_sample().load().expect("load"))
        .apply(
            "1",
            CourseEdit::SetWeight {
                category: Category::Other,
                value: 30,
            },
        )
        .expect("weight");
    let book = add(&book, "1", 0, Category::Other, 70.0);

    assert_eq!(
        book.weight_warnings(),
        vec!["English I: weights total 115% (should be 100%)".to_string()]
    );
    let rollup = GradeRollup::from_courses(book.courses());
    assert!((rollup.yearly_average - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_extreme_weights_warn_without_overflow() {
    let mut book = Gradebook::new(MemoryStore::with_sample().load().expect("load"));
    for category in [Category::Major, Category::Minor] {
        book = book
            .apply(
                "1",
                CourseEdit::SetWeight {
                    category,
                    value: u32::MAX,
                },
            )
            .expect("weight");
    }
    let book = add(&book, "1", 0, Category::Major, 90.0);
    let book = add(&book, "1", 0, Category::Minor, 70.0);

    assert_eq!(
        book.weight_warnings(),
        vec!["English I: weights total 8589934605% (should be 100%)".to_string()]
    );
    let rollup = GradeRollup::from_courses(book.courses());
    assert!((rollup.yearly_average - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_report_reflects_stored_courses() {
    let store = MemoryStore::with_sample();
    let book = add(
        &Gradebook::new(store.load().expect("load")),
        "1",
        3,
        Category::Major,
        93.0,
    );
    store.save(book.courses()).expect("save");

    let courses = store.load().expect("load");
    let ctx = ReportContext::new("local-user", &courses, Vec::new());
    let report = MarkdownReporter::new().render(&ctx).expect("render");

    assert!(report.contains("| English I | -- | -- | -- | 93 | -- | -- |"));
    assert!(report.contains("| 93% | 4.00 | 4.00 | 1 |"));
}
