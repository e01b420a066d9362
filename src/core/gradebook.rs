//! Course list editing
//!
//! A [`Gradebook`] is an immutable snapshot of the course list. Every edit
//! returns a new snapshot in which the affected [`Course`] has been replaced as
//! a whole record; the original snapshot is never modified. Raw score input is
//! clamped here, before it reaches a score set, so the grading engine never has
//! to.

use crate::core::models::{Category, Course, RigorClass, Semester};
use thiserror::Error;

/// Lowest score accepted into a score set
pub const MIN_SCORE: f64 = 0.0;

/// Highest score accepted into a score set (extra credit allowance)
pub const MAX_SCORE: f64 = 150.0;

/// Score appended when no value is given
pub const DEFAULT_NEW_SCORE: f64 = 100.0;

/// Errors raised while editing the course list.
#[derive(Debug, Error, PartialEq)]
pub enum GradebookError {
    /// No course matches the selector.
    #[error("no course matches '{0}'")]
    CourseNotFound(String),

    /// More than one course has the selected name.
    #[error("'{selector}' matches {count} courses; use the course id instead")]
    AmbiguousCourse {
        /// Name or id as given
        selector: String,
        /// Number of courses sharing that name
        count: usize,
    },

    /// The grading period index is outside the year.
    #[error("grading period {0} is out of range (expected 1-6)")]
    PeriodOutOfRange(usize),

    /// The score index (0-based) does not exist in the score set.
    #[error("score #{} does not exist in {category} (it has {len} scores)", .index + 1)]
    ScoreOutOfRange {
        /// Category the score was looked up in
        category: Category,
        /// Requested position (0-based)
        index: usize,
        /// Number of scores the category holds
        len: usize,
    },
}

/// A whole-record change to a single course.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseEdit {
    /// Change the display name
    Rename(String),
    /// Change the rigor classification
    SetRigor(RigorClass),
    /// Change one category weight
    SetWeight {
        /// Category whose weight changes
        category: Category,
        /// New weight in percentage points
        value: u32,
    },
    /// Record (`Some`) or clear (`None`) a semester exam
    SetExam {
        /// Semester the exam belongs to
        semester: Semester,
        /// Exam score, or `None` to clear it
        score: Option<f64>,
    },
    /// Append a score to a category of a grading period
    AddScore {
        /// Grading period (0-based)
        period: usize,
        /// Category to append to
        category: Category,
        /// Raw score, clamped on entry
        score: f64,
    },
    /// Overwrite an existing score
    SetScore {
        /// Grading period (0-based)
        period: usize,
        /// Category holding the score
        category: Category,
        /// Position within the category (0-based)
        index: usize,
        /// Replacement score, clamped on entry
        score: f64,
    },
    /// Remove an existing score
    RemoveScore {
        /// Grading period (0-based)
        period: usize,
        /// Category holding the score
        category: Category,
        /// Position within the category (0-based)
        index: usize,
    },
}

/// Clamp a raw entered score into the accepted range; NaN becomes 0.
#[must_use]
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        MIN_SCORE
    } else {
        raw.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Immutable snapshot of a student's course list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradebook {
    courses: Vec<Course>,
}

impl Gradebook {
    /// Wrap a course list
    #[must_use]
    pub const fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Courses in display order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Consume the snapshot, returning the course list
    #[must_use]
    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }

    /// Find a course by exact id, or by case-insensitive name
    ///
    /// # Errors
    /// Returns [`GradebookError::CourseNotFound`] when nothing matches and
    /// [`GradebookError::AmbiguousCourse`] when several courses share the name.
    pub fn find(&self, selector: &str) -> Result<&Course, GradebookError> {
        self.position(selector).map(|idx| &self.courses[idx])
    }

    fn position(&self, selector: &str) -> Result<usize, GradebookError> {
        if let Some(idx) = self.courses.iter().position(|c| c.id == selector) {
            return Ok(idx);
        }

        let wanted = selector.trim().to_lowercase();
        let matches: Vec<usize> = self
            .courses
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name.trim().to_lowercase() == wanted)
            .map(|(idx, _)| idx)
            .collect();

        match matches.as_slice() {
            [idx] => Ok(*idx),
            [] => Err(GradebookError::CourseNotFound(selector.to_string())),
            _ => Err(GradebookError::AmbiguousCourse {
                selector: selector.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// New snapshot with a course appended
    #[must_use]
    pub fn add_course(&self, course: Course) -> Self {
        let mut courses = self.courses.clone();
        courses.push(course);
        Self { courses }
    }

    /// New snapshot without the selected course
    ///
    /// # Errors
    /// Returns an error if the selector does not identify exactly one course.
    pub fn remove_course(&self, selector: &str) -> Result<Self, GradebookError> {
        let idx = self.position(selector)?;
        let courses = self
            .courses
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, c)| c.clone())
            .collect();
        Ok(Self { courses })
    }

    /// New snapshot with one course replaced by the edited record
    ///
    /// # Errors
    /// Returns an error if the selector does not identify exactly one course,
    /// or if the edit refers to a grading period or score that does not exist.
    pub fn apply(&self, selector: &str, edit: CourseEdit) -> Result<Self, GradebookError> {
        let idx = self.position(selector)?;
        let updated = edited(&self.courses[idx], edit)?;

        let courses = self
            .courses
            .iter()
            .enumerate()
            .map(|(i, c)| if i == idx { updated.clone() } else { c.clone() })
            .collect();
        Ok(Self { courses })
    }

    /// Advisory messages for courses whose weights do not total 100
    ///
    /// These never block computation; period grades normalize by the weights
    /// of the categories that have data.
    #[must_use]
    pub fn weight_warnings(&self) -> Vec<String> {
        self.courses
            .iter()
            .filter(|c| !c.weights.is_balanced())
            .map(|c| {
                format!(
                    "{}: weights total {}% (should be 100%)",
                    c.name,
                    c.weights.total()
                )
            })
            .collect()
    }
}

fn edited(course: &Course, edit: CourseEdit) -> Result<Course, GradebookError> {
    let mut next = course.clone();
    match edit {
        CourseEdit::Rename(name) => next.name = name,
        CourseEdit::SetRigor(rigor) => next.rigor = rigor,
        CourseEdit::SetWeight { category, value } => {
            next.weights = course.weights.with(category, value);
        }
        CourseEdit::SetExam { semester, score } => {
            next.exams = course.exams.with(semester, score.map(clamp_score));
        }
        CourseEdit::AddScore {
            period,
            category,
            score,
        } => {
            let mut scores = scores_of(course, period, category)?.to_vec();
            scores.push(clamp_score(score));
            next.periods[period] = course.periods[period].with_scores(category, scores);
        }
        CourseEdit::SetScore {
            period,
            category,
            index,
            score,
        } => {
            let mut scores = scores_of(course, period, category)?.to_vec();
            let len = scores.len();
            let slot = scores
                .get_mut(index)
                .ok_or(GradebookError::ScoreOutOfRange {
                    category,
                    index,
                    len,
                })?;
            *slot = clamp_score(score);
            next.periods[period] = course.periods[period].with_scores(category, scores);
        }
        CourseEdit::RemoveScore {
            period,
            category,
            index,
        } => {
            let scores = scores_of(course, period, category)?;
            if index >= scores.len() {
                return Err(GradebookError::ScoreOutOfRange {
                    category,
                    index,
                    len: scores.len(),
                });
            }
            let remaining = scores
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, s)| *s)
                .collect();
            next.periods[period] = course.periods[period].with_scores(category, remaining);
        }
    }
    Ok(next)
}

fn scores_of(course: &Course, period: usize, category: Category) -> Result<&[f64], GradebookError> {
    course
        .period(period)
        .map(|p| p.scores(category))
        .ok_or(GradebookError::PeriodOutOfRange(period + 1))
}
