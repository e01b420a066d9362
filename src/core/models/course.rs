//! Course model

use super::RigorClass;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of six-weeks grading periods in an academic year
pub const PERIODS_PER_YEAR: usize = 6;

/// Number of grading periods in each semester
pub const PERIODS_PER_SEMESTER: usize = 3;

/// Ordered scores recorded for one category within one grading period
pub type ScoreSet = Vec<f64>;

/// Assignment category within a grading period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Tests, projects, and other major assessments
    Major,
    /// Quizzes and minor assessments
    Minor,
    /// Homework, classwork, and everything else
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Other];

    /// Lowercase name used in config keys and CLI arguments
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: '{s}' (expected major, minor, or other)")),
        }
    }
}

/// One of the two semesters of an academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    /// Fall semester: grading periods 1-3
    First,
    /// Spring semester: grading periods 4-6
    Second,
}

impl Semester {
    /// Both semesters in calendar order
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Zero-based semester index
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Semester for a zero-based index, if valid
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }

    /// Zero-based indices of the grading periods belonging to this semester
    #[must_use]
    pub const fn period_range(self) -> std::ops::Range<usize> {
        let start = self.index() * PERIODS_PER_SEMESTER;
        start..start + PERIODS_PER_SEMESTER
    }
}

/// Category weights expressed in percentage points
///
/// The weights are intended to total 100, but nothing downstream relies on it:
/// period grades are normalized by the weights of the categories that have data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Weight of major assessments
    pub major: u32,
    /// Weight of minor assessments
    pub minor: u32,
    /// Weight of other work
    pub other: u32,
}

impl WeightConfig {
    /// Create a weight configuration
    #[must_use]
    pub const fn new(major: u32, minor: u32, other: u32) -> Self {
        Self {
            major,
            minor,
            other,
        }
    }

    /// Weight assigned to a category
    #[must_use]
    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::Major => self.major,
            Category::Minor => self.minor,
            Category::Other => self.other,
        }
    }

    /// Copy of this configuration with one category's weight replaced
    #[must_use]
    pub const fn with(self, category: Category, weight: u32) -> Self {
        match category {
            Category::Major => Self {
                major: weight,
                ..self
            },
            Category::Minor => Self {
                minor: weight,
                ..self
            },
            Category::Other => Self {
                other: weight,
                ..self
            },
        }
    }

    /// Sum of all three weights, widened so any `u32` weights add without overflow
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.major) + u64::from(self.minor) + u64::from(self.other)
    }

    /// Whether the weights total exactly 100
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total() == 100
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::new(50, 35, 15)
    }
}

impl fmt::Display for WeightConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "major {}% / minor {}% / other {}%",
            self.major, self.minor, self.other
        )
    }
}

/// Scores recorded during one six-weeks grading period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingPeriod {
    /// Major assessment scores
    #[serde(default)]
    pub major: ScoreSet,
    /// Minor assessment scores
    #[serde(default)]
    pub minor: ScoreSet,
    /// Other scores
    #[serde(default)]
    pub other: ScoreSet,
}

impl GradingPeriod {
    /// Scores for a category
    #[must_use]
    pub fn scores(&self, category: Category) -> &[f64] {
        match category {
            Category::Major => &self.major,
            Category::Minor => &self.minor,
            Category::Other => &self.other,
        }
    }

    /// Copy of this period with one category's scores replaced
    #[must_use]
    pub fn with_scores(&self, category: Category, scores: ScoreSet) -> Self {
        let mut period = self.clone();
        match category {
            Category::Major => period.major = scores,
            Category::Minor => period.minor = scores,
            Category::Other => period.other = scores,
        }
        period
    }

    /// Whether no category holds any score
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty() && self.other.is_empty()
    }
}

/// Semester exam scores; `None` means no exam has been recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamPair {
    /// First semester exam
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sem1: Option<f64>,
    /// Second semester exam
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sem2: Option<f64>,
}

impl ExamPair {
    /// Exam score for a semester
    #[must_use]
    pub const fn get(&self, semester: Semester) -> Option<f64> {
        match semester {
            Semester::First => self.sem1,
            Semester::Second => self.sem2,
        }
    }

    /// Copy of this pair with one semester's exam replaced
    #[must_use]
    pub const fn with(self, semester: Semester, score: Option<f64>) -> Self {
        match semester {
            Semester::First => Self {
                sem1: score,
                ..self
            },
            Semester::Second => Self {
                sem2: score,
                ..self
            },
        }
    }
}

/// A year-long course with its weights, six grading periods, and semester exams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Opaque unique identifier
    pub id: String,

    /// Display name (e.g., "English I")
    pub name: String,

    /// Rigor classification; only affects GPA points
    #[serde(rename = "type", default)]
    pub rigor: RigorClass,

    /// Category weights
    #[serde(default)]
    pub weights: WeightConfig,

    /// The six grading periods, in order
    #[serde(rename = "six_weeks", default = "empty_periods")]
    pub periods: [GradingPeriod; PERIODS_PER_YEAR],

    /// Semester exams
    #[serde(default)]
    pub exams: ExamPair,
}

fn empty_periods() -> [GradingPeriod; PERIODS_PER_YEAR] {
    Default::default()
}

impl Course {
    /// Create an empty course with a freshly generated id
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `rigor` - Rigor classification
    /// * `weights` - Category weights
    #[must_use]
    pub fn new(name: String, rigor: RigorClass, weights: WeightConfig) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), name, rigor, weights)
    }

    /// Create an empty course with an explicit id
    #[must_use]
    pub fn with_id(id: String, name: String, rigor: RigorClass, weights: WeightConfig) -> Self {
        Self {
            id,
            name,
            rigor,
            weights,
            periods: empty_periods(),
            exams: ExamPair::default(),
        }
    }

    /// Grading period by zero-based index
    #[must_use]
    pub fn period(&self, index: usize) -> Option<&GradingPeriod> {
        self.periods.get(index)
    }

    /// The three grading periods of a semester
    #[must_use]
    pub fn semester_periods(&self, semester: Semester) -> &[GradingPeriod] {
        &self.periods[semester.period_range()]
    }

    /// Whether no score or exam has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.iter().all(GradingPeriod::is_empty)
            && self.exams.sem1.is_none()
            && self.exams.sem2.is_none()
    }
}
