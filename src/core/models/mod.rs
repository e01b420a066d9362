//! Data models for `GradePro`

pub mod course;
pub mod rigor;

pub use course::{
    Category, Course, ExamPair, GradingPeriod, ScoreSet, Semester, WeightConfig,
    PERIODS_PER_SEMESTER, PERIODS_PER_YEAR,
};
pub use rigor::{RigorClass, RigorTier};
