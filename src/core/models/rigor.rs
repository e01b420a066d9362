//! Course rigor classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rigor classification of a course
///
/// The classification never changes how a grade is computed; it only selects
/// the offset applied when the final grade is converted to GPA points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RigorClass {
    /// Regular (on-level) course
    #[serde(rename = "Reg")]
    Regular,
    /// Academic course
    #[default]
    #[serde(rename = "Aca")]
    Academic,
    /// Advanced Placement
    #[serde(rename = "AP")]
    Ap,
    /// Pre-AP / "K" advanced course
    #[serde(rename = "KAP")]
    PreAp,
    /// Gifted and talented
    #[serde(rename = "GT")]
    GiftedTalented,
    /// Dual credit (college credit) course
    #[serde(rename = "DC")]
    DualCredit,
    /// Course that does not count toward GPA
    #[serde(rename = "NonGPA")]
    NonGpa,
}

/// GPA offset tier of a rigor classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigorTier {
    /// Excluded from GPA; always earns zero points
    Ineligible,
    /// No offset
    Standard,
    /// Half-point offset
    DualCredit,
    /// Full-point offset
    Advanced,
}

impl RigorClass {
    /// Every classification, in display order
    pub const ALL: [Self; 7] = [
        Self::Regular,
        Self::Academic,
        Self::Ap,
        Self::PreAp,
        Self::GiftedTalented,
        Self::DualCredit,
        Self::NonGpa,
    ];

    /// Short code used in persisted course data
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Regular => "Reg",
            Self::Academic => "Aca",
            Self::Ap => "AP",
            Self::PreAp => "KAP",
            Self::GiftedTalented => "GT",
            Self::DualCredit => "DC",
            Self::NonGpa => "NonGPA",
        }
    }

    /// GPA offset tier
    #[must_use]
    pub const fn tier(self) -> RigorTier {
        match self {
            Self::NonGpa => RigorTier::Ineligible,
            Self::Regular | Self::Academic => RigorTier::Standard,
            Self::DualCredit => RigorTier::DualCredit,
            Self::Ap | Self::PreAp | Self::GiftedTalented => RigorTier::Advanced,
        }
    }
}

impl RigorTier {
    /// Points added to the base GPA value
    #[must_use]
    pub const fn bonus(self) -> f64 {
        match self {
            Self::Ineligible | Self::Standard => 0.0,
            Self::DualCredit => 0.5,
            Self::Advanced => 1.0,
        }
    }
}

impl fmt::Display for RigorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RigorClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reg" | "regular" => Ok(Self::Regular),
            "aca" | "academic" => Ok(Self::Academic),
            "ap" | "advanced-placement" => Ok(Self::Ap),
            "kap" | "pre-ap" | "preap" => Ok(Self::PreAp),
            "gt" | "gifted" | "gifted-talented" => Ok(Self::GiftedTalented),
            "dc" | "dual-credit" | "dualcredit" => Ok(Self::DualCredit),
            "nongpa" | "non-gpa" => Ok(Self::NonGpa),
            _ => Err(format!(
                "Unknown rigor classification: '{s}' (expected Reg, Aca, AP, KAP, GT, DC, or NonGPA)"
            )),
        }
    }
}
