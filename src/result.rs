//! Analysis result types returned by the analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score labelled [`StrengthCategory::Strong`].
pub const STRONG_THRESHOLD: i64 = 6;

/// Lowest score labelled [`StrengthCategory::Medium`].
pub const MEDIUM_THRESHOLD: i64 = 3;

/// Coarse three-level label derived from the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthCategory {
    Weak,
    Medium,
    Strong,
}

impl StrengthCategory {
    /// Maps a final score to its category. Negative scores are `Weak`.
    pub fn from_score(score: i64) -> Self {
        if score >= STRONG_THRESHOLD {
            StrengthCategory::Strong
        } else if score >= MEDIUM_THRESHOLD {
            StrengthCategory::Medium
        } else {
            StrengthCategory::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthCategory::Weak => "weak",
            StrengthCategory::Medium => "medium",
            StrengthCategory::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single password analysis.
///
/// Built once per call and never mutated afterwards; fields are read
/// through accessors. Serializes to the JSON shape served over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    strength_score: i64,
    strength_category: StrengthCategory,
    improvement_suggestions: Vec<String>,
    breach_history_found: bool,
    common_password: bool,
}

impl AnalysisResult {
    /// Builds a result; the category is always derived from `strength_score`.
    pub(crate) fn new(
        strength_score: i64,
        improvement_suggestions: Vec<String>,
        breach_history_found: bool,
        common_password: bool,
    ) -> Self {
        Self {
            strength_score,
            strength_category: StrengthCategory::from_score(strength_score),
            improvement_suggestions,
            breach_history_found,
            common_password,
        }
    }

    pub fn strength_score(&self) -> i64 {
        self.strength_score
    }

    pub fn strength_category(&self) -> StrengthCategory {
        self.strength_category
    }

    /// Suggestions in the order the rules produced them.
    pub fn improvement_suggestions(&self) -> &[String] {
        &self.improvement_suggestions
    }

    pub fn breach_history_found(&self) -> bool {
        self.breach_history_found
    }

    pub fn common_password(&self) -> bool {
        self.common_password
    }
}
