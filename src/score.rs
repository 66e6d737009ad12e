//! Score aggregation and grading.
//!
//! Collapses per-category results into an overall score (unweighted
//! arithmetic mean), a letter grade, and the triage counters CI gates on.

use serde::{Deserialize, Serialize};

use crate::analyzers::CategoryResult;

/// Grade band lower bounds (inclusive).
pub mod grades {
    pub const A_PLUS_MIN: f64 = 95.0;
    pub const A_MIN: f64 = 90.0;
    pub const B_PLUS_MIN: f64 = 85.0;
    pub const B_MIN: f64 = 80.0;
    pub const C_PLUS_MIN: f64 = 75.0;
    pub const C_MIN: f64 = 70.0;
    pub const D_MIN: f64 = 60.0;
}

/// Default score floor below which a category is a critical issue.
pub const DEFAULT_CRITICAL_FLOOR: i32 = 50;

/// The aggregated summary of one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Mean of all category scores, clamped to [0, 100].
    pub overall_score: f64,
    /// Letter grade: "A+" down to "F".
    pub overall_grade: String,
    /// Categories that failed or scored below the critical floor.
    pub critical_issues: usize,
    /// Recommendations on categories with status FAIR or worse.
    pub warnings: usize,
    /// Recommendations on categories with status GOOD or better.
    pub optimizations: usize,
}

/// Determine the letter grade from an overall score.
pub fn grade_for(score: f64) -> &'static str {
    match score {
        s if s >= grades::A_PLUS_MIN => "A+",
        s if s >= grades::A_MIN => "A",
        s if s >= grades::B_PLUS_MIN => "B+",
        s if s >= grades::B_MIN => "B",
        s if s >= grades::C_PLUS_MIN => "C+",
        s if s >= grades::C_MIN => "C",
        s if s >= grades::D_MIN => "D",
        _ => "F",
    }
}

/// Aggregate category results into a summary.
///
/// Zero categories yields the degenerate summary: grade "F" with one
/// synthetic critical issue, so an empty report can never be mistaken
/// for a clean one.
pub fn aggregate(categories: &[CategoryResult], critical_floor: i32) -> Summary {
    if categories.is_empty() {
        return Summary {
            overall_score: 0.0,
            overall_grade: "F".to_string(),
            critical_issues: 1,
            warnings: 0,
            optimizations: 0,
        };
    }

    let total: i64 = categories
        .iter()
        .map(|c| i64::from(c.score.clamp(0, 100)))
        .sum();
    let overall_score = total as f64 / categories.len() as f64;

    // A boundary-failed analyzer reports score 0, so the floor must stay
    // at least 1 for failures to count as critical even when a caller
    // passes an unvalidated floor.
    let floor = critical_floor.max(1);
    let critical_issues = categories.iter().filter(|c| c.score < floor).count();

    let mut warnings = 0;
    let mut optimizations = 0;
    for c in categories {
        if c.status.is_fair_or_worse() {
            warnings += c.recommendations.len();
        } else {
            optimizations += c.recommendations.len();
        }
    }

    Summary {
        overall_score,
        overall_grade: grade_for(overall_score).to_string(),
        critical_issues,
        warnings,
        optimizations,
    }
}
