//! Core types for category analysis results.

use serde::{Deserialize, Serialize};

/// Health status of a category, derived from its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Status {
    /// Derive a status from a category score.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 90 => Status::Excellent,
            s if s >= 75 => Status::Good,
            s if s >= 60 => Status::Fair,
            _ => Status::NeedsImprovement,
        }
    }

    /// Whether this status is FAIR or worse.
    ///
    /// Recommendations attached to such categories count as warnings;
    /// recommendations on healthier categories count as optimizations.
    pub fn is_fair_or_worse(&self) -> bool {
        matches!(self, Status::Fair | Status::NeedsImprovement)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Excellent => write!(f, "EXCELLENT"),
            Status::Good => write!(f, "GOOD"),
            Status::Fair => write!(f, "FAIR"),
            Status::NeedsImprovement => write!(f, "NEEDS_IMPROVEMENT"),
        }
    }
}

/// The output contract of one analyzer: a scored category with its
/// observations and suggestions. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: String,
    pub score: i32,
    pub status: Status,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl CategoryResult {
    /// A zero-evidence result for a category whose analyzer failed
    /// (panicked or timed out). Scores 0 so it lands below any critical
    /// floor and is counted as a critical issue.
    pub fn failed(category: &str, reason: &str) -> Self {
        CategoryResult {
            category: category.to_string(),
            score: 0,
            status: Status::NeedsImprovement,
            findings: vec![format!("analyzer failed: {}", reason)],
            recommendations: Vec::new(),
        }
    }
}

/// Accumulator used inside analyzers to build a [`CategoryResult`].
///
/// Starts from a baseline score ("assume healthy unless evidence
/// otherwise") and applies bounded deductions for negative findings.
pub struct ResultBuilder {
    category: String,
    score: i32,
    findings: Vec<String>,
    recommendations: Vec<String>,
}

impl ResultBuilder {
    pub fn new(category: &str, baseline: i32) -> Self {
        ResultBuilder {
            category: category.to_string(),
            score: baseline,
            findings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Record a neutral or positive observation.
    pub fn note(&mut self, finding: impl Into<String>) {
        self.findings.push(finding.into());
    }

    /// Record a negative observation and deduct points for it.
    pub fn deduct(&mut self, points: i32, finding: impl Into<String>) {
        self.score -= points;
        self.findings.push(finding.into());
    }

    /// Record a confirmatory positive observation worth bonus points.
    pub fn credit(&mut self, points: i32, finding: impl Into<String>) {
        self.score += points;
        self.findings.push(finding.into());
    }

    /// Attach an actionable suggestion. Should correspond to at least
    /// one recorded finding.
    pub fn recommend(&mut self, suggestion: impl Into<String>) {
        self.recommendations.push(suggestion.into());
    }

    /// Finalize: clamp the score to [0, 100] and derive the status.
    pub fn finish(self) -> CategoryResult {
        let score = self.score.clamp(0, 100);
        CategoryResult {
            category: self.category,
            score,
            status: Status::from_score(score),
            findings: self.findings,
            recommendations: self.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_score() {
        assert_eq!(Status::from_score(100), Status::Excellent);
        assert_eq!(Status::from_score(90), Status::Excellent);
        assert_eq!(Status::from_score(89), Status::Good);
        assert_eq!(Status::from_score(75), Status::Good);
        assert_eq!(Status::from_score(74), Status::Fair);
        assert_eq!(Status::from_score(60), Status::Fair);
        assert_eq!(Status::from_score(59), Status::NeedsImprovement);
        assert_eq!(Status::from_score(0), Status::NeedsImprovement);
    }

    #[test]
    fn test_builder_deductions() {
        let mut b = ResultBuilder::new("structure", 95);
        b.note("manifest present");
        b.deduct(10, "no README found");
        b.recommend("add a README describing the project");
        let result = b.finish();

        assert_eq!(result.category, "structure");
        assert_eq!(result.score, 85);
        assert_eq!(result.status, Status::Good);
        assert_eq!(result.findings.len(), 2);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_builder_clamps_score() {
        let mut b = ResultBuilder::new("hygiene", 20);
        b.deduct(50, "many leftover debug statements");
        let result = b.finish();
        assert_eq!(result.score, 0);
        assert_eq!(result.status, Status::NeedsImprovement);

        let mut b = ResultBuilder::new("structure", 98);
        b.credit(10, "exemplary layout");
        assert_eq!(b.finish().score, 100);
    }

    #[test]
    fn test_failed_result_is_zero_evidence() {
        let result = CategoryResult::failed("bundle", "timed out after 10s");
        assert_eq!(result.score, 0);
        assert_eq!(result.status, Status::NeedsImprovement);
        assert!(result.findings[0].contains("timed out"));
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&Status::NeedsImprovement).unwrap();
        assert_eq!(json, "\"NEEDS_IMPROVEMENT\"");
        let json = serde_json::to_string(&Status::Excellent).unwrap();
        assert_eq!(json, "\"EXCELLENT\"");
    }
}
