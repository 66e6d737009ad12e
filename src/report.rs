//! Report data model and output formatting.
//!
//! The serialized form of [`AnalysisReport`] is a stable contract for
//! downstream tooling (CI gating, dashboards): field names and types do
//! not change between versions, new fields are only ever added. The
//! pretty console output is for human operators and is not stable.

use chrono::{SecondsFormat, Utc};
use colored::*;
use serde::{Deserialize, Serialize};

use crate::analyzers::{CategoryResult, Status};
use crate::score::Summary;

/// The full aggregated output of one audit run. A value object: built
/// once, never mutated, serialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// RFC 3339 timestamp of the run.
    pub timestamp: String,
    pub summary: Summary,
    /// Category results in analyzer registration order.
    pub categories: Vec<CategoryResult>,
}

impl AnalysisReport {
    /// Build a report, stamping the current time.
    pub fn new(summary: Summary, categories: Vec<CategoryResult>) -> Self {
        AnalysisReport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            summary,
            categories,
        }
    }

    /// Serialize to the persisted JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write the report in pretty (human-readable) format.
pub fn write_pretty(root: &str, report: &AnalysisReport) {
    // Header
    println!();
    print!("  ");
    print!("{}", "readycheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Auditing: ".dimmed());
    println!("{}", root);
    println!();

    if report.categories.is_empty() {
        println!("  {}", "no analyzers executed".red());
        println!();
    }

    for category in &report.categories {
        write_category(category);
        println!();
    }

    write_summary(&report.summary);
    println!();
}

fn write_category(category: &CategoryResult) {
    print!("  {}", category.category.bold());
    print!("  ");
    write_colored_score(category.score);
    print!("  ");
    write_colored_status(category.status);
    println!();

    for finding in &category.findings {
        println!("    {}", finding);
    }

    if !category.recommendations.is_empty() {
        println!("    {}", "recommendations:".dimmed());
        for rec in &category.recommendations {
            println!("      - {}", rec);
        }
    }
}

fn write_colored_score(score: i32) {
    let text = format!("{}", score);
    match score {
        s if s >= 90 => print!("{}", text.green().bold()),
        s if s >= 75 => print!("{}", text.green()),
        s if s >= 60 => print!("{}", text.yellow()),
        s if s >= 50 => print!("{}", text.yellow().bold()),
        _ => print!("{}", text.red()),
    }
}

fn write_colored_status(status: Status) {
    match status {
        Status::Excellent => print!("{}", "EXCELLENT".green().bold()),
        Status::Good => print!("{}", "GOOD".green()),
        Status::Fair => print!("{}", "FAIR".yellow()),
        Status::NeedsImprovement => print!("{}", "NEEDS_IMPROVEMENT".red()),
    }
}

fn write_summary(summary: &Summary) {
    if summary.critical_issues == 0 {
        print!("  {}", "✓ PASS".green());
    } else {
        print!("  {}", "✗ FAIL".red());
    }

    print!("  Overall: {:.1}", summary.overall_score);
    print!("  Grade: ");
    write_colored_grade(&summary.overall_grade);
    println!();

    println!(
        "  {}",
        format!(
            "critical: {}  warnings: {}  optimizations: {}",
            summary.critical_issues, summary.warnings, summary.optimizations
        )
        .dimmed()
    );
}

fn write_colored_grade(grade: &str) {
    match grade {
        "A+" | "A" => print!("{}", grade.green().bold()),
        "B+" | "B" => print!("{}", grade.green()),
        "C+" | "C" => print!("{}", grade.yellow()),
        "D" => print!("{}", grade.yellow().bold()),
        _ => print!("{}", grade.red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score;

    fn sample_report() -> AnalysisReport {
        let categories = vec![CategoryResult {
            category: "theming".to_string(),
            score: 85,
            status: Status::Good,
            findings: vec!["dark mode support detected".to_string()],
            recommendations: vec!["wrap animations in prefers-reduced-motion".to_string()],
        }];
        let summary = score::aggregate(&categories, score::DEFAULT_CRITICAL_FLOOR);
        AnalysisReport::new(summary, categories)
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let report = sample_report();
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert!(value.get("timestamp").is_some());
        let summary = value.get("summary").unwrap();
        assert!(summary.get("overallScore").is_some());
        assert!(summary.get("overallGrade").is_some());
        assert!(summary.get("criticalIssues").is_some());
        assert!(summary.get("warnings").is_some());
        assert!(summary.get("optimizations").is_some());

        let category = &value.get("categories").unwrap()[0];
        assert_eq!(category.get("category").unwrap(), "theming");
        assert_eq!(category.get("score").unwrap(), 85);
        assert_eq!(category.get("status").unwrap(), "GOOD");
        assert!(category.get("findings").unwrap().is_array());
        assert!(category.get("recommendations").unwrap().is_array());
    }

    #[test]
    fn test_json_round_trip_is_structurally_equal() {
        let report = sample_report();
        let parsed: AnalysisReport =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let report = sample_report();
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }
}
