//! Tests for the persisted report contract.
//!
//! The JSON shape is what CI pipelines and dashboards consume; these
//! tests pin the field names and verify persistence semantics.

use std::fs;

use tempfile::TempDir;

use readycheck::{default_analyzers, persist, AnalysisReport, AuditConfig, Runner};

fn audited_report() -> AnalysisReport {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    fs::write(
        temp.path().join("style.css"),
        "@media (prefers-color-scheme: dark) {}",
    )
    .unwrap();

    let config = AuditConfig::default();
    let analyzers = default_analyzers(&config);
    Runner::new(temp.path()).with_config(config).run(&analyzers)
}

#[test]
fn test_persisted_json_field_names() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("readycheck.json");
    let report = audited_report();

    persist(&report, &dest).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();

    assert!(value["timestamp"].is_string());
    assert!(value["summary"]["overallScore"].is_number());
    assert!(value["summary"]["overallGrade"].is_string());
    assert!(value["summary"]["criticalIssues"].is_number());
    assert!(value["summary"]["warnings"].is_number());
    assert!(value["summary"]["optimizations"].is_number());

    let categories = value["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    for category in categories {
        assert!(category["category"].is_string());
        assert!(category["score"].is_number());
        assert!(category["status"].is_string());
        assert!(category["findings"].is_array());
        assert!(category["recommendations"].is_array());
    }
}

#[test]
fn test_persisted_report_round_trips() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("readycheck.json");
    let report = audited_report();

    persist(&report, &dest).unwrap();

    let parsed: AnalysisReport =
        serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_persist_creates_missing_destination_directory() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("reports/ci/readycheck.json");
    let report = audited_report();

    persist(&report, &dest).unwrap();
    assert!(dest.exists());

    // Second run overwrites and leaves no temp artifact behind
    persist(&report, &dest).unwrap();
    let leftovers: Vec<_> = fs::read_dir(dest.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_status_values_are_screaming_snake() {
    let report = audited_report();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    for category in value["categories"].as_array().unwrap() {
        let status = category["status"].as_str().unwrap();
        assert!(
            matches!(status, "EXCELLENT" | "GOOD" | "FAIR" | "NEEDS_IMPROVEMENT"),
            "unexpected status value {:?}",
            status
        );
    }
}
