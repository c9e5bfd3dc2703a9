use std::path::Path;

use serde_json::{json, Value};
use stagegate_core::{ScoreOrigin, ThresholdConfig};
use stagegate_reports::{evaluate_compliance, evaluate_performance, evaluate_quality, evaluate_security};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, v: &Value) {
    let path = dir.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_vec(v).unwrap()).unwrap();
}

fn clean_security(dir: &Path) {
    write(dir, "bandit-report.json", &json!({"results": []}));
    write(dir, "safety-report.json", &json!([]));
    write(dir, "semgrep-report.json", &json!({"results": []}));
}

#[test]
fn security_all_clean_scores_full_marks() {
    let dir = tempdir().unwrap();
    clean_security(dir.path());
    let e = evaluate_security(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.security_score, 100.0);
    assert_eq!(e.record.vulnerability_count, 0);
    assert!(e.record.passed);
    assert!(!e.used_default());
}

#[test]
fn security_divisor_stays_three_when_reports_are_missing() {
    // Known quirk: a single clean report is averaged over three tools.
    let dir = tempdir().unwrap();
    write(dir.path(), "bandit-report.json", &json!({"results": []}));
    let e = evaluate_security(dir.path(), &ThresholdConfig::default());
    assert!((e.record.security_score - 100.0 / 3.0).abs() < 1e-9);
    assert!(!e.record.passed);
    assert_eq!(e.warnings.len(), 2);
    assert!(e.warnings.iter().all(|w| w.origin == ScoreOrigin::MissingDefault));
}

#[test]
fn security_no_reports_scores_zero() {
    let dir = tempdir().unwrap();
    let e = evaluate_security(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.security_score, 0.0);
    assert_eq!(e.record.vulnerability_count, 0);
    assert!(!e.record.passed);
}

#[test]
fn security_malformed_report_contributes_partial_credit() {
    let dir = tempdir().unwrap();
    clean_security(dir.path());
    std::fs::write(dir.path().join("bandit-report.json"), "{ truncated").unwrap();
    let e = evaluate_security(dir.path(), &ThresholdConfig::default());
    assert!((e.record.security_score - 250.0 / 3.0).abs() < 1e-9);
    assert_eq!(e.record.vulnerability_count, 0);
    assert_eq!(e.warnings.len(), 1);
    assert_eq!(e.warnings[0].source, "bandit-report.json");
    assert_eq!(e.warnings[0].origin, ScoreOrigin::MalformedDefault);
}

#[test]
fn security_threshold_boundaries() {
    let dir = tempdir().unwrap();
    clean_security(dir.path());
    let medium: Vec<_> = (0..3).map(|_| json!({"issue_severity": "MEDIUM"})).collect();
    write(dir.path(), "bandit-report.json", &json!({ "results": medium }));

    // (70 + 100 + 100) / 3 == 90 with three vulnerabilities
    let at = ThresholdConfig { vulnerability_count_limit: 3, ..Default::default() };
    let e = evaluate_security(dir.path(), &at);
    assert_eq!(e.record.security_score, 90.0);
    assert_eq!(e.record.vulnerability_count, 3);
    assert!(e.record.passed);

    let score_above = ThresholdConfig { security_score_threshold: 91.0, ..at.clone() };
    assert!(!evaluate_security(dir.path(), &score_above).record.passed);

    let limit_below = ThresholdConfig { vulnerability_count_limit: 2, ..at };
    assert!(!evaluate_security(dir.path(), &limit_below).record.passed);
}

#[test]
fn security_vulnerabilities_sum_across_tools() {
    let dir = tempdir().unwrap();
    write(dir.path(), "bandit-report.json", &json!({"results": [{"issue_severity": "HIGH"}]}));
    write(dir.path(), "safety-report.json", &json!([{"package": "a"}, {"package": "b"}]));
    write(dir.path(), "semgrep-report.json", &json!({"results": [{"extra": {"severity": "ERROR"}}]}));
    let e = evaluate_security(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.vulnerability_count, 4);
    assert!((e.record.security_score - (80.0 + 70.0 + 75.0) / 3.0).abs() < 1e-9);
    assert!(!e.record.passed);
}

#[test]
fn compliance_requires_all_four() {
    let dir = tempdir().unwrap();
    write(dir.path(), "gdpr-compliance.json", &json!({"status": "PASSED"}));
    write(dir.path(), "hipaa-compliance.json", &json!({"compliant": true}));
    write(dir.path(), "soc2-compliance.json", &json!({"status": "PASSED"}));
    write(dir.path(), "iso27001-compliance.json", &json!({"status": "PASSED", "compliant": true}));
    let all = evaluate_compliance(dir.path(), &ThresholdConfig::default());
    assert_eq!(all.record.compliance_pass_rate, 100.0);
    assert_eq!((all.record.passed_checks, all.record.total_checks), (4, 4));
    assert!(all.record.passed);

    write(dir.path(), "soc2-compliance.json", &json!({"status": "FAILED"}));
    let three = evaluate_compliance(dir.path(), &ThresholdConfig::default());
    assert_eq!(three.record.compliance_pass_rate, 75.0);
    assert!(!three.record.passed);
    assert!(three.warnings.is_empty());
}

#[test]
fn compliance_missing_and_malformed_count_as_failed_checks() {
    let dir = tempdir().unwrap();
    write(dir.path(), "gdpr-compliance.json", &json!({"status": "PASSED"}));
    std::fs::write(dir.path().join("hipaa-compliance.json"), "not json").unwrap();
    let e = evaluate_compliance(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.passed_checks, 1);
    assert_eq!(e.record.compliance_pass_rate, 25.0);
    assert_eq!(e.warnings.len(), 3);
    assert!(!e.record.passed);
}

#[test]
fn quality_without_reports_uses_defaults() {
    let dir = tempdir().unwrap();
    let e = evaluate_quality(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.quality_score, 85.0);
    assert_eq!(e.record.coverage_score, 85.0);
    assert!(e.record.passed);
}

#[test]
fn quality_boundaries() {
    let dir = tempdir().unwrap();
    // (90 + 80) / 2 == 85
    write(dir.path(), "complexity-report.json", &json!({"averageComplexity": 2}));
    write(dir.path(), "technical-debt.json", &json!({"debt_score": 80}));
    write(dir.path(), "coverage/coverage-summary.json", &json!({"total": {"lines": {"pct": 80.0}}}));
    let at = evaluate_quality(dir.path(), &ThresholdConfig::default());
    assert_eq!(at.record.quality_score, 85.0);
    assert_eq!(at.record.coverage_score, 80.0);
    assert!(at.record.passed);

    write(dir.path(), "technical-debt.json", &json!({"debt_score": 79}));
    assert!(!evaluate_quality(dir.path(), &ThresholdConfig::default()).record.passed);

    write(dir.path(), "technical-debt.json", &json!({"debt_score": 80}));
    write(dir.path(), "coverage/coverage-summary.json", &json!({"total": {"lines": {"pct": 79.0}}}));
    assert!(!evaluate_quality(dir.path(), &ThresholdConfig::default()).record.passed);
}

#[test]
fn quality_malformed_reports_score_seventy() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("complexity-report.json"), "[").unwrap();
    std::fs::write(dir.path().join("technical-debt.json"), "{]").unwrap();
    let e = evaluate_quality(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.quality_score, 70.0);
    assert_eq!(e.warnings.len(), 2);
    assert!(!e.record.passed);
}

#[test]
fn coverage_skips_broken_candidates_in_name_order() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("coverage")).unwrap();
    std::fs::write(dir.path().join("coverage/a-summary.json"), "oops").unwrap();
    write(dir.path(), "coverage/b-summary.json", &json!({"total": {"lines": {"pct": 92.5}}}));
    write(dir.path(), "coverage/c-summary.json", &json!({"total": {"lines": {"pct": 10.0}}}));
    write(dir.path(), "coverage/lcov.json", &json!({"total": {"lines": {"pct": 1.0}}}));
    let e = evaluate_quality(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.coverage_score, 92.5);
    assert_eq!(e.warnings.iter().filter(|w| w.source == "a-summary.json").count(), 1);
}

#[test]
fn coverage_non_json_summary_keeps_default() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("coverage")).unwrap();
    std::fs::write(dir.path().join("coverage/a-summary.txt"), "lines: 12%").unwrap();
    write(dir.path(), "coverage/b-summary.json", &json!({"total": {"lines": {"pct": 12.0}}}));
    let e = evaluate_quality(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.coverage_score, 85.0);
}

#[test]
fn performance_missing_baseline_is_non_blocking() {
    let dir = tempdir().unwrap();
    let e = evaluate_performance(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.performance_score, 80.0);
    assert!(e.record.passed);
    assert!(e.record.baseline_met);
    assert!(e.record.note.is_some());
    assert_eq!(e.warnings[0].origin, ScoreOrigin::MissingDefault);
}

#[test]
fn performance_malformed_baseline_falls_back_with_warning() {
    let dir = tempdir().unwrap();
    write(dir.path(), "performance-baseline.json", &json!({"avg_response_time": "fast"}));
    let e = evaluate_performance(dir.path(), &ThresholdConfig::default());
    assert_eq!(e.record.performance_score, 80.0);
    assert!(e.record.passed);
    assert_eq!(e.warnings.len(), 1);
    assert_eq!(e.warnings[0].origin, ScoreOrigin::MalformedDefault);
}

#[test]
fn performance_slow_baseline_fails() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "performance-baseline.json",
        &json!({"avg_response_time": 900, "peak_memory_mb": 800, "lighthouse_performance": 60}),
    );
    let e = evaluate_performance(dir.path(), &ThresholdConfig::default());
    assert!((e.record.performance_score - (10.0 + 20.0 + 60.0) / 3.0).abs() < 1e-9);
    assert!(!e.record.passed);
    assert!(e.warnings.is_empty());
}
