use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, v: &Value) {
    let path = dir.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_vec(v).unwrap()).unwrap();
}

fn last_line(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).lines().last().unwrap_or_default().to_string()
}

fn report_tree(root: &Path, hipaa: &str) {
    write(root, "security/bandit-report.json", &json!({"results": []}));
    write(root, "security/safety-report.json", &json!([]));
    write(root, "security/semgrep-report.json", &json!({"results": []}));
    write(root, "compliance/gdpr-compliance.json", &json!({"status": "PASSED"}));
    write(root, "compliance/hipaa-compliance.json", &json!({"status": hipaa}));
    write(root, "compliance/soc2-compliance.json", &json!({"compliant": true}));
    write(root, "compliance/iso27001-compliance.json", &json!({"status": "PASSED"}));
    write(root, "quality/complexity-report.json", &json!({"averageComplexity": 3}));
    write(root, "quality/technical-debt.json", &json!({"debt_score": 95}));
    write(root, "performance/performance-baseline.json", &json!({
        "avg_response_time": 150, "peak_memory_mb": 200, "lighthouse_performance": 92
    }));
}

fn evaluate(root: &Path) -> (Output, PathBuf) {
    evaluate_with(root, &[])
}

fn evaluate_with(root: &Path, extra: &[&str]) -> (Output, PathBuf) {
    let output = root.join("out/qa-evaluation.json");
    let out = Command::new(env!("CARGO_BIN_EXE_evaluate-gates"))
        .arg("--security-results")
        .arg(root.join("security"))
        .arg("--compliance-results")
        .arg(root.join("compliance"))
        .arg("--quality-results")
        .arg(root.join("quality"))
        .arg("--performance-results")
        .arg(root.join("performance"))
        .arg("--output")
        .arg(&output)
        .args(extra)
        .output()
        .unwrap();
    (out, output)
}

fn check(eval_file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-gate-status"))
        .arg("--evaluation-file")
        .arg(eval_file)
        .output()
        .unwrap()
}

#[test]
fn evaluate_then_check_passes() {
    let dir = tempdir().unwrap();
    report_tree(dir.path(), "PASSED");

    let (out, eval_file) = evaluate(dir.path());
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("🎯 OVERALL STATUS: PASSED"));
    assert!(eval_file.is_file());

    let out = check(&eval_file);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(last_line(&out), "PASSED");
}

#[test]
fn failing_compliance_exits_one_everywhere() {
    let dir = tempdir().unwrap();
    report_tree(dir.path(), "FAILED");

    let (out, eval_file) = evaluate(dir.path());
    assert_eq!(out.status.code(), Some(1));
    let v: Value = serde_json::from_slice(&std::fs::read(&eval_file).unwrap()).unwrap();
    assert_eq!(v["overall_status"], "FAILED");

    let out = check(&eval_file);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(last_line(&out), "FAILED");
}

#[test]
fn config_file_tightens_thresholds() {
    let dir = tempdir().unwrap();
    report_tree(dir.path(), "PASSED");
    let cfg = dir.path().join("stagegate.toml");
    std::fs::write(&cfg, "[thresholds]\ncode_quality_score = 99.0\n").unwrap();

    let (out, eval_file) = evaluate_with(dir.path(), &["--config", cfg.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let v: Value = serde_json::from_slice(&std::fs::read(&eval_file).unwrap()).unwrap();
    assert_eq!(v["quality_gates"]["code_quality_score"], 99.0);
    assert_eq!(v["quality"]["passed"], false);
}

#[test]
fn checker_fails_closed_on_missing_file() {
    let dir = tempdir().unwrap();
    let out = check(&dir.path().join("absent.json"));
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(last_line(&out), "FAILED");
}

#[test]
fn missing_flags_exit_one() {
    let out = Command::new(env!("CARGO_BIN_EXE_check-gate-status")).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn promotion_report_written_under_reports_dir() {
    let dir = tempdir().unwrap();
    report_tree(dir.path(), "PASSED");
    let (_, eval_file) = evaluate(dir.path());
    let reports = dir.path().join("reports");

    let out = Command::new(env!("CARGO_BIN_EXE_create-promotion-report"))
        .arg("--qa-evaluation")
        .arg(&eval_file)
        .args(["--target", "testing", "--status", "PASSED"])
        .arg("--reports-dir")
        .arg(&reports)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));

    let v: Value = serde_json::from_slice(&std::fs::read(reports.join("qa-promotion-report.json")).unwrap()).unwrap();
    assert_eq!(v["promotion_report"]["promotion_status"], "PASSED");
    assert_eq!(v["promotion_report"]["action_taken"], "Automatic promotion to Testing stage initiated");
    assert_eq!(v["promotion_metadata"]["promotion_automation"], true);
}

#[test]
fn config_file_overrides_report_location() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("stagegate.toml");
    let reports = dir.path().join("custom-reports");
    std::fs::write(&cfg, format!("[promotion]\nreports_dir = {:?}\n", reports.display().to_string())).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_create-promotion-report"))
        .arg("--qa-evaluation")
        .arg(dir.path().join("absent.json"))
        .args(["--target", "testing", "--status", "FAILED"])
        .arg("--config")
        .arg(&cfg)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(reports.join("qa-promotion-report.json").is_file());
}

#[test]
fn promote_templates_end_to_end() {
    let dir = tempdir().unwrap();
    report_tree(dir.path(), "PASSED");
    let (_, eval_file) = evaluate(dir.path());
    let source = dir.path().join("templates/qa");
    let target = dir.path().join("templates/testing");
    std::fs::create_dir_all(source.join("nested")).unwrap();
    std::fs::write(source.join("a.md"), "# a").unwrap();
    std::fs::write(source.join("nested/b.md"), "# b").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_promote-templates"))
        .arg("--source-dir")
        .arg(&source)
        .arg("--target-dir")
        .arg(&target)
        .arg("--qa-results")
        .arg(&eval_file)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(target.join("nested/b.md").is_file());
    assert!(target.join("nested/b.json").is_file());
    assert!(target.join("README.md").is_file());
    let summary: Value = serde_json::from_slice(&std::fs::read(target.join("promotion_summary.json")).unwrap()).unwrap();
    assert_eq!(summary["successfully_promoted"], 2);
}

#[test]
fn promote_templates_refuses_failed_evaluation() {
    let dir = tempdir().unwrap();
    report_tree(dir.path(), "FAILED");
    let (_, eval_file) = evaluate(dir.path());
    let source = dir.path().join("templates/qa");
    let target = dir.path().join("templates/testing");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::write(source.join("a.md"), "# a").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_promote-templates"))
        .arg("--source-dir")
        .arg(&source)
        .arg("--target-dir")
        .arg(&target)
        .arg("--qa-results")
        .arg(&eval_file)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(!target.exists());
}
