use std::path::Path;

use serde_json::Value;
use stagegate_core::{ComplianceScore, Evaluated, ThresholdConfig};

use crate::json::{object, read_scored, SourceDefaults};
use crate::ShapeError;

pub const COMPLIANCE_CHECKS: [&str; 4] = [
    "gdpr-compliance.json",
    "hipaa-compliance.json",
    "soc2-compliance.json",
    "iso27001-compliance.json",
];

const CHECK_DEFAULTS: SourceDefaults<bool> = SourceDefaults { missing: false, malformed: false };

/// A check passes when it reports `status: "PASSED"` or `compliant: true`.
pub fn check_passed(report: &Value) -> Result<bool, ShapeError> {
    let obj = object(report, "compliance report")?;
    let status_passed = obj.get("status").and_then(Value::as_str) == Some("PASSED");
    let compliant = obj.get("compliant").and_then(Value::as_bool).unwrap_or(false);
    Ok(status_passed || compliant)
}

pub fn evaluate_compliance(dir: &Path, gates: &ThresholdConfig) -> Evaluated<ComplianceScore> {
    let mut warnings = Vec::new();
    let passed_checks = COMPLIANCE_CHECKS
        .iter()
        .map(|file| read_scored(dir, file, CHECK_DEFAULTS, &mut warnings, check_passed))
        .filter(|check| check.value)
        .count() as u32;
    let total_checks = COMPLIANCE_CHECKS.len() as u32;
    let compliance_pass_rate = f64::from(passed_checks) / f64::from(total_checks) * 100.0;

    Evaluated {
        record: ComplianceScore {
            compliance_pass_rate,
            passed_checks,
            total_checks,
            passed: compliance_pass_rate >= gates.compliance_pass_rate,
        },
        warnings,
    }
}
