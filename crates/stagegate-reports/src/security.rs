use std::path::Path;

use serde_json::Value;
use stagegate_core::{Evaluated, Scored, SecurityScore, ThresholdConfig};

use crate::json::{array_field, nested_str, object, read_scored, SourceDefaults};
use crate::ShapeError;

pub const BANDIT_REPORT: &str = "bandit-report.json";
pub const SAFETY_REPORT: &str = "safety-report.json";
pub const SEMGREP_REPORT: &str = "semgrep-report.json";

/// Every security score is divided by this many tools, even when fewer
/// reports were present. A lone clean report therefore scores 33.3.
pub const SECURITY_TOOL_COUNT: f64 = 3.0;

const HIGH_PENALTY: u32 = 20;
const MEDIUM_PENALTY: u32 = 10;
const DEPENDENCY_PENALTY: u32 = 15;
const CRITICAL_PATTERN_PENALTY: u32 = 25;

const TOOL_DEFAULTS: SourceDefaults<ToolFindings> = SourceDefaults {
    missing: ToolFindings { score: 0.0, vulnerabilities: 0 },
    malformed: ToolFindings { score: 50.0, vulnerabilities: 0 },
};

/// One tool's contribution to the security category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolFindings {
    pub score: f64,
    pub vulnerabilities: u32,
}

fn deduct(penalty: u32) -> f64 {
    100.0 - f64::from(penalty.min(100))
}

pub fn score_bandit(report: &Value) -> Result<ToolFindings, ShapeError> {
    let obj = object(report, "bandit report")?;
    let mut high = 0u32;
    let mut medium = 0u32;
    for issue in array_field(obj, "results")? {
        let issue = object(issue, "bandit result")?;
        match issue.get("issue_severity").and_then(Value::as_str) {
            Some("HIGH") => high += 1,
            Some("MEDIUM") => medium += 1,
            _ => {}
        }
    }
    Ok(ToolFindings {
        score: deduct(high.saturating_mul(HIGH_PENALTY).saturating_add(medium.saturating_mul(MEDIUM_PENALTY))),
        vulnerabilities: high + medium,
    })
}

/// Safety emits a bare array of vulnerable packages; any other document counts as clean.
pub fn score_safety(report: &Value) -> Result<ToolFindings, ShapeError> {
    let count = report.as_array().map_or(0, |items| u32::try_from(items.len()).unwrap_or(u32::MAX));
    Ok(ToolFindings {
        score: deduct(count.saturating_mul(DEPENDENCY_PENALTY)),
        vulnerabilities: count,
    })
}

pub fn score_semgrep(report: &Value) -> Result<ToolFindings, ShapeError> {
    let obj = object(report, "semgrep report")?;
    let mut critical = 0u32;
    for finding in array_field(obj, "results")? {
        let finding = object(finding, "semgrep result")?;
        if nested_str(finding, "extra", "severity")? == Some("ERROR") {
            critical += 1;
        }
    }
    Ok(ToolFindings {
        score: deduct(critical.saturating_mul(CRITICAL_PATTERN_PENALTY)),
        vulnerabilities: critical,
    })
}

pub fn read_tools(dir: &Path, warnings: &mut Vec<stagegate_core::SourceWarning>) -> Vec<Scored<ToolFindings>> {
    vec![
        read_scored(dir, BANDIT_REPORT, TOOL_DEFAULTS, warnings, score_bandit),
        read_scored(dir, SAFETY_REPORT, TOOL_DEFAULTS, warnings, score_safety),
        read_scored(dir, SEMGREP_REPORT, TOOL_DEFAULTS, warnings, score_semgrep),
    ]
}

pub fn evaluate_security(dir: &Path, gates: &ThresholdConfig) -> Evaluated<SecurityScore> {
    let mut warnings = Vec::new();
    let tools = read_tools(dir, &mut warnings);

    let total: f64 = tools.iter().map(|t| t.value.score).sum();
    let vulnerability_count = tools.iter().map(|t| t.value.vulnerabilities).sum::<u32>();
    let security_score = total / SECURITY_TOOL_COUNT;

    Evaluated {
        record: SecurityScore {
            security_score,
            vulnerability_count,
            passed: security_score >= gates.security_score_threshold
                && vulnerability_count <= gates.vulnerability_count_limit,
        },
        warnings,
    }
}
