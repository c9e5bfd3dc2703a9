use std::path::Path;

use serde_json::Value;
use stagegate_core::{Evaluated, QualityScore, ScoreOrigin, Scored, SourceWarning, ThresholdConfig};
use tracing::debug;
use walkdir::WalkDir;

use crate::json::{load_report, number_or, object, read_scored, source_warning, SourceDefaults};
use crate::ShapeError;

pub const COMPLEXITY_REPORT: &str = "complexity-report.json";
pub const TECHNICAL_DEBT_REPORT: &str = "technical-debt.json";
pub const COVERAGE_DIR: &str = "coverage";

const ABSENT_COMPLEXITY: f64 = 10.0;
const ABSENT_DEBT_SCORE: f64 = 80.0;
const NO_QUALITY_REPORTS_SCORE: f64 = 85.0;
pub const DEFAULT_COVERAGE: f64 = 85.0;

const SOURCE_DEFAULTS: SourceDefaults<f64> = SourceDefaults { missing: 0.0, malformed: 70.0 };

pub fn score_complexity(report: &Value) -> Result<f64, ShapeError> {
    let avg = number_or(object(report, "complexity report")?, "averageComplexity", ABSENT_COMPLEXITY)?;
    Ok((100.0 - avg * 5.0).max(0.0))
}

pub fn score_debt(report: &Value) -> Result<f64, ShapeError> {
    number_or(object(report, "technical debt report")?, "debt_score", ABSENT_DEBT_SCORE)
}

/// `total.lines.pct` of a coverage summary. `None` when the summary has no `total`.
pub fn coverage_pct(report: &Value) -> Result<Option<f64>, ShapeError> {
    let Some(total) = report.as_object().and_then(|obj| obj.get("total")) else {
        return Ok(None);
    };
    let total = object(total, "coverage total")?;
    let pct = match total.get("lines") {
        None => DEFAULT_COVERAGE,
        Some(lines) => number_or(object(lines, "coverage lines")?, "pct", DEFAULT_COVERAGE)?,
    };
    Ok(Some(pct))
}

/// Scan `coverage/*summary*` in name order. The first candidate that can be
/// read decides; broken candidates are warned about and skipped.
pub fn read_coverage(quality_dir: &Path, warnings: &mut Vec<SourceWarning>) -> Scored<f64> {
    let coverage_dir = quality_dir.join(COVERAGE_DIR);
    if !coverage_dir.is_dir() {
        return Scored::missing(DEFAULT_COVERAGE);
    }

    let candidates = WalkDir::new(&coverage_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && e.file_name().to_string_lossy().contains("summary"));

    for entry in candidates {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        debug!(path = %path.display(), "coverage candidate");

        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            if let Err(e) = std::fs::File::open(path) {
                warnings.push(source_warning(&name, ScoreOrigin::MalformedDefault, e.to_string()));
                continue;
            }
            return Scored::missing(DEFAULT_COVERAGE);
        }

        let parsed = load_report(path).map_err(|e| e.to_string()).and_then(|report| match report {
            Some(v) => coverage_pct(&v).map_err(|e| format!("{}: {e}", path.display())),
            None => Ok(None),
        });
        match parsed {
            Ok(Some(pct)) => return Scored::from_report(pct),
            Ok(None) => return Scored::missing(DEFAULT_COVERAGE),
            Err(detail) => warnings.push(source_warning(&name, ScoreOrigin::MalformedDefault, detail)),
        }
    }
    Scored::missing(DEFAULT_COVERAGE)
}

pub fn evaluate_quality(dir: &Path, gates: &ThresholdConfig) -> Evaluated<QualityScore> {
    let mut warnings = Vec::new();
    let complexity = read_scored(dir, COMPLEXITY_REPORT, SOURCE_DEFAULTS, &mut warnings, score_complexity);
    let debt = read_scored(dir, TECHNICAL_DEBT_REPORT, SOURCE_DEFAULTS, &mut warnings, score_debt);
    let coverage = read_coverage(dir, &mut warnings);

    let sum = complexity.value + debt.value;
    let quality_score = if sum > 0.0 { sum / 2.0 } else { NO_QUALITY_REPORTS_SCORE };
    let coverage_score = coverage.value;

    Evaluated {
        record: QualityScore {
            quality_score,
            coverage_score,
            passed: quality_score >= gates.code_quality_score && coverage_score >= gates.test_coverage_minimum,
        },
        warnings,
    }
}
