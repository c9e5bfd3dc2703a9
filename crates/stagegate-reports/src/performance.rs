use std::path::Path;

use serde_json::Value;
use stagegate_core::{Evaluated, PerformanceScore, ThresholdConfig, PERFORMANCE_BASELINE_SCORE};

use crate::json::{number_or, object, read_scored, SourceDefaults};
use crate::ShapeError;

pub const PERFORMANCE_BASELINE: &str = "performance-baseline.json";

pub const DEFAULT_PERFORMANCE_SCORE: f64 = 80.0;
pub const BASELINE_UNAVAILABLE_NOTE: &str = "Performance baseline not available, assuming pass";

const ABSENT_RESPONSE_TIME_MS: f64 = 1000.0;
const ABSENT_PEAK_MEMORY_MB: f64 = 512.0;
const ABSENT_LIGHTHOUSE: f64 = 90.0;

/// Record used when no usable baseline exists. Missing baselines never block promotion.
pub fn baseline_unavailable() -> PerformanceScore {
    PerformanceScore {
        performance_score: DEFAULT_PERFORMANCE_SCORE,
        baseline_met: true,
        passed: true,
        note: Some(BASELINE_UNAVAILABLE_NOTE.to_string()),
        ..Default::default()
    }
}

pub fn score_baseline(report: &Value) -> Result<PerformanceScore, ShapeError> {
    let obj = object(report, "performance baseline")?;
    let response_time = number_or(obj, "avg_response_time", ABSENT_RESPONSE_TIME_MS)?;
    let memory_usage = number_or(obj, "peak_memory_mb", ABSENT_PEAK_MEMORY_MB)?;
    let lighthouse = number_or(obj, "lighthouse_performance", ABSENT_LIGHTHOUSE)?;

    let response_score = (100.0 - response_time / 10.0).max(0.0);
    let memory_score = (100.0 - memory_usage / 10.0).max(0.0);
    let performance_score = (response_score + memory_score + lighthouse) / 3.0;
    let baseline_met = performance_score >= PERFORMANCE_BASELINE_SCORE;

    Ok(PerformanceScore {
        performance_score,
        response_time_ms: Some(response_time),
        memory_usage_mb: Some(memory_usage),
        lighthouse_score: Some(lighthouse),
        baseline_met,
        passed: baseline_met,
        note: None,
    })
}

pub fn evaluate_performance(dir: &Path, _gates: &ThresholdConfig) -> Evaluated<PerformanceScore> {
    let mut warnings = Vec::new();
    let defaults = SourceDefaults { missing: None, malformed: None };
    let scored = read_scored(dir, PERFORMANCE_BASELINE, defaults, &mut warnings, |v| score_baseline(v).map(Some));
    let record = scored.value.unwrap_or_else(baseline_unavailable);
    Evaluated { record, warnings }
}
