use serde::{Deserialize, Serialize};

/// Fixed gate thresholds. Built once at startup and passed by reference.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdConfig {
    pub security_score_threshold: f64,
    pub compliance_pass_rate: f64,
    pub code_quality_score: f64,
    pub performance_baseline_met: bool,
    pub vulnerability_count_limit: u32,
    pub test_coverage_minimum: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            security_score_threshold: 90.0,
            compliance_pass_rate: 100.0,
            code_quality_score: 85.0,
            performance_baseline_met: true,
            vulnerability_count_limit: 0,
            test_coverage_minimum: 80.0,
        }
    }
}

/// Minimum averaged performance score for the baseline to count as met.
pub const PERFORMANCE_BASELINE_SCORE: f64 = 75.0;
