use serde::{Deserialize, Serialize};

use crate::{
    now_rfc3339, ComplianceScore, GateCategory, OverallStatus, PerformanceScore, QualityScore,
    SecurityScore, ThresholdConfig,
};

/// Aggregate of the four category records. This is the sole durable artifact
/// of the evaluation phase and is read back by the checker and the promoter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EvaluationResult {
    #[serde(default)]
    pub security: SecurityScore,
    #[serde(default)]
    pub compliance: ComplianceScore,
    #[serde(default)]
    pub quality: QualityScore,
    #[serde(default)]
    pub performance: PerformanceScore,
    #[serde(default = "OverallStatus::fail_closed")]
    pub overall_status: OverallStatus,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub quality_gates: ThresholdConfig,
}

impl EvaluationResult {
    /// Builds the aggregate, deriving `overall_status` from the category flags.
    pub fn new(
        security: SecurityScore,
        compliance: ComplianceScore,
        quality: QualityScore,
        performance: PerformanceScore,
        quality_gates: ThresholdConfig,
    ) -> Self {
        let overall_status = overall_status_for(&[
            security.passed,
            compliance.passed,
            quality.passed,
            performance.passed,
        ]);
        Self {
            security,
            compliance,
            quality,
            performance,
            overall_status,
            timestamp: now_rfc3339(),
            quality_gates,
        }
    }

    pub fn category_passed(&self, category: GateCategory) -> bool {
        match category {
            GateCategory::Security => self.security.passed,
            GateCategory::Compliance => self.compliance.passed,
            GateCategory::Quality => self.quality.passed,
            GateCategory::Performance => self.performance.passed,
        }
    }

    /// The headline percentage reported for a category.
    pub fn category_score(&self, category: GateCategory) -> f64 {
        match category {
            GateCategory::Security => self.security.security_score,
            GateCategory::Compliance => self.compliance.compliance_pass_rate,
            GateCategory::Quality => self.quality.quality_score,
            GateCategory::Performance => self.performance.performance_score,
        }
    }
}

/// PASSED iff every flag is set. An empty set of gates is not a pass.
pub fn overall_status_for(flags: &[bool]) -> OverallStatus {
    if !flags.is_empty() && flags.iter().all(|passed| *passed) {
        OverallStatus::Passed
    } else {
        OverallStatus::Failed
    }
}
