use serde::{Deserialize, Serialize};
use stagegate_core::{EvaluationResult, OverallStatus, PromotionId};

/// Accuracy every template must reach in the stage after QA.
pub const NEXT_STAGE_ACCURACY_THRESHOLD: f64 = 99.9999;

/// Fixed policy object attached to promoted artifacts and promotion reports.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StageRequirements {
    pub ultra_strict_validation: bool,
    pub accuracy_threshold: f64,
    pub comprehensive_testing: bool,
    pub performance_benchmarking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_certification_required: Option<bool>,
}

impl StageRequirements {
    /// Requirements recorded in each template sidecar.
    pub fn testing_stage() -> Self {
        Self {
            ultra_strict_validation: true,
            accuracy_threshold: NEXT_STAGE_ACCURACY_THRESHOLD,
            comprehensive_testing: true,
            performance_benchmarking: true,
            security_certification_required: None,
        }
    }

    /// Requirements recorded in the promotion report.
    pub fn next_stage() -> Self {
        Self { security_certification_required: Some(true), ..Self::testing_stage() }
    }
}

/// Headline scores copied out of an evaluation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QaValidation {
    pub security_score: f64,
    pub compliance_pass_rate: f64,
    pub quality_score: f64,
    pub performance_score: f64,
    pub overall_status: OverallStatus,
}

impl From<&EvaluationResult> for QaValidation {
    fn from(eval: &EvaluationResult) -> Self {
        Self {
            security_score: eval.security.security_score,
            compliance_pass_rate: eval.compliance.compliance_pass_rate,
            quality_score: eval.quality.quality_score,
            performance_score: eval.performance.performance_score,
            overall_status: eval.overall_status,
        }
    }
}

/// Sidecar written next to every promoted template.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateSidecar {
    pub template_name: String,
    pub original_file: String,
    pub promoted_from: String,
    pub promotion_id: PromotionId,
    pub promotion_timestamp: String,
    pub content_sha256: String,
    pub qa_validation: QaValidation,
    pub testing_stage_requirements: StageRequirements,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PromotedTemplate {
    pub name: String,
    pub source_path: String,
    pub target_path: String,
    pub size_bytes: u64,
    pub sha256: String,
}

/// Cumulative record of one promotion run, persisted as `promotion_summary.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromotionMetadata {
    pub promotion_id: PromotionId,
    pub promotion_timestamp: String,
    pub source_stage: String,
    pub target_stage: String,
    pub promoted_templates: Vec<PromotedTemplate>,
    pub failed_templates: Vec<String>,
    pub total_templates: usize,
    pub successfully_promoted: usize,
    pub qa_validation_summary: EvaluationResult,
}

impl PromotionMetadata {
    pub fn is_complete(&self) -> bool {
        self.total_templates > 0 && self.successfully_promoted == self.total_templates
    }

    pub fn success_rate(&self) -> f64 {
        if self.total_templates == 0 {
            return 0.0;
        }
        self.successfully_promoted as f64 / self.total_templates as f64 * 100.0
    }
}
