use serde::{Deserialize, Serialize};
use stagegate_core::{now_rfc3339, EvaluationResult};

use crate::{stage_title, PromotionSettings, StageRequirements};

const UNKNOWN_SUMMARY: &str = "UNKNOWN";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailedScores {
    pub security_score: f64,
    pub compliance_pass_rate: f64,
    pub quality_score: f64,
    pub performance_score: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SecurityValidation {
    pub vulnerability_count: u32,
    pub security_certified: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ComplianceValidation {
    pub passed_checks: u32,
    pub total_checks: u32,
    pub compliance_validated: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromotionReport {
    pub timestamp: String,
    pub source_stage: String,
    pub target_stage: String,
    pub promotion_status: String,
    pub qa_validation_summary: String,
    pub detailed_scores: DetailedScores,
    pub security_validation: SecurityValidation,
    pub compliance_validation: ComplianceValidation,
    pub next_stage_requirements: StageRequirements,
    pub recommendation: String,
    pub action_taken: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineMetadata {
    pub pipeline_version: String,
    pub qa_stage_version: String,
    pub validation_framework: String,
    pub promotion_automation: bool,
    pub quality_gates_enforced: bool,
}

/// The document written to `reports/qa-promotion-report.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromotionReportDocument {
    pub promotion_report: PromotionReport,
    pub promotion_metadata: PipelineMetadata,
}

impl PromotionReportDocument {
    pub fn approved(&self) -> bool {
        self.promotion_report.promotion_status == "PASSED"
    }
}

/// Builds the promotion decision record. `evaluation` is `None` when the
/// upstream evaluation could not be read; the report is still produced.
pub fn build_promotion_report(
    evaluation: Option<&EvaluationResult>,
    target_stage: &str,
    status: &str,
    settings: &PromotionSettings,
) -> PromotionReportDocument {
    let (summary, detailed_scores, security_validation, compliance_validation) = match evaluation {
        Some(eval) => (
            eval.overall_status.to_string(),
            DetailedScores {
                security_score: eval.security.security_score,
                compliance_pass_rate: eval.compliance.compliance_pass_rate,
                quality_score: eval.quality.quality_score,
                performance_score: eval.performance.performance_score,
            },
            SecurityValidation {
                vulnerability_count: eval.security.vulnerability_count,
                security_certified: eval.security.passed,
            },
            ComplianceValidation {
                passed_checks: eval.compliance.passed_checks,
                total_checks: eval.compliance.total_checks,
                compliance_validated: eval.compliance.passed,
            },
        ),
        None => (UNKNOWN_SUMMARY.to_string(), Default::default(), Default::default(), Default::default()),
    };

    let title = stage_title(target_stage);
    let (recommendation, action_taken) = if status == "PASSED" {
        (
            format!("APPROVED - All QA quality gates passed, ready for {title} stage"),
            format!("Automatic promotion to {title} stage initiated"),
        )
    } else {
        (
            "REJECTED - QA quality gates failed, requires remediation".to_string(),
            "Promotion blocked, manual review required".to_string(),
        )
    };

    PromotionReportDocument {
        promotion_report: PromotionReport {
            timestamp: now_rfc3339(),
            source_stage: settings.source_stage.clone(),
            target_stage: target_stage.to_string(),
            promotion_status: status.to_string(),
            qa_validation_summary: summary,
            detailed_scores,
            security_validation,
            compliance_validation,
            next_stage_requirements: StageRequirements::next_stage(),
            recommendation,
            action_taken,
        },
        promotion_metadata: PipelineMetadata {
            pipeline_version: settings.pipeline_version.clone(),
            qa_stage_version: settings.qa_stage_version.clone(),
            validation_framework: settings.validation_framework.clone(),
            promotion_automation: true,
            quality_gates_enforced: true,
        },
    }
}
