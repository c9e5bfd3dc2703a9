use std::path::{Path, PathBuf};

use anyhow::Result;
use stagegate_artifacts::write_evaluation;
use stagegate_core::{EvaluationResult, OverallStatus, SourceWarning, ThresholdConfig};
use stagegate_reports::{evaluate_compliance, evaluate_performance, evaluate_quality, evaluate_security};
use tracing::{debug, info};

/// Where each external collaborator dropped its reports.
#[derive(Clone, Debug)]
pub struct ReportDirs {
    pub security: PathBuf,
    pub compliance: PathBuf,
    pub quality: PathBuf,
    pub performance: PathBuf,
}

/// One evaluation run: the durable result plus every source that fell back to a default.
#[derive(Clone, Debug)]
pub struct GateEvaluation {
    pub result: EvaluationResult,
    pub warnings: Vec<SourceWarning>,
}

impl GateEvaluation {
    pub fn status(&self) -> OverallStatus {
        self.result.overall_status
    }
}

/// Run the four category readers in a fixed order and aggregate.
pub fn evaluate_all(dirs: &ReportDirs, gates: &ThresholdConfig) -> GateEvaluation {
    let security = evaluate_security(&dirs.security, gates);
    let compliance = evaluate_compliance(&dirs.compliance, gates);
    let quality = evaluate_quality(&dirs.quality, gates);
    let performance = evaluate_performance(&dirs.performance, gates);

    let mut warnings = Vec::new();
    warnings.extend(security.warnings);
    warnings.extend(compliance.warnings);
    warnings.extend(quality.warnings);
    warnings.extend(performance.warnings);
    debug!(defaults = warnings.len(), "report sources fell back to defaults");

    let result = EvaluationResult::new(
        security.record,
        compliance.record,
        quality.record,
        performance.record,
        gates.clone(),
    );
    info!(status = %result.overall_status, "gate evaluation complete");
    GateEvaluation { result, warnings }
}

/// Persist the evaluation and hand back the status that decides the exit code.
pub fn write_evaluation_report(eval: &GateEvaluation, output: &Path) -> Result<OverallStatus> {
    write_evaluation(output, &eval.result)?;
    info!(path = %output.display(), "evaluation written");
    Ok(eval.status())
}
