use std::path::Path;

use stagegate_artifacts::load_evaluation_sections;
use stagegate_core::{EvaluationResult, GateCategory, OverallStatus};
use tracing::error;

/// What the gate checker concluded from a persisted evaluation.
#[derive(Clone, Debug)]
pub struct StatusCheck {
    pub status: OverallStatus,
    pub evaluation: Option<EvaluationResult>,
    /// Categories recorded in the file, in display order.
    pub categories: Vec<GateCategory>,
    /// Why the evaluation could not be used, when it could not.
    pub error: Option<String>,
}

impl StatusCheck {
    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}

/// Re-read an evaluation file. Missing or unparsable means FAILED, never PASSED.
pub fn check_gate_status(path: &Path) -> StatusCheck {
    match load_evaluation_sections(path) {
        Ok((eval, categories)) => {
            StatusCheck { status: eval.overall_status, evaluation: Some(eval), categories, error: None }
        }
        Err(e) => {
            error!(path = %path.display(), "evaluation unavailable: {e:#}");
            StatusCheck {
                status: OverallStatus::Failed,
                evaluation: None,
                categories: Vec::new(),
                error: Some(format!("{e:#}")),
            }
        }
    }
}
