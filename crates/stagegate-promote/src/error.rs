use std::path::PathBuf;

use stagegate_core::OverallStatus;
use thiserror::Error;

/// Conditions that abort a promotion before or after the per-file copies.
#[derive(Debug, Error)]
pub enum PromoteError {
    #[error("cannot load evaluation {}: {detail}", path.display())]
    EvaluationUnavailable { path: PathBuf, detail: String },
    #[error("cannot promote: QA validation status is {status}")]
    NotPassed { status: OverallStatus },
    #[error("no *.{extension} templates found under {}", dir.display())]
    NoTemplates { dir: PathBuf, extension: String },
    #[error("write {}: {detail}", path.display())]
    Artifact { path: PathBuf, detail: String },
}
