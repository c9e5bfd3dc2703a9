use std::path::{Path, PathBuf};

use anyhow::Result;
use stagegate_artifacts::{load_evaluation, promotion_report_path, write_json};
use stagegate_promote::{build_promotion_report, PromotionReportDocument, PromotionSettings};
use tracing::{info, warn};

/// Build the promotion decision record and write it under `reports_dir`.
/// An unreadable evaluation is reported as UNKNOWN rather than aborting.
pub fn create_promotion_report(
    evaluation_file: &Path,
    target_stage: &str,
    status: &str,
    reports_dir: &Path,
    settings: &PromotionSettings,
) -> Result<(PathBuf, PromotionReportDocument)> {
    let eval = match load_evaluation(evaluation_file) {
        Ok(eval) => Some(eval),
        Err(e) => {
            warn!(path = %evaluation_file.display(), "evaluation unreadable, reporting UNKNOWN: {e:#}");
            None
        }
    };
    let doc = build_promotion_report(eval.as_ref(), target_stage, status, settings);
    let path = promotion_report_path(reports_dir);
    write_json(&path, &doc)?;
    info!(path = %path.display(), approved = doc.approved(), "promotion report written");
    Ok((path, doc))
}
