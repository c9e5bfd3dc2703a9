use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use stagegate_core::{EvaluationResult, GateCategory};

pub const PROMOTION_REPORT_FILE: &str = "qa-promotion-report.json";
pub const PROMOTION_SUMMARY_FILE: &str = "promotion_summary.json";
pub const STAGE_README_FILE: &str = "README.md";

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    Ok(())
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let bytes = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn write_evaluation(path: &Path, eval: &EvaluationResult) -> Result<()> {
    write_json(path, eval)
}

pub fn load_evaluation(path: &Path) -> Result<EvaluationResult> {
    let bytes = std::fs::read(path).with_context(|| format!("read evaluation {}", path.display()))?;
    let eval = serde_json::from_slice(&bytes).with_context(|| format!("parse evaluation {}", path.display()))?;
    Ok(eval)
}

/// Load an evaluation along with the categories the file actually records,
/// in display order. Absent categories still deserialize to failing defaults.
pub fn load_evaluation_sections(path: &Path) -> Result<(EvaluationResult, Vec<GateCategory>)> {
    let bytes = std::fs::read(path).with_context(|| format!("read evaluation {}", path.display()))?;
    let doc: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parse evaluation {}", path.display()))?;
    let present = GateCategory::ALL.into_iter().filter(|c| doc.get(c.key()).is_some()).collect();
    let eval = serde_json::from_value(doc).with_context(|| format!("parse evaluation {}", path.display()))?;
    Ok((eval, present))
}

pub fn promotion_report_path(reports_dir: &Path) -> PathBuf {
    reports_dir.join(PROMOTION_REPORT_FILE)
}
