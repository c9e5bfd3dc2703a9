use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use sha2::{Digest, Sha256};
use stagegate_artifacts::{load_evaluation, write_json, write_text, PROMOTION_SUMMARY_FILE, STAGE_README_FILE};
use stagegate_core::{now_rfc3339, EvaluationResult, PromotionId};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::{
    render_stage_readme, PromoteError, PromotedTemplate, PromotionMetadata, PromotionSettings, QaValidation,
    StageRequirements, TemplateSidecar,
};

/// Result of a promotion run that got past the load gate and discovery.
#[derive(Clone, Debug)]
pub struct PromotionOutcome {
    pub metadata: PromotionMetadata,
    pub summary_path: PathBuf,
    /// Written only when every template was promoted.
    pub readme_path: Option<PathBuf>,
}

/// Template files under `source_dir` with the given extension, in file-name order.
pub fn discover_templates(source_dir: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(source_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(dir = %source_dir.display(), "skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some(extension))
        .map(|e| e.into_path())
        .collect()
}

/// Sidecar location for a promoted template: same path, `.json` extension.
pub fn sidecar_path(target_file: &Path) -> PathBuf {
    target_file.with_extension("json")
}

/// Paths the promoter writes itself. A template landing on one of these, or whose
/// sidecar would, is refused rather than overwritten.
struct ReservedPaths {
    artifacts: HashSet<PathBuf>,
    templates: HashSet<PathBuf>,
}

impl ReservedPaths {
    fn new(target_dir: &Path, targets: &[PathBuf]) -> Self {
        let artifacts =
            [PROMOTION_SUMMARY_FILE, STAGE_README_FILE].iter().map(|name| target_dir.join(name)).collect();
        Self { artifacts, templates: targets.iter().cloned().collect() }
    }

    fn collision(&self, target_file: &Path) -> Option<String> {
        let sidecar = sidecar_path(target_file);
        if self.artifacts.contains(target_file) {
            return Some(format!("{} is reserved for promotion output", target_file.display()));
        }
        if sidecar == target_file || self.templates.contains(&sidecar) {
            return Some(format!("sidecar {} would overwrite a template", sidecar.display()));
        }
        if self.artifacts.contains(&sidecar) {
            return Some(format!("sidecar {} is reserved for promotion output", sidecar.display()));
        }
        None
    }
}

fn sha256_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// Copies templates from one stage tree to the next, gated on a PASSED evaluation.
pub struct TemplatePromoter<'a> {
    settings: &'a PromotionSettings,
    promotion_id: PromotionId,
    promotion_timestamp: String,
}

impl<'a> TemplatePromoter<'a> {
    pub fn new(settings: &'a PromotionSettings) -> Self {
        Self { settings, promotion_id: PromotionId::new(), promotion_timestamp: now_rfc3339() }
    }

    pub fn promotion_id(&self) -> &PromotionId {
        &self.promotion_id
    }

    /// Load the evaluation and refuse anything that is not PASSED. Nothing is touched on refusal.
    pub fn load_gate(&self, evaluation_file: &Path) -> Result<EvaluationResult, PromoteError> {
        let eval = load_evaluation(evaluation_file).map_err(|e| PromoteError::EvaluationUnavailable {
            path: evaluation_file.to_path_buf(),
            detail: format!("{e:#}"),
        })?;
        if !eval.overall_status.is_passed() {
            error!(status = %eval.overall_status, "promotion refused");
            return Err(PromoteError::NotPassed { status: eval.overall_status });
        }
        Ok(eval)
    }

    pub fn copy_template_with_metadata(
        &self,
        source_file: &Path,
        target_file: &Path,
        eval: &EvaluationResult,
    ) -> Result<PromotedTemplate> {
        if let Some(parent) = target_file.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
        }
        let size_bytes = std::fs::copy(source_file, target_file)
            .with_context(|| format!("copy {} -> {}", source_file.display(), target_file.display()))?;
        let sha256 = sha256_file(target_file)?;
        let name = source_file.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();

        let sidecar = TemplateSidecar {
            template_name: name.clone(),
            original_file: source_file.display().to_string(),
            promoted_from: self.settings.source_stage.clone(),
            promotion_id: self.promotion_id.clone(),
            promotion_timestamp: self.promotion_timestamp.clone(),
            content_sha256: sha256.clone(),
            qa_validation: QaValidation::from(eval),
            testing_stage_requirements: StageRequirements::testing_stage(),
        };
        write_json(&sidecar_path(target_file), &sidecar)?;

        Ok(PromotedTemplate {
            name,
            source_path: source_file.display().to_string(),
            target_path: target_file.display().to_string(),
            size_bytes,
            sha256,
        })
    }

    /// Promote every template. A failed copy is recorded and the rest continue;
    /// the outcome is complete only if every discovered template was copied.
    pub fn promote(
        &self,
        source_dir: &Path,
        target_dir: &Path,
        evaluation_file: &Path,
    ) -> Result<PromotionOutcome, PromoteError> {
        let eval = self.load_gate(evaluation_file)?;

        let templates = discover_templates(source_dir, &self.settings.template_extension);
        if templates.is_empty() {
            return Err(PromoteError::NoTemplates {
                dir: source_dir.to_path_buf(),
                extension: self.settings.template_extension.clone(),
            });
        }
        debug!(count = templates.len(), "discovered templates");

        let targets: Vec<PathBuf> = templates
            .iter()
            .map(|t| target_dir.join(t.strip_prefix(source_dir).unwrap_or(t.as_path())))
            .collect();
        let reserved = ReservedPaths::new(target_dir, &targets);

        let mut promoted = Vec::with_capacity(templates.len());
        let mut failed = Vec::new();
        for (template, target_file) in templates.iter().zip(&targets) {
            let rel = template.strip_prefix(source_dir).unwrap_or(template.as_path());
            let copied = match reserved.collision(target_file) {
                Some(reason) => Err(anyhow!(reason)),
                None => self.copy_template_with_metadata(template, target_file, &eval),
            };
            match copied {
                Ok(record) => {
                    info!(template = %rel.display(), "promoted");
                    promoted.push(record);
                }
                Err(e) => {
                    error!(template = %rel.display(), "promotion failed: {e:#}");
                    failed.push(rel.display().to_string());
                }
            }
        }

        let metadata = PromotionMetadata {
            promotion_id: self.promotion_id.clone(),
            promotion_timestamp: self.promotion_timestamp.clone(),
            source_stage: self.settings.source_stage.clone(),
            target_stage: self.settings.target_stage.clone(),
            successfully_promoted: promoted.len(),
            total_templates: templates.len(),
            promoted_templates: promoted,
            failed_templates: failed,
            qa_validation_summary: eval,
        };

        let summary_path = target_dir.join(PROMOTION_SUMMARY_FILE);
        write_json(&summary_path, &metadata)
            .map_err(|e| PromoteError::Artifact { path: summary_path.clone(), detail: format!("{e:#}") })?;

        let readme_path = if metadata.is_complete() {
            let path = target_dir.join(STAGE_README_FILE);
            write_text(&path, &render_stage_readme(&metadata, self.settings))
                .map_err(|e| PromoteError::Artifact { path: path.clone(), detail: format!("{e:#}") })?;
            Some(path)
        } else {
            None
        };

        Ok(PromotionOutcome { metadata, summary_path, readme_path })
    }
}
