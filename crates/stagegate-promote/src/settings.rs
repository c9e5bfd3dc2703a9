use serde::{Deserialize, Serialize};

/// Stage names and fixed provenance strings used when promoting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PromotionSettings {
    /// File extension (without the dot) that marks a template.
    pub template_extension: String,
    pub source_stage: String,
    pub target_stage: String,
    /// Stage that follows `target_stage`, named in the stage README.
    pub next_stage: String,
    pub reports_dir: String,
    pub pipeline_version: String,
    pub qa_stage_version: String,
    pub validation_framework: String,
}

impl Default for PromotionSettings {
    fn default() -> Self {
        Self {
            template_extension: "md".to_string(),
            source_stage: "qa".to_string(),
            target_stage: "testing".to_string(),
            next_stage: "Pre-Production".to_string(),
            reports_dir: "reports".to_string(),
            pipeline_version: "3.0.0".to_string(),
            qa_stage_version: "2.0.0".to_string(),
            validation_framework: "stagegate".to_string(),
        }
    }
}

/// "testing" -> "Testing"
pub fn stage_title(stage: &str) -> String {
    let mut chars = stage.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
