use crate::{stage_title, PromotionMetadata, PromotionSettings, NEXT_STAGE_ACCURACY_THRESHOLD};

/// Human-readable status document for a stage that received a full promotion.
pub fn render_stage_readme(meta: &PromotionMetadata, settings: &PromotionSettings) -> String {
    let target = stage_title(&meta.target_stage);
    let source = meta.source_stage.to_uppercase();
    let scores = &meta.qa_validation_summary;

    let mut s = String::new();
    s.push_str(&format!("# Templates - {target} Stage\n\n"));

    s.push_str("## Promotion Information\n");
    s.push_str(&format!("- **Promoted from**: {source} Stage\n"));
    s.push_str(&format!("- **Promotion id**: {}\n", meta.promotion_id));
    s.push_str(&format!("- **Promotion date**: {}\n", meta.promotion_timestamp));
    s.push_str(&format!("- **Templates promoted**: {}\n\n", meta.successfully_promoted));

    s.push_str(&format!("## {target} Stage Requirements\n"));
    s.push_str(&format!("- ✅ {source} validation passed\n"));
    s.push_str(&format!("- 🎯 Ultra-strict validation ({NEXT_STAGE_ACCURACY_THRESHOLD}% accuracy)\n"));
    s.push_str("- 🧪 Comprehensive testing required\n");
    s.push_str("- 📊 Performance benchmarking active\n");
    s.push_str("- 🔒 Security validation completed\n\n");

    s.push_str("## Next Stage\n");
    s.push_str(&format!(
        "Upon successful {} validation, templates will be promoted to:\n- **{} Stage**\n\n",
        meta.target_stage, settings.next_stage
    ));

    s.push_str("## Validation Status\n");
    s.push_str(&format!("All templates in this directory passed {source} validation with the following scores:\n"));
    s.push_str(&format!("- Security: {:.1}%\n", scores.security.security_score));
    s.push_str(&format!("- Compliance: {:.1}%\n", scores.compliance.compliance_pass_rate));
    s.push_str(&format!("- Quality: {:.1}%\n", scores.quality.quality_score));
    s.push_str(&format!("- Performance: {:.1}%\n", scores.performance.performance_score));
    s
}
