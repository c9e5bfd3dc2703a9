use crate::{EvaluationResult, GateCategory};

const RULE_WIDE: usize = 60;
const RULE_NARROW: usize = 40;

fn glyph(passed: bool) -> &'static str {
    if passed {
        "✅"
    } else {
        "❌"
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "✅ PASSED"
    } else {
        "❌ FAILED"
    }
}

/// Full console summary printed after an evaluation run.
pub fn render_evaluation_summary(eval: &EvaluationResult) -> String {
    let gates = &eval.quality_gates;
    let rule = "=".repeat(RULE_WIDE);
    let mut s = String::new();
    s.push_str(&format!("{rule}\n📊 QA QUALITY GATES EVALUATION SUMMARY\n{rule}\n"));

    for category in GateCategory::ALL {
        s.push_str(&format!(
            "{} {}: {}\n",
            category.icon(),
            category.label(),
            verdict(eval.category_passed(category))
        ));
        match category {
            GateCategory::Security => {
                s.push_str(&format!(
                    "   Score: {:.1}% (threshold: {:.1}%)\n",
                    eval.security.security_score, gates.security_score_threshold
                ));
                s.push_str(&format!(
                    "   Vulnerabilities: {} (limit: {})\n",
                    eval.security.vulnerability_count, gates.vulnerability_count_limit
                ));
            }
            GateCategory::Compliance => {
                s.push_str(&format!(
                    "   Pass Rate: {:.1}% ({}/{})\n",
                    eval.compliance.compliance_pass_rate,
                    eval.compliance.passed_checks,
                    eval.compliance.total_checks
                ));
            }
            GateCategory::Quality => {
                s.push_str(&format!(
                    "   Score: {:.1}% (threshold: {:.1}%)\n",
                    eval.quality.quality_score, gates.code_quality_score
                ));
                s.push_str(&format!(
                    "   Coverage: {:.1}% (minimum: {:.1}%)\n",
                    eval.quality.coverage_score, gates.test_coverage_minimum
                ));
            }
            GateCategory::Performance => {
                s.push_str(&format!("   Score: {:.1}%\n", eval.performance.performance_score));
                s.push_str(&format!("   Baseline Met: {}\n", eval.performance.baseline_met));
                if let Some(note) = &eval.performance.note {
                    s.push_str(&format!("   Note: {note}\n"));
                }
            }
        }
    }

    s.push_str(&format!("\n🎯 OVERALL STATUS: {}\n", eval.overall_status));
    s
}

/// Compact summary printed by the gate status checker, one line per recorded category.
pub fn render_status_check(eval: &EvaluationResult, categories: &[GateCategory]) -> String {
    let mut s = String::new();
    s.push_str("📊 QA Quality Gate Status Check\n");
    s.push_str(&"=".repeat(RULE_NARROW));
    s.push('\n');
    for &category in categories {
        s.push_str(&format!(
            "{} {}: {:.1}%\n",
            glyph(eval.category_passed(category)),
            category.label(),
            eval.category_score(category)
        ));
    }
    s.push_str(&format!("\n🎯 Overall Status: {}\n", eval.overall_status));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComplianceScore, PerformanceScore, QualityScore, SecurityScore, ThresholdConfig};

    fn sample() -> EvaluationResult {
        EvaluationResult::new(
            SecurityScore { security_score: 100.0, vulnerability_count: 0, passed: true },
            ComplianceScore { compliance_pass_rate: 75.0, passed_checks: 3, total_checks: 4, passed: false },
            QualityScore { quality_score: 90.0, coverage_score: 85.0, passed: true },
            PerformanceScore { performance_score: 80.0, baseline_met: true, passed: true, ..Default::default() },
            ThresholdConfig::default(),
        )
    }

    #[test]
    fn evaluation_summary_lists_every_category() {
        let s = render_evaluation_summary(&sample());
        assert!(s.contains("🔒 Security: ✅ PASSED"));
        assert!(s.contains("   Score: 100.0% (threshold: 90.0%)"));
        assert!(s.contains("📋 Compliance: ❌ FAILED"));
        assert!(s.contains("   Pass Rate: 75.0% (3/4)"));
        assert!(s.contains("   Coverage: 85.0% (minimum: 80.0%)"));
        assert!(s.ends_with("🎯 OVERALL STATUS: FAILED\n"));
    }

    #[test]
    fn status_check_uses_compact_lines() {
        let s = render_status_check(&sample(), &GateCategory::ALL);
        assert!(s.contains("✅ Security: 100.0%"));
        assert!(s.contains("❌ Compliance: 75.0%"));
        assert!(s.contains("✅ Performance: 80.0%"));
        assert!(s.ends_with("🎯 Overall Status: FAILED\n"));
    }

    #[test]
    fn status_check_skips_unrecorded_categories() {
        let s = render_status_check(&sample(), &[GateCategory::Security]);
        assert!(s.contains("✅ Security: 100.0%"));
        assert!(!s.contains("Compliance"));
        assert!(!s.contains("Quality"));
        assert!(!s.contains("Performance"));
    }
}
