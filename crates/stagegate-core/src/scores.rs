use serde::{Deserialize, Serialize};

/// Where a score value came from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrigin {
    Report,
    MissingDefault,
    MalformedDefault,
}

/// A value read from one report source, tagged with whether a documented
/// default was substituted for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scored<T> {
    pub value: T,
    pub origin: ScoreOrigin,
}

impl<T> Scored<T> {
    pub fn from_report(value: T) -> Self {
        Self { value, origin: ScoreOrigin::Report }
    }

    pub fn missing(value: T) -> Self {
        Self { value, origin: ScoreOrigin::MissingDefault }
    }

    pub fn malformed(value: T) -> Self {
        Self { value, origin: ScoreOrigin::MalformedDefault }
    }

    pub fn used_default(&self) -> bool {
        self.origin != ScoreOrigin::Report
    }
}

/// Recoverable problem with a single report source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceWarning {
    pub source: String,
    pub origin: ScoreOrigin,
    pub detail: String,
}

/// A category record plus the warnings raised while producing it.
#[derive(Clone, Debug)]
pub struct Evaluated<R> {
    pub record: R,
    pub warnings: Vec<SourceWarning>,
}

impl<R> Evaluated<R> {
    pub fn used_default(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SecurityScore {
    pub security_score: f64,
    pub vulnerability_count: u32,
    pub passed: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ComplianceScore {
    pub compliance_pass_rate: f64,
    pub passed_checks: u32,
    pub total_checks: u32,
    pub passed: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QualityScore {
    pub quality_score: f64,
    pub coverage_score: f64,
    pub passed: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceScore {
    pub performance_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighthouse_score: Option<f64>,
    pub baseline_met: bool,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
