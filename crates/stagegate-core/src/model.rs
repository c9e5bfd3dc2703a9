use serde::{Deserialize, Serialize};

/// Overall outcome of a gate evaluation. Serialized as the bare pipeline token.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    Passed,
    Failed,
    #[default]
    Pending,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Passed => "PASSED",
            OverallStatus::Failed => "FAILED",
            OverallStatus::Pending => "PENDING",
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, OverallStatus::Passed)
    }

    /// Status assumed when a persisted evaluation carries no status at all.
    pub fn fail_closed() -> Self {
        OverallStatus::Failed
    }

    /// Process exit code for pipeline orchestration.
    pub fn exit_code(&self) -> i32 {
        if self.is_passed() {
            0
        } else {
            1
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GateCategory {
    Security,
    Compliance,
    Quality,
    Performance,
}

impl GateCategory {
    pub const ALL: [GateCategory; 4] = [
        GateCategory::Security,
        GateCategory::Compliance,
        GateCategory::Quality,
        GateCategory::Performance,
    ];

    /// Field name of the category record in a persisted evaluation.
    pub fn key(&self) -> &'static str {
        match self {
            GateCategory::Security => "security",
            GateCategory::Compliance => "compliance",
            GateCategory::Quality => "quality",
            GateCategory::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GateCategory::Security => "Security",
            GateCategory::Compliance => "Compliance",
            GateCategory::Quality => "Quality",
            GateCategory::Performance => "Performance",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GateCategory::Security => "🔒",
            GateCategory::Compliance => "📋",
            GateCategory::Quality => "⭐",
            GateCategory::Performance => "🚀",
        }
    }
}
