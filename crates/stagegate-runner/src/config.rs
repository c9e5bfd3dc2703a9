use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use stagegate_core::ThresholdConfig;
use stagegate_promote::PromotionSettings;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub thresholds: ThresholdConfig,
    pub promotion: PromotionSettings,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    /// Built-in defaults unless a config file was named.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }
}
