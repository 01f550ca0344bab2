// src/config.rs
// ============================================================================
// APPLICATION CONFIGURATION
// ============================================================================
// Settings for the CLI and the collaborators around the engine. Loaded from
// TOML, JSON or YAML; every field has a default so partial files work.
// ============================================================================

use crate::params::DEFAULT_SAMPLE_STEP_MONTHS;
use crate::tokenomics::schedule::UnlockScheduleAggregator;
use crate::utils::logging::LoggingConfig;
use crate::{Result, TokenomicsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory backing the key-value snapshot store
    pub storage_dir: PathBuf,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Sampling step of unlock series (months)
    pub sample_step_months: f64,

    /// Fixed series horizon; derived from the allocations when absent
    pub horizon_months: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./unlockfi_data"),
            logging: LoggingConfig::default(),
            sample_step_months: DEFAULT_SAMPLE_STEP_MONTHS,
            horizon_months: None,
        }
    }
}

impl AppConfig {
    /// Load config from file (TOML, JSON or YAML, chosen by extension)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("toml");

        let config = match ext {
            "toml" => toml::from_str(&content).map_err(|e| e.to_string()),
            "json" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            other => {
                return Err(TokenomicsError::Config(format!(
                    "unsupported config format: {}",
                    other
                )))
            }
        };

        config.map_err(|e| TokenomicsError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Aggregator using this config's horizon and step
    pub fn aggregator(&self) -> UnlockScheduleAggregator {
        UnlockScheduleAggregator::new(self.horizon_months, self.sample_step_months)
    }
}
