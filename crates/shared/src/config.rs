//! Configuration types for HMR

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{HmrError, Result};

/// File name written by `hmr init`
pub const DEFAULT_CONFIG_FILE: &str = "hmr.json";

/// Simulator configuration (hmr.json)
///
/// Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RobotConfig {
    /// Maximum battery charge
    pub battery_capacity: u32,

    /// How the environment reports obstacles
    pub obstacles: ObstacleConfig,

    /// Number of command records kept by the audit trail
    pub audit_capacity: usize,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            battery_capacity: 100,
            obstacles: ObstacleConfig::default(),
            audit_capacity: 1000,
        }
    }
}

impl RobotConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Write configuration as pretty JSON
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.battery_capacity == 0 {
            return Err(HmrError::Config(
                "batteryCapacity must be > 0".to_string(),
            ));
        }
        if self.audit_capacity == 0 {
            return Err(HmrError::Config("auditCapacity must be > 0".to_string()));
        }
        self.obstacles.validate()
    }
}

/// Obstacle source selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObstacleConfig {
    pub mode: ObstacleMode,

    /// Chance of an obstacle per move in `random` mode
    pub probability: f64,

    /// Seed for `random` mode; unseeded runs use OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Answers replayed in order by `scripted` mode
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub script: Vec<bool>,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            mode: ObstacleMode::Random,
            probability: 0.5,
            seed: None,
            script: Vec::new(),
        }
    }
}

impl ObstacleConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(HmrError::Config(format!(
                "obstacles.probability must be within [0, 1], got {}",
                self.probability
            )));
        }
        Ok(())
    }
}

/// Where obstacle answers come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleMode {
    /// Coin flip per move
    #[default]
    Random,
    /// Never blocked
    Clear,
    /// Always blocked
    Blocked,
    /// Replay `script`, then clear
    Scripted,
}

impl ObstacleMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleMode::Random => "random",
            ObstacleMode::Clear => "clear",
            ObstacleMode::Blocked => "blocked",
            ObstacleMode::Scripted => "scripted",
        }
    }
}

impl std::fmt::Display for ObstacleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObstacleMode {
    type Err = HmrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ObstacleMode::Random),
            "clear" | "none" => Ok(ObstacleMode::Clear),
            "blocked" | "always" => Ok(ObstacleMode::Blocked),
            "scripted" => Ok(ObstacleMode::Scripted),
            other => Err(HmrError::Config(format!(
                "unknown obstacle mode '{}'. Expected random, clear, blocked or scripted",
                other
            ))),
        }
    }
}
