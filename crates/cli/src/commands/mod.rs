//! CLI Commands

pub mod init;
pub mod run;

pub use init::InitCommand;
pub use run::RunCommand;

use std::path::PathBuf;

use clap::Args;
use shared::{ObstacleMode, RobotConfig, DEFAULT_CONFIG_FILE};

use crate::render::OutputMode;
use crate::session::RobotSession;

/// Options shared by every mode that drives a robot
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Configuration file (defaults are used when it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Obstacle mode: random, clear, blocked or scripted
    #[arg(long, global = true)]
    pub obstacles: Option<ObstacleMode>,

    /// Seed for random obstacles
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Battery capacity
    #[arg(long, global = true)]
    pub capacity: Option<u32>,

    /// Output one JSON object per command
    #[arg(long, global = true)]
    pub json: bool,

    /// Write the audit trail as JSON to this file on exit
    #[arg(long, global = true)]
    pub audit_out: Option<PathBuf>,
}

impl SessionArgs {
    /// Load the config file and apply command-line overrides
    pub fn load_config(&self) -> anyhow::Result<RobotConfig> {
        let mut config = RobotConfig::load_or_default(&self.config)?;

        if let Some(mode) = self.obstacles {
            config.obstacles.mode = mode;
        }
        if let Some(seed) = self.seed {
            config.obstacles.seed = Some(seed);
        }
        if let Some(capacity) = self.capacity {
            config.battery_capacity = capacity;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    /// Write the audit export if `--audit-out` was given
    pub fn export_audit(&self, session: &RobotSession) -> anyhow::Result<()> {
        if let Some(path) = &self.audit_out {
            let json = serde_json::to_string_pretty(&session.audit().export_json())?;
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), "audit trail written");
        }
        Ok(())
    }
}
