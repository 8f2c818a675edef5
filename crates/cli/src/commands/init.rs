//! hmr init command

use clap::Args;
use shared::{RobotConfig, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write the configuration into
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let path = self.write_default()?;
        println!("✓ Wrote default configuration to {}", path.display());
        Ok(())
    }

    fn write_default(&self) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;

        let path = self.directory.join(DEFAULT_CONFIG_FILE);
        if path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        RobotConfig::default().write_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let cmd = InitCommand {
            directory: dir.path().join("robot"),
            force: false,
        };

        let path = cmd.write_default().unwrap();

        let config = RobotConfig::from_file(&path).unwrap();
        assert_eq!(config, RobotConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{}").unwrap();

        let cmd = InitCommand {
            directory: dir.path().to_path_buf(),
            force: false,
        };
        assert!(cmd.write_default().is_err());

        let forced = InitCommand {
            directory: dir.path().to_path_buf(),
            force: true,
        };
        assert!(forced.write_default().is_ok());
    }
}
