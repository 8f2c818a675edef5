//! Obstacle Adapters - ObstacleSource implementations
//!
//! These implement the `ObstacleSource` port from hmr-domain.

pub mod fixed;
pub mod random;
pub mod scripted;

pub use fixed::FixedObstacleSource;
pub use random::RandomObstacleSource;
pub use scripted::ScriptedObstacleSource;

use hmr_domain::ObstacleSource;
use shared::{ObstacleConfig, ObstacleMode};

/// Build the obstacle source selected by configuration
pub fn from_config(config: &ObstacleConfig) -> Box<dyn ObstacleSource> {
    tracing::debug!(mode = %config.mode, seed = ?config.seed, "building obstacle source");

    match config.mode {
        ObstacleMode::Random => Box::new(match config.seed {
            Some(seed) => RandomObstacleSource::seeded(config.probability, seed),
            None => RandomObstacleSource::new(config.probability),
        }),
        ObstacleMode::Clear => Box::new(FixedObstacleSource::clear()),
        ObstacleMode::Blocked => Box::new(FixedObstacleSource::blocked()),
        ObstacleMode::Scripted => Box::new(ScriptedObstacleSource::new(config.script.clone())),
    }
}
