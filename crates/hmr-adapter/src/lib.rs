//! # HMR Adapter Layer
//!
//! Environment integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `obstacle/` - ObstacleSource implementations and the config factory

pub mod obstacle;

pub use obstacle::{
    from_config, FixedObstacleSource, RandomObstacleSource, ScriptedObstacleSource,
};
