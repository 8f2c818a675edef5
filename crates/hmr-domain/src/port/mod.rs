//! Port Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from its environment,
//! but NOT how it's provided. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait ObstacleSource  │  RandomObstacleSource
//!   fn detect()         │  FixedObstacleSource
//!                       │  ScriptedObstacleSource
//! ```

pub mod obstacle_source;
