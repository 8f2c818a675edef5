//! Obstacle Source - Abstract environment sensing
//!
//! The robot asks this port whether its path is blocked before every move.
//! Where the answer comes from (dice, a fixed script, a real sensor) is
//! not the domain's concern.

/// Obstacle Source Trait
///
/// This is a PORT in hexagonal architecture.
/// The robot calls `detect_obstacle` exactly once per move that passes the
/// power check, before any state changes.
///
/// Takes `&mut self` so deterministic sources can advance through a
/// script and random sources can own their generator.
pub trait ObstacleSource {
    /// Returns `true` if something blocks the robot's path
    fn detect_obstacle(&mut self) -> bool;
}

impl<S: ObstacleSource + ?Sized> ObstacleSource for Box<S> {
    fn detect_obstacle(&mut self) -> bool {
        (**self).detect_obstacle()
    }
}

impl<S: ObstacleSource + ?Sized> ObstacleSource for &mut S {
    fn detect_obstacle(&mut self) -> bool {
        (**self).detect_obstacle()
    }
}
