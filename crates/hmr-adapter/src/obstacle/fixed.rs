//! Fixed obstacle source - the same answer every time

use hmr_domain::ObstacleSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedObstacleSource {
    blocked: bool,
}

impl FixedObstacleSource {
    pub fn new(blocked: bool) -> Self {
        Self { blocked }
    }

    /// Path is always clear
    pub fn clear() -> Self {
        Self::new(false)
    }

    /// Path is always blocked
    pub fn blocked() -> Self {
        Self::new(true)
    }
}

impl ObstacleSource for FixedObstacleSource {
    fn detect_obstacle(&mut self) -> bool {
        self.blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmr_domain::{Direction, Robot, RobotError};

    #[test]
    fn test_clear_source_lets_robot_move() {
        let mut robot = Robot::new(FixedObstacleSource::clear());
        assert!(robot.move_in(Direction::Forward).is_ok());
        assert_eq!(robot.position().y, 1);
    }

    #[test]
    fn test_blocked_source_stops_robot() {
        let mut robot = Robot::new(FixedObstacleSource::blocked());
        assert!(matches!(
            robot.move_in(Direction::Forward),
            Err(RobotError::ObstacleBlocked { .. })
        ));
        assert_eq!(robot.power().level(), 100);
    }
}
