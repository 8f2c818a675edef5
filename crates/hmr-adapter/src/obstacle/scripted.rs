//! Scripted obstacle source - replays a fixed list of answers
//!
//! Once the script runs out the path is reported clear.

use std::collections::VecDeque;

use hmr_domain::ObstacleSource;

#[derive(Debug, Clone, Default)]
pub struct ScriptedObstacleSource {
    script: VecDeque<bool>,
    queries: usize,
}

impl ScriptedObstacleSource {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: script.into_iter().collect(),
            queries: 0,
        }
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// How many times the robot has asked
    pub fn queries(&self) -> usize {
        self.queries
    }
}

impl ObstacleSource for ScriptedObstacleSource {
    fn detect_obstacle(&mut self) -> bool {
        self.queries += 1;
        match self.script.pop_front() {
            Some(answer) => answer,
            None => {
                tracing::trace!(queries = self.queries, "obstacle script exhausted");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmr_domain::{Direction, Position, Robot, RobotError};

    #[test]
    fn test_replays_then_clears() {
        let mut source = ScriptedObstacleSource::new([true, false, true]);

        assert!(source.detect_obstacle());
        assert!(!source.detect_obstacle());
        assert!(source.detect_obstacle());
        assert_eq!(source.remaining(), 0);
        assert!(!source.detect_obstacle());
        assert_eq!(source.queries(), 4);
    }

    #[test]
    fn test_drives_robot_deterministically() {
        let mut robot = Robot::new(ScriptedObstacleSource::new([false, true, false]));

        assert_eq!(robot.move_in(Direction::Forward), Ok(Position::new(0, 1)));
        assert!(matches!(
            robot.move_in(Direction::Forward),
            Err(RobotError::ObstacleBlocked { .. })
        ));
        assert_eq!(robot.move_in(Direction::Forward), Ok(Position::new(0, 2)));

        assert_eq!(robot.power().level(), 90);
        assert_eq!(robot.obstacle_source().queries(), 3);
    }

    #[test]
    fn test_low_power_skips_query() {
        use hmr_domain::PowerReserve;

        let mut robot = Robot::new(ScriptedObstacleSource::new([true]))
            .with_power(PowerReserve::with_level(100, 5).unwrap());

        assert!(matches!(
            robot.move_in(Direction::Backward),
            Err(RobotError::LowPower { percent: 5 })
        ));
        assert_eq!(robot.obstacle_source().queries(), 0);
        assert_eq!(robot.obstacle_source().remaining(), 1);
    }
}
