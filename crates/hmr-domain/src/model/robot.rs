//! Robot - The single stateful actor of HMR
//!
//! Robot is an Entity with a two-state lifecycle:
//!
//! ```text
//!   Active ──shutdown()──▶ Shutdown (terminal)
//! ```
//!
//! Every operation checks preconditions before touching any field, so a
//! rejected command leaves the robot exactly as it was. Nothing is printed;
//! callers get a `Result` and decide how to present it.

use super::direction::Direction;
use super::history::HistoryLog;
use super::power::{PowerReserve, PowerStatus};
use crate::port::obstacle_source::ObstacleSource;

/// Movement is refused at or below this charge, in percent of capacity
pub const LOW_POWER_PERCENT: u32 = 10;

/// Charge consumed by one successful move, in percent of capacity
pub const MOVE_COST_PERCENT: u32 = 5;

/// Grid coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotState {
    Active,
    /// Terminal. Nothing brings the robot back.
    Shutdown,
}

/// Robot - owns its battery, its history and its view of the environment
#[derive(Debug)]
pub struct Robot<S> {
    position: Position,
    held_item: Option<String>,
    state: RobotState,
    power: PowerReserve,
    history: HistoryLog,
    obstacles: S,
}

impl<S: ObstacleSource> Robot<S> {
    /// Create an active robot at the origin with a full default battery
    pub fn new(obstacles: S) -> Self {
        Self {
            position: Position::default(),
            held_item: None,
            state: RobotState::Active,
            power: PowerReserve::default(),
            history: HistoryLog::new(),
            obstacles,
        }
    }

    /// Builder: replace the battery
    pub fn with_power(mut self, power: PowerReserve) -> Self {
        self.power = power;
        self
    }

    // ========== Getters ==========

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn held_item(&self) -> Option<&str> {
        self.held_item.as_deref()
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == RobotState::Active
    }

    pub fn power(&self) -> &PowerReserve {
        &self.power
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn obstacle_source(&self) -> &S {
        &self.obstacles
    }

    // ========== Operations ==========

    /// Step one cell forward or backward
    ///
    /// Checks, in order: shutdown, low power, obstacle. The obstacle source
    /// is only consulted once the power check has passed.
    ///
    /// Threshold and cost are percentages of capacity, so a battery of any
    /// size stops at 10% and spends 5% per step.
    pub fn move_in(&mut self, direction: Direction) -> Result<Position, RobotError> {
        self.ensure_active("move")?;

        let percent = self.power.status().percent();
        if percent <= LOW_POWER_PERCENT {
            return Err(RobotError::LowPower { percent });
        }

        if self.obstacles.detect_obstacle() {
            return Err(RobotError::ObstacleBlocked { direction });
        }

        self.position.y += direction.delta_y();
        self.power.drain(self.power.units_for_percent(MOVE_COST_PERCENT));
        self.history
            .log(format!("Moved {} to {}", direction, self.position));

        Ok(self.position)
    }

    /// Grab an item if the hands are free
    pub fn pick_up(&mut self, item: impl Into<String>) -> Result<(), RobotError> {
        self.ensure_active("pick up objects")?;

        if let Some(held) = &self.held_item {
            return Err(RobotError::AlreadyHolding { item: held.clone() });
        }

        let item = item.into();
        self.history.log(format!("Picked up {}", item));
        self.held_item = Some(item);
        Ok(())
    }

    /// Let go of the held item and return it
    pub fn drop_item(&mut self) -> Result<String, RobotError> {
        self.ensure_active("drop objects")?;

        let item = self.held_item.take().ok_or(RobotError::NothingHeld)?;
        self.history.log(format!("Dropped {}", item));
        Ok(item)
    }

    pub fn check_battery(&self) -> Result<PowerStatus, RobotError> {
        self.ensure_active("check battery")?;
        Ok(self.power.status())
    }

    pub fn recharge(&mut self) -> Result<PowerStatus, RobotError> {
        self.ensure_active("recharge")?;

        self.power.recharge();
        self.history.log("Recharged battery");
        Ok(self.power.status())
    }

    /// One-way transition to `Shutdown`
    ///
    /// A second call is rejected like any other command on a stopped robot.
    pub fn shutdown(&mut self) -> Result<(), RobotError> {
        self.ensure_active("shut down again")?;

        self.state = RobotState::Shutdown;
        self.history.log("Robot has been shut down");
        Ok(())
    }

    /// Pop the latest task off the undo stack
    ///
    /// Bookkeeping only: position, held item and battery are not restored.
    pub fn undo_last_task(&mut self) -> Result<String, RobotError> {
        self.ensure_active("undo tasks")?;
        self.history.undo_last().ok_or(RobotError::EmptyHistory)
    }

    /// Full history in the order it happened
    ///
    /// Not gated on state: the trail stays readable after shutdown.
    pub fn list_history(&self) -> &[String] {
        self.history.all_entries()
    }

    fn ensure_active(&self, action: &'static str) -> Result<(), RobotError> {
        match self.state {
            RobotState::Active => Ok(()),
            RobotState::Shutdown => Err(RobotError::ShutdownInactive { action }),
        }
    }
}

/// Conditions that stop a robot operation
///
/// All are recoverable and leave the robot unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    /// The robot has been shut down
    ShutdownInactive { action: &'static str },
    /// Battery at or below the movement threshold
    LowPower { percent: u32 },
    /// The environment blocked the move
    ObstacleBlocked { direction: Direction },
    /// Hands are already full
    AlreadyHolding { item: String },
    /// Nothing to drop
    NothingHeld,
    /// Undo stack is empty
    EmptyHistory,
}

impl RobotError {
    /// Stable machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            RobotError::ShutdownInactive { .. } => "shutdown_inactive",
            RobotError::LowPower { .. } => "low_power",
            RobotError::ObstacleBlocked { .. } => "obstacle_blocked",
            RobotError::AlreadyHolding { .. } => "already_holding",
            RobotError::NothingHeld => "nothing_held",
            RobotError::EmptyHistory => "empty_history",
        }
    }
}

impl core::fmt::Display for RobotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RobotError::ShutdownInactive { action } => {
                write!(f, "Robot is shut down. Cannot {}.", action)
            }
            RobotError::LowPower { .. } => {
                write!(f, "Battery too low to move. Please recharge.")
            }
            RobotError::ObstacleBlocked { .. } => {
                write!(f, "Obstacle detected! Movement blocked.")
            }
            RobotError::AlreadyHolding { .. } => {
                write!(f, "Cannot pick up object. Drop the current object first.")
            }
            RobotError::NothingHeld => write!(f, "No object to drop."),
            RobotError::EmptyHistory => write!(f, "No tasks to undo."),
        }
    }
}

impl std::error::Error for RobotError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed answer list, then reports a clear path
    #[derive(Debug, Default)]
    struct ScriptedObstacles {
        answers: VecDeque<bool>,
        calls: usize,
    }

    impl ScriptedObstacles {
        fn clear() -> Self {
            Self::default()
        }

        fn blocked(times: usize) -> Self {
            Self {
                answers: std::iter::repeat(true).take(times).collect(),
                calls: 0,
            }
        }
    }

    impl ObstacleSource for ScriptedObstacles {
        fn detect_obstacle(&mut self) -> bool {
            self.calls += 1;
            self.answers.pop_front().unwrap_or(false)
        }
    }

    fn robot() -> Robot<ScriptedObstacles> {
        Robot::new(ScriptedObstacles::clear())
    }

    // ============== Creation ==============

    #[test]
    fn test_new_robot() {
        let robot = robot();
        assert_eq!(robot.position(), Position::new(0, 0));
        assert_eq!(robot.held_item(), None);
        assert!(robot.is_active());
        assert_eq!(robot.power().level(), 100);
        assert!(robot.list_history().is_empty());
    }

    // ============== Movement ==============

    #[test]
    fn test_move_forward_on_clear_path() {
        let mut robot = robot();

        let position = robot.move_in(Direction::Forward).unwrap();

        assert_eq!(position, Position::new(0, 1));
        assert_eq!(robot.power().level(), 95);
        assert_eq!(robot.list_history(), ["Moved forward to (0,1)"]);
    }

    #[test]
    fn test_move_backward() {
        let mut robot = robot();
        robot.move_in(Direction::Backward).unwrap();
        robot.move_in(Direction::Backward).unwrap();

        assert_eq!(robot.position(), Position::new(0, -2));
        assert_eq!(robot.power().level(), 90);
        assert_eq!(robot.list_history()[1], "Moved backward to (0,-2)");
    }

    #[test]
    fn test_blocked_moves_change_nothing() {
        let mut robot = Robot::new(ScriptedObstacles::blocked(5));

        for direction in [Direction::Forward, Direction::Backward].into_iter().cycle().take(5) {
            let err = robot.move_in(direction).unwrap_err();
            assert_eq!(err, RobotError::ObstacleBlocked { direction });
        }

        assert_eq!(robot.position(), Position::new(0, 0));
        assert_eq!(robot.power().level(), 100);
        assert!(robot.list_history().is_empty());
        assert_eq!(robot.obstacle_source().calls, 5);
    }

    #[test]
    fn test_low_power_blocks_move() {
        let mut robot = robot().with_power(PowerReserve::with_level(100, 10).unwrap());

        let err = robot.move_in(Direction::Forward).unwrap_err();

        assert_eq!(err, RobotError::LowPower { percent: 10 });
        assert_eq!(robot.position().y, 0);
        assert_eq!(robot.power().level(), 10);
        // Obstacle source is not consulted when power is too low
        assert_eq!(robot.obstacle_source().calls, 0);
    }

    #[test]
    fn test_move_just_above_threshold() {
        let mut robot = robot().with_power(PowerReserve::with_level(100, 11).unwrap());

        robot.move_in(Direction::Forward).unwrap();
        assert_eq!(robot.power().level(), 6);

        assert!(matches!(
            robot.move_in(Direction::Forward),
            Err(RobotError::LowPower { percent: 6 })
        ));
    }

    #[test]
    fn test_obstacle_consulted_once_per_move() {
        let mut robot = robot();
        robot.move_in(Direction::Forward).unwrap();
        robot.move_in(Direction::Forward).unwrap();
        robot.move_in(Direction::Backward).unwrap();

        assert_eq!(robot.obstacle_source().calls, 3);
    }

    #[test]
    fn test_move_until_battery_low() {
        let mut robot = robot();
        let mut moves = 0;
        while robot.move_in(Direction::Forward).is_ok() {
            moves += 1;
        }

        // 100 -> 10 in steps of 5
        assert_eq!(moves, 18);
        assert_eq!(robot.power().level(), 10);
        assert_eq!(robot.position().y, 18);
    }

    #[test]
    fn test_small_battery_moves_until_ten_percent() {
        let mut robot = robot().with_power(PowerReserve::new(10).unwrap());

        let mut moves = 0;
        while robot.move_in(Direction::Forward).is_ok() {
            moves += 1;
        }

        // One unit per step (5% of 10 rounds up to the minimum), stops at 1 = 10%
        assert_eq!(moves, 9);
        assert_eq!(robot.power().level(), 1);
        assert_eq!(robot.power().status().percent(), 10);
        assert_eq!(
            robot.move_in(Direction::Forward),
            Err(RobotError::LowPower { percent: 10 })
        );
    }

    #[test]
    fn test_large_battery_moves_until_ten_percent() {
        let mut robot = robot().with_power(PowerReserve::new(1000).unwrap());

        let mut moves = 0;
        while robot.move_in(Direction::Forward).is_ok() {
            moves += 1;
        }

        // 1000 -> 100 in steps of 50
        assert_eq!(moves, 18);
        assert_eq!(robot.power().level(), 100);
        assert_eq!(robot.power().status().to_string(), "Battery level: 10%");
    }

    #[test]
    fn test_low_power_judged_in_percent() {
        // 109 of 1000 is 10% once rounded down
        let mut robot = robot_with_level(1000, 109);
        assert_eq!(
            robot.move_in(Direction::Forward),
            Err(RobotError::LowPower { percent: 10 })
        );

        let mut robot = robot_with_level(1000, 110);
        assert_eq!(robot.move_in(Direction::Forward), Ok(Position::new(0, 1)));
        assert_eq!(robot.power().level(), 60);
    }

    fn robot_with_level(capacity: u32, level: u32) -> Robot<ScriptedObstacles> {
        robot().with_power(PowerReserve::with_level(capacity, level).unwrap())
    }

    // ============== Items ==============

    #[test]
    fn test_pick_up_and_drop() {
        let mut robot = robot();

        robot.pick_up("box").unwrap();
        assert_eq!(robot.held_item(), Some("box"));

        let dropped = robot.drop_item().unwrap();
        assert_eq!(dropped, "box");
        assert_eq!(robot.held_item(), None);

        assert_eq!(robot.list_history(), ["Picked up box", "Dropped box"]);
    }

    #[test]
    fn test_pick_up_while_holding_keeps_first_item() {
        let mut robot = robot();
        robot.pick_up("box").unwrap();

        let err = robot.pick_up("item").unwrap_err();

        assert_eq!(
            err,
            RobotError::AlreadyHolding {
                item: "box".to_string()
            }
        );
        assert_eq!(robot.held_item(), Some("box"));
        assert_eq!(robot.list_history().len(), 1);
    }

    #[test]
    fn test_drop_with_empty_hands() {
        let mut robot = robot();
        assert_eq!(robot.drop_item(), Err(RobotError::NothingHeld));
        assert!(robot.list_history().is_empty());
    }

    // ============== Battery ==============

    #[test]
    fn test_check_battery_does_not_mutate() {
        let mut robot = robot();
        robot.move_in(Direction::Forward).unwrap();

        let status = robot.check_battery().unwrap();

        assert_eq!(status.percent(), 95);
        assert_eq!(status.to_string(), "Battery level: 95%");
        assert_eq!(robot.power().level(), 95);
        assert_eq!(robot.list_history().len(), 1);
    }

    #[test]
    fn test_recharge() {
        let mut robot = robot().with_power(PowerReserve::with_level(100, 50).unwrap());

        let status = robot.recharge().unwrap();

        assert_eq!(status.level, 100);
        assert_eq!(robot.power().level(), 100);
        assert_eq!(robot.list_history(), ["Recharged battery"]);
    }

    // ============== Shutdown ==============

    #[test]
    fn test_shutdown_is_terminal() {
        let mut robot = robot();
        robot.shutdown().unwrap();

        assert_eq!(robot.state(), RobotState::Shutdown);
        assert_eq!(robot.list_history(), ["Robot has been shut down"]);

        // Second shutdown is rejected and logs nothing
        let err = robot.shutdown().unwrap_err();
        assert_eq!(
            err,
            RobotError::ShutdownInactive {
                action: "shut down again"
            }
        );
        assert_eq!(err.to_string(), "Robot is shut down. Cannot shut down again.");
        assert_eq!(robot.list_history().len(), 1);
    }

    #[test]
    fn test_every_operation_rejected_after_shutdown() {
        let mut robot = robot();
        robot.pick_up("wrench").unwrap();
        robot.move_in(Direction::Forward).unwrap();
        robot.shutdown().unwrap();

        let position = robot.position();
        let level = robot.power().level();
        let entries = robot.list_history().to_vec();
        let undo_len = robot.history().undo_stack().len();
        let calls = robot.obstacle_source().calls;

        let is_shutdown = |r: Result<(), RobotError>| {
            matches!(r, Err(RobotError::ShutdownInactive { .. }))
        };

        assert!(is_shutdown(robot.move_in(Direction::Forward).map(|_| ())));
        assert!(is_shutdown(robot.pick_up("hammer")));
        assert!(is_shutdown(robot.drop_item().map(|_| ())));
        assert!(is_shutdown(robot.recharge().map(|_| ())));
        assert!(is_shutdown(robot.check_battery().map(|_| ())));
        assert!(is_shutdown(robot.undo_last_task().map(|_| ())));

        assert_eq!(robot.position(), position);
        assert_eq!(robot.power().level(), level);
        assert_eq!(robot.held_item(), Some("wrench"));
        assert_eq!(robot.list_history(), entries.as_slice());
        assert_eq!(robot.history().undo_stack().len(), undo_len);
        assert_eq!(robot.obstacle_source().calls, calls);
    }

    #[test]
    fn test_recharge_rejected_after_shutdown() {
        let mut power = PowerReserve::default();
        power.drain(40);
        let mut robot = robot().with_power(power);

        robot.shutdown().unwrap();
        let err = robot.recharge().unwrap_err();

        assert_eq!(err, RobotError::ShutdownInactive { action: "recharge" });
        assert_eq!(robot.power().level(), 60);
    }

    #[test]
    fn test_history_readable_after_shutdown() {
        let mut robot = robot();
        robot.pick_up("book").unwrap();
        robot.shutdown().unwrap();

        assert_eq!(
            robot.list_history(),
            ["Picked up book", "Robot has been shut down"]
        );
    }

    // ============== Undo ==============

    #[test]
    fn test_undo_on_empty_history() {
        let mut robot = robot();

        assert_eq!(robot.undo_last_task(), Err(RobotError::EmptyHistory));
        assert_eq!(robot.history().len(), 0);
        assert_eq!(robot.history().undo_stack().len(), 0);
    }

    #[test]
    fn test_undo_does_not_roll_back_state() {
        let mut robot = robot();
        robot.move_in(Direction::Forward).unwrap();

        let undone = robot.undo_last_task().unwrap();

        assert_eq!(undone, "Moved forward to (0,1)");
        // Display-only: the move still stands
        assert_eq!(robot.position(), Position::new(0, 1));
        assert_eq!(robot.power().level(), 95);
        assert_eq!(robot.list_history().len(), 1);
        assert!(robot.history().undo_stack().is_empty());

        assert_eq!(robot.undo_last_task(), Err(RobotError::EmptyHistory));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RobotError::ShutdownInactive { action: "move" }.to_string(),
            "Robot is shut down. Cannot move."
        );
        assert_eq!(RobotError::NothingHeld.to_string(), "No object to drop.");
        assert_eq!(RobotError::EmptyHistory.kind(), "empty_history");
    }
}
