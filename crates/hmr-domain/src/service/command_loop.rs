//! Command Loop - Turns driver commands into robot operations
//!
//! The CommandLoop is the single entry point a driver needs:
//! 1. Receive: a parsed `Command`
//! 2. Execute: call the matching robot operation
//! 3. Report: return a `RobotEvent` or the `RobotError` that stopped it
//!
//! This is pure domain logic - no I/O, no async, no external dependencies.

use crate::model::direction::Direction;
use crate::model::power::PowerStatus;
use crate::model::robot::{Position, Robot, RobotError};
use crate::port::obstacle_source::ObstacleSource;

/// Operations a driver can ask for, one per robot operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    PickUp(String),
    Drop,
    CheckBattery,
    Recharge,
    Shutdown,
    Undo,
    Logs,
}

impl Command {
    /// Command keyword as typed at the driver
    pub fn name(&self) -> &'static str {
        match self {
            Command::Move(_) => "move",
            Command::PickUp(_) => "pick_up",
            Command::Drop => "drop",
            Command::CheckBattery => "check_battery",
            Command::Recharge => "recharge",
            Command::Shutdown => "shutdown",
            Command::Undo => "undo",
            Command::Logs => "logs",
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Move(direction) => write!(f, "move {}", direction),
            Command::PickUp(item) => write!(f, "pick_up {}", item),
            other => f.write_str(other.name()),
        }
    }
}

/// Events emitted by the CommandLoop
///
/// Presentation layers render these; the loop itself only reports
/// what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotEvent {
    Moved {
        direction: Direction,
        position: Position,
        battery: PowerStatus,
    },
    PickedUp {
        item: String,
    },
    Dropped {
        item: String,
    },
    BatteryChecked {
        status: PowerStatus,
    },
    Recharged {
        status: PowerStatus,
    },
    ShutDown,
    Undone {
        task: String,
    },
    History {
        entries: Vec<String>,
    },
}

/// CommandLoop - The dispatch engine
///
/// Stateless. All state lives in the Robot.
pub struct CommandLoop;

impl CommandLoop {
    pub fn new() -> Self {
        Self
    }

    /// Execute one command against the robot
    pub fn execute<S: ObstacleSource>(
        &self,
        robot: &mut Robot<S>,
        command: Command,
    ) -> Result<RobotEvent, RobotError> {
        match command {
            Command::Move(direction) => {
                let position = robot.move_in(direction)?;
                Ok(RobotEvent::Moved {
                    direction,
                    position,
                    battery: robot.power().status(),
                })
            }
            Command::PickUp(item) => {
                robot.pick_up(item.clone())?;
                Ok(RobotEvent::PickedUp { item })
            }
            Command::Drop => {
                let item = robot.drop_item()?;
                Ok(RobotEvent::Dropped { item })
            }
            Command::CheckBattery => {
                let status = robot.check_battery()?;
                Ok(RobotEvent::BatteryChecked { status })
            }
            Command::Recharge => {
                let status = robot.recharge()?;
                Ok(RobotEvent::Recharged { status })
            }
            Command::Shutdown => {
                robot.shutdown()?;
                Ok(RobotEvent::ShutDown)
            }
            Command::Undo => {
                let task = robot.undo_last_task()?;
                Ok(RobotEvent::Undone { task })
            }
            Command::Logs => Ok(RobotEvent::History {
                entries: robot.list_history().to_vec(),
            }),
        }
    }

    /// Check if the driver should stop issuing commands
    pub fn is_done<S: ObstacleSource>(&self, robot: &Robot<S>) -> bool {
        !robot.is_active()
    }
}

impl Default for CommandLoop {
    fn default() -> Self {
        Self::new()
    }
}
