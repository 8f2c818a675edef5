//! RobotSession - The wiring between driver and robot
//!
//! Owns the robot, the command loop and the audit trail. Every command
//! goes through `execute`, which records it in the audit trail and in the
//! tracing output before handing the result back untouched.

use hmr_domain::{Command, CommandLoop, ObstacleSource, PowerReserve, Robot, RobotError, RobotEvent};
use shared::RobotConfig;
use tracing::{debug, info};

use audit::AuditLogger;

/// Robot type used by the driver: obstacle source chosen at runtime
pub type DriverRobot = Robot<Box<dyn ObstacleSource>>;

pub struct RobotSession {
    robot: DriverRobot,
    commands: CommandLoop,
    audit: AuditLogger,
}

impl RobotSession {
    pub fn new(robot: DriverRobot, audit_capacity: usize) -> Self {
        Self {
            robot,
            commands: CommandLoop::new(),
            audit: AuditLogger::new(audit_capacity),
        }
    }

    /// Build a fresh robot from configuration
    pub fn from_config(config: &RobotConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let obstacles = hmr_adapter::from_config(&config.obstacles);
        let robot = Robot::new(obstacles).with_power(PowerReserve::new(config.battery_capacity)?);

        info!(
            capacity = config.battery_capacity,
            obstacles = %config.obstacles.mode,
            "robot session started"
        );
        Ok(Self::new(robot, config.audit_capacity))
    }

    /// Run one command and record the outcome
    pub fn execute(&mut self, command: Command) -> Result<RobotEvent, RobotError> {
        let label = command.to_string();
        let result = self.commands.execute(&mut self.robot, command);
        let level = self.robot.power().level();

        match &result {
            Ok(RobotEvent::ShutDown) => {
                info!(command = %label, "robot shut down");
                self.audit.log_executed(&label, level);
            }
            Ok(_) => {
                debug!(command = %label, battery = level, "command executed");
                self.audit.log_executed(&label, level);
            }
            Err(err) => {
                info!(command = %label, reason = err.kind(), "command rejected");
                self.audit.log_rejected(&label, err.kind(), level);
            }
        }

        result
    }

    /// Check if the driver should stop issuing commands
    pub fn is_done(&self) -> bool {
        self.commands.is_done(&self.robot)
    }

    pub fn robot(&self) -> &DriverRobot {
        &self.robot
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }
}
