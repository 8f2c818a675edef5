//! # HMR Domain Layer
//!
//! The heart of HMR - the robot state machine with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Robot entity & value objects                    ││
//! │  │  port/    - Trait definitions (ObstacleSource)              ││
//! │  │  service/ - Domain services (CommandLoop)                   ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Nothing here prints, logs or rolls dice. Every operation returns a
//! structured result; the environment is reached only through ports.

pub mod model;
pub mod port;
pub mod service;

// Re-export commonly used types
pub use model::{
    direction::{Direction, ParseDirectionError},
    history::HistoryLog,
    power::{PowerError, PowerReserve, PowerStatus},
    robot::{Position, Robot, RobotError, RobotState},
};

pub use port::obstacle_source::ObstacleSource;

pub use service::command_loop::{Command, CommandLoop, RobotEvent};
