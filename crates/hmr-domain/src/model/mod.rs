//! Domain Models - The vocabulary of HMR
//!
//! These types represent the "Ubiquitous Language" of the simulator.
//! Every name here should match how we talk about the robot.

pub mod direction;
pub mod history;
pub mod power;
pub mod robot;
