//! # HMR CLI
//!
//! The driver around the robot core: argument parsing, the REPL, script
//! runs, rendering and logging setup.

pub mod commands;
pub mod interactive;
pub mod logging;
pub mod parser;
pub mod render;
pub mod session;
