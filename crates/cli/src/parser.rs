//! Free-text command parsing
//!
//! Turns a line typed at the prompt into either a robot `Command` or a
//! driver-only request. Keywords are case-insensitive; item names are kept
//! as typed.

use hmr_domain::{Command, Direction, ParseDirectionError};
use thiserror::Error;

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Forwarded to the robot
    Robot(Command),
    /// Show the command menu
    Help,
    /// Show position, held item, battery and state
    Status,
    /// Show audit trail statistics
    Audit,
    /// Leave the driver without shutting the robot down
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Missing argument for '{command}'. Usage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("'{command}' takes no arguments (got '{argument}')")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error(transparent)]
    Direction(#[from] ParseDirectionError),

    #[error("Invalid command '{0}'. Type 'help' for the command list")]
    Unknown(String),
}

/// Parse one line of input
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let line = line.trim();
    // Accept the slash prefix used by other REPLs ("/help", "/quit")
    let line = line.strip_prefix('/').unwrap_or(line);

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    if keyword.is_empty() {
        return Err(ParseError::Empty);
    }

    let keyword = keyword.to_ascii_lowercase();
    let input = match keyword.as_str() {
        "move" => {
            let direction = required(rest, "move", "move <forward|backward>")?;
            Input::Robot(Command::Move(direction.parse::<Direction>()?))
        }
        "pick_up" | "pickup" => {
            let item = required(rest, "pick_up", "pick_up <item>")?;
            Input::Robot(Command::PickUp(item.to_string()))
        }
        "drop" => no_args(rest, "drop", Input::Robot(Command::Drop))?,
        "check_battery" | "battery" => {
            no_args(rest, "check_battery", Input::Robot(Command::CheckBattery))?
        }
        "recharge" => no_args(rest, "recharge", Input::Robot(Command::Recharge))?,
        "shutdown" => no_args(rest, "shutdown", Input::Robot(Command::Shutdown))?,
        "undo" => no_args(rest, "undo", Input::Robot(Command::Undo))?,
        "logs" | "history" => no_args(rest, "logs", Input::Robot(Command::Logs))?,
        "help" | "h" | "?" => no_args(rest, "help", Input::Help)?,
        "status" => no_args(rest, "status", Input::Status)?,
        "audit" => no_args(rest, "audit", Input::Audit)?,
        "exit" | "quit" | "q" => no_args(rest, "exit", Input::Exit)?,
        _ => return Err(ParseError::Unknown(keyword)),
    };

    Ok(input)
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument { command, usage });
    }
    Ok(rest)
}

fn no_args(rest: &str, command: &'static str, input: Input) -> Result<Input, ParseError> {
    if !rest.is_empty() {
        return Err(ParseError::UnexpectedArgument {
            command,
            argument: rest.to_string(),
        });
    }
    Ok(input)
}
