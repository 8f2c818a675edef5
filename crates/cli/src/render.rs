//! Presentation of robot results
//!
//! Human output follows the wording operators already know. JSON output
//! is one object per command, for scripting.

use console::style;
use hmr_domain::{Command, RobotError, RobotEvent};
use serde_json::{json, Value};

use crate::session::RobotSession;

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

pub const MENU: &str = "Commands: move [forward/backward], pick_up [item], drop, check_battery, \
recharge, shutdown, undo, logs, status, audit, help, exit";

/// Render a successful command
pub fn render_event(event: &RobotEvent) -> String {
    match event {
        RobotEvent::Moved {
            direction,
            position,
            ..
        } => format!(
            "{} New position: {}",
            style(format!("Robot moved {}.", direction)).green(),
            position
        ),
        RobotEvent::PickedUp { item } => style(format!("Picked up {}", item)).green().to_string(),
        RobotEvent::Dropped { item } => style(format!("Dropped {}", item)).green().to_string(),
        RobotEvent::BatteryChecked { status } => status.to_string(),
        RobotEvent::Recharged { .. } => style("Battery fully recharged.").green().to_string(),
        RobotEvent::ShutDown => style("Robot is now shut down.").bold().to_string(),
        RobotEvent::Undone { task } => format!("Undoing last task: {}", task),
        RobotEvent::History { entries } => render_history(entries),
    }
}

/// Render a refused command
pub fn render_error(err: &RobotError) -> String {
    style(err.to_string()).yellow().to_string()
}

fn render_history(entries: &[String]) -> String {
    let mut out = String::from("Task Logs:");
    if entries.is_empty() {
        out.push_str("\n  (no tasks logged)");
    }
    for entry in entries {
        out.push_str("\n- ");
        out.push_str(entry);
    }
    out
}

/// One-line summary of the robot
pub fn render_status(session: &RobotSession) -> String {
    let robot = session.robot();
    format!(
        "Position: {}  Holding: {}  {}  State: {}",
        robot.position(),
        robot.held_item().unwrap_or("nothing"),
        robot.power().status(),
        if robot.is_active() { "active" } else { "shut down" },
    )
}

/// Audit statistics plus the latest rejections
pub fn render_audit(session: &RobotSession, limit: usize) -> String {
    let stats = session.audit().get_stats();
    let mut out = format!(
        "Audit: {} commands, {} rejected",
        stats.total_entries, stats.rejection_count
    );
    for entry in session.audit().get_recent_rejections(limit) {
        out.push_str(&format!(
            "\n  {} {} ({})",
            style(&entry.timestamp).dim(),
            entry.command,
            entry.reason.as_deref().unwrap_or("unknown")
        ));
    }
    out
}

/// JSON form of a command result
pub fn result_json(command: &Command, result: &Result<RobotEvent, RobotError>) -> Value {
    match result {
        Ok(event) => json!({
            "command": command.to_string(),
            "ok": true,
            "event": event_json(event),
        }),
        Err(err) => json!({
            "command": command.to_string(),
            "ok": false,
            "error": err.kind(),
            "message": err.to_string(),
        }),
    }
}

fn event_json(event: &RobotEvent) -> Value {
    match event {
        RobotEvent::Moved {
            direction,
            position,
            battery,
        } => json!({
            "type": "moved",
            "direction": direction.as_str(),
            "position": { "x": position.x, "y": position.y },
            "battery": battery.percent(),
        }),
        RobotEvent::PickedUp { item } => json!({ "type": "picked_up", "item": item }),
        RobotEvent::Dropped { item } => json!({ "type": "dropped", "item": item }),
        RobotEvent::BatteryChecked { status } => {
            json!({ "type": "battery", "percent": status.percent(), "level": status.level })
        }
        RobotEvent::Recharged { status } => {
            json!({ "type": "recharged", "percent": status.percent(), "level": status.level })
        }
        RobotEvent::ShutDown => json!({ "type": "shutdown" }),
        RobotEvent::Undone { task } => json!({ "type": "undone", "task": task }),
        RobotEvent::History { entries } => json!({ "type": "history", "entries": entries }),
    }
}
