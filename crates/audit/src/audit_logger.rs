//! AuditLogger - Bounded command audit trail

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub command: String,
    pub outcome: AuditOutcome,
    /// Machine-readable rejection kind (e.g. `low_power`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Battery level after the command ran
    pub battery_level: u32,
}

impl AuditEntry {
    pub fn is_rejected(&self) -> bool {
        self.outcome == AuditOutcome::Rejected
    }
}

/// What happened to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Executed,
    Rejected,
}

/// Audit logger
#[derive(Debug)]
pub struct AuditLogger {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AuditLogger {
    /// Create a new AuditLogger keeping at most `max_entries` (minimum 1)
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries.min(1024)),
            max_entries,
        }
    }

    /// Log an audit entry, evicting the oldest when full
    pub fn log(&mut self, entry: AuditEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Log a command that ran
    pub fn log_executed(&mut self, command: &str, battery_level: u32) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            command: command.to_string(),
            outcome: AuditOutcome::Executed,
            reason: None,
            battery_level,
        });
    }

    /// Log a command the robot refused
    pub fn log_rejected(&mut self, command: &str, reason: &str, battery_level: u32) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            command: command.to_string(),
            outcome: AuditOutcome::Rejected,
            reason: Some(reason.to_string()),
            battery_level,
        });
    }

    /// Get recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Get recent rejections, newest first
    pub fn get_recent_rejections(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.is_rejected())
            .take(limit)
            .collect()
    }

    /// Get statistics
    pub fn get_stats(&self) -> AuditStats {
        let total = self.entries.len();
        let rejections = self.entries.iter().filter(|e| e.is_rejected()).count();

        AuditStats {
            total_entries: total,
            rejection_count: rejections,
        }
    }

    /// Export as JSON, oldest first
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Audit statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStats {
    pub total_entries: usize,
    pub rejection_count: usize,
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}
