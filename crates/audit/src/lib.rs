//! # HMR Audit
//!
//! Every command a driver sends, kept with its outcome.
//!
//! The robot's own history only records what succeeded. The audit trail
//! also records what was refused and why.

mod audit_logger;

pub use audit_logger::{AuditEntry, AuditLogger, AuditOutcome, AuditStats};
