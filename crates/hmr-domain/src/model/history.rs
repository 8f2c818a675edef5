//! History Log - What the robot has done
//!
//! Two views of the same stream of tasks:
//! - `entries`: append-only audit trail, never shortened
//! - `undo_stack`: LIFO copy that shrinks when tasks are undone
//!
//! Undo here is bookkeeping only. Popping a task does not reverse it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<String>,
    undo_stack: Vec<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a task in both the trail and the undo stack
    pub fn log(&mut self, task: impl Into<String>) {
        let task = task.into();
        self.undo_stack.push(task.clone());
        self.entries.push(task);
    }

    /// Pop the most recent undoable task
    ///
    /// Returns `None` when there is nothing left to undo.
    /// `entries` is never touched.
    pub fn undo_last(&mut self) -> Option<String> {
        self.undo_stack.pop()
    }

    /// Full trail in insertion order
    pub fn all_entries(&self) -> &[String] {
        &self.entries
    }

    /// Tasks still available to undo, oldest first
    pub fn undo_stack(&self) -> &[String] {
        &self.undo_stack
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
