//! Task-list schema (`ralph/tasks.yml`).
//!
//! The task list is the orchestrator's work queue: a project id plus an
//! ordered list of task records. Order in the file is the order the
//! orchestrator works through them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{HarnessError, Result};

/// Task priority buckets, highest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// One unit of work for the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub acceptance_criteria: Vec<String>,

    #[serde(default)]
    pub priority: Priority,

    /// Completion flag; flipped by the orchestrator, never by hand.
    #[serde(default)]
    pub done: bool,
}

/// The ordered task list for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskList {
    /// Project id the list belongs to.
    pub project: String,

    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl TaskList {
    /// Structural checks beyond what serde enforces.
    pub fn validate(&self) -> Result<()> {
        if self.project.trim().is_empty() {
            return Err(HarnessError::Validation("project id is empty".into()));
        }

        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.id.trim().is_empty() {
                return Err(HarnessError::Validation(format!(
                    "task '{}' has an empty id",
                    task.title
                )));
            }
            if !seen.insert(task.id.as_str()) {
                return Err(HarnessError::Validation(format!(
                    "duplicate task id '{}'",
                    task.id
                )));
            }
            if task.title.trim().is_empty() {
                return Err(HarnessError::Validation(format!(
                    "task '{}' has an empty title",
                    task.id
                )));
            }
        }

        Ok(())
    }

    /// Tasks still waiting on the orchestrator, in file order.
    pub fn pending(&self) -> impl Iterator<Item = &TaskRecord> {
        self.tasks.iter().filter(|task| !task.done)
    }

    /// The task the orchestrator would pick next: the first pending entry.
    pub fn next_task(&self) -> Option<&TaskRecord> {
        self.pending().next()
    }
}
