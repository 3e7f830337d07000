//! Fail-fast loading for fixture documents.
//!
//! Malformed documents surface their parse error directly to the caller;
//! there is no retry, recovery, or partial parsing here.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::tasks::TaskList;
use super::RalphConfig;
use crate::error::{HarnessError, Result};

/// Configuration file name at a fixture project root.
pub const CONFIG_FILE: &str = "ralph.yml";

/// Load and validate a project configuration document.
pub fn load_config(path: &Path) -> Result<RalphConfig> {
    let raw = fs::read_to_string(path)?;
    let config: RalphConfig = serde_yaml::from_str(&raw)?;
    config.validate()?;
    debug!(
        path = %path.display(),
        gates = config.gates.len(),
        services = config.services.len(),
        "loaded project config"
    );
    Ok(config)
}

/// Load and validate a task-list document.
pub fn load_tasks(path: &Path) -> Result<TaskList> {
    let raw = fs::read_to_string(path)?;
    let tasks: TaskList = serde_yaml::from_str(&raw)?;
    tasks.validate()?;
    debug!(path = %path.display(), tasks = tasks.tasks.len(), "loaded task list");
    Ok(tasks)
}

/// Validate a materialized project end to end: the configuration parses and
/// the task source it names exists and parses.
pub fn validate_project(root: &Path) -> Result<(RalphConfig, TaskList)> {
    let config = load_config(&root.join(CONFIG_FILE))?;
    let tasks_path = root.join(&config.tasks.file);
    if !tasks_path.exists() {
        return Err(HarnessError::TaskSource(tasks_path));
    }
    let tasks = load_tasks(&tasks_path)?;
    Ok((config, tasks))
}
