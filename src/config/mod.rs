//! Project configuration schema (`ralph.yml`).
//!
//! Every fixture project carries a versioned configuration document telling
//! the orchestrator where its tasks live, which verification gates to run
//! between cycles, which long-lived services the project needs, and how git
//! integration behaves. The schema is deliberately forgiving about YAML
//! shapes (bare strings are accepted where an object adds nothing) and
//! deliberately strict about everything else: parsing is fail-fast and
//! validation rejects documents this harness version does not understand.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{HarnessError, Result};

pub mod loader;
pub mod tasks;

pub use loader::{load_config, load_tasks, validate_project, CONFIG_FILE};
pub use tasks::{Priority, TaskList, TaskRecord};

/// The one schema version this harness understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Default function for serde to return true
fn default_true() -> bool {
    true
}

fn default_branch_prefix() -> String {
    "ralph/".to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("ralph/reports")
}

/// Top-level project configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RalphConfig {
    /// Schema version; must equal [`SCHEMA_VERSION`].
    pub version: u32,

    /// Where the ordered task list lives.
    pub tasks: TaskSource,

    /// Verification gates, run in order between cycles.
    #[serde(default)]
    pub gates: Vec<Gate>,

    /// Long-lived services the project needs while the orchestrator runs.
    /// Schema-only for now: the harness asserts the shape, not the lifecycle.
    #[serde(default)]
    pub services: Vec<Service>,

    /// Git integration settings.
    #[serde(default)]
    pub git: GitSettings,

    /// Optional autopilot analysis block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autopilot: Option<AutopilotSettings>,
}

/// Task source reference.
///
/// Accepts both the bare-path form (`tasks: ralph/tasks.yml`) and the
/// structured form (`tasks: { file: ralph/tasks.yml }`).
#[derive(Debug, Clone, Serialize)]
pub struct TaskSource {
    pub file: PathBuf,
}

impl<'de> Deserialize<'de> for TaskSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum TaskSourceHelper {
            // Bare form: a path string
            Path(PathBuf),
            // Structured form: object with a file field
            WithFileField { file: PathBuf },
        }

        let helper = TaskSourceHelper::deserialize(deserializer)?;
        let file = match helper {
            TaskSourceHelper::Path(file) => file,
            TaskSourceHelper::WithFileField { file } => file,
        };

        Ok(TaskSource { file })
    }
}

/// One verification gate the orchestrator runs between cycles.
///
/// Accepts both the bare-command form (`- pytest -q`, name derived from the
/// first word) and the named form (`- { name: pytest, command: pytest -q }`).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Gate {
    pub name: String,
    pub command: String,
}

impl<'de> Deserialize<'de> for Gate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum GateHelper {
            // Bare form: just the command string
            Command(String),
            // Named form: object with name and command fields
            Named { name: String, command: String },
        }

        let (name, command) = match GateHelper::deserialize(deserializer)? {
            GateHelper::Command(command) => {
                let name = command
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string();
                (name, command)
            }
            GateHelper::Named { name, command } => (name, command),
        };

        Ok(Gate { name, command })
    }
}

/// A long-lived service definition for fullstack fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_timeout_secs: Option<u64>,
}

/// Git integration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitSettings {
    /// Commit after every completed cycle.
    #[serde(default = "default_true")]
    pub auto_commit: bool,

    /// Prefix for orchestrator-created branches.
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            auto_commit: true,
            branch_prefix: default_branch_prefix(),
        }
    }
}

/// Autopilot analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutopilotSettings {
    #[serde(default)]
    pub enabled: bool,

    /// Where run reports land, relative to the project root.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

impl RalphConfig {
    /// Structural checks beyond what serde enforces. Fail-fast: the first
    /// problem is returned and nothing is recovered.
    pub fn validate(&self) -> Result<()> {
        if self.version != SCHEMA_VERSION {
            return Err(HarnessError::SchemaVersion {
                found: self.version,
                supported: SCHEMA_VERSION,
            });
        }

        if self.tasks.file.as_os_str().is_empty() {
            return Err(HarnessError::Validation("task source path is empty".into()));
        }

        for gate in &self.gates {
            if gate.command.trim().is_empty() {
                return Err(HarnessError::Validation(format!(
                    "gate '{}' has an empty command",
                    gate.name
                )));
            }
            shell_words::split(&gate.command).map_err(|e| {
                HarnessError::Validation(format!(
                    "gate '{}' command does not shell-parse: {e}",
                    gate.name
                ))
            })?;
        }

        let mut service_names = HashSet::new();
        for service in &self.services {
            if service.name.trim().is_empty() {
                return Err(HarnessError::Validation(
                    "service with an empty name".into(),
                ));
            }
            if !service_names.insert(service.name.as_str()) {
                return Err(HarnessError::Validation(format!(
                    "duplicate service name '{}'",
                    service.name
                )));
            }
            shell_words::split(&service.command).map_err(|e| {
                HarnessError::Validation(format!(
                    "service '{}' command does not shell-parse: {e}",
                    service.name
                ))
            })?;
            if service.port == Some(0) {
                return Err(HarnessError::Validation(format!(
                    "service '{}' port must be non-zero",
                    service.name
                )));
            }
        }

        if let Some(autopilot) = &self.autopilot {
            if autopilot.report_dir.as_os_str().is_empty() {
                return Err(HarnessError::Validation(
                    "autopilot report dir is empty".into(),
                ));
            }
            if autopilot.report_dir.is_absolute() {
                return Err(HarnessError::Validation(
                    "autopilot report dir must be relative to the project root".into(),
                ));
            }
        }

        Ok(())
    }
}
