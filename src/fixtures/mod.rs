//! Fixture project repositories.
//!
//! Orchestrator tests run against small, disposable project trees: a Python
//! project, a Node project, a two-service fullstack project, and an
//! autopilot-enabled project. The trees live under `fixtures/` in this
//! repository, get embedded at compile time by the build script, and are
//! materialized on demand into a caller-chosen directory or a fresh temp
//! directory.
//!
//! ```no_run
//! use ralph_harness::fixtures::{FixtureKind, FixtureProject};
//!
//! let project = FixtureProject::materialize_temp(FixtureKind::PythonMinimal)?;
//! let config = project.load_config()?;
//! assert_eq!(config.version, 1);
//! # Ok::<(), ralph_harness::HarnessError>(())
//! ```

pub mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::{self, RalphConfig, TaskList, CONFIG_FILE};
use crate::error::{HarnessError, Result};

pub use manifest::{fixture_manifest, FixtureFile, FIXTURE_DIRS};

/// The four fixture projects the harness ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    /// Single-file Python project with a pytest gate.
    PythonMinimal,
    /// Single-file Node project with an npm-test gate.
    NodeMinimal,
    /// Python backend plus Node frontend with two service definitions.
    Fullstack,
    /// Python project with the autopilot block enabled and a seeded report.
    Autopilot,
}

impl FixtureKind {
    /// Every fixture kind, in manifest order.
    pub fn all() -> &'static [FixtureKind] {
        &[
            FixtureKind::Autopilot,
            FixtureKind::Fullstack,
            FixtureKind::NodeMinimal,
            FixtureKind::PythonMinimal,
        ]
    }

    /// Directory name under `fixtures/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            FixtureKind::PythonMinimal => "python-minimal",
            FixtureKind::NodeMinimal => "node-minimal",
            FixtureKind::Fullstack => "fullstack",
            FixtureKind::Autopilot => "autopilot",
        }
    }

    /// Embedded files for this fixture.
    pub fn files(&self) -> Result<&'static [FixtureFile]> {
        fixture_manifest(self.dir_name())
            .ok_or_else(|| HarnessError::UnknownFixture(self.dir_name().to_string()))
    }
}

/// A fixture tree written to disk, ready for an orchestrator run.
#[derive(Debug)]
pub struct FixtureProject {
    kind: FixtureKind,
    root: PathBuf,
    // Keeps a temp root alive for the lifetime of the project.
    _temp: Option<TempDir>,
}

impl FixtureProject {
    /// Write the fixture tree under `target`, creating directories as
    /// needed. Existing files inside the tree are overwritten; nothing
    /// outside `target` is touched.
    pub fn materialize(kind: FixtureKind, target: &Path) -> Result<Self> {
        let files = kind.files()?;
        for file in files {
            let dest = target.join(file.path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, file.content)?;
        }
        debug!(
            "materialized fixture {} ({} files) at {}",
            kind.dir_name(),
            files.len(),
            target.display()
        );
        Ok(Self {
            kind,
            root: target.to_path_buf(),
            _temp: None,
        })
    }

    /// Write the fixture tree into a fresh temp directory that lives as long
    /// as the returned project.
    pub fn materialize_temp(kind: FixtureKind) -> Result<Self> {
        let temp = TempDir::new()?;
        let mut project = Self::materialize(kind, temp.path())?;
        project._temp = Some(temp);
        Ok(project)
    }

    pub fn kind(&self) -> FixtureKind {
        self.kind
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the project configuration document.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Path to the task list named by the project configuration.
    pub fn tasks_path(&self) -> Result<PathBuf> {
        let config = self.load_config()?;
        Ok(self.root.join(&config.tasks.file))
    }

    pub fn load_config(&self) -> Result<RalphConfig> {
        config::load_config(&self.config_path())
    }

    pub fn load_tasks(&self) -> Result<TaskList> {
        config::load_tasks(&self.tasks_path()?)
    }

    /// Every file under the project root, as sorted root-relative paths.
    pub fn written_files(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                let rel = entry
                    .path()
                    .strip_prefix(&self.root)
                    .unwrap_or(entry.path())
                    .to_path_buf();
                paths.push(rel);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_scan_and_kind_list_agree() {
        let mut from_kinds: Vec<&str> = FixtureKind::all().iter().map(|k| k.dir_name()).collect();
        from_kinds.sort_unstable();
        let mut from_scan: Vec<&str> = FIXTURE_DIRS.to_vec();
        from_scan.sort_unstable();
        assert_eq!(from_kinds, from_scan);
    }

    #[test]
    fn every_kind_carries_its_core_documents() {
        for kind in FixtureKind::all() {
            let files = kind.files().unwrap();
            let paths: Vec<&str> = files.iter().map(|f| f.path).collect();
            assert!(paths.contains(&"ralph.yml"), "{}: missing config", kind.dir_name());
            assert!(
                paths.contains(&"ralph/tasks.yml"),
                "{}: missing task list",
                kind.dir_name()
            );
        }
    }

    #[test]
    fn materialize_temp_writes_every_manifest_file() {
        let project = FixtureProject::materialize_temp(FixtureKind::PythonMinimal).unwrap();
        for file in FixtureKind::PythonMinimal.files().unwrap() {
            let path = project.root().join(file.path);
            assert!(path.is_file(), "missing {}", file.path);
            assert_eq!(fs::read_to_string(&path).unwrap(), file.content);
        }
    }

    #[test]
    fn materialize_into_nested_target_creates_directories() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("work").join("repo");
        let project = FixtureProject::materialize(FixtureKind::NodeMinimal, &target).unwrap();
        assert!(project.config_path().is_file());
        assert_eq!(project.root(), target.as_path());
    }

    #[test]
    fn written_files_round_trips_the_manifest() {
        let project = FixtureProject::materialize_temp(FixtureKind::Fullstack).unwrap();
        let written = project.written_files().unwrap();
        let manifest = FixtureKind::Fullstack.files().unwrap();
        assert_eq!(written.len(), manifest.len());
        assert!(written.contains(&PathBuf::from("ralph.yml")));
    }

    #[test]
    fn config_and_tasks_load_from_disk() {
        let project = FixtureProject::materialize_temp(FixtureKind::Autopilot).unwrap();
        let config = project.load_config().unwrap();
        assert!(config.autopilot.is_some());
        let tasks = project.load_tasks().unwrap();
        assert_eq!(tasks.project, "autopilot");
        assert!(project.tasks_path().unwrap().is_file());
    }
}
