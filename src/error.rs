use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (this harness supports version {supported})")]
    SchemaVersion { found: u32, supported: u32 },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("task source not found: {}", .0.display())]
    TaskSource(PathBuf),

    #[error("unknown fixture: {0}")]
    UnknownFixture(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
