//! Session-token and task-id extraction.
//!
//! Orchestrator prompts embed two correlation markers: a per-invocation
//! session token and the id of the task being worked. The mock echoes both
//! back in its signals so a completion can be matched to the invocation that
//! produced it. Extraction is forgiving about spelling and falls back to a
//! fixed default when a marker is missing.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Fallback session token when the prompt carries none.
pub const DEFAULT_SESSION: &str = "no-session";

/// Fallback task id when the prompt carries none.
pub const DEFAULT_TASK: &str = "task-0";

static SESSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)session[-_ ]token\s*[:=]\s*([A-Za-z0-9][A-Za-z0-9_-]*)")
        .expect("Invalid regex pattern")
});

static TASK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btask[-_](\d+)\b").expect("Invalid regex pattern"));

/// Extract the session token from a prompt, first occurrence wins.
pub fn session_token(prompt: &str) -> String {
    match SESSION_REGEX.captures(prompt) {
        Some(caps) => caps[1].to_string(),
        None => {
            trace!("no session token in prompt, falling back to default");
            DEFAULT_SESSION.to_string()
        }
    }
}

/// Extract the task id from a prompt, canonicalized to `task-<digits>`.
pub fn task_id(prompt: &str) -> String {
    match TASK_REGEX.captures(prompt) {
        Some(caps) => format!("task-{}", &caps[1]),
        None => {
            trace!("no task id in prompt, falling back to default");
            DEFAULT_TASK.to_string()
        }
    }
}
