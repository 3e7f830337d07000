//! Canned response bodies and machine-readable signals.
//!
//! Every response has two halves: a human-shaped narrative and, usually, a
//! signal the orchestrator parses. Completion-style signals are single
//! self-closing XML tags; review and autopilot responses carry a JSON
//! document instead. The malformed variant renders a truncated tag the
//! orchestrator's parser must reject.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::responder::intent::PromptIntent;

/// Element name shared by all XML-shaped signals.
pub const SIGNAL_TAG: &str = "ralph-signal";
/// Completion signal for an implementation pass.
pub const KIND_TASK_COMPLETE: &str = "task-complete";
/// Completion signal for a test-writing pass.
pub const KIND_TESTS_WRITTEN: &str = "tests-written";
/// Signal emitted when a run cannot make progress.
pub const KIND_TASK_BLOCKED: &str = "task-blocked";
/// Reason attribute attached to simulated blocks.
pub const BLOCKED_REASON: &str = "simulated";

/// JSON verdict a review pass returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewVerdict {
    pub signal: String,
    pub verdict: String,
    pub task: String,
    pub session: String,
    pub notes: Vec<String>,
}

impl ReviewVerdict {
    /// An approving verdict with canned notes.
    pub fn approved(task: &str, session: &str) -> Self {
        Self {
            signal: "review-verdict".to_string(),
            verdict: "approved".to_string(),
            task: task.to_string(),
            session: session.to_string(),
            notes: vec![
                "diff matches the acceptance criteria".to_string(),
                "verification gates pass".to_string(),
            ],
        }
    }
}

/// JSON report an autopilot pass returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutopilotReport {
    pub signal: String,
    pub session: String,
    pub task: String,
    pub health: String,
    pub observations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl AutopilotReport {
    /// A healthy report stamped with the current time.
    pub fn on_track(task: &str, session: &str) -> Self {
        Self {
            signal: "autopilot-report".to_string(),
            session: session.to_string(),
            task: task.to_string(),
            health: "on-track".to_string(),
            observations: vec![
                "task list is shrinking run over run".to_string(),
                "no gate has failed twice in a row".to_string(),
            ],
            generated_at: Utc::now(),
        }
    }
}

/// The machine-readable half of a response.
#[derive(Debug, Clone)]
pub enum SignalPayload {
    TaskComplete { task: String, session: String },
    TestsWritten { task: String, session: String },
    TaskBlocked { task: String, session: String },
    Review(ReviewVerdict),
    Autopilot(AutopilotReport),
    /// Truncated completion tag with an unterminated attribute.
    Malformed { task: String },
}

impl SignalPayload {
    /// Render the payload to the exact text the orchestrator will see.
    pub fn render(&self) -> Result<String> {
        match self {
            SignalPayload::TaskComplete { task, session } => {
                Ok(signal_tag(KIND_TASK_COMPLETE, task, session, None))
            }
            SignalPayload::TestsWritten { task, session } => {
                Ok(signal_tag(KIND_TESTS_WRITTEN, task, session, None))
            }
            SignalPayload::TaskBlocked { task, session } => Ok(signal_tag(
                KIND_TASK_BLOCKED,
                task,
                session,
                Some(BLOCKED_REASON),
            )),
            SignalPayload::Review(verdict) => Ok(serde_json::to_string(verdict)?),
            SignalPayload::Autopilot(report) => Ok(serde_json::to_string(report)?),
            SignalPayload::Malformed { task } => {
                Ok(format!("<{SIGNAL_TAG} kind=\"{KIND_TASK_COMPLETE}\" task=\"{task}"))
            }
        }
    }
}

fn signal_tag(kind: &str, task: &str, session: &str, reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!(
            "<{SIGNAL_TAG} kind=\"{kind}\" task=\"{task}\" session=\"{session}\" reason=\"{reason}\"/>"
        ),
        None => format!("<{SIGNAL_TAG} kind=\"{kind}\" task=\"{task}\" session=\"{session}\"/>"),
    }
}

/// Narrative block for a normal pass of the given intent.
pub fn narrative(intent: PromptIntent, task: &str) -> String {
    match intent {
        PromptIntent::Implement => format!(
            "Picked up {task} from the task list and implemented it end to end.\n\
             Made the smallest change that satisfies every acceptance criterion,\n\
             then ran the verification gates; all of them pass."
        ),
        PromptIntent::WriteTests => format!(
            "Wrote failing tests for {task} before touching the implementation.\n\
             Each test pins one acceptance criterion and fails for the expected reason."
        ),
        PromptIntent::Review => format!(
            "Reviewed the diff for {task} against its acceptance criteria.\n\
             Verdict follows as JSON."
        ),
        PromptIntent::Autopilot => format!(
            "Autopilot sweep finished; run summary for {task} follows as JSON."
        ),
        PromptIntent::Generic => {
            "Nothing in the prompt matched a known workflow, so no repository \
             changes were made."
                .to_string()
        }
    }
}

/// Narrative block for a blocked run.
pub fn blocked_narrative(task: &str) -> String {
    format!(
        "Could not make progress on {task}: a simulated blocker stops this run.\n\
         Leaving the working tree untouched."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_complete_tag_is_exact() {
        let payload = SignalPayload::TaskComplete {
            task: "task-2".to_string(),
            session: "sess-9".to_string(),
        };
        assert_eq!(
            payload.render().unwrap(),
            "<ralph-signal kind=\"task-complete\" task=\"task-2\" session=\"sess-9\"/>"
        );
    }

    #[test]
    fn tests_written_tag_is_exact() {
        let payload = SignalPayload::TestsWritten {
            task: "task-3".to_string(),
            session: "sess-1".to_string(),
        };
        assert_eq!(
            payload.render().unwrap(),
            "<ralph-signal kind=\"tests-written\" task=\"task-3\" session=\"sess-1\"/>"
        );
    }

    #[test]
    fn blocked_tag_carries_simulated_reason() {
        let payload = SignalPayload::TaskBlocked {
            task: "task-1".to_string(),
            session: "sess-1".to_string(),
        };
        let rendered = payload.render().unwrap();
        assert!(rendered.contains("kind=\"task-blocked\""));
        assert!(rendered.contains("reason=\"simulated\""));
        assert!(rendered.ends_with("/>"));
    }

    #[test]
    fn review_verdict_renders_as_json() {
        let payload = SignalPayload::Review(ReviewVerdict::approved("task-4", "sess-2"));
        let rendered = payload.render().unwrap();
        assert!(!rendered.contains('\n'), "verdict must stay single-line");
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["signal"], "review-verdict");
        assert_eq!(value["verdict"], "approved");
        assert_eq!(value["task"], "task-4");
        assert_eq!(value["session"], "sess-2");
        assert!(value["notes"].as_array().is_some_and(|n| !n.is_empty()));
    }

    #[test]
    fn autopilot_report_timestamp_is_rfc3339() {
        let payload = SignalPayload::Autopilot(AutopilotReport::on_track("task-1", "sess-3"));
        let rendered = payload.render().unwrap();
        assert!(!rendered.contains('\n'), "report must stay single-line");
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["signal"], "autopilot-report");
        assert_eq!(value["health"], "on-track");
        let stamp = value["generated_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn malformed_tag_never_closes() {
        let payload = SignalPayload::Malformed {
            task: "task-7".to_string(),
        };
        let rendered = payload.render().unwrap();
        assert!(rendered.starts_with("<ralph-signal"));
        assert!(rendered.contains("task=\"task-7"));
        assert!(!rendered.contains("/>"));
        // Unterminated attribute: an odd number of double quotes.
        assert_eq!(rendered.matches('"').count() % 2, 1);
    }

    #[test]
    fn narratives_mention_the_task() {
        for intent in [
            PromptIntent::Implement,
            PromptIntent::WriteTests,
            PromptIntent::Review,
            PromptIntent::Autopilot,
        ] {
            assert!(narrative(intent, "task-5").contains("task-5"));
        }
        assert!(blocked_narrative("task-5").contains("task-5"));
    }
}
