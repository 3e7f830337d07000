//! Mock responder for the agent CLI the orchestrator shells out to.
//!
//! The real agent is nondeterministic and slow; harness tests need neither.
//! [`MockResponder`] is a stateless stand-in that reads a prompt and produces
//! a deterministic two-part response: a canned narrative plus a
//! machine-readable signal the orchestrator parses to decide its next step.
//!
//! A response is assembled in four steps, each owned by a submodule:
//!
//! 1. [`extract`] pulls the session token and task id out of the prompt
//!    (fallbacks `no-session` / `task-0` when absent);
//! 2. [`intent`] classifies the prompt into one of five categories;
//! 3. [`directive`] scans for simulation markers that force a failure path;
//! 4. [`templates`] renders the narrative and signal payload.
//!
//! ```
//! use ralph_harness::responder::{MockResponder, PromptIntent};
//!
//! let response = MockResponder::respond("Implement task-2. session-token: abc123");
//! assert_eq!(response.intent, PromptIntent::Implement);
//! assert_eq!(response.task, "task-2");
//! assert_eq!(response.session, "abc123");
//! let text = response.render_text().unwrap();
//! assert!(text.contains("<ralph-signal"));
//! ```

pub mod directive;
pub mod extract;
pub mod intent;
pub mod templates;

use serde_json::json;
use tracing::debug;

use crate::error::Result;

pub use directive::{detect, SimulationDirective};
pub use extract::{session_token, task_id, DEFAULT_SESSION, DEFAULT_TASK};
pub use intent::{classify, PromptIntent};
pub use templates::{
    blocked_narrative, narrative, AutopilotReport, ReviewVerdict, SignalPayload, BLOCKED_REASON,
    KIND_TASK_BLOCKED, KIND_TASK_COMPLETE, KIND_TESTS_WRITTEN, SIGNAL_TAG,
};

/// Stateless prompt-to-response translator.
pub struct MockResponder;

impl MockResponder {
    /// Build the full response for a prompt.
    ///
    /// Same prompt in, same response out; the autopilot report timestamp is
    /// the only field that varies between calls.
    pub fn respond(prompt: &str) -> MockResponse {
        let session = extract::session_token(prompt);
        let task = extract::task_id(prompt);
        let intent = intent::classify(prompt);
        let directive = directive::detect(prompt);
        debug!(
            "responding: intent={} session={} task={} directive={:?}",
            intent.name(),
            session,
            task,
            directive
        );

        let (narrative, payload) = match directive {
            Some(SimulationDirective::NoSignal) => (templates::narrative(intent, &task), None),
            Some(SimulationDirective::Blocked) => (
                templates::blocked_narrative(&task),
                Some(SignalPayload::TaskBlocked {
                    task: task.clone(),
                    session: session.clone(),
                }),
            ),
            Some(SimulationDirective::Malformed) => (
                templates::narrative(intent, &task),
                Some(SignalPayload::Malformed { task: task.clone() }),
            ),
            None => {
                let payload = match intent {
                    PromptIntent::Implement | PromptIntent::Generic => SignalPayload::TaskComplete {
                        task: task.clone(),
                        session: session.clone(),
                    },
                    PromptIntent::WriteTests => SignalPayload::TestsWritten {
                        task: task.clone(),
                        session: session.clone(),
                    },
                    PromptIntent::Review => {
                        SignalPayload::Review(ReviewVerdict::approved(&task, &session))
                    }
                    PromptIntent::Autopilot => {
                        SignalPayload::Autopilot(AutopilotReport::on_track(&task, &session))
                    }
                };
                (templates::narrative(intent, &task), Some(payload))
            }
        };

        MockResponse {
            session,
            task,
            intent,
            directive,
            narrative,
            payload,
        }
    }
}

/// Everything the mock decided about one prompt, plus the rendered pieces.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Session token echoed into the signal (fallback `no-session`).
    pub session: String,
    /// Canonical task id echoed into the signal (fallback `task-0`).
    pub task: String,
    /// Category the prompt classified into.
    pub intent: PromptIntent,
    /// Simulation override found in the prompt, if any.
    pub directive: Option<SimulationDirective>,
    /// Human-shaped half of the response.
    pub narrative: String,
    /// Machine-readable half; `None` under the no-signal directive.
    pub payload: Option<SignalPayload>,
}

impl MockResponse {
    /// Render the plain-text response body: narrative, blank line, signal.
    pub fn render_text(&self) -> Result<String> {
        match &self.payload {
            Some(payload) => Ok(format!("{}\n\n{}", self.narrative, payload.render()?)),
            None => Ok(self.narrative.clone()),
        }
    }

    /// Render the single-line JSON result envelope the vendor CLI prints in
    /// its JSON output modes.
    pub fn render_envelope(&self) -> Result<serde_json::Value> {
        Ok(json!({
            "type": "result",
            "subtype": "success",
            "is_error": false,
            "session_id": self.session,
            "result": self.render_text()?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implement_prompt_yields_complete_signal() {
        let response =
            MockResponder::respond("session-token: run-77\nImplement task-3 from the list.");
        assert_eq!(response.intent, PromptIntent::Implement);
        let text = response.render_text().unwrap();
        assert!(text.contains(
            "<ralph-signal kind=\"task-complete\" task=\"task-3\" session=\"run-77\"/>"
        ));
    }

    #[test]
    fn test_writing_prompt_yields_tests_written_signal() {
        let response = MockResponder::respond("write tests for task_4, session-token: run-1");
        let text = response.render_text().unwrap();
        assert!(text.contains("kind=\"tests-written\""));
        assert!(text.contains("task=\"task-4\""));
    }

    #[test]
    fn review_prompt_yields_json_verdict() {
        let response = MockResponder::respond("Review task-9 now. session-token: r2");
        assert!(matches!(&response.payload, Some(SignalPayload::Review(_))));
        let text = response.render_text().unwrap();
        let json_line = text.lines().last().unwrap();
        let value: serde_json::Value = serde_json::from_str(json_line).unwrap();
        assert_eq!(value["signal"], "review-verdict");
        assert_eq!(value["task"], "task-9");
        assert_eq!(value["session"], "r2");
    }

    #[test]
    fn autopilot_prompt_yields_json_report() {
        let response = MockResponder::respond("autopilot check-in for task-2");
        assert!(matches!(&response.payload, Some(SignalPayload::Autopilot(_))));
        let text = response.render_text().unwrap();
        let value: serde_json::Value =
            serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(value["signal"], "autopilot-report");
        assert_eq!(value["session"], "no-session");
    }

    #[test]
    fn generic_prompt_falls_back_everywhere() {
        let response = MockResponder::respond("");
        assert_eq!(response.intent, PromptIntent::Generic);
        assert_eq!(response.session, DEFAULT_SESSION);
        assert_eq!(response.task, DEFAULT_TASK);
        let text = response.render_text().unwrap();
        assert!(text.contains(
            "<ralph-signal kind=\"task-complete\" task=\"task-0\" session=\"no-session\"/>"
        ));
    }

    #[test]
    fn no_signal_directive_suppresses_payload() {
        let response = MockResponder::respond("implement task-1 RALPH_SIMULATE_NO_SIGNAL");
        assert!(response.payload.is_none());
        let text = response.render_text().unwrap();
        assert!(!text.contains(SIGNAL_TAG));
    }

    #[test]
    fn blocked_directive_overrides_any_intent() {
        let response = MockResponder::respond("implement task-5 RALPH_SIMULATE_BLOCKED");
        assert_eq!(response.directive, Some(SimulationDirective::Blocked));
        let text = response.render_text().unwrap();
        assert!(text.contains("kind=\"task-blocked\""));
        assert!(text.contains("reason=\"simulated\""));
        assert!(!text.contains("kind=\"task-complete\""));
    }

    #[test]
    fn malformed_directive_truncates_the_signal() {
        let response = MockResponder::respond("implement task-5 RALPH_SIMULATE_MALFORMED");
        let text = response.render_text().unwrap();
        assert!(text.contains("<ralph-signal"));
        assert!(!text.contains("/>"));
    }

    #[test]
    fn envelope_echoes_session_and_result() {
        let response = MockResponder::respond("Implement task-8. session_token=alpha-9");
        let envelope = response.render_envelope().unwrap();
        assert_eq!(envelope["type"], "result");
        assert_eq!(envelope["subtype"], "success");
        assert_eq!(envelope["is_error"], false);
        assert_eq!(envelope["session_id"], "alpha-9");
        assert_eq!(
            envelope["result"].as_str().unwrap(),
            response.render_text().unwrap()
        );
    }

    #[test]
    fn responses_are_deterministic() {
        let prompt = "review task-6, session-token: stable-1";
        let first = MockResponder::respond(prompt);
        let second = MockResponder::respond(prompt);
        assert_eq!(first.intent, second.intent);
        assert_eq!(first.directive, second.directive);
        assert_eq!(first.session, second.session);
        assert_eq!(first.task, second.task);
        assert_eq!(first.narrative, second.narrative);
    }
}
