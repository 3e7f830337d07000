//! Prompt intent classification.
//!
//! The orchestrator drives its agent through four prompt families; anything
//! else lands in the generic bucket. Classification is a keyword scan over
//! the lowercased prompt with a fixed precedence order, so a prompt that
//! mentions several families always classifies the same way.

use serde::{Deserialize, Serialize};

/// The five prompt categories the mock understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptIntent {
    /// Implementation pass over a task.
    Implement,
    /// Test-writing pass ahead of implementation.
    WriteTests,
    /// Review pass over a finished task.
    Review,
    /// Autopilot run analysis.
    Autopilot,
    /// Fallback for prompts matching no category.
    Generic,
}

impl PromptIntent {
    /// Stable lowercase name, matching the serde form.
    pub fn name(&self) -> &'static str {
        match self {
            PromptIntent::Implement => "implement",
            PromptIntent::WriteTests => "write-tests",
            PromptIntent::Review => "review",
            PromptIntent::Autopilot => "autopilot",
            PromptIntent::Generic => "generic",
        }
    }
}

/// Keyword tables in precedence order; the first category with a hit wins.
const CLASSIFICATION_RULES: &[(PromptIntent, &[&str])] = &[
    (PromptIntent::Autopilot, &["autopilot"]),
    (PromptIntent::Review, &["review"]),
    (
        PromptIntent::WriteTests,
        &["write tests", "add tests", "failing test"],
    ),
    (
        PromptIntent::Implement,
        &["implement", "acceptance criteria"],
    ),
];

/// Classify a prompt into exactly one category.
pub fn classify(prompt: &str) -> PromptIntent {
    let haystack = prompt.to_lowercase();
    for (intent, phrases) in CLASSIFICATION_RULES {
        if phrases.iter().any(|phrase| haystack.contains(phrase)) {
            return *intent;
        }
    }
    PromptIntent::Generic
}
