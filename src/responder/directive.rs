//! Simulation directives embedded in prompts.
//!
//! Harness tests steer the mock toward failure paths by planting a marker
//! string anywhere in the prompt. Markers are matched verbatim (exact case)
//! so that ordinary prose never trips one.

/// Failure modes a test can ask the mock to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationDirective {
    /// Emit a narrative with no signal payload at all.
    NoSignal,
    /// Emit a blocked signal instead of the normal completion signal.
    Blocked,
    /// Emit a deliberately truncated signal the parser must reject.
    Malformed,
}

impl SimulationDirective {
    /// The exact marker string a prompt must contain.
    pub fn marker(&self) -> &'static str {
        match self {
            SimulationDirective::NoSignal => "RALPH_SIMULATE_NO_SIGNAL",
            SimulationDirective::Blocked => "RALPH_SIMULATE_BLOCKED",
            SimulationDirective::Malformed => "RALPH_SIMULATE_MALFORMED",
        }
    }

    /// All directives in detection priority order.
    pub fn all() -> &'static [SimulationDirective] {
        &[
            SimulationDirective::NoSignal,
            SimulationDirective::Blocked,
            SimulationDirective::Malformed,
        ]
    }
}

/// Scan a prompt for a simulation marker.
///
/// When several markers appear, priority order decides: no-signal, then
/// blocked, then malformed.
pub fn detect(prompt: &str) -> Option<SimulationDirective> {
    SimulationDirective::all()
        .iter()
        .copied()
        .find(|directive| prompt.contains(directive.marker()))
}
