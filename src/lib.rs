//! # ralph-harness
//!
//! Test harness for the Ralph orchestrator. Ralph drives an AI
//! coding-assistant CLI through task implementation, test-writing, review,
//! and autopilot analysis cycles; this crate supplies everything the
//! orchestrator's test suites need without a real agent behind them.
//!
//! ## Usage
//!
//! ```bash
//! mock-claude --print --dangerously-skip-permissions "implement task-3 session-token: s-1"
//! ```
//!
//! ## Modules
//!
//! - `responder` - the mock agent: prompt classification and canned signals
//! - `config` - typed schemas for project configuration and task-list documents
//! - `fixtures` - embedded fixture repositories (Python, Node, fullstack, autopilot)
//! - `error` - shared error type for fail-fast fixture loading

pub mod config;
pub mod error;
pub mod fixtures;
pub mod responder;

pub use error::{HarnessError, Result};
