//! Compile-time manifest of the embedded fixture trees.
//!
//! The build script scans `fixtures/` and generates one constant per fixture
//! directory plus the `fixture_manifest` lookup; this module gives the
//! generated code its carrier type and pulls it into the crate.

/// One embedded file: its path relative to the fixture root, and its
/// contents captured at compile time.
#[derive(Debug, Clone, Copy)]
pub struct FixtureFile {
    pub path: &'static str,
    pub content: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/fixture_includes.rs"));
