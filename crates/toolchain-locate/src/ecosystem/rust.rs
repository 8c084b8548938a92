//! Rust tools, enabled by `Cargo.toml`.

use std::path::Path;

use crate::types::{DetectedTool, Ecosystem};

const MARKERS: &[&str] = &["Cargo.toml"];

const TOOLS: &[(&str, &str)] = &[
    ("rustfmt", "cargo fmt -- --check"),
    ("clippy", "cargo clippy -- -D warnings"),
    ("cargo-test", "cargo test"),
];

/// Reports rustfmt, clippy and cargo test for Cargo projects.
pub fn detect(project: &Path) -> Vec<DetectedTool> {
    if !super::has_marker(project, MARKERS) {
        return Vec::new();
    }
    tracing::debug!(project = %project.display(), "found Cargo.toml");
    super::fixed_tools(TOOLS, Ecosystem::Rust)
}
