//! Go tools, enabled by `go.mod`.

use std::path::Path;

use crate::detection::BinaryLocator;
use crate::types::{DetectedTool, Ecosystem};

const MARKERS: &[&str] = &["go.mod"];

const TOOLS: &[(&str, &str)] = &[
    ("gofmt", "gofmt -l ."),
    ("go-vet", "go vet ./..."),
    ("go-test", "go test ./..."),
];

const GOLANGCI_LINT: (&str, &str) = ("golangci-lint", "golangci-lint run");

/// Reports the toolchain's built-in tools, plus golangci-lint when installed.
pub fn detect(project: &Path, locator: &dyn BinaryLocator) -> Vec<DetectedTool> {
    if !super::has_marker(project, MARKERS) {
        return Vec::new();
    }
    tracing::debug!(project = %project.display(), "found go.mod");

    let mut tools = super::fixed_tools(TOOLS, Ecosystem::Go);
    let (name, command) = GOLANGCI_LINT;
    if locator.is_available(name) {
        tools.push(DetectedTool::new(name, command, Ecosystem::Go));
    }
    tools
}
