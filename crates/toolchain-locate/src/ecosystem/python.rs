//! Python tools, enabled by `pyproject.toml`, `setup.py` or `requirements.txt`.
//!
//! Python projects rarely declare their dev tools in a form that is cheap to
//! read, so a tool is reported only when its binary is runnable.

use std::path::Path;

use crate::detection::BinaryLocator;
use crate::types::{DetectedTool, Ecosystem};

const MARKERS: &[&str] = &["pyproject.toml", "setup.py", "requirements.txt"];

const TOOLS: &[(&str, &str)] = &[
    ("black", "black --check ."),
    ("flake8", "flake8 ."),
    ("pylint", "pylint **/*.py"),
    ("mypy", "mypy ."),
    ("ruff", "ruff check ."),
    ("pytest", "pytest"),
    ("pyright", "pyright ."),
];

/// Reports every known Python tool that is installed.
pub fn detect(project: &Path, locator: &dyn BinaryLocator) -> Vec<DetectedTool> {
    if !super::has_marker(project, MARKERS) {
        return Vec::new();
    }
    tracing::debug!(project = %project.display(), "found Python project marker");

    TOOLS
        .iter()
        .filter(|(name, _)| locator.is_available(name))
        .map(|(name, command)| DetectedTool::new(*name, *command, Ecosystem::Python))
        .collect()
}
