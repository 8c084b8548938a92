//! Per-ecosystem tool detection.
//!
//! Each detector checks for its marker files in the project root and
//! returns nothing when they are absent.

use std::path::Path;

use crate::detection::BinaryLocator;
use crate::types::{DetectedTool, Ecosystem};

pub mod go;
pub mod javascript;
pub mod python;
pub mod rust;

/// Runs the detector for `ecosystem` against `project`.
pub fn detect(
    ecosystem: Ecosystem,
    project: &Path,
    locator: &dyn BinaryLocator,
) -> Vec<DetectedTool> {
    match ecosystem {
        Ecosystem::JavaScript => javascript::detect(project),
        Ecosystem::Python => python::detect(project, locator),
        Ecosystem::Go => go::detect(project, locator),
        Ecosystem::Rust => rust::detect(project),
    }
}

/// Returns `true` if any of `markers` exists in `project`.
fn has_marker(project: &Path, markers: &[&str]) -> bool {
    markers.iter().any(|marker| project.join(marker).exists())
}

/// Builds tools from a fixed `(name, command)` table.
fn fixed_tools(table: &[(&str, &str)], ecosystem: Ecosystem) -> Vec<DetectedTool> {
    table
        .iter()
        .map(|(name, command)| DetectedTool::new(*name, *command, ecosystem))
        .collect()
}
