//! Project-level detection across all ecosystems.

use std::path::Path;

use crate::detection::{BinaryLocator, PathLocator};
use crate::ecosystem;
use crate::error::{Error, Result};
use crate::types::{Ecosystem, ToolchainReport};

/// Detects the tools that apply to a project directory.
///
/// Ecosystems are checked in [`Ecosystem::ALL`] order; a project can match
/// several at once.
#[derive(Debug, Clone, Default)]
pub struct ToolchainDetector<L = PathLocator> {
    locator: L,
}

impl ToolchainDetector {
    /// Creates a detector that looks binaries up on `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locator: PathLocator,
        }
    }
}

impl<L: BinaryLocator> ToolchainDetector<L> {
    /// Creates a detector with a custom binary lookup.
    pub fn with_locator(locator: L) -> Self {
        Self { locator }
    }

    /// Inspects `project` and reports the detected tools.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `project` cannot be canonicalized.
    pub fn detect(&self, project: impl AsRef<Path>) -> Result<ToolchainReport> {
        let project = project.as_ref();
        let root = project.canonicalize().map_err(|source| Error::InvalidPath {
            path: project.to_path_buf(),
            source,
        })?;

        let mut report = ToolchainReport::new(root);
        for &kind in Ecosystem::ALL {
            for tool in ecosystem::detect(kind, &report.project_path, &self.locator) {
                report.insert(tool);
            }
        }

        tracing::debug!(
            project = %report.project_path.display(),
            tools = report.tools.len(),
            "toolchain detection finished"
        );
        Ok(report)
    }
}

/// Detects tools in `project` using the process `PATH`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `project` cannot be canonicalized.
pub fn detect_tools(project: impl AsRef<Path>) -> Result<ToolchainReport> {
    ToolchainDetector::new().detect(project)
}
