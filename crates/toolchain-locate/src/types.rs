//! Report types.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Language ecosystem a tool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// JavaScript / TypeScript (`package.json`)
    JavaScript,
    /// Python (`pyproject.toml`, `setup.py`, `requirements.txt`)
    Python,
    /// Go (`go.mod`)
    Go,
    /// Rust (`Cargo.toml`)
    Rust,
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ecosystem {
    /// Returns the display name of this ecosystem.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Rust => "Rust",
        }
    }

    /// All ecosystems, in detection order.
    pub const ALL: &'static [Self] = &[Self::JavaScript, Self::Python, Self::Go, Self::Rust];
}

/// A tool that applies to the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedTool {
    /// Tool name, e.g. `eslint` or `go-vet`.
    pub name: String,
    /// Command that runs the tool from the project root.
    pub command: String,
    /// Ecosystem that triggered the detection.
    pub ecosystem: Ecosystem,
}

impl DetectedTool {
    pub(crate) fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        ecosystem: Ecosystem,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            ecosystem,
        }
    }
}

/// Result of inspecting one project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainReport {
    /// Canonical project path.
    pub project_path: PathBuf,
    /// Detected tools, in detection order. Names are unique.
    pub tools: Vec<DetectedTool>,
}

impl ToolchainReport {
    pub(crate) fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            tools: Vec::new(),
        }
    }

    /// Adds a tool; one with the same name is replaced in place.
    pub(crate) fn insert(&mut self, tool: DetectedTool) {
        match self.tools.iter_mut().find(|t| t.name == tool.name) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    /// Looks a tool up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DetectedTool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Returns the command for a tool, if detected.
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&str> {
        self.get(name).map(|t| t.command.as_str())
    }

    /// Returns `true` if no tool was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tools belonging to one ecosystem.
    pub fn by_ecosystem(&self, ecosystem: Ecosystem) -> impl Iterator<Item = &DetectedTool> {
        self.tools.iter().filter(move |t| t.ecosystem == ecosystem)
    }
}
