//! JavaScript and TypeScript tools, read from `package.json`.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::types::{DetectedTool, Ecosystem};

const MANIFEST: &str = "package.json";

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    scripts: HashMap<String, String>,
    #[serde(default)]
    dependencies: HashMap<String, serde_json::Value>,
    #[serde(rename = "devDependencies", default)]
    dev_dependencies: HashMap<String, serde_json::Value>,
}

impl PackageJson {
    fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    /// The project's own script if defined, else the fallback command.
    fn script_or(&self, script: &str, fallback: &str) -> String {
        self.scripts
            .get(script)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Reports tools declared as dependencies or implied by scripts.
///
/// A `package.json` that cannot be read or parsed yields no tools.
pub fn detect(project: &Path) -> Vec<DetectedTool> {
    let path = project.join(MANIFEST);
    if !path.exists() {
        return Vec::new();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read package.json");
            return Vec::new();
        }
    };

    match serde_json::from_str::<PackageJson>(&content) {
        Ok(pkg) => {
            tracing::debug!(path = %path.display(), "found package.json");
            tools_from_package(&pkg)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot parse package.json");
            Vec::new()
        }
    }
}

fn tools_from_package(pkg: &PackageJson) -> Vec<DetectedTool> {
    let mut tools = Vec::new();
    let mut add = |name: &str, command: String| {
        tools.push(DetectedTool::new(name, command, Ecosystem::JavaScript));
    };

    if pkg.depends_on("eslint") || pkg.has_script("lint") {
        add("eslint", pkg.script_or("lint", "npx eslint ."));
    }

    if pkg.depends_on("prettier") || pkg.has_script("format") {
        add("prettier", pkg.script_or("format", "npx prettier --check ."));
    }

    if pkg.depends_on("jest") || pkg.has_script("test") {
        add("jest", pkg.script_or("test", "npm test"));
    }

    if pkg.depends_on("vitest") {
        add("vitest", pkg.script_or("test", "npx vitest run"));
    }

    if pkg.depends_on("typescript") || pkg.has_script("tsc") {
        add("typescript", pkg.script_or("type-check", "npx tsc --noEmit"));
    }

    tools
}
