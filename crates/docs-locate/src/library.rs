//! Library name resolution.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::gateway::{Gateway, Payload};

/// Path of the search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "search";

/// One search hit.
///
/// Every field is optional; rendering a missing field is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LibraryCandidate {
    /// Human-readable library title.
    pub title: Option<String>,
    /// Canonical identifier, e.g. `/facebook/react`.
    pub id: Option<String>,
    /// Short description.
    pub description: Option<String>,
}

/// Searches for libraries matching `name`.
///
/// The name is sent as-is, including an empty string; the service decides
/// what matches.
pub(crate) fn search(gateway: &Gateway, name: &str) -> Result<Payload> {
    gateway.get(SEARCH_PATH, &[("q", name)])
}

/// Extracts the candidates from a search payload.
///
/// A missing or non-array `results` field yields no candidates. Entries that
/// are not objects, or whose fields are not strings, are skipped.
#[must_use]
pub fn candidates(payload: &Payload) -> Vec<LibraryCandidate> {
    let Some(Value::Array(results)) = payload.get("results") else {
        return Vec::new();
    };

    results
        .iter()
        .filter_map(|entry| LibraryCandidate::deserialize(entry).ok())
        .collect()
}
