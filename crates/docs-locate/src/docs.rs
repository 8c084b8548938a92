//! Documentation fetching.

use std::num::NonZeroU32;

use crate::error::Result;
use crate::gateway::{Gateway, Payload};

/// Strips one leading `/` from a library identifier.
///
/// ```
/// use docs_locate::normalize_identifier;
///
/// assert_eq!(normalize_identifier("/vercel/next.js"), "vercel/next.js");
/// assert_eq!(normalize_identifier("vercel/next.js"), "vercel/next.js");
/// ```
#[must_use]
pub fn normalize_identifier(identifier: &str) -> &str {
    identifier.strip_prefix('/').unwrap_or(identifier)
}

/// A documentation request for one library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRequest {
    identifier: String,
    topic: Option<String>,
    tokens: Option<NonZeroU32>,
}

impl DocRequest {
    /// Creates a request for `identifier` (`org/project` or `org/project/version`).
    ///
    /// A leading slash is removed.
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            identifier: normalize_identifier(&identifier).to_string(),
            topic: None,
            tokens: None,
        }
    }

    /// Narrows the documentation to a topic. An empty topic is ignored.
    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        self.topic = (!topic.is_empty()).then_some(topic);
        self
    }

    /// Caps the amount of documentation returned. Zero means no cap.
    #[must_use]
    pub fn tokens(mut self, tokens: u32) -> Self {
        self.tokens = NonZeroU32::new(tokens);
        self
    }

    /// The normalized identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The requested topic, if any.
    #[must_use]
    pub fn topic_filter(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// The token budget, if any.
    #[must_use]
    pub fn token_budget(&self) -> Option<NonZeroU32> {
        self.tokens
    }

    /// Query parameters for this request; absent fields are omitted entirely.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(2);
        if let Some(topic) = &self.topic {
            query.push(("topic", topic.clone()));
        }
        if let Some(tokens) = self.tokens {
            query.push(("tokens", tokens.to_string()));
        }
        query
    }
}

/// Fetches documentation for `request`.
///
/// The payload is returned as received even when it has no `content` field.
pub(crate) fn fetch(gateway: &Gateway, request: &DocRequest) -> Result<Payload> {
    let query = request.query();
    let pairs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
    gateway.get(request.identifier(), &pairs)
}

/// Returns the documentation text of a docs payload, if present.
#[must_use]
pub fn doc_content(payload: &Payload) -> Option<&str> {
    payload.get("content").and_then(|content| content.as_str())
}
