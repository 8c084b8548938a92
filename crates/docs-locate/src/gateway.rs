//! Authenticated GET requests against the documentation API.
//!
//! The gateway sends exactly one request per call and maps the outcome to a
//! [`Payload`] or a classified [`Error`]. Classification is driven by the
//! status code before any generic body parsing, since a 429 and other error
//! statuses carry differently shaped bodies.

use std::fmt;

use serde_json::Value;
use ureq::Agent;
use url::Url;

use crate::credential::Credential;
use crate::error::{Error, Result, RetryAfter};

/// Parsed JSON object returned by a successful call.
pub type Payload = serde_json::Map<String, Value>;

/// Versioned base endpoint of the hosted API.
pub const DEFAULT_BASE_URL: &str = "https://context7.com/api/v1";

/// Header identifying the calling client.
pub const SOURCE_HEADER: &str = "X-Context7-Source";

/// Default value of [`SOURCE_HEADER`].
pub const DEFAULT_SOURCE: &str = "claude-skill";

/// Largest response body read; ureq's own default is 10 MB.
const BODY_LIMIT: u64 = 100 * 1024 * 1024;

/// Body field carrying the rate-limit retry hint.
const RETRY_AFTER_FIELD: &str = "retryAfterSeconds";

/// Body field carrying an error description.
const ERROR_FIELD: &str = "error";

/// Sends authenticated requests to a fixed base URL.
///
/// Holds no mutable state; clones share the underlying connection pool and
/// may be used from several threads at once.
#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    credential: Credential,
    source: String,
    agent: Agent,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Creates a gateway for the hosted API.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential,
            source: DEFAULT_SOURCE.to_string(),
            agent: default_agent(),
        }
    }

    /// Points the gateway at another base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{base_url}: not a base URL")));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Overrides the value sent in [`SOURCE_HEADER`].
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Replaces the HTTP agent, e.g. to bound request time.
    ///
    /// The agent should be built with `http_status_as_error(false)`;
    /// otherwise error bodies are discarded by the transport and a 429
    /// always reports an unknown retry hint.
    #[must_use]
    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agent = agent;
        self
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `{base}/{path}` with the given query parameters.
    ///
    /// `path` is split on `/` and each segment is percent-encoded, so `?` and
    /// `#` stay part of the path. No `?` is emitted when `query` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `path` contains a `.` or `..`
    /// segment, which would resolve outside the base.
    pub fn url_for(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let invalid = |reason: &str| Error::InvalidUrl(format!("{path}: {reason}"));
        if path.split('/').any(|segment| matches!(segment, "." | "..")) {
            return Err(invalid("dot segments are not allowed"));
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(&e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("base URL cannot have a path"))?
            .pop_if_empty()
            .extend(path.split('/'));

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issues one GET to `{base}/{path}` and classifies the outcome.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] variant matching the response status, or
    /// [`Error::Network`] when no response was received.
    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Payload> {
        let url = self.url_for(path, query)?;
        tracing::debug!(%url, "sending request");

        let request = self
            .agent
            .get(url.as_str())
            .header("Authorization", self.credential.bearer())
            .header(SOURCE_HEADER, self.source.as_str());

        let mut response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => return classify(status, &[]),
            Err(e) => {
                tracing::debug!(%url, error = %e, "transport failure");
                return Err(Error::Network(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(BODY_LIMIT)
            .read_to_vec()
            .map_err(|e| Error::Network(format!("read error: {e}")))?;
        tracing::debug!(%url, status, bytes = body.len(), "received response");

        classify(status, &body)
    }
}

fn default_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into()
}

/// Maps a status code and raw body to a payload or a classified error.
pub(crate) fn classify(status: u16, body: &[u8]) -> Result<Payload> {
    match status {
        200..=299 => {
            serde_json::from_slice(body).map_err(|e| Error::MalformedResponse(e.to_string()))
        }
        429 => {
            let retry_after = retry_after_hint(body);
            tracing::warn!(%retry_after, "rate limited");
            Err(Error::RateLimited { retry_after })
        }
        401 => Err(Error::AuthenticationFailed),
        404 => Err(Error::NotFound),
        _ => Err(Error::Api {
            status,
            message: error_message(body),
        }),
    }
}

fn retry_after_hint(body: &[u8]) -> RetryAfter {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return RetryAfter::Unknown;
    };
    value
        .get(RETRY_AFTER_FIELD)
        .and_then(|hint| {
            hint.as_u64()
                .or_else(|| hint.as_str().and_then(|s| s.trim().parse().ok()))
        })
        .map_or(RetryAfter::Unknown, RetryAfter::Seconds)
}

fn error_message(body: &[u8]) -> String {
    let raw = || String::from_utf8_lossy(body).into_owned();
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => match map.get(ERROR_FIELD) {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => raw(),
        },
        _ => raw(),
    }
}
