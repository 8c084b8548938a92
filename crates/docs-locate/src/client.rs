//! Client facade over the resolver and fetcher.

use ureq::Agent;

use crate::credential::Credential;
use crate::docs::{self, DocRequest};
use crate::error::Result;
use crate::gateway::{Gateway, Payload};
use crate::library;

/// Blocking client for the documentation API.
///
/// A client cannot exist without a [`Credential`], so a missing key is
/// reported before any request is attempted.
#[derive(Debug, Clone)]
pub struct DocsClient {
    gateway: Gateway,
}

impl DocsClient {
    /// Creates a client for the hosted API.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self {
            gateway: Gateway::new(credential),
        }
    }

    /// Creates a client from an explicit key, falling back to `CONTEXT7_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingCredential`] if no key is available.
    pub fn from_env(api_key: Option<&str>) -> Result<Self> {
        Credential::from_env(api_key).map(Self::new)
    }

    /// Points the client at another base URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(self, base_url: &str) -> Result<Self> {
        Ok(Self {
            gateway: self.gateway.with_base_url(base_url)?,
        })
    }

    /// Overrides the client-identification header value.
    #[must_use]
    pub fn with_source(self, source: impl Into<String>) -> Self {
        Self {
            gateway: self.gateway.with_source(source),
        }
    }

    /// Replaces the HTTP agent. See [`Gateway::with_agent`].
    #[must_use]
    pub fn with_agent(self, agent: Agent) -> Self {
        Self {
            gateway: self.gateway.with_agent(agent),
        }
    }

    /// Returns the underlying gateway.
    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Searches for libraries matching a human-readable name.
    ///
    /// Use [`crate::candidates`] to read the hits.
    ///
    /// # Errors
    ///
    /// Propagates every gateway failure unchanged.
    pub fn search_library(&self, name: &str) -> Result<Payload> {
        library::search(&self.gateway, name)
    }

    /// Fetches documentation for a library identifier.
    ///
    /// Use [`crate::doc_content`] to read the text.
    ///
    /// # Errors
    ///
    /// Propagates every gateway failure unchanged.
    pub fn get_docs(&self, request: &DocRequest) -> Result<Payload> {
        docs::fetch(&self.gateway, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RetryAfter};
    use crate::gateway::{DEFAULT_SOURCE, SOURCE_HEADER};
    use crate::{candidates, doc_content};
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> DocsClient {
        let cred = Credential::resolve(Some("test-key"), |_| None).unwrap();
        DocsClient::new(cred).with_base_url(&server.url()).unwrap()
    }

    #[test]
    fn search_resolves_candidates() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), "React".into()))
            .match_header("authorization", "Bearer test-key")
            .match_header(SOURCE_HEADER, DEFAULT_SOURCE)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"results":[{"title":"React","id":"/facebook/react","description":"UI library"}]}"#,
            )
            .create();

        let payload = client_for(&server).search_library("React").unwrap();
        let found = candidates(&payload);

        mock.assert();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_deref(), Some("/facebook/react"));
        assert_eq!(found[0].title.as_deref(), Some("React"));
    }

    #[test]
    fn search_encodes_spaces() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), "react native".into()))
            .with_status(200)
            .with_body(r#"{"results":[]}"#)
            .create();

        let payload = client_for(&server).search_library("react native").unwrap();

        mock.assert();
        assert!(candidates(&payload).is_empty());
    }

    #[test]
    fn empty_search_is_sent_to_the_service() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), String::new()))
            .with_status(200)
            .with_body("{}")
            .create();

        let payload = client_for(&server).search_library("").unwrap();

        mock.assert();
        assert!(candidates(&payload).is_empty());
    }

    #[test]
    fn docs_with_topic_only() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/vercel/next.js")
            .match_query(Matcher::Exact("topic=routing".into()))
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body(r#"{"content":"App Router docs"}"#)
            .create();

        let request = DocRequest::new("vercel/next.js").topic("routing");
        let payload = client_for(&server).get_docs(&request).unwrap();

        mock.assert();
        assert_eq!(doc_content(&payload), Some("App Router docs"));
    }

    #[test]
    fn docs_strip_leading_slash_and_omit_query() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/facebook/react/v18.2.0")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"content":"hooks"}"#)
            .create();

        let request = DocRequest::new("/facebook/react/v18.2.0");
        client_for(&server).get_docs(&request).unwrap();

        mock.assert();
    }

    #[test]
    fn docs_with_topic_and_tokens() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/vercel/next.js")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("topic".into(), "data fetching".into()),
                Matcher::UrlEncoded("tokens".into(), "3000".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"content":"fetch"}"#)
            .create();

        let request = DocRequest::new("vercel/next.js")
            .topic("data fetching")
            .tokens(3000);
        client_for(&server).get_docs(&request).unwrap();

        mock.assert();
    }

    #[test]
    fn docs_without_content_field_are_returned_as_is() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/org/lib")
            .with_status(200)
            .with_body(r#"{"snippets":["a","b"]}"#)
            .create();

        let payload = client_for(&server)
            .get_docs(&DocRequest::new("org/lib"))
            .unwrap();

        assert_eq!(doc_content(&payload), None);
        assert_eq!(payload["snippets"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn rate_limited_reports_retry_hint() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"retryAfterSeconds": 30}"#)
            .create();

        let err = client_for(&server).search_library("React").unwrap_err();

        assert!(matches!(
            err,
            Error::RateLimited {
                retry_after: RetryAfter::Seconds(30)
            }
        ));
        assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(30)));
    }

    #[test]
    fn rate_limited_with_unparsable_body() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body("Too Many Requests")
            .create();

        let err = client_for(&server).search_library("React").unwrap_err();
        assert!(matches!(
            err,
            Error::RateLimited {
                retry_after: RetryAfter::Unknown
            }
        ));
    }

    #[test]
    fn unauthorized_is_authentication_failure() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("denied")
            .create();

        let err = client_for(&server).search_library("React").unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed));
    }

    #[test]
    fn missing_library_is_not_found() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/nobody/nothing")
            .with_status(404)
            .with_body(r#"{"error":"no such library"}"#)
            .create();

        let err = client_for(&server)
            .get_docs(&DocRequest::new("nobody/nothing"))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[test]
    fn server_error_carries_message() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/org/lib")
            .with_status(503)
            .with_body(r#"{"error":"maintenance"}"#)
            .create();

        let err = client_for(&server)
            .get_docs(&DocRequest::new("org/lib"))
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn success_with_html_body_is_malformed() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/org/lib")
            .with_status(200)
            .with_body("<html></html>")
            .create();

        let err = client_for(&server)
            .get_docs(&DocRequest::new("org/lib"))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn large_docs_payload_is_read_in_full() {
        let text = "x".repeat(12 * 1024 * 1024);
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/org/huge")
            .with_status(200)
            .with_body(format!(r#"{{"content":"{text}"}}"#))
            .create();

        let payload = client_for(&server)
            .get_docs(&DocRequest::new("org/huge"))
            .unwrap();

        assert_eq!(doc_content(&payload).map(str::len), Some(text.len()));
    }

    #[test]
    fn identifier_with_dot_segments_is_never_sent() {
        let mut server = Server::new();
        let mock = server.mock("GET", Matcher::Any).expect(0).create();

        let err = client_for(&server)
            .get_docs(&DocRequest::new("../../admin"))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidUrl(_)));
        mock.assert();
    }

    #[test]
    fn connection_refused_is_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let cred = Credential::resolve(Some("test-key"), |_| None).unwrap();
        let client = DocsClient::new(cred)
            .with_base_url(&format!("http://127.0.0.1:{port}"))
            .unwrap();

        let err = client.search_library("React").unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert!(!matches!(err, Error::Api { .. }));
    }

    #[test]
    fn custom_source_header_is_sent() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .match_header(SOURCE_HEADER, "my-tool")
            .with_status(200)
            .with_body("{}")
            .create();

        client_for(&server)
            .with_source("my-tool")
            .search_library("x")
            .unwrap();

        mock.assert();
    }
}
