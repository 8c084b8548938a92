#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`client`] - Client facade
//! - [`credential`] - API key resolution
//! - [`error`] - Error types
//! - [`gateway`] - Authenticated requests and response classification
//! - [`library`] - Library name resolution
//! - [`docs`] - Documentation fetching

pub mod client;
pub mod credential;
pub mod docs;
pub mod error;
pub mod gateway;
pub mod library;

pub use client::DocsClient;
pub use credential::{API_KEY_ENV, Credential};
pub use docs::{DocRequest, doc_content, normalize_identifier};
pub use error::{Error, Result, RetryAfter};
pub use gateway::{DEFAULT_BASE_URL, DEFAULT_SOURCE, Gateway, Payload, SOURCE_HEADER};
pub use library::{LibraryCandidate, candidates};
