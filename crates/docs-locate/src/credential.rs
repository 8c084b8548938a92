//! API key resolution.
//!
//! The key comes from an explicit value first and the environment second.
//! Environment access is injected as a lookup function so resolution is a
//! pure function of its inputs; [`Credential::from_env`] binds it to the
//! real process environment.

use std::fmt;

use crate::error::{Error, Result};

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "CONTEXT7_API_KEY";

/// An opaque bearer token.
///
/// Immutable once built. `Debug` output never includes the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Resolves a credential from an explicit key or the given environment lookup.
    ///
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] if neither source yields a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use docs_locate::Credential;
    ///
    /// let cred = Credential::resolve(None, |key| {
    ///     (key == "CONTEXT7_API_KEY").then(|| "from-env".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(cred.token(), "from-env");
    /// ```
    pub fn resolve<F>(explicit: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        explicit
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| env(API_KEY_ENV).filter(|key| !key.is_empty()))
            .map(Self)
            .ok_or(Error::MissingCredential { var: API_KEY_ENV })
    }

    /// Resolves a credential from an explicit key or the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] if neither source yields a key.
    pub fn from_env(explicit: Option<&str>) -> Result<Self> {
        Self::resolve(explicit, |key| std::env::var(key).ok())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
