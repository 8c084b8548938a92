//! Binary detection utilities.
//!
//! PATH lookups use the `which` crate rather than spawning a shell. The
//! [`BinaryLocator`] trait lets callers substitute their own lookup.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Finds a binary executable in PATH.
///
/// Returns `Ok(Some(path))` if found, `Ok(None)` if not found,
/// or `Err` for system errors.
///
/// # Errors
///
/// Returns `Error::BinaryDetection` if a system error occurs during search.
///
/// # Examples
///
/// ```no_run
/// use toolchain_locate::detection::find_binary;
///
/// match find_binary("ruff") {
///     Ok(Some(path)) => println!("Found at: {}", path.display()),
///     Ok(None) => println!("Not installed"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn find_binary(name: &str) -> Result<Option<PathBuf>> {
    match which::which(name) {
        Ok(path) => Ok(Some(path)),
        Err(which::Error::CannotFindBinaryPath) => Ok(None),
        Err(e) => Err(Error::BinaryDetection(e.to_string())),
    }
}

/// Answers whether a tool's binary can be run.
pub trait BinaryLocator {
    /// Returns `true` if `name` is runnable.
    fn is_available(&self, name: &str) -> bool;
}

/// Looks binaries up on the process `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLocator;

impl BinaryLocator for PathLocator {
    fn is_available(&self, name: &str) -> bool {
        match find_binary(name) {
            Ok(found) => found.is_some(),
            Err(e) => {
                tracing::warn!(binary = name, error = %e, "treating binary as unavailable");
                false
            }
        }
    }
}

impl<F> BinaryLocator for F
where
    F: Fn(&str) -> bool,
{
    fn is_available(&self, name: &str) -> bool {
        self(name)
    }
}
