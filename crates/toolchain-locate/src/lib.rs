#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`detection`] - Binary detection utilities
//! - [`detector`] - Project-level detection
//! - [`ecosystem`] - Per-ecosystem detectors
//! - [`error`] - Error types
//! - [`types`] - Report types

pub mod detection;
pub mod detector;
pub mod ecosystem;
pub mod error;
pub mod types;

pub use detection::{BinaryLocator, PathLocator, find_binary};
pub use detector::{ToolchainDetector, detect_tools};
pub use error::{Error, Result};
pub use types::{DetectedTool, Ecosystem, ToolchainReport};
