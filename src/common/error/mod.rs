//! Unified error types for lomenu.
//!
//! This module provides a single error type covering configuration, content
//! generation, filesystem and archive failures of the packaging pipeline.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
