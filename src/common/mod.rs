//! Common types and utilities shared across the crate.
//!
//! This module provides the unified error type and small helpers used by both
//! the configuration layer and the packaging pipeline.

// Submodule declarations
pub mod error;
pub mod id;

// Re-exports for convenience
pub use error::{Error, Result};
pub use id::generate_workspace_name;
