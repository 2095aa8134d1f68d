//! Unified error types.
//!
//! Every fallible operation in the crate reports through [`Error`], so the
//! owning package can map chart failures into its own error type with a
//! single `From` impl.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
