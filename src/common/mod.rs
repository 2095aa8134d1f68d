//! Types and utilities shared by the part writers.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use xml::{Attributes, XmlWriter};
