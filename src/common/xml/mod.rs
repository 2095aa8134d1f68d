//! XML helpers shared by the part writers.

pub mod writer;

pub use writer::{Attributes, XmlWriter};
