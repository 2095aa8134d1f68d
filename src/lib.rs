//! xlsx-chart - chart parts for Excel XLSX packages
//!
//! This crate builds the in-memory model of a chart embedded in a spreadsheet
//! package and serializes it into a schema-conformant `c:chartSpace` document
//! describing a clustered bar chart: its series, axes, legend and print
//! settings.
//!
//! The owning package writer creates a [`Chart`], adds series as it discovers
//! chart definitions, assigns the chart id and assembles the part once onto
//! its output sink.
//!
//! # Example
//!
//! ```rust
//! use xlsx_chart::{Chart, SeriesOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut chart = Chart::new();
//! chart.set_id(1);
//! chart.add_series(&SeriesOptions::new("Sheet1!$A$1:$A$3"))?;
//!
//! let mut part = Vec::new();
//! chart.assemble(&mut part)?;
//! assert!(part.starts_with(b"<?xml"));
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Rejected series and assembly passes are reported through [`tracing`]; the
//! crate never installs a subscriber.

pub mod common;
pub mod ooxml;

pub use common::error::{Error, Result};
pub use ooxml::charts::{AxisIds, Chart, Legend, LegendPosition, PageMargins, Series, SeriesOptions};
