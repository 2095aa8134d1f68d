//! Chart parts for spreadsheet packages.
//!
//! This module builds the in-memory model of a worksheet chart and writes it
//! as a `c:chartSpace` part. It covers:
//!
//! - The [`Chart`] model: an insertion-ordered series store plus the chart id
//! - Axis id allocation, derived from the chart id
//! - The assembly pass that emits the clustered bar chart document
//!
//! # Example
//!
//! ```rust
//! use xlsx_chart::ooxml::charts::{Chart, SeriesOptions};
//!
//! # fn main() -> xlsx_chart::Result<()> {
//! let mut chart = Chart::new();
//! chart.set_id(1);
//! chart.add_series(&SeriesOptions::new("Sheet1!$A$1:$A$3"))?;
//! chart.add_series(&SeriesOptions::new("Sheet1!$B$1:$B$3"))?;
//!
//! let xml = chart.to_xml()?;
//! assert!(xml.contains("<c:grouping val=\"clustered\"/>"));
//! # Ok(())
//! # }
//! ```

pub mod axis;
pub mod chart;
pub mod legend;
pub mod models;
pub mod series;
pub mod types;
pub(crate) mod writer;

pub use axis::{AxisIds, CHART_AXIS_BASE};
pub use chart::Chart;
pub use legend::Legend;
pub use models::PageMargins;
pub use series::{Series, SeriesOptions};
pub use types::{ChartType, LegendPosition};
