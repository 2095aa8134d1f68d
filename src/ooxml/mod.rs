//! Office Open XML (OOXML) parts.
//!
//! Only the chart part (`xl/charts/chartN.xml`) lives here. Workbook and
//! worksheet assembly and ZIP packaging belong to the owning package writer,
//! which assigns each chart its id and supplies the output sink.
pub mod charts;

pub use charts::{Chart, SeriesOptions};
