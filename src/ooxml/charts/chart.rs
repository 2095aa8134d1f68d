//! Chart model.
//!
//! A [`Chart`] is created by the owning workbook, filled with series as chart
//! definitions are discovered, given a package-unique id and finally
//! assembled into its `xl/charts/chartN.xml` part.

use crate::common::error::{Error, Result};
use crate::ooxml::charts::axis::AxisIds;
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::PageMargins;
use crate::ooxml::charts::series::{Series, SeriesOptions};
use crate::ooxml::charts::writer;
use std::io::Write;

/// A clustered bar chart and its series.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    /// Package-unique chart id
    pub(crate) id: u32,
    /// Axis ids, allocated on first use
    pub(crate) axis_ids: Option<AxisIds>,
    /// Position handed to the next `c:ser` during assembly
    pub(crate) series_index: u32,
    /// Series in insertion order
    pub(crate) series: Vec<Series>,
    /// Legend settings
    pub(crate) legend: Legend,
    /// Print margins
    pub(crate) page_margins: PageMargins,
}

impl Chart {
    /// Create an empty chart.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chart with room for `capacity` series.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut chart = Self::new();
        chart.series.try_reserve_exact(capacity)?;
        Ok(chart)
    }

    /// Set the legend.
    #[inline]
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = legend;
        self
    }

    /// Set the print margins.
    #[inline]
    pub fn with_page_margins(mut self, page_margins: PageMargins) -> Self {
        self.page_margins = page_margins;
        self
    }

    /// The chart id.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Set the chart id. Must happen before axis ids are first allocated;
    /// allocated axis ids are never recomputed.
    #[inline]
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Legend settings.
    #[inline]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Print margins.
    #[inline]
    pub fn page_margins(&self) -> &PageMargins {
        &self.page_margins
    }

    /// Append a series.
    ///
    /// The range and sheet name are copied, so `options` may borrow short-lived
    /// buffers. A rejected descriptor leaves the chart untouched.
    pub fn add_series(&mut self, options: &SeriesOptions<'_>) -> Result<()> {
        let series = match Series::from_options(options) {
            Ok(series) => series,
            Err(err) => {
                tracing::warn!(chart_id = self.id, error = %err, "add_series(): series rejected");
                return Err(err);
            },
        };

        self.series.try_reserve(1)?;
        self.series.push(series);
        Ok(())
    }

    /// Series in insertion order.
    #[inline]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Number of series.
    #[inline]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Axis ids of this chart, allocating them on first call.
    pub fn axis_ids(&mut self) -> AxisIds {
        let id = self.id;
        *self.axis_ids.get_or_insert_with(|| {
            let ids = AxisIds::for_chart(id);
            tracing::trace!(
                chart_id = id,
                category = ids.category,
                value = ids.value,
                "allocated axis ids"
            );
            ids
        })
    }

    /// Axis ids if they have been allocated.
    #[inline]
    pub fn allocated_axis_ids(&self) -> Option<AxisIds> {
        self.axis_ids
    }

    /// Write the chart part XML to `sink` in a single forward pass.
    ///
    /// Series numbering restarts at zero on every call, so assembling the same
    /// chart twice produces identical documents.
    pub fn assemble<W: Write>(&mut self, sink: W) -> Result<W> {
        writer::assemble(self, sink)
    }

    /// Assemble into a string.
    pub fn to_xml(&mut self) -> Result<String> {
        let bytes = self.assemble(Vec::new())?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Xml(format!("Invalid UTF-8 in chart XML: {}", e)))
    }
}
