//! Chart axis models and axis id allocation.
//!
//! Axis ids tie the `c:axId` references inside the chart-type block to the
//! `c:catAx`/`c:valAx` definitions and to each axis' `c:crossAx`. They are a
//! pure function of the chart id so a package can be regenerated byte for byte.

use crate::ooxml::charts::types::{
    AxisCrossBetween, AxisCrossMode, AxisOrientation, AxisPosition, AxisType, LabelAlignment,
    TickLabelPosition,
};

/// Base added to the chart id when deriving axis ids.
pub const CHART_AXIS_BASE: u32 = 50010000;

/// The axis id pair of a chart with one category and one value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisIds {
    /// Id of the category axis (first `c:axId` in the chart-type block)
    pub category: u32,
    /// Id of the value axis (second `c:axId`)
    pub value: u32,
}

impl AxisIds {
    /// Derive the axis ids for a chart.
    ///
    /// With a single axis pair both axes share one id, `CHART_AXIS_BASE + chart_id + 1`.
    /// A secondary axis pair would need a distinct id per axis.
    #[inline]
    pub const fn for_chart(chart_id: u32) -> Self {
        let base = CHART_AXIS_BASE.wrapping_add(chart_id);
        let axis_count = 1;
        let category = base.wrapping_add(axis_count);
        Self {
            category,
            value: category,
        }
    }
}

/// Number format of axis tick labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumberFormat {
    /// Format code, e.g. `General`
    pub(crate) format_code: String,
    /// Whether the format follows the source cells
    pub(crate) source_linked: bool,
}

impl NumberFormat {
    /// Create a number format.
    #[inline]
    pub(crate) fn new(format_code: impl Into<String>, source_linked: bool) -> Self {
        Self {
            format_code: format_code.into(),
            source_linked,
        }
    }
}

impl Default for NumberFormat {
    #[inline]
    fn default() -> Self {
        Self::new("General", true)
    }
}

/// Properties shared by category and value axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AxisCommon {
    /// This axis' id
    pub(crate) axis_id: u32,
    /// Scaling orientation
    pub(crate) orientation: AxisOrientation,
    /// Where the axis is drawn
    pub(crate) position: AxisPosition,
    /// Tick label position
    pub(crate) tick_label_position: TickLabelPosition,
    /// Id of the axis this one crosses
    pub(crate) cross_axis_id: u32,
    /// Crossing mode
    pub(crate) cross_mode: AxisCrossMode,
}

impl AxisCommon {
    /// Create common axis settings with schema defaults.
    #[inline]
    pub(crate) fn new(axis_id: u32, position: AxisPosition, cross_axis_id: u32) -> Self {
        Self {
            axis_id,
            orientation: AxisOrientation::default(),
            position,
            tick_label_position: TickLabelPosition::default(),
            cross_axis_id,
            cross_mode: AxisCrossMode::default(),
        }
    }
}

/// Category axis (`c:catAx`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryAxis {
    /// Common axis properties
    pub(crate) common: AxisCommon,
    /// Automatic category detection
    pub(crate) auto: bool,
    /// Label alignment
    pub(crate) label_align: LabelAlignment,
    /// Label distance from the axis, in percent
    pub(crate) label_offset: u32,
}

impl CategoryAxis {
    /// Create a category axis drawn on the left, as horizontal bar charts use.
    #[inline]
    pub(crate) fn new(axis_id: u32, cross_axis_id: u32) -> Self {
        Self {
            common: AxisCommon::new(axis_id, AxisPosition::Left, cross_axis_id),
            auto: true,
            label_align: LabelAlignment::default(),
            label_offset: 100,
        }
    }

    /// XML element kind.
    #[inline]
    pub(crate) const fn axis_type(&self) -> AxisType {
        AxisType::Category
    }
}

/// Value axis (`c:valAx`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValueAxis {
    /// Common axis properties
    pub(crate) common: AxisCommon,
    /// Draw major gridlines
    pub(crate) major_gridlines: bool,
    /// Tick label number format
    pub(crate) number_format: NumberFormat,
    /// How the axis crosses between categories
    pub(crate) cross_between: AxisCrossBetween,
}

impl ValueAxis {
    /// Create a value axis drawn at the bottom, as horizontal bar charts use.
    #[inline]
    pub(crate) fn new(axis_id: u32, cross_axis_id: u32) -> Self {
        Self {
            common: AxisCommon::new(axis_id, AxisPosition::Bottom, cross_axis_id),
            major_gridlines: true,
            number_format: NumberFormat::default(),
            cross_between: AxisCrossBetween::default(),
        }
    }

    /// XML element kind.
    #[inline]
    pub(crate) const fn axis_type(&self) -> AxisType {
        AxisType::Value
    }
}

/// Build the axis pair of a bar chart, each crossing the other.
pub(crate) fn bar_chart_axes(ids: AxisIds) -> (CategoryAxis, ValueAxis) {
    (
        CategoryAxis::new(ids.category, ids.value),
        ValueAxis::new(ids.value, ids.category),
    )
}
