//! Closed attribute vocabularies for chart XML.
//!
//! Every fixed `val` string the chart writer emits comes from one of these
//! enumerations, so a misspelled literal cannot reach the output. Only
//! [`ChartType`] and [`LegendPosition`] are settable from outside the crate;
//! the axis and bar vocabularies carry just the values a clustered bar chart
//! writes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart type enumeration.
///
/// Only clustered bar charts are assembled today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartType {
    /// Bar chart
    #[default]
    Bar,
}

impl ChartType {
    /// Returns the XML element name for this chart type.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Bar => "c:barChart",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xml_element_name())
    }
}

/// Axis type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum AxisType {
    /// Category axis
    Category,
    /// Value axis
    Value,
}

impl AxisType {
    /// Returns the XML element name for this axis type.
    #[inline]
    pub(crate) const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Category => "c:catAx",
            Self::Value => "c:valAx",
        }
    }
}

/// Axis position. Horizontal bars put categories on the left edge and values
/// along the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisPosition {
    /// Bottom position
    Bottom,
    /// Left position
    Left,
}

impl AxisPosition {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
        }
    }
}

/// Axis scaling orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AxisOrientation {
    /// Min to max
    #[default]
    MinMax,
}

impl AxisOrientation {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::MinMax => "minMax",
        }
    }
}

/// Tick label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TickLabelPosition {
    /// Next to axis
    #[default]
    NextTo,
}

impl TickLabelPosition {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::NextTo => "nextTo",
        }
    }
}

/// Axis crossing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AxisCrossMode {
    /// Auto zero crossing
    #[default]
    AutoZero,
}

impl AxisCrossMode {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::AutoZero => "autoZero",
        }
    }
}

/// Where the value axis crosses the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AxisCrossBetween {
    /// Cross between categories
    #[default]
    Between,
}

impl AxisCrossBetween {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::Between => "between",
        }
    }
}

/// Category label alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LabelAlignment {
    /// Centered
    #[default]
    Center,
}

impl LabelAlignment {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::Center => "ctr",
        }
    }
}

/// Bar chart direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum BarDirection {
    /// Horizontal bars
    #[default]
    Bar,
}

impl BarDirection {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
        }
    }
}

/// Bar chart grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum BarGrouping {
    /// Clustered bars
    #[default]
    Clustered,
}

impl BarGrouping {
    #[inline]
    pub(crate) const fn xml_value(&self) -> &'static str {
        match self {
            Self::Clustered => "clustered",
        }
    }
}

/// Legend position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    /// Bottom
    Bottom,
    /// Left
    Left,
    /// Right
    #[default]
    Right,
    /// Top
    Top,
    /// Top right corner
    TopRight,
}

impl LegendPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::TopRight => "tr",
        }
    }
}
