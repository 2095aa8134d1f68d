//! Print settings stored with a chart part.

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Page margins of a chart printed on its own, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMargins {
    /// Bottom margin
    pub bottom: f64,
    /// Left margin
    pub left: f64,
    /// Right margin
    pub right: f64,
    /// Top margin
    pub top: f64,
    /// Header margin
    pub header: f64,
    /// Footer margin
    pub footer: f64,
}

impl PageMargins {
    /// Set the four page edges.
    #[inline]
    pub fn with_edges(mut self, bottom: f64, left: f64, right: f64, top: f64) -> Self {
        self.bottom = bottom;
        self.left = left;
        self.right = right;
        self.top = top;
        self
    }

    /// Set the header and footer margins.
    #[inline]
    pub fn with_header_footer(mut self, header: f64, footer: f64) -> Self {
        self.header = header;
        self.footer = footer;
        self
    }

    /// Check that every margin is finite.
    ///
    /// Excel refuses `NaN` and `INF` margins even though the schema type
    /// admits them, so assembly calls this before writing anything.
    pub fn validate(&self) -> Result<()> {
        let edges = [
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("header", self.header),
            ("footer", self.footer),
        ];
        match edges.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(Error::InvalidPageMargins(format!(
                "{} margin is {}",
                name, value
            ))),
            None => Ok(()),
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            bottom: 0.75,
            left: 0.7,
            right: 0.7,
            top: 0.75,
            header: 0.3,
            footer: 0.3,
        }
    }
}
