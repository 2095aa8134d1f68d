//! Chart legend model.

use crate::ooxml::charts::types::LegendPosition;
use serde::{Deserialize, Serialize};

/// Chart legend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    /// Legend position
    pub position: LegendPosition,
}

impl Legend {
    /// Create a legend at the given position.
    #[inline]
    pub fn new(position: LegendPosition) -> Self {
        Self { position }
    }

    /// Set the legend position.
    #[inline]
    pub fn with_position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_legend_is_right() {
        assert_eq!(Legend::default().position, LegendPosition::Right);
        assert_eq!(
            Legend::default().with_position(LegendPosition::Top).position,
            LegendPosition::Top
        );
    }

    #[test]
    fn test_legend_from_yaml() {
        let legend: Legend = serde_saphyr::from_str("position: top_right\n").unwrap();
        assert_eq!(legend.position, LegendPosition::TopRight);

        let legend: Legend = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(legend, Legend::default());
    }
}
