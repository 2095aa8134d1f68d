//! Chart series model.
//!
//! A [`Series`] owns copies of the range and sheet name it was created from;
//! the caller's [`SeriesOptions`] buffers are never retained.

use crate::common::error::{Error, Result};

/// Caller-side description of a series to add to a chart.
///
/// `SeriesOptions::default()` carries no values range and is rejected by
/// [`Chart::add_series`](crate::ooxml::charts::Chart::add_series).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesOptions<'a> {
    /// Formula-style reference to the plotted values, e.g. `Sheet1!$A$1:$A$3`
    pub values: Option<&'a str>,
    /// Worksheet holding the values; derived from `values` when omitted
    pub sheetname: Option<&'a str>,
}

impl<'a> SeriesOptions<'a> {
    /// Describe a series plotting `values`.
    #[inline]
    pub fn new(values: &'a str) -> Self {
        Self {
            values: Some(values),
            sheetname: None,
        }
    }

    /// Set the worksheet name explicitly.
    #[inline]
    pub fn with_sheetname(mut self, sheetname: &'a str) -> Self {
        self.sheetname = Some(sheetname);
        self
    }
}

/// A series stored on a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    range: String,
    sheetname: String,
}

impl Series {
    /// Validate a descriptor and copy its strings into an owned series.
    ///
    /// A rejected descriptor allocates no series storage.
    pub fn from_options(options: &SeriesOptions<'_>) -> Result<Self> {
        let range = match options.values {
            Some(range) if !range.trim().is_empty() => range,
            Some(_) => {
                return Err(Error::InvalidSeries(
                    "series values range must not be empty".to_string(),
                ));
            },
            None => {
                return Err(Error::InvalidSeries(
                    "series must have a values range".to_string(),
                ));
            },
        };

        let sheetname = match options.sheetname {
            Some(name) => try_dup(name)?,
            None => sheetname_from_range(range)?.unwrap_or_default(),
        };

        Ok(Self {
            range: try_dup(range)?,
            sheetname,
        })
    }

    /// The values range, e.g. `Sheet1!$A$1:$A$3`.
    #[inline]
    pub fn range(&self) -> &str {
        &self.range
    }

    /// The worksheet the range refers to.
    #[inline]
    pub fn sheetname(&self) -> &str {
        &self.sheetname
    }
}

/// Copy a string, reporting allocation failure instead of aborting.
fn try_dup(s: &str) -> Result<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}

/// Extract the worksheet name from a `Sheet!Range` reference.
///
/// Quoted names (`'My Sheet'!$A$1`) are unquoted and doubled quotes collapsed.
/// Returns `Ok(None)` when the reference has no sheet prefix.
pub fn sheetname_from_range(range: &str) -> Result<Option<String>> {
    let Some((sheet, _)) = range.trim().rsplit_once('!') else {
        return Ok(None);
    };
    let sheet = sheet.trim_start_matches('=');

    let name = match sheet
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        Some(quoted) => try_unquote(quoted)?,
        None => try_dup(sheet)?,
    };

    Ok(if name.is_empty() { None } else { Some(name) })
}

/// Collapse `''` to `'`, reporting allocation failure instead of aborting.
fn try_unquote(quoted: &str) -> Result<String> {
    let mut name = String::new();
    name.try_reserve_exact(quoted.len())?;

    let mut parts = quoted.split("''");
    if let Some(first) = parts.next() {
        name.push_str(first);
    }
    for part in parts {
        name.push('\'');
        name.push_str(part);
    }
    Ok(name)
}
