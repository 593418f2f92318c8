//! CSS-style length values used for the persisted toggler offsets.
//!
//! Offsets are stored as strings such as `"20%"` or `"134px"`. The store
//! itself never interprets them; this type is used at the model edges to
//! parse stored values and to format new ones.

use std::fmt;
use std::str::FromStr;

/// A top/left offset, either absolute pixels or a percentage of an extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

/// Error returned when a stored string is not a recognised length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLengthError;

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a value like `134px` or `20%`")
    }
}

impl std::error::Error for ParseLengthError {}

impl Length {
    /// Resolve against an extent (viewport width for `left`, height for `top`).
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => extent * p / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl FromStr for Length {
    type Err = ParseLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(v) = s.strip_suffix("px") {
            return v.trim().parse().map(Length::Px).map_err(|_| ParseLengthError);
        }
        if let Some(p) = s.strip_suffix('%') {
            return p.trim().parse().map(Length::Percent).map_err(|_| ParseLengthError);
        }
        Err(ParseLengthError)
    }
}
