//! Page sizes and unit conversion.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// PostScript points per centimeter (1 in = 72 pt = 2.54 cm).
pub const POINTS_PER_CM: f64 = 72.0 / 2.54;

/// Converts centimeters to points.
#[inline]
pub fn cm_to_pt(cm: f64) -> f64 {
    cm * POINTS_PER_CM
}

/// Converts points to centimeters.
#[inline]
pub fn pt_to_cm(pt: f64) -> f64 {
    pt / POINTS_PER_CM
}

/// Standard physical page formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageFormat {
    /// ISO A3, 297 x 420 mm.
    A3,
    /// ISO A4, 210 x 297 mm.
    #[default]
    A4,
    /// ISO A5, 148 x 210 mm.
    A5,
    /// US Letter, 8.5 x 11 in.
    Letter,
    /// US Legal, 8.5 x 14 in.
    Legal,
}

impl PageFormat {
    /// Portrait `(width, height)` in centimeters.
    pub fn dimensions_cm(&self) -> (f64, f64) {
        match self {
            PageFormat::A3 => (29.7, 42.0),
            PageFormat::A4 => (21.0, 29.7),
            PageFormat::A5 => (14.8, 21.0),
            PageFormat::Letter => (21.59, 27.94),
            PageFormat::Legal => (21.59, 35.56),
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Height is the longer side.
    #[default]
    Portrait,
    /// Width is the longer side.
    Landscape,
}

/// Physical page size in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageSize {
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl PageSize {
    /// ISO A4 in portrait orientation.
    pub const A4: PageSize = PageSize {
        width: 21.0,
        height: 29.7,
    };

    /// Creates a page size from centimeters.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a page size from PostScript points.
    pub fn from_points(width: f64, height: f64) -> Self {
        Self::new(pt_to_cm(width), pt_to_cm(height))
    }

    /// Creates a page size from a standard format and orientation.
    pub fn from_format(format: PageFormat, orientation: Orientation) -> Self {
        let (w, h) = format.dimensions_cm();
        match orientation {
            Orientation::Portrait => Self::new(w, h),
            Orientation::Landscape => Self::new(h, w),
        }
    }

    /// Usable horizontal extent of the page in centimeters.
    pub fn usable_width(&self) -> f64 {
        self.width
    }

    /// Usable vertical extent of the page in centimeters.
    pub fn usable_length(&self) -> f64 {
        self.height
    }

    /// Page size as `(width, height)` in points.
    pub fn to_points(&self) -> (f64, f64) {
        (cm_to_pt(self.width), cm_to_pt(self.height))
    }

    /// Validates the page size.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::ConfigError(format!(
                "Page size must be positive, got {} x {} cm",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

impl From<PageFormat> for PageSize {
    fn from(format: PageFormat) -> Self {
        Self::from_format(format, Orientation::Portrait)
    }
}
