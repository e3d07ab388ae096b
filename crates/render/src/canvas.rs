//! The drawing surface a net is rendered onto.

use paperbox_core::{LineStyle, Rect, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dash cadence of a stroked line, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DashPattern {
    /// Length of each drawn segment.
    pub on: f64,
    /// Length of each gap.
    pub off: f64,
}

impl DashPattern {
    /// Cadence for glue tab outlines.
    pub const FINE: DashPattern = DashPattern { on: 1.0, off: 2.0 };

    /// Cadence for the closing flap outline.
    pub const COARSE: DashPattern = DashPattern { on: 4.0, off: 2.0 };

    /// Dash pattern for a line style, `None` meaning a solid line.
    pub fn for_style(style: LineStyle) -> Option<DashPattern> {
        match style {
            LineStyle::Solid => None,
            LineStyle::DashedFine => Some(Self::FINE),
            LineStyle::DashedCoarse => Some(Self::COARSE),
        }
    }
}

/// Write-only drawing surface.
///
/// Coordinates are centimeters with the origin at the bottom-left corner
/// of the page. The dash pattern is persistent state: it applies to every
/// rectangle drawn until it is changed again.
pub trait Canvas {
    /// What a finished canvas produces.
    type Output;

    /// Strokes the outline of a rectangle.
    fn draw_rectangle(&mut self, rect: &Rect);

    /// Sets the dash pattern, `None` for solid lines.
    fn set_dash_pattern(&mut self, pattern: Option<DashPattern>);

    /// Completes the document. Consumes the canvas so it happens once.
    fn finalize(self) -> Result<Self::Output>
    where
        Self: Sized;
}
