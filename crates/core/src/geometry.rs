//! Geometry primitives: axis-aligned rectangles and box dimensions.
//!
//! All lengths are centimeters. The y axis grows upward, with the page
//! origin at the bottom-left corner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its lower-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the area of the rectangle.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if both sides are strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Moves the rectangle by the given offset.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrinks the rectangle by `d` on all four sides.
    pub fn inset(&self, d: f64) -> Self {
        self.inset_edges(d, d, d, d)
    }

    /// Shrinks the rectangle by an individual amount on each side.
    pub fn inset_edges(&self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self::new(
            self.x + left,
            self.y + bottom,
            self.width - left - right,
            self.height - top - bottom,
        )
    }

    /// Checks whether two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// Checks whether `other` lies completely inside this rectangle.
    pub fn contains(&self, other: &Self, epsilon: f64) -> bool {
        other.x >= self.x - epsilon
            && other.y >= self.y - epsilon
            && other.max_x() <= self.max_x() + epsilon
            && other.max_y() <= self.max_y() + epsilon
    }

    /// Returns the smallest rectangle covering both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Box dimensions ordered so that `length >= width >= height > 0`.
///
/// Only produced by [`crate::normalize::normalize_dimensions`] or derived
/// from an already normalized value, so the ordering always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    length: f64,
    width: f64,
    height: f64,
}

impl Dimensions {
    pub(crate) fn from_sorted(length: f64, width: f64, height: f64) -> Self {
        debug_assert!(length >= width && width >= height);
        Self {
            length,
            width,
            height,
        }
    }

    /// Longest side.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Middle side.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Shortest side.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `(length, width, height)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.length, self.width, self.height)
    }

    /// Grows every side by `amount`. Ordering is preserved.
    pub fn inflate(&self, amount: f64) -> Self {
        Self::from_sorted(
            self.length + amount,
            self.width + amount,
            self.height + amount,
        )
    }

    /// Vertical extent of the five stacked main-column faces: `2l + 3h`.
    pub fn max_length(&self) -> f64 {
        2.0 * self.length + 3.0 * self.height
    }

    /// Horizontal extent of the main column plus both side faces: `w + 2h`.
    pub fn max_width(&self) -> f64 {
        self.width + 2.0 * self.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} x {} cm", self.length, self.width, self.height)
    }
}
