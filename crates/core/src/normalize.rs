//! Canonical ordering of box dimensions.

use crate::geometry::Dimensions;
use crate::{Error, Result};

/// Sorts three box sides into `(length, width, height)` with
/// `length >= width >= height`.
///
/// Fails with [`Error::InvalidDimension`] if any side is not a finite
/// number greater than zero.
pub fn normalize_dimensions(a: f64, b: f64, c: f64) -> Result<Dimensions> {
    let mut sides = [a, b, c];

    if let Some(bad) = sides.iter().find(|s| !s.is_finite()) {
        return Err(Error::InvalidDimension(format!(
            "dimension must be a finite number, got {bad}"
        )));
    }

    sides.sort_by(|x, y| y.total_cmp(x));
    let [length, width, height] = sides;

    if height <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "dimensions can not be zero or negative, got {length} x {width} x {height}"
        )));
    }

    log::debug!(
        "Normalized dimensions: {} length, {} width, {} height",
        length,
        width,
        height
    );

    Ok(Dimensions::from_sorted(length, width, height))
}
