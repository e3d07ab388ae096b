//! Mid (glue) face sizing.

use crate::config::LayoutConfig;
use crate::error::Axis;
use crate::geometry::Dimensions;
use crate::layout::LayoutWarning;
use crate::page::PageSize;
use crate::{Error, Result};

/// Width chosen for the two mid faces.
#[derive(Debug, Clone, PartialEq)]
pub struct MidFaceSize {
    /// Mid face width in centimeters.
    pub width: f64,
    /// Whether the width was reduced to fit the page.
    pub clamped: bool,
    /// Warnings raised while sizing.
    pub warnings: Vec<LayoutWarning>,
}

/// Widest mid face that keeps both mid faces and the main column inside
/// the horizontal margins: `(page_width - w - 2 * margin_x) / 2`.
pub fn max_mid_face_width(width: f64, page: &PageSize, margin_x: f64) -> f64 {
    (page.usable_width() - width - 2.0 * margin_x) / 2.0
}

/// Computes the mid face width for an (already inflated) box.
///
/// With long mid faces enabled the faces are as long as the box, reduced
/// to the page bound when needed so the glue surface stays as large as
/// possible. Otherwise they are `h` wide, enough for a plain tab.
pub fn size_mid_faces(
    dimensions: &Dimensions,
    page: &PageSize,
    config: &LayoutConfig,
) -> Result<MidFaceSize> {
    let (l, w, h) = dimensions.as_tuple();

    if !config.long_mid_faces {
        let mut warnings = Vec::new();
        // Right edge of the net is margin_x + w + 2h.
        let overhang = w + 2.0 * h + 2.0 * config.margin_x - page.usable_width();
        if overhang > 0.0 {
            let warning = LayoutWarning::MidFacesInMargin { overhang };
            log::warn!("{}", warning);
            warnings.push(warning);
        }
        return Ok(MidFaceSize {
            width: h,
            clamped: false,
            warnings,
        });
    }

    let bound = max_mid_face_width(w, page, config.margin_x);
    if bound <= 0.0 {
        return Err(Error::DimensionsExceedPage {
            axis: Axis::Width,
            required: w + 2.0 * config.margin_x,
            available: page.usable_width(),
        });
    }

    if l <= bound {
        return Ok(MidFaceSize {
            width: l,
            clamped: false,
            warnings: Vec::new(),
        });
    }

    let mut warnings = Vec::with_capacity(2);
    let clamp = LayoutWarning::MidFaceClamped {
        requested: l,
        clamped: bound,
    };
    log::warn!(
        "Width of the mid faces is too big ({:.2} cm needed, {:.2} cm available): {}",
        w + 2.0 * l,
        page.usable_width() - 2.0 * config.margin_x,
        clamp
    );
    warnings.push(clamp);

    if bound < h {
        let overhang = LayoutWarning::SidesInMargin {
            overhang: h - bound,
        };
        log::warn!("{}", overhang);
        warnings.push(overhang);
    }

    Ok(MidFaceSize {
        width: bound,
        clamped: true,
        warnings,
    })
}
