//! The planning pipeline: normalize, check the page, size the mid faces
//! and place every face.

use crate::config::LayoutConfig;
use crate::fit::check_page_fit;
use crate::layout::NetLayout;
use crate::mid_face::size_mid_faces;
use crate::net::NetLayoutBuilder;
use crate::normalize::normalize_dimensions;
use crate::page::PageSize;
use crate::Result;

/// Plans the net for a box of the given size in centimeters.
///
/// The sides may be given in any order. All validation happens here, so a
/// returned layout can always be rendered. Non-fatal problems are logged
/// and recorded in [`NetLayout::warnings`].
///
/// # Errors
///
/// - [`crate::Error::ConfigError`] for an invalid configuration or page.
/// - [`crate::Error::InvalidDimension`] if a side is not positive.
/// - [`crate::Error::DimensionsExceedPage`] if the net is too wide, or too
///   long while overflow is not allowed.
pub fn plan_net(
    length: f64,
    width: f64,
    height: f64,
    page: &PageSize,
    config: &LayoutConfig,
) -> Result<NetLayout> {
    config.validate()?;
    page.validate()?;

    let requested = normalize_dimensions(length, width, height)?;
    log::debug!("Generating paper box with dimensions: {}", requested);

    let fit = check_page_fit(requested, page, config)?;
    let mid = size_mid_faces(&fit.dimensions, page, config)?;

    let mut layout = NetLayoutBuilder::new(config).build(requested, fit.dimensions, mid.width);
    layout.warnings.extend(fit.warnings);
    layout.warnings.extend(mid.warnings);

    Ok(layout)
}
