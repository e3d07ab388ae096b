//! Page fit validation.
//!
//! The net has a hard horizontal budget: a width overflow always fails.
//! A length overflow fails unless [`LayoutConfig::allow_overflow`] is set,
//! in which case it is recorded as a warning and the net is drawn anyway.

use crate::config::LayoutConfig;
use crate::error::Axis;
use crate::geometry::Dimensions;
use crate::layout::LayoutWarning;
use crate::page::PageSize;
use crate::{Error, Result};

/// Outcome of a successful fit check.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFit {
    /// Dimensions the rest of the pipeline lays out, including the glue
    /// allowance when a gap is configured.
    pub dimensions: Dimensions,
    /// Vertical extent of the main column, `2l + 3h`.
    pub max_length: f64,
    /// Horizontal extent of main column and side faces, `w + 2h`.
    pub max_width: f64,
    /// Non-fatal overflow, if any.
    pub warnings: Vec<LayoutWarning>,
}

/// Checks whether a normalized box fits the page.
pub fn check_page_fit(
    dimensions: Dimensions,
    page: &PageSize,
    config: &LayoutConfig,
) -> Result<PageFit> {
    let dimensions = if config.has_gap() {
        let inflated = dimensions.inflate(2.0 * config.gap);
        log::debug!("Glue allowance {} cm, outer size {}", config.gap, inflated);
        inflated
    } else {
        dimensions
    };

    let usable_length = page.usable_length();
    let usable_width = page.usable_width();
    let max_length = dimensions.max_length();
    let max_width = dimensions.max_width();
    let mut warnings = Vec::new();

    log::debug!(
        "Occupied space {:.2} x {:.2} cm, page {:.2} x {:.2} cm",
        max_width,
        max_length,
        usable_width,
        usable_length
    );

    if max_width > usable_width {
        return Err(Error::DimensionsExceedPage {
            axis: Axis::Width,
            required: max_width,
            available: usable_width,
        });
    }

    if max_length >= usable_length {
        if !config.allow_overflow {
            return Err(Error::DimensionsExceedPage {
                axis: Axis::Length,
                required: max_length,
                available: usable_length,
            });
        }

        let warning = LayoutWarning::LengthOverflow {
            required: max_length,
            available: usable_length,
        };
        log::warn!("{}. The net will not fit on one sheet.", warning);
        warnings.push(warning);
    }

    Ok(PageFit {
        dimensions,
        max_length,
        max_width,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_dimensions;
    use approx::assert_relative_eq;

    fn strict() -> LayoutConfig {
        LayoutConfig::default().with_allow_overflow(false)
    }

    #[test]
    fn test_fits_a4() {
        let dims = normalize_dimensions(8.0, 6.0, 3.0).unwrap();
        let fit = check_page_fit(dims, &PageSize::A4, &strict()).unwrap();
        assert_relative_eq!(fit.max_length, 25.0);
        assert_relative_eq!(fit.max_width, 12.0);
        assert!(fit.warnings.is_empty());
        assert_eq!(fit.dimensions, dims);
    }

    #[test]
    fn test_gap_inflates_every_side() {
        let dims = normalize_dimensions(10.0, 8.0, 4.0).unwrap();
        let config = LayoutConfig::default().with_gap(0.075);
        let fit = check_page_fit(dims, &PageSize::A4, &config).unwrap();
        assert_relative_eq!(fit.dimensions.length(), 10.15, epsilon = 1e-12);
        assert_relative_eq!(fit.dimensions.width(), 8.15, epsilon = 1e-12);
        assert_relative_eq!(fit.dimensions.height(), 4.15, epsilon = 1e-12);
        assert_relative_eq!(fit.max_length, 2.0 * 10.15 + 3.0 * 4.15, epsilon = 1e-12);
    }

    #[test]
    fn test_length_overflow_is_fatal_when_strict() {
        let dims = normalize_dimensions(30.0, 5.0, 1.0).unwrap();
        let err = check_page_fit(dims, &PageSize::A4, &strict()).unwrap_err();
        match err {
            Error::DimensionsExceedPage {
                axis,
                required,
                available,
            } => {
                assert_eq!(axis, Axis::Length);
                assert_relative_eq!(required, 63.0);
                assert_relative_eq!(available, 29.7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_length_overflow_allowed() {
        let dims = normalize_dimensions(30.0, 5.0, 1.0).unwrap();
        let config = LayoutConfig::default().with_allow_overflow(true);
        let fit = check_page_fit(dims, &PageSize::A4, &config).unwrap();
        assert_eq!(fit.warnings.len(), 1);
        assert!(matches!(
            fit.warnings[0],
            LayoutWarning::LengthOverflow { .. }
        ));
    }

    #[test]
    fn test_exact_page_length_is_an_overflow() {
        // 2 * 10 + 3 * 3.2333.. == 29.7
        let h = (29.7 - 20.0) / 3.0;
        let dims = normalize_dimensions(10.0, 5.0, h).unwrap();
        let page = PageSize::new(21.0, dims.max_length());
        assert!(check_page_fit(dims, &page, &strict()).is_err());
    }

    #[test]
    fn test_width_overflow_ignores_allow_overflow() {
        let dims = normalize_dimensions(12.0, 12.0, 5.0).unwrap();
        let config = LayoutConfig::default().with_allow_overflow(true);
        let err = check_page_fit(dims, &PageSize::A4, &config).unwrap_err();
        assert_eq!(err.exceeded_axis(), Some(Axis::Width));
    }

    #[test]
    fn test_exact_page_width_fits() {
        let dims = normalize_dimensions(11.0, 11.0, 5.0).unwrap();
        let fit = check_page_fit(dims, &PageSize::A4, &LayoutConfig::default()).unwrap();
        assert_relative_eq!(fit.max_width, 21.0);
        assert_eq!(fit.warnings.len(), 1);
    }
}
