//! Integration tests for paperbox-core.

use paperbox_core::{
    max_mid_face_width, plan_net, Axis, Error, FaceRole, LayoutConfig, LayoutWarning, LineStyle,
    Orientation, PageFormat, PageSize, TabKind,
};

mod example_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plain_net_has_nine_solid_faces() {
        let layout = plan_net(10.0, 8.0, 4.0, &PageSize::A4, &LayoutConfig::default()).unwrap();

        assert_eq!(layout.len(), 9);
        assert!(layout.faces().iter().all(|f| f.style == LineStyle::Solid));
        assert_eq!(layout.dimensions.as_tuple(), (10.0, 8.0, 4.0));
        assert_eq!(layout.outer_dimensions, layout.dimensions);
    }

    #[test]
    fn test_gap_net_has_fourteen_faces() {
        let config = LayoutConfig::default().with_gap(0.075);
        let layout = plan_net(10.0, 8.0, 4.0, &PageSize::A4, &config).unwrap();

        assert_eq!(layout.len(), 14);
        let inner: Vec<_> = layout.inner_faces().collect();
        assert_eq!(inner.len(), 5);

        let heights = [4.0, 10.0, 4.0, 10.0, 4.0];
        for (face, height) in inner.iter().zip(heights) {
            assert_relative_eq!(face.rect.width, 8.0, epsilon = 1e-9);
            assert_relative_eq!(face.rect.height, height, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_long_narrow_box_overflows_page_length() {
        let config = LayoutConfig::default().with_allow_overflow(false);
        let err = plan_net(30.0, 5.0, 1.0, &PageSize::A4, &config).unwrap_err();

        match err {
            Error::DimensionsExceedPage { axis, required, .. } => {
                assert_eq!(axis, Axis::Length);
                assert_relative_eq!(required, 63.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overflow_allowed_keeps_face_count() {
        let lenient = LayoutConfig::default().with_allow_overflow(true);
        let layout = plan_net(30.0, 5.0, 1.0, &PageSize::A4, &lenient).unwrap();

        assert_eq!(layout.len(), 9);
        assert!(layout
            .warnings
            .iter()
            .any(|w| matches!(w, LayoutWarning::LengthOverflow { .. })));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = plan_net(10.0, 0.0, 4.0, &PageSize::A4, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));
    }
}

mod page_bounds_tests {
    use super::*;

    #[test]
    fn test_net_stays_inside_page_width() {
        let config = LayoutConfig::default().with_allow_overflow(false);
        for (l, w, h) in [(8.0, 6.0, 3.0), (12.0, 5.0, 1.5), (5.0, 5.0, 5.0)] {
            let layout = plan_net(l, w, h, &PageSize::A4, &config).unwrap();
            let bounds = layout.bounds().unwrap();
            assert!(bounds.x >= config.margin_x - 1e-9, "{bounds:?}");
            assert!(
                bounds.max_x() <= PageSize::A4.width - config.margin_x + 1e-9,
                "{bounds:?}"
            );
            assert!(bounds.y >= config.margin_y - 1e-9);
        }
    }

    #[test]
    fn test_a3_fits_box_too_wide_for_a4() {
        let config = LayoutConfig::default().with_allow_overflow(false);
        // w + 2h = 22 cm: too wide for A4, fine on A3.
        let err = plan_net(12.0, 12.0, 5.0, &PageSize::A4, &config).unwrap_err();
        assert_eq!(err.exceeded_axis(), Some(Axis::Width));

        let page = PageSize::from(PageFormat::A3);
        let layout = plan_net(12.0, 12.0, 5.0, &page, &config).unwrap();
        assert_eq!(layout.len(), 9);
    }

    #[test]
    fn test_landscape_swaps_budget() {
        let page = PageSize::from_format(PageFormat::A4, Orientation::Landscape);
        let config = LayoutConfig::default().with_allow_overflow(false);
        // 2l + 3h = 25 fits the portrait length but not the landscape one.
        assert!(plan_net(8.0, 6.0, 3.0, &PageSize::A4, &config).is_ok());
        let err = plan_net(8.0, 6.0, 3.0, &page, &config).unwrap_err();
        assert_eq!(err.exceeded_axis(), Some(Axis::Length));
    }

    #[test]
    fn test_clamped_mid_width_drives_offsets() {
        let config = LayoutConfig::default();
        let layout = plan_net(10.0, 8.0, 4.0, &PageSize::A4, &config).unwrap();
        let mid = layout.mid_face_width;
        assert_eq!(mid, max_mid_face_width(8.0, &PageSize::A4, config.margin_x));

        let column = layout
            .faces_with_role(FaceRole::MainColumn(0))
            .next()
            .unwrap();
        assert_eq!(column.rect.x, config.margin_x + mid);

        let right_mid = layout.faces_with_role(FaceRole::RightMid).next().unwrap();
        assert_eq!(right_mid.rect.width, mid);
    }

    #[test]
    fn test_short_mid_faces() {
        let config = LayoutConfig::default().with_long_mid_faces(false);
        let layout = plan_net(10.0, 8.0, 4.0, &PageSize::A4, &config).unwrap();
        assert_eq!(layout.mid_face_width, 4.0);
        assert!(!layout
            .warnings
            .iter()
            .any(|w| matches!(w, LayoutWarning::MidFaceClamped { .. })));
    }

    #[test]
    fn test_short_mid_faces_report_right_margin() {
        let config = LayoutConfig::default().with_long_mid_faces(false);
        let layout = plan_net(15.0, 15.0, 3.0, &PageSize::A4, &config).unwrap();

        let right_mid = layout.faces_with_role(FaceRole::RightMid).next().unwrap();
        assert!(right_mid.rect.max_x() > PageSize::A4.width - config.margin_x);
        assert!(layout
            .warnings
            .iter()
            .any(|w| matches!(w, LayoutWarning::MidFacesInMargin { .. })));
    }

    #[test]
    fn test_three_line_styles_present() {
        let layout = plan_net(8.0, 6.0, 3.0, &PageSize::A4, &LayoutConfig::default()).unwrap();
        let styles: Vec<LineStyle> = layout.strokes().map(|s| s.style).collect();
        assert!(styles.contains(&LineStyle::Solid));
        assert!(styles.contains(&LineStyle::DashedFine));
        assert!(styles.contains(&LineStyle::DashedCoarse));

        let closing = layout
            .faces_with_role(FaceRole::MainColumn(4))
            .next()
            .unwrap();
        assert_eq!(closing.tabs[0].kind, TabKind::ClosingFlap);
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_gap_round_trip(
            a in 1.0f64..6.0,
            b in 1.0f64..6.0,
            c in 1.0f64..4.0,
            gap in 0.01f64..0.3,
        ) {
            let config = LayoutConfig::default().with_gap(gap);
            let layout = plan_net(a, b, c, &PageSize::A4, &config).unwrap();
            let (l, w, h) = layout.dimensions.as_tuple();
            let heights = [h, l, h, l, h];

            for (face, expected) in layout.inner_faces().zip(heights) {
                prop_assert!((face.rect.width - w).abs() < 1e-9);
                prop_assert!((face.rect.height - expected).abs() < 1e-9);
            }

            let (ol, ow, oh) = layout.outer_dimensions.as_tuple();
            prop_assert!((ol - 2.0 * gap - l).abs() < 1e-9);
            prop_assert!((ow - 2.0 * gap - w).abs() < 1e-9);
            prop_assert!((oh - 2.0 * gap - h).abs() < 1e-9);
        }

        #[test]
        fn prop_mid_face_clamp(
            a in 1.0f64..12.0,
            b in 1.0f64..12.0,
            c in 0.5f64..3.0,
            margin in 0.0f64..2.0,
        ) {
            let config = LayoutConfig::default().with_margin(margin);
            let layout = plan_net(a, b, c, &PageSize::A4, &config).unwrap();
            let (l, w, _) = layout.dimensions.as_tuple();
            let bound = max_mid_face_width(w, &PageSize::A4, margin);
            let clamped = layout
                .warnings
                .iter()
                .any(|warning| matches!(warning, LayoutWarning::MidFaceClamped { .. }));

            if l > bound {
                prop_assert_eq!(layout.mid_face_width, bound);
                prop_assert!(clamped);
            } else {
                prop_assert_eq!(layout.mid_face_width, l);
                prop_assert!(!clamped);
            }
        }

        #[test]
        fn prop_overflow_policy(
            a in 1.0f64..40.0,
            b in 1.0f64..8.0,
            c in 0.5f64..3.0,
        ) {
            let strict = LayoutConfig::default().with_allow_overflow(false);
            let lenient = LayoutConfig::default().with_allow_overflow(true);
            let lenient_layout = plan_net(a, b, c, &PageSize::A4, &lenient).unwrap();

            match plan_net(a, b, c, &PageSize::A4, &strict) {
                Ok(layout) => {
                    prop_assert_eq!(layout.len(), lenient_layout.len());
                    let overflowed = lenient_layout
                        .warnings
                        .iter()
                        .any(|w| matches!(w, LayoutWarning::LengthOverflow { .. }));
                    prop_assert!(!overflowed);
                }
                Err(err) => {
                    prop_assert_eq!(err.exceeded_axis(), Some(Axis::Length));
                    prop_assert_eq!(lenient_layout.len(), 9);
                }
            }
        }
    }
}
