//! Net layout construction.
//!
//! The net is a cross: a column of five faces (h, l, h, l, h from the
//! bottom) with side faces left and right of its lower half, glue faces
//! above the side faces, and fold-over flaps above those.
//!
//! ```text
//!              +---+
//!              | 4 |          closing flap
//!          +---+---+---+
//!          | F | 3 | F |      F: upper side flaps
//!   +------+---+---+---+------+
//!   |  LM  |   | 2 |   |  RM  |
//!   +------+---+---+---+------+
//!          |   | 1 |   |
//!          | L +---+ R |
//!          |   | 0 |   |
//!          +---+---+---+
//! ```
//!
//! Every face is described by a [`FaceSpec`] whose position and size are
//! linear combinations of the box measures. One placement loop turns the
//! table into rectangles, both for the outer net and for the inner
//! true-size outlines drawn when a glue allowance is configured.

use crate::config::LayoutConfig;
use crate::geometry::{Dimensions, Rect};
use crate::layout::{Face, FaceRole, LineStyle, NetLayout, Tab, TabKind};

/// Linear combination of the net measures `l`, `w`, `h` and the mid face
/// width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Coefficient of the box length.
    pub l: f64,
    /// Coefficient of the box width.
    pub w: f64,
    /// Coefficient of the box height.
    pub h: f64,
    /// Coefficient of the mid face width.
    pub mid: f64,
}

impl Extent {
    /// The zero extent.
    pub const ZERO: Extent = Extent {
        l: 0.0,
        w: 0.0,
        h: 0.0,
        mid: 0.0,
    };

    /// Evaluates the extent for concrete measures.
    pub fn eval(&self, m: &NetMetrics) -> f64 {
        self.l * m.l + self.w * m.w + self.h * m.h + self.mid * m.mid
    }
}

/// Which edges of a tab are pulled in by the cut gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inset {
    /// Left edge.
    pub left: bool,
    /// Right edge.
    pub right: bool,
    /// Top edge.
    pub top: bool,
    /// Bottom edge.
    pub bottom: bool,
}

impl Inset {
    /// Outline coincides with its region.
    pub const NONE: Inset = Inset {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    /// All four edges pulled in.
    pub const ALL: Inset = Inset {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    /// Bottom edge stays on the fold line.
    pub const OPEN_BOTTOM: Inset = Inset {
        left: true,
        right: true,
        top: true,
        bottom: false,
    };

    /// Returns true if no edge is inset.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    fn apply(&self, rect: &Rect, d: f64) -> Rect {
        let pick = |on: bool| if on { d } else { 0.0 };
        rect.inset_edges(
            pick(self.left),
            pick(self.right),
            pick(self.top),
            pick(self.bottom),
        )
    }
}

/// Descriptor of a tab relative to the origin of its face.
#[derive(Debug, Clone, Copy)]
pub struct TabSpec {
    /// What the tab represents.
    pub kind: TabKind,
    /// Horizontal offset from the face origin.
    pub x: Extent,
    /// Vertical offset from the face origin.
    pub y: Extent,
    /// Width of the tab region.
    pub width: Extent,
    /// Height of the tab region.
    pub height: Extent,
    /// Edges pulled in by the cut gap.
    pub inset: Inset,
    /// Stroke style.
    pub style: LineStyle,
}

/// Descriptor of a face relative to the net origin (the page margins).
#[derive(Debug, Clone, Copy)]
pub struct FaceSpec {
    /// Which face.
    pub role: FaceRole,
    /// Horizontal offset from the net origin.
    pub x: Extent,
    /// Vertical offset from the net origin.
    pub y: Extent,
    /// Face width.
    pub width: Extent,
    /// Face height.
    pub height: Extent,
    /// Stroke style of the outline.
    pub style: LineStyle,
    /// Attached tabs, drawn in order after the face.
    pub tabs: &'static [TabSpec],
}

const L: Extent = Extent {
    l: 1.0,
    ..Extent::ZERO
};
const W: Extent = Extent {
    w: 1.0,
    ..Extent::ZERO
};
const H: Extent = Extent {
    h: 1.0,
    ..Extent::ZERO
};
const MID: Extent = Extent {
    mid: 1.0,
    ..Extent::ZERO
};

const CLOSING_FLAP_TABS: &[TabSpec] = &[TabSpec {
    kind: TabKind::ClosingFlap,
    x: Extent::ZERO,
    y: Extent::ZERO,
    width: W,
    height: H,
    inset: Inset::OPEN_BOTTOM,
    style: LineStyle::DashedCoarse,
}];

const SIDE_TABS: &[TabSpec] = &[
    TabSpec {
        kind: TabKind::UpperFlap,
        x: Extent::ZERO,
        y: Extent {
            l: 1.0,
            h: 2.0,
            ..Extent::ZERO
        },
        width: H,
        height: L,
        inset: Inset::NONE,
        style: LineStyle::Solid,
    },
    TabSpec {
        kind: TabKind::GlueTab,
        x: Extent::ZERO,
        y: Extent::ZERO,
        width: H,
        height: H,
        inset: Inset::ALL,
        style: LineStyle::DashedFine,
    },
];

const MID_TABS: &[TabSpec] = &[TabSpec {
    kind: TabKind::GlueTab,
    x: Extent::ZERO,
    y: Extent::ZERO,
    width: MID,
    height: H,
    inset: Inset::ALL,
    style: LineStyle::DashedFine,
}];

/// The outer net, in render order.
pub const NET_FACES: [FaceSpec; 9] = [
    FaceSpec {
        role: FaceRole::MainColumn(0),
        x: MID,
        y: Extent::ZERO,
        width: W,
        height: H,
        style: LineStyle::Solid,
        tabs: &[],
    },
    FaceSpec {
        role: FaceRole::MainColumn(1),
        x: MID,
        y: H,
        width: W,
        height: L,
        style: LineStyle::Solid,
        tabs: &[],
    },
    FaceSpec {
        role: FaceRole::MainColumn(2),
        x: MID,
        y: Extent {
            l: 1.0,
            h: 1.0,
            ..Extent::ZERO
        },
        width: W,
        height: H,
        style: LineStyle::Solid,
        tabs: &[],
    },
    FaceSpec {
        role: FaceRole::MainColumn(3),
        x: MID,
        y: Extent {
            l: 1.0,
            h: 2.0,
            ..Extent::ZERO
        },
        width: W,
        height: L,
        style: LineStyle::Solid,
        tabs: &[],
    },
    FaceSpec {
        role: FaceRole::MainColumn(4),
        x: MID,
        y: Extent {
            l: 2.0,
            h: 2.0,
            ..Extent::ZERO
        },
        width: W,
        height: H,
        style: LineStyle::Solid,
        tabs: CLOSING_FLAP_TABS,
    },
    FaceSpec {
        role: FaceRole::LeftSide,
        x: Extent {
            mid: 1.0,
            h: -1.0,
            ..Extent::ZERO
        },
        y: Extent::ZERO,
        width: H,
        height: Extent {
            l: 1.0,
            h: 1.0,
            ..Extent::ZERO
        },
        style: LineStyle::Solid,
        tabs: SIDE_TABS,
    },
    FaceSpec {
        role: FaceRole::RightSide,
        x: Extent {
            mid: 1.0,
            w: 1.0,
            ..Extent::ZERO
        },
        y: Extent::ZERO,
        width: H,
        height: Extent {
            l: 1.0,
            h: 1.0,
            ..Extent::ZERO
        },
        style: LineStyle::Solid,
        tabs: SIDE_TABS,
    },
    FaceSpec {
        role: FaceRole::LeftMid,
        x: Extent::ZERO,
        y: Extent {
            l: 1.0,
            h: 1.0,
            ..Extent::ZERO
        },
        width: MID,
        height: H,
        style: LineStyle::Solid,
        tabs: MID_TABS,
    },
    FaceSpec {
        role: FaceRole::RightMid,
        x: Extent {
            mid: 1.0,
            w: 1.0,
            ..Extent::ZERO
        },
        y: Extent {
            l: 1.0,
            h: 1.0,
            ..Extent::ZERO
        },
        width: MID,
        height: H,
        style: LineStyle::Solid,
        tabs: MID_TABS,
    },
];

/// Concrete measures a table is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetMetrics {
    /// Box length.
    pub l: f64,
    /// Box width.
    pub w: f64,
    /// Box height.
    pub h: f64,
    /// Mid face width.
    pub mid: f64,
    /// Left edge of the net.
    pub origin_x: f64,
    /// Bottom edge of the net.
    pub origin_y: f64,
}

impl NetMetrics {
    fn rect(&self, x: &Extent, y: &Extent, width: &Extent, height: &Extent) -> Rect {
        Rect::new(
            x.eval(self),
            y.eval(self),
            width.eval(self),
            height.eval(self),
        )
    }
}

/// How a pass turns a descriptor into a face.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pass {
    /// Full outer net with tabs.
    Outer,
    /// True-size main column inset by the glue allowance.
    Inner { gap: f64 },
}

/// Places every face of the net.
///
/// Performs no validation: dimensions are expected to be normalized and
/// already checked against the page.
#[derive(Debug, Clone)]
pub struct NetLayoutBuilder<'a> {
    config: &'a LayoutConfig,
}

impl<'a> NetLayoutBuilder<'a> {
    /// Creates a builder for the given configuration.
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Builds the net.
    ///
    /// `outer` are the dimensions after the glue allowance was added,
    /// `requested` the size the box should end up with. Without a gap
    /// both are the same.
    pub fn build(
        &self,
        requested: Dimensions,
        outer: Dimensions,
        mid_face_width: f64,
    ) -> NetLayout {
        let (l, w, h) = outer.as_tuple();
        let metrics = NetMetrics {
            l,
            w,
            h,
            mid: mid_face_width,
            origin_x: self.config.margin_x,
            origin_y: self.config.margin_y,
        };

        let mut passes = vec![Pass::Outer];
        if self.config.has_gap() {
            passes.push(Pass::Inner {
                gap: self.config.gap,
            });
        }

        let mut faces = Vec::with_capacity(NET_FACES.len() + 5);
        for pass in passes {
            for spec in &NET_FACES {
                if let Some(face) = self.place(spec, &metrics, pass) {
                    faces.push(face);
                }
            }
        }

        log::debug!(
            "Placed {} faces, mid face width {:.2} cm",
            faces.len(),
            mid_face_width
        );

        NetLayout {
            dimensions: requested,
            outer_dimensions: outer,
            mid_face_width,
            faces,
            warnings: Vec::new(),
        }
    }

    fn place(&self, spec: &FaceSpec, metrics: &NetMetrics, pass: Pass) -> Option<Face> {
        let local = metrics.rect(&spec.x, &spec.y, &spec.width, &spec.height);
        let rect = local.translate(metrics.origin_x, metrics.origin_y);

        match pass {
            Pass::Outer => Some(Face {
                role: spec.role,
                rect,
                style: spec.style,
                tabs: self.place_tabs(spec, &rect, metrics),
            }),
            Pass::Inner { gap } => match spec.role {
                FaceRole::MainColumn(index) => Some(Face {
                    role: FaceRole::MainColumnInner(index),
                    rect: rect.inset(gap),
                    style: LineStyle::Solid,
                    tabs: Vec::new(),
                }),
                _ => None,
            },
        }
    }

    fn place_tabs(&self, spec: &FaceSpec, face: &Rect, metrics: &NetMetrics) -> Vec<Tab> {
        let cut_gap = self.config.cut_gap;
        let outlines = self.config.tab_outlines && cut_gap > 0.0;

        spec.tabs
            .iter()
            .filter(|tab| tab.inset.is_none() || outlines)
            .filter_map(|tab| {
                let region = metrics
                    .rect(&tab.x, &tab.y, &tab.width, &tab.height)
                    .translate(face.x, face.y);
                let rect = tab.inset.apply(&region, cut_gap);
                if !rect.is_drawable() {
                    log::debug!(
                        "Skipping {:?} of {:?}: cut gap {} cm leaves no room",
                        tab.kind,
                        spec.role,
                        cut_gap
                    );
                    return None;
                }
                Some(Tab {
                    kind: tab.kind,
                    rect,
                    style: tab.style,
                })
            })
            .collect()
    }
}
