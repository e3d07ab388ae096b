//! Net layout representation.

use crate::geometry::{Dimensions, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stroke style of an outline.
///
/// Solid lines are cut through. Dashed lines are scored and folded, with
/// two cadences so flap outlines can be told apart from tab outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineStyle {
    /// Cut line.
    #[default]
    Solid,
    /// Glue tab outline.
    DashedFine,
    /// Closing flap outline.
    DashedCoarse,
}

impl LineStyle {
    /// Returns true for either dashed cadence.
    pub fn is_dashed(&self) -> bool {
        !matches!(self, LineStyle::Solid)
    }
}

/// Role of a face within the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaceRole {
    /// One of the five stacked faces of the main column, counted from the
    /// bottom (top, front, bottom, back, closing flap).
    MainColumn(usize),
    /// Side panel left of the main column.
    LeftSide,
    /// Side panel right of the main column.
    RightSide,
    /// Glue face left of the main column.
    LeftMid,
    /// Glue face right of the main column.
    RightMid,
    /// True-size outline of a main column face, drawn inside the glue
    /// allowance.
    MainColumnInner(usize),
}

impl FaceRole {
    /// Returns true for outer or inner main column faces.
    pub fn is_main_column(&self) -> bool {
        matches!(self, FaceRole::MainColumn(_) | FaceRole::MainColumnInner(_))
    }

    /// Returns true for faces produced by the glue allowance pass.
    pub fn is_inner(&self) -> bool {
        matches!(self, FaceRole::MainColumnInner(_))
    }
}

/// Kind of sub-outline attached to a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TabKind {
    /// Fold-over flap stacked above a side face.
    UpperFlap,
    /// Inset glue area of a side or mid face.
    GlueTab,
    /// Inset outline of the closing flap under the lid.
    ClosingFlap,
}

/// Outline attached to a face and drawn right after it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tab {
    /// What this outline represents.
    pub kind: TabKind,
    /// Position and size.
    pub rect: Rect,
    /// Stroke style.
    pub style: LineStyle,
}

/// A face rectangle of the net together with its tabs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Which face this is.
    pub role: FaceRole,
    /// Position and size.
    pub rect: Rect,
    /// Stroke style of the face outline.
    pub style: LineStyle,
    /// Sub-outlines belonging to this face.
    pub tabs: Vec<Tab>,
}

/// A single rectangle stroke, face or tab, in render order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Position and size.
    pub rect: Rect,
    /// Stroke style.
    pub style: LineStyle,
}

/// Non-fatal conditions found while planning a net.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutWarning {
    /// The main column is longer than the page. The net is still drawn.
    LengthOverflow {
        /// Vertical extent the net needs.
        required: f64,
        /// Vertical extent the page offers.
        available: f64,
    },
    /// The mid faces were narrowed to fit the page width.
    MidFaceClamped {
        /// Width the mid faces would have had.
        requested: f64,
        /// Width they were reduced to.
        clamped: f64,
    },
    /// The clamped mid faces are narrower than the side faces, which
    /// therefore extend into the left margin.
    SidesInMargin {
        /// How far the side faces reach past the mid faces.
        overhang: f64,
    },
    /// Short mid faces leave the right mid face in the right margin.
    MidFacesInMargin {
        /// How far the right mid face reaches past the margin line.
        overhang: f64,
    },
}

impl std::fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutWarning::LengthOverflow {
                required,
                available,
            } => write!(
                f,
                "net length {required:.2} cm exceeds the page length {available:.2} cm"
            ),
            LayoutWarning::MidFaceClamped { requested, clamped } => write!(
                f,
                "mid faces reduced from {requested:.2} cm to {clamped:.2} cm"
            ),
            LayoutWarning::SidesInMargin { overhang } => {
                write!(f, "side faces reach {overhang:.2} cm into the margin")
            }
            LayoutWarning::MidFacesInMargin { overhang } => {
                write!(f, "right mid face reaches {overhang:.2} cm into the margin")
            }
        }
    }
}

/// The complete planned net for one box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetLayout {
    /// Requested box size, normalized.
    pub dimensions: Dimensions,

    /// Box size after adding the glue allowance. Equal to `dimensions`
    /// when no gap is requested.
    pub outer_dimensions: Dimensions,

    /// Width of the two mid faces.
    pub mid_face_width: f64,

    /// Faces in render order.
    pub faces: Vec<Face>,

    /// Conditions the caller should know about.
    pub warnings: Vec<LayoutWarning>,
}

impl NetLayout {
    /// Number of faces (tabs not counted).
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the layout has no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the faces in render order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the faces with the given role.
    pub fn faces_with_role(&self, role: FaceRole) -> impl Iterator<Item = &Face> {
        self.faces.iter().filter(move |f| f.role == role)
    }

    /// Iterates over every rectangle to draw, each face followed by its tabs.
    pub fn strokes(&self) -> impl Iterator<Item = Stroke> + '_ {
        self.faces.iter().flat_map(|face| {
            std::iter::once(Stroke {
                rect: face.rect,
                style: face.style,
            })
            .chain(face.tabs.iter().map(|tab| Stroke {
                rect: tab.rect,
                style: tab.style,
            }))
        })
    }

    /// Bounding box of everything drawn.
    pub fn bounds(&self) -> Option<Rect> {
        self.strokes().map(|s| s.rect).reduce(|a, b| a.union(&b))
    }

    /// Returns the inner main column faces, bottom to top.
    pub fn inner_faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter().filter(|f| f.role.is_inner())
    }

    /// Returns true if any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
