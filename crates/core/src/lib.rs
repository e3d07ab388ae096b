//! # paperbox core
//!
//! Layout engine for printable paper box nets.
//!
//! Given the length, width and height of a rectangular box, the engine
//! computes the unfolded net: every face rectangle, its position on a
//! fixed-size page, and whether each outline is a cut line or a fold line.
//!
//! ## Pipeline
//!
//! 1. [`normalize_dimensions`] sorts the sides so `l >= w >= h > 0`.
//! 2. [`check_page_fit`] adds the glue allowance and checks the page.
//! 3. [`size_mid_faces`] picks the width of the two glue faces.
//! 4. [`NetLayoutBuilder`] places every face.
//!
//! [`plan_net`] runs all four steps.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod layout;
pub mod mid_face;
pub mod net;
pub mod normalize;
pub mod page;
pub mod planner;

// Re-exports
pub use config::LayoutConfig;
pub use error::{Axis, Error, Result};
pub use fit::{check_page_fit, PageFit};
pub use geometry::{Dimensions, Rect};
pub use layout::{Face, FaceRole, LayoutWarning, LineStyle, NetLayout, Stroke, Tab, TabKind};
pub use mid_face::{max_mid_face_width, size_mid_faces, MidFaceSize};
pub use net::NetLayoutBuilder;
pub use normalize::normalize_dimensions;
pub use page::{cm_to_pt, pt_to_cm, Orientation, PageFormat, PageSize, POINTS_PER_CM};
pub use planner::plan_net;
