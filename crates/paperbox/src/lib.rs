//! # paperbox
//!
//! Printable cut-and-fold nets for rectangular paper boxes.
//!
//! The layout engine lives in [`core`]: it normalizes the box size,
//! checks it against the page, sizes the mid faces and places every
//! face. [`render`] draws the result, by default as a one-page PDF.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paperbox::{plan_net, LayoutConfig, PageSize};
//!
//! let config = LayoutConfig::default().with_gap(0.075);
//! let layout = plan_net(10.0, 8.0, 4.0, &PageSize::A4, &config)?;
//! assert_eq!(layout.len(), 14);
//!
//! # #[cfg(feature = "render")]
//! paperbox::render::write_pdf(&layout, "paper_box.pdf", PageSize::A4)?;
//! # Ok::<(), paperbox::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `render` (default): canvas abstraction and PDF output
//! - `serde`: Serialization support

/// Layout engine.
pub use paperbox_core as core;

/// Canvas abstraction and PDF output.
#[cfg(feature = "render")]
pub use paperbox_render as render;

// Re-export commonly used types at root level
pub use paperbox_core::{
    plan_net, Error, Face, FaceRole, LayoutConfig, LayoutWarning, LineStyle, NetLayout,
    Orientation, PageFormat, PageSize, Result,
};

#[cfg(feature = "render")]
pub use paperbox_render::{render_layout, write_pdf, Canvas};
