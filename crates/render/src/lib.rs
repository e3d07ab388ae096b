//! # paperbox-render
//!
//! Draws a planned [`NetLayout`](paperbox_core::NetLayout) onto a
//! [`Canvas`]. Two canvases are provided: [`PdfCanvas`] writes a
//! single-page PDF, [`RecordingCanvas`] keeps the calls in memory.
//!
//! ```rust,no_run
//! use paperbox_core::{plan_net, LayoutConfig, PageSize};
//! use paperbox_render::write_pdf;
//!
//! let layout = plan_net(10.0, 8.0, 4.0, &PageSize::A4, &LayoutConfig::default())?;
//! write_pdf(&layout, "out/paper_box.pdf", PageSize::A4)?;
//! # Ok::<(), paperbox_core::Error>(())
//! ```

pub mod canvas;
pub mod pdf;
pub mod recording;
pub mod render;

pub use canvas::{Canvas, DashPattern};
pub use pdf::PdfCanvas;
pub use recording::{CanvasCommand, RecordingCanvas};
pub use render::{render_layout, write_pdf};
