//! Drives a canvas from a planned net.

use std::path::{Path, PathBuf};

use paperbox_core::{LineStyle, NetLayout, PageSize, Result};

use crate::canvas::{Canvas, DashPattern};
use crate::pdf::PdfCanvas;

/// Draws every face and tab of `layout` onto `canvas`, then finalizes it.
///
/// Strokes are emitted in render order. The dash pattern is only touched
/// when the style changes, and it is always back to solid before the
/// canvas is finalized.
pub fn render_layout<C: Canvas>(layout: &NetLayout, mut canvas: C) -> Result<C::Output> {
    let mut current = LineStyle::Solid;
    let mut drawn = 0usize;

    for stroke in layout.strokes() {
        if stroke.style != current {
            if current.is_dashed() {
                canvas.set_dash_pattern(None);
            }
            if stroke.style.is_dashed() {
                canvas.set_dash_pattern(DashPattern::for_style(stroke.style));
            }
            current = stroke.style;
        }
        canvas.draw_rectangle(&stroke.rect);
        drawn += 1;
    }

    if current.is_dashed() {
        canvas.set_dash_pattern(None);
    }

    log::debug!("Rendered {} faces as {} rectangles", layout.len(), drawn);
    canvas.finalize()
}

/// Renders `layout` to a one-page PDF at `path`.
pub fn write_pdf(layout: &NetLayout, path: impl AsRef<Path>, page: PageSize) -> Result<PathBuf> {
    render_layout(layout, PdfCanvas::new(path.as_ref(), page))
}
