//! Single-page PDF canvas backed by lopdf.

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use paperbox_core::{cm_to_pt, Error, PageSize, Rect, Result};

use crate::canvas::{Canvas, DashPattern};

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Canvas that writes a one-page PDF of stroked rectangles.
///
/// Drawing calls are buffered in memory. The file is only created by
/// [`Canvas::finalize`], so an aborted run leaves nothing on disk.
#[derive(Debug)]
pub struct PdfCanvas {
    path: PathBuf,
    page: PageSize,
    operations: Vec<Operation>,
}

impl PdfCanvas {
    /// Creates a canvas that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>, page: PageSize) -> Self {
        Self {
            path: path.into(),
            page,
            operations: Vec::new(),
        }
    }

    /// Destination of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of buffered content stream operations.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Encodes the buffered drawing into a complete PDF document.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let content = Content {
            operations: self.operations.clone(),
        };
        let encoded = content
            .encode()
            .map_err(|e| Error::Render(format!("content stream: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let (width, height) = self.page.to_points();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), real(width), real(height)],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| Error::Render(format!("document: {e}")))?;
        Ok(bytes)
    }
}

impl Canvas for PdfCanvas {
    type Output = PathBuf;

    fn draw_rectangle(&mut self, rect: &Rect) {
        self.operations.push(Operation::new(
            "re",
            vec![
                real(cm_to_pt(rect.x)),
                real(cm_to_pt(rect.y)),
                real(cm_to_pt(rect.width)),
                real(cm_to_pt(rect.height)),
            ],
        ));
        self.operations.push(Operation::new("S", vec![]));
    }

    fn set_dash_pattern(&mut self, pattern: Option<DashPattern>) {
        let array = match pattern {
            Some(p) => vec![real(p.on), real(p.off)],
            None => vec![],
        };
        self.operations
            .push(Operation::new("d", vec![Object::Array(array), 0.into()]));
    }

    fn finalize(self) -> Result<PathBuf> {
        let bytes = self.to_bytes()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        log::info!("Saving pdf to {}", self.path.display());
        fs::write(&self.path, bytes)?;
        Ok(self.path)
    }
}
