//! Drawing surfaces the shopping list renderer writes to.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of
//! the page, `y` growing upwards.

use std::io::Cursor;

use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::{FontHandle, ShoppingListError};

const LAYER_NAME: &str = "Shopping list";

/// A page-oriented surface that can place text at absolute positions
pub trait Canvas {
    type Output;

    /// Draws `text` with its baseline starting at `(x, y)` on the current page.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32);

    /// Closes the current page and makes a blank one current.
    fn next_page(&mut self);

    /// Closes the document.
    fn finish(self) -> Result<Self::Output, ShoppingListError>;
}

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// PDF canvas backed by printpdf, drawing everything with one embedded font
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    layer: PdfLayerReference,
    width: Mm,
    height: Mm,
}

impl PdfCanvas {
    pub fn new(
        title: &str,
        font: &FontHandle,
        width: f32,
        height: f32,
    ) -> Result<Self, ShoppingListError> {
        let (width, height) = (mm(width), mm(height));
        let (doc, page, layer) = PdfDocument::new(title, width, height, LAYER_NAME);

        let font_ref = doc
            .add_external_font(Cursor::new(font.bytes()))
            .map_err(|e| ShoppingListError::FontInvalid {
                name: font.name().to_owned(),
                reason: format!("{e:?}"),
            })?;

        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            font: font_ref,
            layer,
            width,
            height,
        })
    }
}

impl Canvas for PdfCanvas {
    type Output = Vec<u8>;

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32) {
        self.layer
            .use_text(text, font_size, mm(x), mm(y), &self.font);
    }

    fn next_page(&mut self) {
        let (page, layer) = self.doc.add_page(self.width, self.height, LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn finish(self) -> Result<Vec<u8>, ShoppingListError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ShoppingListError::Pdf(format!("{e:?}")))
    }
}

/// Text placed on a [`RecordingCanvas`] page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPage {
    pub texts: Vec<PlacedText>,
}

impl RecordedPage {
    pub fn lines(&self) -> Vec<&str> {
        self.texts.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Canvas that keeps every draw call in memory instead of producing a file.
///
/// Used to preview or inspect a layout without a font.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    pages: Vec<RecordedPage>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            pages: vec![RecordedPage::default()],
        }
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    type Output = Vec<RecordedPage>;

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32) {
        if let Some(page) = self.pages.last_mut() {
            page.texts.push(PlacedText {
                text: text.to_owned(),
                x,
                y,
                font_size,
            });
        }
    }

    fn next_page(&mut self) {
        self.pages.push(RecordedPage::default());
    }

    fn finish(self) -> Result<Vec<RecordedPage>, ShoppingListError> {
        Ok(self.pages)
    }
}
