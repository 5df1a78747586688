use crate::{AggregatedEntry, Canvas, FontHandle, PdfCanvas, ShoppingList, ShoppingListError};

/// Page geometry in PDF points. The default is an A4 page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub title_x: f32,
    pub title_y: f32,
    pub title_font_size: f32,
    pub line_x: f32,
    pub content_top: f32,
    pub line_height: f32,
    pub line_font_size: f32,
    pub bottom_margin: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            title_x: 200.0,
            title_y: 800.0,
            title_font_size: 24.0,
            line_x: 75.0,
            content_top: 750.0,
            line_height: 25.0,
            line_font_size: 16.0,
            bottom_margin: 0.0,
        }
    }
}

impl PageLayout {
    /// Number of item lines that fit between `content_top` and `bottom_margin`
    pub fn lines_per_page(&self) -> usize {
        let span = self.content_top - self.bottom_margin;
        if span <= 0.0 || self.line_height <= 0.0 {
            return 1;
        }
        (span / self.line_height).ceil() as usize
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub layout: PageLayout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Shopping list".to_owned(),
            layout: PageLayout::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Init,
    HeaderDrawn,
    DrawingLines,
    /// The current page is full; the next entry opens a new page.
    PageFlushed,
}

/// Lays shopping list entries out line by line, starting a new page when
/// the vertical space runs out.
///
/// Only the first page carries the title. A new page is opened only when
/// there is an entry left to put on it. [`ShoppingListRenderer::finish`]
/// consumes the renderer, so a finalized document cannot be drawn on again.
pub struct ShoppingListRenderer<C: Canvas> {
    canvas: C,
    layout: PageLayout,
    state: RenderState,
    cursor: f32,
    number: usize,
    pages: usize,
}

impl<C: Canvas> ShoppingListRenderer<C> {
    /// Starts a document on `canvas` and draws the title.
    pub fn begin(canvas: C, layout: PageLayout, title: &str) -> Self {
        let mut renderer = Self {
            canvas,
            layout,
            state: RenderState::Init,
            cursor: layout.content_top,
            number: 0,
            pages: 1,
        };

        renderer.canvas.draw_text(
            title,
            layout.title_x,
            layout.title_y,
            layout.title_font_size,
        );
        renderer.state = RenderState::HeaderDrawn;

        renderer
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn draw_entry(&mut self, entry: &AggregatedEntry) {
        if self.state == RenderState::PageFlushed {
            self.open_next_page();
        }

        self.number += 1;
        let line = entry.to_line(self.number);
        self.canvas.draw_text(
            &line,
            self.layout.line_x,
            self.cursor,
            self.layout.line_font_size,
        );

        self.cursor -= self.layout.line_height;

        if self.cursor <= self.layout.bottom_margin {
            self.state = RenderState::PageFlushed;
            tracing::trace!(page = self.pages, lines = self.number, "page flushed");
        } else {
            self.state = RenderState::DrawingLines;
        }
    }

    fn open_next_page(&mut self) {
        self.canvas.next_page();
        self.pages += 1;
        self.cursor = self.layout.content_top;
    }

    pub fn finish(self) -> Result<C::Output, ShoppingListError> {
        tracing::debug!(
            pages = self.pages,
            lines = self.number,
            "shopping list document finalized"
        );

        self.canvas.finish()
    }
}

/// Renders the list onto any canvas.
pub fn render_to<C: Canvas>(
    canvas: C,
    list: &ShoppingList,
    options: &RenderOptions,
) -> Result<C::Output, ShoppingListError> {
    let mut renderer = ShoppingListRenderer::begin(canvas, options.layout, &options.title);

    for entry in list {
        renderer.draw_entry(entry);
    }

    renderer.finish()
}

/// Renders the list as a complete PDF document.
///
/// The font is embedded before anything is drawn; a font printpdf cannot
/// parse fails the whole call.
pub fn render(
    list: &ShoppingList,
    font: &FontHandle,
    options: &RenderOptions,
) -> Result<Vec<u8>, ShoppingListError> {
    let canvas = PdfCanvas::new(
        &options.title,
        font,
        options.layout.page_width,
        options.layout.page_height,
    )?;

    render_to(canvas, list, options)
}
