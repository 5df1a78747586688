//! Shopping list pipeline: cart line items are collapsed into an ordered
//! list of ingredients, which is then laid out onto fixed-size pages and
//! written as a PDF document.

pub mod aggregation;
pub mod canvas;
pub mod error;
pub mod font;
pub mod line_item;
pub mod render;

pub use aggregation::{AggregatedEntry, ShoppingList, aggregate, aggregate_records};
pub use canvas::{Canvas, PdfCanvas, PlacedText, RecordedPage, RecordingCanvas};
pub use error::ShoppingListError;
pub use font::{FontCache, FontHandle};
pub use line_item::{LineItem, RawLineItem};
pub use render::{PageLayout, RenderOptions, RenderState, ShoppingListRenderer, render, render_to};
