use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error("line item #{index} is missing its {field}")]
    MalformedLineItem { index: usize, field: &'static str },

    #[error("font not found at {}: {source}", .path.display())]
    FontNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font '{name}' is not usable: {reason}")]
    FontInvalid { name: String, reason: String },

    #[error("PDF error: {0}")]
    Pdf(String),
}
