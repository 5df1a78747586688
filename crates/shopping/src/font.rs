use std::{
    io::Cursor,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use crate::ShoppingListError;

/// Read-only TrueType font data shared by every render call
#[derive(Debug, Clone)]
pub struct FontHandle {
    name: Arc<str>,
    bytes: Arc<[u8]>,
}

impl FontHandle {
    /// Reads a font file from disk. The file stem becomes the font name.
    ///
    /// The face is parsed before the handle is returned, so a file that
    /// printpdf could not embed fails here with [`ShoppingListError::FontInvalid`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShoppingListError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ShoppingListError::FontNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom");

        let handle = Self::parse(name, bytes)?;

        tracing::debug!(font = name, size = handle.bytes.len(), "font loaded");

        Ok(handle)
    }

    /// Builds a handle from in-memory font data, rejecting anything that is
    /// not a parseable TrueType/OpenType face.
    pub fn parse(name: &str, bytes: Vec<u8>) -> Result<Self, ShoppingListError> {
        if bytes.is_empty() {
            return Err(ShoppingListError::FontInvalid {
                name: name.to_owned(),
                reason: "font file is empty".to_owned(),
            });
        }

        printpdf::ExternalFont::new(Cursor::new(bytes.as_slice()), 0).map_err(|e| {
            ShoppingListError::FontInvalid {
                name: name.to_owned(),
                reason: format!("{e:?}"),
            }
        })?;

        Ok(Self::from_bytes(name, bytes))
    }

    /// Wraps font data without checking it.
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: Arc::from(name),
            bytes: Arc::from(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Loads the shopping list font on first use and keeps it afterwards.
///
/// A failed load is not remembered: the next call tries the disk again.
#[derive(Debug)]
pub struct FontCache {
    path: PathBuf,
    handle: OnceLock<FontHandle>,
}

impl FontCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            handle: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn get(&self) -> Result<FontHandle, ShoppingListError> {
        if let Some(handle) = self.handle.get() {
            return Ok(handle.clone());
        }

        let loaded = FontHandle::load(&self.path)?;

        // Two requests may race here; whichever lands first is kept.
        Ok(self.handle.get_or_init(|| loaded).clone())
    }
}
