//! Document-level types.

use super::{Layer, Rectangle};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// An in-memory design document: an ordered list of artboards plus layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// Artboards, in document order
    #[serde(default)]
    pub artboards: Vec<Artboard>,

    /// Content layers
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with one default-named artboard per rectangle.
    pub fn with_artboards(rects: impl IntoIterator<Item = Rectangle>) -> Self {
        let mut doc = Self::new();
        for rect in rects {
            doc.add_artboard(rect);
        }
        doc
    }

    /// Load a document from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse a document from JSON text.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Write the document to a JSON file (pretty-printed).
    ///
    /// The JSON goes to a temporary file in the same directory, which then
    /// replaces `path`; a failed save leaves any existing file intact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;

        log::debug!("Saved document to {}", path.display());
        Ok(())
    }

    /// Get the number of artboards in the document.
    pub fn artboard_count(&self) -> usize {
        self.artboards.len()
    }

    /// Get an artboard by one-based position.
    pub fn get_artboard(&self, position: usize) -> Option<&Artboard> {
        if position == 0 {
            return None;
        }
        self.artboards.get(position - 1)
    }

    /// Append an artboard named after its one-based position.
    pub fn add_artboard(&mut self, rect: Rectangle) {
        let name = format!("Artboard {}", self.artboards.len() + 1);
        self.artboards.push(Artboard::new(name, rect));
    }

    /// Find a layer by name.
    pub fn layer_named(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Check if the document has any artboards.
    pub fn is_empty(&self) -> bool {
        self.artboards.is_empty()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A named rectangular region of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artboard {
    /// Artboard name
    pub name: String,

    /// Artboard boundary in points
    pub rect: Rectangle,
}

impl Artboard {
    /// Create a new artboard.
    pub fn new(name: impl Into<String>, rect: Rectangle) -> Self {
        Self {
            name: name.into(),
            rect,
        }
    }
}
