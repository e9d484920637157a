//! Document model types.
//!
//! This module defines the geometry the engine computes with and an
//! in-memory, serializable document that stands in for a host drawing
//! application.

mod document;
mod geometry;
mod layer;

pub use document::{Artboard, Document, Metadata};
pub use geometry::{EdgeOffsets, InsetRect, Rectangle, RegionIndex};
pub use layer::{CmykColor, Layer, Shape, Stroke};
