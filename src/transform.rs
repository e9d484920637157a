//! Applying resolved offsets to artboard rectangles.

use crate::model::{EdgeOffsets, InsetRect, Rectangle, RegionIndex};
use crate::offset::{RenderAs, Tool};
use serde::{Deserialize, Serialize};

/// Stroke width, in points, of margins drawn as rectangles.
pub const MARGIN_STROKE_WIDTH: f64 = 1.0;

/// Move a boundary outward by the offsets (inward for negative values).
pub fn pad(rect: Rectangle, offsets: &EdgeOffsets) -> Rectangle {
    Rectangle {
        top: rect.top + offsets.top,
        left: rect.left - offsets.left,
        right: rect.right + offsets.right,
        bottom: rect.bottom - offsets.bottom,
    }
}

/// Compute the rectangle inset from `rect` by the offsets.
///
/// Offsets larger than the artboard produce zero or negative sizes; the
/// result is returned unchanged and [`InsetRect::is_degenerate`] reports it.
pub fn inset(rect: Rectangle, offsets: &EdgeOffsets) -> InsetRect {
    InsetRect {
        top: rect.top - offsets.top,
        left: rect.left + offsets.left,
        width: rect.width() - (offsets.left + offsets.right),
        height: rect.height() - (offsets.top + offsets.bottom),
    }
}

/// A margin shape to draw for one artboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginShape {
    /// Zero-based artboard index
    pub index: RegionIndex,
    /// Shape name (the artboard's one-based position)
    pub name: String,
    /// Placement and size
    pub bounds: InsetRect,
    /// Guide or stroked rectangle
    pub render_as: RenderAs,
}

impl MarginShape {
    /// Create the margin shape for the artboard at `index`.
    pub fn new(index: RegionIndex, bounds: InsetRect, render_as: RenderAs) -> Self {
        Self {
            index,
            name: (index + 1).to_string(),
            bounds,
            render_as,
        }
    }
}

/// The outcome of transforming one artboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed {
    /// Replacement boundary for the artboard (padding)
    Boundary(Rectangle),
    /// New inset shape (margin)
    Inset(MarginShape),
}

/// Transform the artboard at `index` according to `tool`.
pub fn transform(
    tool: Tool,
    rect: Rectangle,
    offsets: &EdgeOffsets,
    index: RegionIndex,
    render_as: RenderAs,
) -> Transformed {
    match tool {
        Tool::Padding => Transformed::Boundary(pad(rect, offsets)),
        Tool::Margin => Transformed::Inset(MarginShape::new(index, inset(rect, offsets), render_as)),
    }
}
