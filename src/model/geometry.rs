//! Rectangle and offset types.
//!
//! All values are in points. Coordinates follow the host's axis
//! orientation: y grows upward, so an ordinary artboard has
//! `top > bottom`.

use serde::{Deserialize, Serialize};

/// Zero-based position of a region within the document's artboard list.
pub type RegionIndex = usize;

/// An axis-aligned rectangle given by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top edge
    pub top: f64,
    /// Left edge
    pub left: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl Rectangle {
    /// Create a rectangle from its edges.
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Create a rectangle from the host's `[left, top, right, bottom]` order.
    pub fn from_artboard_rect(rect: [f64; 4]) -> Self {
        let [left, top, right, bottom] = rect;
        Self::new(top, left, right, bottom)
    }

    /// Convert back to the host's `[left, top, right, bottom]` order.
    pub fn to_artboard_rect(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// Horizontal extent, independent of edge order.
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    /// Vertical extent, independent of edge order.
    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }
}

/// Resolved offsets for the four edges of a region, in points.
///
/// Negative values are allowed: they grow a padded boundary inward and
/// push a margin inset past the region's edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeOffsets {
    /// Top offset
    pub top: f64,
    /// Left offset
    pub left: f64,
    /// Right offset
    pub right: f64,
    /// Bottom offset
    pub bottom: f64,
}

impl EdgeOffsets {
    /// Create offsets for each edge.
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// The same offset on every edge.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Multiply every edge by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(
            self.top * factor,
            self.left * factor,
            self.right * factor,
            self.bottom * factor,
        )
    }

    /// Edges as `(name, value)` pairs, in top/left/right/bottom order.
    pub fn edges(&self) -> [(&'static str, f64); 4] {
        [
            ("top", self.top),
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
        ]
    }
}

/// A rectangle placed by its top-left corner and size, as the host draws it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InsetRect {
    /// Top edge
    pub top: f64,
    /// Left edge
    pub left: f64,
    /// Width (may be zero or negative when offsets exceed the region)
    pub width: f64,
    /// Height (may be zero or negative when offsets exceed the region)
    pub height: f64,
}

impl InsetRect {
    /// Check whether the rectangle has no positive area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artboard_rect_order() {
        let rect = Rectangle::from_artboard_rect([0.0, 100.0, 200.0, 0.0]);
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 100.0);
        assert_eq!(rect.right, 200.0);
        assert_eq!(rect.bottom, 0.0);
        assert_eq!(rect.to_artboard_rect(), [0.0, 100.0, 200.0, 0.0]);
    }

    #[test]
    fn test_dimensions_ignore_edge_order() {
        let rect = Rectangle::new(0.0, 200.0, 0.0, 100.0);
        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.height(), 100.0);
    }

    #[test]
    fn test_offsets_scaled() {
        let offsets = EdgeOffsets::new(1.0, 2.0, 3.0, 4.0).scaled(72.0);
        assert_eq!(offsets, EdgeOffsets::new(72.0, 144.0, 216.0, 288.0));
    }

    #[test]
    fn test_inset_degenerate() {
        let ok = InsetRect {
            top: 80.0,
            left: 20.0,
            width: 160.0,
            height: 60.0,
        };
        assert!(!ok.is_degenerate());

        let flat = InsetRect { height: 0.0, ..ok };
        assert!(flat.is_degenerate());
    }
}
