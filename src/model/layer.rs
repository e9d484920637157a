//! Layer and shape types.

use super::InsetRect;
use serde::{Deserialize, Serialize};

/// A named layer holding drawn shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name
    pub name: String,

    /// Shapes on the layer, in drawing order
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Layer {
    /// Create an empty layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    /// Find a shape by name.
    pub fn shape_named(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name.as_deref() == Some(name))
    }

    /// Get the number of shapes on the layer.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Number of shapes marked as guides.
    pub fn guide_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.guide).count()
    }
}

/// A rectangular path item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Top edge in points
    pub top: f64,

    /// Left edge in points
    pub left: f64,

    /// Width in points
    pub width: f64,

    /// Height in points
    pub height: f64,

    /// Whether the shape is filled
    #[serde(default)]
    pub filled: bool,

    /// Whether the shape is a non-printing guide
    #[serde(default)]
    pub guide: bool,

    /// Stroke, if the shape is stroked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}

impl Shape {
    /// Create an unfilled, unstroked rectangle.
    pub fn rectangle(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            name: None,
            top,
            left,
            width,
            height,
            filled: false,
            guide: false,
            stroke: None,
        }
    }

    /// Placement of the shape.
    pub fn bounds(&self) -> InsetRect {
        InsetRect {
            top: self.top,
            left: self.left,
            width: self.width,
            height: self.height,
        }
    }

    /// Check if the shape is stroked.
    pub fn is_stroked(&self) -> bool {
        self.stroke.is_some()
    }
}

/// Stroke settings for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke colour
    pub color: CmykColor,
    /// Stroke width in points
    pub width: f64,
}

/// A CMYK process colour, each channel 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CmykColor {
    /// Cyan percentage
    pub cyan: f64,
    /// Magenta percentage
    pub magenta: f64,
    /// Yellow percentage
    pub yellow: f64,
    /// Black percentage
    pub black: f64,
}

impl CmykColor {
    /// Solid black (K = 100).
    pub const BLACK: CmykColor = CmykColor {
        cyan: 0.0,
        magenta: 0.0,
        yellow: 0.0,
        black: 100.0,
    };
}
