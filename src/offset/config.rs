//! Offset configuration.

use crate::model::EdgeOffsets;
use serde::{Deserialize, Serialize};

/// Points per inch used by the margin tool.
pub const MARGIN_POINTS_PER_INCH: f64 = 96.0;

/// Points per inch used by the padding tool.
pub const PADDING_POINTS_PER_INCH: f64 = 72.0;

/// The operation a run performs on each selected artboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Draw an inset shape inside the artboard, leaving its boundary alone
    Margin,
    /// Move the artboard's own boundary
    Padding,
}

impl Tool {
    /// Default conversion factor for [`Unit::Inches`].
    pub fn points_per_inch(self) -> f64 {
        match self {
            Tool::Margin => MARGIN_POINTS_PER_INCH,
            Tool::Padding => PADDING_POINTS_PER_INCH,
        }
    }

    /// Human-readable tool name.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Margin => "margin",
            Tool::Padding => "padding",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// All the values needed to resolve edge offsets for any artboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetConfig {
    /// Base offsets before parity overrides
    pub offsets: OffsetMode,

    /// Whether left/right alternate between odd and even artboards
    pub parity: Parity,

    /// Unit the values are entered in
    pub unit: Unit,

    /// Conversion factor applied when `unit` is inches
    pub points_per_inch: f64,

    /// How margin insets are drawn (ignored for padding)
    pub render_as: RenderAs,
}

impl OffsetConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with the tool's inch conversion factor.
    pub fn for_tool(tool: Tool) -> Self {
        Self::new().with_points_per_inch(tool.points_per_inch())
    }

    /// Use one value for all four edges.
    pub fn uniform(mut self, value: f64) -> Self {
        self.offsets = OffsetMode::Uniform(value);
        self
    }

    /// Use independent values per edge.
    pub fn per_edge(mut self, top: f64, left: f64, right: f64, bottom: f64) -> Self {
        self.offsets = OffsetMode::PerEdge(EdgeOffsets::new(top, left, right, bottom));
        self
    }

    /// Set the parity mode.
    pub fn with_parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    /// Alternate left/right offsets between odd and even artboards.
    pub fn alternating(mut self, offsets: AlternatingOffsets) -> Self {
        self.parity = Parity::Alternating(offsets);
        self
    }

    /// Set the input unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Enter values in inches.
    pub fn inches(mut self) -> Self {
        self.unit = Unit::Inches;
        self
    }

    /// Set the inch conversion factor.
    pub fn with_points_per_inch(mut self, factor: f64) -> Self {
        self.points_per_inch = factor;
        self
    }

    /// Set how margins are drawn.
    pub fn with_render_as(mut self, render_as: RenderAs) -> Self {
        self.render_as = render_as;
        self
    }

    /// Factor that converts entered values to points.
    pub fn unit_factor(&self) -> f64 {
        match self.unit {
            Unit::Points => 1.0,
            Unit::Inches => self.points_per_inch,
        }
    }
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            offsets: OffsetMode::Uniform(0.0),
            parity: Parity::Same,
            unit: Unit::Points,
            points_per_inch: PADDING_POINTS_PER_INCH,
            render_as: RenderAs::Guide,
        }
    }
}

/// Base offsets: one value everywhere, or one per edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum OffsetMode {
    /// The same value on all four edges
    Uniform(f64),
    /// Independent values per edge
    PerEdge(EdgeOffsets),
}

/// Whether left/right offsets depend on artboard parity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Parity {
    /// Every artboard gets the base offsets
    #[default]
    Same,
    /// Left/right come from the odd or even pair by one-based position
    Alternating(AlternatingOffsets),
}

/// Left/right offsets for odd and even artboards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlternatingOffsets {
    /// Left offset on odd-numbered artboards
    pub odd_left: f64,
    /// Right offset on odd-numbered artboards
    pub odd_right: f64,
    /// Left offset on even-numbered artboards
    pub even_left: f64,
    /// Right offset on even-numbered artboards
    pub even_right: f64,
}

impl AlternatingOffsets {
    /// Create alternating offsets.
    pub fn new(odd_left: f64, odd_right: f64, even_left: f64, even_right: f64) -> Self {
        Self {
            odd_left,
            odd_right,
            even_left,
            even_right,
        }
    }
}

/// Unit offset values are entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Document points (shown as "pixels" in the original dialogs)
    #[default]
    Points,
    /// Inches, converted with the configured factor
    Inches,
}

/// How a margin inset is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderAs {
    /// Non-printing guide outline
    #[default]
    Guide,
    /// Unfilled rectangle with a black stroke
    Rectangle,
}
