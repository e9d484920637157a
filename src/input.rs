//! Captured user input.
//!
//! [`UserInput`] holds the raw text a form or command line collects, with
//! the same defaults the margin and padding dialogs start from. It is
//! converted once, by [`UserInput::capture`], into the immutable
//! selection and configuration a run works with.

use crate::error::{Error, Result};
use crate::offset::{AlternatingOffsets, OffsetConfig, RenderAs, Tool, Unit};
use crate::selection::SelectionSpec;

/// Selection expression shown before the user edits it.
pub const DEFAULT_SELECTION_EXPR: &str = "1, 3, 5-8";

/// Uniform padding value the padding dialog starts with.
pub const DEFAULT_PADDING: &str = "32";

/// Raw form state for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    /// Affect only the artboards in `selection_expr`
    pub custom_selection: bool,

    /// Selection expression (one-based, e.g., "1, 3, 5-8")
    pub selection_expr: String,

    /// Use the four directional fields instead of `all`
    pub directional: bool,

    /// Value for every edge
    pub all: Option<String>,

    /// Top edge value
    pub top: Option<String>,

    /// Left edge value
    pub left: Option<String>,

    /// Right edge value
    pub right: Option<String>,

    /// Bottom edge value
    pub bottom: Option<String>,

    /// Unit the values are entered in
    pub unit: Unit,

    /// Override for the tool's points-per-inch factor
    pub points_per_inch: Option<f64>,

    /// Alternate left/right between odd and even artboards
    pub alternate: bool,

    /// Left value for odd artboards
    pub odd_left: Option<String>,

    /// Right value for odd artboards
    pub odd_right: Option<String>,

    /// Left value for even artboards
    pub even_left: Option<String>,

    /// Right value for even artboards
    pub even_right: Option<String>,

    /// How margins are drawn
    pub render_as: RenderAs,
}

impl UserInput {
    /// Create input with the defaults of the given tool's dialog.
    pub fn for_tool(tool: Tool) -> Self {
        let mut input = Self::default();
        if tool == Tool::Padding {
            input.all = Some(DEFAULT_PADDING.to_string());
        }
        input
    }

    /// Select artboards by expression.
    pub fn with_selection(mut self, expr: impl Into<String>) -> Self {
        self.custom_selection = true;
        self.selection_expr = expr.into();
        self
    }

    /// Use one value for every edge.
    pub fn with_all(mut self, value: impl Into<String>) -> Self {
        self.directional = false;
        self.all = Some(value.into());
        self
    }

    /// Use independent values per edge.
    pub fn with_edges(
        mut self,
        top: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
    ) -> Self {
        self.directional = true;
        self.top = Some(top.into());
        self.left = Some(left.into());
        self.right = Some(right.into());
        self.bottom = Some(bottom.into());
        self
    }

    /// Alternate left/right values by artboard parity.
    pub fn with_alternate(
        mut self,
        odd_left: impl Into<String>,
        odd_right: impl Into<String>,
        even_left: impl Into<String>,
        even_right: impl Into<String>,
    ) -> Self {
        self.alternate = true;
        self.odd_left = Some(odd_left.into());
        self.odd_right = Some(odd_right.into());
        self.even_left = Some(even_left.into());
        self.even_right = Some(even_right.into());
        self
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Override the points-per-inch factor.
    pub fn with_points_per_inch(mut self, factor: f64) -> Self {
        self.points_per_inch = Some(factor);
        self
    }

    /// Set how margins are drawn.
    pub fn with_render_as(mut self, render_as: RenderAs) -> Self {
        self.render_as = render_as;
        self
    }

    /// Convert the form state into a selection and offset configuration.
    ///
    /// Only fields the chosen modes use are validated; the first missing or
    /// non-numeric one is reported as [`Error::Config`].
    pub fn capture(&self, tool: Tool) -> Result<(SelectionSpec, OffsetConfig)> {
        let selection = if self.custom_selection {
            SelectionSpec::parse(&self.selection_expr)?
        } else {
            SelectionSpec::All
        };

        let mut config = OffsetConfig::for_tool(tool)
            .with_unit(self.unit)
            .with_render_as(self.render_as);

        if let Some(factor) = self.points_per_inch {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(Error::Config(format!(
                    "points per inch must be a positive number, got {}",
                    factor
                )));
            }
            config = config.with_points_per_inch(factor);
        }

        config = if self.directional {
            config.per_edge(
                number("top", &self.top)?,
                number("left", &self.left)?,
                number("right", &self.right)?,
                number("bottom", &self.bottom)?,
            )
        } else {
            config.uniform(number(tool.name(), &self.all)?)
        };

        if self.alternate {
            config = config.alternating(AlternatingOffsets::new(
                number("odd left", &self.odd_left)?,
                number("odd right", &self.odd_right)?,
                number("even left", &self.even_left)?,
                number("even right", &self.even_right)?,
            ));
        }

        Ok((selection, config))
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            custom_selection: false,
            selection_expr: DEFAULT_SELECTION_EXPR.to_string(),
            directional: false,
            all: None,
            top: Some("0".to_string()),
            left: Some("0".to_string()),
            right: Some("0".to_string()),
            bottom: Some("0".to_string()),
            unit: Unit::Points,
            points_per_inch: None,
            alternate: false,
            odd_left: None,
            odd_right: None,
            even_left: None,
            even_right: None,
            render_as: RenderAs::Guide,
        }
    }
}

/// Parse a required numeric field.
fn number(field: &str, value: &Option<String>) -> Result<f64> {
    let text = value.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(Error::Config(format!("{} value is missing", field)));
    }

    let parsed: f64 = text
        .parse()
        .map_err(|_| Error::Config(format!("{} value '{}' is not a number", field, text)))?;

    if !parsed.is_finite() {
        return Err(Error::Config(format!(
            "{} value '{}' is not a finite number",
            field, text
        )));
    }

    Ok(parsed)
}
