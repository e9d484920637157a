//! # artinset
//!
//! Margin and padding engine for the artboards of a design document.
//!
//! A run takes a selection of artboards and an offset configuration, then
//! either draws an inset margin inside each selected artboard or moves
//! the artboard's own boundary (padding).
//!
//! ## Quick Start
//!
//! ```no_run
//! use artinset::{add_margins, RenderAs, UserInput, Tool};
//!
//! fn main() -> artinset::Result<()> {
//!     let input = UserInput::for_tool(Tool::Margin)
//!         .with_selection("1, 3, 5-8")
//!         .with_all("36")
//!         .with_render_as(RenderAs::Rectangle);
//!
//!     let report = add_margins("brochure.json", &input)?;
//!     println!("{} artboards updated", report.applied_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Selection expressions**: one-based lists and ranges like `"1, 3, 5-8"`
//! - **Per-edge offsets**: one value for every edge, or top/left/right/bottom
//! - **Odd/even artboards**: alternating left/right offsets for spreads
//! - **Units**: points or inches
//! - **All-or-nothing runs**: nothing is written unless every artboard succeeds

pub mod apply;
pub mod error;
pub mod host;
pub mod input;
pub mod model;
pub mod offset;
pub mod render;
pub mod selection;
pub mod transform;

// Re-export commonly used types
pub use apply::{ApplyReport, Artifact, Plan, MARGIN_LAYER_NAME};
pub use error::{Error, Result};
pub use host::{DocumentModel, LayerHandle, ShapeHandle};
pub use input::UserInput;
pub use model::{
    Artboard, CmykColor, Document, EdgeOffsets, InsetRect, Layer, Metadata, Rectangle,
    RegionIndex, Shape, Stroke,
};
pub use offset::{AlternatingOffsets, OffsetConfig, OffsetMode, Parity, RenderAs, Tool, Unit};
pub use render::JsonFormat;
pub use selection::{describe_ranges, parse_selection, SelectionSpec};
pub use transform::MarginShape;

use std::path::Path;

/// Load a document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use artinset::load_document;
///
/// let doc = load_document("brochure.json").unwrap();
/// println!("Artboards: {}", doc.artboard_count());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    Document::from_path(path)
}

/// Save a document to a JSON file.
pub fn save_document<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    doc.save(path)
}

/// Draw margins in the document at `path` and save it in place.
///
/// # Example
///
/// ```no_run
/// use artinset::{add_margins, Tool, UserInput};
///
/// let input = UserInput::for_tool(Tool::Margin).with_all("20");
/// let report = add_margins("poster.json", &input).unwrap();
/// assert!(report.layer.is_some());
/// ```
pub fn add_margins<P: AsRef<Path>>(path: P, input: &UserInput) -> Result<ApplyReport> {
    run_on_file(path, input, Tool::Margin)
}

/// Pad the artboards of the document at `path` and save it in place.
///
/// # Example
///
/// ```no_run
/// use artinset::{add_padding, Tool, UserInput};
///
/// let input = UserInput::for_tool(Tool::Padding).with_selection("2-4");
/// add_padding("poster.json", &input).unwrap();
/// ```
pub fn add_padding<P: AsRef<Path>>(path: P, input: &UserInput) -> Result<ApplyReport> {
    run_on_file(path, input, Tool::Padding)
}

fn run_on_file<P: AsRef<Path>>(path: P, input: &UserInput, tool: Tool) -> Result<ApplyReport> {
    let path = path.as_ref();
    let mut doc = Document::from_path(path)?;
    let report = Artinset::new(tool)
        .with_input(input)?
        .run(Some(&mut doc))?;
    doc.save(path)?;
    Ok(report)
}

/// Builder for a single margin or padding run.
///
/// # Example
///
/// ```
/// use artinset::{Artinset, Document, Rectangle, SelectionSpec};
///
/// let mut doc = Document::with_artboards([
///     Rectangle::new(100.0, 0.0, 200.0, 0.0),
///     Rectangle::new(100.0, 300.0, 500.0, 0.0),
/// ]);
///
/// let report = Artinset::padding()
///     .with_selection(SelectionSpec::parse("2")?)
///     .uniform(10.0)
///     .run(Some(&mut doc))?;
///
/// assert_eq!(report.applied_count(), 1);
/// assert_eq!(doc.artboards[1].rect.left, 290.0);
/// # Ok::<(), artinset::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Artinset {
    tool: Tool,
    selection: SelectionSpec,
    config: OffsetConfig,
}

impl Artinset {
    /// Create a builder for `tool` with its default configuration.
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            selection: SelectionSpec::All,
            config: OffsetConfig::for_tool(tool),
        }
    }

    /// Create a margin builder.
    pub fn margin() -> Self {
        Self::new(Tool::Margin)
    }

    /// Create a padding builder.
    pub fn padding() -> Self {
        Self::new(Tool::Padding)
    }

    /// Set the artboard selection.
    pub fn with_selection(mut self, selection: SelectionSpec) -> Self {
        self.selection = selection;
        self
    }

    /// Replace the offset configuration.
    pub fn with_config(mut self, config: OffsetConfig) -> Self {
        self.config = config;
        self
    }

    /// Use one offset for every edge.
    pub fn uniform(mut self, value: f64) -> Self {
        self.config = self.config.uniform(value);
        self
    }

    /// Take selection and configuration from captured user input.
    pub fn with_input(mut self, input: &UserInput) -> Result<Self> {
        let (selection, config) = input.capture(self.tool)?;
        self.selection = selection;
        self.config = config;
        Ok(self)
    }

    /// Get the tool this builder runs.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OffsetConfig {
        &self.config
    }

    /// Compute the run's edits without applying them.
    pub fn plan<D: DocumentModel + ?Sized>(&self, doc: Option<&D>) -> Result<Plan> {
        let doc = doc.ok_or(Error::NoActiveDocument)?;
        apply::plan(doc, &self.selection, &self.config, self.tool)
    }

    /// Apply the run to the active document.
    ///
    /// Returns [`Error::NoActiveDocument`] when `doc` is `None`.
    pub fn run<D: DocumentModel + ?Sized>(&self, doc: Option<&mut D>) -> Result<ApplyReport> {
        let doc = doc.ok_or(Error::NoActiveDocument)?;
        apply::apply(doc, &self.selection, &self.config, self.tool)
    }
}

impl Default for Artinset {
    fn default() -> Self {
        Self::margin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::with_artboards([
            Rectangle::new(100.0, 0.0, 200.0, 0.0),
            Rectangle::new(100.0, 300.0, 500.0, 0.0),
            Rectangle::new(100.0, 600.0, 800.0, 0.0),
        ])
    }

    #[test]
    fn test_builder_defaults() {
        let margin = Artinset::default();
        assert_eq!(margin.tool(), Tool::Margin);
        assert_eq!(margin.config().points_per_inch, 96.0);

        let padding = Artinset::padding();
        assert_eq!(padding.config().points_per_inch, 72.0);
    }

    #[test]
    fn test_run_without_document() {
        let result = Artinset::margin().uniform(10.0).run::<Document>(None);
        assert!(matches!(result, Err(Error::NoActiveDocument)));

        let plan = Artinset::padding().plan::<Document>(None);
        assert!(matches!(plan, Err(Error::NoActiveDocument)));
    }

    #[test]
    fn test_run_with_input() {
        let mut doc = sample();
        let input = UserInput::for_tool(Tool::Margin)
            .with_selection("1, 3")
            .with_all("10");

        let report = Artinset::margin()
            .with_input(&input)
            .unwrap()
            .run(Some(&mut doc))
            .unwrap();

        assert_eq!(report.applied.iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        let layer = doc.layer_named(MARGIN_LAYER_NAME).unwrap();
        assert!(layer.shape_named("1").is_some());
        assert!(layer.shape_named("2").is_none());
        assert!(layer.shape_named("3").is_some());
    }

    #[test]
    fn test_bad_input_fails_before_run() {
        let input = UserInput::for_tool(Tool::Padding).with_selection("3-1");
        let result = Artinset::padding().with_input(&input);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_plan_matches_run() {
        let mut doc = sample();
        let builder = Artinset::padding().uniform(5.0);

        let plan = builder.plan(Some(&doc)).unwrap();
        let report = builder.run(Some(&mut doc)).unwrap();
        assert_eq!(plan.artifacts, report.artifacts);
    }

    #[test]
    fn test_run_through_trait_object() {
        let mut doc = sample();
        let model: &mut dyn DocumentModel = &mut doc;
        let report = Artinset::padding().uniform(1.0).run(Some(model)).unwrap();
        assert_eq!(report.applied_count(), 3);
        assert_eq!(doc.artboards[0].rect.top, 101.0);
    }
}
