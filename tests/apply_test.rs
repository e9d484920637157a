//! Integration tests for batch application.

use artinset::apply::{apply, commit, plan};
use artinset::error::{Error, Result};
use artinset::host::{DocumentModel, LayerHandle, ShapeHandle};
use artinset::model::{CmykColor, Document, Rectangle, RegionIndex};
use artinset::{
    AlternatingOffsets, Artinset, OffsetConfig, RenderAs, SelectionSpec, Tool, UserInput,
    MARGIN_LAYER_NAME,
};

fn create_sample_document(count: usize) -> Document {
    Document::with_artboards((0..count).map(|i| {
        let left = i as f64 * 300.0;
        Rectangle::new(100.0, left, left + 200.0, 0.0)
    }))
}

/// Document wrapper that rejects writes to one artboard or shape.
struct FlakyDocument {
    inner: Document,
    fail_boundary: Option<RegionIndex>,
    fail_shape_name: Option<&'static str>,
}

impl FlakyDocument {
    fn new(inner: Document) -> Self {
        Self {
            inner,
            fail_boundary: None,
            fail_shape_name: None,
        }
    }
}

impl DocumentModel for FlakyDocument {
    fn region_count(&self) -> usize {
        self.inner.region_count()
    }

    fn region_boundary(&self, index: RegionIndex) -> Result<Rectangle> {
        self.inner.region_boundary(index)
    }

    fn set_region_boundary(&mut self, index: RegionIndex, rect: Rectangle) -> Result<()> {
        if self.fail_boundary == Some(index) {
            self.fail_boundary = None;
            return Err(Error::Host(format!("artboard {} is locked", index + 1)));
        }
        self.inner.set_region_boundary(index, rect)
    }

    fn create_layer(&mut self, name: &str) -> Result<LayerHandle> {
        self.inner.create_layer(name)
    }

    fn remove_layer(&mut self, layer: LayerHandle) -> Result<()> {
        self.inner.remove_layer(layer)
    }

    fn draw_rectangle(
        &mut self,
        layer: LayerHandle,
        top: f64,
        left: f64,
        width: f64,
        height: f64,
    ) -> Result<ShapeHandle> {
        self.inner.draw_rectangle(layer, top, left, width, height)
    }

    fn set_shape_name(&mut self, shape: ShapeHandle, name: &str) -> Result<()> {
        if self.fail_shape_name == Some(name) {
            return Err(Error::Host(format!("cannot name shape {}", name)));
        }
        self.inner.set_shape_name(shape, name)
    }

    fn set_shape_as_guide(&mut self, shape: ShapeHandle) -> Result<()> {
        self.inner.set_shape_as_guide(shape)
    }

    fn set_shape_stroke(
        &mut self,
        shape: ShapeHandle,
        color: CmykColor,
        width: f64,
    ) -> Result<()> {
        self.inner.set_shape_stroke(shape, color, width)
    }
}

#[test]
fn test_margin_end_to_end() {
    let mut doc = Document::with_artboards([Rectangle::new(100.0, 0.0, 200.0, 0.0)]);
    let config = OffsetConfig::for_tool(Tool::Margin).uniform(20.0);

    let report = apply(&mut doc, &SelectionSpec::All, &config, Tool::Margin).unwrap();

    let shape = report.margin_for(0).unwrap();
    assert_eq!(shape.bounds.top, 80.0);
    assert_eq!(shape.bounds.left, 20.0);
    assert_eq!(shape.bounds.width, 160.0);
    assert_eq!(shape.bounds.height, 60.0);

    let drawn = &doc.layer_named(MARGIN_LAYER_NAME).unwrap().shapes[0];
    assert_eq!(drawn.name.as_deref(), Some("1"));
    assert_eq!(drawn.bounds(), shape.bounds);
    assert!(drawn.guide);
}

#[test]
fn test_selection_scoping_margin() {
    let mut doc = create_sample_document(5);
    let before = doc.artboards.clone();
    let config = OffsetConfig::for_tool(Tool::Margin)
        .uniform(10.0)
        .with_render_as(RenderAs::Rectangle);

    let report = apply(
        &mut doc,
        &SelectionSpec::indices([0, 2]),
        &config,
        Tool::Margin,
    )
    .unwrap();

    assert_eq!(report.applied_count(), 2);
    let layer = doc.layer_named(MARGIN_LAYER_NAME).unwrap();
    let names: Vec<_> = layer
        .shapes
        .iter()
        .map(|s| s.name.clone().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["1", "3"]);
    assert_eq!(doc.artboards, before);
}

#[test]
fn test_selection_expression_ten_artboards() {
    // Artboard 11 must not drag in artboards 1 or 2
    let mut doc = create_sample_document(12);
    let config = OffsetConfig::for_tool(Tool::Padding).uniform(1.0);
    let selection = SelectionSpec::parse("11").unwrap();

    let report = apply(&mut doc, &selection, &config, Tool::Padding).unwrap();
    assert_eq!(report.applied.iter().copied().collect::<Vec<_>>(), vec![10]);
}

#[test]
fn test_alternating_padding_spread() {
    let mut doc = create_sample_document(4);
    let config = OffsetConfig::for_tool(Tool::Padding)
        .uniform(0.0)
        .alternating(AlternatingOffsets::new(0.0, 18.0, 18.0, 0.0));

    apply(&mut doc, &SelectionSpec::All, &config, Tool::Padding).unwrap();

    // Odd artboards bleed to the right, even ones to the left
    assert_eq!(doc.artboards[0].rect, Rectangle::new(100.0, 0.0, 218.0, 0.0));
    assert_eq!(doc.artboards[1].rect, Rectangle::new(100.0, 282.0, 500.0, 0.0));
    assert_eq!(doc.artboards[2].rect, Rectangle::new(100.0, 600.0, 818.0, 0.0));
    assert_eq!(doc.artboards[3].rect, Rectangle::new(100.0, 882.0, 1100.0, 0.0));
}

#[test]
fn test_inches_use_tool_factor() {
    let mut margin_doc = create_sample_document(1);
    let mut padding_doc = create_sample_document(1);

    Artinset::margin()
        .with_config(OffsetConfig::for_tool(Tool::Margin).uniform(0.25).inches())
        .run(Some(&mut margin_doc))
        .unwrap();
    Artinset::padding()
        .with_config(OffsetConfig::for_tool(Tool::Padding).uniform(0.25).inches())
        .run(Some(&mut padding_doc))
        .unwrap();

    // 0.25in is 24pt for margins and 18pt for padding
    assert_eq!(margin_doc.layers[0].shapes[0].left, 24.0);
    assert_eq!(padding_doc.artboards[0].rect.left, -18.0);
}

#[test]
fn test_resolution_failure_leaves_document_untouched() {
    let mut doc = create_sample_document(5);
    let before = doc.clone();
    // Only even artboards (index 1 and 3) hit the bad value
    let config = OffsetConfig::for_tool(Tool::Margin)
        .uniform(5.0)
        .alternating(AlternatingOffsets::new(5.0, 5.0, 5.0, f64::INFINITY));

    let result = apply(&mut doc, &SelectionSpec::All, &config, Tool::Margin);
    assert!(matches!(result, Err(Error::Config(_))));
    assert_eq!(doc, before);
}

#[test]
fn test_commit_failure_restores_boundaries() {
    let original = create_sample_document(5);
    let mut doc = FlakyDocument::new(original.clone());
    doc.fail_boundary = Some(2);
    let config = OffsetConfig::for_tool(Tool::Padding).uniform(10.0);

    let result = apply(&mut doc, &SelectionSpec::All, &config, Tool::Padding);
    assert!(matches!(result, Err(Error::Host(_))));
    assert_eq!(doc.inner, original);
}

#[test]
fn test_commit_failure_removes_margin_layer() {
    let original = create_sample_document(5);
    let mut doc = FlakyDocument::new(original.clone());
    doc.fail_shape_name = Some("4");
    let config = OffsetConfig::for_tool(Tool::Margin).uniform(10.0);

    let result = apply(&mut doc, &SelectionSpec::All, &config, Tool::Margin);
    assert!(result.is_err());
    assert!(doc.inner.layers.is_empty());
    assert_eq!(doc.inner, original);
}

#[test]
fn test_plan_then_commit() {
    let mut doc = create_sample_document(3);
    let config = OffsetConfig::for_tool(Tool::Padding).per_edge(1.0, 2.0, 3.0, 4.0);

    let planned = plan(&doc, &SelectionSpec::indices([1, 9]), &config, Tool::Padding).unwrap();
    assert_eq!(planned.artifacts.len(), 1);
    assert_eq!(planned.ignored, vec![9..=9]);

    let report = commit(&mut doc, planned).unwrap();
    assert_eq!(
        report.boundary_for(1),
        Some(Rectangle::new(101.0, 298.0, 503.0, -4.0))
    );
    assert_eq!(doc.artboards[1].rect, Rectangle::new(101.0, 298.0, 503.0, -4.0));
}

#[test]
fn test_degenerate_margin_is_drawn() {
    let mut doc = create_sample_document(1);
    let config = OffsetConfig::for_tool(Tool::Margin).uniform(150.0);

    let report = apply(&mut doc, &SelectionSpec::All, &config, Tool::Margin).unwrap();
    assert_eq!(report.degenerate_count(), 1);

    let shape = &doc.layers[0].shapes[0];
    assert_eq!(shape.width, -100.0);
    assert_eq!(shape.height, -200.0);
}

#[test]
fn test_user_input_run() {
    let mut doc = create_sample_document(8);
    let input = UserInput::for_tool(Tool::Margin)
        .with_selection("1, 3, 5-8")
        .with_edges("10", "20", "30", "40")
        .with_render_as(RenderAs::Rectangle);

    let report = Artinset::margin()
        .with_input(&input)
        .unwrap()
        .run(Some(&mut doc))
        .unwrap();

    assert_eq!(
        report.applied.iter().copied().collect::<Vec<_>>(),
        vec![0, 2, 4, 5, 6, 7]
    );
    let shape = report.margin_for(4).unwrap();
    assert_eq!(shape.bounds.top, 90.0);
    assert_eq!(shape.bounds.left, 1220.0);
    assert_eq!(shape.bounds.width, 150.0);
    assert_eq!(shape.bounds.height, 50.0);
}

#[test]
fn test_unbounded_range_selects_every_artboard() {
    let mut doc = create_sample_document(3);
    let input = UserInput::for_tool(Tool::Margin)
        .with_selection(format!("1-{}", usize::MAX))
        .with_all("10");

    let report = Artinset::margin()
        .with_input(&input)
        .unwrap()
        .run(Some(&mut doc))
        .unwrap();

    assert_eq!(report.applied_count(), 3);
    assert_eq!(report.ignored, vec![3..=usize::MAX - 1]);
    assert_eq!(doc.layers[0].shape_count(), 3);
}
