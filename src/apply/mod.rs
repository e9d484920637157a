//! Batch application of offsets across a document's artboards.
//!
//! A run happens in two phases. [`plan`] reads every selected artboard,
//! resolves its offsets and computes the resulting edit without touching
//! the document; any error there leaves the document unmodified.
//! [`commit`] then writes the plan, undoing its own writes if the document
//! rejects one part-way through.
//!
//! # Example
//!
//! ```
//! use artinset::apply::apply;
//! use artinset::model::{Document, Rectangle};
//! use artinset::{OffsetConfig, SelectionSpec, Tool};
//!
//! let mut doc = Document::with_artboards([Rectangle::new(100.0, 0.0, 200.0, 0.0)]);
//! let config = OffsetConfig::for_tool(Tool::Margin).uniform(20.0);
//!
//! let report = apply(&mut doc, &SelectionSpec::All, &config, Tool::Margin)?;
//! assert_eq!(report.applied_count(), 1);
//! assert_eq!(doc.layers[0].shapes[0].width, 160.0);
//! # Ok::<(), artinset::Error>(())
//! ```

mod report;

pub use report::{ApplyReport, Artifact, Plan};

use crate::error::Result;
use crate::host::{DocumentModel, LayerHandle};
use crate::model::CmykColor;
use crate::offset::{resolve, OffsetConfig, RenderAs, Tool};
use crate::selection::{describe_ranges, SelectionSpec};
use crate::transform::{transform, MarginShape, Transformed, MARGIN_STROKE_WIDTH};

/// Name of the layer margin shapes are drawn on.
pub const MARGIN_LAYER_NAME: &str = "Margin";

/// Plan and commit a run in one step.
pub fn apply<D: DocumentModel + ?Sized>(
    doc: &mut D,
    selection: &SelectionSpec,
    config: &OffsetConfig,
    tool: Tool,
) -> Result<ApplyReport> {
    let plan = plan(doc, selection, config, tool)?;
    commit(doc, plan)
}

/// Compute every edit for the selected artboards without modifying `doc`.
///
/// Artboards are visited in document order; the first artboard that cannot
/// be read or resolved aborts the run.
pub fn plan<D: DocumentModel + ?Sized>(
    doc: &D,
    selection: &SelectionSpec,
    config: &OffsetConfig,
    tool: Tool,
) -> Result<Plan> {
    let count = doc.region_count();

    let ignored = selection.out_of_range(count);
    if !ignored.is_empty() {
        log::warn!(
            "Ignoring artboards {}: document has {} artboards",
            describe_ranges(&ignored),
            count
        );
    }

    let mut artifacts = Vec::new();
    for index in (0..count).filter(|i| selection.includes(*i)) {
        let rect = doc.region_boundary(index)?;
        let offsets = resolve(config, index)?;

        let artifact = match transform(tool, rect, &offsets, index, config.render_as) {
            Transformed::Boundary(after) => Artifact::Boundary {
                index,
                before: rect,
                after,
            },
            Transformed::Inset(shape) => {
                if shape.bounds.is_degenerate() {
                    log::warn!(
                        "Margin for artboard {} is degenerate ({} x {}): offsets exceed the artboard",
                        index + 1,
                        shape.bounds.width,
                        shape.bounds.height
                    );
                }
                Artifact::Margin(shape)
            }
        };
        artifacts.push(artifact);
    }

    log::debug!(
        "Planned {} {} edits over {} artboards",
        artifacts.len(),
        tool,
        count
    );

    Ok(Plan {
        tool,
        artifacts,
        ignored,
    })
}

/// Write a plan to the document.
///
/// Padding replaces artboard boundaries; margin creates the
/// [`MARGIN_LAYER_NAME`] layer and one shape per artboard. A plan with no
/// edits writes nothing. If the document rejects a write, earlier writes
/// from this commit are undone before the error is returned.
pub fn commit<D: DocumentModel + ?Sized>(doc: &mut D, plan: Plan) -> Result<ApplyReport> {
    let layer = match plan.tool {
        Tool::Padding => {
            write_boundaries(doc, &plan.artifacts)?;
            None
        }
        Tool::Margin => draw_margins(doc, &plan.artifacts)?,
    };

    let report = ApplyReport::new(plan, layer);
    log::info!(
        "Applied {} to {} artboards",
        report.tool,
        report.applied_count()
    );
    Ok(report)
}

fn write_boundaries<D: DocumentModel + ?Sized>(doc: &mut D, artifacts: &[Artifact]) -> Result<()> {
    let mut written = Vec::new();

    for artifact in artifacts {
        let Artifact::Boundary {
            index,
            before,
            after,
        } = artifact
        else {
            continue;
        };

        if let Err(err) = doc.set_region_boundary(*index, *after) {
            log::warn!(
                "Failed to update artboard {}: {}; restoring {} artboards",
                index + 1,
                err,
                written.len()
            );
            for (restore, rect) in written.iter().rev() {
                if let Err(restore_err) = doc.set_region_boundary(*restore, *rect) {
                    log::error!("Failed to restore artboard {}: {}", restore + 1, restore_err);
                }
            }
            return Err(err);
        }
        written.push((*index, *before));
    }

    Ok(())
}

fn draw_margins<D: DocumentModel + ?Sized>(
    doc: &mut D,
    artifacts: &[Artifact],
) -> Result<Option<LayerHandle>> {
    let shapes: Vec<&MarginShape> = artifacts
        .iter()
        .filter_map(|a| match a {
            Artifact::Margin(shape) => Some(shape),
            Artifact::Boundary { .. } => None,
        })
        .collect();

    if shapes.is_empty() {
        log::info!("No artboards selected, skipping margin layer");
        return Ok(None);
    }

    let layer = doc.create_layer(MARGIN_LAYER_NAME)?;
    for shape in shapes {
        if let Err(err) = draw_margin(doc, layer, shape) {
            log::warn!(
                "Failed to draw margin for artboard {}: {}; removing margin layer",
                shape.index + 1,
                err
            );
            if let Err(remove_err) = doc.remove_layer(layer) {
                log::error!("Failed to remove margin layer: {}", remove_err);
            }
            return Err(err);
        }
    }

    Ok(Some(layer))
}

fn draw_margin<D: DocumentModel + ?Sized>(
    doc: &mut D,
    layer: LayerHandle,
    shape: &MarginShape,
) -> Result<()> {
    let bounds = shape.bounds;
    let handle = doc.draw_rectangle(layer, bounds.top, bounds.left, bounds.width, bounds.height)?;
    doc.set_shape_name(handle, &shape.name)?;

    match shape.render_as {
        RenderAs::Guide => doc.set_shape_as_guide(handle),
        RenderAs::Rectangle => doc.set_shape_stroke(handle, CmykColor::BLACK, MARGIN_STROKE_WIDTH),
    }
}
