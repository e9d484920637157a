//! Document model interface.
//!
//! The engine never touches a drawing application directly. Everything it
//! reads or writes goes through [`DocumentModel`], implemented here for the
//! in-memory [`Document`].
//!
//! # Example
//!
//! ```
//! use artinset::host::DocumentModel;
//! use artinset::model::{Document, Rectangle};
//!
//! let mut doc = Document::with_artboards([Rectangle::new(100.0, 0.0, 200.0, 0.0)]);
//! assert_eq!(doc.region_count(), 1);
//!
//! let layer = doc.create_layer("Margin")?;
//! let shape = doc.draw_rectangle(layer, 80.0, 20.0, 160.0, 60.0)?;
//! doc.set_shape_as_guide(shape)?;
//! # Ok::<(), artinset::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::model::{CmykColor, Document, Layer, Rectangle, RegionIndex, Shape, Stroke};
use serde::{Deserialize, Serialize};

/// Handle to a layer created through [`DocumentModel::create_layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerHandle(pub usize);

/// Handle to a shape created through [`DocumentModel::draw_rectangle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeHandle {
    /// Owning layer
    pub layer: LayerHandle,
    /// Position of the shape within its layer
    pub shape: usize,
}

/// Operations the engine needs from a host document.
pub trait DocumentModel {
    /// Get the number of artboards.
    fn region_count(&self) -> usize;

    /// Get the boundary of the artboard at `index`.
    fn region_boundary(&self, index: RegionIndex) -> Result<Rectangle>;

    /// Replace the boundary of the artboard at `index`.
    fn set_region_boundary(&mut self, index: RegionIndex, rect: Rectangle) -> Result<()>;

    /// Create a new content layer.
    fn create_layer(&mut self, name: &str) -> Result<LayerHandle>;

    /// Remove a layer created during the current run.
    fn remove_layer(&mut self, layer: LayerHandle) -> Result<()>;

    /// Draw an unfilled rectangle on `layer`.
    fn draw_rectangle(
        &mut self,
        layer: LayerHandle,
        top: f64,
        left: f64,
        width: f64,
        height: f64,
    ) -> Result<ShapeHandle>;

    /// Name a shape.
    fn set_shape_name(&mut self, shape: ShapeHandle, name: &str) -> Result<()>;

    /// Turn a shape into a non-printing guide.
    fn set_shape_as_guide(&mut self, shape: ShapeHandle) -> Result<()>;

    /// Stroke a shape.
    fn set_shape_stroke(&mut self, shape: ShapeHandle, color: CmykColor, width: f64)
        -> Result<()>;
}

impl Document {
    fn layer_mut(&mut self, layer: LayerHandle) -> Result<&mut Layer> {
        self.layers
            .get_mut(layer.0)
            .ok_or_else(|| Error::Host(format!("no layer with handle {}", layer.0)))
    }

    fn shape_mut(&mut self, handle: ShapeHandle) -> Result<&mut Shape> {
        self.layer_mut(handle.layer)?
            .shapes
            .get_mut(handle.shape)
            .ok_or_else(|| {
                Error::Host(format!(
                    "no shape {} on layer {}",
                    handle.shape, handle.layer.0
                ))
            })
    }
}

impl DocumentModel for Document {
    fn region_count(&self) -> usize {
        self.artboards.len()
    }

    fn region_boundary(&self, index: RegionIndex) -> Result<Rectangle> {
        self.artboards
            .get(index)
            .map(|a| a.rect)
            .ok_or(Error::RegionOutOfRange(index, self.artboards.len()))
    }

    fn set_region_boundary(&mut self, index: RegionIndex, rect: Rectangle) -> Result<()> {
        let count = self.artboards.len();
        let artboard = self
            .artboards
            .get_mut(index)
            .ok_or(Error::RegionOutOfRange(index, count))?;
        artboard.rect = rect;
        Ok(())
    }

    fn create_layer(&mut self, name: &str) -> Result<LayerHandle> {
        self.layers.push(Layer::new(name));
        Ok(LayerHandle(self.layers.len() - 1))
    }

    /// Removing a layer shifts the handles of every layer after it, so only
    /// the most recently created layer can be removed.
    fn remove_layer(&mut self, layer: LayerHandle) -> Result<()> {
        if layer.0 + 1 != self.layers.len() {
            return Err(Error::Host(format!(
                "layer {} is not the most recent layer",
                layer.0
            )));
        }
        self.layers.pop();
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        layer: LayerHandle,
        top: f64,
        left: f64,
        width: f64,
        height: f64,
    ) -> Result<ShapeHandle> {
        let target = self.layer_mut(layer)?;
        target.shapes.push(Shape::rectangle(top, left, width, height));
        Ok(ShapeHandle {
            layer,
            shape: target.shapes.len() - 1,
        })
    }

    fn set_shape_name(&mut self, shape: ShapeHandle, name: &str) -> Result<()> {
        self.shape_mut(shape)?.name = Some(name.to_string());
        Ok(())
    }

    fn set_shape_as_guide(&mut self, shape: ShapeHandle) -> Result<()> {
        self.shape_mut(shape)?.guide = true;
        Ok(())
    }

    fn set_shape_stroke(
        &mut self,
        shape: ShapeHandle,
        color: CmykColor,
        width: f64,
    ) -> Result<()> {
        self.shape_mut(shape)?.stroke = Some(Stroke { color, width });
        Ok(())
    }
}
