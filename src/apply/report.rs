//! Planned edits and run reports.

use crate::host::LayerHandle;
use crate::model::{Rectangle, RegionIndex};
use crate::offset::Tool;
use crate::transform::MarginShape;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// One document edit produced for a selected artboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    /// A replacement artboard boundary (padding)
    Boundary {
        /// Zero-based artboard index
        index: RegionIndex,
        /// Boundary before the run
        before: Rectangle,
        /// Boundary written by the run
        after: Rectangle,
    },

    /// A margin shape to draw (margin)
    Margin(MarginShape),
}

impl Artifact {
    /// Zero-based index of the artboard this edit belongs to.
    pub fn index(&self) -> RegionIndex {
        match self {
            Artifact::Boundary { index, .. } => *index,
            Artifact::Margin(shape) => shape.index,
        }
    }
}

/// Every edit a run will make, computed before the document is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Tool the plan was made for
    pub tool: Tool,

    /// Edits in artboard order
    pub artifacts: Vec<Artifact>,

    /// Selected index ranges the document does not have
    pub ignored: Vec<RangeInclusive<RegionIndex>>,
}

impl Plan {
    /// Check if the plan makes no edits.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Number of planned margin shapes with no positive area.
    pub fn degenerate_count(&self) -> usize {
        count_degenerate(&self.artifacts)
    }
}

/// Result of a committed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyReport {
    /// Tool that ran
    pub tool: Tool,

    /// Artboards that were modified or received a margin
    pub applied: BTreeSet<RegionIndex>,

    /// Selected index ranges the document does not have
    pub ignored: Vec<RangeInclusive<RegionIndex>>,

    /// Edits made, in artboard order
    pub artifacts: Vec<Artifact>,

    /// Layer holding the margin shapes, if one was created
    pub layer: Option<LayerHandle>,
}

impl ApplyReport {
    /// Build the report for a committed plan.
    pub fn new(plan: Plan, layer: Option<LayerHandle>) -> Self {
        Self {
            tool: plan.tool,
            applied: plan.artifacts.iter().map(Artifact::index).collect(),
            ignored: plan.ignored,
            artifacts: plan.artifacts,
            layer,
        }
    }

    /// Get the number of artboards affected.
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// Margin shape drawn for an artboard, if any.
    pub fn margin_for(&self, index: RegionIndex) -> Option<&MarginShape> {
        self.artifacts.iter().find_map(|a| match a {
            Artifact::Margin(shape) if shape.index == index => Some(shape),
            _ => None,
        })
    }

    /// New boundary written for an artboard, if any.
    pub fn boundary_for(&self, index: RegionIndex) -> Option<Rectangle> {
        self.artifacts.iter().find_map(|a| match a {
            Artifact::Boundary { index: i, after, .. } if *i == index => Some(*after),
            _ => None,
        })
    }

    /// Number of margin shapes with no positive area.
    pub fn degenerate_count(&self) -> usize {
        count_degenerate(&self.artifacts)
    }
}

fn count_degenerate(artifacts: &[Artifact]) -> usize {
    artifacts
        .iter()
        .filter(|a| matches!(a, Artifact::Margin(shape) if shape.bounds.is_degenerate()))
        .count()
}
