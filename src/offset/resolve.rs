//! Per-artboard offset resolution.

use super::{OffsetConfig, OffsetMode, Parity};
use crate::error::{Error, Result};
use crate::model::{EdgeOffsets, RegionIndex};

/// Check whether a region sits at an even one-based position.
///
/// Index 0 is artboard 1 (odd), index 1 is artboard 2 (even), and so on.
pub fn is_even_position(index: RegionIndex) -> bool {
    (index + 1) % 2 == 0
}

/// Resolve the four edge offsets, in points, for the region at `index`.
///
/// Steps apply in order, later ones overriding earlier ones:
/// 1. base offsets (uniform or per edge),
/// 2. parity override of left/right only,
/// 3. unit conversion of all four edges.
///
/// Values are neither clamped nor rounded. A resolved value that is not
/// finite is reported as [`Error::Config`].
pub fn resolve(config: &OffsetConfig, index: RegionIndex) -> Result<EdgeOffsets> {
    let mut offsets = match config.offsets {
        OffsetMode::Uniform(value) => EdgeOffsets::uniform(value),
        OffsetMode::PerEdge(edges) => edges,
    };

    if let Parity::Alternating(alt) = config.parity {
        if is_even_position(index) {
            offsets.left = alt.even_left;
            offsets.right = alt.even_right;
        } else {
            offsets.left = alt.odd_left;
            offsets.right = alt.odd_right;
        }
    }

    let factor = config.unit_factor();
    if !factor.is_finite() {
        return Err(Error::Config(format!(
            "points per inch must be a finite number, got {}",
            factor
        )));
    }
    let offsets = offsets.scaled(factor);

    for (edge, value) in offsets.edges() {
        if !value.is_finite() {
            return Err(Error::Config(format!(
                "{} offset for artboard {} is not a number",
                edge,
                index + 1
            )));
        }
    }

    log::debug!(
        "Artboard {}: offsets top={} left={} right={} bottom={}",
        index + 1,
        offsets.top,
        offsets.left,
        offsets.right,
        offsets.bottom
    );

    Ok(offsets)
}
