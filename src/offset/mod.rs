//! Offset configuration and per-artboard resolution.

mod config;
mod resolve;

pub use config::{
    AlternatingOffsets, OffsetConfig, OffsetMode, Parity, RenderAs, Tool, Unit,
    MARGIN_POINTS_PER_INCH, PADDING_POINTS_PER_INCH,
};
pub use resolve::{is_even_position, resolve};
