//! Rendering documents and run reports for output.

mod json;
mod text;

pub use json::{plan_to_json, report_to_json, to_json, JsonFormat};
pub use text::summary;
