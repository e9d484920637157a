//! Plain text summaries of documents.

use crate::model::{Document, Rectangle};

/// Describe a document's artboards and layers, one line each.
pub fn summary(doc: &Document) -> String {
    let mut lines = Vec::new();

    if let Some(ref name) = doc.metadata.name {
        lines.push(format!("Document: {}", name));
    }

    lines.push(format!("Artboards: {}", doc.artboard_count()));
    for (index, artboard) in doc.artboards.iter().enumerate() {
        lines.push(format!(
            "  {:>3}  {}  {}",
            index + 1,
            artboard.name,
            describe_rect(&artboard.rect)
        ));
    }

    if !doc.layers.is_empty() {
        lines.push(format!("Layers: {}", doc.layers.len()));
        for layer in &doc.layers {
            lines.push(format!(
                "  {}  {} shapes ({} guides)",
                layer.name,
                layer.shape_count(),
                layer.guide_count()
            ));
        }
    }

    lines.join("\n")
}

fn describe_rect(rect: &Rectangle) -> String {
    format!(
        "[{}, {}, {}, {}]  {} x {} pt",
        fmt_num(rect.left),
        fmt_num(rect.top),
        fmt_num(rect.right),
        fmt_num(rect.bottom),
        fmt_num(rect.width()),
        fmt_num(rect.height())
    )
}

/// Format a number without trailing zeros (e.g., 612, 0.5, 12.25).
fn fmt_num(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
