//! The fixed demo scene: a document with annotated trigger buttons.

use popover_dom::{Document, NodeId, Rect, Viewport};

/// Measured size assigned to a popover once "painted".
pub const POPOVER_WIDTH: f64 = 200.0;
pub const POPOVER_HEIGHT: f64 = 100.0;

/// Build the demo document: three trigger buttons at known positions, one
/// of them with an empty title to exercise the headerless variant.
pub fn build(viewport: Viewport) -> (Document, Vec<NodeId>) {
    let mut doc = Document::with_viewport(viewport);
    let body = doc.body();

    let specs: [(&str, &str, Rect); 3] = [
        (
            "Save",
            "Write the document to disk.",
            Rect::new(100.0, 200.0, 150.0, 40.0),
        ),
        (
            "Delete",
            "Remove the document permanently.",
            Rect::new(320.0, 200.0, 150.0, 40.0),
        ),
        (
            "",
            "No header on this one.",
            Rect::new(viewport.width - 80.0, 200.0, 60.0, 40.0),
        ),
    ];

    let mut triggers = Vec::new();
    for (title, content, rect) in specs {
        let button = doc.create_element_in(body, "button");
        doc.set_attribute(button, "data-title", title);
        doc.set_attribute(button, "data-content", content);
        doc.set_layout_rect(button, rect);
        triggers.push(button);
    }

    (doc, triggers)
}

/// Assign the popover its measured size at its styled position, the way a
/// layout pass would after attachment.
pub fn measure_popover(doc: &mut Document, popover: NodeId) {
    let left = doc.style(popover).px("left").unwrap_or(0) as f64;
    let top = doc.style(popover).px("top").unwrap_or(0) as f64;
    doc.set_layout_rect(popover, Rect::new(left, top, POPOVER_WIDTH, POPOVER_HEIGHT));
}
