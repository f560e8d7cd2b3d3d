use serde_json::{json, Map, Value};

use crate::element::{Element, ElementType, Position};
use crate::id_generator::generate_id;

/// Create a new element of the given kind at the given position, with a
/// fresh unique id and the fixed default properties for that kind.
pub fn create_element(kind: ElementType, position: Position) -> Element {
    Element {
        id: generate_id(),
        kind,
        position,
        size: None,
        properties: default_properties(kind),
        is_locked: false,
        z_index: 1,
    }
}

/// The default property set for each element kind. Deterministic: two
/// elements of the same kind start from identical properties.
pub fn default_properties(kind: ElementType) -> Map<String, Value> {
    let value = match kind {
        ElementType::Heading => json!({
            "text": "Heading Text",
            "fontSize": "24px",
            "color": "#000000",
            "fontFamily": "Inter, sans-serif",
            "fontWeight": "600",
        }),
        ElementType::Text => json!({
            "text": "This is a paragraph of text. Click to edit.",
            "fontSize": "16px",
            "color": "#000000",
            "fontFamily": "Inter, sans-serif",
            "fontWeight": "400",
        }),
        ElementType::Image => json!({
            "src": "",
            "alt": "Image description",
            "width": "250px",
            "height": "auto",
        }),
        ElementType::Button => json!({
            "text": "Click Me",
            "backgroundColor": "#3b82f6",
            "color": "#ffffff",
            "paddingX": 16,
            "paddingY": 8,
            "borderRadius": 4,
            "fontFamily": "Inter, sans-serif",
            "fontWeight": "500",
        }),
        ElementType::Container => json!({
            "width": "300px",
            "height": "200px",
            "backgroundColor": "#f3f4f6",
            "borderRadius": 0,
            "padding": 16,
            "margin": 0,
        }),
        ElementType::List => json!({
            "listStyle": "disc",
            "items": ["Item 1", "Item 2", "Item 3"],
            "fontFamily": "Inter, sans-serif",
        }),
        ElementType::Form => json!({
            "width": "100%",
            "fontFamily": "Inter, sans-serif",
        }),
    };

    match value {
        Value::Object(map) => map,
        _ => unreachable!("default property sets are object literals"),
    }
}
