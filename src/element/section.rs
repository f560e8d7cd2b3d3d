use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::element::{Element, ElementType, Position};
use crate::error::EditorError;
use crate::id_generator::generate_id;
use crate::input::Delta;

/// The closed set of prefabricated section templates. Sections exist only
/// as creation templates; instantiating one copies its elements into the
/// document and the section itself is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    Features,
    Testimonials,
    Contact,
    Pricing,
    Gallery,
}

impl SectionType {
    pub const ALL: [SectionType; 6] = [
        SectionType::Hero,
        SectionType::Features,
        SectionType::Testimonials,
        SectionType::Contact,
        SectionType::Pricing,
        SectionType::Gallery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Testimonials => "testimonials",
            SectionType::Contact => "contact",
            SectionType::Pricing => "pricing",
            SectionType::Gallery => "gallery",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionType::Hero => "Hero Section",
            SectionType::Features => "Features Section",
            SectionType::Testimonials => "Testimonials Section",
            SectionType::Contact => "Contact Section",
            SectionType::Pricing => "Pricing Section",
            SectionType::Gallery => "Gallery Section",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(SectionType::Hero),
            "features" => Ok(SectionType::Features),
            "testimonials" => Ok(SectionType::Testimonials),
            "contact" => Ok(SectionType::Contact),
            "pricing" => Ok(SectionType::Pricing),
            "gallery" => Ok(SectionType::Gallery),
            other => Err(EditorError::UnknownSectionType(other.to_owned())),
        }
    }
}

/// One templated element: kind, template-relative position, properties.
struct TemplateElement {
    kind: ElementType,
    position: Position,
    properties: Value,
}

fn template(kind: SectionType) -> Vec<TemplateElement> {
    match kind {
        SectionType::Hero => vec![
            TemplateElement {
                kind: ElementType::Heading,
                position: Position::new(50, 50),
                properties: json!({
                    "text": "Welcome to Our Website",
                    "fontSize": "36px",
                    "color": "#000000",
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "700",
                }),
            },
            TemplateElement {
                kind: ElementType::Text,
                position: Position::new(50, 110),
                properties: json!({
                    "text": "We provide the best services for your needs. Check out what we offer below.",
                    "fontSize": "18px",
                    "color": "#4b5563",
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "400",
                }),
            },
            TemplateElement {
                kind: ElementType::Button,
                position: Position::new(50, 180),
                properties: json!({
                    "text": "Get Started",
                    "backgroundColor": "#3b82f6",
                    "color": "#ffffff",
                    "paddingX": 20,
                    "paddingY": 10,
                    "borderRadius": 4,
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "500",
                }),
            },
        ],
        SectionType::Features => vec![
            TemplateElement {
                kind: ElementType::Heading,
                position: Position::new(50, 50),
                properties: json!({
                    "text": "Our Features",
                    "fontSize": "30px",
                    "color": "#000000",
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "600",
                }),
            },
            TemplateElement {
                kind: ElementType::Container,
                position: Position::new(50, 100),
                properties: json!({
                    "width": "250px",
                    "height": "200px",
                    "backgroundColor": "#f3f4f6",
                    "borderRadius": 8,
                    "padding": 16,
                }),
            },
            TemplateElement {
                kind: ElementType::Container,
                position: Position::new(320, 100),
                properties: json!({
                    "width": "250px",
                    "height": "200px",
                    "backgroundColor": "#f3f4f6",
                    "borderRadius": 8,
                    "padding": 16,
                }),
            },
        ],
        SectionType::Testimonials => vec![
            TemplateElement {
                kind: ElementType::Heading,
                position: Position::new(50, 50),
                properties: json!({
                    "text": "What Our Clients Say",
                    "fontSize": "30px",
                    "color": "#000000",
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "600",
                }),
            },
            TemplateElement {
                kind: ElementType::Container,
                position: Position::new(50, 100),
                properties: json!({
                    "width": "300px",
                    "height": "180px",
                    "backgroundColor": "#ffffff",
                    "borderRadius": 8,
                    "padding": 20,
                    "boxShadow": "0 4px 6px rgba(0, 0, 0, 0.1)",
                }),
            },
        ],
        SectionType::Contact => vec![
            TemplateElement {
                kind: ElementType::Heading,
                position: Position::new(50, 50),
                properties: json!({
                    "text": "Contact Us",
                    "fontSize": "30px",
                    "color": "#000000",
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "600",
                }),
            },
            TemplateElement {
                kind: ElementType::Form,
                position: Position::new(50, 100),
                properties: json!({
                    "width": "400px",
                }),
            },
        ],
        SectionType::Pricing => vec![
            TemplateElement {
                kind: ElementType::Heading,
                position: Position::new(50, 50),
                properties: json!({
                    "text": "Our Pricing",
                    "fontSize": "30px",
                    "color": "#000000",
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "600",
                }),
            },
            TemplateElement {
                kind: ElementType::Container,
                position: Position::new(50, 100),
                properties: json!({
                    "width": "250px",
                    "height": "300px",
                    "backgroundColor": "#ffffff",
                    "borderRadius": 8,
                    "padding": 20,
                    "boxShadow": "0 4px 6px rgba(0, 0, 0, 0.1)",
                }),
            },
            TemplateElement {
                kind: ElementType::Container,
                position: Position::new(320, 100),
                properties: json!({
                    "width": "250px",
                    "height": "300px",
                    "backgroundColor": "#ffffff",
                    "borderRadius": 8,
                    "padding": 20,
                    "boxShadow": "0 4px 6px rgba(0, 0, 0, 0.1)",
                }),
            },
        ],
        SectionType::Gallery => {
            let mut elements = vec![TemplateElement {
                kind: ElementType::Heading,
                position: Position::new(50, 50),
                properties: json!({
                    "text": "Our Gallery",
                    "fontSize": "30px",
                    "color": "#000000",
                    "fontFamily": "Inter, sans-serif",
                    "fontWeight": "600",
                }),
            }];
            for (i, x) in [50, 220, 390].into_iter().enumerate() {
                elements.push(TemplateElement {
                    kind: ElementType::Image,
                    position: Position::new(x, 100),
                    properties: json!({
                        "src": "/placeholder.svg?height=150&width=150",
                        "alt": format!("Gallery image {}", i + 1),
                        "width": "150px",
                        "height": "150px",
                    }),
                });
            }
            elements
        }
    }
}

/// Instantiate a section template: deep-copy each templated element with a
/// fresh unique id and every position translated by `origin`.
pub fn instantiate_section(kind: SectionType, origin: Delta) -> Vec<Element> {
    template(kind)
        .into_iter()
        .map(|entry| Element {
            id: generate_id(),
            kind: entry.kind,
            position: entry.position.translated(origin),
            size: None,
            properties: as_object(entry.properties),
            is_locked: false,
            z_index: 1,
        })
        .collect()
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("section templates are object literals"),
    }
}
