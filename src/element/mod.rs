use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::EditorError;
use crate::input::Delta;

pub mod factory;
pub mod section;

pub use section::SectionType;

/// The closed set of element kinds that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Heading,
    Text,
    Image,
    Button,
    Container,
    List,
    Form,
}

impl ElementType {
    pub const ALL: [ElementType; 7] = [
        ElementType::Heading,
        ElementType::Text,
        ElementType::Image,
        ElementType::Button,
        ElementType::Container,
        ElementType::List,
        ElementType::Form,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Heading => "heading",
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Button => "button",
            ElementType::Container => "container",
            ElementType::List => "list",
            ElementType::Form => "form",
        }
    }

    /// Human-readable name for palette and layer listings.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::Heading => "Heading",
            ElementType::Text => "Text",
            ElementType::Image => "Image",
            ElementType::Button => "Button",
            ElementType::Container => "Container",
            ElementType::List => "List",
            ElementType::Form => "Form",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(ElementType::Heading),
            "text" => Ok(ElementType::Text),
            "image" => Ok(ElementType::Image),
            "button" => Ok(ElementType::Button),
            "container" => Ok(ElementType::Container),
            "list" => Ok(ElementType::List),
            "form" => Ok(ElementType::Form),
            other => Err(EditorError::UnknownElementType(other.to_owned())),
        }
    }
}

/// Canvas-relative element position in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position displaced by a drag delta.
    pub fn translated(self, delta: Delta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

/// One axis of an element's measured size: a pixel count or intrinsic "auto".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Px(i32),
    Auto,
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Px(v) => serializer.serialize_i32(*v),
            Dimension::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DimensionVisitor;

        impl Visitor<'_> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pixel count or the string \"auto\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v as i32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v as i32))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v.round() as i32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Dimension, E> {
                if v == "auto" {
                    Ok(Dimension::Auto)
                } else {
                    Err(E::custom(format!("unexpected dimension {v:?}")))
                }
            }
        }

        deserializer.deserialize_any(DimensionVisitor)
    }
}

/// Measured element size; absent on an element until first measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

/// A single placed object on the canvas.
///
/// `properties` is an open mapping whose recognized keys depend on `kind`;
/// the factory populates type-specific defaults and nothing enforces a schema
/// beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default = "default_z_index")]
    pub z_index: i32,
}

fn default_z_index() -> i32 {
    1
}

impl Element {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Merge a patch into the properties map; patch keys overwrite, all
    /// other keys are left untouched.
    pub fn merge_properties(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            self.properties.insert(key.clone(), value.clone());
        }
    }
}
