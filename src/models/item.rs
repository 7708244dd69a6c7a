use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A furniture item from the catalog
///
/// The engine only reads price, capacity, width, material, styles, colors,
/// features and tags. Everything else is carried through untouched so the
/// hosting layer can render it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub maker: String,
    #[serde(default)]
    pub description: String,
    /// Price in the catalog currency's smallest display unit (yen)
    pub price: f64,
    /// Seating count
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub colors: Vec<ColorOption>,
    #[serde(default)]
    pub default_color_index: usize,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<ItemImages>,
    /// Catalog fields this crate does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outer dimensions, all in centimetres
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// One purchasable color variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorOption {
    /// Coarse group used for preference matching (e.g. "gray")
    pub color_group: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemImages {
    #[serde(default)]
    pub angles: Vec<String>,
}

impl Item {
    /// Declared width, if the catalog recorded one
    pub fn width(&self) -> Option<f64> {
        self.size.as_ref().and_then(|size| size.width)
    }

    /// Color groups in catalog order
    pub fn color_groups(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|color| color.color_group.as_str())
    }

    /// Whether a capability signal appears in either `features` or `tags`
    pub fn has_signal(&self, signal: &str) -> bool {
        self.features
            .iter()
            .chain(self.tags.iter())
            .any(|candidate| candidate == signal)
    }
}
