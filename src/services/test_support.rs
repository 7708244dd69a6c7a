//! Item builders shared by the engine's unit tests.

use serde_json::Map;

use crate::models::{ColorOption, Item, Size};

pub struct ItemBuilder {
    item: Item,
}

/// Starts an item with neutral defaults: 100,000 yen, two seats, fabric
pub fn item(id: &str) -> ItemBuilder {
    ItemBuilder {
        item: Item {
            id: id.to_string(),
            name: format!("Sofa {id}"),
            maker: "Test Works".to_string(),
            description: String::new(),
            price: 100_000.0,
            capacity: 2,
            size: None,
            material: "fabric".to_string(),
            styles: Vec::new(),
            colors: Vec::new(),
            default_color_index: 0,
            features: Vec::new(),
            tags: Vec::new(),
            composition_image: None,
            images: None,
            extra: Map::new(),
        },
    }
}

impl ItemBuilder {
    pub fn price(mut self, price: f64) -> Self {
        self.item.price = price;
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.item.capacity = capacity;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.item.size = Some(Size {
            width: Some(width),
            ..Size::default()
        });
        self
    }

    pub fn material(mut self, material: &str) -> Self {
        self.item.material = material.to_string();
        self
    }

    pub fn styles(mut self, styles: &[&str]) -> Self {
        self.item.styles = styles.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn color_groups(mut self, groups: &[&str]) -> Self {
        self.item.colors = groups
            .iter()
            .map(|group| ColorOption {
                color_group: group.to_string(),
                name: group.to_string(),
                hex: None,
                image_path: None,
            })
            .collect();
        self
    }

    pub fn features(mut self, features: &[&str]) -> Self {
        self.item.features = features.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.item.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}
