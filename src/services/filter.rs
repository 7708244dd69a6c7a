use crate::models::Item;

use super::normalizer::Constraints;

/// Extra width allowed beyond the shopper's space band, in centimetres
pub const SPACE_TOLERANCE: f64 = 10.0;

/// Whether an item satisfies every hard constraint
pub fn passes(item: &Item, constraints: &Constraints) -> bool {
    if let Some(ceiling) = constraints.budget_ceiling {
        if item.price > ceiling {
            return false;
        }
    }

    if let Some(required) = constraints.required_capacity {
        if item.capacity < required {
            return false;
        }
    }

    // Items without a recorded width are never excluded on space
    if let (Some(ceiling), Some(width)) = (constraints.space_ceiling, item.width()) {
        if width > ceiling + SPACE_TOLERANCE {
            return false;
        }
    }

    if let Some(material) = constraints.material.as_deref() {
        if item.material != material {
            return false;
        }
    }

    true
}

/// Keeps the items that satisfy the hard constraints, in catalog order
pub fn filter<'a>(items: &'a [Item], constraints: &Constraints) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| passes(item, constraints))
        .collect()
}
