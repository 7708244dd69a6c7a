use crate::models::Item;

use super::normalizer::Constraints;

pub const STYLE_WEIGHT: u8 = 30;
pub const COLOR_WEIGHT: u8 = 20;
pub const BUDGET_WEIGHT: u8 = 20;
pub const LIFESTYLE_WEIGHT: u8 = 20;
pub const CAPACITY_WEIGHT: u8 = 10;

/// Per-criterion points behind one match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub style: u8,
    pub color: u8,
    pub budget: u8,
    pub lifestyle: u8,
    pub capacity: u8,
}

impl ScoreBreakdown {
    /// Sum of all criteria, at most 100
    pub fn total(&self) -> u8 {
        self.style + self.color + self.budget + self.lifestyle + self.capacity
    }
}

/// Capability signal an item must carry to suit a lifestyle answer
pub fn lifestyle_signal(lifestyle: &str) -> Option<&'static str> {
    match lifestyle {
        "kids" => Some("kids_friendly"),
        "pets" => Some("pet_friendly"),
        "sleep" => Some("sofa_bed"),
        "storage" => Some("storage"),
        "reclining" => Some("reclining"),
        _ => None,
    }
}

/// Rounds half up; every input here is non-negative
fn round_half_up(points: f64) -> u8 {
    (points + 0.5).floor() as u8
}

/// `hits / requested` of `weight`, rounded
fn proportional(hits: usize, requested: usize, weight: u8) -> u8 {
    if requested == 0 {
        return 0;
    }
    round_half_up((hits as f64 / requested as f64) * f64::from(weight))
}

fn style_points(item: &Item, styles: &[Option<String>]) -> u8 {
    if styles.is_empty() {
        return STYLE_WEIGHT / 2;
    }
    let hits = styles
        .iter()
        .flatten()
        .filter(|style| item.styles.contains(style))
        .count();
    proportional(hits, styles.len(), STYLE_WEIGHT)
}

fn color_points(item: &Item, colors: &[Option<String>]) -> u8 {
    if colors.is_empty() {
        return COLOR_WEIGHT / 2;
    }
    let hits = colors
        .iter()
        .flatten()
        .filter(|color| item.color_groups().any(|group| group == color.as_str()))
        .count();
    proportional(hits, colors.len(), COLOR_WEIGHT)
}

fn budget_points(item: &Item, ceiling: Option<f64>) -> u8 {
    let Some(ceiling) = ceiling else {
        return BUDGET_WEIGHT;
    };
    let ratio = item.price / ceiling;
    if (0.6..=0.9).contains(&ratio) {
        20
    } else if ratio > 0.9 && ratio <= 1.0 {
        12
    } else if (0.4..0.6).contains(&ratio) {
        10
    } else if ratio < 0.4 {
        6
    } else {
        0
    }
}

fn lifestyle_points(item: &Item, lifestyle: &[Option<String>]) -> u8 {
    if lifestyle.is_empty() {
        return LIFESTYLE_WEIGHT / 2;
    }
    let wanted: Vec<&str> = lifestyle
        .iter()
        .flatten()
        .filter_map(|answer| lifestyle_signal(answer))
        .collect();
    let hits = wanted
        .iter()
        .filter(|signal| item.has_signal(signal))
        .count();
    // No recognised lifestyle answers scores zero rather than dividing by it
    proportional(hits, wanted.len(), LIFESTYLE_WEIGHT)
}

fn capacity_points(item: &Item, required: Option<u32>) -> u8 {
    let Some(required) = required else {
        return CAPACITY_WEIGHT / 2;
    };
    match item.capacity.checked_sub(required) {
        Some(0) => 10,
        Some(1) => 7,
        Some(2) => 4,
        _ => 0,
    }
}

/// Scores every criterion independently
pub fn breakdown(item: &Item, constraints: &Constraints) -> ScoreBreakdown {
    ScoreBreakdown {
        style: style_points(item, &constraints.styles),
        color: color_points(item, &constraints.colors),
        budget: budget_points(item, constraints.budget_ceiling),
        lifestyle: lifestyle_points(item, &constraints.lifestyle),
        capacity: capacity_points(item, constraints.required_capacity),
    }
}

/// Match score in 0..=100
pub fn score(item: &Item, constraints: &Constraints) -> u8 {
    breakdown(item, constraints).total()
}
