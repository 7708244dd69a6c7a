use crate::models::Answers;

/// Answer value meaning "no preference" for single and multi choice answers
const ANY: &str = "any";
/// Answer value meaning "nothing special" for lifestyle answers
const NONE: &str = "none";

/// Budget answer bands, cheapest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBand {
    Under50000,
    From50000To100000,
    From100000To200000,
    From200000To300000,
    Over300000,
}

impl BudgetBand {
    /// Parses the questionnaire value, `None` for anything unrecognized
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "under_50000" => Some(Self::Under50000),
            "50000_100000" => Some(Self::From50000To100000),
            "100000_200000" => Some(Self::From100000To200000),
            "200000_300000" => Some(Self::From200000To300000),
            "over_300000" => Some(Self::Over300000),
            _ => None,
        }
    }

    /// Highest acceptable price; the top band is open ended
    pub fn ceiling(self) -> Option<f64> {
        match self {
            Self::Under50000 => Some(50_000.0),
            Self::From50000To100000 => Some(100_000.0),
            Self::From100000To200000 => Some(200_000.0),
            Self::From200000To300000 => Some(300_000.0),
            Self::Over300000 => None,
        }
    }
}

/// Available floor width answer bands, in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceBand {
    Under150,
    From150To200,
    From200To250,
    Over250,
    Unknown,
}

impl SpaceBand {
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "under_150" => Some(Self::Under150),
            "150_200" => Some(Self::From150To200),
            "200_250" => Some(Self::From200To250),
            "over_250" => Some(Self::Over250),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn ceiling(self) -> Option<f64> {
        match self {
            Self::Under150 => Some(150.0),
            Self::From150To200 => Some(200.0),
            Self::From200To250 => Some(250.0),
            Self::Over250 | Self::Unknown => None,
        }
    }
}

/// Typed constraints derived from one set of answers
///
/// `None` and empty lists mean "unconstrained". No sentinel strings survive
/// past [`normalize`]. A `None` list entry is a requested value that can
/// never match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    pub budget_ceiling: Option<f64>,
    pub required_capacity: Option<u32>,
    pub space_ceiling: Option<f64>,
    pub material: Option<String>,
    pub styles: Vec<Option<String>>,
    pub colors: Vec<Option<String>>,
    pub lifestyle: Vec<Option<String>>,
}

impl Constraints {
    /// Same constraints with the footprint limit dropped
    pub fn without_space(&self) -> Self {
        Self {
            space_ceiling: None,
            ..self.clone()
        }
    }

    /// Same constraints with the material requirement dropped
    pub fn without_material(&self) -> Self {
        Self {
            material: None,
            ..self.clone()
        }
    }
}

fn required_capacity(value: &str) -> Option<u32> {
    match value {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "4" => Some(4),
        _ => None,
    }
}

fn without_sentinel(values: &[Option<String>], sentinel: &str) -> Vec<Option<String>> {
    values
        .iter()
        .filter(|value| value.as_deref() != Some(sentinel))
        .cloned()
        .collect()
}

/// Translates raw answers into [`Constraints`]
///
/// Total over its input: unrecognized band values are treated exactly like
/// missing ones.
pub fn normalize(answers: &Answers) -> Constraints {
    Constraints {
        budget_ceiling: answers
            .budget
            .as_deref()
            .and_then(BudgetBand::from_answer)
            .and_then(BudgetBand::ceiling),
        required_capacity: answers.capacity.as_deref().and_then(required_capacity),
        space_ceiling: answers
            .space
            .as_deref()
            .and_then(SpaceBand::from_answer)
            .and_then(SpaceBand::ceiling),
        material: answers
            .material
            .as_deref()
            .filter(|material| !material.is_empty() && *material != ANY)
            .map(str::to_string),
        styles: without_sentinel(&answers.style, ANY),
        colors: without_sentinel(&answers.color, ANY),
        lifestyle: without_sentinel(&answers.lifestyle, NONE),
    }
}
