use serde::{Deserialize, Serialize};

pub mod answers;
pub mod item;
pub mod questionnaire;

pub use answers::Answers;
pub use item::{ColorOption, Item, ItemImages, Size};
pub use questionnaire::{Question, QuestionOption, QuestionType, Questionnaire};

/// An item together with how well it matched one set of answers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    /// Integer in 0..=100
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Ranked recommendations returned to the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub results: Vec<ScoredItem>,
    /// True when constraints had to be loosened to fill the list
    pub relaxed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
