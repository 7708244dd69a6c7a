use crate::models::{Answers, Item, RecommendationResult, ScoredItem};

use super::{
    filter::filter,
    normalizer::{normalize, Constraints},
    ranker::rank,
    scorer::score,
};

/// Fewest results accepted before constraints are loosened
pub const MIN_RESULTS: usize = 3;

/// Constraint loosening stages, tried in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationLevel {
    /// Answers exactly as given
    Strict,
    /// Footprint limit dropped
    Space,
    /// Footprint and material limits dropped
    Material,
}

impl RelaxationLevel {
    /// Constraints to use at this level, derived from the strict ones
    pub fn apply(self, strict: &Constraints) -> Constraints {
        match self {
            Self::Strict => strict.clone(),
            Self::Space => strict.without_space(),
            Self::Material => strict.without_space().without_material(),
        }
    }

    /// Notice shown to the shopper when this level produced the results
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Strict => None,
            Self::Space => Some("Showing close matches too (space requirement relaxed)"),
            Self::Material => Some("Showing close matches too"),
        }
    }

    /// The next, looser level; `None` once nothing is left to loosen
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Strict => Some(Self::Space),
            Self::Space => Some(Self::Material),
            Self::Material => None,
        }
    }
}

/// One filter, score and rank pass over the catalog
pub fn recommend(items: &[Item], constraints: &Constraints) -> Vec<ScoredItem> {
    let scored = filter(items, constraints)
        .into_iter()
        .map(|item| ScoredItem {
            match_score: score(item, constraints),
            item: item.clone(),
        })
        .collect();
    rank(scored)
}

/// Recommends items, loosening constraints when too few qualify
///
/// Each level re-runs the whole pass over the full catalog. The first
/// level yielding at least [`MIN_RESULTS`] items wins; the material level is
/// returned whatever it yields, including nothing.
pub fn recommend_with_relaxation(items: &[Item], answers: &Answers) -> RecommendationResult {
    let strict = normalize(answers);

    let mut level = RelaxationLevel::Strict;
    loop {
        let results = recommend(items, &level.apply(&strict));

        tracing::debug!(
            level = ?level,
            catalog_size = items.len(),
            result_count = results.len(),
            "Recommendation pass finished"
        );

        match level.next() {
            Some(looser) if results.len() < MIN_RESULTS => level = looser,
            _ => {
                return RecommendationResult {
                    results,
                    relaxed: level != RelaxationLevel::Strict,
                    message: level.message().map(str::to_string),
                }
            }
        }
    }
}
