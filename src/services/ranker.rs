use crate::models::ScoredItem;

/// Maximum number of recommendations returned
pub const MAX_RESULTS: usize = 5;

/// Orders by descending score and keeps the top [`MAX_RESULTS`]
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank(mut scored: Vec<ScoredItem>) -> Vec<ScoredItem> {
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(MAX_RESULTS);
    scored
}
