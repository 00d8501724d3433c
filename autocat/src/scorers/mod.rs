pub mod wilson;

pub use wilson::*;

use crate::model::ReviewStats;

/// Score the rules are evaluated against.
///
/// The Wilson adjustment only applies when the game has reviews; otherwise the
/// raw percentage is used even if `use_wilson_score` is set.
pub fn effective_score(stats: &ReviewStats, use_wilson_score: bool) -> i32 {
    if use_wilson_score && stats.total_reviews > 0 {
        wilson_score(stats.positive_percentage, stats.total_reviews)
    } else {
        stats.positive_percentage
    }
}
