//! Rule ladders shipped with the categorizer.

use crate::model::UserScoreRule;

pub const STEAM_POSITIVE_4: &str = "Overwhelmingly Positive";
pub const STEAM_POSITIVE_3: &str = "Very Positive";
pub const STEAM_POSITIVE_2: &str = "Positive";
pub const STEAM_POSITIVE_1: &str = "Mostly Positive";
pub const STEAM_MIXED: &str = "Mixed";
pub const STEAM_NEGATIVE_1: &str = "Mostly Negative";
pub const STEAM_NEGATIVE_2: &str = "Negative";
pub const STEAM_NEGATIVE_3: &str = "Very Negative";
pub const STEAM_NEGATIVE_4: &str = "Overwhelmingly Negative";

/// Appends rules that reproduce the Steam store's review labels.
///
/// `rules` should generally be empty. Thresholds and order are part of the saved
/// profile format and must not change.
pub fn generate_steam_rules(rules: &mut Vec<UserScoreRule>) {
    rules.push(UserScoreRule::new(STEAM_POSITIVE_4, 95, 100, 500, 0));
    rules.push(UserScoreRule::new(STEAM_POSITIVE_3, 85, 100, 50, 0));
    rules.push(UserScoreRule::new(STEAM_POSITIVE_2, 80, 100, 1, 0));
    rules.push(UserScoreRule::new(STEAM_POSITIVE_1, 70, 79, 1, 0));
    rules.push(UserScoreRule::new(STEAM_MIXED, 40, 69, 1, 0));
    rules.push(UserScoreRule::new(STEAM_NEGATIVE_1, 20, 39, 1, 0));
    rules.push(UserScoreRule::new(STEAM_NEGATIVE_4, 0, 19, 500, 0));
    rules.push(UserScoreRule::new(STEAM_NEGATIVE_3, 0, 19, 50, 0));
    rules.push(UserScoreRule::new(STEAM_NEGATIVE_2, 0, 19, 1, 0));
}
