use serde::{Deserialize, Serialize};
use std::error::Error;
use strum_macros::Display as EnumDisplay;

pub type GameId = i64;

pub type GenericError = Box<dyn Error + Send + Sync>;

// Submodules for the categorizer's own records
pub mod autocat;
pub mod rule;

pub use autocat::AutoCatUserScore;
pub use rule::UserScoreRule;

/// Review statistics the game database keeps for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Share of positive reviews, 0..=100.
    pub positive_percentage: i32,
    pub total_reviews: i32,
}

impl ReviewStats {
    pub fn new(positive_percentage: i32, total_reviews: i32) -> Self {
        Self {
            positive_percentage,
            total_reviews,
        }
    }
}

/// A user-facing tag handed out by a category registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Outcome of categorizing a single game.
///
/// Only `Failure` is an error from the caller's point of view; the other
/// variants are expected outcomes that are counted separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum AutoCatResult {
    Success,
    Failure,
    NotInDatabase,
    Filtered,
}
