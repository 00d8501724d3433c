use serde::{Deserialize, Serialize};

/// One band of the user-score ladder.
///
/// A rule matches when the score lies in `[min_score, max_score]` and the review
/// count lies in `[min_reviews, max_reviews]`, where `max_reviews == 0` leaves
/// the upper bound open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScoreRule {
    #[serde(rename = "Text")]
    pub name: String,
    #[serde(rename = "MinScore")]
    pub min_score: i32,
    #[serde(rename = "MaxScore")]
    pub max_score: i32,
    #[serde(rename = "MinReviews")]
    pub min_reviews: i32,
    #[serde(rename = "MaxReviews")]
    pub max_reviews: i32,
}

impl UserScoreRule {
    pub fn new(
        name: impl Into<String>,
        min_score: i32,
        max_score: i32,
        min_reviews: i32,
        max_reviews: i32,
    ) -> Self {
        Self {
            name: name.into(),
            min_score,
            max_score,
            min_reviews,
            max_reviews,
        }
    }

    pub fn matches(&self, score: i32, reviews: i32) -> bool {
        score >= self.min_score
            && score <= self.max_score
            && reviews >= self.min_reviews
            && (self.max_reviews == 0 || reviews <= self.max_reviews)
    }
}

impl Default for UserScoreRule {
    fn default() -> Self {
        Self::new(String::new(), 0, 100, 0, 0)
    }
}
