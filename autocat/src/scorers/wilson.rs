//! Lower bound of the Wilson score interval.
//!
//! With `p` the observed share of positive reviews, `n` the number of reviews and
//! `z` the normal quantile for the wanted confidence:
//!
//! ```text
//! w = (p + z²/2n − z·sqrt((p(1−p) + z²/4n) / n)) / (1 + z²/n)
//! ```
//!
//! See <http://www.evanmiller.org/how-not-to-sort-by-average-rating.html>.

/// Normal quantile for 95 % confidence (0.975).
pub const WILSON_Z: f64 = 1.96;

/// Lower bound in `0.0..=1.0` for `positive_percentage` out of `total_reviews`.
///
/// `total_reviews` must be positive.
pub fn wilson_lower_bound(positive_percentage: i32, total_reviews: i32) -> f64 {
    let z = WILSON_Z;
    let p = f64::from(positive_percentage) / 100.0;
    let n = f64::from(total_reviews);

    (p + z * z / (2.0 * n) - z * ((p * (1.0 - p) + z * z / (4.0 * n)) / n).sqrt())
        / (1.0 + z * z / n)
}

/// Wilson lower bound scaled back to a 0..=100 score.
///
/// Midpoints round to the even neighbour so that saved profiles keep
/// categorizing games exactly as before.
pub fn wilson_score(positive_percentage: i32, total_reviews: i32) -> i32 {
    round_score(100.0 * wilson_lower_bound(positive_percentage, total_reviews))
}

fn round_score(score: f64) -> i32 {
    // saturating cast, -0.0 lands on 0
    score.round_ties_even() as i32
}
