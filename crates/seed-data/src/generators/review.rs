//! Review content generation keyed by rating.

use rand::Rng;
use time::{Duration, OffsetDateTime};

/// Comment pools bucketed by star rating, worst first.
const COMMENTS: [&[&str]; 5] = [
    &[
        "Terrible product, complete waste of money.",
        "Worst purchase ever, avoid this product.",
        "Completely broken upon arrival.",
        "Poor quality, doesn't work at all.",
        "Waste of money, very disappointed.",
        "Defective product, terrible experience.",
        "Awful quality, would not recommend.",
        "Complete failure, avoid at all costs.",
        "Terrible experience, poor customer service.",
        "Worst product I've ever bought.",
        "Absolute garbage. Want my money back.",
        "Stay away from this product. Complete disappointment.",
    ],
    &[
        "Below average quality, not what I expected.",
        "Disappointed with the quality.",
        "Poor build quality, doesn't last long.",
        "Not worth the money, quality issues.",
        "Below expectations, has several problems.",
        "Poor quality control, defective item.",
        "Not satisfied, quality is lacking.",
        "Disappointing purchase, wouldn't recommend.",
        "Poor value for money.",
        "Quality issues, not as described.",
        "Had high hopes but was let down.",
        "Would not buy again. Too many issues.",
    ],
    &[
        "Average product, nothing special.",
        "Okay quality, could be better.",
        "Decent product, meets basic needs.",
        "Average experience, neither good nor bad.",
        "Fair quality, works but has room for improvement.",
        "Okay for the price, nothing exceptional.",
        "Average product, does the job.",
        "Decent quality, could be improved.",
        "Fair value, meets expectations.",
        "Average product, works as described.",
        "Nothing special, but does what it's supposed to.",
        "Mediocre quality. Expected better for the price.",
    ],
    &[
        "Very good product, minor issues but overall satisfied.",
        "Good quality, would recommend with minor reservations.",
        "Nice product, works as expected.",
        "Pretty good, meets most of my needs.",
        "Solid product, good value.",
        "Good quality, fast shipping.",
        "Works well, happy with the purchase.",
        "Nice product, minor improvements could be made.",
        "Good overall, would buy again.",
        "Quality product, satisfied with purchase.",
        "Very good, but could use some improvements.",
        "Solid product for the price. Happy with it.",
    ],
    &[
        "Excellent product! Highly recommend it.",
        "Amazing quality and fast delivery.",
        "Perfect! Exactly what I was looking for.",
        "Outstanding product, will definitely buy again.",
        "Love it! Great value for money.",
        "Fantastic quality and great customer service.",
        "Best purchase I've made in a while!",
        "Absolutely perfect, exceeded my expectations.",
        "Wonderful product, very satisfied!",
        "Top quality, highly recommended!",
        "This product is amazing! Worth every penny.",
        "Exceeded all my expectations. 5 stars!",
        "Perfect in every way. So happy with this purchase.",
    ],
];

/// Generates review ratings and matching comment text.
pub struct ReviewGenerator;

impl ReviewGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Picks a rating between 1 and 5.
    pub fn random_rating(&self, rng: &mut impl Rng) -> i32 {
        rng.gen_range(1..=5)
    }

    /// Picks a comment matching the rating bucket.
    pub fn comment_for(&self, rating: i32, rng: &mut impl Rng) -> &'static str {
        let bucket = COMMENTS[(rating.clamp(1, 5) - 1) as usize];
        bucket[rng.gen_range(0..bucket.len())]
    }

    /// Returns a timestamp up to `days_back` days in the past.
    pub fn random_created_at(&self, days_back: i64, rng: &mut impl Rng) -> OffsetDateTime {
        OffsetDateTime::now_utc() - Duration::days(rng.gen_range(0..days_back))
    }
}

impl Default for ReviewGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rating_bucket_has_comments() {
        for bucket in COMMENTS {
            assert!(!bucket.is_empty());
        }
    }

    #[test]
    fn comments_match_their_rating_bucket() {
        let review_gen = ReviewGenerator::new();
        let mut rng = rand::thread_rng();

        for rating in 1..=5 {
            let comment = review_gen.comment_for(rating, &mut rng);
            assert!(COMMENTS[(rating - 1) as usize].contains(&comment));
        }
    }

    #[test]
    fn ratings_stay_in_range() {
        let review_gen = ReviewGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let rating = review_gen.random_rating(&mut rng);
            assert!((1..=5).contains(&rating));
        }
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        let review_gen = ReviewGenerator::new();
        let mut rng = rand::thread_rng();

        let low = review_gen.comment_for(0, &mut rng);
        assert!(COMMENTS[0].contains(&low));
        let high = review_gen.comment_for(9, &mut rng);
        assert!(COMMENTS[4].contains(&high));
    }
}
