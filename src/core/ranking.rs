//! Ordering of recommendations.
//!
//! Scores closer than [`TIE_WINDOW`] are treated as equal and the higher
//! rated doctor goes first. This relation is NOT transitive: with scores
//! 80, 77 and 74 the first and last pair is compared by score while both
//! neighbouring pairs are compared by rating. `slice::sort_by` requires a
//! total order (and may panic when it detects a violation), so the list is
//! ordered with a plain stable insertion sort instead.

use crate::domain::model::Recommendation;
use std::cmp::Ordering;

pub const TIE_WINDOW: f64 = 5.0;

/// `Less` means `a` ranks before `b`.
pub fn compare_recommendations(a: &Recommendation, b: &Recommendation) -> Ordering {
    if (a.match_score - b.match_score).abs() < TIE_WINDOW {
        return b
            .doctor
            .rating
            .partial_cmp(&a.doctor.rating)
            .unwrap_or(Ordering::Equal);
    }
    b.match_score
        .partial_cmp(&a.match_score)
        .unwrap_or(Ordering::Equal)
}

/// Stable, deterministic ordering with [`compare_recommendations`].
/// Each item moves left past neighbours that rank strictly after it.
pub fn rank(recommendations: &mut [Recommendation]) {
    for i in 1..recommendations.len() {
        let mut j = i;
        while j > 0
            && compare_recommendations(&recommendations[j], &recommendations[j - 1])
                == Ordering::Less
        {
            recommendations.swap(j, j - 1);
            j -= 1;
        }
    }
}
