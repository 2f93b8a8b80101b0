//! Recommendation ranking for user-based collaborative filtering.
//!
//! # Algorithm
//!
//! - **User-Based**: co-rated cosine similarity between users, weighted
//!   rating prediction, top-N ranking of the target's unrated items
//!
//! # Quick Start
//!
//! ```
//! use recomendar::recommend::UserBasedRecommender;
//! use recomendar::RatingMatrix;
//!
//! let matrix = RatingMatrix::from_rows(vec![
//!     vec![5.0, 0.0, 3.0],
//!     vec![4.0, 0.0, 2.0],
//!     vec![1.0, 5.0, 0.0],
//! ]).expect("rectangular rows");
//!
//! let recommender = UserBasedRecommender::new(matrix);
//! let picks = recommender.recommend(0, 1).expect("valid target");
//!
//! // u0 has not rated item 1; u2 rated it 5.
//! assert_eq!(picks.len(), 1);
//! assert_eq!(picks[0].item, 1);
//! ```

pub mod user_based;

pub use user_based::UserBasedRecommender;

use serde::{Deserialize, Serialize};

/// A ranked recommendation: item index plus predicted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Positional item index into the rating matrix.
    pub item: usize,
    /// Predicted rating for the target user.
    pub score: f32,
}

/// Ranks the target user's unrated items by predicted score.
///
/// Items the target has already rated are never candidates. Candidates are
/// sorted by descending score with ties broken by ascending item index, so
/// the ranking is deterministic, then truncated to `top_n`. Fewer eligible
/// items than `top_n` returns all of them; `top_n == 0` returns an empty
/// vector.
///
/// # Examples
///
/// ```
/// use recomendar::recommend::rank_unrated;
///
/// let predictions = [4.0, 2.5, 3.5];
/// let target_ratings = [0.0, 0.0, 5.0];
///
/// let picks = rank_unrated(&predictions, &target_ratings, 5);
/// let items: Vec<usize> = picks.iter().map(|r| r.item).collect();
/// assert_eq!(items, vec![0, 1]);
/// ```
///
/// # Panics
///
/// Panics if `predictions` and `target_ratings` have different lengths.
#[must_use]
pub fn rank_unrated(
    predictions: &[f32],
    target_ratings: &[f32],
    top_n: usize,
) -> Vec<Recommendation> {
    assert_eq!(
        predictions.len(),
        target_ratings.len(),
        "predictions and target ratings must have the same length"
    );

    let mut candidates: Vec<Recommendation> = predictions
        .iter()
        .zip(target_ratings.iter())
        .enumerate()
        .filter(|&(_, (_, &rating))| rating == 0.0)
        .map(|(item, (&score, _))| Recommendation { item, score })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.item.cmp(&b.item))
    });
    candidates.truncate(top_n);

    candidates
}
