//! User-based collaborative filtering recommender.

use crate::error::Result;
use crate::predict;
use crate::ratings::RatingMatrix;
use crate::similarity;

use super::{rank_unrated, Recommendation};

/// Recommends unrated items to a user from other users' ratings.
///
/// One query runs three stages over the owned [`RatingMatrix`]: co-rated
/// cosine similarity of the target against every user, similarity-weighted
/// prediction of the target's rating for every item, and descending-score
/// ranking of the items the target has not rated. The similarity and
/// prediction vectors are recomputed per query and discarded; the matrix is
/// never mutated, so one recommender can serve concurrent queries by shared
/// reference.
///
/// # Examples
///
/// ```
/// use recomendar::prelude::*;
///
/// let matrix = RatingMatrix::from_rows(vec![
///     vec![5.0, 0.0, 3.0],
///     vec![4.0, 0.0, 2.0],
///     vec![1.0, 5.0, 0.0],
/// ]).expect("rectangular rows");
///
/// let recommender = UserBasedRecommender::new(matrix);
/// let picks = recommender.recommend(0, 1).expect("valid target");
///
/// assert_eq!(picks[0].item, 1);
/// assert_eq!(picks[0].score, 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct UserBasedRecommender {
    matrix: RatingMatrix,
}

impl UserBasedRecommender {
    /// Creates a recommender over a rating matrix.
    #[must_use]
    pub fn new(matrix: RatingMatrix) -> Self {
        Self { matrix }
    }

    /// Returns the underlying rating matrix.
    #[must_use]
    pub fn matrix(&self) -> &RatingMatrix {
        &self.matrix
    }

    /// Computes the target's similarity to every user.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not a valid user index.
    pub fn similarities(&self, target: usize) -> Result<Vec<f32>> {
        similarity::against_all(&self.matrix, target)
    }

    /// Predicts the target's rating for every item.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not a valid user index.
    pub fn predict(&self, target: usize) -> Result<Vec<f32>> {
        let similarities = self.similarities(target)?;
        predict::ratings_for(&self.matrix, target, &similarities)
    }

    /// Returns up to `top_n` unrated items for `target`, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not a valid user index.
    pub fn recommend(&self, target: usize, top_n: usize) -> Result<Vec<Recommendation>> {
        let predictions = self.predict(target)?;
        Ok(rank_unrated(
            &predictions,
            self.matrix.user_row(target),
            top_n,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecomendarError;

    fn fixture() -> RatingMatrix {
        RatingMatrix::from_rows(vec![
            vec![5.0, 0.0, 3.0],
            vec![4.0, 0.0, 2.0],
            vec![1.0, 5.0, 0.0],
        ])
        .expect("rectangular rows")
    }

    #[test]
    fn test_fixture_top_one() {
        let recommender = UserBasedRecommender::new(fixture());
        let picks = recommender.recommend(0, 1).expect("valid target");

        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].item, 1);
        assert_eq!(picks[0].score, 5.0);
    }

    #[test]
    fn test_recommend_skips_rated_items() {
        let recommender = UserBasedRecommender::new(fixture());
        let picks = recommender.recommend(0, 10).expect("valid target");

        // u0 rated items 0 and 2; only item 1 is eligible.
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].item, 1);
    }

    #[test]
    fn test_recommend_for_other_targets() {
        let recommender = UserBasedRecommender::new(fixture());

        let picks = recommender.recommend(2, 10).expect("valid target");
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].item, 2);

        let predictions = recommender.predict(2).expect("valid target");
        assert_eq!(predictions.len(), 3);
    }

    #[test]
    fn test_everything_rated_yields_empty() {
        let matrix = RatingMatrix::from_rows(vec![vec![5.0, 4.0], vec![3.0, 1.0]])
            .expect("rectangular rows");
        let recommender = UserBasedRecommender::new(matrix);

        assert!(recommender.recommend(0, 5).expect("valid target").is_empty());
    }

    #[test]
    fn test_all_zero_rater_has_no_influence() {
        let with_silent_user = RatingMatrix::from_rows(vec![
            vec![5.0, 0.0, 3.0],
            vec![4.0, 0.0, 2.0],
            vec![1.0, 5.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .expect("rectangular rows");
        let recommender = UserBasedRecommender::new(with_silent_user);

        let similarities = recommender.similarities(0).expect("valid target");
        assert_eq!(similarities[3], 0.0);

        let predictions = recommender.predict(0).expect("valid target");
        let baseline = UserBasedRecommender::new(fixture())
            .predict(0)
            .expect("valid target");
        assert_eq!(predictions, baseline);
    }

    #[test]
    fn test_out_of_range_target_fails() {
        let recommender = UserBasedRecommender::new(fixture());
        let err = recommender.recommend(5, 1).expect_err("target 5 of 3");
        assert!(matches!(err, RecomendarError::TargetOutOfRange { .. }));
    }
}
