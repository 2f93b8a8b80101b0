//! Similarity-weighted rating prediction.
//!
//! Every other user's given ratings vote on every item, weighted by that
//! user's similarity to the target. One full pass over all users and items
//! per query; no pruning.

use crate::error::{RecomendarError, Result};
use crate::ratings::RatingMatrix;

/// Predicts the target user's rating for every item.
///
/// For each user `u != target` and each item `j` that `u` has rated,
/// `similarities[u] * rating` accumulates into item `j`'s numerator and
/// `similarities[u].abs()` into its weight. Each accumulated item is then
/// normalized by its weight. Items no other user rated keep a predicted
/// score of `0.0` rather than becoming an error or NaN.
///
/// Negative similarity entries contribute their sign to the numerator but
/// only their magnitude to the weight, so a strongly dissimilar user pulls
/// a prediction down instead of being ignored.
///
/// The result always has exactly one entry per item.
///
/// # Examples
///
/// ```
/// use recomendar::{predict, similarity, RatingMatrix};
///
/// let matrix = RatingMatrix::from_rows(vec![
///     vec![5.0, 0.0, 3.0],
///     vec![4.0, 0.0, 2.0],
///     vec![1.0, 5.0, 0.0],
/// ]).expect("rectangular rows");
///
/// let similarities = similarity::against_all(&matrix, 0).expect("valid target");
/// let predicted = predict::ratings_for(&matrix, 0, &similarities).expect("aligned inputs");
///
/// assert_eq!(predicted.len(), 3);
/// // Item 1 is rated only by u2 (rating 5), so its prediction is exactly 5.
/// assert_eq!(predicted[1], 5.0);
/// ```
///
/// # Errors
///
/// Returns an error if `target` is not a valid user index or if
/// `similarities` does not have one entry per user.
pub fn ratings_for(
    matrix: &RatingMatrix,
    target: usize,
    similarities: &[f32],
) -> Result<Vec<f32>> {
    if target >= matrix.n_users() {
        return Err(RecomendarError::TargetOutOfRange {
            index: target,
            n_users: matrix.n_users(),
        });
    }
    if similarities.len() != matrix.n_users() {
        return Err(RecomendarError::shape_mismatch(
            "similarity entries",
            matrix.n_users(),
            similarities.len(),
        ));
    }

    let n_items = matrix.n_items();
    let mut predicted = vec![0.0_f32; n_items];
    let mut weights = vec![0.0_f32; n_items];

    for user in 0..matrix.n_users() {
        if user == target {
            continue;
        }

        let similarity = similarities[user];
        for (item, &rating) in matrix.user_row(user).iter().enumerate() {
            if rating > 0.0 {
                predicted[item] += similarity * rating;
                weights[item] += similarity.abs();
            }
        }
    }

    for (prediction, &weight) in predicted.iter_mut().zip(weights.iter()) {
        if weight > 0.0 {
            *prediction /= weight;
        }
    }

    Ok(predicted)
}
