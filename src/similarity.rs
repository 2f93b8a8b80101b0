//! Co-rated cosine similarity between users.
//!
//! Similarity is the cosine of two rating rows restricted to the positions
//! both users have actually rated. Positions where either side is unrated
//! are excluded from every running sum, which is not the same as treating
//! them as zero.

use crate::error::{RecomendarError, Result};
use crate::ratings::RatingMatrix;

/// Cosine similarity of two rating rows over their co-rated positions.
///
/// Only positions where both values are positive contribute. With no
/// co-rated position at all the result is defined as `0.0`, never NaN.
///
/// # Examples
///
/// ```
/// use recomendar::similarity;
///
/// let a = [5.0, 0.0, 3.0];
/// let b = [4.0, 0.0, 2.0];
///
/// // 26 / sqrt(34 * 20)
/// assert!((similarity::cosine(&a, &b) - 0.997_054).abs() < 1e-4);
/// assert_eq!(similarity::cosine(&a, &[0.0, 7.0, 0.0]), 0.0);
/// ```
///
/// # Panics
///
/// Panics if the rows have different lengths.
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "rating rows must have the same length");

    let mut sum_ab = 0.0_f32;
    let mut sum_a_sq = 0.0_f32;
    let mut sum_b_sq = 0.0_f32;

    for (&rating_a, &rating_b) in a.iter().zip(b.iter()) {
        if rating_a > 0.0 && rating_b > 0.0 {
            sum_ab += rating_a * rating_b;
            sum_a_sq += rating_a * rating_a;
            sum_b_sq += rating_b * rating_b;
        }
    }

    let denominator = sum_a_sq.sqrt() * sum_b_sq.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    sum_ab / denominator
}

/// Computes the similarity of the target user to every user in the matrix.
///
/// The returned vector has one entry per user, aligned to user index. The
/// target-vs-target entry is computed by the same formula as the rest, not
/// forced to `1.0` (a target with no positive rating is `0.0` even against
/// itself).
///
/// # Errors
///
/// Returns an error if `target` is not a valid user index.
pub fn against_all(matrix: &RatingMatrix, target: usize) -> Result<Vec<f32>> {
    if target >= matrix.n_users() {
        return Err(RecomendarError::TargetOutOfRange {
            index: target,
            n_users: matrix.n_users(),
        });
    }

    let target_row = matrix.user_row(target);
    Ok((0..matrix.n_users())
        .map(|user| cosine(target_row, matrix.user_row(user)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> RatingMatrix {
        RatingMatrix::from_rows(vec![
            vec![5.0, 0.0, 3.0],
            vec![4.0, 0.0, 2.0],
            vec![1.0, 5.0, 0.0],
        ])
        .expect("rectangular rows")
    }

    #[test]
    fn test_cosine_fixture_values() {
        let matrix = fixture();

        // u0 vs u1 co-rate items 0 and 2: 26 / (sqrt(34) * sqrt(20))
        let expected = 26.0 / (34.0_f32.sqrt() * 20.0_f32.sqrt());
        let s01 = cosine(matrix.user_row(0), matrix.user_row(1));
        assert!((s01 - expected).abs() < 1e-6);
        assert!((s01 - 0.997_054_5).abs() < 1e-4);

        // u0 vs u2 co-rate only item 0; a single co-rated pair is always 1.
        let s02 = cosine(matrix.user_row(0), matrix.user_row(2));
        assert!((s02 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_self_is_one_with_any_rating() {
        let row = [5.0, 0.0, 3.0];
        assert!((cosine(&row, &row) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_symmetry() {
        let a = [5.0, 0.0, 3.0, 1.0];
        let b = [4.0, 2.0, 0.0, 3.0];
        assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }

    #[test]
    fn test_cosine_no_overlap_is_zero() {
        let a = [5.0, 0.0, 3.0];
        let b = [0.0, 4.0, 0.0];
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_all_zero_row_is_zero_against_everything() {
        let zero = [0.0, 0.0, 0.0];
        let b = [4.0, 2.0, 1.0];
        assert_eq!(cosine(&zero, &b), 0.0);
        assert_eq!(cosine(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_within_unit_range() {
        let a = [5.0, 1.0, 3.0, 2.0];
        let b = [1.0, 5.0, 2.0, 4.0];
        let s = cosine(&a, &b);
        assert!(s > 0.0);
        assert!(s <= 1.0 + 1e-6);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_cosine_length_mismatch_panics() {
        cosine(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_against_all_includes_self_entry() {
        let matrix = fixture();
        let similarities = against_all(&matrix, 0).expect("valid target");

        assert_eq!(similarities.len(), 3);
        assert!((similarities[0] - 1.0).abs() < 1e-6);
        assert!((similarities[1] - 0.997_054_5).abs() < 1e-4);
        assert!((similarities[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_against_all_zero_target_row() {
        let matrix = RatingMatrix::from_rows(vec![vec![0.0, 0.0], vec![3.0, 4.0]])
            .expect("rectangular rows");
        let similarities = against_all(&matrix, 0).expect("valid target");

        // No positive rating anywhere in the target row, including vs self.
        assert_eq!(similarities, vec![0.0, 0.0]);
    }

    #[test]
    fn test_against_all_rejects_out_of_range_target() {
        let matrix = fixture();
        let err = against_all(&matrix, 3).expect_err("target 3 of 3 users");
        assert!(matches!(
            err,
            RecomendarError::TargetOutOfRange { index: 3, n_users: 3 }
        ));
    }
}
