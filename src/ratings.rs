//! Dense user-item rating storage.
//!
//! A [`RatingMatrix`] holds every known rating, one row per user, and is
//! read-only once built. Labels are carried for input/output only and never
//! participate in computation.

use serde::{Deserialize, Serialize};

use crate::error::{RecomendarError, Result};

/// A dense user-item rating matrix (row-major storage, one row per user).
///
/// A cell value of `0.0` means "no rating given"; zero is never a valid
/// rating in this domain. The matrix is rectangular: every row has exactly
/// one entry per known item, validated at construction.
///
/// # Examples
///
/// ```
/// use recomendar::RatingMatrix;
///
/// let matrix = RatingMatrix::from_rows(vec![
///     vec![5.0, 0.0, 3.0],
///     vec![4.0, 0.0, 2.0],
/// ]).expect("rectangular rows");
///
/// assert_eq!(matrix.shape(), (2, 3));
/// assert!(matrix.is_rated(0, 0));
/// assert!(!matrix.is_rated(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingMatrix {
    data: Vec<f32>,
    n_users: usize,
    n_items: usize,
    user_labels: Vec<String>,
    item_labels: Vec<String>,
}

impl RatingMatrix {
    /// Creates a matrix from one rating row per user.
    ///
    /// Users and items keep their insertion order as index identity.
    /// Labels default to the positional index rendered as a string; attach
    /// external labels with [`RatingMatrix::with_labels`].
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty or if any row's length differs
    /// from the first row's.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(RecomendarError::empty_input("rating rows"));
        }

        let n_users = rows.len();
        let n_items = rows[0].len();

        let mut data = Vec::with_capacity(n_users * n_items);
        for (user, row) in rows.into_iter().enumerate() {
            if row.len() != n_items {
                return Err(RecomendarError::shape_mismatch(
                    &format!("row length for user {user}"),
                    n_items,
                    row.len(),
                ));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            n_users,
            n_items,
            user_labels: (0..n_users).map(|u| u.to_string()).collect(),
            item_labels: (0..n_items).map(|i| i.to_string()).collect(),
        })
    }

    /// Attaches external user and item labels.
    ///
    /// Row `i` corresponds to `user_labels[i]` and column `j` to
    /// `item_labels[j]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either label sequence's length does not match
    /// the matrix shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::RatingMatrix;
    ///
    /// let matrix = RatingMatrix::from_rows(vec![vec![5.0, 0.0]])
    ///     .expect("rectangular rows")
    ///     .with_labels(
    ///         vec!["ada".to_string()],
    ///         vec!["Alien".to_string(), "Brazil".to_string()],
    ///     )
    ///     .expect("label counts match");
    ///
    /// assert_eq!(matrix.user_label(0), "ada");
    /// assert_eq!(matrix.item_label(1), "Brazil");
    /// ```
    pub fn with_labels(
        mut self,
        user_labels: Vec<String>,
        item_labels: Vec<String>,
    ) -> Result<Self> {
        if user_labels.len() != self.n_users {
            return Err(RecomendarError::shape_mismatch(
                "user labels",
                self.n_users,
                user_labels.len(),
            ));
        }
        if item_labels.len() != self.n_items {
            return Err(RecomendarError::shape_mismatch(
                "item labels",
                self.n_items,
                item_labels.len(),
            ));
        }
        self.user_labels = user_labels;
        self.item_labels = item_labels;
        Ok(self)
    }

    /// Returns the shape as (`n_users`, `n_items`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_users, self.n_items)
    }

    /// Returns the number of users.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.n_users
    }

    /// Returns the number of items.
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Returns the rating user `user` gave item `item` (`0.0` = unrated).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn rating(&self, user: usize, item: usize) -> f32 {
        assert!(user < self.n_users && item < self.n_items);
        self.data[user * self.n_items + item]
    }

    /// Returns whether user `user` has given item `item` a rating.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn is_rated(&self, user: usize, item: usize) -> bool {
        self.rating(user, item) > 0.0
    }

    /// Returns one user's full rating row.
    ///
    /// # Panics
    ///
    /// Panics if `user` is out of bounds.
    #[must_use]
    pub fn user_row(&self, user: usize) -> &[f32] {
        let start = user * self.n_items;
        &self.data[start..start + self.n_items]
    }

    /// Returns the external label of user `user`.
    ///
    /// # Panics
    ///
    /// Panics if `user` is out of bounds.
    #[must_use]
    pub fn user_label(&self, user: usize) -> &str {
        &self.user_labels[user]
    }

    /// Returns the external label of item `item`.
    ///
    /// # Panics
    ///
    /// Panics if `item` is out of bounds.
    #[must_use]
    pub fn item_label(&self, item: usize) -> &str {
        &self.item_labels[item]
    }

    /// Returns all user labels, aligned to user index.
    #[must_use]
    pub fn user_labels(&self) -> &[String] {
        &self.user_labels
    }

    /// Returns all item labels, aligned to item index.
    #[must_use]
    pub fn item_labels(&self) -> &[String] {
        &self.item_labels
    }
}

#[cfg(test)]
#[path = "ratings_tests.rs"]
mod tests;
