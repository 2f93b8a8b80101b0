//! Recomendar: user-based collaborative filtering in pure Rust.
//!
//! Recomendar answers one offline query: given a dense user-item rating
//! matrix and one target user, rank the items that user has not rated by
//! predicted preference. Similarity between users is cosine similarity
//! restricted to co-rated items, and predictions are similarity-weighted
//! averages of the other users' ratings.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! // One row per user, one column per item; 0.0 means "not rated".
//! let matrix = RatingMatrix::from_rows(vec![
//!     vec![5.0, 0.0, 3.0],
//!     vec![4.0, 0.0, 2.0],
//!     vec![1.0, 5.0, 0.0],
//! ]).expect("rectangular rows");
//!
//! let recommender = UserBasedRecommender::new(matrix);
//! let picks = recommender.recommend(0, 1).expect("valid target");
//!
//! assert_eq!(picks[0].item, 1);
//! ```
//!
//! # Modules
//!
//! - [`ratings`]: dense [`RatingMatrix`] storage with optional labels
//! - [`similarity`]: co-rated cosine similarity between users
//! - [`predict`]: similarity-weighted rating prediction per item
//! - [`recommend`]: ranking and the [`UserBasedRecommender`] façade
//! - [`data`]: loading labeled rating grids from comma-separated text
//! - [`error`]: crate error type and `Result` alias

pub mod data;
pub mod error;
pub mod predict;
pub mod prelude;
pub mod ratings;
pub mod recommend;
pub mod similarity;

pub use error::{RecomendarError, Result};
pub use ratings::RatingMatrix;
pub use recommend::{Recommendation, UserBasedRecommender};
