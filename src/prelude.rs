//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::error::{RecomendarError, Result};
pub use crate::ratings::RatingMatrix;
pub use crate::recommend::{Recommendation, UserBasedRecommender};
