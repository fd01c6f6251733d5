//! Input abstraction for score columns.
//!
//! This module defines the `ScoreInput` trait which allows the batch
//! normalizers to accept standard slices and ndarray columns interchangeably.

use crate::primitives::errors::NormalizeError;
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

/// Trait for types that can be used as a numeric column.
pub trait ScoreInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_score_slice(&self) -> Result<&[T], NormalizeError>;
}

impl<T: Float> ScoreInput<T> for [T] {
    fn as_score_slice(&self) -> Result<&[T], NormalizeError> {
        Ok(self)
    }
}

impl<T: Float> ScoreInput<T> for Vec<T> {
    fn as_score_slice(&self) -> Result<&[T], NormalizeError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> ScoreInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_score_slice(&self) -> Result<&[T], NormalizeError> {
        self.as_slice().ok_or_else(|| {
            NormalizeError::InvalidInput("ndarray column must be contiguous in memory".to_string())
        })
    }
}
