//! Checked squared-Euclidean distance between descriptors.
//!
//! The distance is deliberately left squared: clustering and matching only
//! compare distances, so the square root would be wasted work in the hot
//! assignment loops.

use crate::error::{DescriptorError, Result};
use crate::simd;

/// Squared Euclidean distance between two descriptors of length `dimension`.
///
/// Returns `DimensionMismatch` if either operand has another length and
/// `NonFinite` if either holds a NaN or infinite coordinate. The result is
/// symmetric, non-negative, and exactly zero iff `a == b` elementwise. Does
/// not allocate.
#[inline]
pub fn squared_l2(dimension: usize, a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != dimension {
        return Err(DescriptorError::mismatch(dimension, a.len()));
    }
    if b.len() != dimension {
        return Err(DescriptorError::mismatch(dimension, b.len()));
    }
    let d = simd::squared_l2(a, b);
    // Finite f32 operands always give a finite f64 sum, so only a
    // non-finite result needs the coordinate scan.
    if !d.is_finite() {
        if let Some(err) = DescriptorError::first_non_finite(a)
            .or_else(|| DescriptorError::first_non_finite(b))
        {
            return Err(err);
        }
    }
    Ok(d)
}
