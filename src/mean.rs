//! Elementwise mean of a descriptor collection (cluster centroid).

use crate::descriptor::Descriptor;
use crate::error::{DescriptorError, Result};
use crate::simd;

/// Arithmetic mean of `descriptors`, each of length `dimension`.
///
/// Sums are kept in `f64` and rounded to `f32` once, so every coordinate of
/// the result lies within the min/max of its input column and a single
/// descriptor comes back unchanged. A NaN or infinite input coordinate is
/// reported as `NonFinite`.
pub fn mean_value(dimension: usize, descriptors: &[&[f32]]) -> Result<Descriptor> {
    if descriptors.is_empty() {
        return Err(DescriptorError::EmptyInput);
    }

    let mut sums = vec![0.0_f64; dimension];
    for d in descriptors {
        if d.len() != dimension {
            return Err(DescriptorError::mismatch(dimension, d.len()));
        }
        simd::accumulate(&mut sums, d);
    }

    // Finite inputs cannot overflow an f64 sum; only check when one did.
    if sums.iter().any(|s| !s.is_finite()) {
        if let Some(err) = descriptors
            .iter()
            .find_map(|d| DescriptorError::first_non_finite(d))
        {
            return Err(err);
        }
    }

    let n = descriptors.len() as f64;
    Ok(sums.into_iter().map(|s| (s / n) as f32).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_two() {
        let a = [1.0_f32, 0.0, 4.0];
        let b = [0.0_f32, 1.0, 2.0];
        let m = mean_value(3, &[&a, &b]).unwrap();
        assert_eq!(m, vec![0.5, 0.5, 3.0]);
    }

    #[test]
    fn single_descriptor_is_unchanged() {
        let a = [0.1_f32, -7.25, 1e-30];
        let m = mean_value(3, &[&a]).unwrap();
        assert_eq!(m, a.to_vec());
    }

    #[test]
    fn empty_collection_is_rejected() {
        assert_eq!(mean_value(3, &[]), Err(DescriptorError::EmptyInput));
    }

    #[test]
    fn non_finite_member_is_rejected() {
        let a = [1.0_f32, 2.0, 3.0];
        let b = [1.0_f32, f32::NEG_INFINITY, 3.0];
        assert_eq!(
            mean_value(3, &[&a, &b]),
            Err(DescriptorError::NonFinite { index: 1 })
        );
        // +inf and -inf in one column would otherwise average to NaN.
        let c = [1.0_f32, f32::INFINITY, 3.0];
        assert_eq!(
            mean_value(3, &[&c, &b]),
            Err(DescriptorError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn any_short_member_is_rejected() {
        let a = [1.0_f32, 2.0, 3.0];
        let b = [1.0_f32, 2.0];
        assert_eq!(
            mean_value(3, &[&a, &b]),
            Err(DescriptorError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
