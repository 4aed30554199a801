//! Unchecked numeric kernels for descriptor coordinates.
//!
//! These functions assume their inputs already have matching lengths; the
//! checked entry points live in [`crate::distance`] and [`crate::mean`].
//! Accumulation happens in `f64` so that squared differences of `f32`
//! coordinates neither underflow to zero nor overflow.
//!
//! The main loops process four lanes per iteration, which LLVM turns into
//! packed instructions on targets with SIMD support.
//!
//! ```rust
//! use featvec::simd::squared_l2;
//!
//! let a = [1.0_f32, 0.0, 0.0];
//! let b = [0.0_f32, 1.0, 0.0];
//! assert_eq!(squared_l2(&a, &b), 2.0);
//! ```

const LANES: usize = 4;

/// Squared Euclidean distance, accumulated in `f64`.
///
/// Both slices must have the same length. Extra elements of the longer slice
/// are ignored.
#[inline]
#[must_use]
pub fn squared_l2(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut acc = [0.0_f64; LANES];
    let a_chunks = a.chunks_exact(LANES);
    let b_chunks = b.chunks_exact(LANES);
    let a_tail = a_chunks.remainder();
    let b_tail = b_chunks.remainder();

    for (ca, cb) in a_chunks.zip(b_chunks) {
        for lane in 0..LANES {
            let d = f64::from(ca[lane]) - f64::from(cb[lane]);
            acc[lane] += d * d;
        }
    }

    let mut sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for (x, y) in a_tail.iter().zip(b_tail) {
        let d = f64::from(*x) - f64::from(*y);
        sum += d * d;
    }
    sum
}

/// Adds `v` elementwise into the `f64` accumulator `sums`.
#[inline]
pub fn accumulate(sums: &mut [f64], v: &[f32]) {
    debug_assert_eq!(sums.len(), v.len());
    for (s, x) in sums.iter_mut().zip(v) {
        *s += f64::from(*x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_l2_basic() {
        let a = [0.0_f32, 0.0];
        let b = [3.0_f32, 4.0];
        assert_eq!(squared_l2(&a, &b), 25.0);
    }

    #[test]
    fn test_squared_l2_covers_tail() {
        // 4 full lanes + 3 tail elements
        let a = [1.0_f32; 7];
        let b = [0.0_f32; 7];
        assert_eq!(squared_l2(&a, &b), 7.0);
    }

    #[test]
    fn test_squared_l2_tiny_difference_is_nonzero() {
        let a = [f32::MIN_POSITIVE];
        let b = [0.0_f32];
        assert!(squared_l2(&a, &b) > 0.0);
    }

    #[test]
    fn test_squared_l2_large_values_do_not_overflow() {
        let a = [f32::MAX];
        let b = [-f32::MAX];
        assert!(squared_l2(&a, &b).is_finite());
    }

    #[test]
    fn test_accumulate() {
        let mut sums = [0.0_f64; 3];
        accumulate(&mut sums, &[1.0, 2.0, 3.0]);
        accumulate(&mut sums, &[0.5, 0.5, 0.5]);
        assert_eq!(sums, [1.5, 2.5, 3.5]);
    }
}
