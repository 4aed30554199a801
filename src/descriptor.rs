//! The descriptor-family capability interface.
//!
//! A vocabulary or database engine is written once against
//! [`DescriptorFamily`] and instantiated per family, either generically
//! (`Vocabulary<F: DescriptorFamily>`, monomorphized) or with a
//! `&dyn DescriptorFamily` strategy object chosen at runtime. The trait is
//! object safe for the latter.
//!
//! # Contract
//!
//! Every operation validates descriptor lengths against
//! [`DescriptorFamily::dimension`] and reports violations as
//! [`DescriptorError::DimensionMismatch`]; nothing is truncated, padded or
//! defaulted. Operations are pure and reentrant, so one family value can be
//! shared across threads without locking.

use std::borrow::Cow;

use crate::error::{DescriptorError, Result};
use crate::mat::Mat32F;

/// One feature descriptor: `L` real coordinates.
pub type Descriptor = Vec<f32>;

/// The descriptors extracted from one observation, in detection order.
pub type DescriptorSet = Vec<Descriptor>;

/// Numeric primitives for one family of fixed-length real descriptors.
pub trait DescriptorFamily: Send + Sync {
    /// Family name including its length, e.g. `"SIFT-128"`.
    ///
    /// Distinct families must have distinct names: engines compare it
    /// against the name recorded in a persisted vocabulary.
    fn name(&self) -> Cow<'_, str>;

    /// Number of coordinates `L` in every descriptor of this family.
    fn dimension(&self) -> usize;

    /// Squared Euclidean distance between `a` and `b`.
    ///
    /// Symmetric, non-negative, and zero iff the descriptors are equal.
    /// Fails with [`DescriptorError::NonFinite`] if either operand holds a
    /// NaN or infinite coordinate.
    /// Must not allocate: this sits in the inner loop of every clustering
    /// pass.
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f64>;

    /// Elementwise mean of a non-empty set of descriptors.
    ///
    /// Fails with [`DescriptorError::EmptyInput`] on an empty slice and
    /// [`DescriptorError::NonFinite`] on a NaN or infinite coordinate.
    fn mean_value(&self, descriptors: &[&[f32]]) -> Result<Descriptor>;

    /// Text form used inside persisted vocabularies and databases.
    ///
    /// Fails with [`DescriptorError::NonFinite`] rather than write text
    /// that [`from_text`](Self::from_text) would reject.
    fn to_text(&self, descriptor: &[f32]) -> Result<String>;

    /// Inverse of [`to_text`](Self::to_text).
    ///
    /// Fails with [`DescriptorError::Parse`] on a wrong token count or a
    /// token that is not a finite number.
    fn from_text(&self, text: &str) -> Result<Descriptor>;

    /// Packs descriptors into an `N x L` matrix, row `j` = descriptor `j`.
    fn to_mat32f(&self, descriptors: &[Descriptor]) -> Result<Mat32F> {
        let mat = Mat32F::from_rows(self.dimension(), descriptors)?;
        tracing::debug!(family = %self.name(), rows = mat.rows(), "packed descriptors");
        Ok(mat)
    }

    /// Checks that `descriptor` has this family's length.
    fn check(&self, descriptor: &[f32]) -> Result<()> {
        let expected = self.dimension();
        if descriptor.len() != expected {
            return Err(DescriptorError::mismatch(expected, descriptor.len()));
        }
        Ok(())
    }

    /// Splits an extractor's flat row-major output into descriptors.
    ///
    /// `flat.len()` must be a multiple of `L`; an empty buffer yields an
    /// empty set. A family with `L == 0` is rejected as `InvalidParameter`.
    fn descriptors_from_flat(&self, flat: &[f32]) -> Result<DescriptorSet> {
        let dim = self.dimension();
        if dim == 0 {
            return Err(DescriptorError::InvalidParameter(
                "descriptor dimension must be greater than 0".to_string(),
            ));
        }
        if flat.len() % dim != 0 {
            // Expected length is the input rounded up to a whole number of rows.
            let expected = (flat.len() / dim + 1) * dim;
            return Err(DescriptorError::mismatch(expected, flat.len()));
        }
        Ok(flat.chunks_exact(dim).map(<[f32]>::to_vec).collect())
    }
}

impl<F: DescriptorFamily + ?Sized> DescriptorFamily for &F {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        (**self).distance(a, b)
    }

    fn mean_value(&self, descriptors: &[&[f32]]) -> Result<Descriptor> {
        (**self).mean_value(descriptors)
    }

    fn to_text(&self, descriptor: &[f32]) -> Result<String> {
        (**self).to_text(descriptor)
    }

    fn from_text(&self, text: &str) -> Result<Descriptor> {
        (**self).from_text(text)
    }

    fn to_mat32f(&self, descriptors: &[Descriptor]) -> Result<Mat32F> {
        (**self).to_mat32f(descriptors)
    }
}

impl<F: DescriptorFamily + ?Sized> DescriptorFamily for Box<F> {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        (**self).distance(a, b)
    }

    fn mean_value(&self, descriptors: &[&[f32]]) -> Result<Descriptor> {
        (**self).mean_value(descriptors)
    }

    fn to_text(&self, descriptor: &[f32]) -> Result<String> {
        (**self).to_text(descriptor)
    }

    fn from_text(&self, text: &str) -> Result<Descriptor> {
        (**self).from_text(text)
    }

    fn to_mat32f(&self, descriptors: &[Descriptor]) -> Result<Mat32F> {
        (**self).to_mat32f(descriptors)
    }
}
