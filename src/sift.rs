//! SIFT-style descriptor family.

use std::borrow::Cow;
use std::fmt;

use crate::descriptor::{Descriptor, DescriptorFamily};
use crate::error::{DescriptorError, Result};
use crate::{distance, mean, text};

/// Standard SIFT descriptor length (4x4 cells x 8 orientation bins).
pub const SIFT_128: usize = 128;

/// Compact SIFT layout (4x4 cells x 4 orientation bins).
pub const SIFT_64: usize = 64;

/// Float SIFT descriptors compared by squared Euclidean distance.
///
/// The descriptor length is carried by the value and checked by every
/// operation. `FSift` is `Copy` and holds no state beyond it, so one value
/// can be handed to any number of worker threads.
///
/// ```rust
/// use featvec::{DescriptorFamily, FSift};
///
/// let sift = FSift::sift128();
/// let mut a = vec![0.0_f32; 128];
/// let mut b = vec![0.0_f32; 128];
/// a[0] = 1.0;
/// b[1] = 1.0;
/// assert_eq!(sift.distance(&a, &b).unwrap(), 2.0);
/// assert_eq!(&sift.mean_value(&[&a, &b]).unwrap()[..3], &[0.5, 0.5, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FSift {
    dimension: usize,
}

impl FSift {
    /// The 128-dimensional SIFT family.
    pub fn sift128() -> Self {
        Self {
            dimension: SIFT_128,
        }
    }

    /// The 64-dimensional SIFT family.
    pub fn sift64() -> Self {
        Self { dimension: SIFT_64 }
    }

    /// A SIFT-style family with a non-standard length.
    pub fn with_dimension(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(DescriptorError::InvalidParameter(
                "descriptor dimension must be greater than 0".to_string(),
            ));
        }
        tracing::debug!(dimension, "created SIFT descriptor family");
        Ok(Self { dimension })
    }
}

impl Default for FSift {
    fn default() -> Self {
        Self::sift128()
    }
}

impl fmt::Display for FSift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIFT-{}", self.dimension)
    }
}

impl DescriptorFamily for FSift {
    fn name(&self) -> Cow<'_, str> {
        match self.dimension {
            SIFT_128 => Cow::Borrowed("SIFT-128"),
            SIFT_64 => Cow::Borrowed("SIFT-64"),
            _ => Cow::Owned(self.to_string()),
        }
    }

    #[inline]
    fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        distance::squared_l2(self.dimension, a, b)
    }

    fn mean_value(&self, descriptors: &[&[f32]]) -> Result<Descriptor> {
        mean::mean_value(self.dimension, descriptors)
    }

    fn to_text(&self, descriptor: &[f32]) -> Result<String> {
        text::encode(self.dimension, descriptor)
    }

    fn from_text(&self, text: &str) -> Result<Descriptor> {
        text::decode(self.dimension, text)
    }
}
