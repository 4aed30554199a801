//! featvec: descriptor-family primitives for visual-vocabulary retrieval.
//!
//! A bag-of-words image retrieval stack (vocabulary tree, TF-IDF weighting,
//! inverted index) is generic over the kind of local feature it indexes.
//! All it needs from a descriptor family is a handful of numeric
//! operations, collected here in [`DescriptorFamily`]:
//!
//! - [`distance`](DescriptorFamily::distance): squared Euclidean distance,
//!   used for every descriptor-to-centroid assignment;
//! - [`mean_value`](DescriptorFamily::mean_value): centroid recomputation;
//! - [`to_text`](DescriptorFamily::to_text) /
//!   [`from_text`](DescriptorFamily::from_text): per-descriptor encoding
//!   inside persisted vocabularies;
//! - [`to_mat32f`](DescriptorFamily::to_mat32f): dense `N x L` bulk view;
//! - [`dimension`](DescriptorFamily::dimension): the fixed length `L`.
//!
//! [`FSift`] implements the family for float SIFT descriptors (128 or 64
//! coordinates).
//!
//! # Critical Nuances
//!
//! ## Silent corruption
//!
//! The engine above cannot tell a wrong distance from a right one. A
//! descriptor of the wrong length that gets truncated or zero-padded still
//! clusters, still scores, and quietly degrades every query. Every entry
//! point therefore checks lengths against `L` and returns
//! [`DescriptorError::DimensionMismatch`] instead.
//!
//! ## Squared distances
//!
//! Distances are not square-rooted. Ranking by squared L2 is identical to
//! ranking by L2, and the root would be paid once per descriptor per
//! centroid per clustering pass. Sums are taken in `f64`, so the distance is
//! zero only for identical descriptors.
//!
//! ## Text precision
//!
//! The text encoding writes the shortest decimal that reads back to the
//! same `f32`, so persisted vocabularies reload bit-identical centroids.

pub mod config;
pub mod descriptor;
pub mod distance;
pub mod error;
pub mod mat;
pub mod mean;
pub mod sift;
pub mod simd;
pub mod synthetic;
pub mod text;

// Re-exports
pub use config::{ConfigError, DescriptorConfig, FamilyKind};
pub use descriptor::{Descriptor, DescriptorFamily, DescriptorSet};
pub use error::{DescriptorError, ParseFailure, Result};
pub use mat::Mat32F;
pub use sift::{FSift, SIFT_128, SIFT_64};
