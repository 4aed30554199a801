//! Synthetic descriptor sets for tests and benchmarks.
//!
//! All generators are seeded, so the same arguments always produce the same
//! descriptors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::descriptor::DescriptorSet;

/// Clip value applied to normalized SIFT histograms before renormalizing.
pub const SIFT_CLIP: f32 = 0.2;

/// Descriptors with coordinates drawn uniformly from `[0, 1)`.
pub fn random_descriptors(n: usize, dimension: usize, seed: u64) -> DescriptorSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dimension).map(|_| rng.random::<f32>()).collect())
        .collect()
}

/// Descriptors shaped like real SIFT output.
///
/// Each histogram is non-negative, L2-normalized, clipped at
/// [`SIFT_CLIP`] and normalized again, which is what a SIFT extractor does
/// to suppress large gradient magnitudes.
pub fn sift_like_descriptors(n: usize, dimension: usize, seed: u64) -> DescriptorSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            // Squaring skews the histogram towards a few dominant bins.
            let mut v: Vec<f32> = (0..dimension)
                .map(|_| {
                    let x = rng.random::<f32>();
                    x * x
                })
                .collect();
            l2_normalize(&mut v);
            for x in &mut v {
                *x = x.min(SIFT_CLIP);
            }
            l2_normalize(&mut v);
            v
        })
        .collect()
}

/// Descriptors scattered around `n_clusters` random centres.
///
/// Each point is a centre plus Gaussian noise with standard deviation
/// `cluster_std`, clamped to `[0, 1]`. Useful for checking that centroid
/// recomputation lands near the generating centres.
pub fn clustered_descriptors(
    n: usize,
    dimension: usize,
    n_clusters: usize,
    cluster_std: f32,
    seed: u64,
) -> DescriptorSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let n_clusters = n_clusters.max(1);

    let centers: DescriptorSet = (0..n_clusters)
        .map(|_| (0..dimension).map(|_| rng.random::<f32>()).collect())
        .collect();

    (0..n)
        .map(|i| {
            let center = &centers[i % n_clusters];
            center
                .iter()
                .map(|&c| {
                    // Box-Muller; 1 - u keeps the log argument in (0, 1].
                    let u1: f32 = 1.0 - rng.random::<f32>();
                    let u2: f32 = rng.random();
                    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
                    (c + z * cluster_std).clamp(0.0, 1.0)
                })
                .collect()
        })
        .collect()
}

fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 1e-12 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
