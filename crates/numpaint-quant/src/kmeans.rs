//! K-means color clustering
//!
//! Clusters the pixels of an RGBA raster into at most `max_colors`
//! centroids in RGB space. This is the hot path of the processor: the
//! assignment loop touches every pixel once per pass, so centroids stay
//! in one contiguous buffer and nothing allocates per pixel.
//!
//! The algorithm is Lloyd's iteration with uniform random seeding:
//!
//! 1. Pick `max_colors` pixels uniformly at random (replacement
//!    tolerated) as the initial centroids.
//! 2. Assign every pixel to the nearest centroid by squared RGB
//!    distance.
//! 3. Move each centroid to the rounded integer mean of its pixels;
//!    a centroid with no pixels is left where it is.
//! 4. Stop when no centroid moved, or after `max_iterations` passes.
//!
//! Duplicate initial centroids and empty clusters are tolerated; the
//! palette compactor drops unused clusters afterwards. Runs are
//! nondeterministic unless a seed is supplied.

use crate::error::QuantResult;
use numpaint_core::{CancelToken, Error, Raster, Rgb, alloc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Options for k-means clustering
#[derive(Debug, Clone)]
pub struct KMeansOptions {
    /// Maximum number of clusters (at least 2)
    pub max_colors: u32,
    /// Maximum number of assignment/update passes
    pub max_iterations: u32,
    /// Seed for reproducible runs; `None` draws one from the thread RNG
    pub seed: Option<u64>,
    /// Cooperative cancellation, polled once per pass
    pub cancel: Option<CancelToken>,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            max_colors: 48,
            max_iterations: 10,
            seed: None,
            cancel: None,
        }
    }
}

impl KMeansOptions {
    /// Options for a target cluster count, defaults otherwise.
    pub fn with_colors(max_colors: u32) -> Self {
        Self {
            max_colors,
            ..Default::default()
        }
    }
}

/// A clustering of the input pixels.
#[derive(Debug, Clone)]
pub struct Clustering {
    /// Candidate centroids, `max_colors` of them; some may be unused
    pub centroids: Vec<Rgb>,
    /// Per-pixel cluster index into `centroids`
    pub assignments: Vec<u32>,
}

/// Cluster the raster's pixels into at most `max_colors` RGB centroids.
///
/// # Errors
///
/// - [`Error::InvalidMaxColors`] if `options.max_colors < 2`.
/// - [`Error::AllocationFailed`] if a scratch buffer cannot be reserved.
/// - [`Error::Cancelled`] if `options.cancel` fires mid-run.
pub fn cluster_colors(raster: &Raster, options: &KMeansOptions) -> QuantResult<Clustering> {
    if options.max_colors < 2 {
        return Err(Error::InvalidMaxColors(options.max_colors).into());
    }

    let pixel_count = raster.pixel_count();
    let k = options.max_colors as usize;

    let seed = options.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    // Uniform sampling with replacement; coincident picks leave a
    // cluster empty, which the compactor filters later.
    let mut centroids = alloc::vec_with_capacity::<Rgb>(k)?;
    for _ in 0..k {
        centroids.push(raster.rgb_at(rng.random_range(0..pixel_count)));
    }

    let mut assignments = alloc::filled_vec(0u32, pixel_count)?;
    let mut sums = alloc::filled_vec([0u64; 3], k)?;
    let mut counts = alloc::filled_vec(0u64, k)?;

    for _ in 0..options.max_iterations {
        if let Some(token) = &options.cancel {
            token.check()?;
        }

        assign_pixels(raster, &centroids, &mut assignments);

        sums.fill([0; 3]);
        counts.fill(0);
        for (index, &cluster) in assignments.iter().enumerate() {
            let rgb = raster.rgb_at(index);
            let sum = &mut sums[cluster as usize];
            sum[0] += u64::from(rgb.r);
            sum[1] += u64::from(rgb.g);
            sum[2] += u64::from(rgb.b);
            counts[cluster as usize] += 1;
        }

        let mut moved = false;
        for cluster in 0..k {
            let n = counts[cluster];
            if n == 0 {
                continue;
            }
            let next = Rgb::new(
                rounded_mean(sums[cluster][0], n),
                rounded_mean(sums[cluster][1], n),
                rounded_mean(sums[cluster][2], n),
            );
            if next != centroids[cluster] {
                centroids[cluster] = next;
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }

    Ok(Clustering {
        centroids,
        assignments,
    })
}

/// Assign every pixel to the nearest centroid (ties go to the lowest
/// cluster index).
fn assign_pixels(raster: &Raster, centroids: &[Rgb], assignments: &mut [u32]) {
    for (index, slot) in assignments.iter_mut().enumerate() {
        let rgb = raster.rgb_at(index);
        let mut best = 0u32;
        let mut best_dist = u32::MAX;
        for (cluster, &centroid) in centroids.iter().enumerate() {
            let dist = rgb.distance_squared(centroid);
            if dist < best_dist {
                best_dist = dist;
                best = cluster as u32;
            }
        }
        *slot = best;
    }
}

#[inline]
fn rounded_mean(sum: u64, n: u64) -> u8 {
    ((sum + n / 2) / n) as u8
}
