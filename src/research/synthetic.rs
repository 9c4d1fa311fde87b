//! Synthetic 2-dimensional data sets.
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::Sample;


/// Draws `n_per_center` points from an isotropic Gaussian
/// around each of `centers`.
/// The label of a point is the index of its center.
pub fn blobs<R>(
    rng: &mut R,
    centers: &[[f64; 2]],
    n_per_center: usize,
    std: f64,
) -> Sample
    where R: Rng + ?Sized,
{
    let noise = normal(std);

    let mut rows = Vec::with_capacity(centers.len() * n_per_center);
    let mut target = Vec::with_capacity(centers.len() * n_per_center);
    for (label, center) in centers.iter().enumerate() {
        for _ in 0..n_per_center {
            let x = center[0] + noise.sample(rng);
            let y = center[1] + noise.sample(rng);
            rows.push([x, y]);
            target.push(label as f64);
        }
    }
    Sample::from_rows(&rows, target)
}


/// The XOR layout: four Gaussian clusters of `n_per_cluster` points
/// at `(±1, ±1)`.
/// Clusters in the 1st and 3rd quadrants are labelled `0`,
/// the others `1`.
/// No single axis-aligned threshold separates the two classes.
pub fn xor<R>(rng: &mut R, n_per_cluster: usize, std: f64) -> Sample
    where R: Rng + ?Sized,
{
    let noise = normal(std);

    let clusters = [
        ([ 1f64,  1f64], 0f64),
        ([-1f64,  1f64], 1f64),
        ([-1f64, -1f64], 0f64),
        ([ 1f64, -1f64], 1f64),
    ];

    let mut rows = Vec::with_capacity(4 * n_per_cluster);
    let mut target = Vec::with_capacity(4 * n_per_cluster);
    for (center, label) in clusters {
        for _ in 0..n_per_cluster {
            let x = center[0] + noise.sample(rng);
            let y = center[1] + noise.sample(rng);
            rows.push([x, y]);
            target.push(label);
        }
    }
    Sample::from_rows(&rows, target)
}


fn normal(std: f64) -> Normal<f64> {
    assert!(
        std.is_finite() && std >= 0f64,
        "The standard deviation must be finite and non-negative. got {std}"
    );
    Normal::new(0f64, std)
        .unwrap_or_else(|e| panic!("Invalid standard deviation {std}: {e}"))
}
