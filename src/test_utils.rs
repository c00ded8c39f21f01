/// Shared fixtures for the clustering tests
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two tight, well-separated blobs of four points each.
/// Rows 0-3 belong to the cluster at the origin, rows 4-7 to the one at (6, 6).
pub fn make_two_blobs() -> Array2<f64> {
    ndarray::array![
        [0.0, 0.0],
        [0.2, 0.1],
        [0.1, 0.3],
        [0.3, 0.2],
        [6.0, 6.0],
        [6.2, 6.1],
        [6.1, 6.3],
        [5.9, 6.2],
    ]
}

/// The worked four-point dataset: two pairs, k = 2 converges to centroids
/// (0, 0.5) and (5, 5.5) with labels [0, 0, 1, 1].
pub fn four_point_example() -> Array2<f64> {
    ndarray::array![[0.0, 0.0], [0.0, 1.0], [5.0, 5.0], [5.0, 6.0]]
}

/// Jittered blobs around the given centers, `per_center` points each,
/// grouped by center in row order.
pub fn make_jittered_blobs(centers: &[[f64; 2]], per_center: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Array2::zeros((centers.len() * per_center, 2));
    for (c, center) in centers.iter().enumerate() {
        for i in 0..per_center {
            let row = c * per_center + i;
            points[[row, 0]] = center[0] + rng.gen_range(-0.3..0.3);
            points[[row, 1]] = center[1] + rng.gen_range(-0.3..0.3);
        }
    }
    points
}

/// Check that the first `block_size` rows share one label, the rest share
/// another, and the two differ.
pub fn check_split_labels(labels: &[usize], block_size: usize) -> bool {
    if labels.len() != block_size * 2 {
        return false;
    }
    let label_a = labels[0];
    let label_b = labels[block_size];
    labels[..block_size].iter().all(|&l| l == label_a)
        && labels[block_size..].iter().all(|&l| l == label_b)
        && label_a != label_b
}

/// Symmetry violation magnitude, for similarity-matrix assertions.
pub fn max_asymmetry(a: &Array2<f64>) -> f64 {
    let mut worst = 0.0f64;
    for (i, row) in a.axis_iter(Axis(0)).enumerate() {
        for (j, &v) in row.iter().enumerate() {
            worst = worst.max((v - a[[j, i]]).abs());
        }
    }
    worst
}
