//! Lloyd's algorithm, used as the comparison baseline for SymNMF.
//!
//! Seeding is deterministic: the first k input points, in input order, become
//! the initial centroids. Runs are therefore reproducible without a seed.

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::ClusterError;
use crate::linalg::squared_distance;
use crate::similarity::validate_points;

/// Convergence threshold on the summed centroid movement per iteration.
pub const CONVERGENCE_EPS: f64 = 0.001;
/// Iteration cap used when the caller does not supply one.
pub const DEFAULT_MAX_ITER: usize = 200;

/// A cluster center: current position plus the accumulator for the position
/// of the next iteration.
#[derive(Debug, Clone)]
struct Centroid {
    position: Array1<f64>,
    accumulator: Array1<f64>,
    attached: usize,
}

impl Centroid {
    fn new(position: Array1<f64>) -> Self {
        let accumulator = Array1::zeros(position.len());
        Self {
            position,
            accumulator,
            attached: 0,
        }
    }

    fn attach(&mut self, point: ArrayView1<f64>) {
        self.accumulator += &point;
        self.attached += 1;
    }

    /// Move to the mean of the attached points and reset the accumulator.
    /// Returns the Euclidean distance moved. A centroid with no attached
    /// points does not move.
    fn advance(&mut self) -> f64 {
        if self.attached == 0 {
            self.accumulator.fill(0.0);
            return 0.0;
        }
        let next = &self.accumulator / self.attached as f64;
        let moved = squared_distance(self.position.view(), next.view()).sqrt();
        self.position = next;
        self.accumulator.fill(0.0);
        self.attached = 0;
        moved
    }
}

/// Final centroid positions and per-point cluster labels.
#[derive(Debug, Clone)]
pub struct KmeansResult {
    /// k x d matrix, one centroid per row, in seeding order.
    pub centroids: Array2<f64>,
    /// Index of the nearest final centroid for each input point.
    pub labels: Vec<usize>,
}

/// Partition `points` into k clusters by iterative centroid refinement.
///
/// Stops when the summed centroid movement drops below
/// [`CONVERGENCE_EPS`] or after `max_iter` iterations.
pub fn fit(points: &Array2<f64>, k: usize, max_iter: usize) -> Result<KmeansResult, ClusterError> {
    validate_points(points)?;
    let n = points.nrows();
    if k <= 1 || k >= n {
        return Err(ClusterError::InvalidK(k));
    }
    if max_iter <= 1 || max_iter >= 1000 {
        return Err(ClusterError::InvalidIterationBound(max_iter));
    }

    let mut centroids: Vec<Centroid> = (0..k)
        .map(|i| Centroid::new(points.row(i).to_owned()))
        .collect();

    for iter in 0..max_iter {
        for point in points.axis_iter(Axis(0)) {
            let closest = nearest_centroid(point, &centroids);
            centroids[closest].attach(point);
        }
        let delta: f64 = centroids.iter_mut().map(Centroid::advance).sum();
        log::debug!("kmeans iteration {}: delta {:.6e}", iter, delta);
        if delta < CONVERGENCE_EPS {
            log::debug!("kmeans converged after {} iterations", iter + 1);
            break;
        }
    }

    let labels = points
        .axis_iter(Axis(0))
        .map(|point| nearest_centroid(point, &centroids))
        .collect();
    let mut positions = Array2::zeros((k, points.ncols()));
    for (i, centroid) in centroids.iter().enumerate() {
        positions.row_mut(i).assign(&centroid.position);
    }

    Ok(KmeansResult {
        centroids: positions,
        labels,
    })
}

/// Labels only, for callers that do not need the centroid positions.
pub fn fit_labels(
    points: &Array2<f64>,
    k: usize,
    max_iter: usize,
) -> Result<Vec<usize>, ClusterError> {
    Ok(fit(points, k, max_iter)?.labels)
}

// Ties resolve to the lowest centroid index: strict less-than keeps the
// first centroid that achieves the minimum.
fn nearest_centroid(point: ArrayView1<f64>, centroids: &[Centroid]) -> usize {
    let mut best = 0;
    let mut best_dist = squared_distance(point, centroids[0].position.view());
    for (idx, centroid) in centroids.iter().enumerate().skip(1) {
        let dist = squared_distance(point, centroid.position.view());
        if dist < best_dist {
            best = idx;
            best_dist = dist;
        }
    }
    best
}
