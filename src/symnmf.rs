//! Symmetric non-negative matrix factorization.
//!
//! Factors a normalized similarity matrix W (n x n, symmetric, non-negative)
//! into W ~ H * H^T with H >= 0 (n x k), by iterative multiplicative updates.

use ndarray::Array2;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::error::ClusterError;
use crate::linalg::{all_finite, argmax_rows, frobenius_diff_squared, multiplicative_update};

/// Convergence threshold on the squared Frobenius norm of H_new - H_old.
pub const EPSILON: f64 = 1e-4;
/// Iteration cap for the update loop.
pub const MAX_ITER: usize = 300;
/// Seed used by the CLI entry points for reproducible runs.
pub const DEFAULT_SEED: u64 = 1234;

// Guard added to the update denominator. Does not change the fixed point
// where the true denominator is positive.
const DIV_GUARD: f64 = 1e-9;

/// Convergence parameters for the update loop.
#[derive(Debug, Clone)]
pub struct SymnmfConfig {
    pub max_iter: usize,
    pub tol: f64,
}

impl Default for SymnmfConfig {
    fn default() -> Self {
        Self {
            max_iter: MAX_ITER,
            tol: EPSILON,
        }
    }
}

/// Draw the initial factor matrix H0.
///
/// Each entry is uniform in [0, 2 * sqrt(mean(W) / k)], from an explicitly
/// seeded generator so comparable runs are reproducible.
pub fn initialize_h(w: &Array2<f64>, k: usize, seed: u64) -> Result<Array2<f64>, ClusterError> {
    let n = w.nrows();
    if k <= 1 || k >= n {
        return Err(ClusterError::InvalidK(k));
    }
    let mean = w.mean().unwrap_or(0.0);
    let upper = 2.0 * (mean / k as f64).sqrt();
    if !upper.is_finite() || upper <= 0.0 {
        return Err(ClusterError::NumericalInstability(
            "degenerate similarity matrix: mean entry is not positive".to_string(),
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Array2::random_using((n, k), Uniform::new(0.0, upper), &mut rng))
}

/// Run the multiplicative-update loop with default convergence parameters.
pub fn symnmf(h0: Array2<f64>, w: &Array2<f64>) -> Result<Array2<f64>, ClusterError> {
    optimize(h0, w, &SymnmfConfig::default())
}

/// Run the multiplicative-update loop until delta < tol or max_iter.
///
/// Per iteration, entrywise:
///
/// ```text
/// H <- H * (W*H) / (H*(H^T*H) + eps)
/// ```
///
/// The denominator associates as H*(H^T*H) so every intermediate is n x k or
/// k x k; the value is identical to (H*H^T)*H without the n x n product.
pub fn optimize(
    h0: Array2<f64>,
    w: &Array2<f64>,
    config: &SymnmfConfig,
) -> Result<Array2<f64>, ClusterError> {
    validate_inputs(&h0, w)?;

    let mut h = h0;
    for iter in 0..config.max_iter {
        let wh = w.dot(&h);
        let hth = h.t().dot(&h);
        let denom = h.dot(&hth);
        let h_new = multiplicative_update(&h, &wh, &denom, DIV_GUARD);
        if !all_finite(&h_new) {
            return Err(ClusterError::NumericalInstability(format!(
                "non-finite value in H at iteration {}",
                iter
            )));
        }
        let delta = frobenius_diff_squared(&h_new, &h);
        h = h_new;
        log::debug!("symnmf iteration {}: delta {:.6e}", iter, delta);
        if delta < config.tol {
            log::debug!("symnmf converged after {} iterations", iter + 1);
            break;
        }
    }
    Ok(h)
}

/// Cluster label per point: the column with the largest entry in its row of
/// H, ties resolving to the lowest column index.
pub fn cluster_labels(h: &Array2<f64>) -> Vec<usize> {
    argmax_rows(h)
}

fn validate_inputs(h0: &Array2<f64>, w: &Array2<f64>) -> Result<(), ClusterError> {
    let n = w.nrows();
    if w.ncols() != n {
        return Err(ClusterError::InvalidInput(format!(
            "W must be square, got {}x{}",
            n,
            w.ncols()
        )));
    }
    if h0.nrows() != n {
        return Err(ClusterError::InvalidInput(format!(
            "H has {} rows but W is {}x{}",
            h0.nrows(),
            n,
            n
        )));
    }
    let k = h0.ncols();
    if k <= 1 || k >= n {
        return Err(ClusterError::InvalidK(k));
    }
    if w.iter().any(|&v| v < 0.0) {
        return Err(ClusterError::NumericalInstability(
            "negative entry in W".to_string(),
        ));
    }
    if !all_finite(w) || !all_finite(h0) {
        return Err(ClusterError::NumericalInstability(
            "non-finite entry in input matrix".to_string(),
        ));
    }
    Ok(())
}
