//! Graph-based similarity representation of a point set.
//!
//! The three operations here feed the SymNMF optimizer: the Gaussian-kernel
//! similarity matrix A, the diagonal degree matrix D, and the normalized
//! similarity W = D^(-1/2) * A * D^(-1/2).

use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;

use crate::error::ClusterError;
use crate::linalg::squared_distance;

/// Reject empty datasets and non-finite coordinates before any matrix work.
pub fn validate_points(points: &Array2<f64>) -> Result<(), ClusterError> {
    if points.nrows() == 0 || points.ncols() == 0 {
        return Err(ClusterError::InvalidInput("empty dataset".to_string()));
    }
    if !points.iter().all(|v| v.is_finite()) {
        return Err(ClusterError::InvalidInput(
            "non-finite coordinate in dataset".to_string(),
        ));
    }
    Ok(())
}

/// Gaussian-kernel similarity matrix.
///
/// Entry (i, j) is exp(-||p_i - p_j||^2 / 2) for i != j and 0 on the
/// diagonal. Symmetric by construction.
pub fn similarity(points: &Array2<f64>) -> Result<Array2<f64>, ClusterError> {
    validate_points(points)?;
    let n = points.nrows();
    let mut affinity = Array2::<f64>::zeros((n, n));
    affinity
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let p_i = points.row(i);
            for j in 0..n {
                if i != j {
                    let dist_sq = squared_distance(p_i, points.row(j));
                    row[j] = (-dist_sq / 2.0).exp();
                }
            }
        });
    Ok(affinity)
}

/// Diagonal degree matrix: (i, i) holds the sum of row i of the similarity
/// matrix, every off-diagonal entry is 0.
pub fn diagonal_degree(points: &Array2<f64>) -> Result<Array2<f64>, ClusterError> {
    let affinity = similarity(points)?;
    Ok(Array2::from_diag(&affinity.sum_axis(Axis(1))))
}

/// Normalized similarity matrix D^(-1/2) * A * D^(-1/2), computed entrywise
/// as A(i,j) / sqrt(D(i,i) * D(j,j)).
///
/// An index with degree exactly 0 contributes 0 to every entry involving it.
/// That guard is part of the calling contract, not an error path.
pub fn normalized_similarity(points: &Array2<f64>) -> Result<Array2<f64>, ClusterError> {
    let mut affinity = similarity(points)?;
    let degrees = affinity.sum_axis(Axis(1));
    let inv_sqrt: Array1<f64> = degrees.mapv(|d| if d > 0.0 { 1.0 / d.sqrt() } else { 0.0 });
    let n = affinity.nrows();
    for i in 0..n {
        for j in 0..n {
            affinity[[i, j]] *= inv_sqrt[i] * inv_sqrt[j];
        }
    }
    Ok(affinity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_points() -> Array2<f64> {
        array![[0.0, 0.0], [0.0, 1.0], [5.0, 5.0], [5.0, 6.0]]
    }

    #[test]
    fn test_similarity_symmetric_with_zero_diagonal() {
        let a = similarity(&sample_points()).unwrap();
        for i in 0..a.nrows() {
            assert_eq!(a[[i, i]], 0.0);
        }
        assert!(crate::test_utils::max_asymmetry(&a) < 1e-12);
    }

    #[test]
    fn test_similarity_known_entry() {
        let a = similarity(&sample_points()).unwrap();
        // points 0 and 1 are at squared distance 1
        assert!((a[[0, 1]] - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_degree_matches_row_sums() {
        let points = sample_points();
        let a = similarity(&points).unwrap();
        let d = diagonal_degree(&points).unwrap();
        for i in 0..a.nrows() {
            assert!((d[[i, i]] - a.row(i).sum()).abs() < 1e-12);
            assert!(d[[i, i]] >= 0.0);
            for j in 0..a.ncols() {
                if i != j {
                    assert_eq!(d[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_normalized_entries_bounded() {
        let w = normalized_similarity(&sample_points()).unwrap();
        for &v in w.iter() {
            assert!((0.0..=1.0).contains(&v), "entry out of range: {}", v);
        }
    }

    #[test]
    fn test_normalized_matches_entrywise_formula() {
        let points = sample_points();
        let a = similarity(&points).unwrap();
        let d = diagonal_degree(&points).unwrap();
        let w = normalized_similarity(&points).unwrap();
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                let expected = a[[i, j]] / (d[[i, i]] * d[[j, j]]).sqrt();
                assert!((w[[i, j]] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let empty = Array2::<f64>::zeros((0, 2));
        assert!(matches!(
            similarity(&empty),
            Err(ClusterError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let points = array![[0.0, f64::NAN], [1.0, 2.0]];
        assert!(matches!(
            similarity(&points),
            Err(ClusterError::InvalidInput(_))
        ));
    }
}
