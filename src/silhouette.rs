//! Silhouette coefficient for scoring a labeling of a point set.
//!
//! For each point, a(i) is the mean distance to the other members of its own
//! cluster and b(i) the smallest mean distance to any other cluster;
//! s(i) = (b - a) / max(a, b). A singleton cluster contributes s(i) = 0.
//! The score is the mean of s(i) over all points and lies in [-1, 1].

use ndarray::Array2;
use statrs::statistics::Statistics;

use crate::error::ClusterError;
use crate::linalg::squared_distance;
use crate::similarity::validate_points;

/// Mean silhouette coefficient of `labels` over `points`.
///
/// Fails with `InvalidInput` when the label vector does not match the point
/// count or names fewer than two distinct clusters.
pub fn silhouette_score(points: &Array2<f64>, labels: &[usize]) -> Result<f64, ClusterError> {
    validate_points(points)?;
    let n = points.nrows();
    if labels.len() != n {
        return Err(ClusterError::InvalidInput(format!(
            "{} labels for {} points",
            labels.len(),
            n
        )));
    }

    let cluster_count = labels.iter().max().map_or(0, |&m| m + 1);
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); cluster_count];
    for (idx, &label) in labels.iter().enumerate() {
        members[label].push(idx);
    }
    if members.iter().filter(|m| !m.is_empty()).count() < 2 {
        return Err(ClusterError::InvalidInput(
            "silhouette requires at least two non-empty clusters".to_string(),
        ));
    }

    let scores: Vec<f64> = (0..n)
        .map(|i| {
            let own = labels[i];
            if members[own].len() < 2 {
                return 0.0;
            }
            let a = mean_distance(points, i, &members[own]);
            let b = members
                .iter()
                .enumerate()
                .filter(|(label, m)| *label != own && !m.is_empty())
                .map(|(_, m)| mean_distance(points, i, m))
                .fold(f64::INFINITY, f64::min);
            let denom = a.max(b);
            if denom > 0.0 {
                (b - a) / denom
            } else {
                0.0
            }
        })
        .collect();

    Ok(scores.iter().mean())
}

// Mean Euclidean distance from point `i` to the listed members, skipping
// `i` itself when it appears in the list.
fn mean_distance(points: &Array2<f64>, i: usize, member_indices: &[usize]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &j in member_indices {
        if j != i {
            sum += squared_distance(points.row(i), points.row(j)).sqrt();
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
