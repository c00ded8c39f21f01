//! End-to-end analysis: run SymNMF and K-means on the same dataset and
//! score both labelings with the silhouette coefficient.

use std::time::{Duration, Instant};

use chrono::Local;
use log::info;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::ClusterError;
use crate::kmeans;
use crate::silhouette::silhouette_score;
use crate::similarity::normalized_similarity;
use crate::symnmf::{self, cluster_labels, initialize_h};
use crate::util::labelings_equivalent;

/// Parameters for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of clusters for both algorithms.
    pub k: usize,
    /// Iteration cap handed to K-means.
    pub kmeans_max_iter: usize,
    /// Seed for the SymNMF factor initialization.
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            k: 2,
            kmeans_max_iter: symnmf::MAX_ITER,
            seed: symnmf::DEFAULT_SEED,
        }
    }
}

/// Outcome of comparing both algorithms on one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symnmf_silhouette: f64,
    pub kmeans_silhouette: f64,
    pub symnmf_labels: Vec<usize>,
    pub kmeans_labels: Vec<usize>,
    /// Whether the two labelings agree up to cluster renaming.
    pub labelings_agree: bool,
    pub symnmf_duration: Duration,
    pub kmeans_duration: Duration,
    pub generated_at: String,
}

/// Run both algorithms and score the results.
///
/// The two halves share no mutable state: SymNMF consumes the normalized
/// similarity matrix, K-means consumes the raw points directly.
pub fn run_analysis(
    points: &Array2<f64>,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, ClusterError> {
    info!(
        "analysis started: n={} d={} k={}",
        points.nrows(),
        points.ncols(),
        config.k
    );

    let symnmf_start = Instant::now();
    let w = normalized_similarity(points)?;
    let h0 = initialize_h(&w, config.k, config.seed)?;
    let h = symnmf::symnmf(h0, &w)?;
    let symnmf_labels = cluster_labels(&h);
    let symnmf_duration = symnmf_start.elapsed();
    info!("symnmf finished in {:?}", symnmf_duration);

    let kmeans_start = Instant::now();
    let kmeans_result = kmeans::fit(points, config.k, config.kmeans_max_iter)?;
    let kmeans_duration = kmeans_start.elapsed();
    info!("kmeans finished in {:?}", kmeans_duration);

    let symnmf_silhouette = silhouette_score(points, &symnmf_labels)?;
    let kmeans_silhouette = silhouette_score(points, &kmeans_result.labels)?;
    info!(
        "silhouette scores: nmf {:.4}, kmeans {:.4}",
        symnmf_silhouette, kmeans_silhouette
    );

    Ok(AnalysisReport {
        symnmf_silhouette,
        kmeans_silhouette,
        labelings_agree: labelings_equivalent(&symnmf_labels, &kmeans_result.labels),
        symnmf_labels,
        kmeans_labels: kmeans_result.labels,
        symnmf_duration,
        kmeans_duration,
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check_split_labels, make_jittered_blobs, make_two_blobs};

    #[test]
    fn test_analysis_on_separated_blobs() {
        let points = make_two_blobs();
        let report = run_analysis(&points, &AnalysisConfig::default()).unwrap();

        assert!(report.symnmf_silhouette > 0.8);
        assert!(report.kmeans_silhouette > 0.8);
        assert!(check_split_labels(&report.symnmf_labels, 4));
        assert!(check_split_labels(&report.kmeans_labels, 4));
        assert!(report.labelings_agree);
    }

    #[test]
    fn test_scores_stay_in_silhouette_range() {
        let points = make_jittered_blobs(&[[0.0, 0.0], [5.0, 5.0]], 6, 17);
        let report = run_analysis(&points, &AnalysisConfig::default()).unwrap();
        assert!((-1.0..=1.0).contains(&report.symnmf_silhouette));
        assert!((-1.0..=1.0).contains(&report.kmeans_silhouette));
    }

    #[test]
    fn test_invalid_k_propagates() {
        let points = make_two_blobs();
        let config = AnalysisConfig {
            k: 1,
            ..Default::default()
        };
        assert!(matches!(
            run_analysis(&points, &config),
            Err(ClusterError::InvalidK(1))
        ));
    }
}
