use std::error::Error;
use std::fmt;

/// Failure kinds surfaced by the clustering core.
///
/// Every failure aborts the operation that detected it; no partial results
/// are returned. The two documented guards (zero-degree normalization,
/// zero-attachment centroids) are policy, not errors, and never reach here.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Malformed, empty, non-numeric, or dimensionally inconsistent input.
    InvalidInput(String),
    /// Cluster count outside the open interval (1, n).
    InvalidK(usize),
    /// Iteration cap outside the open interval (1, 1000).
    InvalidIterationBound(usize),
    /// Negative entries where non-negativity is required, or a non-finite
    /// value in an intermediate matrix product.
    NumericalInstability(String),
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ClusterError::InvalidK(k) => write!(f, "invalid number of clusters: {}", k),
            ClusterError::InvalidIterationBound(n) => {
                write!(f, "iteration limit out of range: {}", n)
            }
            ClusterError::NumericalInstability(msg) => {
                write!(f, "numerical instability: {}", msg)
            }
        }
    }
}

impl Error for ClusterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_distinguishable() {
        let errors = [
            ClusterError::InvalidInput("empty dataset".to_string()),
            ClusterError::InvalidK(1),
            ClusterError::InvalidIterationBound(1000),
            ClusterError::NumericalInstability("negative entry in W".to_string()),
        ];
        let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
