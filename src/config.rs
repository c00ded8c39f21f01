//! Command-line configuration for the `symclust` binary.

use std::path::PathBuf;

use crate::error::ClusterError;

/// What the invocation should compute and print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Similarity matrix.
    Sym,
    /// Diagonal degree matrix.
    Ddg,
    /// Normalized similarity matrix.
    Norm,
    /// Converged SymNMF factor matrix H.
    Symnmf,
    /// Final K-means centroids.
    Kmeans,
}

impl Goal {
    fn parse(raw: &str) -> Result<Goal, ClusterError> {
        match raw {
            "sym" => Ok(Goal::Sym),
            "ddg" => Ok(Goal::Ddg),
            "norm" => Ok(Goal::Norm),
            "symnmf" => Ok(Goal::Symnmf),
            "kmeans" => Ok(Goal::Kmeans),
            other => Err(ClusterError::InvalidInput(format!(
                "unknown goal {:?}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub k: usize,
    pub goal: Goal,
    pub path: PathBuf,
}

impl Config {
    /// Parse `<k> <goal> <file>` from an argument iterator (the first item is
    /// the program name).
    pub fn new(mut args: impl Iterator<Item = String>) -> Result<Config, ClusterError> {
        args.next();
        let raw_k = args
            .next()
            .ok_or_else(|| ClusterError::InvalidInput("missing cluster count".to_string()))?;
        let goal = Goal::parse(
            &args
                .next()
                .ok_or_else(|| ClusterError::InvalidInput("missing goal".to_string()))?,
        )?;
        let path = PathBuf::from(args.next().ok_or_else(|| {
            ClusterError::InvalidInput("missing input file path".to_string())
        })?);
        if args.next().is_some() {
            return Err(ClusterError::InvalidInput(
                "unexpected extra argument".to_string(),
            ));
        }

        Ok(Config {
            k: parse_k(&raw_k)?,
            goal,
            path,
        })
    }
}

// k may be written as a decimal ("3.0") but must denote a whole number.
// Bounds against n are checked by the algorithms once the data is loaded.
fn parse_k(raw: &str) -> Result<usize, ClusterError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ClusterError::InvalidInput(format!("non-numeric cluster count {:?}", raw)))?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
        return Err(ClusterError::InvalidInput(format!(
            "cluster count must be a whole number, got {:?}",
            raw
        )));
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once("symclust".to_string()).chain(
            list.iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        )
    }

    #[test]
    fn test_parses_valid_invocation() {
        let config = Config::new(args(&["3", "symnmf", "points.txt"])).unwrap();
        assert_eq!(config.k, 3);
        assert_eq!(config.goal, Goal::Symnmf);
        assert_eq!(config.path, PathBuf::from("points.txt"));
    }

    #[test]
    fn test_whole_valued_decimal_k_accepted() {
        let config = Config::new(args(&["3.0", "sym", "points.txt"])).unwrap();
        assert_eq!(config.k, 3);
    }

    #[test]
    fn test_fractional_k_rejected() {
        assert!(Config::new(args(&["2.5", "sym", "points.txt"])).is_err());
    }

    #[test]
    fn test_unknown_goal_rejected() {
        assert!(Config::new(args(&["2", "cluster", "points.txt"])).is_err());
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Config::new(args(&["2", "sym"])).is_err());
        assert!(Config::new(args(&[])).is_err());
    }

    #[test]
    fn test_extra_argument_rejected() {
        assert!(Config::new(args(&["2", "sym", "points.txt", "extra"])).is_err());
    }
}
