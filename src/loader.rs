//! Point-file loading and fixed-precision output.
//!
//! Input files carry one point per line as comma-separated decimal values,
//! with the same number of coordinates on every line. All validation happens
//! here, before any matrix computation: a malformed file never reaches the
//! numerical pipeline.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ndarray::{Array2, ArrayView1};

use crate::error::ClusterError;

/// Load a dataset from `path`.
///
/// Rejects unreadable files, empty files, non-numeric tokens, non-finite
/// values, and rows of differing length, all as `InvalidInput`.
pub fn load_points(path: &Path) -> Result<Array2<f64>, ClusterError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ClusterError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_points(&content)
}

/// Parse comma-separated rows of decimal values into an n x d dataset.
pub fn parse_points(content: &str) -> Result<Array2<f64>, ClusterError> {
    let mut values: Vec<f64> = Vec::new();
    let mut dim: Option<usize> = None;
    let mut rows = 0usize;

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row_len = 0usize;
        for token in line.split(',') {
            let value: f64 = token.trim().parse().map_err(|_| {
                ClusterError::InvalidInput(format!(
                    "non-numeric value {:?} on line {}",
                    token,
                    lineno + 1
                ))
            })?;
            if !value.is_finite() {
                return Err(ClusterError::InvalidInput(format!(
                    "non-finite value on line {}",
                    lineno + 1
                )));
            }
            values.push(value);
            row_len += 1;
        }
        match dim {
            None => dim = Some(row_len),
            Some(d) if d != row_len => {
                return Err(ClusterError::InvalidInput(format!(
                    "line {} has {} values, expected {}",
                    lineno + 1,
                    row_len,
                    d
                )));
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let dim = dim.ok_or_else(|| ClusterError::InvalidInput("empty dataset".to_string()))?;
    Array2::from_shape_vec((rows, dim), values)
        .map_err(|e| ClusterError::InvalidInput(e.to_string()))
}

/// One row rendered to exactly 4 decimal places, comma-separated.
pub fn format_row(row: ArrayView1<f64>) -> String {
    row.iter()
        .map(|v| format!("{:.4}", v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write a matrix as one formatted row per line.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Array2<f64>) -> io::Result<()> {
    for row in matrix.rows() {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_parse_points() {
        let points = parse_points("1.0,2.0\n3.5,-4.25\n").unwrap();
        assert_eq!(points, array![[1.0, 2.0], [3.5, -4.25]]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let points = parse_points("1.0,2.0\n\n3.0,4.0\n").unwrap();
        assert_eq!(points.nrows(), 2);
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        let err = parse_points("1.0,abc\n").unwrap_err();
        assert!(matches!(err, ClusterError::InvalidInput(_)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = parse_points("1.0,2.0\n3.0\n").unwrap_err();
        assert!(matches!(err, ClusterError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            parse_points(""),
            Err(ClusterError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_points("\n\n"),
            Err(ClusterError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = parse_points("1.0,inf\n").unwrap_err();
        assert!(matches!(err, ClusterError::InvalidInput(_)));
    }

    #[test]
    fn test_format_row_four_decimals() {
        let row = array![1.0, -0.25, 2.0 / 3.0];
        assert_eq!(format_row(row.view()), "1.0000,-0.2500,0.6667");
    }

    #[test]
    fn test_write_matrix() {
        let m = array![[1.0, 2.0], [3.0, 4.0]];
        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.0000,2.0000\n3.0000,4.0000\n"
        );
    }
}
