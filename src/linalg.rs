use ndarray::{Array2, ArrayView1, Axis};

/// Squared Euclidean distance between two coordinate vectors.
pub fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

/// Squared Frobenius norm of the difference A - B.
pub fn frobenius_diff_squared(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    let diff = a - b;
    diff.mapv(|v| v * v).sum()
}

/// Elementwise multiplicative update: base * numer / (denom + eps)
pub fn multiplicative_update(
    base: &Array2<f64>,
    numer: &Array2<f64>,
    denom: &Array2<f64>,
    eps: f64,
) -> Array2<f64> {
    let mut result = base.clone();
    ndarray::Zip::from(&mut result)
        .and(numer)
        .and(denom)
        .for_each(|r, &n, &d| {
            *r *= n / (d + eps);
        });
    result
}

/// True when every entry is finite (no NaN, no infinities).
pub fn all_finite(a: &Array2<f64>) -> bool {
    a.iter().all(|v| v.is_finite())
}

/// Index of the maximum entry in each row; ties resolve to the lowest column.
pub fn argmax_rows(a: &Array2<f64>) -> Vec<usize> {
    a.axis_iter(Axis(0))
        .map(|row| {
            let mut best = 0;
            let mut best_val = f64::NEG_INFINITY;
            for (idx, &v) in row.iter().enumerate() {
                if v > best_val {
                    best = idx;
                    best_val = v;
                }
            }
            best
        })
        .collect()
}
