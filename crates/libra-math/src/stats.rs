//! Mean, sample deviation and trapezoidal integration.

/// Arithmetic mean. Panics on empty input.
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "Mean of empty slice");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Panics if fewer than
/// 2 values are supplied.
pub fn sample_std(values: &[f64]) -> f64 {
    assert!(values.len() >= 2, "Sample std needs at least 2 values");
    let m = mean(values);
    let ss: f64 = values.iter().map(|&v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Trapezoidal integration of samples `y(x)`.
///
/// Panics if `x` and `y` differ in length or carry fewer than 2 points.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "x and y must have equal length");
    assert!(x.len() >= 2, "Trapezoid needs at least 2 points");
    let mut total = 0.0;
    for i in 0..x.len() - 1 {
        total += 0.5 * (y[i] + y[i + 1]) * (x[i + 1] - x[i]);
    }
    total
}
