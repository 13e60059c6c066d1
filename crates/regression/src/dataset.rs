//! Fixed training dataset
//!
//! In a real project this would be loaded from a database or CSV; here the
//! dataset is hard-coded and immutable.

/// The fixed ten-point training dataset as (features, targets)
///
/// Targets follow `y = 1.0 * x + 1.0` plus noise.
pub fn training_data() -> (Vec<f64>, Vec<f64>) {
    let features: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let targets = vec![2.0, 4.0, 5.0, 4.0, 5.0, 8.0, 9.0, 10.0, 11.0, 12.0];
    (features, targets)
}
