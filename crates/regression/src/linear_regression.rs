//! Univariate linear regression
//!
//! Uses ordinary least squares (OLS) to fit `target = slope * feature +
//! intercept` over a set of (feature, target) pairs. The closed-form
//! solution is deterministic for any non-degenerate input.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Univariate linear regression model
///
/// Fits `y = intercept + slope * x` by ordinary least squares.
///
/// # Example
///
/// ```rust
/// use regression::LinearRegression;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0];
/// let y = vec![3.0, 5.0, 7.0, 9.0];
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// let predictions = model.predict(&[5.0]).unwrap();
/// assert!((predictions[0] - 11.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Y-intercept
    intercept: f64,
    /// Slope (target change per feature unit)
    slope: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// R-squared value
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a new, unfitted linear regression model
    pub fn new() -> Self {
        Self {
            intercept: 0.0,
            slope: 0.0,
            n_observations: 0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Get the slope (target change per feature unit)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get R-squared (coefficient of determination)
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Check if the model has been fitted
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fit the model to (feature, target) pairs
    ///
    /// `x` and `y` must have the same length and contain at least two
    /// points with non-zero feature variance.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(ModelError::InvalidData(format!(
                "feature/target length mismatch: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(ModelError::InsufficientData {
                required: 2,
                actual: x.len(),
            });
        }

        let n = x.len() as f64;
        self.n_observations = x.len();

        let sum_x: f64 = x.iter().sum();
        let sum_y: f64 = y.iter().sum();
        let sum_x2: f64 = x.iter().map(|&v| v * v).sum();
        let sum_xy: f64 = x.iter().zip(y.iter()).map(|(&a, &b)| a * b).sum();

        // OLS formulas
        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            return Err(ModelError::NumericalError(
                "Singular matrix in regression".to_string(),
            ));
        }

        self.slope = (n * sum_xy - sum_x * sum_y) / denominator;
        self.intercept = (sum_y - self.slope * sum_x) / n;

        // Calculate R-squared
        let mean_y = sum_y / n;
        let ss_tot: f64 = y.iter().map(|&v| (v - mean_y).powi(2)).sum();
        let ss_res: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(&a, &b)| {
                let predicted = self.intercept + self.slope * a;
                (b - predicted).powi(2)
            })
            .sum();

        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.fitted = true;
        Ok(())
    }

    /// Predict the target for a single feature value
    pub fn predict_one(&self, feature: f64) -> Result<f64> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        Ok(self.intercept + self.slope * feature)
    }

    /// Predict one target per input feature, in input order
    ///
    /// Each scalar is an independent single-feature input; an empty slice
    /// yields an empty prediction vector.
    pub fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }

        Ok(features
            .iter()
            .map(|&f| self.intercept + self.slope * f)
            .collect())
    }
}
