//! # regression
//!
//! Univariate ordinary-least-squares linear regression with JSON artifact
//! persistence. This is the core library shared by the trainer and the
//! prediction server.
//!
//! ## Example
//!
//! ```rust
//! use regression::{training_data, LinearRegression};
//!
//! let (x, y) = training_data();
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&[15.0]).unwrap();
//! assert_eq!(predictions.len(), 1);
//! ```

pub mod artifact;
pub mod dataset;
mod error;
pub mod linear_regression;

pub use artifact::{load_model, save_model, MODEL_PATH};
pub use dataset::training_data;
pub use error::{ModelError, Result};
pub use linear_regression::LinearRegression;
