//! Model artifact persistence
//!
//! The trainer writes the fitted model to a single JSON file; the server
//! reads it back once at startup. The artifact is overwritten wholesale on
//! retraining, with no versioning or partial updates.

use crate::error::Result;
use crate::linear_regression::LinearRegression;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Fixed relative path of the model artifact
pub const MODEL_PATH: &str = "model.json";

/// Serialize a fitted model to `path`, overwriting any existing file
pub fn save_model<P: AsRef<Path>>(model: &LinearRegression, path: P) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), model)?;
    Ok(())
}

/// Deserialize a model from `path`
///
/// A missing file surfaces as an IO error; malformed content as a
/// serialization error.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LinearRegression> {
    let file = File::open(path)?;
    let model = serde_json::from_reader(BufReader::new(file))?;
    Ok(model)
}
