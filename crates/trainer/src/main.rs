//! # trainer
//!
//! Fits the linear regression model on the fixed dataset and writes the
//! artifact file. Run this before starting the server.

use regression::{save_model, training_data, LinearRegression, MODEL_PATH};
use std::path::Path;

fn main() -> regression::Result<()> {
    println!("Generating training data...");
    let (features, targets) = training_data();

    println!("Training linear regression model...");
    let mut model = LinearRegression::new();
    model.fit(&features, &targets)?;

    println!(
        "Model trained. Slope: {:.6}, Intercept: {:.6}, R²: {:.4}",
        model.slope(),
        model.intercept(),
        model.r_squared()
    );

    save_model(&model, MODEL_PATH)?;
    println!("Model saved as '{}'", MODEL_PATH);

    // Advisory check only; the save above already succeeded or errored
    if Path::new(MODEL_PATH).exists() {
        println!("Model file created successfully.");
    } else {
        eprintln!("Error: model file was not created.");
    }

    Ok(())
}
