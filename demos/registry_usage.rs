//! Example: discovering plugins and running them
//!
//! This example shows how to:
//! 1. Load registry settings
//! 2. Build imputer and classifier registries
//! 3. Impute a dataset and classify the result
//!
//! Run with: cargo run --example registry_usage

use adjutor_core::{Hyperparams, Matrix};
use adjutor_plugins::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("Adjutor Registry Example\n");

    // 1. Settings: defaults, adjutor.toml, ADJUTOR_* environment
    let settings = RegistrySettings::load()?;
    println!("Plugins directory: {}\n", settings.plugins_dir.display());

    // 2. Registries. Fall back to the compiled-in plugins when no manifests exist.
    let mut imputers = Imputers::from_settings(&settings);
    if imputers.is_empty() {
        imputers = Imputers::new();
    }
    let mut classifiers = Classifiers::from_settings(&settings);
    if classifiers.is_empty() {
        classifiers = Classifiers::new();
    }

    println!("Imputers:    {:?}", imputers.list());
    println!("Classifiers: {:?}\n", classifiers.list());

    for plugin_type in classifiers.types() {
        println!("{} hyperparameters:", plugin_type.name());
        for param in plugin_type.hyperparameter_space() {
            println!("  - {:?}", param);
        }
    }
    println!();

    // 3. Impute, then classify
    let nan = f64::NAN;
    let x = Matrix::from_rows(vec![
        vec![1.0, 1.0, 1.0, 1.0],
        vec![nan, nan, nan, nan],
        vec![1.0, 2.0, 2.0, 1.0],
        vec![2.0, 2.0, 2.0, 2.0],
        vec![8.0, 9.0, nan, 9.0],
        vec![9.0, nan, 8.0, 8.0],
    ])?;
    let y = [0, 0, 0, 0, 1, 1];

    let mut imputer = imputers.get("median", &Hyperparams::new())?;
    let imputed = imputer.fit_transform(&x)?;
    println!("Imputed with '{}':", imputer.name());
    for row in imputed.rows() {
        println!("  {:?}", row);
    }

    let mut params = Hyperparams::new();
    params.insert("n_neighbors".to_string(), json!(3));
    let mut classifier = classifiers.get("knn", &params)?;
    let predicted = classifier.fit_predict(&imputed, &y)?;
    println!("\nPredicted with '{}': {:?}", classifier.name(), predicted);

    Ok(())
}
