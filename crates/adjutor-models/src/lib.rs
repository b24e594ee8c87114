//! Adjutor Models
//!
//! Estimators wrapped by the Adjutor plugin layer:
//! - [`MedianImputer`]: fills missing values with per-column medians
//! - [`KNeighborsClassifier`]: majority vote among the nearest training rows
//!
//! Every model exposes `NAME`, `hyperparameter_space()` and a
//! `from_params` constructor taking keyword arguments.

pub mod knn;
pub mod median;

pub use knn::{KNeighborsClassifier, KNeighborsParams, Weights};
pub use median::{MedianImputer, MedianImputerParams};

use adjutor_core::{Error, Hyperparams, Result};
use serde::de::DeserializeOwned;

/// Deserialize keyword arguments into a model's typed parameter struct
pub(crate) fn parse_params<T: DeserializeOwned>(model: &str, params: &Hyperparams) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(params.clone()))
        .map_err(|e| Error::invalid_params(model, e.to_string()))
}
