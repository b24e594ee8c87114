//! Adjutor Core
//!
//! Types shared across Adjutor components.
//!
//! This crate provides:
//! - Error types and result handling
//! - The [`Matrix`] dataset type, with `NaN` marking missing values
//! - Hyperparameter search spaces ([`Params`]) and constructor arguments ([`Hyperparams`])

pub mod error;
pub mod matrix;
pub mod params;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use params::{sample_space, Hyperparams, Params};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::params::{Hyperparams, Params};
}
