//! Median imputation

use crate::parse_params;
use adjutor_core::{Error, Hyperparams, Matrix, Params, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Constructor arguments for [`MedianImputer`]. It takes none.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MedianImputerParams {}

/// Replaces missing values with the median of each column.
///
/// Statistics are learned from the finite cells of the fit data; infinite
/// values are kept in the output but take no part in the median. A column
/// with no finite cells is filled with `0.0`.
#[derive(Debug, Clone, Default)]
pub struct MedianImputer {
    statistics: Option<Vec<f64>>,
}

impl MedianImputer {
    pub const NAME: &'static str = "median";

    /// Create an unfitted imputer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an imputer from keyword arguments
    pub fn from_params(params: &Hyperparams) -> Result<Self> {
        let _: MedianImputerParams = parse_params(Self::NAME, params)?;
        Ok(Self::new())
    }

    pub fn name() -> &'static str {
        Self::NAME
    }

    /// Median imputation has nothing to tune
    pub fn hyperparameter_space() -> Vec<Params> {
        Vec::new()
    }

    /// Learn the per-column medians
    pub fn fit(&mut self, x: &Matrix) -> Result<&mut Self> {
        let statistics: Vec<f64> = (0..x.ncols())
            .map(|col| {
                let observed: Vec<f64> = x.column(col).filter(|v| v.is_finite()).collect();
                median(observed).unwrap_or_else(|| {
                    warn!("column {} has no finite values, imputing 0.0", col);
                    0.0
                })
            })
            .collect();

        debug!(columns = statistics.len(), "fitted median imputer");
        self.statistics = Some(statistics);
        Ok(self)
    }

    /// Fill every missing cell with its column median
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        let statistics = self
            .statistics
            .as_ref()
            .ok_or_else(|| Error::model("median imputer is not fitted"))?;

        if x.ncols() != statistics.len() {
            return Err(Error::shape(format!(
                "imputer was fitted on {} columns, got {}",
                statistics.len(),
                x.ncols()
            )));
        }

        let mut out = x.clone();
        out.map_inplace(|col, v| if v.is_nan() { statistics[col] } else { v });
        Ok(out)
    }

    pub fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.fit(x)?.transform(x)
    }

    /// Learned column medians, once fitted
    pub fn statistics(&self) -> Option<&[f64]> {
        self.statistics.as_deref()
    }
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;

    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
