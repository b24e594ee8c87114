//! Median imputation plugin

use crate::base::{ImputerPlugin, Plugin, PluginFamily, PluginSpec};
use adjutor_core::{Hyperparams, Matrix, Params, Result};
use adjutor_models::MedianImputer;

/// Imputation plugin completing missing values with the median of each column.
///
/// All behaviour comes from [`MedianImputer`]:
///
/// ```
/// use adjutor_core::{Hyperparams, Matrix};
/// use adjutor_plugins::{ImputerPlugin, Imputers};
///
/// let mut plugin = Imputers::new().get("median", &Hyperparams::new()).unwrap();
/// let nan = f64::NAN;
/// let x = Matrix::from_rows(vec![
///     vec![1.0, 1.0, 1.0, 1.0],
///     vec![nan, nan, nan, nan],
///     vec![1.0, 2.0, 2.0, 1.0],
///     vec![2.0, 2.0, 2.0, 2.0],
/// ])
/// .unwrap();
///
/// let out = plugin.fit_transform(&x).unwrap();
/// assert_eq!(out.row(1), Some(&[1.0, 2.0, 2.0, 1.0][..]));
/// ```
#[derive(Debug, Clone)]
pub struct MedianPlugin {
    model: MedianImputer,
}

impl MedianPlugin {
    /// Forward constructor arguments to the wrapped model
    pub fn new(params: &Hyperparams) -> Result<Self> {
        Ok(Self {
            model: MedianImputer::from_params(params)?,
        })
    }

    /// The wrapped model
    pub fn model(&self) -> &MedianImputer {
        &self.model
    }
}

impl Plugin for MedianPlugin {
    fn name(&self) -> &'static str {
        MedianImputer::name()
    }

    fn plugin_type(&self) -> &'static str {
        <dyn ImputerPlugin as PluginFamily>::KIND
    }

    fn hyperparameter_space(&self) -> Vec<Params> {
        MedianImputer::hyperparameter_space()
    }
}

impl ImputerPlugin for MedianPlugin {
    fn fit(&mut self, x: &Matrix) -> Result<()> {
        self.model.fit(x)?;
        Ok(())
    }

    fn transform(&self, x: &Matrix) -> Result<Matrix> {
        self.model.transform(x)
    }
}

impl PluginSpec<dyn ImputerPlugin> for MedianPlugin {
    fn name() -> &'static str {
        MedianImputer::name()
    }

    fn hyperparameter_space() -> Vec<Params> {
        MedianImputer::hyperparameter_space()
    }

    fn build(params: &Hyperparams) -> Result<Box<dyn ImputerPlugin>> {
        Ok(Box::new(Self::new(params)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adjutor_core::Error;
    use serde_json::json;

    #[test]
    fn test_delegates_metadata() {
        let plugin = MedianPlugin::new(&Hyperparams::new()).unwrap();

        assert_eq!(plugin.name(), "median");
        assert_eq!(plugin.plugin_type(), "imputer");
        assert!(plugin.hyperparameter_space().is_empty());
    }

    #[test]
    fn test_forwards_constructor_errors() {
        let mut params = Hyperparams::new();
        params.insert("fill_value".to_string(), json!(0));

        assert!(matches!(
            MedianPlugin::new(&params),
            Err(Error::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_forwards_fit_transform() {
        let x = Matrix::from_rows(vec![vec![1.0, f64::NAN], vec![3.0, 4.0], vec![f64::NAN, 6.0]])
            .unwrap();
        let mut plugin = MedianPlugin::new(&Hyperparams::new()).unwrap();

        let out = plugin.fit_transform(&x).unwrap();
        assert_eq!(out.row(0), Some(&[1.0, 5.0][..]));
        assert_eq!(out.row(2), Some(&[2.0, 6.0][..]));
        assert_eq!(plugin.model().statistics(), Some(&[2.0, 5.0][..]));
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let plugin = MedianPlugin::new(&Hyperparams::new()).unwrap();
        let x = Matrix::from_rows(vec![vec![1.0]]).unwrap();
        assert!(plugin.transform(&x).is_err());
    }
}
