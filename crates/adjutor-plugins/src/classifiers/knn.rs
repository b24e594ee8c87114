//! k-nearest-neighbours classification plugin

use crate::base::{ClassifierPlugin, Plugin, PluginFamily, PluginSpec};
use adjutor_core::{Hyperparams, Matrix, Params, Result};
use adjutor_models::KNeighborsClassifier;

/// Classification plugin wrapping [`KNeighborsClassifier`].
///
/// Accepts `n_neighbors` (default 5) and `weights` (`uniform` or `distance`).
#[derive(Debug, Clone)]
pub struct KnnPlugin {
    model: KNeighborsClassifier,
}

impl KnnPlugin {
    /// Forward constructor arguments to the wrapped model
    pub fn new(params: &Hyperparams) -> Result<Self> {
        Ok(Self {
            model: KNeighborsClassifier::from_params(params)?,
        })
    }

    /// The wrapped model
    pub fn model(&self) -> &KNeighborsClassifier {
        &self.model
    }
}

impl Plugin for KnnPlugin {
    fn name(&self) -> &'static str {
        KNeighborsClassifier::name()
    }

    fn plugin_type(&self) -> &'static str {
        <dyn ClassifierPlugin as PluginFamily>::KIND
    }

    fn hyperparameter_space(&self) -> Vec<Params> {
        KNeighborsClassifier::hyperparameter_space()
    }
}

impl ClassifierPlugin for KnnPlugin {
    fn fit(&mut self, x: &Matrix, y: &[i64]) -> Result<()> {
        self.model.fit(x, y)?;
        Ok(())
    }

    fn predict(&self, x: &Matrix) -> Result<Vec<i64>> {
        self.model.predict(x)
    }

    fn predict_proba(&self, x: &Matrix) -> Result<Matrix> {
        self.model.predict_proba(x)
    }
}

impl PluginSpec<dyn ClassifierPlugin> for KnnPlugin {
    fn name() -> &'static str {
        KNeighborsClassifier::name()
    }

    fn hyperparameter_space() -> Vec<Params> {
        KNeighborsClassifier::hyperparameter_space()
    }

    fn build(params: &Hyperparams) -> Result<Box<dyn ClassifierPlugin>> {
        Ok(Box::new(Self::new(params)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adjutor_models::Weights;
    use serde_json::json;

    fn blobs() -> (Matrix, Vec<i64>) {
        let x = Matrix::from_rows(vec![
            vec![0.0],
            vec![0.5],
            vec![1.0],
            vec![9.0],
            vec![9.5],
            vec![10.0],
        ])
        .unwrap();
        (x, vec![3, 3, 3, 7, 7, 7])
    }

    #[test]
    fn test_delegates_metadata() {
        let plugin = KnnPlugin::new(&Hyperparams::new()).unwrap();

        assert_eq!(plugin.name(), "knn");
        assert_eq!(plugin.plugin_type(), "classifier");
        assert_eq!(plugin.hyperparameter_space().len(), 2);
    }

    #[test]
    fn test_forwards_params() {
        let mut params = Hyperparams::new();
        params.insert("n_neighbors".to_string(), json!(3));
        params.insert("weights".to_string(), json!("distance"));

        let plugin = KnnPlugin::new(&params).unwrap();
        assert_eq!(plugin.model().params().n_neighbors, 3);
        assert_eq!(plugin.model().params().weights, Weights::Distance);
    }

    #[test]
    fn test_fit_predict() {
        let (x, y) = blobs();
        let mut params = Hyperparams::new();
        params.insert("n_neighbors".to_string(), json!(3));
        let mut plugin = KnnPlugin::new(&params).unwrap();

        let pred = plugin.fit_predict(&x, &y).unwrap();
        assert_eq!(pred, y);

        let proba = plugin.predict_proba(&x).unwrap();
        assert_eq!(proba.shape(), (6, 2));
        assert_eq!(proba.row(0), Some(&[1.0, 0.0][..]));
    }
}
