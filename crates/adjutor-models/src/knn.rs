//! k-nearest-neighbours classification

use crate::parse_params;
use adjutor_core::{Error, Hyperparams, Matrix, Params, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How neighbour votes are weighted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weights {
    /// Every neighbour counts the same
    #[default]
    Uniform,
    /// Votes weighted by inverse distance
    Distance,
}

/// Constructor arguments for [`KNeighborsClassifier`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KNeighborsParams {
    pub n_neighbors: usize,
    pub weights: Weights,
}

impl Default for KNeighborsParams {
    fn default() -> Self {
        Self {
            n_neighbors: 5,
            weights: Weights::Uniform,
        }
    }
}

#[derive(Debug, Clone)]
struct TrainingSet {
    x: Matrix,
    y: Vec<i64>,
    classes: Vec<i64>,
}

/// Classifier voting among the closest training rows (Euclidean distance)
#[derive(Debug, Clone)]
pub struct KNeighborsClassifier {
    params: KNeighborsParams,
    fitted: Option<TrainingSet>,
}

impl KNeighborsClassifier {
    pub const NAME: &'static str = "knn";

    pub fn new(params: KNeighborsParams) -> Result<Self> {
        if params.n_neighbors == 0 {
            return Err(Error::invalid_params(Self::NAME, "n_neighbors must be at least 1"));
        }

        Ok(Self {
            params,
            fitted: None,
        })
    }

    /// Create a classifier from keyword arguments
    pub fn from_params(params: &Hyperparams) -> Result<Self> {
        Self::new(parse_params(Self::NAME, params)?)
    }

    pub fn name() -> &'static str {
        Self::NAME
    }

    pub fn hyperparameter_space() -> Vec<Params> {
        vec![
            Params::integer("n_neighbors", 5, 20),
            Params::categorical("weights", ["uniform", "distance"]),
        ]
    }

    pub fn params(&self) -> &KNeighborsParams {
        &self.params
    }

    /// Distinct training labels in ascending order; the column order of
    /// [`predict_proba`](Self::predict_proba)
    pub fn classes(&self) -> Option<&[i64]> {
        self.fitted.as_ref().map(|t| t.classes.as_slice())
    }

    /// Memorise the training set
    pub fn fit(&mut self, x: &Matrix, y: &[i64]) -> Result<&mut Self> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(Error::model("cannot fit on an empty dataset"));
        }
        if x.nrows() != y.len() {
            return Err(Error::shape(format!(
                "{} samples but {} labels",
                x.nrows(),
                y.len()
            )));
        }
        if x.has_missing() {
            return Err(Error::model("input contains missing values, impute first"));
        }

        let mut classes = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        debug!(
            samples = x.nrows(),
            classes = classes.len(),
            "fitted knn classifier"
        );

        self.fitted = Some(TrainingSet {
            x: x.clone(),
            y: y.to_vec(),
            classes,
        });
        Ok(self)
    }

    /// Class membership probabilities, one row per sample
    pub fn predict_proba(&self, x: &Matrix) -> Result<Matrix> {
        let train = self
            .fitted
            .as_ref()
            .ok_or_else(|| Error::model("knn classifier is not fitted"))?;

        if x.ncols() != train.x.ncols() {
            return Err(Error::shape(format!(
                "classifier was fitted on {} features, got {}",
                train.x.ncols(),
                x.ncols()
            )));
        }
        if x.has_missing() {
            return Err(Error::model("input contains missing values, impute first"));
        }

        let k = self.params.n_neighbors.min(train.y.len());
        let mut out = Matrix::zeros(x.nrows(), train.classes.len())?;

        for (row, query) in x.rows().enumerate() {
            let mut neighbours: Vec<(f64, i64)> = train
                .x
                .rows()
                .zip(&train.y)
                .map(|(sample, label)| (euclidean(query, sample), *label))
                .collect();
            neighbours.sort_by(|a, b| a.0.total_cmp(&b.0));
            neighbours.truncate(k);

            let mut votes = tally(&neighbours, &train.classes, self.params.weights);
            let mut total: f64 = votes.iter().sum();
            if total == 0.0 || !total.is_finite() {
                // inverse distances under- or overflowed, count neighbours instead
                votes = tally(&neighbours, &train.classes, Weights::Uniform);
                total = votes.iter().sum();
            }

            for (col, vote) in votes.into_iter().enumerate() {
                out.set(row, col, vote / total)?;
            }
        }

        Ok(out)
    }

    /// Most probable class per sample; ties go to the smaller label
    pub fn predict(&self, x: &Matrix) -> Result<Vec<i64>> {
        let proba = self.predict_proba(x)?;
        let classes = self.classes().unwrap_or_default();

        Ok(proba
            .rows()
            .map(|p| {
                let mut best = 0;
                for (i, v) in p.iter().enumerate() {
                    if *v > p[best] {
                        best = i;
                    }
                }
                classes[best]
            })
            .collect())
    }
}

impl Default for KNeighborsClassifier {
    fn default() -> Self {
        Self {
            params: KNeighborsParams::default(),
            fitted: None,
        }
    }
}

fn tally(neighbours: &[(f64, i64)], classes: &[i64], weights: Weights) -> Vec<f64> {
    let mut votes = vec![0.0; classes.len()];
    let exact = neighbours.iter().any(|(d, _)| *d == 0.0);

    for (distance, label) in neighbours {
        let weight = match weights {
            Weights::Uniform => 1.0,
            Weights::Distance if exact => {
                if *distance == 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Weights::Distance => 1.0 / distance,
        };
        if let Ok(idx) = classes.binary_search(label) {
            votes[idx] += weight;
        }
    }

    votes
}

/// Euclidean distance, accumulated with `hypot` so large coordinates do
/// not overflow when squared
fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc: f64, (x, y)| acc.hypot(x - y))
}
