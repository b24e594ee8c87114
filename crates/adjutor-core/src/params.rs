//! Hyperparameter search spaces

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keyword arguments handed to plugin and model constructors
pub type Hyperparams = serde_json::Map<String, Value>;

/// One dimension of a hyperparameter search space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Params {
    /// One of a fixed set of values
    Categorical { name: String, choices: Vec<Value> },

    /// Real value in `[low, high]`
    Float { name: String, low: f64, high: f64 },

    /// Integer in `[low, high]` on a grid of `step`
    Integer {
        name: String,
        low: i64,
        high: i64,
        #[serde(default = "default_step")]
        step: i64,
    },
}

impl Params {
    /// Create a categorical dimension
    pub fn categorical<I, V>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Categorical {
            name: name.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a float dimension
    pub fn float(name: impl Into<String>, low: f64, high: f64) -> Self {
        Self::Float {
            name: name.into(),
            low,
            high,
        }
    }

    /// Create an integer dimension with unit step
    pub fn integer(name: impl Into<String>, low: i64, high: i64) -> Self {
        Self::integer_step(name, low, high, 1)
    }

    /// Create an integer dimension with an explicit step
    pub fn integer_step(name: impl Into<String>, low: i64, high: i64, step: i64) -> Self {
        Self::Integer {
            name: name.into(),
            low,
            high,
            step,
        }
    }

    /// Parameter name (the constructor keyword)
    pub fn name(&self) -> &str {
        match self {
            Self::Categorical { name, .. }
            | Self::Float { name, .. }
            | Self::Integer { name, .. } => name.as_str(),
        }
    }

    /// Whether `value` lies inside this dimension
    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Self::Categorical { choices, .. } => choices.contains(value),
            Self::Float { low, high, .. } => value
                .as_f64()
                .map(|v| v >= *low && v <= *high)
                .unwrap_or(false),
            Self::Integer {
                low, high, step, ..
            } => value
                .as_i64()
                .map(|v| v >= *low && v <= *high && (v - low) % (*step).max(1) == 0)
                .unwrap_or(false),
        }
    }

    /// Draw one value uniformly from this dimension
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self {
            Self::Categorical { choices, .. } => {
                choices.choose(rng).cloned().unwrap_or(Value::Null)
            }
            Self::Float { low, high, .. } => {
                let v = if high > low {
                    rng.gen_range(*low..=*high)
                } else {
                    *low
                };
                Value::from(v)
            }
            Self::Integer {
                low, high, step, ..
            } => {
                let step = (*step).max(1);
                let slots = if high > low { (high - low) / step } else { 0 };
                Value::from(low + step * rng.gen_range(0..=slots))
            }
        }
    }
}

fn default_step() -> i64 {
    1
}

/// Draw one configuration from a whole search space
pub fn sample_space<R: Rng + ?Sized>(space: &[Params], rng: &mut R) -> Hyperparams {
    space
        .iter()
        .map(|p| (p.name().to_string(), p.sample(rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_categorical_sample() {
        let p = Params::categorical("weights", ["uniform", "distance"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let v = p.sample(&mut rng);
            assert!(p.contains(&v), "sampled {} outside choices", v);
        }
        assert_eq!(p.name(), "weights");
    }

    #[test]
    fn test_empty_categorical_samples_null() {
        let p = Params::Categorical {
            name: "empty".to_string(),
            choices: vec![],
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(p.sample(&mut rng), Value::Null);
    }

    #[test]
    fn test_integer_step_grid() {
        let p = Params::integer_step("depth", 2, 10, 4);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let v = p.sample(&mut rng).as_i64().unwrap();
            assert!([2, 6, 10].contains(&v), "unexpected {}", v);
        }
        assert!(!p.contains(&Value::from(4)));
    }

    #[test]
    fn test_sample_space_keys() {
        let space = vec![
            Params::integer("n_neighbors", 5, 20),
            Params::float("alpha", 0.0, 1.0),
        ];
        let mut rng = StdRng::seed_from_u64(11);
        let sampled = sample_space(&space, &mut rng);

        assert_eq!(sampled.len(), 2);
        assert!(space[0].contains(&sampled["n_neighbors"]));
        assert!(space[1].contains(&sampled["alpha"]));
    }

    #[test]
    fn test_params_yaml() {
        let yaml = r#"
- type: integer
  name: n_neighbors
  low: 5
  high: 20
- type: categorical
  name: weights
  choices: [uniform, distance]
"#;
        let space: Vec<Params> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(space[0], Params::integer("n_neighbors", 5, 20));
        assert_eq!(space[1].name(), "weights");
    }

    proptest! {
        #[test]
        fn prop_float_sample_in_bounds(
            low in -1e6f64..1e6,
            width in 0f64..1e6,
            seed in any::<u64>(),
        ) {
            let p = Params::float("x", low, low + width);
            let mut rng = StdRng::seed_from_u64(seed);
            let v = p.sample(&mut rng);
            prop_assert!(p.contains(&v));
        }

        #[test]
        fn prop_integer_sample_in_bounds(
            low in -1000i64..1000,
            width in 0i64..1000,
            step in 1i64..10,
            seed in any::<u64>(),
        ) {
            let p = Params::integer_step("x", low, low + width, step);
            let mut rng = StdRng::seed_from_u64(seed);
            let v = p.sample(&mut rng);
            prop_assert!(p.contains(&v));
        }
    }
}
