//! Plugin traits and plugin type descriptors

use adjutor_core::{sample_space, Hyperparams, Matrix, Params, Result};
use rand::Rng;
use std::fmt;

/// Behaviour shared by every plugin instance
pub trait Plugin: Send + Sync {
    /// Registered name of the plugin
    fn name(&self) -> &'static str;

    /// Plugin family (`imputer`, `classifier`)
    fn plugin_type(&self) -> &'static str;

    /// Tunable constructor arguments
    fn hyperparameter_space(&self) -> Vec<Params>;
}

/// Plugins that fill missing values
pub trait ImputerPlugin: Plugin {
    /// Learn imputation statistics from `x`
    fn fit(&mut self, x: &Matrix) -> Result<()>;

    /// Return a copy of `x` with missing values filled
    fn transform(&self, x: &Matrix) -> Result<Matrix>;

    fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Plugins that predict class labels
pub trait ClassifierPlugin: Plugin {
    /// Train on features `x` and labels `y`
    fn fit(&mut self, x: &Matrix, y: &[i64]) -> Result<()>;

    /// Predicted label per row of `x`
    fn predict(&self, x: &Matrix) -> Result<Vec<i64>>;

    /// Class probabilities per row of `x`
    fn predict_proba(&self, x: &Matrix) -> Result<Matrix>;

    fn fit_predict(&mut self, x: &Matrix, y: &[i64]) -> Result<Vec<i64>> {
        self.fit(x, y)?;
        self.predict(x)
    }
}

/// Static side of a plugin: what the registry needs before any instance exists.
///
/// `P` is the family's trait object, so a type can only be registered in a
/// family whose interface it implements.
pub trait PluginSpec<P: ?Sized> {
    fn name() -> &'static str;

    fn hyperparameter_space() -> Vec<Params>;

    /// Construct an instance from keyword arguments
    fn build(params: &Hyperparams) -> Result<Box<P>>;
}

/// A family of plugins sharing one interface (implemented for the trait objects)
pub trait PluginFamily {
    /// Family label reported by `Plugin::plugin_type`
    const KIND: &'static str;

    /// Sub-directory of the plugins root scanned for this family
    const DIR: &'static str;

    /// Plugin types compiled into this crate
    fn catalog() -> Vec<PluginType<Self>>;
}

/// Descriptor for a registrable plugin type
pub struct PluginType<P: ?Sized> {
    name: &'static str,
    kind: &'static str,
    hyperparameter_space: fn() -> Vec<Params>,
    build: fn(&Hyperparams) -> Result<Box<P>>,
}

impl<F: PluginFamily + ?Sized> PluginType<F> {
    /// Descriptor for plugin type `T`
    pub fn of<T: PluginSpec<F>>() -> Self {
        Self {
            name: T::name(),
            kind: F::KIND,
            hyperparameter_space: T::hyperparameter_space,
            build: T::build,
        }
    }
}

impl<P: ?Sized> PluginType<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn hyperparameter_space(&self) -> Vec<Params> {
        (self.hyperparameter_space)()
    }

    /// Construct a new instance
    pub fn instantiate(&self, params: &Hyperparams) -> Result<Box<P>> {
        (self.build)(params)
    }

    /// Draw one set of constructor arguments from the hyperparameter space
    pub fn sample_hyperparameters<R: Rng + ?Sized>(&self, rng: &mut R) -> Hyperparams {
        sample_space(&self.hyperparameter_space(), rng)
    }
}

impl<P: ?Sized> Clone for PluginType<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for PluginType<P> {}

impl<P: ?Sized> fmt::Debug for PluginType<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginType")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
