//! Classification plugins

pub mod knn;

pub use knn::KnnPlugin;

use crate::base::{ClassifierPlugin, PluginFamily, PluginType};
use crate::registry::Registry;

/// Registry of classification plugins
pub type Classifiers = Registry<dyn ClassifierPlugin>;

impl PluginFamily for dyn ClassifierPlugin {
    const KIND: &'static str = "classifier";
    const DIR: &'static str = "classifiers";

    fn catalog() -> Vec<PluginType<Self>> {
        vec![PluginType::of::<KnnPlugin>()]
    }
}
