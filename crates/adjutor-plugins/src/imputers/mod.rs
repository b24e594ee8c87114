//! Imputation plugins

pub mod median;

pub use median::MedianPlugin;

use crate::base::{ImputerPlugin, PluginFamily, PluginType};
use crate::registry::Registry;

/// Registry of imputation plugins
pub type Imputers = Registry<dyn ImputerPlugin>;

impl PluginFamily for dyn ImputerPlugin {
    const KIND: &'static str = "imputer";
    const DIR: &'static str = "imputers";

    fn catalog() -> Vec<PluginType<Self>> {
        vec![PluginType::of::<MedianPlugin>()]
    }
}
