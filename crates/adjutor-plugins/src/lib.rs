//! Adjutor Plugins
//!
//! Name-keyed registries of imputation and classification plugins.
//!
//! Each plugin adapts one model from `adjutor-models` to a common
//! interface ([`ImputerPlugin`], [`ClassifierPlugin`]). A registry is filled
//! either from the plugin types compiled into this crate or by discovering
//! `plugin*.yaml` manifests in a directory, each of which enables one of
//! those types with optional default arguments.
//!
//! ```
//! use adjutor_core::Hyperparams;
//! use adjutor_plugins::prelude::*;
//!
//! let imputers = Imputers::new();
//! assert_eq!(imputers.list(), vec!["median"]);
//!
//! let plugin = imputers.get("median", &Hyperparams::new()).unwrap();
//! assert_eq!(plugin.name(), "median");
//! ```

pub mod base;
pub mod classifiers;
pub mod config;
pub mod discovery;
pub mod imputers;
pub mod registry;

pub use base::{ClassifierPlugin, ImputerPlugin, Plugin, PluginFamily, PluginSpec, PluginType};
pub use classifiers::{Classifiers, KnnPlugin};
pub use config::RegistrySettings;
pub use discovery::{PluginManifest, PLUGIN_FILE_PATTERN};
pub use imputers::{Imputers, MedianPlugin};
pub use registry::{Names, Registry};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::base::{ClassifierPlugin, ImputerPlugin, Plugin, PluginType};
    pub use crate::classifiers::Classifiers;
    pub use crate::config::RegistrySettings;
    pub use crate::imputers::Imputers;
}
