//! Name-keyed plugin registry

use crate::base::{PluginFamily, PluginType};
use crate::config::RegistrySettings;
use crate::discovery;
use adjutor_core::{Error, Hyperparams, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where a registry's plugins come from; replayed by [`Registry::reload`]
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    /// Nothing registered up front
    Empty,
    /// The family's compiled-in catalog
    Catalog,
    /// Manifests discovered in a directory
    Directory(PathBuf),
}

struct RegisteredPlugin<F: ?Sized> {
    name: String,
    plugin_type: PluginType<F>,
    defaults: Hyperparams,
}

/// Registry mapping plugin names to plugin types, in insertion order.
///
/// Names are unique. Plugins added with [`add`](Self::add) are dropped by
/// [`reload`](Self::reload), which rebuilds the mapping from its source.
pub struct Registry<F: PluginFamily + ?Sized> {
    plugins: Vec<RegisteredPlugin<F>>,
    source: Source,
}

impl<F: PluginFamily + ?Sized> Registry<F> {
    /// Registry holding every plugin compiled into this crate
    pub fn new() -> Self {
        Self::from_source(Source::Catalog)
    }

    /// Registry with nothing registered
    pub fn empty() -> Self {
        Self::from_source(Source::Empty)
    }

    /// Registry built from the plugin manifests found in `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::from_source(Source::Directory(dir.as_ref().to_path_buf()))
    }

    /// Registry built from this family's directory under the configured plugins root
    pub fn from_settings(settings: &RegistrySettings) -> Self {
        Self::from_dir(settings.dir_for::<F>())
    }

    fn from_source(source: Source) -> Self {
        let mut registry = Self {
            plugins: Vec::new(),
            source,
        };
        registry.load_default_plugins();
        registry
    }

    fn load_default_plugins(&mut self) {
        match self.source.clone() {
            Source::Empty => {}
            Source::Catalog => {
                for plugin_type in F::catalog() {
                    self.register(plugin_type.name(), plugin_type, Hyperparams::new());
                }
            }
            Source::Directory(dir) => {
                for found in discovery::discover::<F>(&dir) {
                    let name = found.plugin_type.name();
                    debug!(
                        "Loaded plugin {} - {} from {}",
                        found.plugin_type.kind(),
                        name,
                        found.path.display()
                    );
                    self.register(name, found.plugin_type, found.defaults);
                }
            }
        }

        info!("{} registry holds {} plugins", F::KIND, self.plugins.len());
    }

    fn register(&mut self, name: &str, plugin_type: PluginType<F>, defaults: Hyperparams) {
        if let Err(e) = self.insert(name, plugin_type, defaults) {
            warn!("skipping {} plugin: {}", F::KIND, e);
        }
    }

    fn insert(
        &mut self,
        name: &str,
        plugin_type: PluginType<F>,
        defaults: Hyperparams,
    ) -> Result<()> {
        if self.contains(name) {
            return Err(Error::DuplicatePlugin(name.to_string()));
        }

        self.plugins.push(RegisteredPlugin {
            name: name.to_string(),
            plugin_type,
            defaults,
        });
        Ok(())
    }

    fn entry(&self, name: &str) -> Result<&RegisteredPlugin<F>> {
        self.plugins
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownPlugin(name.to_string()))
    }

    /// Registered names
    pub fn list(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Registered plugin types
    pub fn types(&self) -> Vec<&PluginType<F>> {
        self.plugins.iter().map(|p| &p.plugin_type).collect()
    }

    /// Register `plugin_type` under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicatePlugin`] if `name` is already registered.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        plugin_type: PluginType<F>,
    ) -> Result<&mut Self> {
        let name = name.into();
        self.insert(&name, plugin_type, Hyperparams::new())?;
        Ok(self)
    }

    /// Construct a new instance of the plugin registered under `name`.
    ///
    /// Defaults from the plugin's manifest apply unless `params` overrides them.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPlugin`] if `name` is not registered, or whatever the
    /// plugin's constructor rejects.
    pub fn get(&self, name: &str, params: &Hyperparams) -> Result<Box<F>> {
        let entry = self.entry(name)?;

        let mut merged = entry.defaults.clone();
        for (key, value) in params {
            merged.insert(key.clone(), value.clone());
        }

        entry.plugin_type.instantiate(&merged)
    }

    /// The plugin type registered under `name`
    pub fn get_type(&self, name: &str) -> Result<&PluginType<F>> {
        Ok(&self.entry(name)?.plugin_type)
    }

    /// Clear the mapping and rebuild it from the original source
    pub fn reload(&mut self) -> &mut Self {
        self.plugins.clear();
        self.load_default_plugins();
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Iterate over registered names
    pub fn iter(&self) -> Names<'_, F> {
        Names {
            inner: self.plugins.iter(),
        }
    }
}

impl<F: PluginFamily + ?Sized> Default for Registry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PluginFamily + ?Sized> fmt::Debug for Registry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &F::KIND)
            .field("plugins", &self.list())
            .field("source", &self.source)
            .finish()
    }
}

/// Iterator over the names in a [`Registry`]
pub struct Names<'a, F: ?Sized> {
    inner: std::slice::Iter<'a, RegisteredPlugin<F>>,
}

impl<'a, F: ?Sized> Iterator for Names<'a, F> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| p.name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, F: PluginFamily + ?Sized> IntoIterator for &'a Registry<F> {
    type Item = &'a str;
    type IntoIter = Names<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
