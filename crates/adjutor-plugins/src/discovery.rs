//! Plugin manifest discovery
//!
//! A plugins directory holds YAML manifests named `plugin*.yaml` (or
//! `.yml`). Each manifest enables one compiled-in plugin type and may set
//! default constructor arguments:
//!
//! ```yaml
//! plugin: knn
//! params:
//!   n_neighbors: 7
//! ```

use crate::base::{PluginFamily, PluginType};
use adjutor_core::{Error, Hyperparams, Result};
use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// File names picked up by discovery
pub const PLUGIN_FILE_PATTERN: &str = "plugin*.{yaml,yml}";

/// Contents of one plugin manifest file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginManifest {
    /// Name of the compiled-in plugin type to enable
    pub plugin: String,

    /// Default constructor arguments
    #[serde(default)]
    pub params: Hyperparams,
}

impl PluginManifest {
    /// Parse a manifest from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a manifest file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look the referenced plugin type up in the family catalog
    pub fn resolve<F: PluginFamily + ?Sized>(&self) -> Result<PluginType<F>> {
        F::catalog()
            .into_iter()
            .find(|ty| ty.name() == self.plugin)
            .ok_or_else(|| {
                Error::load(format!(
                    "no {} plugin named '{}' is compiled in",
                    F::KIND,
                    self.plugin
                ))
            })
    }
}

/// A manifest that loaded and validated
#[derive(Debug)]
pub struct DiscoveredPlugin<F: ?Sized> {
    /// Manifest file the plugin was enabled by
    pub path: PathBuf,
    pub plugin_type: PluginType<F>,
    pub defaults: Hyperparams,
}

fn plugin_file_matcher() -> Result<GlobMatcher> {
    Glob::new(PLUGIN_FILE_PATTERN)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::config(format!("invalid plugin file pattern: {}", e)))
}

/// List the manifest files in `dir`, sorted by file name. Not recursive.
///
/// Entries that cannot be read are logged and skipped.
pub fn plugin_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let matcher = plugin_file_matcher()?;
    let entries = std::fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path()));

    Ok(matching_files(entries, &matcher))
}

fn matching_files<I>(entries: I, matcher: &GlobMatcher) -> Vec<PathBuf>
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    let mut files = Vec::new();

    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("skipping unreadable plugin directory entry: {}", e);
                continue;
            }
        };
        let matches = path
            .file_name()
            .map(|name| matcher.is_match(name))
            .unwrap_or(false);

        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files
}

/// Load one manifest: parse it, resolve its plugin type, and build one
/// instance with the default arguments to validate them.
pub fn load_plugin<F: PluginFamily + ?Sized>(path: &Path) -> Result<DiscoveredPlugin<F>> {
    let manifest = PluginManifest::from_file(path)?;
    let plugin_type = manifest.resolve::<F>()?;
    plugin_type.instantiate(&manifest.params)?;

    Ok(DiscoveredPlugin {
        path: path.to_path_buf(),
        plugin_type,
        defaults: manifest.params,
    })
}

/// Load every manifest in `dir`. Files that fail to load are logged and
/// skipped; a missing directory yields nothing.
pub fn discover<F: PluginFamily + ?Sized>(dir: &Path) -> Vec<DiscoveredPlugin<F>> {
    let files = match plugin_files(dir) {
        Ok(files) => files,
        Err(e) => {
            warn!("cannot scan {} plugin directory {}: {}", F::KIND, dir.display(), e);
            return Vec::new();
        }
    };

    files
        .into_iter()
        .filter_map(|path| match load_plugin::<F>(&path) {
            Ok(plugin) => Some(plugin),
            Err(e) => {
                error!("plugin {} load failed: {}", path.display(), e);
                None
            }
        })
        .collect()
}
